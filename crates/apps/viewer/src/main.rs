use std::env;

use foundation::YearDomain;
use layers::{MapStyle, ViewOptions};
use runtime::{AnimationController, AnimationSpeed};
use tracing::info;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    if let Err(e) = run().await {
        eprintln!("error: {e}");
        std::process::exit(1);
    }
}

async fn run() -> Result<(), Box<dyn std::error::Error>> {
    let data_dir = env::var("TIMESCAPE_DATA_DIR").unwrap_or_else(|_| ".".to_string());
    let style = env::var("TIMESCAPE_STYLE")
        .ok()
        .and_then(|s| MapStyle::from_name(&s))
        .unwrap_or(MapStyle::Light);
    let speed = env::var("TIMESCAPE_SPEED")
        .ok()
        .and_then(|s| AnimationSpeed::from_name(&s))
        .unwrap_or_default();
    let show_heatmap = env::var("TIMESCAPE_HEATMAP")
        .map(|v| v != "0" && !v.eq_ignore_ascii_case("off"))
        .unwrap_or(true);

    let registry = catalog::discover(&data_dir)?;
    if !registry.skipped.is_empty() {
        info!(
            skipped = registry.skipped.len(),
            "some datasets were skipped; see warnings above"
        );
    }
    if registry.is_empty() {
        return Err(format!("no datasets found under {data_dir}").into());
    }

    let selected = match env::var("TIMESCAPE_CITY") {
        Ok(name) => name,
        Err(_) => registry.city_names()[0].to_string(),
    };
    let city = registry.get(&selected).ok_or_else(|| {
        format!(
            "unknown city: {selected} (available: {})",
            registry.city_names().join(", ")
        )
    })?;

    info!(
        city = %city.name,
        buildings = city.buildings.len(),
        "starting animation"
    );

    let domain = YearDomain::default();
    let options = ViewOptions { style, show_heatmap };
    let (controller, mut ticks) = AnimationController::new(domain);
    controller.play(speed);

    // One layer stack per cursor tick; stdout is the renderer hand-off.
    while let Some(year) = ticks.recv().await {
        let stack = layers::build(city, year, &options);
        println!("{}", serde_json::to_string(&stack)?);
        if year >= domain.max {
            break;
        }
    }

    info!("animation complete");
    Ok(())
}
