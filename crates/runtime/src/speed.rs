use std::time::Duration;

/// Animation speed presets mapped to fixed per-step delays.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum AnimationSpeed {
    Slow,
    Normal,
    Fast,
}

impl AnimationSpeed {
    pub fn step_delay(self) -> Duration {
        match self {
            AnimationSpeed::Slow => Duration::from_millis(700),
            AnimationSpeed::Normal => Duration::from_millis(300),
            AnimationSpeed::Fast => Duration::from_millis(100),
        }
    }

    pub fn from_name(name: &str) -> Option<Self> {
        match name.to_ascii_lowercase().as_str() {
            "slow" => Some(AnimationSpeed::Slow),
            "normal" => Some(AnimationSpeed::Normal),
            "fast" => Some(AnimationSpeed::Fast),
            _ => None,
        }
    }
}

impl Default for AnimationSpeed {
    fn default() -> Self {
        AnimationSpeed::Normal
    }
}
