use std::sync::Arc;

use foundation::{Year, YearDomain};
use parking_lot::Mutex;
use tokio::sync::{mpsc, watch};

use crate::cursor::{CursorInputError, TimeCursor};
use crate::speed::AnimationSpeed;

struct ControllerInner {
    cursor: TimeCursor,
    /// Cancellation channel of the active loop; `Some` only while running.
    cancel: Option<watch::Sender<bool>>,
    /// Incremented on every `play` so a superseded loop can tell it no
    /// longer owns the cursor.
    generation: u64,
}

/// Drives the year cursor on a fixed cadence.
///
/// Guarantees:
/// - At most one stepping loop exists at a time; `play` while running is a
///   no-op (the `Idle`/`Running` gate and the loop state live under one
///   lock).
/// - Every cursor value is sent to the tick channel in increasing order
///   before the next wait begins; nothing is skipped except the final clamp
///   to the domain end.
/// - `stop` takes effect immediately: the in-flight wait is interrupted
///   rather than allowed to elapse, and no further values are emitted.
pub struct AnimationController {
    inner: Arc<Mutex<ControllerInner>>,
    ticks: mpsc::Sender<Year>,
}

impl AnimationController {
    /// Creates a controller and the receiving end of its tick stream. Must
    /// be used from within a tokio runtime; `play` spawns the step loop.
    pub fn new(domain: YearDomain) -> (Self, mpsc::Receiver<Year>) {
        let (ticks, rx) = mpsc::channel(256);
        let controller = Self {
            inner: Arc::new(Mutex::new(ControllerInner {
                cursor: TimeCursor::new(domain),
                cancel: None,
                generation: 0,
            })),
            ticks,
        };
        (controller, rx)
    }

    pub fn year(&self) -> Year {
        self.inner.lock().cursor.year()
    }

    pub fn is_running(&self) -> bool {
        self.inner.lock().cursor.is_running()
    }

    /// Manual cursor edit; rejected while an animation is running or for
    /// out-of-domain years.
    pub fn set_year(&self, year: Year) -> Result<(), CursorInputError> {
        self.inner.lock().cursor.set_year(year)
    }

    /// Starts the stepping loop from the current cursor year. Returns
    /// `false` (and does nothing) if a loop is already running.
    pub fn play(&self, speed: AnimationSpeed) -> bool {
        let mut inner = self.inner.lock();
        if !inner.cursor.begin() {
            return false;
        }
        inner.generation = inner.generation.wrapping_add(1);
        let generation = inner.generation;
        let (cancel_tx, cancel_rx) = watch::channel(false);
        inner.cancel = Some(cancel_tx);
        drop(inner);

        let inner = Arc::clone(&self.inner);
        let ticks = self.ticks.clone();
        tokio::spawn(step_loop(inner, ticks, speed, cancel_rx, generation));
        true
    }

    /// Stops any active animation. Allowed from any state; interrupts the
    /// in-flight wait.
    pub fn stop(&self) {
        let mut inner = self.inner.lock();
        inner.cursor.finish();
        if let Some(cancel) = inner.cancel.take() {
            let _ = cancel.send(true);
        }
    }
}

async fn step_loop(
    inner: Arc<Mutex<ControllerInner>>,
    ticks: mpsc::Sender<Year>,
    speed: AnimationSpeed,
    mut cancel: watch::Receiver<bool>,
    generation: u64,
) {
    loop {
        let (year, at_end) = {
            let guard = inner.lock();
            if guard.generation != generation || !guard.cursor.is_running() {
                break;
            }
            (guard.cursor.year(), guard.cursor.at_end())
        };

        // Emit before the next wait begins.
        if ticks.send(year).await.is_err() {
            break;
        }
        if at_end {
            break;
        }

        tokio::select! {
            _ = tokio::time::sleep(speed.step_delay()) => {}
            _ = cancel.changed() => break,
        }

        let mut guard = inner.lock();
        if guard.generation != generation || !guard.cursor.is_running() {
            break;
        }
        guard.cursor.advance();
    }

    // Clean up only if no newer play superseded this loop.
    let mut guard = inner.lock();
    if guard.generation == generation {
        guard.cursor.finish();
        guard.cancel = None;
    }
}
