/// Fixed-interval spawn timer.
///
/// The timer does not spawn anything itself: `poll` reports whether an
/// interval elapsed and the caller decides whether the game is in a state
/// to accept an enemy.  A stopped timer never fires.  Starting always
/// replaces the previous timer, so at most one is ever live.

use std::time::Duration;

use tracing::debug;

#[derive(Clone, Debug)]
struct Timer {
    interval: Duration,
    /// Time accumulated toward the next firing.
    elapsed: Duration,
}

#[derive(Clone, Debug, Default)]
pub struct Spawner {
    timer: Option<Timer>,
    /// Bumped on every start; lets tests and logs tell timers apart.
    generation: u64,
}

impl Spawner {
    pub fn new() -> Self {
        Self::default()
    }

    /// Cancel any running timer, then begin a fresh one.
    pub fn start(&mut self, interval: Duration) {
        self.stop();
        self.generation += 1;
        debug!(generation = self.generation, ?interval, "spawner started");
        self.timer = Some(Timer {
            interval,
            elapsed: Duration::ZERO,
        });
    }

    /// Idempotent.
    pub fn stop(&mut self) {
        if self.timer.take().is_some() {
            debug!(generation = self.generation, "spawner stopped");
        }
    }

    pub fn is_running(&self) -> bool {
        self.timer.is_some()
    }

    pub fn generation(&self) -> u64 {
        self.generation
    }

    /// Advance wall-clock time and report whether an interval completed
    /// during `delta`.  At most one firing per call: intervals missed during
    /// a long gap are dropped rather than spawned together.
    pub fn poll(&mut self, delta: Duration) -> bool {
        let Some(timer) = self.timer.as_mut() else {
            return false;
        };
        if timer.interval.is_zero() {
            return false;
        }
        timer.elapsed += delta;
        if timer.elapsed < timer.interval {
            return false;
        }
        let mut missed = 0u32;
        while timer.elapsed >= timer.interval {
            timer.elapsed -= timer.interval;
            missed += 1;
        }
        if missed > 1 {
            debug!(
                generation = self.generation,
                dropped = missed - 1,
                "spawner skipped intervals"
            );
        }
        true
    }
}
