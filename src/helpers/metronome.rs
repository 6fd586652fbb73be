use std::{
    thread::sleep,
    time::{Duration, Instant},
};

/// Paces the synchronization tick at a fixed rate, regardless of how long each tick's work takes.
pub struct Metronome {
    /// When the metronome was created, used for elapsed session time
    started: Instant,
    /// The scheduled start of the current tick. Advanced by exactly one period each on-time tick so
    /// the schedule doesn't drift.
    tick_start: Instant,
    /// Length of one tick
    period: Duration,
    /// Every call to wait() sleeps at least this long, even when the tick ran over budget
    min_sleep: Duration,
    /// Number of completed ticks
    ticks: u64,
}

impl Metronome {
    /// - tick_rate: ticks per second, must be positive
    /// - min_sleep: minimum seconds each wait() sleeps for
    pub fn new(tick_rate: f64, min_sleep: f64) -> Self {
        assert!(tick_rate > 0.0);
        assert!(min_sleep >= 0.0);
        let now = Instant::now();
        Self {
            started: now,
            tick_start: now,
            period: Duration::from_secs_f64(1.0 / tick_rate),
            min_sleep: Duration::from_secs_f64(min_sleep),
            ticks: 0,
        }
    }

    pub fn period(&self) -> Duration {
        self.period
    }

    pub fn ticks(&self) -> u64 {
        self.ticks
    }

    /// Wall time since the metronome was created
    pub fn elapsed(&self) -> Duration {
        self.started.elapsed()
    }

    /// Sleeps until the next tick is due. Returns false if the tick ran too long to honor
    /// min_sleep, in which case the schedule is reset to now instead of trying to catch up.
    pub fn wait(&mut self) -> bool {
        self.ticks += 1;
        let used = self.tick_start.elapsed();
        match self.period.checked_sub(used) {
            Some(remaining) if remaining >= self.min_sleep => {
                sleep(remaining);
                self.tick_start += self.period;
                true
            }
            _ => {
                trace!(
                    "tick {} took {:?}, period is {:?}",
                    self.ticks,
                    used,
                    self.period
                );
                if !self.min_sleep.is_zero() {
                    sleep(self.min_sleep);
                }
                self.tick_start = Instant::now();
                false
            }
        }
    }
}
