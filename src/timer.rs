use std::time::{Duration, Instant};

/// Source of timestamps for [`Timer`] readings.
pub trait Clock {
    fn now(&self) -> Instant;
}

pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> Instant {
        Instant::now()
    }
}

/// Start/stop pair that never yields a negative duration, even when the
/// readings it is fed go backwards.
#[derive(Debug, Copy, Clone)]
pub struct Timer {
    start: Instant,
    stop: Instant,
    elapsed: Duration,
}

impl Timer {
    pub fn new(baseline: Instant) -> Self {
        Self {
            start: baseline,
            stop: baseline,
            elapsed: Duration::ZERO,
        }
    }

    // Start only ever moves forward.
    pub fn start(&mut self, reading: Instant) {
        if reading > self.start {
            self.start = reading;
        }
    }

    // Stop is clamped to start.
    pub fn stop(&mut self, reading: Instant) {
        self.stop = reading.max(self.start);
        self.elapsed = self.stop - self.start;
    }

    #[must_use]
    pub fn started_at(&self) -> Instant {
        self.start
    }

    #[must_use]
    pub fn stopped_at(&self) -> Instant {
        self.stop
    }

    #[must_use]
    pub fn elapsed(&self) -> Duration {
        self.elapsed
    }
}
