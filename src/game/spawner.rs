//! Elapsed-time gates for entity factories.

/// Fires once every `interval_ms`, measured against the frame timestamp.
#[derive(Clone, Copy, Debug)]
pub struct SpawnTimer {
    interval_ms: f64,
    last_ms: f64,
}

impl SpawnTimer {
    pub fn new(interval_ms: f64) -> Self {
        Self { interval_ms, last_ms: 0.0 }
    }

    /// True when strictly more than the interval has passed since the last
    /// firing; a firing re-arms the timer at `now`.
    pub fn ready(&mut self, now: f64) -> bool {
        if now - self.last_ms > self.interval_ms {
            self.last_ms = now;
            true
        } else {
            false
        }
    }

    pub fn last_ms(&self) -> f64 {
        self.last_ms
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fires_only_after_interval() {
        let mut t = SpawnTimer::new(1500.0);
        assert!(!t.ready(1500.0));
        assert!(t.ready(1500.5));
        assert!(!t.ready(2999.0));
        assert!(t.ready(3001.0));
        assert_eq!(t.last_ms(), 3001.0);
    }

    #[test]
    fn long_gap_fires_once() {
        let mut t = SpawnTimer::new(250.0);
        assert!(t.ready(10_000.0));
        assert!(!t.ready(10_016.0));
    }
}
