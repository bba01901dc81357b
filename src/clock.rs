use std::time::Duration;

const SECOND: Duration = Duration::from_secs(1);

/// Whole seconds of play, accumulated from arbitrary tick lengths
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MatchClock {
    elapsed_secs: u64,
    carry: Duration,
}

impl MatchClock {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn reset(&mut self) {
        self.elapsed_secs = 0;
        self.carry = Duration::ZERO;
    }

    pub fn elapsed_secs(&self) -> u64 {
        self.elapsed_secs
    }

    /// Add `dt` of running time. Returns how many whole seconds ticked over.
    pub fn advance(&mut self, dt: Duration) -> u64 {
        self.carry += dt;
        let mut ticked = 0;
        while self.carry >= SECOND {
            self.carry -= SECOND;
            ticked += 1;
        }
        self.elapsed_secs += ticked;
        ticked
    }
}

/// `mm:ss`, minutes keep growing past 99
pub fn format_time(secs: u64) -> String {
    format!("{:02}:{:02}", secs / 60, secs % 60)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_accumulates_partial_ticks() {
        let mut clock = MatchClock::new();
        for _ in 0..9 {
            assert_eq!(clock.advance(Duration::from_millis(100)), 0);
        }
        assert_eq!(clock.elapsed_secs(), 0);
        assert_eq!(clock.advance(Duration::from_millis(100)), 1);
        assert_eq!(clock.elapsed_secs(), 1);
    }

    #[test]
    fn test_large_step_ticks_many() {
        let mut clock = MatchClock::new();
        assert_eq!(clock.advance(Duration::from_millis(3500)), 3);
        assert_eq!(clock.advance(Duration::from_millis(500)), 1);
        assert_eq!(clock.elapsed_secs(), 4);
    }

    #[test]
    fn test_reset_drops_carry() {
        let mut clock = MatchClock::new();
        clock.advance(Duration::from_millis(1900));
        clock.reset();
        assert_eq!(clock.elapsed_secs(), 0);
        assert_eq!(clock.advance(Duration::from_millis(200)), 0);
    }

    #[test]
    fn test_format_time() {
        assert_eq!(format_time(0), "00:00");
        assert_eq!(format_time(59), "00:59");
        assert_eq!(format_time(61), "01:01");
        assert_eq!(format_time(6000), "100:00");
    }
}
