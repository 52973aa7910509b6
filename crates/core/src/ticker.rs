//! Second-granularity tick accumulator for the timer driver.
//!
//! The event loop feeds it wall-clock elapsed milliseconds; it answers how
//! many whole one-second ticks to apply. Resetting discards any accumulated
//! backlog, which is how a session that left the playing state avoids
//! catch-up ticks on resume.

use goods_sort_types::TICK_MS;

#[derive(Debug, Clone, Default)]
pub struct SecondTicker {
    carry_ms: u64,
}

impl SecondTicker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Account for `elapsed_ms` and return the number of whole seconds due
    pub fn advance(&mut self, elapsed_ms: u64) -> u32 {
        self.carry_ms += elapsed_ms;
        let ticks = self.carry_ms / TICK_MS;
        self.carry_ms %= TICK_MS;
        ticks as u32
    }

    /// Drop any partial second accumulated so far
    pub fn reset(&mut self) {
        self.carry_ms = 0;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sub_second_accumulates() {
        let mut ticker = SecondTicker::new();
        assert_eq!(ticker.advance(400), 0);
        assert_eq!(ticker.advance(400), 0);
        assert_eq!(ticker.advance(400), 1);
    }

    #[test]
    fn test_long_gap_yields_multiple_ticks() {
        let mut ticker = SecondTicker::new();
        assert_eq!(ticker.advance(3_250), 3);
        assert_eq!(ticker.advance(750), 1);
    }

    #[test]
    fn test_reset_discards_backlog() {
        let mut ticker = SecondTicker::new();
        ticker.advance(900);
        ticker.reset();
        assert_eq!(ticker.advance(200), 0);
    }
}
