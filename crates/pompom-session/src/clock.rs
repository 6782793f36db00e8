//! Wall-clock to tick conversion
//!
//! The engine only understands whole ticks. `TickClock` accumulates elapsed
//! milliseconds, scaled by the game speed, and hands out whole ticks. The
//! remainder carries over to the next frame, so tick counts do not depend on
//! the frame rate.

use pompom_core::{Speed, Tick};

/// Milliseconds since the Unix epoch, for save metadata
pub fn wall_clock_ms() -> i64 {
    chrono::Utc::now().timestamp_millis()
}

/// Fixed-step accumulator
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TickClock {
    tick_ms: u64,
    accumulator: u64,
}

impl TickClock {
    /// Create a clock emitting one tick per `tick_ms` (at 1x)
    pub fn new(tick_ms: u64) -> Self {
        Self {
            tick_ms: tick_ms.max(1),
            accumulator: 0,
        }
    }

    /// Feed elapsed time and return the number of whole ticks due.
    ///
    /// While paused nothing accumulates and any partial tick is discarded.
    pub fn advance(&mut self, delta_ms: u64, speed: Speed, paused: bool) -> Tick {
        if paused {
            self.accumulator = 0;
            return 0;
        }

        self.accumulator = self
            .accumulator
            .saturating_add(delta_ms.saturating_mul(speed.factor()));
        let ticks = self.accumulator / self.tick_ms;
        self.accumulator %= self.tick_ms;
        ticks
    }

    /// Drop any partial tick
    pub fn reset(&mut self) {
        self.accumulator = 0;
    }

    /// Milliseconds accumulated toward the next tick
    pub fn pending_ms(&self) -> u64 {
        self.accumulator
    }

    pub fn tick_ms(&self) -> u64 {
        self.tick_ms
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_whole_ticks_carry_remainder() {
        let mut clock = TickClock::new(1000);
        assert_eq!(clock.advance(400, Speed::Normal, false), 0);
        assert_eq!(clock.advance(700, Speed::Normal, false), 1);
        assert_eq!(clock.pending_ms(), 100);
        assert_eq!(clock.advance(2900, Speed::Normal, false), 3);
        assert_eq!(clock.pending_ms(), 0);
    }

    #[test]
    fn test_frame_rate_independent() {
        let mut coarse = TickClock::new(1000);
        let mut fine = TickClock::new(1000);

        let coarse_ticks = coarse.advance(10_000, Speed::Normal, false);
        let fine_ticks: Tick = (0..625).map(|_| fine.advance(16, Speed::Normal, false)).sum();

        assert_eq!(coarse_ticks, 10);
        assert_eq!(fine_ticks, 10);
    }

    #[test]
    fn test_double_speed() {
        let mut clock = TickClock::new(1000);
        assert_eq!(clock.advance(1500, Speed::Double, false), 3);
    }

    #[test]
    fn test_pause_discards_partial_tick() {
        let mut clock = TickClock::new(1000);
        clock.advance(900, Speed::Normal, false);
        assert_eq!(clock.advance(5000, Speed::Normal, true), 0);
        assert_eq!(clock.pending_ms(), 0);
        assert_eq!(clock.advance(900, Speed::Normal, false), 0);
    }

    #[test]
    fn test_zero_tick_length_is_clamped() {
        let clock = TickClock::new(0);
        assert_eq!(clock.tick_ms(), 1);
    }
}
