//! Fixed-rate tick scheduling
//!
//! The host reports real elapsed time; the clock answers how many whole
//! simulation ticks are due. Backlog beyond `MAX_SUBSTEPS` is dropped.

use crate::consts::MAX_SUBSTEPS;

/// Longest frame the clock will account for, in seconds
const MAX_FRAME_TIME: f32 = 0.25;

/// Accumulator-based fixed timestep clock
#[derive(Debug, Clone)]
pub struct FixedClock {
    /// Seconds per tick
    step: f32,
    accumulator: f32,
}

impl FixedClock {
    /// Clock firing `tick_rate` times per second (must be positive)
    pub fn new(tick_rate: f32) -> Self {
        Self {
            step: 1.0 / tick_rate,
            accumulator: 0.0,
        }
    }

    /// Seconds per tick
    pub fn step(&self) -> f32 {
        self.step
    }

    /// Add `elapsed` seconds and return the number of ticks to run now
    pub fn advance(&mut self, elapsed: f32) -> u32 {
        self.accumulator += elapsed.clamp(0.0, MAX_FRAME_TIME);

        let mut due = 0;
        while self.accumulator >= self.step && due < MAX_SUBSTEPS {
            self.accumulator -= self.step;
            due += 1;
        }

        // Drop the backlog rather than letting it snowball
        if self.accumulator >= self.step {
            let dropped = (self.accumulator / self.step).floor();
            log::warn!("Clock behind, dropping {} ticks", dropped);
            // fmod is exact, so the remainder stays in [0, step)
            self.accumulator %= self.step;
        }
        due
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_exact_ticks() {
        let mut clock = FixedClock::new(30.0);
        assert_eq!(clock.advance(0.0), 0);
        assert_eq!(clock.advance(0.5 / 30.0), 0);
        assert_eq!(clock.advance(0.6 / 30.0), 1);
        // 0.1 of a tick carried over
        assert_eq!(clock.advance(0.8 / 30.0), 0);
        assert_eq!(clock.advance(0.2 / 30.0), 1);
    }

    #[test]
    fn test_several_ticks_in_one_frame() {
        let mut clock = FixedClock::new(30.0);
        assert_eq!(clock.advance(3.5 / 30.0), 3);
        assert_eq!(clock.advance(0.4 / 30.0), 0);
        assert_eq!(clock.advance(0.2 / 30.0), 1);
    }

    #[test]
    fn test_backlog_dropped() {
        let mut clock = FixedClock::new(100.0);
        // 0.25 s clamp = 25 ticks due, MAX_SUBSTEPS run, rest dropped
        assert_eq!(clock.advance(10.0), MAX_SUBSTEPS);
        assert_eq!(clock.advance(0.0), 0);
    }

    #[test]
    fn test_backlog_drop_never_leaves_debt() {
        let mut clock = FixedClock::new(144.0);
        assert_eq!(clock.advance(10.0), MAX_SUBSTEPS);
        // A full tick of time must always yield a tick after a drop
        assert!((0.0..clock.step()).contains(&clock.accumulator));
        assert_eq!(clock.advance(clock.step()), 1);
    }

    #[test]
    fn test_negative_elapsed_ignored() {
        let mut clock = FixedClock::new(30.0);
        assert_eq!(clock.advance(-1.0), 0);
        assert_eq!(clock.accumulator, 0.0);
        assert_eq!(clock.advance(1.1 / 30.0), 1);
    }
}
