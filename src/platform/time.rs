//! Frame timing

use std::time::{Duration, Instant};

/// Measures the time between frames. Reset it whenever gameplay (re)starts so
/// time spent on a menu or paused never reaches the simulation.
#[derive(Debug, Clone)]
pub struct FrameClock {
    last: Instant,
    max_dt: f32,
}

impl FrameClock {
    pub fn new(max_dt: f32) -> Self {
        Self {
            last: Instant::now(),
            max_dt,
        }
    }

    /// Restart the reference point
    pub fn reset(&mut self) {
        self.last = Instant::now();
    }

    /// Seconds since the previous call (or reset), capped at `max_dt`
    pub fn delta(&mut self) -> f32 {
        let now = Instant::now();
        let elapsed = now.duration_since(self.last);
        self.last = now;
        clamp_delta(elapsed, self.max_dt)
    }
}

/// Convert an elapsed duration into a tick delta
pub fn clamp_delta(elapsed: Duration, max_dt: f32) -> f32 {
    elapsed.as_secs_f32().min(max_dt)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_clamp_delta() {
        assert!((clamp_delta(Duration::from_millis(16), 0.1) - 0.016).abs() < 1e-6);
        assert_eq!(clamp_delta(Duration::from_secs(3), 0.1), 0.1);
        assert_eq!(clamp_delta(Duration::ZERO, 0.1), 0.0);
    }

    #[test]
    fn test_delta_after_reset_is_small() {
        let mut clock = FrameClock::new(0.1);
        clock.reset();
        let dt = clock.delta();
        assert!((0.0..=0.1).contains(&dt));
    }
}
