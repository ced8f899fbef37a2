use std::time::{Duration, Instant};

const DT_MIN: Duration = Duration::from_micros(100);
const DT_MAX: Duration = Duration::from_millis(250);

#[derive(Debug, Copy, Clone)]
pub struct FrameTime {
    /// Seconds since the previous tick, clamped to 0.1 ms ..= 250 ms.
    pub dt: f32,
}

/// Measures the wall-clock gap between frames.
#[derive(Debug, Clone)]
pub struct FrameClock {
    last: Instant,
}

impl FrameClock {
    pub fn new() -> Self {
        Self {
            last: Instant::now(),
        }
    }

    pub fn tick(&mut self) -> FrameTime {
        self.tick_at(Instant::now())
    }

    fn tick_at(&mut self, now: Instant) -> FrameTime {
        let dt = now.saturating_duration_since(self.last).clamp(DT_MIN, DT_MAX);
        self.last = now;
        FrameTime {
            dt: dt.as_secs_f32(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn long_stall_is_clamped() {
        let mut clock = FrameClock::new();
        let later = clock.last + Duration::from_secs(3);
        assert!((clock.tick_at(later).dt - 0.25).abs() < 1e-6);
    }

    #[test]
    fn zero_interval_is_raised_to_minimum() {
        let mut clock = FrameClock::new();
        let same = clock.last;
        assert!((clock.tick_at(same).dt - 0.0001).abs() < 1e-7);
    }

    #[test]
    fn ordinary_frame_passes_through() {
        let mut clock = FrameClock::new();
        let start = clock.last;
        clock.tick_at(start + Duration::from_millis(16));
        let ft = clock.tick_at(start + Duration::from_millis(32));
        assert!((ft.dt - 0.016).abs() < 1e-6);
    }
}
