//! Frame clocks

use std::time::Instant;

use super::Clock;
use crate::consts::MAX_FRAME_DT;

/// Constant delta per frame (headless runs, tests)
#[derive(Debug, Clone, Copy)]
pub struct FixedClock {
    dt: f32,
}

impl FixedClock {
    pub fn new(dt: f32) -> Self {
        Self { dt: dt.max(0.0) }
    }

    /// Clock ticking at `rate` frames per second
    pub fn from_rate(rate: u32) -> Self {
        Self::new(1.0 / rate.max(1) as f32)
    }

    pub fn dt(&self) -> f32 {
        self.dt
    }
}

impl Clock for FixedClock {
    fn delta_time(&mut self) -> f32 {
        self.dt
    }
}

/// Wall-clock delta, capped so a stalled frame can't teleport the ball
#[derive(Debug, Clone)]
pub struct SystemClock {
    last: Option<Instant>,
    max_dt: f32,
}

impl Default for SystemClock {
    fn default() -> Self {
        Self::new(MAX_FRAME_DT)
    }
}

impl SystemClock {
    pub fn new(max_dt: f32) -> Self {
        Self { last: None, max_dt }
    }
}

impl Clock for SystemClock {
    fn delta_time(&mut self) -> f32 {
        let now = Instant::now();
        // First frame has no previous frame to measure against
        let dt = self
            .last
            .map(|last| now.duration_since(last).as_secs_f32())
            .unwrap_or(0.0);
        self.last = Some(now);
        dt.min(self.max_dt)
    }
}
