//! Score accumulator

use serde::{Deserialize, Serialize};

/// Points earned in the current round
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Score {
    pub points: u32,
}

impl Score {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add(&mut self, value: u32) {
        self.points = self.points.saturating_add(value);
    }

    /// HUD label
    pub fn label(&self) -> String {
        format!("Score: {}", self.points)
    }
}
