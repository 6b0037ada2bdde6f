//! The ball: linear motion, reflection and respawn

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::shapes::Circle;
use crate::Playfield;
use crate::consts::*;

/// A ball entity
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Ball {
    pub circle: Circle,
    pub vel: Vec2,
}

impl Default for Ball {
    fn default() -> Self {
        Self::new()
    }
}

impl Ball {
    /// Ball at the spawn point heading straight up
    pub fn new() -> Self {
        Self {
            circle: Circle::new(BALL_SPAWN, BALL_RADIUS),
            vel: BALL_INITIAL_VELOCITY,
        }
    }

    #[inline]
    pub fn pos(&self) -> Vec2 {
        self.circle.center
    }

    /// Integrate position over `dt` seconds
    pub fn update(&mut self, dt: f32) {
        self.circle.move_by(self.vel * dt);
    }

    /// True once the ball has fallen below the playfield
    pub fn is_dead(&self, playfield: &Playfield) -> bool {
        self.circle.center.y > playfield.height
    }

    /// Flip velocity components by a ±1 mask
    /// (`REFLECT_VERTICAL` or `REFLECT_HORIZONTAL`)
    pub fn reflect(&mut self, axis: Vec2) {
        self.vel *= axis;
    }

    /// Point the ball along `direction` at the fixed ball speed.
    /// A zero direction leaves the ball stationary.
    pub fn set_velocity(&mut self, direction: Vec2) {
        self.vel = direction.normalize_or_zero() * BALL_SPEED;
    }

    /// Back to the spawn point and initial velocity
    pub fn restart(&mut self) {
        *self = Self::new();
    }
}
