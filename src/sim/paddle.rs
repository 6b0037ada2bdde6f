//! The player's paddle

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::ball::Ball;
use super::shapes::Rect;
use crate::consts::*;

/// Pointer-driven paddle at a fixed height
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Paddle {
    pub rect: Rect,
}

impl Paddle {
    /// Paddle centered under the pointer
    pub fn new(pointer_x: f32) -> Self {
        Self {
            rect: Rect::from_center(Vec2::new(pointer_x, PADDLE_CENTER_Y), PADDLE_SIZE),
        }
    }

    /// Follow the pointer horizontally. Not clamped: the paddle may slide
    /// partly or fully off-screen.
    pub fn update(&mut self, pointer_x: f32) {
        self.rect.pos.x = pointer_x - PADDLE_SIZE.x / 2.0;
    }

    /// Bounce a descending ball, steering it by where it landed on the paddle
    pub fn test_and_resolve(&self, ball: &mut Ball) {
        if ball.vel.y > 0.0 && self.rect.intersects(&ball.circle) {
            let offset = ball.pos().x - self.rect.center().x;
            ball.set_velocity(Vec2::new(offset * PADDLE_STEERING, -ball.vel.y));
            log::debug!("Paddle hit at offset {:.1}, vel {:?}", offset, ball.vel);
        }
    }
}
