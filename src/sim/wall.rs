//! Playfield boundaries: ceiling and side walls
//!
//! The floor is open; falling through it is handled by `Lives`.

use super::ball::Ball;
use crate::Playfield;
use crate::consts::{REFLECT_HORIZONTAL, REFLECT_VERTICAL};

/// Bounce the ball off the ceiling and side walls.
///
/// Only a ball moving outward is reflected, so a ball already heading back
/// into the playfield is never flipped twice.
pub fn test_and_resolve(ball: &mut Ball, playfield: &Playfield) {
    let pos = ball.pos();
    let vel = ball.vel;

    // Ceiling
    if pos.y < 0.0 && vel.y < 0.0 {
        ball.reflect(REFLECT_VERTICAL);
    }

    // Side walls
    if (pos.x < 0.0 && vel.x < 0.0) || (pos.x > playfield.width && vel.x > 0.0) {
        ball.reflect(REFLECT_HORIZONTAL);
    }
}
