//! Remaining balls and restart-on-death

use serde::{Deserialize, Serialize};

use super::ball::Ball;
use crate::Playfield;
use crate::consts::INITIAL_LIVES;

/// Spare balls left in the current round
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Lives {
    pub remaining: u32,
}

impl Default for Lives {
    fn default() -> Self {
        Self {
            remaining: INITIAL_LIVES,
        }
    }
}

impl Lives {
    pub fn new() -> Self {
        Self::default()
    }

    /// Spend a life to respawn a dead ball.
    ///
    /// With no lives left the ball is left where it fell. Returns true when
    /// the ball was restarted.
    pub fn update(&mut self, ball: &mut Ball, playfield: &Playfield) -> bool {
        if ball.is_dead(playfield) && self.remaining > 0 {
            self.remaining -= 1;
            ball.restart();
            log::info!("Ball lost, {} left", self.remaining);
            return true;
        }
        false
    }

    /// HUD label
    pub fn label(&self) -> String {
        format!("Ball: {}", self.remaining)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use glam::Vec2;

    fn dead_ball() -> Ball {
        let mut ball = Ball::new();
        ball.circle.center = Vec2::new(200.0, 650.0);
        ball.vel = Vec2::new(100.0, 300.0);
        ball
    }

    #[test]
    fn test_alive_ball_untouched() {
        let playfield = Playfield::default();
        let mut lives = Lives::new();
        let mut ball = Ball::new();
        ball.circle.center.y = 599.0;

        assert!(!lives.update(&mut ball, &playfield));
        assert_eq!(lives.remaining, 3);
        assert_eq!(ball.pos().y, 599.0);
    }

    #[test]
    fn test_dead_ball_restarts() {
        let playfield = Playfield::default();
        let mut lives = Lives::new();
        let mut ball = dead_ball();

        assert!(lives.update(&mut ball, &playfield));
        assert_eq!(lives.remaining, 2);
        assert_eq!(ball, Ball::new());
        assert_eq!(lives.label(), "Ball: 2");
    }

    #[test]
    fn test_no_lives_leaves_ball_dead() {
        let playfield = Playfield::default();
        let mut lives = Lives { remaining: 0 };
        let mut ball = dead_ball();
        let before = ball.clone();

        assert!(!lives.update(&mut ball, &playfield));
        assert_eq!(lives.remaining, 0);
        assert_eq!(ball, before);
        assert!(ball.is_dead(&playfield));
    }

    #[test]
    fn test_last_life_spent() {
        let playfield = Playfield::default();
        let mut lives = Lives::new();

        for expected in [2, 1, 0] {
            let mut ball = dead_ball();
            lives.update(&mut ball, &playfield);
            assert_eq!(lives.remaining, expected);
        }

        let mut ball = dead_ball();
        assert!(!lives.update(&mut ball, &playfield));
        assert_eq!(lives.remaining, 0);
    }
}
