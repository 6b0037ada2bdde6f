//! The brick wall
//!
//! A fixed arena of `BRICK_COUNT` rectangles laid out row-major. Bricks are
//! never removed: a destroyed brick is moved far above the playfield, where it
//! can no longer collide, and liveness is derived from its position.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::ball::Ball;
use super::score::Score;
use super::shapes::Rect;
use crate::Playfield;
use crate::consts::*;

/// Which way the ball bounced off a brick
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum HitAxis {
    /// Top or bottom face
    Vertical,
    /// Left or right face
    Horizontal,
}

/// Outcome of a brick collision
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct BrickHit {
    /// Row-major index of the destroyed brick
    pub index: usize,
    pub axis: HitAxis,
    /// Every brick is now gone
    pub cleared: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Bricks {
    table: Box<[Rect]>,
}

impl Default for Bricks {
    fn default() -> Self {
        Self::new()
    }
}

impl Bricks {
    /// Full 20×5 wall
    pub fn new() -> Self {
        let table = (0..BRICK_ROWS)
            .flat_map(|row| {
                (0..BRICK_COLUMNS).map(move |col| {
                    Rect::new(
                        Vec2::new(
                            col as f32 * BRICK_SIZE.x,
                            BRICK_TOP + row as f32 * BRICK_SIZE.y,
                        ),
                        BRICK_SIZE,
                    )
                })
            })
            .collect();
        Self { table }
    }

    /// All slots, dead or alive, in row-major order
    pub fn rects(&self) -> &[Rect] {
        &self.table
    }

    pub fn len(&self) -> usize {
        self.table.len()
    }

    pub fn is_empty(&self) -> bool {
        self.table.is_empty()
    }

    /// A brick is alive while it sits below the top of the playfield
    pub fn is_alive(&self, index: usize) -> bool {
        self.table.get(index).is_some_and(|rect| rect.pos.y > 0.0)
    }

    pub fn alive(&self) -> impl Iterator<Item = &Rect> {
        self.table.iter().filter(|rect| rect.pos.y > 0.0)
    }

    pub fn alive_count(&self) -> usize {
        self.alive().count()
    }

    pub fn is_all_dead(&self) -> bool {
        self.alive().next().is_none()
    }

    /// Resolve at most one brick against the ball.
    ///
    /// Bricks are scanned in row-major order and only the first one touching
    /// the ball is hit: the ball reflects, the score grows and the brick is
    /// moved off-screen.
    pub fn test_and_resolve(
        &mut self,
        ball: &mut Ball,
        score: &mut Score,
        playfield: &Playfield,
    ) -> Option<BrickHit> {
        let circle = ball.circle;
        let index = self.table.iter().position(|rect| rect.intersects(&circle))?;
        let brick = &mut self.table[index];

        let axis = if brick.bottom().intersects(&circle) || brick.top().intersects(&circle) {
            ball.reflect(REFLECT_VERTICAL);
            HitAxis::Vertical
        } else {
            ball.reflect(REFLECT_HORIZONTAL);
            HitAxis::Horizontal
        };
        score.add(BRICK_POINTS);

        brick.pos.y -= playfield.width * 2.0;

        let cleared = self.is_all_dead();
        log::debug!("Brick {} hit ({:?}), score {}", index, axis, score.points);
        if cleared {
            log::info!("All bricks cleared with score {}", score.points);
        }

        Some(BrickHit {
            index,
            axis,
            cleared,
        })
    }

    /// Destroy a brick directly (used to set up board positions)
    pub fn knock_out(&mut self, index: usize, playfield: &Playfield) {
        if self.is_alive(index) {
            self.table[index].pos.y -= playfield.width * 2.0;
        }
    }
}
