//! Brick Breaker - a classic Breakout arcade game
//!
//! Core modules:
//! - `sim`: Ball, bricks, paddle, walls, score and lives (pure game logic)
//! - `game`: Title / Playing / GameClear state machine
//! - `app`: Per-frame driver owned by the host loop
//! - `platform`: Clock, renderer and input capabilities plus a headless host
//! - `renderer`: Colors shared by every draw call
//! - `settings`: Data-driven configuration

pub mod app;
pub mod game;
pub mod platform;
pub mod renderer;
pub mod settings;
pub mod sim;

pub use app::App;
pub use game::{GameManager, GamePhase};
pub use settings::Settings;

use glam::Vec2;
use serde::{Deserialize, Serialize};

/// Game configuration constants
pub mod consts {
    use glam::Vec2;

    /// Default playfield dimensions (host engine's default window)
    pub const PLAYFIELD_WIDTH: f32 = 800.0;
    pub const PLAYFIELD_HEIGHT: f32 = 600.0;

    /// Largest frame delta the host hands to the simulation
    pub const MAX_FRAME_DT: f32 = 0.1;

    /// Ball defaults
    pub const BALL_SPEED: f32 = 480.0;
    pub const BALL_RADIUS: f32 = 8.0;
    pub const BALL_SPAWN: Vec2 = Vec2::new(400.0, 400.0);
    pub const BALL_INITIAL_VELOCITY: Vec2 = Vec2::new(0.0, -BALL_SPEED);

    /// Brick grid
    pub const BRICK_SIZE: Vec2 = Vec2::new(40.0, 20.0);
    pub const BRICK_COLUMNS: usize = 20;
    pub const BRICK_ROWS: usize = 5;
    pub const BRICK_COUNT: usize = BRICK_COLUMNS * BRICK_ROWS;
    /// Top edge of the first brick row
    pub const BRICK_TOP: f32 = 60.0;
    /// Points awarded per destroyed brick
    pub const BRICK_POINTS: u32 = 10;

    /// Paddle defaults
    pub const PADDLE_SIZE: Vec2 = Vec2::new(60.0, 10.0);
    pub const PADDLE_CENTER_Y: f32 = 500.0;
    /// Horizontal velocity per unit of offset from the paddle center
    pub const PADDLE_STEERING: f32 = 10.0;

    /// Lives at the start of a round
    pub const INITIAL_LIVES: u32 = 3;

    /// Velocity multipliers for reflections
    pub const REFLECT_VERTICAL: Vec2 = Vec2::new(1.0, -1.0);
    pub const REFLECT_HORIZONTAL: Vec2 = Vec2::new(-1.0, 1.0);
}

/// Visible game area in engine units, origin at the top-left corner
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Playfield {
    pub width: f32,
    pub height: f32,
}

impl Default for Playfield {
    fn default() -> Self {
        Self {
            width: consts::PLAYFIELD_WIDTH,
            height: consts::PLAYFIELD_HEIGHT,
        }
    }
}

impl Playfield {
    pub fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }

    /// Center point of the playfield
    #[inline]
    pub fn center(&self) -> Vec2 {
        Vec2::new(self.width / 2.0, self.height / 2.0)
    }
}
