//! Application driver
//!
//! The host's event loop owns an `App` and calls `frame` once per rendered
//! frame. There is no global state: everything the game needs hangs off this
//! value.

use crate::Playfield;
use crate::consts::MAX_FRAME_DT;
use crate::game::{GameManager, GamePhase};
use crate::platform::{Clock, Frontend};

pub struct App<C: Clock> {
    clock: C,
    game: GameManager,
    /// Longest delta handed to the game, whatever the clock reports
    max_frame_dt: f32,
    frame_count: u64,
}

impl<C: Clock> App<C> {
    pub fn new(clock: C, playfield: Playfield) -> Self {
        log::info!(
            "Brick Breaker starting ({}x{})",
            playfield.width,
            playfield.height
        );
        Self {
            clock,
            game: GameManager::new(playfield),
            max_frame_dt: MAX_FRAME_DT,
            frame_count: 0,
        }
    }

    pub fn with_max_frame_dt(mut self, max_frame_dt: f32) -> Self {
        self.max_frame_dt = max_frame_dt.max(0.0);
        self
    }

    /// Advance and draw one frame
    pub fn frame(&mut self, frontend: &mut impl Frontend) {
        let dt = self.clock.delta_time().min(self.max_frame_dt);
        self.game.update(dt, frontend);
        self.frame_count += 1;
    }

    pub fn phase(&self) -> GamePhase {
        self.game.phase()
    }

    pub fn game(&self) -> &GameManager {
        &self.game
    }

    pub fn game_mut(&mut self) -> &mut GameManager {
        &mut self.game
    }

    pub fn frame_count(&self) -> u64 {
        self.frame_count
    }
}
