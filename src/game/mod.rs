//! Screen state machine
//!
//! Exactly one screen is active. Entering a screen runs its start action;
//! for Playing that builds a fresh round, so round data only exists while
//! Playing is active. Transitions requested during a frame are applied at
//! the end of that frame.

pub mod menus;
pub mod playing;

pub use playing::PlayingScreen;

use serde::{Deserialize, Serialize};

use crate::Playfield;
use crate::platform::Frontend;

/// Which screen is active
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GamePhase {
    Title,
    Playing,
    GameClear,
}

#[derive(Debug, Clone)]
enum Screen {
    Title,
    Playing(Box<PlayingScreen>),
    GameClear,
}

/// Owns the active screen and dispatches frames to it
#[derive(Debug, Clone)]
pub struct GameManager {
    screen: Screen,
    playfield: Playfield,
}

impl GameManager {
    /// Boots into the title screen
    pub fn new(playfield: Playfield) -> Self {
        Self {
            screen: Screen::Title,
            playfield,
        }
    }

    pub fn playfield(&self) -> &Playfield {
        &self.playfield
    }

    pub fn phase(&self) -> GamePhase {
        match self.screen {
            Screen::Title => GamePhase::Title,
            Screen::Playing(_) => GamePhase::Playing,
            Screen::GameClear => GamePhase::GameClear,
        }
    }

    /// The round in progress, if Playing is active
    pub fn playing(&self) -> Option<&PlayingScreen> {
        match &self.screen {
            Screen::Playing(round) => Some(&**round),
            _ => None,
        }
    }

    pub fn playing_mut(&mut self) -> Option<&mut PlayingScreen> {
        match &mut self.screen {
            Screen::Playing(round) => Some(&mut **round),
            _ => None,
        }
    }

    /// Switch screens and run the new screen's start action.
    /// `pointer_x` places the paddle of a fresh round.
    pub fn change_state(&mut self, phase: GamePhase, pointer_x: f32) {
        log::info!("{:?} -> {:?}", self.phase(), phase);
        self.screen = match phase {
            GamePhase::Title => Screen::Title,
            GamePhase::Playing => {
                Screen::Playing(Box::new(PlayingScreen::start(self.playfield, pointer_x)))
            }
            GamePhase::GameClear => Screen::GameClear,
        };
    }

    /// Run one frame of the active screen
    pub fn update(&mut self, dt: f32, frontend: &mut impl Frontend) {
        let next = match &mut self.screen {
            Screen::Title => menus::title(frontend, &self.playfield),
            Screen::Playing(round) => round.update(dt, frontend),
            Screen::GameClear => menus::game_clear(frontend, &self.playfield),
        };

        if let Some(next) = next {
            self.change_state(next, frontend.pointer().x);
        }
    }
}
