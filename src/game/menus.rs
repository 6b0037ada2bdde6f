//! Title and GameClear screens: a single centered button each

use glam::Vec2;

use super::GamePhase;
use crate::Playfield;
use crate::platform::Frontend;

pub const MENU_BUTTON_WIDTH: f32 = 200.0;
pub const START_LABEL: &str = "Game Start!";
pub const CLEAR_LABEL: &str = "Game Clear!";

fn menu_button_pos(playfield: &Playfield) -> Vec2 {
    let center = playfield.center();
    Vec2::new(center.x - MENU_BUTTON_WIDTH / 2.0, center.y)
}

/// Title screen: start a round
pub fn title(frontend: &mut impl Frontend, playfield: &Playfield) -> Option<GamePhase> {
    frontend
        .button(START_LABEL, menu_button_pos(playfield), MENU_BUTTON_WIDTH)
        .then_some(GamePhase::Playing)
}

/// Shown after the last brick falls: back to the title
pub fn game_clear(frontend: &mut impl Frontend, playfield: &Playfield) -> Option<GamePhase> {
    frontend
        .button(CLEAR_LABEL, menu_button_pos(playfield), MENU_BUTTON_WIDTH)
        .then_some(GamePhase::Title)
}
