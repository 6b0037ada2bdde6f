//! Demo player for headless runs
//!
//! Watches the previous frame's draw calls the way a person watches the
//! screen: follows the ball with the pointer and, after a short reaction
//! delay, clicks whatever button is on offer. All randomness comes from a
//! seeded RNG so runs are reproducible.

use glam::Vec2;
use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;

use super::headless::HeadlessFrontend;
use crate::consts::PADDLE_SIZE;

/// Frames between changes of aim
const AIM_PERIOD: u32 = 30;

#[derive(Debug, Clone)]
pub struct Autopilot {
    rng: Pcg32,
    reaction_frames: u32,
    fumble_chance: f64,
    /// Frames a button has been on screen
    button_wait: u32,
    aim_timer: u32,
    /// Horizontal offset from the ball the pointer aims for
    aim_offset: f32,
    /// Pointer frozen until the next aim change
    fumbling: bool,
    pointer: Vec2,
}

impl Autopilot {
    pub fn new(seed: u64, reaction_frames: u32, fumble_chance: f64, start: Vec2) -> Self {
        Self {
            rng: Pcg32::seed_from_u64(seed),
            reaction_frames,
            fumble_chance: fumble_chance.clamp(0.0, 1.0),
            button_wait: 0,
            aim_timer: 0,
            aim_offset: 0.0,
            fumbling: false,
            pointer: start,
        }
    }

    /// Read last frame's output, then start a new frame with fresh input
    pub fn drive(&mut self, frontend: &mut HeadlessFrontend) {
        let ball = frontend.circles().first().map(|c| c.center);
        let button = frontend.buttons().first().map(|label| label.to_string());

        frontend.begin_frame();

        if self.aim_timer == 0 {
            let reach = PADDLE_SIZE.x * 0.4;
            self.aim_offset = self.rng.random_range(-reach..=reach);
            self.fumbling = self.rng.random_bool(self.fumble_chance);
            self.aim_timer = AIM_PERIOD;
        }
        self.aim_timer -= 1;

        if let (Some(ball), false) = (ball, self.fumbling) {
            self.pointer.x = ball.x + self.aim_offset;
        }
        frontend.set_pointer(self.pointer);

        match button {
            Some(label) => {
                self.button_wait += 1;
                if self.button_wait > self.reaction_frames {
                    log::debug!("Autopilot clicks {:?}", label);
                    frontend.click(label);
                    self.button_wait = 0;
                }
            }
            None => self.button_wait = 0,
        }
    }
}
