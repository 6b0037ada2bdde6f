//! Platform abstraction layer
//!
//! The game never talks to a window, GPU or widget toolkit directly. A host
//! supplies:
//! - `Clock`: frame delta time
//! - `Renderer`: shape and text drawing
//! - `InputPoll`: pointer position and push-button clicks
//!
//! `headless` provides a recording implementation for native runs and tests.

pub mod autopilot;
pub mod clock;
pub mod headless;

pub use autopilot::Autopilot;
pub use clock::{FixedClock, SystemClock};
pub use headless::{DrawCommand, HeadlessFrontend};

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::renderer::Color;
use crate::sim::{Circle, Rect};

/// Source of per-frame delta time
pub trait Clock {
    /// Seconds elapsed since the previous frame
    fn delta_time(&mut self) -> f32;
}

/// Where a text position is anchored
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TextAnchor {
    TopLeft,
    Center,
}

/// Drawing surface for one frame
pub trait Renderer {
    fn draw_circle(&mut self, circle: Circle, color: Color);

    /// Filled rectangle, optionally with rounded corners
    fn draw_rect(&mut self, rect: Rect, corner_radius: f32, color: Color);

    fn draw_text(&mut self, text: &str, font_size: u32, pos: Vec2, anchor: TextAnchor, color: Color);
}

/// Input state for one frame
pub trait InputPoll {
    /// Pointer (mouse/touch) position in playfield units
    fn pointer(&self) -> Vec2;

    /// Present a push-button; returns true if it was clicked this frame
    fn button(&mut self, label: &str, pos: Vec2, width: f32) -> bool;
}

/// Everything a screen needs from the host
pub trait Frontend: Renderer + InputPoll {}

impl<T: Renderer + InputPoll> Frontend for T {}
