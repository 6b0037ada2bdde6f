//! Rendering helpers shared by every frontend
//!
//! Actual drawing is done by the host through `platform::Renderer`.

pub mod palette;

pub use palette::Color;
