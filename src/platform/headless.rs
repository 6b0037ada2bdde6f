//! Headless frontend that records draw calls instead of rasterizing them

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::{InputPoll, Renderer, TextAnchor};
use crate::renderer::Color;
use crate::sim::{Circle, Rect};

/// One recorded draw call
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum DrawCommand {
    Circle {
        circle: Circle,
        color: Color,
    },
    Rect {
        rect: Rect,
        corner_radius: f32,
        color: Color,
    },
    Text {
        text: String,
        font_size: u32,
        pos: Vec2,
        anchor: TextAnchor,
        color: Color,
    },
    Button {
        label: String,
        pos: Vec2,
        width: f32,
        clicked: bool,
    },
}

/// Records one frame of output and replays scripted input
#[derive(Debug, Clone, Default)]
pub struct HeadlessFrontend {
    pointer: Vec2,
    pending_clicks: Vec<String>,
    commands: Vec<DrawCommand>,
}

impl HeadlessFrontend {
    pub fn new(pointer: Vec2) -> Self {
        Self {
            pointer,
            ..Default::default()
        }
    }

    /// Drop last frame's draw calls and any clicks nobody polled
    pub fn begin_frame(&mut self) {
        self.commands.clear();
        self.pending_clicks.clear();
    }

    pub fn set_pointer(&mut self, pointer: Vec2) {
        self.pointer = pointer;
    }

    /// Click the button labelled `label` the next time it is presented this frame
    pub fn click(&mut self, label: impl Into<String>) {
        self.pending_clicks.push(label.into());
    }

    pub fn commands(&self) -> &[DrawCommand] {
        &self.commands
    }

    /// Labels of every button presented this frame
    pub fn buttons(&self) -> Vec<&str> {
        self.commands
            .iter()
            .filter_map(|cmd| match cmd {
                DrawCommand::Button { label, .. } => Some(label.as_str()),
                _ => None,
            })
            .collect()
    }

    /// Every string drawn this frame
    pub fn texts(&self) -> Vec<&str> {
        self.commands
            .iter()
            .filter_map(|cmd| match cmd {
                DrawCommand::Text { text, .. } => Some(text.as_str()),
                _ => None,
            })
            .collect()
    }

    /// Circles drawn this frame (the ball)
    pub fn circles(&self) -> Vec<Circle> {
        self.commands
            .iter()
            .filter_map(|cmd| match cmd {
                DrawCommand::Circle { circle, .. } => Some(*circle),
                _ => None,
            })
            .collect()
    }
}

impl Renderer for HeadlessFrontend {
    fn draw_circle(&mut self, circle: Circle, color: Color) {
        self.commands.push(DrawCommand::Circle { circle, color });
    }

    fn draw_rect(&mut self, rect: Rect, corner_radius: f32, color: Color) {
        self.commands.push(DrawCommand::Rect {
            rect,
            corner_radius,
            color,
        });
    }

    fn draw_text(&mut self, text: &str, font_size: u32, pos: Vec2, anchor: TextAnchor, color: Color) {
        self.commands.push(DrawCommand::Text {
            text: text.to_string(),
            font_size,
            pos,
            anchor,
            color,
        });
    }
}

impl InputPoll for HeadlessFrontend {
    fn pointer(&self) -> Vec2 {
        self.pointer
    }

    fn button(&mut self, label: &str, pos: Vec2, width: f32) -> bool {
        let clicked = match self.pending_clicks.iter().position(|l| l == label) {
            Some(i) => {
                self.pending_clicks.remove(i);
                true
            }
            None => false,
        };
        self.commands.push(DrawCommand::Button {
            label: label.to_string(),
            pos,
            width,
            clicked,
        });
        clicked
    }
}
