//! Recording surface for headless runs and tests

use glam::Vec2;

use super::Surface;

/// A single recorded draw call
#[derive(Debug, Clone, PartialEq)]
pub enum DrawCommand {
    Rect { x: f32, y: f32, w: f32, h: f32, color: String },
    DashedLine { from: Vec2, to: Vec2, dash: [f32; 2], color: String },
    Circle { center: Vec2, radius: f32, color: String },
}

/// Records draw calls instead of painting them
#[derive(Debug, Clone, Default)]
pub struct DrawList {
    commands: Vec<DrawCommand>,
}

impl DrawList {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn commands(&self) -> &[DrawCommand] {
        &self.commands
    }

    /// Drop recorded commands (call between frames)
    pub fn clear(&mut self) {
        self.commands.clear();
    }
}

impl Surface for DrawList {
    fn fill_rect(&mut self, x: f32, y: f32, w: f32, h: f32, color: &str) {
        self.commands.push(DrawCommand::Rect { x, y, w, h, color: color.to_string() });
    }

    fn dashed_line(&mut self, from: Vec2, to: Vec2, dash: [f32; 2], color: &str) {
        self.commands.push(DrawCommand::DashedLine { from, to, dash, color: color.to_string() });
    }

    fn fill_circle(&mut self, center: Vec2, radius: f32, color: &str) {
        self.commands.push(DrawCommand::Circle { center, radius, color: color.to_string() });
    }
}
