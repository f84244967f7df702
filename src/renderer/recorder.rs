//! In-memory surface that records draw calls
//!
//! Used by the headless runner and by tests.

use super::{Color, Surface};

/// One recorded drawing operation
#[derive(Debug, Clone, PartialEq)]
pub enum DrawCommand {
    ClearRect { x: f32, y: f32, width: f32, height: f32 },
    FillRect { x: f32, y: f32, width: f32, height: f32, color: Color },
    FillCircle { x: f32, y: f32, radius: f32, color: Color },
    FillText { text: String, x: f32, y: f32, font: String, color: Color },
}

#[derive(Debug, Clone, Default)]
pub struct Recorder {
    width: f32,
    height: f32,
    commands: Vec<DrawCommand>,
    /// Total commands ever recorded, including cleared ones
    total: usize,
}

impl Recorder {
    pub fn new(width: f32, height: f32) -> Self {
        Self {
            width,
            height,
            commands: Vec::new(),
            total: 0,
        }
    }

    /// Commands recorded since the last clear of the whole surface
    pub fn commands(&self) -> &[DrawCommand] {
        &self.commands
    }

    /// Number of commands recorded over the recorder's lifetime
    pub fn total(&self) -> usize {
        self.total
    }

    /// True if the current frame shows `text`
    pub fn shows_text(&self, text: &str) -> bool {
        self.commands
            .iter()
            .any(|c| matches!(c, DrawCommand::FillText { text: t, .. } if t == text))
    }

    fn push(&mut self, command: DrawCommand) {
        self.commands.push(command);
        self.total += 1;
    }
}

impl Surface for Recorder {
    fn size(&self) -> (f32, f32) {
        (self.width, self.height)
    }

    fn clear_rect(&mut self, x: f32, y: f32, width: f32, height: f32) {
        // A full clear starts a new frame
        if x <= 0.0 && y <= 0.0 && width >= self.width && height >= self.height {
            self.commands.clear();
        }
        self.push(DrawCommand::ClearRect { x, y, width, height });
    }

    fn fill_rect(&mut self, x: f32, y: f32, width: f32, height: f32, color: Color) {
        self.push(DrawCommand::FillRect { x, y, width, height, color });
    }

    fn fill_circle(&mut self, x: f32, y: f32, radius: f32, color: Color) {
        self.push(DrawCommand::FillCircle { x, y, radius, color });
    }

    fn fill_text(&mut self, text: &str, x: f32, y: f32, font: &str, color: Color) {
        self.push(DrawCommand::FillText {
            text: text.to_string(),
            x,
            y,
            font: font.to_string(),
            color,
        });
    }
}
