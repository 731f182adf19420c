// Test double that records draw calls instead of showing them

use std::io;

use super::surface::{FieldRect, Rgb, Surface};

#[derive(Debug, Clone, PartialEq)]
pub enum DrawCommand {
    Fill(Rgb),
    Rect(FieldRect, Rgb),
    Text {
        text: String,
        center_x: f32,
        center_y: f32,
        color: Rgb,
    },
    Present,
}

#[derive(Debug, Default)]
pub struct RecordingSurface {
    pub commands: Vec<DrawCommand>,
}

impl RecordingSurface {
    pub fn presents(&self) -> usize {
        self.commands
            .iter()
            .filter(|c| **c == DrawCommand::Present)
            .count()
    }

    /// Commands of the last presented frame, without the `Present` itself
    pub fn last_frame(&self) -> &[DrawCommand] {
        let end = self
            .commands
            .iter()
            .rposition(|c| *c == DrawCommand::Present)
            .unwrap_or(self.commands.len());
        let start = self.commands[..end]
            .iter()
            .rposition(|c| *c == DrawCommand::Present)
            .map(|i| i + 1)
            .unwrap_or(0);
        &self.commands[start..end]
    }

    pub fn rects(frame: &[DrawCommand]) -> Vec<FieldRect> {
        frame
            .iter()
            .filter_map(|c| match c {
                DrawCommand::Rect(rect, _) => Some(*rect),
                _ => None,
            })
            .collect()
    }

    pub fn texts(frame: &[DrawCommand]) -> Vec<&str> {
        frame
            .iter()
            .filter_map(|c| match c {
                DrawCommand::Text { text, .. } => Some(text.as_str()),
                _ => None,
            })
            .collect()
    }
}

impl Surface for RecordingSurface {
    fn fill(&mut self, color: Rgb) {
        self.commands.push(DrawCommand::Fill(color));
    }

    fn fill_rect(&mut self, rect: FieldRect, color: Rgb) {
        self.commands.push(DrawCommand::Rect(rect, color));
    }

    fn draw_text_centered(&mut self, text: &str, center_x: f32, center_y: f32, color: Rgb) {
        self.commands.push(DrawCommand::Text {
            text: text.to_string(),
            center_x,
            center_y,
            color,
        });
    }

    fn present(&mut self) -> io::Result<()> {
        self.commands.push(DrawCommand::Present);
        Ok(())
    }
}
