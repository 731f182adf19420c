// Terminal realisation of `Surface`: the square field is scaled into the
// terminal with Braille dots and text labels are laid over it.

use std::io;

use ratatui::{
    backend::Backend,
    layout::Rect,
    style::{Color, Style},
    widgets::{Block, Paragraph},
    Frame, Terminal,
};

use crate::game::geometry::{FIELD_HEIGHT, FIELD_WIDTH};

use super::braille::BrailleCanvas;
use super::surface::{FieldRect, Rgb, Surface};

#[derive(Debug, Clone)]
struct Label {
    text: String,
    center_x: f32,
    center_y: f32,
    color: Rgb,
}

/// Collects one frame of draw calls and flushes it to the terminal on `present`.
pub struct TerminalSurface<B: Backend> {
    terminal: Terminal<B>,
    background: Rgb,
    rects: Vec<(FieldRect, Rgb)>,
    labels: Vec<Label>,
}

impl<B: Backend> TerminalSurface<B> {
    pub fn new(terminal: Terminal<B>) -> Self {
        Self {
            terminal,
            background: Rgb::BLACK,
            rects: Vec::new(),
            labels: Vec::new(),
        }
    }
}

impl<B: Backend> Surface for TerminalSurface<B> {
    fn fill(&mut self, color: Rgb) {
        self.background = color;
        self.rects.clear();
        self.labels.clear();
    }

    fn fill_rect(&mut self, rect: FieldRect, color: Rgb) {
        self.rects.push((rect, color));
    }

    fn draw_text_centered(&mut self, text: &str, center_x: f32, center_y: f32, color: Rgb) {
        self.labels.push(Label {
            text: text.to_string(),
            center_x,
            center_y,
            color,
        });
    }

    fn present(&mut self) -> io::Result<()> {
        let background = self.background;
        let rects = &self.rects;
        let labels = &self.labels;

        self.terminal
            .draw(|frame| draw_field(frame, background, rects, labels))?;
        Ok(())
    }
}

/// Where the field lands in the terminal and how big a field pixel is
#[derive(Debug, Clone, Copy, PartialEq)]
struct Viewport {
    area: Rect,
    scale: f32, // Braille dots per field pixel
}

impl Viewport {
    /// Largest uniformly scaled field that fits `area`, centered in it
    fn fit(area: Rect) -> Self {
        let dots_wide = area.width as f32 * 2.0;
        let dots_high = area.height as f32 * 4.0;
        let scale = (dots_wide / FIELD_WIDTH).min(dots_high / FIELD_HEIGHT);

        let width = ((FIELD_WIDTH * scale / 2.0).ceil() as u16).min(area.width);
        let height = ((FIELD_HEIGHT * scale / 4.0).ceil() as u16).min(area.height);

        Self {
            area: Rect {
                x: area.x + (area.width - width) / 2,
                y: area.y + (area.height - height) / 2,
                width,
                height,
            },
            scale,
        }
    }

    /// Field rectangle to canvas dots; never smaller than one dot
    fn to_dots(&self, rect: &FieldRect) -> (usize, usize, usize, usize) {
        let x = (rect.x * self.scale).round().max(0.0) as usize;
        let y = (rect.y * self.scale).round().max(0.0) as usize;
        let width = ((rect.width * self.scale).round() as usize).max(1);
        let height = ((rect.height * self.scale).round() as usize).max(1);
        (x, y, width, height)
    }

    /// Field point to the terminal cell containing it
    fn to_cell(&self, x: f32, y: f32) -> (u16, u16) {
        let col = (x * self.scale / 2.0).max(0.0) as u16;
        let row = (y * self.scale / 4.0).max(0.0) as u16;
        (
            self.area.x + col.min(self.area.width.saturating_sub(1)),
            self.area.y + row.min(self.area.height.saturating_sub(1)),
        )
    }
}

fn draw_field(frame: &mut Frame, background: Rgb, rects: &[(FieldRect, Rgb)], labels: &[Label]) {
    let area = frame.area();
    let bg = Color::from(background);

    frame.render_widget(Block::default().style(Style::default().bg(bg)), area);

    let viewport = Viewport::fit(area);
    if viewport.area.width == 0 || viewport.area.height == 0 {
        return;
    }

    // Dots carry no color of their own; the whole canvas uses the first ink seen
    let mut canvas = BrailleCanvas::new(
        viewport.area.width as usize,
        viewport.area.height as usize,
    );
    let mut ink = None;
    for (rect, color) in rects {
        if *color == background {
            continue;
        }
        ink.get_or_insert(*color);
        let (x, y, width, height) = viewport.to_dots(rect);
        canvas.fill_rect(x, y, width, height);
    }

    let fg = ink.map(Color::from).unwrap_or(Color::White);
    for row in 0..canvas.rows() {
        let row_area = Rect {
            x: viewport.area.x,
            y: viewport.area.y + row as u16,
            width: viewport.area.width,
            height: 1,
        };
        frame.render_widget(
            Paragraph::new(canvas.row(row)).style(Style::default().fg(fg).bg(bg)),
            row_area,
        );
    }

    for label in labels {
        let (col, row) = viewport.to_cell(label.center_x, label.center_y);
        let width = (label.text.chars().count() as u16).min(viewport.area.width);
        let left = col
            .saturating_sub(width / 2)
            .max(viewport.area.x)
            .min(viewport.area.x + viewport.area.width - width);

        frame.render_widget(
            Paragraph::new(label.text.as_str())
                .style(Style::default().fg(Color::from(label.color)).bg(bg)),
            Rect {
                x: left,
                y: row,
                width,
                height: 1,
            },
        );
    }
}
