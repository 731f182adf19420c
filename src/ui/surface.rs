// Drawing target the renderer paints onto, in field coordinates

use std::io;

use ratatui::style::Color;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rgb(pub u8, pub u8, pub u8);

impl Rgb {
    pub const WHITE: Rgb = Rgb(255, 255, 255);
    pub const BLACK: Rgb = Rgb(0, 0, 0);
}

impl From<Rgb> for Color {
    fn from(rgb: Rgb) -> Self {
        Color::Rgb(rgb.0, rgb.1, rgb.2)
    }
}

/// Axis-aligned rectangle in field pixels, top-left origin
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FieldRect {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

impl FieldRect {
    pub fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }
}

/// A display the game can draw a frame onto.
///
/// Drawing calls only build up the next frame; nothing is visible until
/// `present` is called.
pub trait Surface {
    /// Clear the whole frame to `color`
    fn fill(&mut self, color: Rgb);

    fn fill_rect(&mut self, rect: FieldRect, color: Rgb);

    /// Draw `text` centered on (`center_x`, `center_y`)
    fn draw_text_centered(&mut self, text: &str, center_x: f32, center_y: f32, color: Rgb);

    /// Make the frame built so far visible
    fn present(&mut self) -> io::Result<()>;
}

impl<S: Surface + ?Sized> Surface for &mut S {
    fn fill(&mut self, color: Rgb) {
        (**self).fill(color)
    }

    fn fill_rect(&mut self, rect: FieldRect, color: Rgb) {
        (**self).fill_rect(rect, color)
    }

    fn draw_text_centered(&mut self, text: &str, center_x: f32, center_y: f32, color: Rgb) {
        (**self).draw_text_centered(text, center_x, center_y, color)
    }

    fn present(&mut self) -> io::Result<()> {
        (**self).present()
    }
}
