pub mod braille;
pub mod render;
pub mod surface;
pub mod terminal;

#[cfg(test)]
pub mod recording;

pub use render::render;
pub use surface::{FieldRect, Rgb, Surface};
pub use terminal::TerminalSurface;
