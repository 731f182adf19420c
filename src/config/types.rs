// Build-time settings: key bindings and display palette

use crossterm::event::KeyCode;

use crate::game::geometry::TARGET_FPS;
use crate::ui::Rgb;

#[derive(Debug, Clone, Default)]
pub struct Config {
    pub keybindings: KeyBindings,
    pub display: DisplayConfig,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeyBindings {
    // Player (left) paddle
    pub paddle_up: Vec<KeyCode>,
    pub paddle_down: Vec<KeyCode>,

    // Ctrl-C quits regardless of this list
    pub quit: Vec<KeyCode>,
}

impl KeyBindings {
    /// Whether `code` is one of `keys`; letters match either case
    pub fn matches(keys: &[KeyCode], code: KeyCode) -> bool {
        let code = match code {
            KeyCode::Char(c) => KeyCode::Char(c.to_ascii_lowercase()),
            other => other,
        };
        keys.contains(&code)
    }
}

impl Default for KeyBindings {
    fn default() -> Self {
        Self {
            paddle_up: vec![KeyCode::Up, KeyCode::Char('w')],
            paddle_down: vec![KeyCode::Down, KeyCode::Char('s')],
            quit: vec![KeyCode::Char('q'), KeyCode::Esc],
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DisplayConfig {
    pub target_fps: u32,

    // Everything is drawn in `foreground` over `background`
    pub foreground: Rgb,
    pub background: Rgb,
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            target_fps: TARGET_FPS,
            foreground: Rgb::WHITE,
            background: Rgb::BLACK,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_bindings() {
        let keys = KeyBindings::default();

        assert!(KeyBindings::matches(&keys.paddle_up, KeyCode::Up));
        assert!(KeyBindings::matches(&keys.paddle_up, KeyCode::Char('W')));
        assert!(KeyBindings::matches(&keys.paddle_down, KeyCode::Char('s')));
        assert!(!KeyBindings::matches(&keys.paddle_down, KeyCode::Up));
        assert!(KeyBindings::matches(&keys.quit, KeyCode::Char('Q')));
    }

    #[test]
    fn test_default_display() {
        let display = DisplayConfig::default();

        assert_eq!(display.target_fps, 60);
        assert_eq!(display.foreground, Rgb(255, 255, 255));
        assert_eq!(display.background, Rgb(0, 0, 0));
    }
}
