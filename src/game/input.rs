use std::io;
use std::time::{Duration, Instant};

use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

use crate::config::KeyBindings;

/// Held state of the player's two keys for one frame
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct InputState {
    pub move_up: bool,
    pub move_down: bool,
}

/// Result of one non-blocking input poll
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct PolledInput {
    pub input: InputState,
    pub shutdown: bool,
}

/// Source of per-frame player input and shutdown requests
pub trait InputSource {
    /// Drain pending events without blocking
    fn poll(&mut self) -> io::Result<PolledInput>;
}

/// Terminals without release events only send presses and auto-repeats;
/// a key counts as held for this long after the last one.
const HOLD_WINDOW: Duration = Duration::from_millis(150);

#[derive(Clone, Copy, Debug, Default)]
struct HeldKey {
    last_pressed: Option<Instant>,
}

impl HeldKey {
    fn press(&mut self, now: Instant) {
        self.last_pressed = Some(now);
    }

    fn release(&mut self) {
        self.last_pressed = None;
    }

    fn is_held(&self, now: Instant, release_events: bool) -> bool {
        match self.last_pressed {
            Some(_) if release_events => true,
            Some(at) => now.saturating_duration_since(at) <= HOLD_WINDOW,
            None => false,
        }
    }
}

/// Keyboard input read from crossterm events
pub struct TerminalInput {
    keys: KeyBindings,
    release_events: bool,
    up: HeldKey,
    down: HeldKey,
}

impl TerminalInput {
    /// `release_events` is whether the terminal reports key releases
    /// (keyboard enhancement enabled).
    pub fn new(keys: KeyBindings, release_events: bool) -> Self {
        Self {
            keys,
            release_events,
            up: HeldKey::default(),
            down: HeldKey::default(),
        }
    }

    /// Apply one key event; returns true if it asks to quit
    fn handle_key(&mut self, key: KeyEvent, now: Instant) -> bool {
        let is_ctrl_c =
            key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL);

        let target = if KeyBindings::matches(&self.keys.paddle_up, key.code) {
            Some(&mut self.up)
        } else if KeyBindings::matches(&self.keys.paddle_down, key.code) {
            Some(&mut self.down)
        } else {
            None
        };

        match key.kind {
            KeyEventKind::Press | KeyEventKind::Repeat => {
                if let Some(held) = target {
                    held.press(now);
                }
                is_ctrl_c || KeyBindings::matches(&self.keys.quit, key.code)
            }
            KeyEventKind::Release => {
                if let Some(held) = target {
                    held.release();
                }
                false
            }
        }
    }

    fn state(&self, now: Instant) -> InputState {
        InputState {
            move_up: self.up.is_held(now, self.release_events),
            move_down: self.down.is_held(now, self.release_events),
        }
    }
}

impl InputSource for TerminalInput {
    fn poll(&mut self) -> io::Result<PolledInput> {
        let mut shutdown = false;

        while event::poll(Duration::from_millis(0))? {
            if let Event::Key(key) = event::read()? {
                shutdown |= self.handle_key(key, Instant::now());
            }
        }

        Ok(PolledInput {
            input: self.state(Instant::now()),
            shutdown,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn press(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    fn release(code: KeyCode) -> KeyEvent {
        KeyEvent::new_with_kind(code, KeyModifiers::NONE, KeyEventKind::Release)
    }

    #[test]
    fn test_press_and_release_with_release_events() {
        let mut input = TerminalInput::new(KeyBindings::default(), true);
        let t0 = Instant::now();

        assert!(!input.handle_key(press(KeyCode::Up), t0));
        // Held indefinitely until released
        let later = t0 + Duration::from_secs(5);
        assert_eq!(
            input.state(later),
            InputState {
                move_up: true,
                move_down: false
            }
        );

        input.handle_key(release(KeyCode::Up), later);
        assert_eq!(input.state(later), InputState::default());
    }

    #[test]
    fn test_press_expires_without_release_events() {
        let mut input = TerminalInput::new(KeyBindings::default(), false);
        let t0 = Instant::now();

        input.handle_key(press(KeyCode::Char('s')), t0);
        assert!(input.state(t0 + Duration::from_millis(100)).move_down);
        assert!(!input.state(t0 + Duration::from_millis(400)).move_down);
    }

    #[test]
    fn test_both_keys_held() {
        let mut input = TerminalInput::new(KeyBindings::default(), true);
        let t0 = Instant::now();

        input.handle_key(press(KeyCode::Up), t0);
        input.handle_key(press(KeyCode::Down), t0);

        assert_eq!(
            input.state(t0),
            InputState {
                move_up: true,
                move_down: true
            }
        );
    }

    #[test]
    fn test_quit_keys() {
        let mut input = TerminalInput::new(KeyBindings::default(), false);
        let now = Instant::now();

        assert!(input.handle_key(press(KeyCode::Char('q')), now));
        assert!(input.handle_key(press(KeyCode::Esc), now));
        assert!(input.handle_key(
            KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL),
            now
        ));
        assert!(!input.handle_key(press(KeyCode::Char('c')), now));
        // Releasing a quit key does not quit again
        assert!(!input.handle_key(release(KeyCode::Char('q')), now));
    }
}
