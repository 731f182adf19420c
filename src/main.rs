mod config;
mod debug;
mod game;
mod game_modes;
mod ui;

use std::io;

use anyhow::Context;
use crossterm::{
    cursor::Show,
    event::{KeyboardEnhancementFlags, PopKeyboardEnhancementFlags, PushKeyboardEnhancementFlags},
    execute,
    terminal::{
        disable_raw_mode, enable_raw_mode, supports_keyboard_enhancement, EnterAlternateScreen,
        LeaveAlternateScreen,
    },
};
use ratatui::{backend::CrosstermBackend, Terminal};
use tracing::{error, info};

use config::Config;
use game::TerminalInput;
use game_modes::{run_game_vs_ai, ExitReason};
use ui::TerminalSurface;

fn main() -> anyhow::Result<()> {
    let log_path = debug::init().context("failed to set up debug log")?;
    info!(log = %log_path.display(), "pong starting");

    let config = Config::default();

    // Key release events make held keys exact; not every terminal has them
    let release_events = supports_keyboard_enhancement().unwrap_or(false);
    info!(release_events, "keyboard enhancement probed");

    enable_raw_mode().context("failed to enable raw mode")?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen).context("failed to enter alternate screen")?;
    if release_events {
        execute!(
            stdout,
            PushKeyboardEnhancementFlags(KeyboardEnhancementFlags::REPORT_EVENT_TYPES)
        )
        .context("failed to enable key release events")?;
    }

    let result = Terminal::new(CrosstermBackend::new(stdout)).and_then(|terminal| {
        let mut surface = TerminalSurface::new(terminal);
        let mut input = TerminalInput::new(config.keybindings.clone(), release_events);
        run_game_vs_ai(&mut input, &mut surface, &config, &mut rand::thread_rng())
    });

    // Restore the terminal before reporting anything
    restore_terminal(release_events).context("failed to restore terminal")?;

    match result {
        Ok(ExitReason::QuitRequested) => {
            info!("pong exiting");
            Ok(())
        }
        Err(e) => {
            error!(error = %e, "game loop failed");
            Err(e).context("game loop failed")
        }
    }
}

fn restore_terminal(release_events: bool) -> io::Result<()> {
    let mut stdout = io::stdout();
    if release_events {
        execute!(stdout, PopKeyboardEnhancementFlags)?;
    }
    disable_raw_mode()?;
    execute!(stdout, LeaveAlternateScreen, Show)?;
    Ok(())
}
