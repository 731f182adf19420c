use std::io;
use std::time::Instant;

use rand::Rng;
use tracing::info;

use crate::config::Config;
use crate::game::{GameSession, InputSource};
use crate::ui::Surface;

use super::common::{frame_duration, limit_frame_rate};

/// Why the game loop stopped
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExitReason {
    /// The player asked to quit (quit key or Ctrl-C)
    QuitRequested,
}

/// Run the player (left paddle) against the scripted tracker (right paddle)
/// until a shutdown is requested.
pub fn run_game_vs_ai<I, S, R>(
    input: &mut I,
    surface: S,
    config: &Config,
    rng: &mut R,
) -> io::Result<ExitReason>
where
    I: InputSource,
    S: Surface,
    R: Rng + ?Sized,
{
    let budget = frame_duration(config.display.target_fps);
    let mut session = GameSession::new(surface, config.display, rng);
    info!(
        dir_x = ?session.state().ball.dir_x,
        dir_y = ?session.state().ball.dir_y,
        "game started"
    );

    session.initial_frame()?;

    let mut frames: u64 = 0;
    loop {
        let now = Instant::now();

        let polled = input.poll()?;
        if polled.shutdown {
            info!(frames, score = %session.state().score, "quit requested");
            return Ok(ExitReason::QuitRequested);
        }

        session.advance_frame(polled.input)?;
        frames += 1;

        limit_frame_rate(now, budget);
    }
}
