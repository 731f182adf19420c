use std::io;

use rand::Rng;
use tracing::debug;

use crate::config::DisplayConfig;
use crate::ui::{render, Surface};

use super::input::InputState;
use super::state::{Direction, GameState, ScoreDelta};

/// A running game: the state plus the surface it is shown on.
/// There is no end state; the owner stops calling `advance_frame`.
pub struct GameSession<S: Surface> {
    state: GameState,
    surface: S,
    display: DisplayConfig,
}

impl<S: Surface> GameSession<S> {
    /// Fresh game with a serve direction drawn from `rng`
    pub fn new<R: Rng + ?Sized>(surface: S, display: DisplayConfig, rng: &mut R) -> Self {
        Self::from_state(GameState::new(rng), surface, display)
    }

    /// Fresh game with a fixed serve direction
    pub fn with_direction(
        surface: S,
        display: DisplayConfig,
        dir_x: Direction,
        dir_y: Direction,
    ) -> Self {
        Self::from_state(GameState::with_direction(dir_x, dir_y), surface, display)
    }

    pub fn from_state(state: GameState, surface: S, display: DisplayConfig) -> Self {
        Self {
            state,
            surface,
            display,
        }
    }

    pub fn state(&self) -> &GameState {
        &self.state
    }

    pub fn surface(&self) -> &S {
        &self.surface
    }

    /// Show the state as constructed, without moving anything
    pub fn initial_frame(&mut self) -> io::Result<()> {
        self.draw()
    }

    /// Move paddles and ball by one frame, then show the result
    pub fn advance_frame(&mut self, input: InputState) -> io::Result<ScoreDelta> {
        let delta = self.state.step(input);
        if delta.any() {
            debug!(score = %self.state.score, "point scored");
        }

        self.draw()?;
        Ok(delta)
    }

    fn draw(&mut self) -> io::Result<()> {
        render(&self.state, &mut self.surface, &self.display);
        self.surface.present()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::Score;
    use crate::ui::recording::RecordingSurface;
    use crate::ui::FieldRect;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn session() -> GameSession<RecordingSurface> {
        GameSession::with_direction(
            RecordingSurface::default(),
            DisplayConfig::default(),
            Direction::Positive,
            Direction::Positive,
        )
    }

    #[test]
    fn test_initial_frame_shows_start_position() -> io::Result<()> {
        let mut session = session();
        session.initial_frame()?;

        let frame = session.surface().last_frame();
        assert_eq!(
            RecordingSurface::rects(frame),
            vec![
                FieldRect::new(10.0, 170.0, 10.0, 60.0),
                FieldRect::new(380.0, 170.0, 10.0, 60.0),
                FieldRect::new(195.0, 195.0, 10.0, 10.0),
            ]
        );
        assert_eq!(RecordingSurface::texts(frame), vec!["0 : 0"]);
        assert_eq!(session.surface().presents(), 1);
        Ok(())
    }

    #[test]
    fn test_initial_frame_does_not_advance() -> io::Result<()> {
        let mut session = session();
        let before = session.state().clone();

        session.initial_frame()?;
        session.initial_frame()?;

        assert_eq!(session.state(), &before);
        Ok(())
    }

    #[test]
    fn test_advance_frame_draws_new_state() -> io::Result<()> {
        let mut session = session();
        session.initial_frame()?;
        session.advance_frame(InputState {
            move_up: true,
            move_down: false,
        })?;

        let frame = session.surface().last_frame();
        let rects = RecordingSurface::rects(frame);
        assert_eq!(rects[0].y, 168.0);
        assert_eq!(rects[1].y, 172.0);
        assert_eq!((rects[2].x, rects[2].y), (198.0, 197.0));
        assert_eq!(session.surface().presents(), 2);
        Ok(())
    }

    #[test]
    fn test_score_accumulates_over_frames() -> io::Result<()> {
        let mut session = session();
        let mut total = Score::default();
        let mut previous = Score::default();

        for _ in 0..2_000 {
            let delta = session.advance_frame(InputState::default())?;
            assert!(delta.left + delta.right <= 1);
            total.left += delta.left;
            total.right += delta.right;

            let score = session.state().score;
            assert!(score.left >= previous.left && score.right >= previous.right);
            previous = score;
        }

        assert_eq!(session.state().score, total);
        let expected = total.to_string();
        assert_eq!(
            RecordingSurface::texts(session.surface().last_frame()),
            vec![expected.as_str()]
        );
        Ok(())
    }

    #[test]
    fn test_seeded_sessions_match() -> io::Result<()> {
        let mut a = GameSession::new(
            RecordingSurface::default(),
            DisplayConfig::default(),
            &mut StdRng::seed_from_u64(99),
        );
        let mut b = GameSession::new(
            RecordingSurface::default(),
            DisplayConfig::default(),
            &mut StdRng::seed_from_u64(99),
        );

        for _ in 0..300 {
            a.advance_frame(InputState::default())?;
            b.advance_frame(InputState::default())?;
        }

        assert_eq!(a.state(), b.state());
        assert_eq!(a.surface().commands, b.surface().commands);
        Ok(())
    }
}
