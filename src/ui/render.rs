use crate::config::DisplayConfig;
use crate::game::geometry::{
    BALL_SIZE, FIELD_WIDTH, LEFT_PADDLE_X, PADDLE_HEIGHT, PADDLE_WIDTH, RIGHT_PADDLE_X,
    SCORE_TEXT_Y,
};
use crate::game::GameState;

use super::surface::{FieldRect, Surface};

/// Draw one frame of `state`. Does not present it.
pub fn render<S: Surface + ?Sized>(state: &GameState, surface: &mut S, display: &DisplayConfig) {
    let ink = display.foreground;

    surface.fill(display.background);

    surface.fill_rect(
        FieldRect::new(LEFT_PADDLE_X, state.left_paddle_y, PADDLE_WIDTH, PADDLE_HEIGHT),
        ink,
    );
    surface.fill_rect(
        FieldRect::new(RIGHT_PADDLE_X, state.right_paddle_y, PADDLE_WIDTH, PADDLE_HEIGHT),
        ink,
    );

    surface.fill_rect(
        FieldRect::new(state.ball.x, state.ball.y, BALL_SIZE, BALL_SIZE),
        ink,
    );

    surface.draw_text_centered(&state.score.to_string(), FIELD_WIDTH / 2.0, SCORE_TEXT_Y, ink);
}
