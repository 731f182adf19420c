use super::geometry::{
    BALL_SIZE, BALL_X_SPEED, BALL_Y_SPEED, FIELD_HEIGHT, FIELD_WIDTH, LEFT_BOUNDARY,
    PADDLE_HEIGHT, RIGHT_BOUNDARY,
};
use super::state::{Ball, Direction, ScoreDelta};

/// Outcome of moving the ball by one frame
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BallStep {
    pub x: f32,
    pub y: f32,
    pub dir_x: Direction,
    pub dir_y: Direction,
    pub delta: ScoreDelta,
}

/// Move the ball one frame and resolve paddle, goal and wall contacts.
///
/// Contacts are tested at the new position only, there is no swept test, so a
/// ball fast enough to jump a paddle's whole width in one frame passes through it.
pub fn step_ball(ball: Ball, left_paddle_y: f32, right_paddle_y: f32) -> BallStep {
    let x = ball.x + ball.dir_x.sign() * BALL_X_SPEED;
    let mut y = ball.y + ball.dir_y.sign() * BALL_Y_SPEED;
    let mut dir_x = ball.dir_x;
    let mut dir_y = ball.dir_y;
    let mut delta = ScoreDelta::default();

    // Left and right: first match wins, paddles before goals
    if x <= LEFT_BOUNDARY && overlaps_paddle(y, left_paddle_y) {
        dir_x = Direction::Positive;
    } else if x >= RIGHT_BOUNDARY && overlaps_paddle(y, right_paddle_y) {
        dir_x = Direction::Negative;
    } else if x <= 0.0 {
        delta.right += 1;
        dir_x = Direction::Positive;
    } else if x >= FIELD_WIDTH - BALL_SIZE {
        delta.left += 1;
        dir_x = Direction::Negative;
    }

    // Top and bottom walls
    if y <= 0.0 {
        y = 0.0;
        dir_y = Direction::Positive;
    } else if y + BALL_SIZE >= FIELD_HEIGHT {
        y = FIELD_HEIGHT - BALL_SIZE;
        dir_y = Direction::Negative;
    }

    BallStep {
        x,
        y,
        dir_x,
        dir_y,
        delta,
    }
}

/// Inclusive overlap of the ball's vertical span with a paddle's
fn overlaps_paddle(ball_y: f32, paddle_y: f32) -> bool {
    ball_y + BALL_SIZE >= paddle_y && ball_y <= paddle_y + PADDLE_HEIGHT
}
