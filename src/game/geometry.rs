// Playfield layout, all in field pixels (origin top-left, y grows downward)

pub const FIELD_WIDTH: f32 = 400.0;
pub const FIELD_HEIGHT: f32 = 400.0;

pub const PADDLE_WIDTH: f32 = 10.0;
pub const PADDLE_HEIGHT: f32 = 60.0;
pub const PADDLE_BUFFER: f32 = 10.0; // Gap between field edge and paddle

pub const BALL_SIZE: f32 = 10.0;

// Per-frame speeds
pub const PADDLE_SPEED: f32 = 2.0;
pub const BALL_X_SPEED: f32 = 3.0;
pub const BALL_Y_SPEED: f32 = 2.0;

pub const TARGET_FPS: u32 = 60;

// Paddle travel range
pub const TOP_BOUNDARY: f32 = 0.0;
pub const BOTTOM_BOUNDARY: f32 = FIELD_HEIGHT - PADDLE_HEIGHT;

// Collision lines: the x at which the ball reaches each paddle's plane
pub const LEFT_BOUNDARY: f32 = PADDLE_BUFFER + PADDLE_WIDTH;
pub const RIGHT_BOUNDARY: f32 = FIELD_WIDTH - PADDLE_BUFFER - PADDLE_WIDTH;

/// Paddle x positions used when drawing
pub const LEFT_PADDLE_X: f32 = PADDLE_BUFFER;
pub const RIGHT_PADDLE_X: f32 = RIGHT_BOUNDARY;

/// Vertical center of the score readout
pub const SCORE_TEXT_Y: f32 = 20.0;

/// Paddle y that centers it vertically in the field
pub fn centered_paddle_y() -> f32 {
    FIELD_HEIGHT / 2.0 - PADDLE_HEIGHT / 2.0
}

/// Top-left corner that centers the ball in the field
pub fn centered_ball() -> (f32, f32) {
    (
        FIELD_WIDTH / 2.0 - BALL_SIZE / 2.0,
        FIELD_HEIGHT / 2.0 - BALL_SIZE / 2.0,
    )
}
