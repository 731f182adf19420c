use super::geometry::{BALL_SIZE, BOTTOM_BOUNDARY, PADDLE_HEIGHT, PADDLE_SPEED, TOP_BOUNDARY};
use super::input::InputState;

/// What moves a paddle this frame
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Driver {
    /// Player keys
    Human(InputState),
    /// Always chases the ball's vertical center, no dead zone
    Scripted,
}

/// Next paddle y for this frame, always within the travel range
pub fn update_paddle(paddle_y: f32, ball_y: f32, driver: Driver) -> f32 {
    let mut y = paddle_y;

    match driver {
        Driver::Human(input) => {
            // Independent checks: holding both keys cancels out
            if input.move_up {
                y -= PADDLE_SPEED;
            }
            if input.move_down {
                y += PADDLE_SPEED;
            }
        }
        Driver::Scripted => {
            if y + PADDLE_HEIGHT / 2.0 > ball_y + BALL_SIZE / 2.0 {
                y -= PADDLE_SPEED;
            } else {
                y += PADDLE_SPEED;
            }
        }
    }

    clamp_paddle(y)
}

pub fn clamp_paddle(y: f32) -> f32 {
    if y <= TOP_BOUNDARY {
        TOP_BOUNDARY
    } else if y >= BOTTOM_BOUNDARY {
        BOTTOM_BOUNDARY
    } else {
        y
    }
}
