use std::fmt;
use std::ops::AddAssign;

use rand::Rng;

use super::geometry::{centered_ball, centered_paddle_y};
use super::input::InputState;
use super::paddle::{update_paddle, Driver};
use super::physics::step_ball;

/// One axis of ball travel
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Negative,
    Positive,
}

impl Direction {
    /// -1.0 or +1.0
    pub fn sign(self) -> f32 {
        match self {
            Direction::Negative => -1.0,
            Direction::Positive => 1.0,
        }
    }

    /// Pick either direction with equal probability
    pub fn random<R: Rng + ?Sized>(rng: &mut R) -> Self {
        if rng.gen_bool(0.5) {
            Direction::Positive
        } else {
            Direction::Negative
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Ball {
    pub x: f32,
    pub y: f32,
    pub dir_x: Direction,
    pub dir_y: Direction,
}

/// Points gained in a single frame
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct ScoreDelta {
    pub left: u32,
    pub right: u32,
}

impl ScoreDelta {
    pub fn any(&self) -> bool {
        self.left > 0 || self.right > 0
    }
}

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct Score {
    pub left: u32,
    pub right: u32,
}

impl AddAssign<ScoreDelta> for Score {
    fn add_assign(&mut self, delta: ScoreDelta) {
        self.left += delta.left;
        self.right += delta.right;
    }
}

impl fmt::Display for Score {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} : {}", self.left, self.right)
    }
}

/// Everything that changes from frame to frame.
/// The left paddle belongs to the player, the right one to the scripted tracker.
#[derive(Debug, Clone, PartialEq)]
pub struct GameState {
    pub score: Score,
    pub left_paddle_y: f32,
    pub right_paddle_y: f32,
    pub ball: Ball,
}

impl GameState {
    /// Centered paddles and ball, serve direction drawn from `rng`
    pub fn new<R: Rng + ?Sized>(rng: &mut R) -> Self {
        let dir_x = Direction::random(rng);
        let dir_y = Direction::random(rng);
        Self::with_direction(dir_x, dir_y)
    }

    /// Centered paddles and ball with a fixed serve direction
    pub fn with_direction(dir_x: Direction, dir_y: Direction) -> Self {
        let (ball_x, ball_y) = centered_ball();
        let paddle_y = centered_paddle_y();

        Self {
            score: Score::default(),
            left_paddle_y: paddle_y,
            right_paddle_y: paddle_y,
            ball: Ball {
                x: ball_x,
                y: ball_y,
                dir_x,
                dir_y,
            },
        }
    }

    /// Advance one frame: paddles first, then the ball against the moved paddles.
    pub fn step(&mut self, input: InputState) -> ScoreDelta {
        // Both paddles see the ball where it was at the start of the frame
        self.left_paddle_y = update_paddle(self.left_paddle_y, self.ball.y, Driver::Human(input));
        self.right_paddle_y = update_paddle(self.right_paddle_y, self.ball.y, Driver::Scripted);

        let next = step_ball(self.ball, self.left_paddle_y, self.right_paddle_y);
        self.ball = Ball {
            x: next.x,
            y: next.y,
            dir_x: next.dir_x,
            dir_y: next.dir_y,
        };
        self.score += next.delta;

        next.delta
    }
}
