pub mod geometry;
pub mod input;
pub mod paddle;
pub mod physics;
pub mod session;
pub mod state;

pub use input::{InputSource, InputState, PolledInput, TerminalInput};
pub use session::GameSession;
pub use state::{Direction, GameState, Score};
