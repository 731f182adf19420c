mod ai;
pub mod common;

pub use ai::{run_game_vs_ai, ExitReason};
