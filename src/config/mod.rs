// Configuration module for Pong
// Fixed at build time; there is no config file

pub mod types;

pub use types::{Config, DisplayConfig, KeyBindings};
