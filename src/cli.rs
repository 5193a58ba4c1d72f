//! CLI argument parsing and command dispatch

pub mod args;
pub mod commands;

// Re-export types for convenient access
pub use args::{Cli, ColorOption, Command};
pub use commands::run;
