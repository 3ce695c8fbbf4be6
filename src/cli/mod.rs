//! CLI module - argument parsing, the assessment wizard TUI, and prompts

mod args;
mod prompts;

pub mod dashboard;
pub mod wizard;

pub use args::{Cli, Commands};
pub use prompts::confirm_overwrite;
