//! Command handlers for CLI subcommands
//!
//! This module contains the implementation logic for each CLI subcommand.

mod classify;
mod completions;
mod config;
mod convert;

pub use classify::handle_classify;
pub use completions::handle_completions;
pub use config::handle_config;
pub use convert::handle_convert;
