//! CLI layer for drills.
//!
//! Provides the command-line interface using clap, rendering core
//! results as text or JSON.

pub mod commands;
pub mod output;
pub mod parser;

pub use commands::execute;
pub use output::OutputFormat;
pub use parser::{Cli, Commands, CountMode, SortOrder};
