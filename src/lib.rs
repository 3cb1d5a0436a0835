//! # Drills
//!
//! Two small, pure drills behind a command-line front end.
//!
//! ## Features
//!
//! - **FizzBuzz**: the integers `1..=100` with multiples of three, five,
//!   and fifteen replaced by `Fizz`, `Buzz`, and `FizzBuzz`
//! - **Character frequency**: per-character occurrence counts in
//!   first-occurrence order, with an optional grapheme-cluster mode
//! - **Input**: text arguments, files (memory-mapped when large), or stdin
//! - **Output**: human-readable text or JSON

#![deny(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]
#![warn(missing_docs)]
// Note: unsafe is needed for memory-mapped I/O (memmap2)
#![warn(unsafe_code)]

pub mod cli;
pub mod core;
pub mod error;
pub mod io;

// Re-export commonly used types at crate root
pub use error::{Error, Result};

// Re-export core domain types
pub use crate::core::{
    FrequencyMap, Label, SequenceElement, classify, count_characters, count_graphemes, fizz_buzz,
};

// Re-export CLI types
pub use cli::{Cli, Commands, OutputFormat};
