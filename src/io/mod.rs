//! Input acquisition for drills.
//!
//! Reads text from files (with memory mapping for large files) or from
//! standard input.

pub mod reader;

pub use reader::{FileReader, read_file, read_source, read_stdin};
