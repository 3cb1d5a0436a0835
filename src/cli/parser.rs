//! Command-line argument parsing.
//!
//! Defines the CLI structure using clap derive macros.

use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

/// Drills: FizzBuzz and character frequency counting.
#[derive(Parser, Debug)]
#[command(name = "drills")]
#[command(version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Enable verbose (debug) logging on stderr.
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Output format (text, json).
    #[arg(long, default_value = "text", env = "DRILLS_FORMAT", global = true)]
    pub format: String,

    /// The subcommand to execute.
    #[command(subcommand)]
    pub command: Commands,
}

/// Available CLI commands.
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Print the FizzBuzz sequence for 1 through 100.
    #[command(name = "fizzbuzz")]
    FizzBuzz,

    /// Count occurrences of each character in some text.
    ///
    /// Reads TEXT, or the file given with --file, or standard input.
    Count {
        /// Text to count.
        #[arg(conflicts_with = "file")]
        text: Option<String>,

        /// Read the text from a file.
        #[arg(short, long)]
        file: Option<PathBuf>,

        /// Unit of counting.
        #[arg(short, long, value_enum, default_value_t = CountMode::Chars)]
        mode: CountMode,

        /// Order of the listed counts.
        #[arg(short, long, value_enum, default_value_t = SortOrder::FirstSeen)]
        sort: SortOrder,
    },

    /// Run both drills on built-in input.
    Demo,
}

/// Unit the frequency counter operates on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum CountMode {
    /// Unicode scalar values.
    Chars,
    /// Extended grapheme clusters.
    Graphemes,
}

/// Ordering of counted entries in output.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum SortOrder {
    /// Order of first occurrence in the input.
    FirstSeen,
    /// Highest count first; ties keep first-occurrence order.
    Count,
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_parse() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_count_defaults() {
        let cli = Cli::try_parse_from(["drills", "count", "aabc"]).unwrap();
        match cli.command {
            Commands::Count {
                text,
                file,
                mode,
                sort,
            } => {
                assert_eq!(text.as_deref(), Some("aabc"));
                assert!(file.is_none());
                assert_eq!(mode, CountMode::Chars);
                assert_eq!(sort, SortOrder::FirstSeen);
            }
            other => panic!("unexpected command: {other:?}"),
        }
        assert_eq!(cli.format, "text");
    }

    #[test]
    fn test_count_text_conflicts_with_file() {
        let result = Cli::try_parse_from(["drills", "count", "abc", "--file", "x.txt"]);
        assert!(result.is_err());
    }

    #[test]
    fn test_global_flags_after_subcommand() {
        let cli =
            Cli::try_parse_from(["drills", "fizzbuzz", "--format", "json", "-v"]).unwrap();
        assert!(cli.verbose);
        assert_eq!(cli.format, "json");
        assert!(matches!(cli.command, Commands::FizzBuzz));
    }

    #[test]
    fn test_count_mode_and_sort() {
        let cli = Cli::try_parse_from([
            "drills",
            "count",
            "--mode",
            "graphemes",
            "--sort",
            "count",
            "text",
        ])
        .unwrap();
        assert!(matches!(
            cli.command,
            Commands::Count {
                mode: CountMode::Graphemes,
                sort: SortOrder::Count,
                ..
            }
        ));
    }
}
