//! CLI command implementations.
//!
//! Each command calls into the pure core and renders the result.

use crate::cli::output::{OutputFormat, format_counts, format_demo, format_sequence};
use crate::cli::parser::{Cli, Commands, CountMode, SortOrder};
use crate::core::{count_characters, count_graphemes, fizz_buzz};
use crate::error::{CommandError, Result};
use crate::io::{FileReader, read_stdin};
use std::io::IsTerminal;
use std::path::Path;
use tracing::debug;

/// Sentence counted by the `demo` command.
pub const DEMO_SENTENCE: &str =
    "this is a test a test for a string and the function that count count words a is";

/// Executes the CLI command.
///
/// # Arguments
///
/// * `cli` - Parsed CLI arguments.
///
/// # Returns
///
/// Result with output string on success.
///
/// # Errors
///
/// Returns an error if input cannot be acquired.
pub fn execute(cli: &Cli) -> Result<String> {
    let format = OutputFormat::parse(&cli.format);

    match &cli.command {
        Commands::FizzBuzz => Ok(cmd_fizzbuzz(format)),
        Commands::Count {
            text,
            file,
            mode,
            sort,
        } => cmd_count(text.as_deref(), file.as_deref(), *mode, *sort, format),
        Commands::Demo => Ok(cmd_demo(format)),
    }
}

/// Where the text for `count` comes from.
enum Input<'a> {
    Arg(&'a str),
    File(&'a Path),
    Stdin,
}

impl<'a> Input<'a> {
    fn select(text: Option<&'a str>, file: Option<&'a Path>) -> Result<Self> {
        match (text, file) {
            (Some(text), _) => Ok(Self::Arg(text)),
            (None, Some(path)) => Ok(Self::File(path)),
            (None, None) if std::io::stdin().is_terminal() => {
                Err(CommandError::MissingInput.into())
            }
            (None, None) => Ok(Self::Stdin),
        }
    }

    fn read(self) -> Result<String> {
        match self {
            Self::Arg(text) => Ok(text.to_string()),
            Self::File(path) => {
                let reader = FileReader::open(path)?;
                debug!(
                    path = reader.path(),
                    size = reader.size(),
                    mmap = reader.uses_mmap(),
                    "reading input file"
                );
                reader.read_to_string()
            }
            Self::Stdin => {
                debug!("reading input from stdin");
                read_stdin()
            }
        }
    }
}

// ==================== Command Implementations ====================

fn cmd_fizzbuzz(format: OutputFormat) -> String {
    let sequence = fizz_buzz();
    debug!(len = sequence.len(), "generated fizzbuzz sequence");
    format_sequence(&sequence, format)
}

fn cmd_count(
    text: Option<&str>,
    file: Option<&Path>,
    mode: CountMode,
    sort: SortOrder,
    format: OutputFormat,
) -> Result<String> {
    let input = Input::select(text, file)?.read()?;

    let output = match mode {
        CountMode::Chars => {
            let counts = count_characters(&input);
            debug!(distinct = counts.len(), total = counts.total(), "counted characters");
            format_counts(&counts, sort, format)
        }
        CountMode::Graphemes => {
            let counts = count_graphemes(&input);
            debug!(distinct = counts.len(), total = counts.total(), "counted graphemes");
            format_counts(&counts, sort, format)
        }
    };

    Ok(output)
}

fn cmd_demo(format: OutputFormat) -> String {
    let sequence = fizz_buzz();
    let counts = count_characters(DEMO_SENTENCE);
    debug!(distinct = counts.len(), "ran demo");
    format_demo(&sequence, DEMO_SENTENCE, &counts, format)
}
