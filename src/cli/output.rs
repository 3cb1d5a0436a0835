//! Output formatting for CLI commands.
//!
//! Supports text and JSON output formats.

use crate::cli::parser::SortOrder;
use crate::core::{FrequencyMap, SequenceElement};
use crate::error::Error;
use serde::Serialize;
use serde::ser::{SerializeMap, Serializer};
use std::fmt::{Debug, Display, Write};

/// Output format options.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    /// Human-readable text output.
    Text,
    /// JSON output.
    Json,
}

impl OutputFormat {
    /// Parses format from string; unknown values fall back to text.
    #[must_use]
    pub fn parse(s: &str) -> Self {
        match s.to_lowercase().as_str() {
            "json" => Self::Json,
            _ => Self::Text,
        }
    }
}

/// Formats the FizzBuzz sequence.
#[must_use]
pub fn format_sequence(sequence: &[SequenceElement], format: OutputFormat) -> String {
    match format {
        OutputFormat::Text => format_sequence_text(sequence),
        OutputFormat::Json => format_json(&sequence),
    }
}

fn format_sequence_text(sequence: &[SequenceElement]) -> String {
    let mut output = String::new();
    for element in sequence {
        let _ = writeln!(output, "{element}");
    }
    output
}

/// Formats a frequency map.
#[must_use]
pub fn format_counts<K: Debug + Display>(
    counts: &FrequencyMap<K>,
    order: SortOrder,
    format: OutputFormat,
) -> String {
    let pairs = ordered_pairs(counts, order);
    match format {
        OutputFormat::Text => format_counts_text(&pairs, counts.total()),
        OutputFormat::Json => format_json(&CountsReport::new(counts, pairs)),
    }
}

fn format_counts_text<K: Debug>(pairs: &[(&K, usize)], total: usize) -> String {
    if pairs.is_empty() {
        return "No characters counted.\n".to_string();
    }

    let mut output = String::new();
    for (key, count) in pairs {
        let _ = writeln!(output, "{key:?}: {count}");
    }
    let _ = writeln!(output, "{} distinct, {total} total", pairs.len());
    output
}

/// Formats the demo: the sequence followed by the counts of `sample`.
#[must_use]
pub fn format_demo<K: Debug + Display>(
    sequence: &[SequenceElement],
    sample: &str,
    counts: &FrequencyMap<K>,
    format: OutputFormat,
) -> String {
    let pairs = ordered_pairs(counts, SortOrder::FirstSeen);
    match format {
        OutputFormat::Text => {
            let mut output = String::new();
            output.push_str("FizzBuzz 1..=100\n");
            output.push_str(&"-".repeat(16));
            output.push('\n');
            output.push_str(&format_sequence_text(sequence));
            output.push('\n');
            let _ = writeln!(output, "Character counts of {sample:?}");
            output.push_str(&"-".repeat(16));
            output.push('\n');
            output.push_str(&format_counts_text(&pairs, counts.total()));
            output
        }
        OutputFormat::Json => {
            #[derive(Serialize)]
            #[serde(bound(serialize = "K: Display"))]
            struct DemoOutput<'a, K: Display> {
                fizzbuzz: &'a [SequenceElement],
                sample: &'a str,
                counts: CountsReport<'a, K>,
            }
            format_json(&DemoOutput {
                fizzbuzz: sequence,
                sample,
                counts: CountsReport::new(counts, pairs),
            })
        }
    }
}

/// Formats an error for display.
#[must_use]
pub fn format_error(error: &Error, format: OutputFormat) -> String {
    match format {
        OutputFormat::Text => error.to_string(),
        OutputFormat::Json => {
            #[derive(Serialize)]
            struct ErrorOutput {
                error: String,
            }
            format_json(&ErrorOutput {
                error: error.to_string(),
            })
        }
    }
}

fn ordered_pairs<K>(counts: &FrequencyMap<K>, order: SortOrder) -> Vec<(&K, usize)> {
    match order {
        SortOrder::FirstSeen => counts.iter().collect(),
        SortOrder::Count => counts.most_common(),
    }
}

/// JSON shape of a counting result.
#[derive(Serialize)]
#[serde(bound(serialize = "K: Display"))]
struct CountsReport<'a, K: Display> {
    total: usize,
    distinct: usize,
    counts: OrderedCounts<'a, K>,
}

impl<'a, K: Display> CountsReport<'a, K> {
    fn new(map: &FrequencyMap<K>, pairs: Vec<(&'a K, usize)>) -> Self {
        Self {
            total: map.total(),
            distinct: map.len(),
            counts: OrderedCounts(pairs),
        }
    }
}

/// Serializes pairs as a JSON object, keeping their order.
struct OrderedCounts<'a, K>(Vec<(&'a K, usize)>);

impl<K: Display> Serialize for OrderedCounts<'_, K> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.0.len()))?;
        for (key, count) in &self.0 {
            map.serialize_entry(&key.to_string(), count)?;
        }
        map.end()
    }
}

/// Formats a value as JSON.
fn format_json<T: Serialize>(value: &T) -> String {
    let mut json = serde_json::to_string_pretty(value).unwrap_or_else(|_| "{}".to_string());
    json.push('\n');
    json
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{count_characters, fizz_buzz};
    use crate::error::CommandError;

    #[test]
    fn test_output_format_from_str() {
        assert_eq!(OutputFormat::parse("json"), OutputFormat::Json);
        assert_eq!(OutputFormat::parse("JSON"), OutputFormat::Json);
        assert_eq!(OutputFormat::parse("text"), OutputFormat::Text);
        assert_eq!(OutputFormat::parse("unknown"), OutputFormat::Text);
    }

    #[test]
    fn test_format_sequence_text() {
        let text = format_sequence(&fizz_buzz(), OutputFormat::Text);
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines.len(), 100);
        assert_eq!(&lines[..5], &["1", "2", "Fizz", "4", "Buzz"]);
        assert_eq!(lines[14], "FizzBuzz");
    }

    #[test]
    fn test_format_sequence_json() {
        let json = format_sequence(&fizz_buzz(), OutputFormat::Json);
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        let array = value.as_array().unwrap();
        assert_eq!(array.len(), 100);
        assert_eq!(array[0], serde_json::json!(1));
        assert_eq!(array[2], serde_json::json!("Fizz"));
        assert_eq!(array[14], serde_json::json!("FizzBuzz"));
    }

    #[test]
    fn test_format_counts_text() {
        let text = format_counts(
            &count_characters("aabc"),
            SortOrder::FirstSeen,
            OutputFormat::Text,
        );
        assert_eq!(text, "'a': 2\n'b': 1\n'c': 1\n3 distinct, 4 total\n");
    }

    #[test]
    fn test_format_counts_sorted() {
        let text = format_counts(&count_characters("abb"), SortOrder::Count, OutputFormat::Text);
        assert!(text.starts_with("'b': 2\n'a': 1\n"));
    }

    #[test]
    fn test_format_counts_empty() {
        let text = format_counts(&count_characters(""), SortOrder::FirstSeen, OutputFormat::Text);
        assert_eq!(text, "No characters counted.\n");

        let json = format_counts(&count_characters(""), SortOrder::FirstSeen, OutputFormat::Json);
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(value["total"], 0);
        assert_eq!(value["counts"], serde_json::json!({}));
    }

    #[test]
    fn test_format_counts_json() {
        let json = format_counts(
            &count_characters("aabc"),
            SortOrder::FirstSeen,
            OutputFormat::Json,
        );
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(value["total"], 4);
        assert_eq!(value["distinct"], 3);
        assert_eq!(value["counts"], serde_json::json!({"a": 2, "b": 1, "c": 1}));
    }

    #[test]
    fn test_format_counts_escapes_whitespace() {
        let text = format_counts(&count_characters("\n"), SortOrder::FirstSeen, OutputFormat::Text);
        assert!(text.starts_with("'\\n': 1\n"));
    }

    #[test]
    fn test_format_error() {
        let err: Error = CommandError::MissingInput.into();
        assert!(format_error(&err, OutputFormat::Text).starts_with("command error"));

        let json = format_error(&err, OutputFormat::Json);
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert!(value["error"].as_str().unwrap().contains("no input"));
    }
}
