//! FizzBuzz sequence generation.
//!
//! Produces the integers `1..=100` with multiples of three, five, and
//! fifteen replaced by their labels.

use serde::{Serialize, Serializer};
use std::fmt;

/// First integer of the generated sequence.
pub const SEQUENCE_START: u32 = 1;

/// Last integer (inclusive) of the generated sequence.
pub const SEQUENCE_END: u32 = 100;

/// Number of elements in the generated sequence.
pub const SEQUENCE_LEN: usize = 100;

/// A label substituted for a multiple of three and/or five.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Label {
    /// Multiple of three only.
    Fizz,
    /// Multiple of five only.
    Buzz,
    /// Multiple of both three and five.
    FizzBuzz,
}

impl Label {
    /// Returns the label text.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Fizz => "Fizz",
            Self::Buzz => "Buzz",
            Self::FizzBuzz => "FizzBuzz",
        }
    }
}

impl fmt::Display for Label {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl Serialize for Label {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

/// One position of the FizzBuzz sequence.
///
/// Serializes untagged, so a sequence renders as `[1, 2, "Fizz", ...]`.
///
/// # Examples
///
/// ```
/// use drills::core::{Label, SequenceElement, classify};
///
/// assert_eq!(classify(7), SequenceElement::Number(7));
/// assert_eq!(classify(30), SequenceElement::Label(Label::FizzBuzz));
/// assert_eq!(classify(9).to_string(), "Fizz");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(untagged)]
pub enum SequenceElement {
    /// The position itself, for integers not divisible by three or five.
    Number(u32),
    /// A substituted label.
    Label(Label),
}

impl SequenceElement {
    /// Returns the number, if this element was not substituted.
    #[must_use]
    pub const fn number(self) -> Option<u32> {
        match self {
            Self::Number(n) => Some(n),
            Self::Label(_) => None,
        }
    }

    /// Returns the label, if this element was substituted.
    #[must_use]
    pub const fn label(self) -> Option<Label> {
        match self {
            Self::Number(_) => None,
            Self::Label(label) => Some(label),
        }
    }
}

impl fmt::Display for SequenceElement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Number(n) => write!(f, "{n}"),
            Self::Label(label) => label.fmt(f),
        }
    }
}

impl From<Label> for SequenceElement {
    fn from(label: Label) -> Self {
        Self::Label(label)
    }
}

/// Classifies a single integer.
///
/// Divisibility by fifteen is checked first; checking five or three
/// first would label multiples of fifteen as `Buzz` or `Fizz`.
#[must_use]
pub const fn classify(i: u32) -> SequenceElement {
    if i % 15 == 0 {
        SequenceElement::Label(Label::FizzBuzz)
    } else if i % 5 == 0 {
        SequenceElement::Label(Label::Buzz)
    } else if i % 3 == 0 {
        SequenceElement::Label(Label::Fizz)
    } else {
        SequenceElement::Number(i)
    }
}

/// Returns the FizzBuzz sequence for `1..=100`, in ascending order.
///
/// # Examples
///
/// ```
/// use drills::core::fizz_buzz;
///
/// let seq = fizz_buzz();
/// assert_eq!(seq.len(), 100);
/// assert_eq!(seq[14].to_string(), "FizzBuzz");
/// ```
#[must_use]
pub fn fizz_buzz() -> Vec<SequenceElement> {
    (SEQUENCE_START..=SEQUENCE_END).map(classify).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use test_case::test_case;

    #[test]
    fn test_length() {
        assert_eq!(fizz_buzz().len(), SEQUENCE_LEN);
    }

    #[test]
    fn test_first_five() {
        let seq = fizz_buzz();
        assert_eq!(
            &seq[..5],
            &[
                SequenceElement::Number(1),
                SequenceElement::Number(2),
                SequenceElement::Label(Label::Fizz),
                SequenceElement::Number(4),
                SequenceElement::Label(Label::Buzz),
            ]
        );
    }

    #[test_case(3, Label::Fizz)]
    #[test_case(5, Label::Buzz)]
    #[test_case(15, Label::FizzBuzz)]
    #[test_case(45, Label::FizzBuzz)]
    #[test_case(99, Label::Fizz)]
    #[test_case(100, Label::Buzz)]
    fn test_labels(i: u32, expected: Label) {
        assert_eq!(classify(i).label(), Some(expected));
    }

    #[test_case(1)]
    #[test_case(2)]
    #[test_case(98)]
    fn test_numbers(i: u32) {
        assert_eq!(classify(i).number(), Some(i));
    }

    #[test]
    fn test_positions_match_classify() {
        for (idx, element) in fizz_buzz().into_iter().enumerate() {
            let i = u32::try_from(idx).unwrap_or(u32::MAX) + 1;
            assert_eq!(element, classify(i));
        }
    }

    #[test]
    fn test_label_counts() {
        let seq = fizz_buzz();
        let count = |label| seq.iter().filter(|e| e.label() == Some(label)).count();
        assert_eq!(count(Label::FizzBuzz), 6);
        assert_eq!(count(Label::Buzz), 14);
        assert_eq!(count(Label::Fizz), 27);
    }

    #[test]
    fn test_display() {
        assert_eq!(SequenceElement::Number(42).to_string(), "42");
        assert_eq!(SequenceElement::from(Label::Buzz).to_string(), "Buzz");
    }

    #[test]
    fn test_serialize_untagged() {
        let json = serde_json::to_string(&fizz_buzz()[..5]).unwrap_or_default();
        assert_eq!(json, r#"[1,2,"Fizz",4,"Buzz"]"#);
    }
}
