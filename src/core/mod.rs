//! Core domain logic for drills.
//!
//! Pure functions with no I/O: the FizzBuzz sequence and character
//! frequency counting.

pub mod frequency;
pub mod sequence;

pub use frequency::{FrequencyMap, count_characters, count_graphemes};
pub use sequence::{
    Label, SEQUENCE_END, SEQUENCE_LEN, SEQUENCE_START, SequenceElement, classify, fizz_buzz,
};
