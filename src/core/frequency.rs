//! Character frequency counting.
//!
//! Counts how often each distinct unit of a text occurs. Units are
//! Unicode scalar values (`char`) by default, or extended grapheme
//! clusters when combining sequences should count as one unit.

use serde::ser::{Serialize, SerializeMap, Serializer};
use std::collections::HashMap;
use std::fmt::Display;
use std::hash::Hash;
use unicode_segmentation::UnicodeSegmentation;

/// Occurrence counts keyed by distinct unit.
///
/// Keys are only inserted at their first occurrence, so no key ever
/// maps to zero. Iteration follows first-occurrence order; equality
/// ignores order.
///
/// # Examples
///
/// ```
/// use drills::core::count_characters;
///
/// let counts = count_characters("aabc");
/// assert_eq!(counts.get(&'a'), Some(2));
/// assert_eq!(counts.get(&'z'), None);
/// assert_eq!(counts.total(), 4);
/// ```
#[derive(Debug, Clone)]
pub struct FrequencyMap<K> {
    /// `(key, count)` pairs in first-occurrence order.
    entries: Vec<(K, usize)>,
    /// Key to position in `entries`.
    index: HashMap<K, usize>,
}

impl<K: Eq + Hash + Clone> FrequencyMap<K> {
    /// Creates an empty map.
    #[must_use]
    pub fn new() -> Self {
        Self {
            entries: Vec::new(),
            index: HashMap::new(),
        }
    }

    /// Records one occurrence of `key`.
    pub fn record(&mut self, key: K) {
        if let Some(&pos) = self.index.get(&key) {
            if let Some(entry) = self.entries.get_mut(pos) {
                entry.1 += 1;
            }
        } else {
            self.index.insert(key.clone(), self.entries.len());
            self.entries.push((key, 1));
        }
    }

    /// Returns the count for `key`, or `None` if it never occurred.
    #[must_use]
    pub fn get(&self, key: &K) -> Option<usize> {
        self.index
            .get(key)
            .and_then(|&pos| self.entries.get(pos))
            .map(|(_, count)| *count)
    }

    /// Returns true if `key` occurred at least once.
    #[must_use]
    pub fn contains(&self, key: &K) -> bool {
        self.index.contains_key(key)
    }

    /// Converts into a plain `HashMap`, dropping occurrence order.
    #[must_use]
    pub fn into_hash_map(self) -> HashMap<K, usize> {
        self.entries.into_iter().collect()
    }
}

impl<K> FrequencyMap<K> {
    /// Number of distinct keys.
    #[must_use]
    pub const fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns true if nothing was counted.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Sum of all counts, equal to the number of units consumed.
    #[must_use]
    pub fn total(&self) -> usize {
        self.entries.iter().map(|(_, count)| count).sum()
    }

    /// Iterates `(key, count)` pairs in first-occurrence order.
    pub fn iter(&self) -> impl Iterator<Item = (&K, usize)> {
        self.entries.iter().map(|(key, count)| (key, *count))
    }

    /// Iterates keys in first-occurrence order.
    pub fn keys(&self) -> impl Iterator<Item = &K> {
        self.entries.iter().map(|(key, _)| key)
    }

    /// Returns pairs sorted by count, highest first.
    ///
    /// Ties keep first-occurrence order.
    #[must_use]
    pub fn most_common(&self) -> Vec<(&K, usize)> {
        let mut pairs: Vec<_> = self.iter().collect();
        pairs.sort_by(|a, b| b.1.cmp(&a.1));
        pairs
    }
}

impl<K: Eq + Hash + Clone> Default for FrequencyMap<K> {
    fn default() -> Self {
        Self::new()
    }
}

impl<K: Eq + Hash + Clone> Extend<K> for FrequencyMap<K> {
    fn extend<I: IntoIterator<Item = K>>(&mut self, iter: I) {
        for key in iter {
            self.record(key);
        }
    }
}

impl<K: Eq + Hash + Clone> FromIterator<K> for FrequencyMap<K> {
    fn from_iter<I: IntoIterator<Item = K>>(iter: I) -> Self {
        let mut map = Self::new();
        map.extend(iter);
        map
    }
}

impl<K: Eq + Hash + Clone> PartialEq for FrequencyMap<K> {
    fn eq(&self, other: &Self) -> bool {
        self.len() == other.len() && self.iter().all(|(key, count)| other.get(key) == Some(count))
    }
}

impl<K: Eq + Hash + Clone> Eq for FrequencyMap<K> {}

impl<K: Display> Serialize for FrequencyMap<K> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.entries.len()))?;
        for (key, count) in &self.entries {
            map.serialize_entry(&key.to_string(), count)?;
        }
        map.end()
    }
}

/// Counts each Unicode scalar value in `text`.
///
/// Case, whitespace, and punctuation are ordinary characters. Empty
/// input yields an empty map.
///
/// # Examples
///
/// ```
/// use drills::core::count_characters;
///
/// assert!(count_characters("").is_empty());
/// assert_eq!(count_characters("Aa").len(), 2);
/// ```
#[must_use]
pub fn count_characters(text: &str) -> FrequencyMap<char> {
    text.chars().collect()
}

/// Counts each extended grapheme cluster in `text`.
///
/// A base letter followed by combining marks counts as a single unit.
#[must_use]
pub fn count_graphemes(text: &str) -> FrequencyMap<String> {
    text.graphemes(true).map(str::to_string).collect()
}
