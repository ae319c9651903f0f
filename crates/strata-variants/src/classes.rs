//! Class token lists and the token merger.
//!
//! # Design
//! - Tokens are opaque strings; no utility-level conflict detection happens here.
//! - Dedupe keeps the last occurrence of each token so later sources win placement.
//! - Output is a single-space join and byte-identical for identical inputs.

use std::collections::HashSet;
use std::fmt::{self, Display, Formatter};

/// Ordered sequence of class tokens.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct ClassList {
    tokens: Vec<String>,
}

impl ClassList {
    /// Create an empty list.
    #[must_use]
    pub const fn new() -> Self {
        Self { tokens: Vec::new() }
    }

    /// Split a whitespace-delimited class string into tokens.
    #[must_use]
    pub fn parse(raw: impl AsRef<str>) -> Self {
        Self {
            tokens: raw.as_ref().split_whitespace().map(str::to_string).collect(),
        }
    }

    /// Tokens in declaration order.
    pub fn tokens(&self) -> impl Iterator<Item = &str> {
        self.tokens.iter().map(String::as_str)
    }

    /// Number of tokens, duplicates included.
    #[must_use]
    pub fn len(&self) -> usize {
        self.tokens.len()
    }

    /// Whether the list holds no tokens.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }

    /// Append every token of `other` after the current tokens.
    pub fn extend_from(&mut self, other: &Self) {
        self.tokens.extend(other.tokens.iter().cloned());
    }

    /// Append tokens parsed from a raw class string.
    pub fn push_str(&mut self, raw: &str) {
        self.tokens.extend(raw.split_whitespace().map(str::to_string));
    }

    /// Collapse the list through the merger.
    #[must_use]
    pub fn merged(&self) -> String {
        dedupe_last(self.tokens()).join(" ")
    }
}

impl Display for ClassList {
    fn fmt(&self, formatter: &mut Formatter<'_>) -> fmt::Result {
        formatter.write_str(&self.tokens.join(" "))
    }
}

impl From<&str> for ClassList {
    fn from(raw: &str) -> Self {
        Self::parse(raw)
    }
}

impl From<String> for ClassList {
    fn from(raw: String) -> Self {
        Self::parse(raw)
    }
}

impl<const N: usize> From<[&str; N]> for ClassList {
    fn from(parts: [&str; N]) -> Self {
        parts.into_iter().collect()
    }
}

impl<'a> FromIterator<&'a str> for ClassList {
    fn from_iter<I: IntoIterator<Item = &'a str>>(iter: I) -> Self {
        let mut list = Self::new();
        for part in iter {
            list.push_str(part);
        }
        list
    }
}

/// Merge class strings from several sources into one deduplicated string.
///
/// Each source is split on whitespace. When a token repeats, only its last
/// occurrence survives, and surviving tokens keep their relative order.
///
/// ```
/// use strata_variants::merge;
///
/// assert_eq!(merge(["text-sm", "mt-2"]), "text-sm mt-2");
/// assert_eq!(merge(["a b", "a"]), "b a");
/// ```
#[must_use]
pub fn merge<I, S>(sources: I) -> String
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let sources: Vec<S> = sources.into_iter().collect();
    let tokens = sources
        .iter()
        .flat_map(|source| source.as_ref().split_whitespace());
    dedupe_last(tokens).join(" ")
}

/// Merge optional class sources, skipping absent ones.
#[must_use]
pub fn merge_classes<I, S>(sources: I) -> String
where
    I: IntoIterator<Item = Option<S>>,
    S: AsRef<str>,
{
    merge(sources.into_iter().flatten())
}

fn dedupe_last<'a>(tokens: impl Iterator<Item = &'a str>) -> Vec<&'a str> {
    let tokens: Vec<&str> = tokens.collect();
    let mut seen = HashSet::with_capacity(tokens.len());
    let mut survivors: Vec<&str> = tokens
        .into_iter()
        .rev()
        .filter(|token| seen.insert(*token))
        .collect();
    survivors.reverse();
    survivors
}
