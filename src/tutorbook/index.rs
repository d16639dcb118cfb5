//! User-facing indexes.
//!
//! Users address persons by their 1-based position in the list they last saw
//! (the model's filtered list). Internally everything is 0-based. [`Index`]
//! holds the 0-based value and converts at the edges, so command code never
//! does `- 1` arithmetic by hand.

use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Index {
    zero_based: usize,
}

impl Index {
    pub fn from_zero_based(zero_based: usize) -> Self {
        Self { zero_based }
    }

    /// Panics on 0; use [`str::parse`] for untrusted input.
    pub fn from_one_based(one_based: usize) -> Self {
        assert!(one_based > 0, "one-based index must be positive");
        Self {
            zero_based: one_based - 1,
        }
    }

    pub fn zero_based(&self) -> usize {
        self.zero_based
    }

    pub fn one_based(&self) -> usize {
        self.zero_based + 1
    }
}

impl fmt::Display for Index {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.one_based())
    }
}

impl FromStr for Index {
    type Err = String;

    /// Accepts a non-zero unsigned integer, surrounding whitespace allowed.
    /// Signs (`+1`, `-1`) are rejected.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        if trimmed.is_empty() || !trimmed.chars().all(|c| c.is_ascii_digit()) {
            return Err(format!("Invalid index format: {}", s));
        }
        match trimmed.parse::<usize>() {
            Ok(0) => Err("Index is not a non-zero unsigned integer.".to_string()),
            Ok(n) => Ok(Index::from_one_based(n)),
            Err(_) => Err(format!("Index out of range: {}", trimmed)),
        }
    }
}
