//! Splits command arguments into a preamble and prefixed values.
//!
//! Given `" 1 nt/Likes to swim. t/friend"` and the prefixes `nt/` and `t/`,
//! the preamble is `"1"`, `nt/` maps to `["Likes to swim."]` and `t/` maps to
//! `["friend"]`. A prefix only counts when it follows whitespace, so
//! `nt/` is never mistaken for `t/` and `pay/` never for `p/`. Each value runs
//! up to the next recognised prefix (or the end) and is trimmed.

use super::syntax::Prefix;
use crate::error::{Result, TutorbookError};
use std::collections::HashMap;

#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct ArgumentMultimap {
    preamble: String,
    values: HashMap<Prefix, Vec<String>>,
}

impl ArgumentMultimap {
    pub fn preamble(&self) -> &str {
        &self.preamble
    }

    /// The last value given for `prefix`, if the prefix appeared at all.
    pub fn value(&self, prefix: Prefix) -> Option<&str> {
        self.values
            .get(&prefix)
            .and_then(|v| v.last())
            .map(String::as_str)
    }

    pub fn all_values(&self, prefix: Prefix) -> &[String] {
        self.values.get(&prefix).map(Vec::as_slice).unwrap_or(&[])
    }

    pub fn is_present(&self, prefix: Prefix) -> bool {
        self.values.contains_key(&prefix)
    }

    /// Fails if any of `prefixes` was given more than once.
    pub fn verify_no_duplicate_prefixes(&self, prefixes: &[Prefix]) -> Result<()> {
        let duplicated: Vec<&str> = prefixes
            .iter()
            .filter(|p| self.all_values(**p).len() > 1)
            .map(|p| p.as_str())
            .collect();

        if duplicated.is_empty() {
            Ok(())
        } else {
            Err(TutorbookError::Parse(format!(
                "Multiple values specified for the following single-valued field(s): {}",
                duplicated.join(" ")
            )))
        }
    }
}

pub fn tokenize(args: &str, prefixes: &[Prefix]) -> ArgumentMultimap {
    let positions = find_prefix_positions(args, prefixes);

    let preamble_end = positions.first().map(|(pos, _)| *pos).unwrap_or(args.len());
    let mut multimap = ArgumentMultimap {
        preamble: args[..preamble_end].trim().to_string(),
        values: HashMap::new(),
    };

    for (i, (pos, prefix)) in positions.iter().enumerate() {
        let value_start = pos + prefix.as_str().len();
        let value_end = positions
            .get(i + 1)
            .map(|(next, _)| *next)
            .unwrap_or(args.len());
        multimap
            .values
            .entry(*prefix)
            .or_default()
            .push(args[value_start..value_end].trim().to_string());
    }

    multimap
}

/// Byte offsets of every prefix occurrence that follows whitespace, in order.
fn find_prefix_positions(args: &str, prefixes: &[Prefix]) -> Vec<(usize, Prefix)> {
    let mut positions = Vec::new();
    for (i, c) in args.char_indices() {
        if !c.is_whitespace() {
            continue;
        }
        let start = i + c.len_utf8();
        let rest = &args[start..];
        // Longest match wins in case one prefix is a prefix of another.
        if let Some(prefix) = prefixes
            .iter()
            .filter(|p| rest.starts_with(p.as_str()))
            .max_by_key(|p| p.as_str().len())
        {
            positions.push((start, *prefix));
        }
    }
    positions
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parser::syntax::{PREFIX_NAME, PREFIX_NOTE, PREFIX_PAYMENT, PREFIX_PHONE, PREFIX_TAG};

    #[test]
    fn preamble_only() {
        let map = tokenize(" 12  ", &[PREFIX_NOTE]);
        assert_eq!(map.preamble(), "12");
        assert!(!map.is_present(PREFIX_NOTE));
        assert_eq!(map.value(PREFIX_NOTE), None);
    }

    #[test]
    fn values_run_to_next_prefix() {
        let map = tokenize(
            " 1 nt/Likes to swim.  t/friend t/neighbour",
            &[PREFIX_NOTE, PREFIX_TAG],
        );
        assert_eq!(map.preamble(), "1");
        assert_eq!(map.value(PREFIX_NOTE), Some("Likes to swim."));
        assert_eq!(map.all_values(PREFIX_TAG), ["friend", "neighbour"]);
        assert_eq!(map.value(PREFIX_TAG), Some("neighbour"));
    }

    #[test]
    fn empty_value_is_present() {
        let map = tokenize(" 1 nt/", &[PREFIX_NOTE]);
        assert!(map.is_present(PREFIX_NOTE));
        assert_eq!(map.value(PREFIX_NOTE), Some(""));
    }

    #[test]
    fn prefix_needs_leading_whitespace() {
        let map = tokenize(" 1 abcnt/x", &[PREFIX_NOTE]);
        assert_eq!(map.preamble(), "1 abcnt/x");
        assert!(!map.is_present(PREFIX_NOTE));
    }

    #[test]
    fn similar_prefixes_do_not_collide() {
        let map = tokenize(
            " student n/Amy p/123 pay/paid nt/n/a",
            &[PREFIX_NAME, PREFIX_PHONE, PREFIX_PAYMENT, PREFIX_NOTE],
        );
        assert_eq!(map.preamble(), "student");
        assert_eq!(map.value(PREFIX_NAME), Some("Amy"));
        assert_eq!(map.value(PREFIX_PHONE), Some("123"));
        assert_eq!(map.value(PREFIX_PAYMENT), Some("paid"));
        assert_eq!(map.value(PREFIX_NOTE), Some("n/a"));
    }

    #[test]
    fn duplicate_single_valued_prefix_is_rejected() {
        let map = tokenize(" n/Amy n/Ann", &[PREFIX_NAME, PREFIX_TAG]);
        let err = map.verify_no_duplicate_prefixes(&[PREFIX_NAME]).unwrap_err();
        assert!(err.to_string().contains("n/"));

        let map = tokenize(" t/a t/b", &[PREFIX_NAME, PREFIX_TAG]);
        assert!(map.verify_no_duplicate_prefixes(&[PREFIX_NAME]).is_ok());
    }
}
