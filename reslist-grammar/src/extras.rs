//! The optional tail fields: languages available, relevant parts of RiC,
//! contacts, and cross-references to related resources.
//!
//! For all of these an empty field signals omission, not an empty list.

use crate::error::{GrammarError, GrammarResult};

/// Pipe-separate an optional field into trimmed entries.
pub fn pipe_list(raw: &str) -> Vec<String> {
    if raw.is_empty() {
        return Vec::new();
    }
    raw.split('|').map(|entry| entry.trim().to_string()).collect()
}

/// Contact entries with `@` obscured as literal " (at) ".
pub fn contacts(raw: &str) -> Vec<String> {
    pipe_list(raw)
        .into_iter()
        .map(|entry| entry.replace('@', " (at) "))
        .collect()
}

/// Ids of related resources, from `#n` tokens.
///
/// Each entry must start with `#`; the remainder is the referenced id.
/// References are not checked against the store, so a dangling id renders
/// as a dead link rather than failing.
pub fn related_ids(raw: &str) -> GrammarResult<Vec<String>> {
    if raw.is_empty() {
        return Ok(Vec::new());
    }
    raw.split('|')
        .map(|entry| {
            let entry = entry.trim();
            match entry.strip_prefix('#') {
                Some(id) => Ok(id.to_string()),
                None => Err(GrammarError::MalformedRelatedTo {
                    entry: entry.to_string(),
                }),
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_fields_mean_omission() {
        assert!(pipe_list("").is_empty());
        assert!(contacts("").is_empty());
        assert!(related_ids("").unwrap().is_empty());
    }

    #[test]
    fn contacts_obscure_every_at_sign() {
        assert_eq!(
            contacts("a@example.org | b@example.org"),
            vec![
                "a (at) example.org".to_string(),
                "b (at) example.org".to_string(),
            ]
        );
    }

    #[test]
    fn related_entries_must_start_with_a_hash() {
        assert_eq!(
            related_ids("#3 | #17").unwrap(),
            vec!["3".to_string(), "17".to_string()]
        );
        assert!(matches!(
            related_ids("#3 | 17"),
            Err(GrammarError::MalformedRelatedTo { .. })
        ));
    }
}
