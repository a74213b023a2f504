//! Versioned publication/release/occurrence dates.

use crate::error::{GrammarError, GrammarResult};

/// One date entry, optionally carrying a version number.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VersionedDate {
    pub date: String,
    pub version: Option<String>,
}

/// Parse the publication-date field.
///
/// A field with no pipe and no `[` is a single unversioned date. In any
/// other shape, each pipe-separated entry splits on its first `[` into a
/// date and a version tag; an entry without a `[` is an unversioned
/// date. The tag must end in `]` and start with the literal word
/// "version"; the version number is the trimmed text between. The first
/// entry is the record's primary date, trusted to be listed first.
pub fn parse_dates(raw: &str) -> GrammarResult<Vec<VersionedDate>> {
    let entries: Vec<&str> = raw.split('|').collect();
    if entries.len() == 1 && !entries[0].contains('[') {
        return Ok(vec![VersionedDate {
            date: raw.trim().to_string(),
            version: None,
        }]);
    }
    entries
        .into_iter()
        .map(|entry| {
            let Some((date, tag)) = entry.split_once('[') else {
                return Ok(VersionedDate {
                    date: entry.trim().to_string(),
                    version: None,
                });
            };
            let tag = tag.trim();
            let Some(tag) = tag.strip_suffix(']') else {
                return Err(GrammarError::UnterminatedVersion {
                    entry: entry.trim().to_string(),
                });
            };
            let Some(number) = tag.strip_prefix("version") else {
                return Err(GrammarError::MissingVersionKeyword {
                    entry: entry.trim().to_string(),
                });
            };
            Ok(VersionedDate {
                date: date.trim().to_string(),
                version: Some(number.trim().to_string()),
            })
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn single_unversioned_date() {
        assert_eq!(
            parse_dates(" 2023-12 ").unwrap(),
            vec![VersionedDate {
                date: "2023-12".to_string(),
                version: None,
            }]
        );
    }

    #[test]
    fn mixed_versioned_and_unversioned_entries() {
        assert_eq!(
            parse_dates("2023-12 | 2024-03 [version 1.0]").unwrap(),
            vec![
                VersionedDate {
                    date: "2023-12".to_string(),
                    version: None,
                },
                VersionedDate {
                    date: "2024-03".to_string(),
                    version: Some("1.0".to_string()),
                },
            ]
        );
    }

    #[test]
    fn missing_closing_bracket_is_fatal() {
        assert!(matches!(
            parse_dates("2024-03 [version 1.0"),
            Err(GrammarError::UnterminatedVersion { .. })
        ));
    }

    #[test]
    fn missing_version_keyword_is_fatal() {
        assert!(matches!(
            parse_dates("2024-03 [v1.0]"),
            Err(GrammarError::MissingVersionKeyword { .. })
        ));
    }
}
