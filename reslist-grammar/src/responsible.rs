//! Responsible-party parsing: authors, maintainers, organisers.
//!
//! The same pipe-separated list is rendered two ways: names only for the
//! compact list entry, and names with their webpages for the detail page.

use crate::error::{GrammarError, GrammarResult};
use crate::links::{parse_link, LinkParseError, TaggedLink};

/// One responsible party as rendered on a detail page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Responsible {
    /// A bare name, or the verbatim fallback for a parenthetical that did
    /// not parse as a link.
    Plain(String),
    WithWebpage { name: String, page: TaggedLink },
}

/// The names alone: everything before a parenthetical, trimmed.
pub fn names_only(raw: &str) -> Vec<String> {
    raw.split('|')
        .map(|entry| {
            let entry = entry.trim();
            match entry.split_once('(') {
                Some((name, _)) => name.trim_end().to_string(),
                None => entry.to_string(),
            }
        })
        .collect()
}

/// Names with webpages.
///
/// An entry containing a `(` must end in `)`. Its parenthetical is parsed
/// as a link entry; if it is not link-detectable the whole original entry
/// is kept verbatim, parenthesis included. Language-tag errors inside the
/// parenthetical stay fatal.
pub fn with_webpages(raw: &str) -> GrammarResult<Vec<Responsible>> {
    raw.split('|')
        .map(|entry| {
            let entry = entry.trim();
            if !entry.contains('(') {
                return Ok(Responsible::Plain(entry.to_string()));
            }
            let Some(inner) = entry.strip_suffix(')') else {
                return Err(GrammarError::UnterminatedWebpage {
                    entry: entry.to_string(),
                });
            };
            let Some((name, webpage)) = inner.split_once('(') else {
                return Ok(Responsible::Plain(entry.to_string()));
            };
            match parse_link(webpage) {
                Ok(page) => Ok(Responsible::WithWebpage {
                    name: name.trim().to_string(),
                    page,
                }),
                Err(LinkParseError::NotALink(_)) => Ok(Responsible::Plain(entry.to_string())),
                Err(LinkParseError::Grammar(error)) => Err(error),
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn names_only_drops_parentheticals() {
        assert_eq!(
            names_only("A. Author (https://example.org) | B. Author"),
            vec!["A. Author".to_string(), "B. Author".to_string()]
        );
    }

    #[test]
    fn webpage_entries_are_parsed() {
        let parsed = with_webpages("A. Author (https://example.org)").unwrap();
        match &parsed[0] {
            Responsible::WithWebpage { name, page } => {
                assert_eq!(name, "A. Author");
                assert_eq!(page.link.url, "https://example.org");
            }
            other => panic!("expected a webpage entry, got {:?}", other),
        }
    }

    #[test]
    fn non_link_parenthetical_falls_back_verbatim() {
        let parsed = with_webpages("A. Author (emerita)").unwrap();
        assert_eq!(parsed[0], Responsible::Plain("A. Author (emerita)".to_string()));
    }

    #[test]
    fn unterminated_parenthetical_is_fatal() {
        assert!(matches!(
            with_webpages("A. Author (https://example.org"),
            Err(GrammarError::UnterminatedWebpage { .. })
        ));
    }
}
