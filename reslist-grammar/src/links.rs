//! Link detection and the two-pass autolinker.
//!
//! Two kinds of syntax are supported in free text:
//!
//! 1) A word (something between single spaces) whose URI scheme is http,
//!    https, or ftp becomes an anchor whose text is the URL itself.
//!    Trailing sentence punctuation is not part of the link: it is
//!    stripped off the token and re-emitted right after the anchor.
//! 2) A substring of the form `[display](target)` becomes an anchor with
//!    `display` as its text, provided `target` is itself link-detectable.
//!    Otherwise the substring stays literal text.
//!
//! The two passes run in that order, each a pure transform, so bracket
//! syntax is resolved against text the bare-token pass already settled.

use once_cell::sync::Lazy;
use regex::Regex;
use url::Url;

use crate::error::{GrammarError, GrammarResult};
use crate::language::{split_trailing_tag, Language};

/// Punctuation treated as sentence decoration when trailing a link token.
const TRAILING_PUNCTUATION: [char; 6] = ['.', ',', ';', ':', ')', '\n'];

static BRACKET_LINK: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\[(.+?)\]\((.+?)\)").expect("bracket-link pattern is valid"));

static BRACKET_LINK_AT_START: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^\[(.+?)\]\((.+?)\)").expect("bracket-link pattern is valid"));

/// An anchor extracted from a field value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Link {
    pub url: String,
    pub label: String,
    /// Trailing punctuation stripped from the token, in original order;
    /// rendered verbatim after the closing anchor tag.
    pub trailer: String,
}

/// An explicit link entry, optionally language-tagged.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TaggedLink {
    pub link: Link,
    pub language: Option<Language>,
}

/// A fragment of autolinked free text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Inline {
    Text(String),
    Anchor(Link),
}

/// Outcome of parsing an explicit link entry.
///
/// `NotALink` is recoverable for some callers (a responsible-party
/// webpage falls back to literal text) and fatal for others (the links
/// field); language-tag errors are always fatal.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LinkParseError {
    NotALink(String),
    Grammar(GrammarError),
}

impl LinkParseError {
    /// Treat a non-link as fatal, as the links field requires.
    pub fn into_fatal(self) -> GrammarError {
        match self {
            LinkParseError::NotALink(value) => GrammarError::NotALink { value },
            LinkParseError::Grammar(error) => error,
        }
    }
}

/// Split a token into its link candidate and any trailing punctuation.
fn tidy(token: &str) -> (&str, &str) {
    let mut end = token.len();
    while end > 0 {
        match token[..end].chars().last() {
            Some(c) if TRAILING_PUNCTUATION.contains(&c) => end -= c.len_utf8(),
            _ => break,
        }
    }
    (&token[..end], &token[end..])
}

fn has_link_scheme(candidate: &str) -> bool {
    Url::parse(candidate)
        .map(|url| matches!(url.scheme(), "http" | "https" | "ftp"))
        .unwrap_or(false)
}

/// Whether a whitespace-delimited token reads as a bare link.
pub fn is_link(token: &str) -> bool {
    let (candidate, _) = tidy(token);
    !candidate.is_empty() && has_link_scheme(candidate)
}

/// Convert a link-detectable token into an anchor labelled with its own URL.
pub fn bare_link(token: &str) -> Link {
    let (candidate, trailer) = tidy(token);
    Link {
        url: candidate.to_string(),
        label: candidate.to_string(),
        trailer: trailer.to_string(),
    }
}

/// Build an anchor with explicit display text; the target is still tidied.
pub fn labelled_link(label: &str, target: &str) -> Link {
    let (candidate, trailer) = tidy(target);
    Link {
        url: candidate.to_string(),
        label: label.to_string(),
        trailer: trailer.to_string(),
    }
}

/// Autolink a block of free text: bare-token pass, then bracket pass.
pub fn autolink(text: &str) -> Vec<Inline> {
    promote_brackets(autolink_bare_tokens(text))
}

/// First pass: split on single spaces and anchor link-detectable tokens.
fn autolink_bare_tokens(text: &str) -> Vec<Inline> {
    let mut spans = Vec::new();
    let mut pending = String::new();
    for (index, token) in text.split(' ').enumerate() {
        if index > 0 {
            pending.push(' ');
        }
        if is_link(token) {
            if !pending.is_empty() {
                spans.push(Inline::Text(std::mem::take(&mut pending)));
            }
            spans.push(Inline::Anchor(bare_link(token)));
        } else {
            pending.push_str(token);
        }
    }
    if !pending.is_empty() {
        spans.push(Inline::Text(pending));
    }
    spans
}

/// Second pass: promote `[display](target)` in the remaining text spans.
fn promote_brackets(spans: Vec<Inline>) -> Vec<Inline> {
    let mut resolved = Vec::new();
    for span in spans {
        match span {
            Inline::Anchor(link) => resolved.push(Inline::Anchor(link)),
            Inline::Text(text) => promote_brackets_in_text(&text, &mut resolved),
        }
    }
    resolved
}

fn promote_brackets_in_text(text: &str, out: &mut Vec<Inline>) {
    let mut cursor = 0;
    for captures in BRACKET_LINK.captures_iter(text) {
        let (Some(whole), Some(display), Some(target)) =
            (captures.get(0), captures.get(1), captures.get(2))
        else {
            continue;
        };
        if !is_link(target.as_str()) {
            continue;
        }
        if whole.start() > cursor {
            out.push(Inline::Text(text[cursor..whole.start()].to_string()));
        }
        out.push(Inline::Anchor(Link {
            url: target.as_str().to_string(),
            label: display.as_str().to_string(),
            trailer: String::new(),
        }));
        cursor = whole.end();
    }
    if cursor < text.len() {
        out.push(Inline::Text(text[cursor..].to_string()));
    }
}

/// Parse one explicit link entry: optional trailing language tag, then
/// either `[display](target)` or a bare link.
pub fn parse_link(raw: &str) -> Result<TaggedLink, LinkParseError> {
    let (value, language) = split_trailing_tag(raw).map_err(LinkParseError::Grammar)?;
    if let Some(captures) = BRACKET_LINK_AT_START.captures(value) {
        if let (Some(display), Some(target)) = (captures.get(1), captures.get(2)) {
            if is_link(target.as_str()) {
                return Ok(TaggedLink {
                    link: labelled_link(display.as_str(), target.as_str()),
                    language,
                });
            }
        }
    }
    if is_link(value) {
        return Ok(TaggedLink {
            link: bare_link(value),
            language,
        });
    }
    Err(LinkParseError::NotALink(value.to_string()))
}

/// Parse the pipe-separated links field; here a non-link entry is fatal.
pub fn parse_links_field(raw: &str) -> GrammarResult<Vec<TaggedLink>> {
    raw.split('|')
        .map(str::trim)
        .filter(|entry| !entry.is_empty())
        .map(|entry| parse_link(entry).map_err(LinkParseError::into_fatal))
        .collect()
}
