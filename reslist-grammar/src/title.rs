//! Title parsing: a primary title and an optional second-language variant.

use crate::error::{GrammarError, GrammarResult};
use crate::language::split_trailing_tag;

/// Parse the title field.
///
/// Zero pipes: the whole field is the title, no alternative. One pipe:
/// exactly two parts, each of which must end in a recognised language
/// tag; the tags are stripped and the base texts returned. More than one
/// pipe, or a part without its tag, is fatal.
pub fn parse_title(raw: &str) -> GrammarResult<(String, Option<String>)> {
    let title = raw.trim();
    if !title.contains('|') {
        return Ok((title.to_string(), None));
    }
    let parts: Vec<&str> = title.split('|').collect();
    if parts.len() > 2 {
        return Err(GrammarError::TooManyTitleParts {
            title: title.to_string(),
        });
    }
    let mut stripped = Vec::with_capacity(2);
    for part in parts {
        let part = part.trim();
        let (base, language) = split_trailing_tag(part)?;
        if language.is_none() {
            return Err(GrammarError::MissingTitleTag {
                part: part.to_string(),
            });
        }
        stripped.push(base.to_string());
    }
    let mut stripped = stripped.into_iter();
    let primary = stripped.next().unwrap_or_default();
    Ok((primary, stripped.next()))
}
