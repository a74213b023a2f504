//! The closed set of recognised languages and trailing-tag splitting.
//!
//! A field value ending in `[xx]` carries a language tag. The set of
//! recognised codes is deliberately closed; adding a language is a
//! one-place edit here.

use crate::error::{GrammarError, GrammarResult};

/// Languages a field value may be tagged with.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Language {
    English,
    French,
    Korean,
    Dutch,
}

impl Language {
    /// All recognised languages.
    pub const ALL: [Language; 4] = [
        Language::English,
        Language::French,
        Language::Korean,
        Language::Dutch,
    ];

    /// Look up a two-letter tag, e.g. "en".
    pub fn from_tag(tag: &str) -> Option<Language> {
        match tag {
            "en" => Some(Language::English),
            "fr" => Some(Language::French),
            "ko" => Some(Language::Korean),
            "nl" => Some(Language::Dutch),
            _ => None,
        }
    }

    /// The two-letter tag used in field values.
    pub fn tag(self) -> &'static str {
        match self {
            Language::English => "en",
            Language::French => "fr",
            Language::Korean => "ko",
            Language::Dutch => "nl",
        }
    }

    /// The name shown in rendered output.
    pub fn display_name(self) -> &'static str {
        match self {
            Language::English => "English",
            Language::French => "French",
            Language::Korean => "Korean",
            Language::Dutch => "Dutch",
        }
    }
}

/// Split a trailing `[xx]` language tag off a field value.
///
/// A value ends in a tag when its last character is `]` and the fourth
/// character from the end is `[`. An unrecognised code between them is a
/// fatal error naming the offending value. A value without the trailing
/// shape carries no language.
pub fn split_trailing_tag(value: &str) -> GrammarResult<(&str, Option<Language>)> {
    let chars: Vec<(usize, char)> = value.char_indices().collect();
    let count = chars.len();
    if count < 4 || chars[count - 1].1 != ']' || chars[count - 4].1 != '[' {
        return Ok((value, None));
    }
    let code = &value[chars[count - 3].0..chars[count - 1].0];
    match Language::from_tag(code) {
        Some(language) => Ok((value[..chars[count - 4].0].trim_end(), Some(language))),
        None => Err(GrammarError::UnrecognisedLanguage {
            code: code.to_string(),
            value: value.to_string(),
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn splits_recognised_tag() {
        let (base, language) = split_trailing_tag("Une ressource [fr]").unwrap();
        assert_eq!(base, "Une ressource");
        assert_eq!(language, Some(Language::French));
    }

    #[test]
    fn no_tag_means_no_language() {
        let (base, language) = split_trailing_tag("A resource").unwrap();
        assert_eq!(base, "A resource");
        assert_eq!(language, None);
    }

    #[test]
    fn unrecognised_code_is_fatal() {
        let error = split_trailing_tag("A resource [zz]").unwrap_err();
        assert_eq!(
            error,
            GrammarError::UnrecognisedLanguage {
                code: "zz".to_string(),
                value: "A resource [zz]".to_string(),
            }
        );
    }

    #[test]
    fn bracketed_ending_shorter_than_a_tag_is_left_alone() {
        let (base, language) = split_trailing_tag("[x]").unwrap();
        assert_eq!(base, "[x]");
        assert_eq!(language, None);
    }
}
