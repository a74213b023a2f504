//! Fatal field-grammar errors.
//!
//! Every variant carries the raw field value that triggered it, so a bad
//! row in the master document can be located and corrected at the source.

use std::fmt;

/// Errors that abort rendering of the whole batch.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GrammarError {
    /// A trailing `[xx]` tag whose code is not in the recognised set
    UnrecognisedLanguage { code: String, value: String },
    /// A title with more than two pipe-separated parts
    TooManyTitleParts { title: String },
    /// A two-part title where a part lacks its trailing language tag
    MissingTitleTag { part: String },
    /// A versioned date entry whose tag lacks the closing `]`
    UnterminatedVersion { entry: String },
    /// A versioned date entry whose tag does not start with "version"
    MissingVersionKeyword { entry: String },
    /// A responsible entry with a `(` that does not end in `)`
    UnterminatedWebpage { entry: String },
    /// A links-field entry that does not parse as a link
    NotALink { value: String },
    /// A related-to entry that does not start with `#`
    MalformedRelatedTo { entry: String },
    /// A type field outside the six recognised resource kinds
    UnknownResourceType { value: String },
}

impl fmt::Display for GrammarError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GrammarError::UnrecognisedLanguage { code, value } => {
                write!(
                    f,
                    "The following is not a recognised language: {}. Occurs in: {}",
                    code, value
                )
            }
            GrammarError::TooManyTitleParts { title } => {
                write!(f, "Too many title parts: {}", title)
            }
            GrammarError::MissingTitleTag { part } => {
                write!(f, "Expecting title part to end in language tag: {}", part)
            }
            GrammarError::UnterminatedVersion { entry } => {
                write!(f, "Missing ] at end of date with version: {}", entry)
            }
            GrammarError::MissingVersionKeyword { entry } => {
                write!(
                    f,
                    "Expecting version strings to start with 'version': {}",
                    entry
                )
            }
            GrammarError::UnterminatedWebpage { entry } => {
                write!(f, "Expecting the following to end in ): {}", entry)
            }
            GrammarError::NotALink { value } => {
                write!(f, "The following seems not to be a link: {}", value)
            }
            GrammarError::MalformedRelatedTo { entry } => {
                write!(
                    f,
                    "Expecting the following 'related_to' entry to begin with #: {}",
                    entry
                )
            }
            GrammarError::UnknownResourceType { value } => {
                write!(f, "Not a recognised resource type: {}", value)
            }
        }
    }
}

impl std::error::Error for GrammarError {}

/// Result alias used throughout the grammar crate.
pub type GrammarResult<T> = Result<T, GrammarError>;
