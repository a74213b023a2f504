//! Description parsing: language-tagged chunks of autolinked paragraphs.

use crate::error::GrammarResult;
use crate::language::{split_trailing_tag, Language};
use crate::links::{autolink, Inline};

/// One paragraph of a description.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DescriptionParagraph {
    pub content: Vec<Inline>,
    /// The explicit language tag of the paragraph's own chunk, if any.
    pub language: Option<Language>,
    /// True on the first paragraph of every chunk after the first; gives
    /// the rendered paragraph its language-switch style marker.
    pub after_language_change: bool,
}

/// Parse the description field.
///
/// Pipe-separates into chunks; each chunk may end in a language tag
/// (fatal if unrecognised). A chunk is autolinked as a whole, then split
/// on blank lines into paragraphs. Only the first paragraph after each
/// chunk boundary carries the language-switch marker, and a paragraph is
/// annotated only with its own chunk's explicit language.
pub fn parse_description(raw: &str) -> GrammarResult<Vec<DescriptionParagraph>> {
    let mut paragraphs = Vec::new();
    for (chunk_index, chunk) in raw.split('|').enumerate() {
        let chunk = chunk.trim();
        let (base, language) = split_trailing_tag(chunk)?;
        for (paragraph_index, content) in split_blank_lines(autolink(base)).into_iter().enumerate()
        {
            paragraphs.push(DescriptionParagraph {
                content: trim_paragraph(content),
                language,
                after_language_change: chunk_index > 0 && paragraph_index == 0,
            });
        }
    }
    Ok(paragraphs)
}

/// Split an autolinked span sequence on blank lines in its text spans.
fn split_blank_lines(spans: Vec<Inline>) -> Vec<Vec<Inline>> {
    let mut paragraphs = Vec::new();
    let mut current: Vec<Inline> = Vec::new();
    for span in spans {
        match span {
            Inline::Text(text) => {
                let mut pieces = text.split("\n\n");
                if let Some(first) = pieces.next() {
                    if !first.is_empty() {
                        current.push(Inline::Text(first.to_string()));
                    }
                }
                for piece in pieces {
                    paragraphs.push(std::mem::take(&mut current));
                    if !piece.is_empty() {
                        current.push(Inline::Text(piece.to_string()));
                    }
                }
            }
            anchor => current.push(anchor),
        }
    }
    paragraphs.push(current);
    paragraphs
}

/// Trim whitespace at the outer edges of a paragraph's span sequence.
fn trim_paragraph(mut spans: Vec<Inline>) -> Vec<Inline> {
    if let Some(Inline::Text(text)) = spans.first_mut() {
        *text = text.trim_start().to_string();
        if text.is_empty() {
            spans.remove(0);
        }
    }
    if let Some(Inline::Text(text)) = spans.last_mut() {
        *text = text.trim_end().to_string();
        if text.is_empty() {
            spans.pop();
        }
    }
    spans
}
