//! Serialization of parsed grammar values to markup.

use reslist_grammar::{Inline, Link, TaggedLink, VersionedDate};

/// Render an anchor; the trailer follows the closing tag verbatim.
pub fn render_link(link: &Link, css_class: Option<&str>) -> String {
    match css_class {
        Some(class) => format!(
            "<a href=\"{}\" class=\"{}\">{}</a>{}",
            link.url, class, link.label, link.trailer
        ),
        None => format!("<a href=\"{}\">{}</a>{}", link.url, link.label, link.trailer),
    }
}

/// Render a language-tagged link, with its language name parenthesised.
pub fn render_tagged_link(tagged: &TaggedLink, css_class: Option<&str>) -> String {
    let anchor = render_link(&tagged.link, css_class);
    match tagged.language {
        Some(language) => format!("{} ({})", anchor, language.display_name()),
        None => anchor,
    }
}

/// Flatten an autolinked span sequence back to markup.
pub fn render_inlines(spans: &[Inline]) -> String {
    spans
        .iter()
        .map(|span| match span {
            Inline::Text(text) => text.clone(),
            Inline::Anchor(link) => render_link(link, None),
        })
        .collect()
}

/// "date (vVERSION)" for versioned entries, the bare date otherwise.
pub fn versioned_date_text(entry: &VersionedDate) -> String {
    match &entry.version {
        Some(version) => format!("{} (v{})", entry.date, version),
        None => entry.date.clone(),
    }
}
