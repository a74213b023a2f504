//! Form submissions, as posted by the add and edit pages.

use std::collections::BTreeMap;

use url::form_urlencoded;

/// A parsed form body: field name to submitted value.
pub type Submission = BTreeMap<String, String>;

/// Parse a url-encoded form body.
///
/// A field posted more than once (the RiC-part checkboxes) has its values
/// joined with " | ", matching the pipe-separated field grammar.
pub fn parse_submission(body: &str) -> Submission {
    let mut fields: BTreeMap<String, Vec<String>> = BTreeMap::new();
    for (name, value) in form_urlencoded::parse(body.as_bytes()) {
        fields
            .entry(name.into_owned())
            .or_default()
            .push(value.into_owned());
    }
    fields
        .into_iter()
        .map(|(name, values)| (name, values.join(" | ")))
        .collect()
}
