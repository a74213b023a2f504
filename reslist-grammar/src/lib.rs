//! # reslist-grammar
//!
//! The field grammar of the resource-list master document.
//!
//! Each textual field of a record embeds a small micro-syntax: pipes
//! delimit multi-values, `[display](target)` marks links, a trailing
//! `[xx]` tags a value with its language, and date entries may carry a
//! `[version n.n]` suffix. This crate turns raw field strings into
//! structured values, deterministically and without side effects; the
//! rendering of those values to markup lives in `reslist-site`.
//!
//! Grammar violations are fatal by design: a batch render either sees
//! every field parse or aborts on the first [`GrammarError`], which
//! always names the offending raw value.

pub mod dates;
pub mod description;
pub mod error;
pub mod extras;
pub mod language;
pub mod links;
pub mod record;
pub mod resource_type;
pub mod responsible;
pub mod title;

pub use dates::{parse_dates, VersionedDate};
pub use description::{parse_description, DescriptionParagraph};
pub use error::{GrammarError, GrammarResult};
pub use language::{split_trailing_tag, Language};
pub use links::{
    autolink, is_link, parse_link, parse_links_field, Inline, Link, LinkParseError, TaggedLink,
};
pub use record::Record;
pub use resource_type::ResourceType;
pub use responsible::{names_only, with_webpages, Responsible};
pub use title::parse_title;
