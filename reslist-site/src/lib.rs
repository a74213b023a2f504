//! # reslist-site
//!
//! Turns parsed resource records into HTML: the compact list entry and
//! the full detail fragment per record, the reverse-chronological
//! composition of the whole list, and the surrounding site chrome
//! (shell, menus, forms, success/failure pages).
//!
//! Rendering is batch-atomic: every operation over a set of records
//! either yields all of its fragments or the first [`GrammarError`]
//! encountered, so a bad row never produces a partially generated site.
//!
//! [`GrammarError`]: reslist_grammar::GrammarError

pub mod chrome;
pub mod compose;
pub mod details;
pub mod entry;
pub mod forms;
pub mod layout;
pub mod render;

pub use chrome::{
    add_resource_page, edit_resource_page, failure_page, filtering_page, resource_details_page,
    resource_list_page, success_page, SubmissionAction,
};
pub use compose::{compose, filter_by_type};
pub use details::detail_fragment;
pub use entry::{list_entry, ListEntry};
pub use layout::{FragmentPaths, SiteLayout};
