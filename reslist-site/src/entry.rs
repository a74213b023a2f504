//! The compact list-entry rendering of a record.

use reslist_grammar::{names_only, parse_dates, parse_title, GrammarResult, Record, ResourceType};

use crate::layout::FragmentPaths;
use crate::render::versioned_date_text;

/// One rendered list entry, with the keys the composer sorts and filters by.
#[derive(Debug, Clone)]
pub struct ListEntry {
    pub html: String,
    /// The first date listed in the record; the reverse-chronological sort
    /// key. Submitters are trusted to list dates in chronological order.
    pub primary_date: String,
    pub resource_type: ResourceType,
    pub id: String,
}

/// Render a record's list entry.
///
/// Responsible names are joined with " and ", except for articles, whose
/// author lists read better comma-separated. All dates appear, comma
/// joined, with their versions parenthesised.
pub fn list_entry(record: &Record, paths: &FragmentPaths) -> GrammarResult<ListEntry> {
    let kind = record.kind()?;
    let (title, _) = parse_title(&record.title)?;
    let separator = if kind == ResourceType::Article {
        ", "
    } else {
        " and "
    };
    let responsible = names_only(&record.responsible).join(separator);
    let dates = parse_dates(&record.publication_date)?;
    let date_line = dates
        .iter()
        .map(versioned_date_text)
        .collect::<Vec<_>>()
        .join(", ");
    let primary_date = dates
        .first()
        .map(|entry| entry.date.clone())
        .unwrap_or_default();
    let html = format!(
        "<li class=\"resource\"><a href=\"{details}/{id}.html\" class=\"resource-link\">\
         <img class=\"inline-icon\" src=\"{icons}/{icon}\" alt=\"{alt}\"/>\
         <span class=\"resource-list-title\">{title}</span>. {responsible}. {dates}.</a></li>",
        details = paths.resource_details,
        id = record.id,
        icons = paths.icons,
        icon = kind.icon(),
        alt = kind.label(),
        title = title,
        responsible = responsible,
        dates = date_line,
    );
    Ok(ListEntry {
        html,
        primary_date,
        resource_type: kind,
        id: record.id.clone(),
    })
}
