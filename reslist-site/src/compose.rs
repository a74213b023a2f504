//! Aggregation of list entries: reverse-chronological order and per-type
//! filtering.

use reslist_grammar::{GrammarResult, Record, ResourceType};

use crate::entry::{list_entry, ListEntry};
use crate::layout::FragmentPaths;

/// Render every record's list entry and sort reverse-chronologically.
///
/// The sort key is each record's primary date compared as a plain string.
/// Dates share the `YYYY`, `YYYY-MM`, `YYYY-MM-DD` prefix format, so this
/// is correct for same-precision dates; a year-only date sorts strictly
/// earlier than any more-precise date of the same year. The sort is
/// stable, so equal keys keep the master document's order. Any grammar
/// error aborts the whole batch; no partial sequence is produced.
pub fn compose(records: &[Record], paths: &FragmentPaths) -> GrammarResult<Vec<ListEntry>> {
    let mut entries = records
        .iter()
        .map(|record| list_entry(record, paths))
        .collect::<GrammarResult<Vec<_>>>()?;
    entries.sort_by(|a, b| b.primary_date.cmp(&a.primary_date));
    Ok(entries)
}

/// Keep only entries of one resource kind, preserving the established
/// order.
pub fn filter_by_type(entries: &[ListEntry], kind: ResourceType) -> Vec<ListEntry> {
    entries
        .iter()
        .filter(|entry| entry.resource_type == kind)
        .cloned()
        .collect()
}
