//! Tests of list composition: ordering, filtering, and batch atomicity.

use reslist_grammar::{Record, ResourceType};
use reslist_site::{compose, filter_by_type, FragmentPaths, SiteLayout};

fn paths() -> FragmentPaths {
    FragmentPaths::at_site_root(&SiteLayout::default())
}

fn record(id: &str, kind: &str, date: &str) -> Record {
    Record {
        id: id.to_string(),
        title: format!("Resource {id}"),
        responsible: "Somebody".to_string(),
        description: "Something.".to_string(),
        publication_date: date.to_string(),
        resource_type: kind.to_string(),
        ..Record::default()
    }
}

#[test]
fn composition_is_reverse_chronological_by_string_comparison() {
    let records = vec![
        record("0", "tool", "2024"),
        record("1", "article", "2024-01"),
        record("2", "event", "2023-06"),
    ];
    let entries = compose(&records, &paths()).unwrap();
    let dates: Vec<&str> = entries
        .iter()
        .map(|entry| entry.primary_date.as_str())
        .collect();
    // A prefix string compares smaller than its extensions, so "2024"
    // lands after "2024-01".
    assert_eq!(dates, vec!["2024-01", "2024", "2023-06"]);
}

#[test]
fn equal_keys_keep_store_order() {
    let records = vec![
        record("5", "tool", "2024-01"),
        record("6", "tool", "2024-01"),
        record("7", "tool", "2024-01"),
    ];
    let entries = compose(&records, &paths()).unwrap();
    let ids: Vec<&str> = entries.iter().map(|entry| entry.id.as_str()).collect();
    assert_eq!(ids, vec!["5", "6", "7"]);
}

#[test]
fn filtering_commutes_with_composition() {
    let records = vec![
        record("0", "tool", "2024"),
        record("1", "article", "2024-01"),
        record("2", "tool", "2023-06"),
        record("3", "article", "2023-06"),
        record("4", "tool", "2024-01"),
    ];
    let composed = compose(&records, &paths()).unwrap();
    for kind in ResourceType::ALL {
        let filtered_after: Vec<String> = filter_by_type(&composed, kind)
            .iter()
            .map(|entry| entry.html.clone())
            .collect();
        let matching: Vec<Record> = records
            .iter()
            .filter(|candidate| candidate.resource_type == kind.field_value())
            .cloned()
            .collect();
        let filtered_before: Vec<String> = compose(&matching, &paths())
            .unwrap()
            .iter()
            .map(|entry| entry.html.clone())
            .collect();
        assert_eq!(filtered_after, filtered_before, "kind: {:?}", kind);
    }
}

#[test]
fn one_bad_record_aborts_the_whole_batch() {
    let records = vec![
        record("0", "tool", "2024"),
        record("1", "article", "2024-03 [v1.0]"),
        record("2", "event", "2023-06"),
    ];
    assert!(compose(&records, &paths()).is_err());
}
