//! Tests of the per-record fragments.

use reslist_grammar::Record;
use reslist_site::{detail_fragment, list_entry, FragmentPaths, SiteLayout};

fn paths() -> FragmentPaths {
    FragmentPaths::at_site_root(&SiteLayout::default())
}

fn tool_record() -> Record {
    Record {
        id: "7".to_string(),
        title: "A conversion tool".to_string(),
        responsible: "A. Maintainer | B. Maintainer".to_string(),
        description: "Converts finding aids. More at https://example.org/tool.".to_string(),
        publication_date: "2024-03 [version 1.0] | 2024-10 [version 2.0]".to_string(),
        resource_type: "tool".to_string(),
        ..Record::default()
    }
}

#[test]
fn list_entry_joins_non_article_names_with_and() {
    let entry = list_entry(&tool_record(), &paths()).unwrap();
    assert!(entry.html.contains("A. Maintainer and B. Maintainer"));
    assert!(entry.html.contains("2024-03 (v1.0), 2024-10 (v2.0)"));
    assert!(entry.html.contains("href=\"resource-details/7.html\""));
    assert!(entry.html.contains("src=\"icons/tool.svg\""));
    assert_eq!(entry.primary_date, "2024-03");
}

#[test]
fn list_entry_joins_article_authors_with_commas() {
    let record = Record {
        id: "3".to_string(),
        title: "A study".to_string(),
        responsible: "A. Author | B. Author | C. Author".to_string(),
        description: "A study. [en]".to_string(),
        publication_date: "2023-06".to_string(),
        resource_type: "article".to_string(),
        ..Record::default()
    };
    let entry = list_entry(&record, &paths()).unwrap();
    assert!(entry.html.contains("A. Author, B. Author, C. Author"));
    assert!(!entry.html.contains(" and "));
}

#[test]
fn detail_fragment_itemises_multiple_dates() {
    let fragment = detail_fragment(&tool_record(), &paths()).unwrap();
    assert!(fragment.contains("<li class=\"version\">2024-03 (v1.0)</li>"));
    assert!(fragment.contains("<li class=\"version\">2024-10 (v2.0)</li>"));
    assert!(fragment.contains("Released: <ul>"));
    assert!(fragment.contains("Maintainers: <ul>"));
}

#[test]
fn detail_fragment_renders_single_date_inline() {
    let mut record = tool_record();
    record.publication_date = "2024-03".to_string();
    let fragment = detail_fragment(&record, &paths()).unwrap();
    assert!(fragment.contains("<li>Released: 2024-03</li>"));
}

#[test]
fn detail_fragment_shows_alternative_title() {
    let mut record = tool_record();
    record.title = "A conversion tool [en] | Un outil de conversion [fr]".to_string();
    let fragment = detail_fragment(&record, &paths()).unwrap();
    assert!(fragment.contains(">A conversion tool</h2>"));
    assert!(fragment.contains("(Un outil de conversion)"));
}

#[test]
fn detail_fragment_autolinks_the_description() {
    let fragment = detail_fragment(&tool_record(), &paths()).unwrap();
    assert!(fragment
        .contains("<a href=\"https://example.org/tool\">https://example.org/tool</a>."));
}

#[test]
fn remainder_skips_empty_fields_entirely() {
    let fragment = detail_fragment(&tool_record(), &paths()).unwrap();
    assert!(!fragment.contains("Available in:"));
    assert!(!fragment.contains("Contact:"));
    assert!(!fragment.contains("Relates to RiC resources:"));
    assert!(!fragment.contains("ric-part"));
}

#[test]
fn remainder_renders_present_fields_in_order() {
    let mut record = tool_record();
    record.links = "https://example.org/docs".to_string();
    record.languages = "English | French".to_string();
    record.relevant_parts_of_ric = "RiC-O 1.0".to_string();
    record.contact = "team@example.org".to_string();
    record.related_to = "#3".to_string();
    let fragment = detail_fragment(&record, &paths()).unwrap();

    let links_at = fragment.find("link-from-resource").unwrap();
    let languages_at = fragment.find("Available in: English, French").unwrap();
    let ric_at = fragment
        .find("<span class=\"ric-part\">RiC-O 1.0</span>")
        .unwrap();
    let contact_at = fragment
        .find("<span class=\"contact-details\">team (at) example.org</span>")
        .unwrap();
    let related_at = fragment
        .find("<a href=\"resource-details/3.html\" class=\"related-to\">#3</a>")
        .unwrap();
    assert!(links_at < languages_at);
    assert!(languages_at < ric_at);
    assert!(ric_at < contact_at);
    assert!(contact_at < related_at);
}

#[test]
fn events_hold_rather_than_are_available_in_languages() {
    let record = Record {
        id: "9".to_string(),
        title: "A workshop".to_string(),
        responsible: "The organisers".to_string(),
        description: "A workshop.".to_string(),
        publication_date: "2024-05-02".to_string(),
        resource_type: "event".to_string(),
        languages: "Korean".to_string(),
        ..Record::default()
    };
    let fragment = detail_fragment(&record, &paths()).unwrap();
    assert!(fragment.contains("Held in: Korean"));
}

#[test]
fn list_entry_shape() {
    let entry = list_entry(&tool_record(), &paths()).unwrap();
    insta::assert_snapshot!(
        entry.html,
        @r###"<li class="resource"><a href="resource-details/7.html" class="resource-link"><img class="inline-icon" src="icons/tool.svg" alt="Tool"/><span class="resource-list-title">A conversion tool</span>. A. Maintainer and B. Maintainer. 2024-03 (v1.0), 2024-10 (v2.0).</a></li>"###
    );
}

#[test]
fn rendering_is_idempotent() {
    let record = tool_record();
    let first = detail_fragment(&record, &paths()).unwrap();
    let second = detail_fragment(&record, &paths()).unwrap();
    assert_eq!(first, second);
    let entry_first = list_entry(&record, &paths()).unwrap();
    let entry_second = list_entry(&record, &paths()).unwrap();
    assert_eq!(entry_first.html, entry_second.html);
}
