//! Field-level grammar tests over the documented edge cases.

use reslist_grammar::{
    parse_dates, parse_link, parse_links_field, parse_title, GrammarError, Language,
    LinkParseError,
};
use rstest::rstest;

#[rstest]
#[case("A single title", "A single title", None)]
#[case("A [en] | B [fr]", "A", Some("B"))]
#[case("Wide title [en] | Titre large [fr]", "Wide title", Some("Titre large"))]
fn titles_parse(#[case] raw: &str, #[case] primary: &str, #[case] alternative: Option<&str>) {
    let (parsed_primary, parsed_alternative) = parse_title(raw).unwrap();
    assert_eq!(parsed_primary, primary);
    assert_eq!(parsed_alternative.as_deref(), alternative);
}

#[rstest]
#[case("A [en] | B [fr] | C [nl]")]
#[case("A [en] | B [fr] | C")]
fn too_many_title_parts_is_fatal(#[case] raw: &str) {
    assert!(matches!(
        parse_title(raw),
        Err(GrammarError::TooManyTitleParts { .. })
    ));
}

#[test]
fn title_part_with_unknown_language_is_fatal() {
    let error = parse_title("A [en] | B [xx]").unwrap_err();
    match error {
        GrammarError::UnrecognisedLanguage { code, value } => {
            assert_eq!(code, "xx");
            assert!(value.contains("B [xx]"));
        }
        other => panic!("expected a language error, got {other}"),
    }
}

#[rstest]
#[case("2023", vec![("2023", None)])]
#[case("2023-12 | 2024-03 [version 1.0]", vec![("2023-12", None), ("2024-03", Some("1.0"))])]
#[case(
    "2024-03 [version 1.0] | 2024-10 [version 2.0]",
    vec![("2024-03", Some("1.0")), ("2024-10", Some("2.0"))]
)]
fn dates_parse(#[case] raw: &str, #[case] expected: Vec<(&str, Option<&str>)>) {
    let parsed = parse_dates(raw).unwrap();
    let simplified: Vec<(&str, Option<&str>)> = parsed
        .iter()
        .map(|entry| (entry.date.as_str(), entry.version.as_deref()))
        .collect();
    assert_eq!(simplified, expected);
}

#[test]
fn primary_date_is_first_listed_not_smallest() {
    let parsed = parse_dates("2024-10 [version 2.0] | 2024-03 [version 1.0]").unwrap();
    assert_eq!(parsed[0].date, "2024-10");
}

#[test]
fn links_field_accepts_both_syntaxes() {
    let parsed =
        parse_links_field("https://example.org | [the docs](https://example.org/docs) [fr]")
            .unwrap();
    assert_eq!(parsed.len(), 2);
    assert_eq!(parsed[0].link.label, "https://example.org");
    assert_eq!(parsed[1].link.label, "the docs");
    assert_eq!(parsed[1].language, Some(Language::French));
}

#[test]
fn links_field_rejects_non_links() {
    assert!(matches!(
        parse_links_field("https://example.org | ask the archivist"),
        Err(GrammarError::NotALink { .. })
    ));
}

#[test]
fn empty_links_field_means_no_links() {
    assert!(parse_links_field("").unwrap().is_empty());
}

#[test]
fn explicit_link_entry_reports_non_links_recoverably() {
    match parse_link("the reading room") {
        Err(LinkParseError::NotALink(value)) => assert_eq!(value, "the reading room"),
        other => panic!("expected a recoverable non-link, got {other:?}"),
    }
}
