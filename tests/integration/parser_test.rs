//! Library-level tests for the clippings parser

use std::io::BufReader;

use clippings::{Clippings, HighlightFilter, Kind, ParseError, Selection, UnknownKindPolicy};

use crate::helpers::{fixture, load_fixture};

#[test]
fn parses_fixture_in_order() {
    let kinds: Vec<Kind> = Clippings::open(fixture("sample_clippings.txt"))
        .unwrap()
        .map(|r| r.unwrap().kind)
        .collect();

    assert_eq!(
        kinds,
        [
            Kind::Highlight,
            Kind::Highlight,
            Kind::Bookmark,
            Kind::Bookmark,
            Kind::Note,
            Kind::Highlight,
            Kind::Highlight,
        ]
    );
}

#[test]
fn byte_order_mark_is_not_part_of_first_title() {
    let content = load_fixture("sample_clippings.txt");
    assert!(content.starts_with('\u{feff}'));

    let first = Clippings::parse_str(&content).next().unwrap().unwrap();
    assert_eq!(first.title_and_author, "Кобзар (Тарас Шевченко)");
}

#[test]
fn filter_composes_with_stream() {
    let filter = HighlightFilter::new()
        .with_title("little prince")
        .with_selection(Selection::Phrases);

    let highlights: Vec<String> = Clippings::open(fixture("sample_clippings.txt"))
        .unwrap()
        .filter_map(Result::ok)
        .filter(|c| filter.matches(c))
        .map(|c| c.highlight)
        .collect();

    assert_eq!(highlights, ["What is essential is invisible to the eye."]);
}

#[test]
fn truncated_fixture_yields_record_then_error() {
    let file = std::fs::File::open(fixture("truncated_clippings.txt")).unwrap();
    let mut stream = Clippings::new(BufReader::new(file));

    assert_eq!(stream.next().unwrap().unwrap().highlight, "hello");
    let err = stream.next().unwrap().unwrap_err();
    assert!(matches!(err, ParseError::MalformedChunk { line: 7, .. }));
    assert!(stream.next().is_none());
}

#[test]
fn stop_policy_applies_to_files() {
    let count = Clippings::open(fixture("unknown_kind.txt"))
        .unwrap()
        .with_policy(UnknownKindPolicy::Stop)
        .count();
    assert_eq!(count, 1);
}

#[test]
fn open_missing_file_fails() {
    assert!(Clippings::open(fixture("does_not_exist.txt")).is_err());
}
