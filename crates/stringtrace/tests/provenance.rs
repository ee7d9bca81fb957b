//! End-to-end provenance tests against real files.

use std::io::Write;
use stringtrace::{SourceLocation, StringTracker, TrackerError};
use tempfile::NamedTempFile;

fn temp_file(contents: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().unwrap();
    file.write_all(contents.as_bytes()).unwrap();
    file.flush().unwrap();
    file
}

#[test]
fn file_round_trip() {
    let file = temp_file("hello\nworld");
    let path = file.path().to_str().unwrap();

    let mut tracker = StringTracker::new();
    let contents = tracker.add_file(path).unwrap();
    assert_eq!(tracker.text(contents), Some("hello\nworld"));

    let start = tracker.locate(contents).unwrap();
    assert_eq!((start.line, start.column), (Some(1), Some(1)));
    assert_eq!(start.file.and_then(|f| tracker.text(f)), Some(path));

    let hello = tracker.locate(contents.slice(0..5)).unwrap();
    assert_eq!((hello.line, hello.column), (Some(1), Some(1)));

    let world = tracker.locate(contents.slice(6..11)).unwrap();
    assert_eq!((world.line, world.column), (Some(2), Some(1)));
    assert_eq!(world.file, start.file);
}

#[test]
fn missing_file_reports_io_error() {
    let mut tracker = StringTracker::new();
    let err = tracker
        .add_file("/no/such/file/anywhere.txt")
        .unwrap_err();
    match err {
        TrackerError::Io { ref path, .. } => {
            assert_eq!(path, "/no/such/file/anywhere.txt");
        }
        other => panic!("expected an io error, got {other:?}"),
    }
    assert!(err.to_string().contains("/no/such/file/anywhere.txt"));
}

#[test]
fn repeated_loads_share_one_interned_name() {
    let file = temp_file("contents\n");
    let path = file.path().to_str().unwrap();

    let mut tracker = StringTracker::new();
    let first = tracker.add_file(path).unwrap();
    let second = tracker.add_file(path).unwrap();

    let loc1 = tracker.locate(first).unwrap();
    let loc2 = tracker.locate(second).unwrap();
    assert_eq!(loc1.file, loc2.file, "both loads should share one name buffer");
}

#[test]
fn builder_preserves_file_provenance_across_two_levels() {
    let file1 = temp_file("fn main() {\n    body\n}\n");
    let file2 = temp_file("helper\n");
    let path1 = file1.path().to_str().unwrap();
    let path2 = file2.path().to_str().unwrap();

    let mut tracker = StringTracker::new();
    let f1 = tracker.add_file(path1).unwrap();
    let f2 = tracker.add_file(path2).unwrap();

    let body = f1.slice(16..20);
    let helper = f2.slice(0..6);

    let mut builder = tracker.builder();
    builder.push_span(body).unwrap();
    builder.push_str(" + ");
    builder.push_span(helper).unwrap();
    let combined = builder.build();
    assert_eq!(tracker.text(combined), Some("body + helper"));

    let mut builder = tracker.builder();
    builder.push_str("wrapped(");
    builder.push_span(combined.slice(0..4)).unwrap();
    builder.push_str(" | ");
    builder.push_span(combined.slice(7..13)).unwrap();
    builder.push_str(")");
    let wrapped = builder.build();
    assert_eq!(tracker.text(wrapped), Some("wrapped(body | helper)"));

    // Through two levels of building, each fragment still reports the
    // location a direct lookup on the file span gives.
    assert_eq!(
        tracker.locate(wrapped.slice(8..12)).unwrap(),
        tracker.locate(body).unwrap()
    );
    assert_eq!(
        tracker.locate(wrapped.slice(15..21)).unwrap(),
        tracker.locate(helper).unwrap()
    );

    let body_loc = tracker.locate(body).unwrap();
    assert_eq!((body_loc.line, body_loc.column), (Some(2), Some(5)));
    assert_eq!(body_loc.file.and_then(|f| tracker.text(f)), Some(path1));
}

#[test]
fn resolve_reports_the_original_fragment() {
    let file = temp_file("alpha beta gamma\n");
    let path = file.path().to_str().unwrap();

    let mut tracker = StringTracker::new();
    let contents = tracker.add_file(path).unwrap();
    let beta = contents.slice(6..10);

    let mut builder = tracker.builder();
    builder.push_str("quoted: ");
    builder.push_span(beta).unwrap();
    let out = builder.build();

    let resolved = tracker.resolve(out.slice(8..12)).unwrap();
    assert_eq!(resolved.source.and_then(|s| tracker.text(s)), Some("beta"));
    assert_eq!(resolved.location, tracker.locate(beta).unwrap());

    let literal = tracker.resolve(out.slice(0..6)).unwrap();
    assert_eq!(literal.source, None);
    assert_eq!(literal.location, SourceLocation::UNKNOWN);
}

#[test]
fn location_display_formats() {
    let mut tracker = StringTracker::new();
    let name = tracker.add("input.txt");

    let full = SourceLocation {
        file: Some(name),
        line: Some(3),
        column: Some(7),
    };
    insta::assert_snapshot!(full.display(&tracker).to_string(), @"input.txt:3:7");

    let line_only = SourceLocation {
        file: Some(name),
        line: Some(3),
        column: None,
    };
    insta::assert_snapshot!(line_only.display(&tracker).to_string(), @"input.txt:3");

    let column_only = SourceLocation {
        file: Some(name),
        line: None,
        column: Some(7),
    };
    insta::assert_snapshot!(column_only.display(&tracker).to_string(), @"input.txt:?:7");

    let file_only = SourceLocation {
        file: Some(name),
        line: None,
        column: None,
    };
    insta::assert_snapshot!(file_only.display(&tracker).to_string(), @"input.txt");

    insta::assert_snapshot!(
        SourceLocation::UNKNOWN.display(&tracker).to_string(),
        @"?"
    );

    let no_file = SourceLocation {
        file: None,
        line: Some(3),
        column: Some(7),
    };
    insta::assert_snapshot!(no_file.display(&tracker).to_string(), @"?:3:7");
}
