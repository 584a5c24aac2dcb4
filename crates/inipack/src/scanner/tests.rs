use alloc::vec::Vec;

use super::*;

fn classify_str(line: &str) -> Result<Line, Fault> {
    classify(line.as_bytes(), 0, line.len())
}

fn text(src: &str, span: Span) -> &str {
    &src[span.start..span.end]
}

fn pair(line: &str) -> (&str, &str) {
    match classify_str(line) {
        Ok(Line::Pair { key, value }) => (text(line, key), text(line, value)),
        other => panic!("expected a pair for {line:?}, got {other:?}"),
    }
}

fn section(line: &str) -> &str {
    match classify_str(line) {
        Ok(Line::Section { name }) => text(line, name),
        other => panic!("expected a section for {line:?}, got {other:?}"),
    }
}

fn fault(line: &str) -> (ErrorKind, usize) {
    match classify_str(line) {
        Err(Fault { kind, offset }) => (kind, offset),
        other => panic!("expected an error for {line:?}, got {other:?}"),
    }
}

// ─────────────────────────────────────────────────────────────────────
// Byte classes
// ─────────────────────────────────────────────────────────────────────

#[test]
fn graphic_bytes() {
    assert!(!is_graph(b' '));
    assert!(!is_graph(b'\t'));
    assert!(!is_graph(b'\r'));
    assert!(!is_graph(0x00));
    assert!(!is_graph(0x7F));
    assert!(is_graph(b'!'));
    assert!(is_graph(b'~'));
    assert!(is_graph(0x80));
    assert!(is_graph(0xFF));
}

#[test]
fn input_ends_at_first_nul() {
    assert_eq!(input_len(b"abc"), 3);
    assert_eq!(input_len(b"ab\0cd"), 2);
    assert_eq!(input_len(b""), 0);
}

// ─────────────────────────────────────────────────────────────────────
// Skipped lines
// ─────────────────────────────────────────────────────────────────────

#[test]
fn blank_and_comment_lines_are_skipped() {
    for line in ["", "   ", "\t\r", "; comment", "# comment", "   ;indented", "#[not a section]"] {
        assert_eq!(classify_str(line), Ok(Line::Skip), "{line:?}");
    }
}

// ─────────────────────────────────────────────────────────────────────
// Section headers
// ─────────────────────────────────────────────────────────────────────

#[test]
fn section_name_is_everything_between_the_brackets() {
    assert_eq!(section("[net]"), "net");
    assert_eq!(section("  [net]  trailing junk"), "net");
    assert_eq!(section("[ a b ]"), " a b ");
    assert_eq!(section("[]"), "");
    assert_eq!(section("[a[b]c]"), "a[b");
}

#[test]
fn unterminated_section_points_at_the_bracket() {
    assert_eq!(fault("  [net"), (ErrorKind::BadSectionHeader, 2));
    assert_eq!(fault("["), (ErrorKind::BadSectionHeader, 0));
}

// ─────────────────────────────────────────────────────────────────────
// Key-value pairs
// ─────────────────────────────────────────────────────────────────────

#[test]
fn keys_and_values_are_trimmed() {
    assert_eq!(pair("key=value"), ("key", "value"));
    assert_eq!(pair("  key \t=  value  "), ("key", "value"));
    assert_eq!(pair("key=value\r"), ("key", "value"));
    assert_eq!(pair("key = two  words"), ("key", "two  words"));
}

#[test]
fn value_keeps_everything_after_the_first_equals() {
    assert_eq!(pair("url=http://host/?a=b"), ("url", "http://host/?a=b"));
    assert_eq!(pair("k==v"), ("k", "=v"));
    assert_eq!(pair("k=; not a comment"), ("k", "; not a comment"));
}

#[test]
fn keys_may_hold_any_graphic_byte_but_equals() {
    assert_eq!(pair("a.b-c_d=1"), ("a.b-c_d", "1"));
    assert_eq!(pair("x]y=1"), ("x]y", "1"));
    assert_eq!(pair("k;#=1"), ("k;#", "1"));
}

#[test]
fn utf8_keys_and_values_are_kept_whole() {
    assert_eq!(pair("größe = 12 cm²"), ("größe", "12 cm²"));
}

#[test]
fn whitespace_inside_a_key_is_rejected_at_the_second_word() {
    assert_eq!(fault("ke y=val"), (ErrorKind::InvalidKey, 3));
    assert_eq!(fault("  a\tb = c"), (ErrorKind::InvalidKey, 4));
}

#[test]
fn missing_equals_is_an_invalid_key_at_line_end() {
    assert_eq!(fault("novalue"), (ErrorKind::InvalidKey, 7));
    assert_eq!(fault("two words"), (ErrorKind::InvalidKey, 4));
}

#[test]
fn empty_key_is_accepted() {
    assert_eq!(pair("=value"), ("", "value"));
    assert_eq!(pair("   = value"), ("", "value"));
    assert_eq!(fault("   ="), (ErrorKind::MissingValue, 3));
}

#[test]
fn empty_value_points_at_the_equals_sign() {
    assert_eq!(fault("key="), (ErrorKind::MissingValue, 3));
    assert_eq!(fault("key =  \t\r"), (ErrorKind::MissingValue, 4));
}

// ─────────────────────────────────────────────────────────────────────
// Line walking
// ─────────────────────────────────────────────────────────────────────

fn walk(src: &str) -> Vec<Result<Line, ParseError>> {
    let mut lines = Lines::new(src.as_bytes());
    let mut out = Vec::new();
    while let Some(line) = lines.next_line() {
        out.push(line);
    }
    out
}

#[test]
fn lines_split_on_newline_only() {
    let lines = walk("a=1\r\n\r\n[s]\nb=2");
    assert_eq!(lines.len(), 4);
    assert_eq!(lines[1], Ok(Line::Skip));
    assert!(matches!(lines[2], Ok(Line::Section { .. })));
    assert!(matches!(lines[3], Ok(Line::Pair { .. })));
}

#[test]
fn trailing_newline_adds_no_line() {
    assert_eq!(walk("a=1\n").len(), 1);
    assert_eq!(walk("a=1\n\n").len(), 2);
    assert!(walk("").is_empty());
}

#[test]
fn spans_are_absolute_offsets() {
    let src = "a=1\n[sec]\n";
    let lines = walk(src);
    assert_eq!(
        lines[1],
        Ok(Line::Section {
            name: Span { start: 5, end: 8 }
        })
    );
}

#[test]
fn errors_carry_line_and_column() {
    let mut lines = Lines::new(b"; ok\n\nk=v\n  bad key=1\n");
    let mut last = None;
    while let Some(line) = lines.next_line() {
        last = Some(line);
        if matches!(last, Some(Err(_))) {
            break;
        }
    }
    let err = last.unwrap().unwrap_err();
    assert_eq!(err.kind(), ErrorKind::InvalidKey);
    assert_eq!((err.line(), err.column()), (4, 7));
    assert_eq!(lines.line(), 4);
}

#[test]
fn nul_ends_the_walk() {
    let lines = walk("a=1\n\0[broken\n");
    assert_eq!(lines.len(), 1);
}
