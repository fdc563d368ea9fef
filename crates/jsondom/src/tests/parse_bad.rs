use rstest::rstest;

use crate::{ErrorKind, parse};

#[rstest]
#[case::empty("", ErrorKind::EmptyInput)]
#[case::whitespace_only(" \t\r\n", ErrorKind::EmptyInput)]
#[case::number_root("3.14", ErrorKind::InvalidRoot)]
#[case::string_root("\"text\"", ErrorKind::InvalidRoot)]
#[case::null_root("null", ErrorKind::InvalidRoot)]
#[case::bool_root("true", ErrorKind::InvalidRoot)]
#[case::content_after_root("{} {}", ErrorKind::TrailingContent)]
#[case::garbage_after_root("[] x", ErrorKind::TrailingContent)]
#[case::numeric_member_name("{1:2}", ErrorKind::MemberNameNotString)]
#[case::bare_member_name("{a:1}", ErrorKind::MemberNameNotString)]
#[case::missing_colon("{\"a\" 1}", ErrorKind::ExpectedColon)]
#[case::unclosed_object("{\"a\":1", ErrorKind::ExpectedCommaOrBrace)]
#[case::semicolon_in_object("{\"a\":1;\"b\":2}", ErrorKind::ExpectedCommaOrBrace)]
#[case::unclosed_array("[1", ErrorKind::ExpectedCommaOrBracket)]
#[case::semicolon_in_array("[1;2]", ErrorKind::ExpectedCommaOrBracket)]
#[case::misspelled_null("[nul]", ErrorKind::InvalidLiteral)]
#[case::misspelled_true("[tru]", ErrorKind::InvalidLiteral)]
#[case::misspelled_false("[fals]", ErrorKind::InvalidLiteral)]
#[case::unterminated_string("[\"abc", ErrorKind::UnterminatedString)]
#[case::unterminated_name("{\"abc", ErrorKind::UnterminatedString)]
#[case::escaped_quote("[\"a\\\"b\"]", ErrorKind::UnsupportedEscape)]
#[case::escaped_newline("[\"a\\nb\"]", ErrorKind::UnsupportedEscape)]
fn rejects(#[case] input: &str, #[case] kind: ErrorKind) {
    let err = parse(input).unwrap_err();
    assert_eq!(err.kind, kind, "input {input:?}");
}

#[rstest]
#[case::two_decimal_points("[1.2.3]", "1.2.3")]
#[case::bare_sign("[-]", "-")]
#[case::sign_soup("[e--]", "e--")]
#[case::exponent_without_point("[1e3]", "1e3")]
#[case::natural_overflow("[99999999999999999999]", "99999999999999999999")]
#[case::missing_value("{\"a\":}", "")]
#[case::leading_comma("[,1]", "")]
fn rejects_malformed_numbers(#[case] input: &str, #[case] token: &str) {
    let err = parse(input).unwrap_err();
    assert_eq!(err.kind, ErrorKind::MalformedNumber(token.into()), "input {input:?}");
}

#[test]
fn error_offset_points_at_the_failure() {
    assert_eq!(parse("3.14").unwrap_err().offset, 0);
    // The backslash sits at byte 3 and is reported before being consumed.
    assert_eq!(parse("[\"a\\b\"]").unwrap_err().offset, 3);
}

#[test]
fn errors_render_a_message() {
    let err = parse("[\"a\\b\"]").unwrap_err();
    let text = std::string::ToString::to_string(&err);
    assert!(text.contains("escape sequences are not supported"), "{text}");
    assert!(text.contains("offset 3"), "{text}");
}

#[test]
fn nothing_is_decoded_on_failure() {
    // A failing parse yields no partial root at all.
    assert!(parse("{\"a\": [1, 2,}").is_err());
}
