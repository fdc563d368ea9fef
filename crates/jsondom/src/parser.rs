//! The recursive-descent JSON parser.
//!
//! A single automaton with no explicit state table: recursion depth equals
//! the nesting depth of the document. Grammar errors surface as
//! [`ParseError`] results and propagate straight up with `?`; nested calls
//! never catch anything.

use alloc::string::String;

use crate::{
    error::{ErrorKind, ParseError},
    stream::{SliceStream, Stream},
    value::Value,
};

/// Parses a JSON text into a [`Value`] tree.
///
/// The document root must be an object or an array; any other leading
/// token, an empty input, or trailing content after the root is a fatal
/// error. String escape sequences (`\uXXXX`, `\n`, ...) are rejected with
/// [`ErrorKind::UnsupportedEscape`] rather than decoded.
///
/// Recursion depth is not bounded: input nested pathologically deep can
/// exhaust the call stack.
///
/// # Errors
///
/// Returns a [`ParseError`] describing the first malformed token. The
/// parse has no partial result; a single bad token invalidates all of it.
///
/// # Examples
///
/// ```rust
/// use jsondom::{parse, ErrorKind};
///
/// let doc = parse(r#"{"ok": [1, 2.5]}"#).unwrap();
/// assert_eq!(doc["ok"][1].as_real(), 2.5);
///
/// let err = parse("3.14").unwrap_err();
/// assert_eq!(err.kind, ErrorKind::InvalidRoot);
/// ```
pub fn parse(input: &str) -> Result<Value, ParseError> {
    let mut stream = SliceStream::new(input);
    parse_stream(&mut stream)
}

/// Parses a document destructively from a mutable buffer.
///
/// The buffer doubles as scratch space for in-place string storage; its
/// content after a parse is unspecified.
///
/// # Errors
///
/// As for [`parse`], plus [`ErrorKind::InvalidUtf8`] when a string span in
/// the buffer is not valid UTF-8.
pub fn parse_in_place(buf: &mut [u8]) -> Result<Value, ParseError> {
    let mut stream = crate::stream::InplaceStream::new(buf);
    parse_stream(&mut stream)
}

/// Parses one document from any [`Stream`].
///
/// # Errors
///
/// As for [`parse`].
pub fn parse_stream<S: Stream>(s: &mut S) -> Result<Value, ParseError> {
    skip_whitespace(s);
    let root = match s.peek() {
        Some(b'{') => parse_object(s)?,
        Some(b'[') => parse_array(s)?,
        Some(_) => return Err(ParseError::new(ErrorKind::InvalidRoot, s.tell())),
        None => return Err(ParseError::new(ErrorKind::EmptyInput, s.tell())),
    };
    skip_whitespace(s);
    if s.peek().is_some() {
        return Err(ParseError::new(ErrorKind::TrailingContent, s.tell()));
    }
    Ok(root)
}

/// The four JSON whitespace characters; nothing else separates tokens.
fn skip_whitespace<S: Stream>(s: &mut S) {
    while matches!(s.peek(), Some(b' ' | b'\n' | b'\r' | b'\t')) {
        s.take();
    }
}

fn parse_value<S: Stream>(s: &mut S) -> Result<Value, ParseError> {
    match s.peek() {
        Some(b'n') => parse_literal(s, b"null", Value::Null),
        Some(b't') => parse_literal(s, b"true", Value::Bool(true)),
        Some(b'f') => parse_literal(s, b"false", Value::Bool(false)),
        Some(b'"') => parse_string(s).map(Value::String),
        Some(b'{') => parse_object(s),
        Some(b'[') => parse_array(s),
        _ => parse_number(s),
    }
}

/// object: `{` (string `:` value (`,` string `:` value)*)? `}`
fn parse_object<S: Stream>(s: &mut S) -> Result<Value, ParseError> {
    debug_assert_eq!(s.peek(), Some(b'{'));
    s.take();
    skip_whitespace(s);

    let mut root = Value::Object(crate::value::Object::new());
    if s.peek() == Some(b'}') {
        s.take();
        return Ok(root);
    }

    loop {
        if s.peek() != Some(b'"') {
            return Err(ParseError::new(ErrorKind::MemberNameNotString, s.tell()));
        }
        let name = parse_string(s)?;

        skip_whitespace(s);
        if s.take() != Some(b':') {
            return Err(ParseError::new(ErrorKind::ExpectedColon, s.tell()));
        }
        skip_whitespace(s);

        // Last write wins on a duplicate member name.
        root.insert(name, parse_value(s)?);

        skip_whitespace(s);
        match s.take() {
            Some(b',') => skip_whitespace(s),
            Some(b'}') => return Ok(root),
            _ => return Err(ParseError::new(ErrorKind::ExpectedCommaOrBrace, s.tell())),
        }
    }
}

/// array: `[` (value (`,` value)*)? `]`
fn parse_array<S: Stream>(s: &mut S) -> Result<Value, ParseError> {
    debug_assert_eq!(s.peek(), Some(b'['));
    s.take();
    skip_whitespace(s);

    let mut root = Value::Array(crate::value::Array::new());
    if s.peek() == Some(b']') {
        s.take();
        return Ok(root);
    }

    loop {
        root.push(parse_value(s)?);

        skip_whitespace(s);
        match s.take() {
            Some(b',') => skip_whitespace(s),
            Some(b']') => return Ok(root),
            _ => {
                return Err(ParseError::new(
                    ErrorKind::ExpectedCommaOrBracket,
                    s.tell(),
                ));
            }
        }
    }
}

fn parse_literal<S: Stream>(s: &mut S, literal: &[u8], value: Value) -> Result<Value, ParseError> {
    let at = s.tell();
    for expected in literal {
        if s.take() != Some(*expected) {
            return Err(ParseError::new(ErrorKind::InvalidLiteral, at));
        }
    }
    Ok(value)
}

/// Lexically scans a number token and converts it.
///
/// The scan is permissive: any run of digits, `.`, `e`, `E`, `-` and `+`
/// is sliced as one token, and malformed text such as `1.2.3` only fails
/// at the conversion step. A token containing `.` converts as a float,
/// anything else as a signed integer.
fn parse_number<S: Stream>(s: &mut S) -> Result<Value, ParseError> {
    let at = s.tell();
    let start = s.mark();
    while matches!(
        s.peek(),
        Some(b'0'..=b'9' | b'.' | b'e' | b'E' | b'-' | b'+')
    ) {
        s.take();
    }
    let end = s.mark();

    let token = s.span(start, end);
    let malformed = || ParseError::new(ErrorKind::MalformedNumber(token.into()), at);
    let Ok(text) = core::str::from_utf8(token) else {
        return Err(malformed());
    };
    if text.contains('.') {
        text.parse::<f64>().map(Value::from).map_err(|_| malformed())
    } else {
        text.parse::<i64>().map(Value::from).map_err(|_| malformed())
    }
}

/// Scans a string token; the payload is the raw span between the quotes,
/// with no escape decoding.
fn parse_string<S: Stream>(s: &mut S) -> Result<String, ParseError> {
    debug_assert_eq!(s.peek(), Some(b'"'));
    s.take();

    let start = s.mark();
    loop {
        match s.peek() {
            Some(b'"') => {
                let end = s.mark();
                let text = match core::str::from_utf8(s.span(start, end)) {
                    Ok(text) => String::from(text),
                    Err(_) => return Err(ParseError::new(ErrorKind::InvalidUtf8, s.tell())),
                };
                s.take();
                return Ok(text);
            }
            Some(b'\\') => return Err(ParseError::new(ErrorKind::UnsupportedEscape, s.tell())),
            Some(_) => {
                s.take();
            }
            None => return Err(ParseError::new(ErrorKind::UnterminatedString, s.tell())),
        }
    }
}
