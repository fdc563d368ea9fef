//! Parse and load errors.

use bstr::BString;
use thiserror::Error;

/// A fatal parse failure: what went wrong plus the byte offset where it was
/// detected.
///
/// A single malformed token invalidates the whole parse; no best-effort
/// recovery is attempted. Contract violations (wrong-kind accessors, writes
/// on a read-only stream) are *not* reported through this type, they panic.
#[derive(Debug, Error, PartialEq)]
#[error("{kind} at offset {offset}")]
pub struct ParseError {
    /// What went wrong.
    pub kind: ErrorKind,
    /// Byte offset from the start of the input.
    pub offset: usize,
}

impl ParseError {
    pub(crate) fn new(kind: ErrorKind, offset: usize) -> Self {
        Self { kind, offset }
    }
}

/// The kinds of fatal parse failure.
#[derive(Debug, Error, PartialEq)]
pub enum ErrorKind {
    /// The input was empty or contained only whitespace.
    #[error("empty input")]
    EmptyInput,
    /// The first non-whitespace character was not `{` or `[`.
    #[error("document root must be an object or an array")]
    InvalidRoot,
    /// Non-whitespace input remained after the root value.
    #[error("unexpected content after the root value")]
    TrailingContent,
    /// An object member name did not start with `"`.
    #[error("name of an object member must be a string")]
    MemberNameNotString,
    /// The `:` between a member name and its value was missing.
    #[error("expected a colon after an object member name")]
    ExpectedColon,
    /// An object member was not followed by `,` or `}`.
    #[error("expected ',' or '}}' after an object member")]
    ExpectedCommaOrBrace,
    /// An array element was not followed by `,` or `]`.
    #[error("expected ',' or ']' after an array element")]
    ExpectedCommaOrBracket,
    /// A `null`/`true`/`false` literal was misspelled.
    #[error("invalid literal")]
    InvalidLiteral,
    /// A numeric-shaped token did not convert, e.g. `1.2.3` or an
    /// overflowing integer. Carries the raw token bytes.
    #[error("malformed number `{0}`")]
    MalformedNumber(BString),
    /// The input ended inside a string.
    #[error("unterminated string")]
    UnterminatedString,
    /// A backslash appeared inside a string. Escape sequences are not
    /// decoded; this is a documented limitation, not a missing feature.
    #[error("escape sequences are not supported")]
    UnsupportedEscape,
    /// A string payload was not valid UTF-8 (possible only when parsing raw
    /// byte buffers).
    #[error("string is not valid UTF-8")]
    InvalidUtf8,
}

/// Failure to load a document from a file.
///
/// An unreadable file is reported without detail, distinct from a parse
/// error in its content.
#[cfg(feature = "std")]
#[derive(Debug, Error)]
pub enum LoadError {
    /// The file could not be opened or read.
    #[error("could not read file")]
    Io,
    /// The file was read but its content is not well-formed.
    #[error(transparent)]
    Parse(#[from] ParseError),
}
