//! The JSON serializer: mechanical traversal of a [`Value`] tree, emitted
//! to a write-capable [`Stream`].

use alloc::{format, string::String};
use core::{fmt, marker::PhantomData};

use crate::{
    encoding::{Encoding, Utf8},
    stream::{Stream, VecStream},
    value::{Number, Value},
};

/// Writes a [`Value`] tree as JSON text.
///
/// String payloads are emitted raw, without escaping; this mirrors the
/// parser's no-escape policy, so the escape-free subset round-trips. Output
/// is compact: a nesting level is accepted for an indenting presentation
/// layer but the core grammar ignores it.
///
/// # Examples
///
/// ```rust
/// use jsondom::{parse, VecStream, Writer};
///
/// let doc = parse(r#"[1, true, "x"]"#).unwrap();
/// let mut out = VecStream::new();
/// Writer::new(&mut out).write(&doc);
/// assert_eq!(out.as_bytes(), br#"[1,true,"x"]"#);
/// ```
pub struct Writer<'a, S: Stream, E: Encoding<Unit = u8> = Utf8> {
    stream: &'a mut S,
    nesting_level: usize,
    _encoding: PhantomData<E>,
}

impl<'a, S: Stream> Writer<'a, S> {
    /// Creates a UTF-8 writer over an output stream.
    pub fn new(stream: &'a mut S) -> Self {
        Self::with_nesting(stream, 0)
    }
}

impl<'a, S: Stream, E: Encoding<Unit = u8>> Writer<'a, S, E> {
    /// Creates a writer starting at the given nesting level.
    pub fn with_nesting(stream: &'a mut S, nesting_level: usize) -> Self {
        Self {
            stream,
            nesting_level,
            _encoding: PhantomData,
        }
    }

    /// The nesting level this writer was created at.
    #[must_use]
    pub fn nesting_level(&self) -> usize {
        self.nesting_level
    }

    /// Serializes one value, recursively.
    pub fn write(&mut self, value: &Value) {
        match value {
            Value::Null => self.raw("null"),
            Value::Bool(b) => self.raw(if *b { "true" } else { "false" }),
            Value::Number(Number::Natural(n)) => self.raw(&format!("{n}")),
            Value::Number(Number::Real(r)) => self.raw(&format!("{r}")),
            Value::String(s) => self.quoted(s),
            Value::Array(elements) => {
                self.stream.put(b'[');
                let mut first = true;
                for element in elements {
                    if !first {
                        self.stream.put(b',');
                    }
                    first = false;
                    self.write(element);
                }
                self.stream.put(b']');
            }
            Value::Object(object) => {
                self.stream.put(b'{');
                let mut first = true;
                for (key, member) in object {
                    if !first {
                        self.stream.put(b',');
                    }
                    first = false;
                    self.quoted(key.as_str());
                    self.stream.put(b':');
                    self.write(member);
                }
                self.stream.put(b'}');
            }
        }
    }

    fn quoted(&mut self, text: &str) {
        self.stream.put(b'"');
        let mut units = [0u8; 4];
        for ch in text.chars() {
            let n = E::encode(ch, &mut units);
            for unit in &units[..n] {
                self.stream.put(*unit);
            }
        }
        self.stream.put(b'"');
    }

    fn raw(&mut self, text: &str) {
        for byte in text.bytes() {
            self.stream.put(byte);
        }
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut out = VecStream::new();
        Writer::new(&mut out).write(self);
        // The output is assembled from `str` pieces, so it is valid UTF-8.
        let text = String::from_utf8(out.into_bytes()).map_err(|_| fmt::Error)?;
        f.write_str(&text)
    }
}
