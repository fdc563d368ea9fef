//! Character streams: a cursor abstraction over in-memory text.
//!
//! Every stream exposes the read side of the contract (`peek`/`take`/`tell`)
//! plus a snapshot mechanism (`mark`/`rewind`/`span`) that the parser uses
//! for unbounded-lookahead token scanning: a [`Mark`] is a plain cursor copy,
//! and committing a scan is simply not rewinding. Write-capable streams also
//! implement `begin`/`put`/`end`; calling those on a read-only stream is a
//! contract violation by the caller and fails fast with a panic, it is never
//! a recoverable error.

use alloc::vec::Vec;

/// A snapshot of a stream cursor, taken with [`Stream::mark`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Mark(pub(crate) usize);

/// A cursor over character data.
///
/// End of input is represented by `None` from [`peek`](Stream::peek) and
/// [`take`](Stream::take); there is no sentinel byte.
pub trait Stream {
    /// Returns the byte at the cursor without advancing.
    fn peek(&self) -> Option<u8>;

    /// Returns the byte at the cursor and advances past it.
    fn take(&mut self) -> Option<u8>;

    /// The number of bytes consumed since the stream's origin.
    fn tell(&self) -> usize;

    /// Takes a snapshot of the read cursor.
    fn mark(&self) -> Mark;

    /// Moves the read cursor back to an earlier snapshot.
    fn rewind(&mut self, mark: Mark);

    /// The raw bytes between two snapshots.
    fn span(&self, start: Mark, end: Mark) -> &[u8];

    /// Starts a write at the current position and returns its start cursor.
    fn begin(&mut self) -> Mark {
        panic!("begin() called on a stream without a write side");
    }

    /// Appends one byte at the write cursor.
    fn put(&mut self, byte: u8) {
        let _ = byte;
        panic!("put() called on a stream without a write side");
    }

    /// Ends a write, returning the number of bytes written since `begin`.
    fn end(&mut self, begin: Mark) -> usize {
        let _ = begin;
        panic!("end() called on a stream without a write side");
    }
}

/// A read-only stream over borrowed source text.
///
/// Copying is a cursor copy, so speculative scans are free.
#[derive(Clone, Copy, Debug)]
pub struct SliceStream<'a> {
    src: &'a [u8],
    pos: usize,
}

impl<'a> SliceStream<'a> {
    /// Wraps a source text.
    #[must_use]
    pub fn new(src: &'a str) -> Self {
        Self::from_bytes(src.as_bytes())
    }

    /// Wraps raw source bytes.
    #[must_use]
    pub fn from_bytes(src: &'a [u8]) -> Self {
        Self { src, pos: 0 }
    }
}

impl Stream for SliceStream<'_> {
    fn peek(&self) -> Option<u8> {
        self.src.get(self.pos).copied()
    }

    fn take(&mut self) -> Option<u8> {
        let byte = self.peek()?;
        self.pos += 1;
        Some(byte)
    }

    fn tell(&self) -> usize {
        self.pos
    }

    fn mark(&self) -> Mark {
        Mark(self.pos)
    }

    fn rewind(&mut self, mark: Mark) {
        debug_assert!(mark.0 <= self.pos);
        self.pos = mark.0;
    }

    fn span(&self, start: Mark, end: Mark) -> &[u8] {
        &self.src[start.0..end.0]
    }
}

/// A read-write stream over a mutable buffer, for destructive in-place
/// parsing.
///
/// [`begin`](Stream::begin) aliases the write cursor to the not-yet-read part
/// of the source, so decoded output compacts behind the read cursor and
/// reuses the source buffer's memory instead of allocating.
#[derive(Debug)]
pub struct InplaceStream<'a> {
    buf: &'a mut [u8],
    src: usize,
    dst: Option<usize>,
}

impl<'a> InplaceStream<'a> {
    /// Wraps a mutable source buffer.
    pub fn new(buf: &'a mut [u8]) -> Self {
        Self {
            buf,
            src: 0,
            dst: None,
        }
    }
}

impl Stream for InplaceStream<'_> {
    fn peek(&self) -> Option<u8> {
        self.buf.get(self.src).copied()
    }

    fn take(&mut self) -> Option<u8> {
        let byte = self.peek()?;
        self.src += 1;
        Some(byte)
    }

    fn tell(&self) -> usize {
        self.src
    }

    fn mark(&self) -> Mark {
        Mark(self.src)
    }

    fn rewind(&mut self, mark: Mark) {
        debug_assert!(mark.0 <= self.src);
        self.src = mark.0;
    }

    fn span(&self, start: Mark, end: Mark) -> &[u8] {
        &self.buf[start.0..end.0]
    }

    fn begin(&mut self) -> Mark {
        self.dst = Some(self.src);
        Mark(self.src)
    }

    fn put(&mut self, byte: u8) {
        let Some(dst) = self.dst.as_mut() else {
            panic!("put() called before begin()");
        };
        self.buf[*dst] = byte;
        *dst += 1;
    }

    fn end(&mut self, begin: Mark) -> usize {
        let Some(dst) = self.dst.take() else {
            panic!("end() called before begin()");
        };
        dst - begin.0
    }
}

/// A write-only output stream backed by an owned, growable buffer.
///
/// This is the serializer's sink. Its read side is a contract violation,
/// symmetric with the write side of a read-only stream.
#[derive(Debug, Default)]
pub struct VecStream {
    buf: Vec<u8>,
}

impl VecStream {
    /// Creates an empty output stream.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// The bytes written so far.
    #[must_use]
    pub fn as_bytes(&self) -> &[u8] {
        &self.buf
    }

    /// Consumes the stream, returning its buffer.
    #[must_use]
    pub fn into_bytes(self) -> Vec<u8> {
        self.buf
    }
}

impl Stream for VecStream {
    fn peek(&self) -> Option<u8> {
        panic!("peek() called on a write-only stream");
    }

    fn take(&mut self) -> Option<u8> {
        panic!("take() called on a write-only stream");
    }

    fn tell(&self) -> usize {
        panic!("tell() called on a write-only stream");
    }

    fn mark(&self) -> Mark {
        panic!("mark() called on a write-only stream");
    }

    fn rewind(&mut self, _mark: Mark) {
        panic!("rewind() called on a write-only stream");
    }

    fn span(&self, _start: Mark, _end: Mark) -> &[u8] {
        panic!("span() called on a write-only stream");
    }

    fn begin(&mut self) -> Mark {
        Mark(self.buf.len())
    }

    fn put(&mut self, byte: u8) {
        self.buf.push(byte);
    }

    fn end(&mut self, begin: Mark) -> usize {
        self.buf.len() - begin.0
    }
}
