use crate::{InplaceStream, SliceStream, Stream, VecStream};

#[test]
fn read_side_contract() {
    let mut s = SliceStream::new("ab");
    assert_eq!(s.tell(), 0);
    assert_eq!(s.peek(), Some(b'a'));
    assert_eq!(s.peek(), Some(b'a'), "peek must not advance");
    assert_eq!(s.take(), Some(b'a'));
    assert_eq!(s.tell(), 1);
    assert_eq!(s.take(), Some(b'b'));
    assert_eq!(s.take(), None);
    assert_eq!(s.peek(), None);
    assert_eq!(s.tell(), 2);
}

#[test]
fn marks_snapshot_and_restore_the_cursor() {
    let mut s = SliceStream::new("0123456");
    s.take();
    let start = s.mark();
    s.take();
    s.take();
    let end = s.mark();
    assert_eq!(s.span(start, end), b"12");
    s.rewind(start);
    assert_eq!(s.peek(), Some(b'1'));
    assert_eq!(s.tell(), 1);
}

#[test]
fn speculative_copies_are_independent() {
    let s = SliceStream::new("xyz");
    let mut probe = s;
    probe.take();
    probe.take();
    assert_eq!(probe.tell(), 2);
    assert_eq!(s.tell(), 0, "the live cursor must be untouched");
}

#[test]
#[should_panic(expected = "without a write side")]
fn put_on_a_read_only_stream_is_a_contract_violation() {
    let mut s = SliceStream::new("x");
    s.put(b'y');
}

#[test]
#[should_panic(expected = "without a write side")]
fn begin_on_a_read_only_stream_is_a_contract_violation() {
    let mut s = SliceStream::new("x");
    let _ = s.begin();
}

#[test]
fn in_place_stream_reads_like_a_slice_stream() {
    let mut buf = *b"abc";
    let mut s = InplaceStream::new(&mut buf);
    assert_eq!(s.take(), Some(b'a'));
    assert_eq!(s.peek(), Some(b'b'));
    assert_eq!(s.tell(), 1);
}

#[test]
fn in_place_writes_land_behind_the_read_cursor() {
    let mut buf = *b"abcdef";
    let mut s = InplaceStream::new(&mut buf);
    s.take();
    s.take();
    s.take();
    // The write cursor aliases the yet-unread region.
    let begin = s.begin();
    s.put(b'x');
    s.put(b'y');
    assert_eq!(s.end(begin), 2);
    drop(s);
    assert_eq!(&buf, b"abcxyf");
}

#[test]
#[should_panic(expected = "before begin()")]
fn in_place_put_requires_begin() {
    let mut buf = *b"ab";
    let mut s = InplaceStream::new(&mut buf);
    s.put(b'x');
}

#[test]
fn vec_stream_counts_written_bytes() {
    let mut out = VecStream::new();
    let begin = out.begin();
    out.put(b'h');
    out.put(b'i');
    assert_eq!(out.end(begin), 2);
    assert_eq!(out.as_bytes(), b"hi");
    assert_eq!(out.into_bytes(), b"hi".to_vec());
}

#[test]
#[should_panic(expected = "write-only stream")]
fn reading_the_output_sink_is_a_contract_violation() {
    let out = VecStream::new();
    let _ = out.peek();
}
