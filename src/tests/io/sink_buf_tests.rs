//! Tests for the sink-backed buffer.

use std::io::Write;

use crate::tests::support::Recorder;
use crate::{DEFAULT_BUFFER_SIZE, SinkBuf};

fn buffer<const N: usize>() -> (SinkBuf<Recorder, N>, Recorder) {
    let recorder = Recorder::default();
    (SinkBuf::new(recorder.clone()), recorder)
}

#[test]
fn new_buffer_is_empty_with_default_capacity() {
    let (buf, recorder) = buffer::<DEFAULT_BUFFER_SIZE>();

    assert_eq!(buf.capacity(), 256);
    assert!(buf.pending().is_empty());
    assert!(recorder.chunks().is_empty());
}

#[test]
fn short_write_is_held_until_flush() {
    let (mut buf, recorder) = buffer::<DEFAULT_BUFFER_SIZE>();

    buf.write_all(b"hello").unwrap();
    assert!(recorder.chunks().is_empty());
    assert_eq!(buf.pending(), b"hello");

    buf.flush().unwrap();
    assert_eq!(recorder.chunks(), vec![b"hello".to_vec()]);
    assert!(buf.pending().is_empty());
}

#[test]
fn drop_emits_trailing_partial_chunk_once() {
    let (mut buf, recorder) = buffer::<DEFAULT_BUFFER_SIZE>();
    buf.write_all(b"partial line").unwrap();
    drop(buf);

    assert_eq!(recorder.chunks(), vec![b"partial line".to_vec()]);
}

#[test]
fn drop_after_flush_emits_nothing_more() {
    let (mut buf, recorder) = buffer::<DEFAULT_BUFFER_SIZE>();
    buf.write_all(b"abc").unwrap();
    buf.flush().unwrap();
    drop(buf);

    assert_eq!(recorder.chunks(), vec![b"abc".to_vec()]);
}

#[test]
fn flush_with_nothing_pending_is_noop() {
    let (mut buf, recorder) = buffer::<8>();
    buf.flush().unwrap();
    buf.flush().unwrap();
    drop(buf);

    assert!(recorder.chunks().is_empty());
}

#[test]
fn exactly_full_buffer_waits_for_next_byte() {
    let (mut buf, recorder) = buffer::<8>();

    buf.write_all(b"12345678").unwrap();
    assert!(recorder.chunks().is_empty());
    assert_eq!(buf.pending().len(), 8);

    buf.write_all(b"9").unwrap();
    assert_eq!(recorder.chunks(), vec![b"12345678".to_vec()]);
    assert_eq!(buf.pending(), b"9");
}

#[test]
fn long_write_is_split_into_capacity_sized_chunks_in_order() {
    let (mut buf, recorder) = buffer::<16>();
    let text: String = ('a'..='z').cycle().take(16 * 3 + 5).collect();

    buf.write_all(text.as_bytes()).unwrap();
    let chunks = recorder.chunks();
    assert_eq!(chunks.len(), 3);
    assert!(chunks.iter().all(|c| c.len() == 16));

    drop(buf);
    assert_eq!(recorder.chunks().len(), 4);
    assert_eq!(recorder.joined(), text.as_bytes());
}

#[test]
fn many_small_writes_lose_nothing() {
    let (mut buf, recorder) = buffer::<DEFAULT_BUFFER_SIZE>();
    let mut expected = Vec::new();
    for i in 0..200 {
        let line = format!("line {i}\n");
        buf.write_all(line.as_bytes()).unwrap();
        expected.extend_from_slice(line.as_bytes());
    }
    drop(buf);

    assert_eq!(recorder.joined(), expected);
}

#[test]
fn overflow_stores_byte_after_flushing() {
    let (mut buf, recorder) = buffer::<4>();
    buf.write_all(b"ab").unwrap();

    buf.overflow(Some(b'c'));
    assert_eq!(recorder.chunks(), vec![b"ab".to_vec()]);
    assert_eq!(buf.pending(), b"c");
}

#[test]
fn overflow_without_byte_only_flushes() {
    let (mut buf, recorder) = buffer::<4>();
    buf.write_all(b"ab").unwrap();

    buf.overflow(None);
    assert_eq!(recorder.chunks(), vec![b"ab".to_vec()]);
    assert!(buf.pending().is_empty());
}

#[test]
fn zero_capacity_emits_each_byte_on_its_own() {
    let (mut buf, recorder) = buffer::<0>();

    buf.write_all(b"hey").unwrap();
    assert_eq!(
        recorder.chunks(),
        vec![b"h".to_vec(), b"e".to_vec(), b"y".to_vec()]
    );
    drop(buf);
    assert_eq!(recorder.chunks().len(), 3);
}

#[test]
fn zero_capacity_keeps_multibyte_text_intact() {
    let (mut buf, recorder) = buffer::<0>();
    buf.write_all("é".as_bytes()).unwrap();
    drop(buf);

    assert_eq!(recorder.chunks(), vec![vec![0xC3], vec![0xA9]]);
    assert_eq!(recorder.joined(), "é".as_bytes());
}

#[test]
fn chunk_boundary_ignores_character_boundaries() {
    let (mut buf, recorder) = buffer::<4>();

    // "abc" + the two bytes of 'é'; the buffer fills mid-character.
    buf.write_all("abcé".as_bytes()).unwrap();
    assert_eq!(recorder.chunks(), vec![b"abc\xC3".to_vec()]);
    assert_eq!(buf.pending(), b"\xA9");

    buf.flush().unwrap();
    assert!(buf.pending().is_empty());
    assert_eq!(recorder.joined(), "abcé".as_bytes());
}

#[test]
fn non_utf8_bytes_pass_through_verbatim() {
    let (mut buf, recorder) = buffer::<8>();
    buf.write_all(&[0xFF, 0xFE]).unwrap();
    buf.flush().unwrap();

    assert_eq!(recorder.chunks(), vec![vec![0xFF, 0xFE]]);
}

#[test]
fn closures_are_chunk_writers() {
    let mut seen = Vec::new();
    {
        let mut buf = SinkBuf::<_, 4>::new(|chunk: &[u8]| seen.push(chunk.len()));
        buf.write_all(b"0123456789").unwrap();
    }

    assert_eq!(seen, vec![4, 4, 2]);
}
