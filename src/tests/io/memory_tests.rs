//! Tests for the in-memory sink.

use std::io::Write;

use crate::InMemorySink;

#[test]
fn in_memory_sink_collects_writes_from_all_targets() {
    let sink = InMemorySink::new("out");
    assert_eq!(sink.id(), "out");

    sink.target().write_all(b"abc").unwrap();
    sink.target().write_all(b"def").unwrap();

    assert_eq!(sink.contents(), b"abcdef".to_vec());
    assert_eq!(sink.contents_string(), "abcdef");
}

#[test]
fn in_memory_sink_clear() {
    let sink = InMemorySink::new("out");
    let mut target = sink.target();
    target.write_all(b"abc").unwrap();

    sink.clear();
    assert!(sink.contents().is_empty());

    target.write_all(b"x").unwrap();
    assert_eq!(sink.contents_string(), "x");
}
