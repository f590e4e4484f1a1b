//! Tests for in-memory sources.

use std::io::{Read, Seek, SeekFrom};

use crate::{InMemorySource, SeekableSource};

#[test]
fn in_memory_source_serves_data() {
    let src = InMemorySource::from_string("id", "hello");
    assert_eq!(src.id(), "id");
    assert_eq!(src.data(), b"hello");

    let mut handle = src.open().expect("open in-memory source");
    assert_eq!(handle.seek(SeekFrom::End(0)).unwrap(), 5);

    handle.seek(SeekFrom::Start(1)).unwrap();
    let mut buf = String::new();
    handle.read_to_string(&mut buf).unwrap();
    assert_eq!(buf, "ello");
}

#[test]
fn each_open_is_independent() {
    let src = InMemorySource::new("id", b"abc".to_vec());
    let mut first = src.open().unwrap();
    first.seek(SeekFrom::End(0)).unwrap();

    let mut second = src.open().unwrap();
    let mut buf = String::new();
    second.read_to_string(&mut buf).unwrap();
    assert_eq!(buf, "abc");
}
