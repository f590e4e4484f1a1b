use std::fs;

use crate::error::BackReadError;
use crate::{
    BackwardLineReader, FileSource, ReaderOptions, ReaderState, SeekableSource, last_lines,
    read_lines_rev,
};

#[test]
fn reads_file_backwards() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("log.txt");
    fs::write(&path, "one\ntwo ü\nthree €\n").unwrap();

    let lines = read_lines_rev(&path, ReaderOptions::new().with_chunk_size(2)).unwrap();
    let lines: Vec<&str> = lines.iter().map(|l| l.as_str()).collect();
    assert_eq!(lines, vec!["three €\n", "two ü\n", "one\n"]);
}

#[test]
fn empty_file_yields_nothing() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("empty.txt");
    fs::write(&path, "").unwrap();

    let mut reader = BackwardLineReader::open(&path, ReaderOptions::default()).unwrap();
    assert!(reader.next().is_none());
    assert_eq!(reader.state(), ReaderState::Exhausted);
}

#[test]
fn missing_file_is_file_not_found() {
    let dir = tempfile::tempdir().unwrap();
    let err = BackwardLineReader::open(dir.path().join("nope.txt"), ReaderOptions::default())
        .unwrap_err();
    assert!(matches!(err, BackReadError::FileNotFound { .. }));
}

#[test]
fn directory_is_not_readable() {
    let dir = tempfile::tempdir().unwrap();
    let err = BackwardLineReader::open(dir.path(), ReaderOptions::default()).unwrap_err();
    assert!(matches!(err, BackReadError::NotReadable { .. }));
}

#[cfg(target_os = "linux")]
#[test]
fn character_device_is_not_readable() {
    let err = BackwardLineReader::open("/dev/null", ReaderOptions::default()).unwrap_err();
    match err {
        BackReadError::NotReadable { target, source } => {
            assert_eq!(target, "/dev/null");
            assert_eq!(source.kind(), std::io::ErrorKind::InvalidInput);
        }
        other => panic!("unexpected error: {other:?}"),
    }
}

#[test]
fn last_lines_returns_tail_in_file_order() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("tail.txt");
    let content: String = (1..=100).map(|i| format!("line {i}\n")).collect();
    fs::write(&path, &content).unwrap();

    let tail = last_lines(&path, 3, ReaderOptions::new().with_chunk_size(7)).unwrap();
    let tail: Vec<String> = tail.into_iter().map(String::from).collect();
    assert_eq!(tail, vec!["line 98\n", "line 99\n", "line 100\n"]);

    assert!(last_lines(&path, 0, ReaderOptions::default()).unwrap().is_empty());
    assert_eq!(last_lines(&path, 1000, ReaderOptions::default()).unwrap().len(), 100);
}

#[test]
fn reader_from_file_source() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("src.txt");
    fs::write(&path, "a\nb").unwrap();

    let source = FileSource::new(&path);
    let reader = BackwardLineReader::from_source(&source, ReaderOptions::default()).unwrap();
    assert_eq!(reader.id(), source.id());
    let lines: Vec<String> = reader.map(|l| l.unwrap().into_string()).collect();
    assert_eq!(lines, vec!["b", "a\n"]);
}

#[test]
fn dropping_reader_releases_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("drop.txt");
    fs::write(&path, "x\ny\nz\n").unwrap();

    {
        let mut reader = BackwardLineReader::open(&path, ReaderOptions::default()).unwrap();
        assert_eq!(reader.next().unwrap().unwrap(), "z\n");
    }

    fs::remove_file(&path).unwrap();
    assert!(!path.exists());
}
