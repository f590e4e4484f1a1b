use crate::buffer::PendingBuffer;
use crate::line::Line;

fn drain(buf: &mut PendingBuffer) -> Vec<String> {
    std::iter::from_fn(|| buf.take_last_line())
        .map(Line::into_string)
        .collect()
}

#[test]
fn splits_lines_from_the_tail() {
    let mut buf = PendingBuffer::new('\n');
    buf.prepend("a\nb\nc".to_string());
    assert_eq!(buf.terminators(), 2);
    assert_eq!(drain(&mut buf), vec!["c", "b\n", "a\n"]);
    assert!(buf.is_empty());
    assert_eq!(buf.terminators(), 0);
}

#[test]
fn keeps_inner_terminator_for_next_line() {
    let mut buf = PendingBuffer::new('\n');
    buf.prepend("x\ny\n".to_string());

    let line = buf.take_last_line().unwrap();
    assert_eq!(line, "y\n");
    assert_eq!(buf.len(), 2);
    assert_eq!(buf.terminators(), 1);
    assert!(!buf.has_complete_line());
}

#[test]
fn lone_terminator_is_an_empty_terminated_line() {
    let mut buf = PendingBuffer::new('\n');
    buf.prepend("\n".to_string());

    let line = buf.take_last_line().unwrap();
    assert_eq!(line.content(), "");
    assert!(line.is_terminated());
    assert!(buf.take_last_line().is_none());
}

#[test]
fn double_trailing_terminator_yields_empty_line_first() {
    let mut buf = PendingBuffer::new('\n');
    buf.prepend("a\n\n".to_string());
    assert_eq!(drain(&mut buf), vec!["\n", "a\n"]);
}

#[test]
fn prepend_counts_terminators_incrementally() {
    let mut buf = PendingBuffer::new('\n');
    buf.prepend("c\n".to_string());
    buf.prepend("b".to_string());
    assert!(!buf.has_complete_line());

    buf.prepend("a\n".to_string());
    assert!(buf.has_complete_line());
    assert_eq!(drain(&mut buf), vec!["bc\n", "a\n"]);
}

#[test]
fn multibyte_terminator() {
    let mut buf = PendingBuffer::new('¶');
    buf.prepend("one¶two¶".to_string());
    assert_eq!(drain(&mut buf), vec!["two¶", "one¶"]);
}

#[test]
fn clear_resets_state() {
    let mut buf = PendingBuffer::new('\n');
    buf.prepend("a\nb\n".to_string());
    buf.clear();
    assert!(buf.is_empty());
    assert_eq!(buf.terminators(), 0);
    assert!(buf.take_last_line().is_none());
}

#[test]
fn chunks_stay_separate_until_a_line_is_split_off() {
    let mut buf = PendingBuffer::new('\n');
    buf.prepend("tail\n".to_string());
    for _ in 0..1000 {
        buf.prepend("xyz".to_string());
    }
    assert_eq!(buf.chunk_count(), 1001);
    assert_eq!(buf.len(), 3000 + 5);

    let line = buf.take_last_line().unwrap();
    assert_eq!(line.len(), 3005);
    assert!(line.starts_with("xyzxyz"));
    assert!(line.ends_with("xyztail\n"));
    assert!(buf.is_empty());
}

#[test]
fn split_point_inside_an_earlier_chunk() {
    let mut buf = PendingBuffer::new('\n');
    buf.prepend("c\n".to_string());
    buf.prepend("b".to_string());
    buf.prepend("a\nb".to_string());
    assert_eq!(buf.chunk_count(), 3);

    assert_eq!(buf.take_last_line().unwrap(), "bbc\n");
    assert_eq!(buf.chunk_count(), 1);
    assert_eq!(buf.len(), 2);
    assert_eq!(drain(&mut buf), vec!["a\n"]);
}

#[test]
fn empty_chunks_are_ignored() {
    let mut buf = PendingBuffer::new('\n');
    buf.prepend("a\n".to_string());
    buf.prepend(String::new());
    assert_eq!(buf.chunk_count(), 1);
    assert_eq!(drain(&mut buf), vec!["a\n"]);
}
