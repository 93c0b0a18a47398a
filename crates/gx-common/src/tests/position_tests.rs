use crate::position::{LineMap, Position};

#[test]
fn test_line_map_simple() {
    let source = "line1\nline2\nline3";
    let map = LineMap::build(source);

    assert_eq!(map.line_count(), 3);
    assert_eq!(map.offset_to_position(0), Position::new(0, 0));
    assert_eq!(map.offset_to_position(4), Position::new(0, 4));
    assert_eq!(map.offset_to_position(6), Position::new(1, 0));
    assert_eq!(map.offset_to_position(12), Position::new(2, 0));
}

#[test]
fn test_line_map_crlf_counts_once() {
    let source = "line1\r\nline2\r\nline3";
    let map = LineMap::build(source);

    assert_eq!(map.line_count(), 3);
    assert_eq!(map.offset_to_position(7), Position::new(1, 0));
    // The \r still belongs to the first line.
    assert_eq!(map.offset_to_position(5), Position::new(0, 5));
}

#[test]
fn test_position_to_offset_roundtrip() {
    let source = "int x = 1;\nfixed y = 2.0;\nstring z;";
    let map = LineMap::build(source);

    for offset in [0u32, 4, 11, 17, 26] {
        let position = map.offset_to_position(offset);
        assert_eq!(
            map.position_to_offset(position, source.len() as u32),
            Some(offset)
        );
    }
}

#[test]
fn test_position_to_offset_clamps_to_line_end() {
    let source = "ab\ncd";
    let map = LineMap::build(source);

    assert_eq!(map.position_to_offset(Position::new(0, 50), 5), Some(3));
    assert_eq!(map.position_to_offset(Position::new(1, 50), 5), Some(5));
    assert_eq!(map.position_to_offset(Position::new(7, 0), 5), None);
}

#[test]
fn test_from_line_starts_inserts_zero() {
    let map = LineMap::from_line_starts(vec![4, 9]);
    assert_eq!(map.line_starts(), &[0, 4, 9]);
    assert_eq!(map.offset_to_position(10), Position::new(2, 1));
}

#[test]
fn test_empty_source_has_one_line() {
    let map = LineMap::build("");
    assert_eq!(map.line_count(), 1);
    assert_eq!(map.line_start(0), Some(0));
    assert_eq!(map.offset_to_position(0), Position::new(0, 0));
}
