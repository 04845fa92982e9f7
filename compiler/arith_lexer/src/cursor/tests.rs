use super::*;

// === Basic Navigation ===

#[test]
fn current_returns_first_byte() {
    let cursor = Cursor::new("abc");
    assert_eq!(cursor.current(), b'a');
    assert_eq!(cursor.pos(), 0);
}

#[test]
fn advance_moves_forward_and_counts_column() {
    let mut cursor = Cursor::new("abc");
    cursor.advance();
    assert_eq!(cursor.current(), b'b');
    assert_eq!(cursor.pos(), 1);
    assert_eq!(cursor.line_index(), 1);
}

#[test]
fn advance_through_entire_source() {
    let mut cursor = Cursor::new("hi");
    cursor.advance();
    assert!(!cursor.is_eof());
    cursor.advance();
    assert!(cursor.is_eof());
    assert_eq!(cursor.current(), 0);
}

#[test]
fn advance_past_eof_keeps_reading_sentinel() {
    let mut cursor = Cursor::new("1");
    cursor.advance();
    cursor.advance();
    assert!(cursor.is_eof());
    assert_eq!(cursor.pos(), 2);
    assert_eq!(cursor.current(), 0);
    assert_eq!(cursor.peek(), 0);
}

#[test]
fn empty_source_starts_at_eof() {
    let cursor = Cursor::new("");
    assert!(cursor.is_eof());
    assert_eq!(cursor.current_char(), None);
}

// === Peek ===

#[test]
fn peek_returns_next_byte() {
    let cursor = Cursor::new("ab");
    assert_eq!(cursor.peek(), b'b');
}

#[test]
fn peek_near_end_returns_sentinel() {
    let mut cursor = Cursor::new("ab");
    cursor.advance();
    assert_eq!(cursor.peek(), 0);
}

#[test]
fn peek_char_skips_a_full_character() {
    let cursor = Cursor::new("é.");
    assert_eq!(cursor.current_char(), Some('é'));
    assert_eq!(cursor.peek_char(), Some('.'));
}

#[test]
fn peek_char_at_last_character_is_none() {
    let cursor = Cursor::new(".");
    assert_eq!(cursor.peek_char(), None);
}

// === Interior Null ===

#[test]
fn interior_null_is_not_eof() {
    let cursor = Cursor::new("\0x");
    assert_eq!(cursor.current(), 0);
    assert!(!cursor.is_eof());
    assert_eq!(cursor.current_char(), Some('\0'));
}

// === Multi-byte Characters ===

#[test]
fn advance_steps_over_multibyte_character() {
    let mut cursor = Cursor::new("€1");
    cursor.advance();
    assert_eq!(cursor.pos(), 3);
    assert_eq!(cursor.line_index(), 1);
    assert_eq!(cursor.current(), b'1');
}

// === Eat While ===

#[test]
fn eat_while_digits() {
    let mut cursor = Cursor::new("123abc");
    cursor.eat_while(|b| b.is_ascii_digit());
    assert_eq!(cursor.pos(), 3);
    assert_eq!(cursor.line_index(), 3);
    assert_eq!(cursor.slice_from(0), "123");
}

#[test]
fn eat_while_stops_at_sentinel() {
    let mut cursor = Cursor::new("42");
    cursor.eat_while(|b| b.is_ascii_digit());
    assert!(cursor.is_eof());
    assert_eq!(cursor.slice_from(0), "42");
}

// === Lines ===

#[test]
fn newline_resets_index_and_counts_line() {
    let mut cursor = Cursor::new("ab\ncd");
    cursor.advance();
    cursor.advance();
    cursor.newline();
    assert_eq!(cursor.line_number(), 1);
    assert_eq!(cursor.line_index(), 0);
    cursor.advance();
    assert_eq!(cursor.line_index(), 1);
    assert_eq!(cursor.current(), b'c');
}

#[test]
fn line_text_indexes_by_processed_newlines() {
    let mut cursor = Cursor::new("one\r\ntwo\nthree");
    assert_eq!(cursor.line_text(), "one\r");
    cursor.newline();
    assert_eq!(cursor.line_text(), "two");
    cursor.newline();
    assert_eq!(cursor.line_text(), "three");
}

#[test]
fn line_text_of_trailing_empty_line() {
    let mut cursor = Cursor::new("x\n");
    cursor.newline();
    assert_eq!(cursor.line_text(), "");
}
