use super::*;

#[test]
fn reader_matches_in_memory_count() {
    let rust = builtin("Rust");
    let counter = SlocCounter::new(&rust);
    let source = "// a\r\nfn x() {\r    /* b\n\n    */\n}\r\n";

    let from_reader = counter.count_reader(Cursor::new(source.as_bytes())).unwrap();
    assert_eq!(from_reader, counter.count(source));
    assert_eq!(from_reader, stats(2, 4, 0));
}

#[test]
fn reader_decodes_invalid_utf8_lossily() {
    let python = builtin("Python");
    let counter = SlocCounter::new(&python);
    let bytes: &[u8] = b"x = 1\n# \xff\xfe bad\n";

    let result = counter.count_reader(Cursor::new(bytes)).unwrap();
    assert_eq!(result, stats(1, 1, 0));
}

#[test]
fn reader_strips_byte_order_mark() {
    let python = builtin("Python");
    let counter = SlocCounter::new(&python);
    let bytes: &[u8] = b"\xef\xbb\xbf# c\nx = 1\n";

    let result = counter.count_reader(Cursor::new(bytes)).unwrap();
    assert_eq!(result, stats(1, 1, 0));
}

#[test]
fn reader_keeps_block_state_across_lines() {
    let c = builtin("C");
    let counter = SlocCounter::new(&c);

    let result = counter
        .count_reader(Cursor::new("/*\n\n*/\nint x;".as_bytes()))
        .unwrap();
    assert_eq!(result, stats(1, 3, 0));
}

#[test]
fn reader_handles_trailing_lone_cr() {
    let c = builtin("C");
    let counter = SlocCounter::new(&c);

    let result = counter.count_reader(Cursor::new("int a;\r".as_bytes())).unwrap();
    assert_eq!(result, stats(1, 0, 0));
}
