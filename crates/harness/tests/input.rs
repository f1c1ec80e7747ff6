use std::io::Cursor;

use harness::ChainReader;

fn reader(input: &str) -> ChainReader<Cursor<Vec<u8>>> {
    ChainReader::new(Cursor::new(input.as_bytes().to_vec()))
}

#[test]
fn test_reads_one_word_per_call() {
    let mut r = reader("foo-bar-boo\nbar\n");
    assert_eq!(r.read_chain().unwrap().as_deref(), Some("foo-bar-boo"));
    assert_eq!(r.read_chain().unwrap().as_deref(), Some("bar"));
    assert_eq!(r.read_chain().unwrap(), None);
}

#[test]
fn test_skips_blank_lines_and_splits_on_spaces() {
    let mut r = reader("\n\n   foo bar\tboo");
    assert_eq!(r.read_chain().unwrap().as_deref(), Some("foo"));
    assert_eq!(r.read_chain().unwrap().as_deref(), Some("bar"));
    assert_eq!(r.read_chain().unwrap().as_deref(), Some("boo"));
    assert_eq!(r.read_chain().unwrap(), None);
}

#[test]
fn test_long_word_is_cut_at_twenty_bytes() {
    let mut r = reader("foo-bar-boo-foo-bar-boo\n");
    assert_eq!(r.read_chain().unwrap().as_deref(), Some("foo-bar-boo-foo-bar-"));
    assert_eq!(r.read_chain().unwrap().as_deref(), Some("boo"));
}

#[test]
fn test_word_split_across_buffer_refills() {
    let input = std::io::BufReader::with_capacity(3, Cursor::new(b"foo-bar boo".to_vec()));
    let mut r = ChainReader::new(input);
    assert_eq!(r.read_chain().unwrap().as_deref(), Some("foo-bar"));
    assert_eq!(r.read_chain().unwrap().as_deref(), Some("boo"));
}

#[test]
fn test_empty_input() {
    assert_eq!(reader("").read_chain().unwrap(), None);
    assert_eq!(reader(" \n\t").read_chain().unwrap(), None);
}

#[test]
fn test_custom_limit() {
    let mut r = ChainReader::with_max_len(Cursor::new(b"foo-bar".to_vec()), 3);
    assert_eq!(r.read_chain().unwrap().as_deref(), Some("foo"));
    assert_eq!(r.read_chain().unwrap().as_deref(), Some("-ba"));
    assert_eq!(r.read_chain().unwrap().as_deref(), Some("r"));
}
