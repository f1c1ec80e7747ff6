use chain::{Tokenizer, tokenize};

fn collect(input: &str) -> Vec<&str> {
    tokenize(input, '-').collect()
}

#[test]
fn test_splits_chain_in_order() {
    assert_eq!(collect("foo-bar-boo"), vec!["foo", "bar", "boo"]);
}

#[test]
fn test_empty_input_yields_nothing() {
    assert!(collect("").is_empty());
    assert!(collect("---").is_empty());
}

#[test]
fn test_consecutive_delimiters_yield_no_empty_tokens() {
    assert_eq!(collect("--foo--bar-"), vec!["foo", "bar"]);
}

#[test]
fn test_single_token_without_delimiter() {
    assert_eq!(collect("foo"), vec!["foo"]);
}

#[test]
fn test_tokens_are_lazy_and_not_restartable() {
    let mut tokens = Tokenizer::new("foo-bar", '-');
    assert_eq!(tokens.next(), Some("foo"));
    assert_eq!(tokens.remainder(), "bar");
    assert_eq!(tokens.next(), Some("bar"));
    assert_eq!(tokens.next(), None);
    assert_eq!(tokens.next(), None);
}

#[test]
fn test_other_delimiters_are_plain_text() {
    assert_eq!(collect("foo_bar boo"), vec!["foo_bar boo"]);
    assert_eq!(tokenize("foo,bar", ',').collect::<Vec<_>>(), vec!["foo", "bar"]);
}
