use std::iter::FusedIterator;

/// Splits a chain string on a single delimiter character.
///
/// Runs of delimiters never produce empty tokens, and leading or trailing
/// delimiters are ignored, so `"--foo--bar-"` yields `foo`, `bar`. Tokens
/// borrow from the input; nothing is copied.
#[derive(Debug, Clone)]
pub struct Tokenizer<'a> {
    rest: &'a str,
    delimiter: char,
}

impl<'a> Tokenizer<'a> {
    pub fn new(input: &'a str, delimiter: char) -> Self {
        Self {
            rest: input,
            delimiter,
        }
    }

    /// The unconsumed tail of the input.
    pub fn remainder(&self) -> &'a str {
        self.rest
    }
}

impl<'a> Iterator for Tokenizer<'a> {
    type Item = &'a str;

    fn next(&mut self) -> Option<&'a str> {
        let trimmed = self.rest.trim_start_matches(self.delimiter);
        if trimmed.is_empty() {
            self.rest = trimmed;
            return None;
        }

        match trimmed.find(self.delimiter) {
            Some(end) => {
                let (token, tail) = trimmed.split_at(end);
                self.rest = &tail[self.delimiter.len_utf8()..];
                Some(token)
            }
            None => {
                self.rest = "";
                Some(trimmed)
            }
        }
    }
}

impl FusedIterator for Tokenizer<'_> {}

pub fn tokenize(input: &str, delimiter: char) -> Tokenizer<'_> {
    Tokenizer::new(input, delimiter)
}
