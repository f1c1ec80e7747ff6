use std::io::{self, BufRead};

use chain::Config;

/// Reads one chain per call, the way `scanf("%20s")` reads a word.
///
/// Leading whitespace (newlines included) is skipped, then at most
/// `max_len` non-whitespace bytes are taken. Whatever is left of an
/// over-long word stays in the stream and becomes the next chain.
#[derive(Debug)]
pub struct ChainReader<R> {
    input: R,
    max_len: usize,
}

impl<R: BufRead> ChainReader<R> {
    pub fn new(input: R) -> Self {
        Self::with_max_len(input, Config::MAX_CHAIN_LEN)
    }

    pub fn with_max_len(input: R, max_len: usize) -> Self {
        Self { input, max_len }
    }

    /// `Ok(None)` once the input is exhausted before any word starts.
    pub fn read_chain(&mut self) -> io::Result<Option<String>> {
        if !self.skip_whitespace()? {
            return Ok(None);
        }

        let mut word = Vec::new();
        while word.len() < self.max_len {
            let buf = self.input.fill_buf()?;
            if buf.is_empty() {
                break;
            }
            let available = buf.len();
            let room = self.max_len - word.len();
            let take = buf
                .iter()
                .take(room)
                .take_while(|b| !b.is_ascii_whitespace())
                .count();
            word.extend_from_slice(&buf[..take]);
            self.input.consume(take);

            if take < room && take < available {
                break;
            }
        }

        Ok(Some(String::from_utf8_lossy(&word).into_owned()))
    }

    fn skip_whitespace(&mut self) -> io::Result<bool> {
        loop {
            let buf = self.input.fill_buf()?;
            if buf.is_empty() {
                return Ok(false);
            }
            let skip = buf.iter().take_while(|b| b.is_ascii_whitespace()).count();
            let exhausted = skip == buf.len();
            self.input.consume(skip);
            if !exhausted {
                return Ok(true);
            }
        }
    }
}
