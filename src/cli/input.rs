//! Whitespace separated tokens read lazily from a line based reader.

use std::collections::VecDeque;
use std::io::{self, BufRead};

use crate::tree::Key;

/// One token of user input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Token {
    /// A token that parsed as a key.
    Key(Key),
    /// Anything else, kept so it can be echoed back.
    Invalid(String),
}

/// Splits input into tokens the way a console scanner does: any run of
/// whitespace, including newlines, separates tokens.
pub struct Tokens<R> {
    reader: R,
    pending: VecDeque<String>,
}

impl<R: BufRead> Tokens<R> {
    /// Wraps `reader`. Nothing is read until the first token is asked for.
    pub fn new(reader: R) -> Self {
        Self {
            reader,
            pending: VecDeque::new(),
        }
    }

    /// The next token, or `None` once the input is exhausted.
    pub fn next_token(&mut self) -> io::Result<Option<Token>> {
        loop {
            if let Some(word) = self.pending.pop_front() {
                let token = match word.parse() {
                    Ok(key) => Token::Key(key),
                    Err(_) => Token::Invalid(word),
                };
                return Ok(Some(token));
            }

            // Bytes that are not UTF-8 become U+FFFD and end up in an invalid token.
            let mut line = Vec::new();
            if self.reader.read_until(b'\n', &mut line)? == 0 {
                return Ok(None);
            }
            self.pending.extend(
                String::from_utf8_lossy(&line)
                    .split_whitespace()
                    .map(str::to_owned),
            );
        }
    }
}
