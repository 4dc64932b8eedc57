//! Character sources the lexer can pull from.

use std::io::{BufReader, Bytes, Read};

/// Yields one character per request, or `None` once the input is exhausted.
pub trait CharSource {
    fn next_char(&mut self) -> Option<char>;
}

/// An in-memory source over a string.
pub struct StringSource {
    chars: Vec<char>,
    pos: usize,
}

impl StringSource {
    pub fn new(source: &str) -> Self {
        StringSource {
            chars: source.chars().collect(),
            pos: 0,
        }
    }
}

impl CharSource for StringSource {
    fn next_char(&mut self) -> Option<char> {
        let c = self.chars.get(self.pos).copied();
        if c.is_some() {
            self.pos += 1;
        }
        c
    }
}

/// A byte-at-a-time source over any reader, such as stdin or a file.
///
/// Every byte becomes one character (`getchar` semantics), so multi-byte
/// UTF-8 sequences arrive as several single-character tokens. A read error
/// ends the input.
pub struct ReaderSource<R: Read> {
    bytes: Bytes<BufReader<R>>,
}

impl<R: Read> ReaderSource<R> {
    pub fn new(reader: R) -> Self {
        ReaderSource {
            bytes: BufReader::new(reader).bytes(),
        }
    }
}

impl<R: Read> CharSource for ReaderSource<R> {
    fn next_char(&mut self) -> Option<char> {
        match self.bytes.next()? {
            Ok(byte) => Some(byte as char),
            Err(err) => {
                tracing::warn!(error = %err, "read failed, treating as end of input");
                None
            }
        }
    }
}
