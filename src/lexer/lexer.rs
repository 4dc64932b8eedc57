use std::rc::Rc;

use lazy_static::lazy_static;
use regex::Regex;

use crate::{Position, Span, MK_SPAN, MK_TOKEN};

use super::{
    source::{CharSource, StringSource},
    tokens::{Token, TokenKind, RESERVED_LOOKUP},
};

lazy_static! {
    // Longest leading numeral of a digits-and-dots buffer
    static ref NUMERAL_PREFIX: Regex = Regex::new(r"^([0-9]+(\.[0-9]+)?|\.[0-9]+)").unwrap();
}

/// An on-demand tokenizer.
///
/// The lexer holds exactly one character of lookahead between calls to
/// [`Lexer::next_token`]: the most recently read character that is not yet
/// part of any token. `None` means the source is exhausted.
pub struct Lexer {
    source: Box<dyn CharSource>,
    last_char: Option<char>,
    /// Number of characters pulled from the source so far, saturating
    pub(super) consumed: u32,
    file: Rc<String>,
}

impl Lexer {
    pub fn new(source: impl CharSource + 'static, file: Option<String>) -> Lexer {
        let file_name = if let Some(file) = file {
            Rc::new(file)
        } else {
            Rc::new(String::from("shell"))
        };

        Lexer {
            source: Box::new(source),
            last_char: Some(' '),
            consumed: 0,
            file: file_name,
        }
    }

    pub fn from_text(source: &str, file: Option<String>) -> Lexer {
        Lexer::new(StringSource::new(source), file)
    }

    pub fn file(&self) -> Rc<String> {
        Rc::clone(&self.file)
    }

    /// Reads characters until one complete token has been identified.
    pub fn next_token(&mut self) -> Token {
        loop {
            while self.last_char.is_some_and(is_space) {
                self.advance_char();
            }

            let start = self.offset();

            match self.last_char {
                None => {
                    return MK_TOKEN!(TokenKind::EOF, String::new(), MK_SPAN!(start, start, self.file));
                }
                Some(c) if c.is_ascii_alphabetic() => return self.lex_identifier(c, start),
                Some(c) if c.is_ascii_digit() || c == '.' => return self.lex_number(c, start),
                Some('#') => {
                    // An exhausted comment yields EOF on the next pass
                    while let Some(c) = self.advance_char() {
                        if c == '\n' || c == '\r' {
                            break;
                        }
                    }
                }
                Some(c) => {
                    self.advance_char();
                    return MK_TOKEN!(TokenKind::Char(c), c.to_string(), MK_SPAN!(start, self.offset(), self.file));
                }
            }
        }
    }

    fn lex_identifier(&mut self, first: char, start: u32) -> Token {
        let mut text = String::from(first);
        while let Some(c) = self.advance_char().filter(char::is_ascii_alphanumeric) {
            text.push(c);
        }

        let kind = match RESERVED_LOOKUP.get(text.as_str()) {
            Some(kind) => kind.clone(),
            None => TokenKind::Identifier(text.clone()),
        };

        MK_TOKEN!(kind, text, MK_SPAN!(start, self.offset(), self.file))
    }

    fn lex_number(&mut self, first: char, start: u32) -> Token {
        let mut text = String::from(first);
        while let Some(c) = self.advance_char().filter(|c| c.is_ascii_digit() || *c == '.') {
            text.push(c);
        }

        MK_TOKEN!(TokenKind::Number(parse_numeral(&text)), text, MK_SPAN!(start, self.offset(), self.file))
    }

    fn advance_char(&mut self) -> Option<char> {
        self.last_char = self.source.next_char();
        if self.last_char.is_some() {
            self.consumed = self.consumed.saturating_add(1);
        }
        self.last_char
    }

    /// Offset of the lookahead character, or of the end of input.
    fn offset(&self) -> u32 {
        match self.last_char {
            Some(_) => self.consumed.saturating_sub(1),
            None => self.consumed,
        }
    }
}

fn is_space(c: char) -> bool {
    matches!(c, ' ' | '\t' | '\n' | '\r' | '\x0b' | '\x0c')
}

/// Converts a buffer of digits and decimal points the way `strtod` would:
/// the longest valid leading numeral wins and the rest is ignored. A buffer
/// with no valid prefix, like `.` or `..`, is 0.
pub fn parse_numeral(text: &str) -> f64 {
    let Some(prefix) = NUMERAL_PREFIX.find(text) else {
        return 0.0;
    };

    let prefix = prefix.as_str();
    let result = if prefix.starts_with('.') {
        format!("0{}", prefix).parse()
    } else {
        prefix.parse()
    };

    result.unwrap_or(0.0)
}

/// Lexes a whole string, returning every token up to and including EOF.
pub fn tokenize(source: String, file: Option<String>) -> Vec<Token> {
    let mut lex = Lexer::from_text(&source, file);
    let mut tokens = vec![];

    loop {
        let token = lex.next_token();
        let done = token.is_eof();
        tokens.push(token);

        if done {
            return tokens;
        }
    }
}
