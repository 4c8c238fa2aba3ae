//! FILENAME: parser/src/lexer.rs
//! PURPOSE: Scans a CalcString and produces a stream of Tokens with one
//! token of lookahead.
//! CONTEXT: This is the first stage of the parsing pipeline. The parser
//! calls `peek` to decide what to do and `next_token` to consume. A peeked
//! token is cached until it is consumed.
//!
//! SCANNING ORDER (first non-whitespace character decides):
//! - Symbols: ^ = ! > < + - / * . , : ? ( )
//!   `=` and `!` must be followed by `=`; `<` and `>` may be
//! - Numbers: a run of ASCII digits
//! - Strings: '...' with no escapes
//! - Names: a letter followed by letters and digits

use crate::error::{ParseError, ParseResult};
use crate::token::{Token, TokenKind};

const SYMBOLS: &str = "^=!><+-/*.,:?()";

pub struct Lexer<'a> {
    input: &'a str,
    position: usize,
    peeked: Option<Token>,
}

impl<'a> Lexer<'a> {
    pub fn new(input: &'a str) -> Self {
        Lexer {
            input,
            position: 0,
            peeked: None,
        }
    }

    /// Byte offset of the scan cursor.
    pub fn position(&self) -> usize {
        self.position
    }

    /// Returns the next token without consuming it. Repeated calls return
    /// the same token; at the end of the input this is EndOfInput forever.
    pub fn peek(&mut self) -> ParseResult<&Token> {
        let token = match self.peeked.take() {
            Some(token) => token,
            None => self.scan()?,
        };
        let token: &Token = self.peeked.insert(token);
        Ok(token)
    }

    /// Returns and consumes the next token.
    pub fn next_token(&mut self) -> ParseResult<Token> {
        match self.peeked.take() {
            Some(token) => Ok(token),
            None => self.scan(),
        }
    }

    fn current(&self) -> Option<char> {
        self.input[self.position..].chars().next()
    }

    fn char_after_current(&self) -> Option<char> {
        let mut chars = self.input[self.position..].chars();
        chars.next();
        chars.next()
    }

    fn advance(&mut self, ch: char) {
        self.position += ch.len_utf8();
    }

    fn scan(&mut self) -> ParseResult<Token> {
        self.skip_whitespace();

        let ch = match self.current() {
            Some(ch) => ch,
            None => return Ok(Token::end_of_input()),
        };

        match ch {
            ch if SYMBOLS.contains(ch) => self.read_symbol(ch),
            ch if ch.is_ascii_digit() => Ok(self.read_number()),
            '\'' => self.read_string(),
            ch if ch.is_alphabetic() => Ok(self.read_name()),
            ch => Err(ParseError::InvalidCharacter {
                ch,
                position: self.position,
            }),
        }
    }

    fn skip_whitespace(&mut self) {
        while let Some(ch) = self.current() {
            if !ch.is_whitespace() {
                break;
            }
            self.advance(ch);
        }
    }

    /// Handles the symbol set, including the two-character comparisons
    /// ==, !=, <= and >=.
    fn read_symbol(&mut self, ch: char) -> ParseResult<Token> {
        let followed_by_equals = self.char_after_current() == Some('=');

        match ch {
            '=' | '!' if !followed_by_equals => Err(ParseError::InvalidOperator {
                op: ch,
                position: self.position,
            }),
            '=' | '!' | '<' | '>' if followed_by_equals => {
                self.position += 2;
                Ok(Token::new(TokenKind::Symbol, format!("{}=", ch)))
            }
            _ => {
                self.advance(ch);
                Ok(Token::new(TokenKind::Symbol, ch.to_string()))
            }
        }
    }

    fn read_number(&mut self) -> Token {
        let start = self.position;
        while let Some(ch) = self.current() {
            if !ch.is_ascii_digit() {
                break;
            }
            self.advance(ch);
        }
        Token::new(TokenKind::Number, &self.input[start..self.position])
    }

    /// Reads a quoted string. The quotes are not part of the token text.
    fn read_string(&mut self) -> ParseResult<Token> {
        let open = self.position;
        let body_start = open + 1;

        match self.input[body_start..].find('\'') {
            Some(len) => {
                let text = &self.input[body_start..body_start + len];
                self.position = body_start + len + 1;
                Ok(Token::new(TokenKind::String, text))
            }
            None => Err(ParseError::UnterminatedString { position: open }),
        }
    }

    fn read_name(&mut self) -> Token {
        let start = self.position;
        while let Some(ch) = self.current() {
            if !(ch.is_alphabetic() || ch.is_ascii_digit()) {
                break;
            }
            self.advance(ch);
        }
        Token::new(TokenKind::Name, &self.input[start..self.position])
    }
}
