//! Lexer for Micro C.
//!
//! A single forward cursor over the source bytes with line/column tracking.
//! Whitespace and comments are skipped; everything else becomes a [`Token`].
//! The produced sequence is always terminated by an EOF token.
mod token;

pub use self::token::*;

use std::{collections::HashMap, error::Error, fmt::Display};

use once_cell::sync::Lazy;

static KEYWORDS: Lazy<HashMap<&'static str, TokenKind>> = Lazy::new(|| {
    HashMap::from([
        ("int", TokenKind::Int),
        ("char", TokenKind::Char),
        ("void", TokenKind::Void),
        ("const", TokenKind::Const),
        ("if", TokenKind::If),
        ("else", TokenKind::Else),
        ("for", TokenKind::For),
        ("while", TokenKind::While),
        ("return", TokenKind::Return),
    ])
});

/// Error raised on an unrecognized character or an unterminated literal.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LexError {
    pub message: String,
    pub position: Position,
}

impl Display for LexError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let (line, col) = self.position;
        f.write_str(&format!("{} ({line}:{col})", self.message))
    }
}

impl Error for LexError {}

pub type LexResult<T> = Result<T, LexError>;

pub struct Lexer<'a> {
    input: &'a [u8],
    tokens: Vec<Token>,
    position: usize,
    line: usize,
    col: usize,
}

impl<'a> Lexer<'a> {
    pub fn new(input: &'a str) -> Self {
        Self {
            input: input.as_bytes(),
            tokens: vec![],
            position: 0,
            line: 1,
            col: 1,
        }
    }

    pub fn lex(mut self) -> LexResult<Vec<Token>> {
        loop {
            self.eat_whitespace_and_comments()?;

            let Some(&c) = self.input.get(self.position) else {
                self.tokens
                    .push(Token::new(TokenKind::Eof, "", (self.line, self.col)));
                return Ok(self.tokens);
            };

            match c {
                b'"' => self.lex_string()?,
                b'\'' => self.lex_char()?,
                c if c.is_ascii_digit() => self.lex_number(),
                c if c == b'_' || c.is_ascii_alphabetic() => self.lex_word(),
                _ => self.lex_operator()?,
            }
        }
    }

    fn error<T>(&self, message: impl ToString) -> LexResult<T> {
        Err(LexError {
            message: message.to_string(),
            position: (self.line, self.col),
        })
    }

    /// Consume one byte, keeping line and column counters in sync.
    fn bump(&mut self) -> Option<u8> {
        let c = self.input.get(self.position).copied()?;
        self.position += 1;
        if c == b'\n' {
            self.line += 1;
            self.col = 1;
        } else {
            self.col += 1;
        }
        Some(c)
    }

    fn peek(&self) -> Option<u8> {
        self.input.get(self.position).copied()
    }

    fn peek_next(&self) -> Option<u8> {
        self.input.get(self.position + 1).copied()
    }

    fn eat_whitespace_and_comments(&mut self) -> LexResult<()> {
        loop {
            match self.peek() {
                Some(c) if c.is_ascii_whitespace() => {
                    self.bump();
                }
                Some(b'/') if self.peek_next() == Some(b'/') => {
                    while let Some(c) = self.peek() {
                        if c == b'\n' {
                            break;
                        }
                        self.bump();
                    }
                }
                Some(b'/') if self.peek_next() == Some(b'*') => {
                    self.bump();
                    self.bump();
                    loop {
                        match self.peek() {
                            Some(b'*') if self.peek_next() == Some(b'/') => {
                                self.bump();
                                self.bump();
                                break;
                            }
                            Some(_) => {
                                self.bump();
                            }
                            None => return self.error("unterminated block comment"),
                        }
                    }
                }
                _ => return Ok(()),
            }
        }
    }

    /// Decode the character following a backslash. Unknown escapes are taken
    /// verbatim.
    fn escape(c: u8) -> u8 {
        match c {
            b'n' => b'\n',
            b't' => b'\t',
            b'r' => b'\r',
            b'0' => 0,
            other => other,
        }
    }

    fn lex_string(&mut self) -> LexResult<()> {
        let position = (self.line, self.col);
        self.bump();

        let mut value = Vec::new();
        loop {
            match self.bump() {
                Some(b'"') => break,
                Some(b'\\') => match self.bump() {
                    Some(c) => value.push(Self::escape(c)),
                    None => return self.error("unterminated string literal"),
                },
                Some(c) => value.push(c),
                None => return self.error("unterminated string literal"),
            }
        }

        self.tokens.push(Token::new(
            TokenKind::Str,
            String::from_utf8_lossy(&value),
            position,
        ));
        Ok(())
    }

    fn lex_char(&mut self) -> LexResult<()> {
        let position = (self.line, self.col);
        self.bump();

        let value = match self.bump() {
            Some(b'\\') => match self.bump() {
                Some(c) => Self::escape(c),
                None => return self.error("unterminated character literal"),
            },
            Some(b'\'') => return self.error("empty character literal"),
            Some(c) => c,
            None => return self.error("unterminated character literal"),
        };

        if self.bump() != Some(b'\'') {
            return self.error("unterminated character literal");
        }

        self.tokens
            .push(Token::new(TokenKind::Number, value, position));
        Ok(())
    }

    fn lex_number(&mut self) {
        let position = (self.line, self.col);
        let start = self.position;
        while matches!(self.peek(), Some(c) if c.is_ascii_digit()) {
            self.bump();
        }
        let value = std::str::from_utf8(&self.input[start..self.position]).unwrap_or_default();
        self.tokens
            .push(Token::new(TokenKind::Number, value, position));
    }

    fn lex_word(&mut self) {
        let position = (self.line, self.col);
        let start = self.position;
        while matches!(self.peek(), Some(c) if c == b'_' || c.is_ascii_alphanumeric()) {
            self.bump();
        }
        let value = std::str::from_utf8(&self.input[start..self.position]).unwrap_or_default();

        // keywords win over identifiers, on exact match only
        let kind = KEYWORDS
            .get(value)
            .copied()
            .unwrap_or(TokenKind::Ident);
        self.tokens.push(Token::new(kind, value, position));
    }

    fn lex_operator(&mut self) -> LexResult<()> {
        use TokenKind::*;

        let position = (self.line, self.col);
        let c = self.bump().unwrap_or_default();

        // maximal munch: try the two-character operators first
        let two = match (c, self.peek()) {
            (b'=', Some(b'=')) => Some(Equal),
            (b'!', Some(b'=')) => Some(NotEqual),
            (b'<', Some(b'=')) => Some(LessEqual),
            (b'>', Some(b'=')) => Some(GreaterEqual),
            (b'&', Some(b'&')) => Some(AndAnd),
            (b'|', Some(b'|')) => Some(OrOr),
            _ => None,
        };
        if let Some(kind) = two {
            let second = self.bump().unwrap_or_default();
            let value = format!("{}{}", c as char, second as char);
            self.tokens.push(Token::new(kind, value, position));
            return Ok(());
        }

        let kind = match c {
            b'(' => LParen,
            b')' => RParen,
            b'{' => LBrace,
            b'}' => RBrace,
            b'[' => LBracket,
            b']' => RBracket,
            b';' => Semicolon,
            b',' => Comma,
            b'=' => Assign,
            b'+' => Plus,
            b'-' => Minus,
            b'*' => Star,
            b'/' => Slash,
            b'%' => Percent,
            b'<' => Less,
            b'>' => Greater,
            b'!' => Bang,
            b'&' => Ampersand,
            _ => {
                return Err(LexError {
                    message: format!("unrecognized character '{}'", c as char),
                    position,
                })
            }
        };
        self.tokens
            .push(Token::new(kind, (c as char).to_string(), position));
        Ok(())
    }
}
