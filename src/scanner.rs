use std::fmt;

use tracing::{debug, trace};

use crate::token::{Token, TokenKind};

/// Classifies a lexical error.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LexErrorKind {
    /// Input ended inside a string literal.
    UnterminatedString,
    /// Character that cannot start any token.
    UnhandledSequence(char),
}

impl fmt::Display for LexErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::UnterminatedString => {
                write!(f, "Unterminated string reached end of file")
            }
            Self::UnhandledSequence(_) => write!(f, "Unhandled text sequence"),
        }
    }
}

/// Error produced during scanning.
///
/// `line` and `column` are the scan position where the error was
/// detected. `line_text` is the whole source line holding that position,
/// kept so the error can be rendered without the source at hand.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("Error at line {line} column {column}: {kind}")]
pub struct LexError {
    pub kind: LexErrorKind,
    pub line: usize,
    pub column: usize,
    pub line_text: String,
}

impl LexError {
    /// Render the error with the offending line and a caret under the
    /// failing column.
    #[must_use]
    pub fn render(&self) -> String {
        format!(
            "{self}\n{}\n{}^\n",
            self.line_text,
            " ".repeat(self.column)
        )
    }
}

/// Scan a complete source text into tokens.
///
/// The returned sequence always ends with a single [`TokenKind::Eof`].
/// Every lexeme borrows from `source`.
///
/// # Errors
///
/// Returns `LexError` on an unterminated string literal or on a character
/// that starts no token. No partial token sequence is returned.
#[tracing::instrument(level = "debug", skip_all, fields(len = source.len()))]
pub fn scan(source: &str) -> Result<Vec<Token<'_>>, LexError> {
    Scanner::new(source).run()
}

/// How a character at the cursor starts (or doesn't start) a token.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum CharClass {
    Punctuation(TokenKind),
    Whitespace,
    Quote,
    Alpha,
    Digit,
    Other,
}

impl CharClass {
    const fn of(byte: u8) -> Self {
        if let Some(kind) = TokenKind::punctuation(byte) {
            return Self::Punctuation(kind);
        }
        match byte {
            b' ' | b'\t' | b'\n' | b'\r' | 0x0b | 0x0c => Self::Whitespace,
            b'"' => Self::Quote,
            b if b.is_ascii_alphabetic() => Self::Alpha,
            b if b.is_ascii_digit() => Self::Digit,
            _ => Self::Other,
        }
    }
}

/// Position of a token's first character.
#[derive(Debug, Clone, Copy)]
struct Mark {
    offset: usize,
    line: usize,
    column: usize,
}

struct Scanner<'src> {
    source: &'src str,
    input: &'src [u8],
    pos: usize,
    line: usize,
    column: usize,
    line_start: usize,
    tokens: Vec<Token<'src>>,
}

impl<'src> Scanner<'src> {
    const fn new(source: &'src str) -> Self {
        Self {
            source,
            input: source.as_bytes(),
            pos: 0,
            line: 1,
            column: 0,
            line_start: 0,
            tokens: Vec::new(),
        }
    }

    fn run(mut self) -> Result<Vec<Token<'src>>, LexError> {
        while let Some(byte) = self.peek() {
            match CharClass::of(byte) {
                CharClass::Punctuation(kind) => {
                    let start = self.mark();
                    self.advance();
                    self.emit(kind, start);
                }
                CharClass::Whitespace => self.advance(),
                CharClass::Quote => self.scan_string()?,
                CharClass::Alpha => self.scan_identifier(),
                CharClass::Digit => self.scan_number(),
                CharClass::Other => {
                    let ch = self.source[self.pos..]
                        .chars()
                        .next()
                        .unwrap_or_else(|| char::from(byte));
                    return Err(self.failure(LexErrorKind::UnhandledSequence(ch)));
                }
            }
        }

        let end = self.mark();
        self.emit(TokenKind::Eof, end);
        debug!(
            tokens = self.tokens.len(),
            lines = self.line,
            "scan complete"
        );
        Ok(self.tokens)
    }

    fn peek(&self) -> Option<u8> {
        self.input.get(self.pos).copied()
    }

    const fn mark(&self) -> Mark {
        Mark {
            offset: self.pos,
            line: self.line,
            column: self.column,
        }
    }

    fn advance(&mut self) {
        if let Some(byte) = self.peek() {
            self.pos += 1;
            if byte == b'\n' {
                self.line += 1;
                self.column = 0;
                self.line_start = self.pos;
            } else {
                self.column += 1;
            }
        }
    }

    fn advance_while(&mut self, pred: impl Fn(u8) -> bool) {
        while self.peek().is_some_and(&pred) {
            self.advance();
        }
    }

    fn emit(&mut self, kind: TokenKind, start: Mark) {
        let token = Token {
            kind,
            lexeme: &self.source[start.offset..self.pos],
            line: start.line,
            column: start.column,
        };
        trace!(%token, "emit");
        self.tokens.push(token);
    }

    fn failure(&self, kind: LexErrorKind) -> LexError {
        let rest = &self.source[self.line_start..];
        let line_text = rest.find('\n').map_or(rest, |end| &rest[..end]);
        debug!(line = self.line, column = self.column, %kind, "lexical error");
        LexError {
            kind,
            line: self.line,
            column: self.column,
            line_text: line_text.to_string(),
        }
    }

    fn scan_string(&mut self) -> Result<(), LexError> {
        let start = self.mark();
        self.advance(); // opening quote
        self.advance_while(|b| b != b'"');

        if self.peek().is_none() {
            return Err(self.failure(LexErrorKind::UnterminatedString));
        }
        self.advance(); // closing quote
        self.emit(TokenKind::StringLiteral, start);
        Ok(())
    }

    fn scan_identifier(&mut self) {
        let start = self.mark();
        self.advance_while(|b| b.is_ascii_alphanumeric());

        let lexeme = &self.source[start.offset..self.pos];
        let kind = TokenKind::keyword(lexeme).unwrap_or(TokenKind::Identifier);
        self.emit(kind, start);
    }

    fn scan_number(&mut self) {
        let start = self.mark();
        self.advance_while(|b| b.is_ascii_digit());

        // A trailing `.` with no digits after it stays in the literal.
        if self.peek() == Some(b'.') {
            self.advance();
            self.advance_while(|b| b.is_ascii_digit());
        }
        self.emit(TokenKind::NumberLiteral, start);
    }
}
