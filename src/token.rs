use std::fmt;

use serde::Serialize;

/// Token kinds produced by the scanner.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum TokenKind {
    /// `=`
    Equal,
    /// `;`
    Semicolon,
    /// `.`
    Dot,
    /// `,`
    Comma,
    /// `(`
    LParen,
    /// `)`
    RParen,
    /// Double-quoted string, quotes included in the lexeme.
    StringLiteral,
    /// Digits with an optional fractional part.
    NumberLiteral,
    /// Alphabetic start, then alphanumerics.
    Identifier,
    /// Reserved word `const`.
    KwConst,
    /// Reserved word `var`.
    KwVar,
    /// End of input. Always the last token, with an empty lexeme.
    Eof,
}

impl TokenKind {
    /// Every kind, in declaration order.
    pub const ALL: [Self; 12] = [
        Self::Equal,
        Self::Semicolon,
        Self::Dot,
        Self::Comma,
        Self::LParen,
        Self::RParen,
        Self::StringLiteral,
        Self::NumberLiteral,
        Self::Identifier,
        Self::KwConst,
        Self::KwVar,
        Self::Eof,
    ];

    /// The `snake_case` name used in listings and serialized output.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Equal => "equal",
            Self::Semicolon => "semicolon",
            Self::Dot => "dot",
            Self::Comma => "comma",
            Self::LParen => "l_paren",
            Self::RParen => "r_paren",
            Self::StringLiteral => "string_literal",
            Self::NumberLiteral => "number_literal",
            Self::Identifier => "identifier",
            Self::KwConst => "kw_const",
            Self::KwVar => "kw_var",
            Self::Eof => "eof",
        }
    }

    /// Reserved-word lookup. Exact and case-sensitive.
    #[must_use]
    pub fn keyword(text: &str) -> Option<Self> {
        match text {
            "var" => Some(Self::KwVar),
            "const" => Some(Self::KwConst),
            _ => None,
        }
    }

    /// Kind of a single-character token, if `byte` is one.
    #[must_use]
    pub const fn punctuation(byte: u8) -> Option<Self> {
        match byte {
            b'=' => Some(Self::Equal),
            b';' => Some(Self::Semicolon),
            b'.' => Some(Self::Dot),
            b',' => Some(Self::Comma),
            b'(' => Some(Self::LParen),
            b')' => Some(Self::RParen),
            _ => None,
        }
    }

    /// Whether the compact listing prints the lexeme next to the kind.
    #[must_use]
    pub const fn has_payload(self) -> bool {
        matches!(
            self,
            Self::StringLiteral | Self::Identifier | Self::NumberLiteral
        )
    }
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A classified span of source text.
///
/// The lexeme borrows from the scanned source, so tokens live no longer
/// than the text they were produced from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Token<'src> {
    pub kind: TokenKind,
    pub lexeme: &'src str,
    /// 1-based line of the first character.
    pub line: usize,
    /// 0-based offset of the first character within its line.
    pub column: usize,
}

impl fmt::Display for Token<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "token{{{}:{}:{}:{}}}",
            self.line, self.column, self.kind, self.lexeme
        )
    }
}
