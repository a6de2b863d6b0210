#![allow(dead_code)]

use scriptlex::{Token, TokenKind, scan};

pub fn kinds(source: &str) -> Vec<TokenKind> {
    scan(source)
        .expect("scan failed")
        .iter()
        .map(|t| t.kind)
        .collect()
}

/// Byte offset of a `(line, column)` position in `source`.
pub fn offset_of(source: &str, line: usize, column: usize) -> usize {
    let preceding: usize = source
        .split('\n')
        .take(line - 1)
        .map(|l| l.len() + 1)
        .sum();
    preceding + column
}

/// The slice of `source` a token claims to cover, found from its position.
pub fn source_at<'src>(source: &'src str, token: &Token<'_>) -> &'src str {
    let start = offset_of(source, token.line, token.column);
    &source[start..start + token.lexeme.len()]
}
