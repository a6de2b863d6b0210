//! Human-readable views over a completed scan.
//!
//! Two independent renderings: a token listing grouped by source line,
//! and an annotated view that prints each source line followed by one
//! caret row per token on it.

use std::fmt;
use std::io;

use crate::token::Token;

/// How the token listing prints each token.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ListingStyle {
    /// Bare kind names, plus the lexeme for literals and identifiers.
    #[default]
    Compact,
    /// Every token as `token{line:column:kind:lexeme}`.
    Verbose,
}

/// Token listing grouped by line. Renders through `Display`.
#[derive(Debug, Clone, Copy)]
pub struct TokenListing<'a, 'src> {
    tokens: &'a [Token<'src>],
    style: ListingStyle,
}

impl<'a, 'src> TokenListing<'a, 'src> {
    #[must_use]
    pub const fn new(tokens: &'a [Token<'src>], style: ListingStyle) -> Self {
        Self { tokens, style }
    }
}

impl fmt::Display for TokenListing<'_, '_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Tokens:")?;
        let mut last_line = None;

        for token in self.tokens {
            if last_line != Some(token.line) {
                if last_line.is_some() {
                    writeln!(f)?;
                }
                last_line = Some(token.line);
                write!(f, "line {}: ", token.line)?;
            }
            match self.style {
                ListingStyle::Compact if token.kind.has_payload() => {
                    write!(f, "{}:{} ", token.kind, token.lexeme)?;
                }
                ListingStyle::Compact => write!(f, "{} ", token.kind)?,
                ListingStyle::Verbose => write!(f, "{token} ")?,
            }
        }

        if last_line.is_some() {
            writeln!(f)?;
        }
        Ok(())
    }
}

/// A source line together with the tokens that start on it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AnnotatedLine<'src> {
    /// 1-based line number.
    pub number: usize,
    /// Line text without its newline.
    pub text: &'src str,
    /// Tokens whose `line` equals `number`, in source order.
    pub tokens: Vec<Token<'src>>,
}

impl fmt::Display for AnnotatedLine<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "line {}: {}", self.number, self.text)?;

        // Rightmost token first, so the leftmost marker row ends up
        // closest to the next line.
        for (idx, target) in self.tokens.iter().enumerate().rev() {
            let mut markers = vec![' '; target.column + 1];
            for earlier in &self.tokens[..idx] {
                if let Some(slot) = markers.get_mut(earlier.column) {
                    *slot = '|';
                }
            }
            markers[target.column] = '^';
            let markers: String = markers.into_iter().collect();
            writeln!(f, "        {markers} {}", target.kind)?;
        }
        Ok(())
    }
}

/// Split `source` on newlines and attach each token to its line.
///
/// Every line is kept, including an empty one after a trailing newline,
/// so the end-of-input token always has a line to land on.
#[must_use]
pub fn annotated_lines<'src>(
    tokens: &[Token<'src>],
    source: &'src str,
) -> Vec<AnnotatedLine<'src>> {
    let mut lines: Vec<_> = source
        .split('\n')
        .enumerate()
        .map(|(idx, text)| AnnotatedLine {
            number: idx + 1,
            text,
            tokens: Vec::new(),
        })
        .collect();

    for token in tokens {
        if let Some(line) = token
            .line
            .checked_sub(1)
            .and_then(|idx| lines.get_mut(idx))
        {
            line.tokens.push(*token);
        }
    }

    lines
}

/// Render the token listing into a string.
#[must_use]
pub fn format_tokens(tokens: &[Token<'_>], style: ListingStyle) -> String {
    TokenListing::new(tokens, style).to_string()
}

/// Render every source line followed by its caret rows.
#[must_use]
pub fn annotate(tokens: &[Token<'_>], source: &str) -> String {
    annotated_lines(tokens, source)
        .iter()
        .map(ToString::to_string)
        .collect()
}

/// Write the token listing to `out`.
pub fn write_tokens<W: io::Write>(
    out: &mut W,
    tokens: &[Token<'_>],
    style: ListingStyle,
) -> io::Result<()> {
    write!(out, "{}", TokenListing::new(tokens, style))
}

/// Write the annotated view to `out`.
pub fn write_annotated<W: io::Write>(
    out: &mut W,
    tokens: &[Token<'_>],
    source: &str,
) -> io::Result<()> {
    for line in annotated_lines(tokens, source) {
        write!(out, "{line}")?;
    }
    Ok(())
}

/// Serialize the tokens as a pretty-printed JSON array.
pub fn to_json(tokens: &[Token<'_>]) -> serde_json::Result<String> {
    serde_json::to_string_pretty(tokens)
}
