//! Property-based tests with proptest.
//!
//! Generate scripts from well-formed fragments and check the invariants
//! every successful scan must hold.

mod common;

use common::source_at;
use proptest::prelude::*;
use scriptlex::{LexErrorKind, TokenKind, scan};

// -- Fragment strategies --

fn punctuation() -> impl Strategy<Value = String> {
    "[=;.,()]"
}

fn identifier() -> impl Strategy<Value = String> {
    "[a-zA-Z][a-zA-Z0-9]{0,8}"
}

fn number() -> impl Strategy<Value = String> {
    "[0-9]{1,6}(\\.[0-9]{0,4})?"
}

/// String literal, possibly spanning lines.
fn string_literal() -> impl Strategy<Value = String> {
    "\"[a-zA-Z0-9 .,;=(){}\n]{0,12}\""
}

fn whitespace() -> impl Strategy<Value = String> {
    "[ \t\r\n]{1,3}"
}

fn fragment() -> impl Strategy<Value = String> {
    prop_oneof![
        3 => punctuation(),
        3 => identifier(),
        2 => number(),
        1 => string_literal(),
        1 => Just("var".to_string()),
        1 => Just("const".to_string()),
        3 => whitespace(),
    ]
}

/// Well-formed script made of 0-40 fragments.
fn script() -> impl Strategy<Value = String> {
    prop::collection::vec(fragment(), 0..=40).prop_map(|parts| parts.concat())
}

// -- Property tests --

proptest! {
    /// Every successful scan ends with exactly one empty eof token.
    #[test]
    fn ends_with_single_eof(source in script()) {
        let tokens = scan(&source).map_err(|e| {
            TestCaseError::fail(std::format!("lex error: {e}\n--- input ---\n{source}"))
        })?;
        let last = tokens.last().expect("at least eof");
        prop_assert_eq!(last.kind, TokenKind::Eof);
        prop_assert_eq!(last.lexeme, "");
        prop_assert_eq!(
            tokens.iter().filter(|t| t.kind == TokenKind::Eof).count(),
            1
        );
    }

    /// Positions never move backwards.
    #[test]
    fn positions_non_decreasing(source in script()) {
        let tokens = scan(&source).unwrap();
        for pair in tokens.windows(2) {
            let (a, b) = (&pair[0], &pair[1]);
            prop_assert!(
                (a.line, a.column) <= (b.line, b.column),
                "{} then {}", a, b
            );
        }
    }

    /// Each lexeme is exactly the source text at its recorded position.
    #[test]
    fn lexemes_round_trip(source in script()) {
        let tokens = scan(&source).unwrap();
        for token in &tokens {
            prop_assert_eq!(source_at(&source, token), token.lexeme);
        }
    }

    /// Lexemes cover all non-whitespace text, in order.
    #[test]
    fn lexemes_cover_non_whitespace(source in script()) {
        let tokens = scan(&source).unwrap();
        let joined: String = tokens.iter().map(|t| t.lexeme).collect();
        let strip = |s: &str| -> String {
            s.chars().filter(|c| !c.is_ascii_whitespace()).collect()
        };
        prop_assert_eq!(strip(&joined), strip(&source));
    }

    /// Punctuation-only input gives one single-character token per byte.
    #[test]
    fn punctuation_one_token_per_char(source in "[=;.,()]{0,30}") {
        let tokens = scan(&source).unwrap();
        prop_assert_eq!(tokens.len(), source.len() + 1);
        for (idx, (token, ch)) in tokens.iter().zip(source.chars()).enumerate() {
            prop_assert_eq!(token.lexeme.len(), 1);
            prop_assert_eq!(token.lexeme.chars().next(), Some(ch));
            prop_assert_eq!(token.column, idx);
            let byte = u8::try_from(ch).ok();
            prop_assert_eq!(Some(token.kind), byte.and_then(TokenKind::punctuation));
        }
    }

    /// Identifiers and keywords are told apart by exact match only.
    #[test]
    fn identifiers_classified(word in "[a-zA-Z][a-zA-Z0-9]{0,10}") {
        let tokens = scan(&word).unwrap();
        prop_assert_eq!(tokens.len(), 2);
        let expected = match word.as_str() {
            "var" => TokenKind::KwVar,
            "const" => TokenKind::KwConst,
            _ => TokenKind::Identifier,
        };
        prop_assert_eq!(tokens[0].kind, expected);
    }

    /// An unhandled character is reported at its own position.
    #[test]
    fn unhandled_reported_at_position(
        prefix in "([a-z]{1,4}[ \n]){0,5}",
        bad in "[@#$%&*+_!?<>]",
    ) {
        let source = std::format!("{prefix}{bad}");
        let err = scan(&source).unwrap_err();
        let expected_line = prefix.matches('\n').count() + 1;
        let expected_column = prefix.rsplit('\n').next().map_or(0, str::len);
        prop_assert_eq!(
            err.kind,
            LexErrorKind::UnhandledSequence(bad.chars().next().unwrap())
        );
        prop_assert_eq!(err.line, expected_line);
        prop_assert_eq!(err.column, expected_column);
    }

    /// An opening quote without a partner fails the whole scan.
    #[test]
    fn unterminated_string_fails(prefix in script(), body in "[a-z \n]{0,10}") {
        let source = std::format!("{prefix} \"{body}");
        let err = scan(&source).unwrap_err();
        prop_assert_eq!(err.kind, LexErrorKind::UnterminatedString);
    }

    /// Arbitrary input either scans or errors, never panics.
    #[test]
    fn never_panics(source in any::<String>()) {
        let _ = scan(&source);
    }
}
