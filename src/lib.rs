//! Lexical scanner and scan diagnostics for a small scripting language.
//!
//! The scanner turns source text into positioned tokens whose lexemes
//! borrow from the input. The diagnostics module renders a finished scan
//! as a token listing or as source lines annotated with caret markers.
//!
//! # Quick start
//!
//! ```
//! use scriptlex::{TokenKind, scan};
//!
//! let tokens = scan("const lang = \"tru\";").unwrap();
//! let kinds: Vec<_> = tokens.iter().map(|t| t.kind).collect();
//! assert_eq!(
//!     kinds,
//!     [
//!         TokenKind::KwConst,
//!         TokenKind::Identifier,
//!         TokenKind::Equal,
//!         TokenKind::StringLiteral,
//!         TokenKind::Semicolon,
//!         TokenKind::Eof,
//!     ]
//! );
//! assert_eq!(tokens[1].column, 6);
//! ```
//!
//! ## Render diagnostics
//!
//! ```
//! use scriptlex::{ListingStyle, format_tokens, scan};
//!
//! let tokens = scan("var x = 1;").unwrap();
//! let listing = format_tokens(&tokens, ListingStyle::Compact);
//! assert!(listing.contains("identifier:x"));
//! ```
//!
//! ## Lexical errors
//!
//! ```
//! use scriptlex::{LexErrorKind, scan};
//!
//! let err = scan("x = @").unwrap_err();
//! assert_eq!(err.kind, LexErrorKind::UnhandledSequence('@'));
//! assert!(err.render().ends_with("    ^\n"));
//! ```

#![allow(
    clippy::missing_errors_doc,
    clippy::missing_panics_doc,
    clippy::module_name_repetitions
)]

pub mod diagnostics;
pub mod scanner;
pub mod token;

pub use diagnostics::{
    AnnotatedLine, ListingStyle, TokenListing, annotate, annotated_lines, format_tokens, to_json,
    write_annotated, write_tokens,
};
pub use scanner::{LexError, LexErrorKind, scan};
pub use token::{Token, TokenKind};

/// The sample program scanned when no input file is given.
pub const SAMPLE: &str = r#"const lang = "tru";
runtime.print("Hello from {}", lang);
var num = 12345.6789;
"#;
