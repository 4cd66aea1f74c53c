//! Token-stream Ruby minifier.
//!
//! Rewrites source text into a byte-minimal but syntactically equivalent
//! form by transducing the token sequence of an external lexer: comments
//! and blank lines vanish, structural newlines become `;`, spacing is
//! reduced to what the grammar requires, and multi-line heredoc literals
//! collapse into single re-quoted string literals.
//!
//! The lexer itself is an injected capability (the [`Lexer`] trait); any
//! conforming token source works, and test code can drive the transducer
//! directly with [`TokenStream`].
//!
//! # Quick start
//!
//! ## Minify a token sequence
//!
//! ```
//! use rbminify::{Keyword, TokenStream, minify_tokens};
//!
//! // if cond
//! //   foo
//! // end
//! let tokens = TokenStream::new()
//!     .keyword(Keyword::If)
//!     .ident("cond")
//!     .newline()
//!     .ident("foo")
//!     .newline()
//!     .keyword(Keyword::End)
//!     .newline()
//!     .finish();
//!
//! assert_eq!(minify_tokens(&tokens), "if cond;foo;end\n");
//! ```
//!
//! ## Plug in a lexer
//!
//! ```
//! use rbminify::{Lexer, Minifier, SyntaxFault, Token, TokenKind};
//!
//! struct OneWord;
//!
//! impl Lexer for OneWord {
//!     fn lex(&self, source: &str) -> Result<Vec<Token>, SyntaxFault> {
//!         Ok(vec![
//!             Token::new(TokenKind::Identifier, source.trim(), 1),
//!             Token::new(TokenKind::Eof, "", 1),
//!         ])
//!     }
//! }
//!
//! let minifier = Minifier::new(OneWord);
//! assert_eq!(minifier.minify("  foo  ").unwrap(), "foo");
//! ```

// Allow noisy pedantic lints that don't add value for
// a library crate.
#![allow(
    clippy::missing_errors_doc,
    clippy::missing_panics_doc,
    clippy::module_name_repetitions
)]

pub mod builder;
mod classifier;
mod heredoc;
pub mod lexer;
pub mod minifier;
mod separator;
pub mod token;

pub use builder::TokenStream;
pub use lexer::{Lexer, SyntaxFault};
pub use minifier::{Minifier, minify_tokens};
pub use token::{Keyword, LineSpan, Token, TokenKind};

/// Errors surfaced at the minifier boundary.
///
/// There is exactly one failure mode: the lexer rejected the input. The
/// transducer itself cannot fail on a well-formed token sequence.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    /// The source text is not lexically valid; no output was produced.
    #[error("{}: invalid syntax: {fault}", .source_name.as_deref().unwrap_or("(source)"))]
    InvalidSyntax {
        /// Caller-supplied identifier (typically a file path), carried
        /// purely for diagnostics.
        source_name: Option<String>,
        /// The underlying lexer fault.
        fault: SyntaxFault,
    },
}

/// Lex and minify `source` in one step.
///
/// # Errors
///
/// Returns [`Error::InvalidSyntax`] when the lexer rejects the source.
pub fn minify_str<L: Lexer>(lexer: &L, source: &str) -> Result<String, Error> {
    Minifier::new(lexer).minify(source)
}
