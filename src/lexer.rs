//! The external lexer seam.
//!
//! Lexical analysis is deliberately not implemented in this crate: the
//! transducer consumes the token sequence of an already-existing lexer
//! behind the [`Lexer`] trait, so it can be exercised with synthetic
//! sequences (see [`TokenStream`](crate::TokenStream)) and adapted to any
//! production lexer by the caller.
//!
//! A conforming token sequence obeys the following contract:
//!
//! - tokens appear in parse order and the sequence ends with exactly one
//!   [`Eof`](crate::TokenKind::Eof) token;
//! - newlines with no statement to terminate (blank lines, comment-only
//!   lines, continuations inside grouping constructs, after keywords that
//!   cannot end a statement) arrive as
//!   [`IgnoredNewline`](crate::TokenKind::IgnoredNewline); statement
//!   terminators, including the final newline of the file, arrive as
//!   [`Newline`](crate::TokenKind::Newline) with text `"\n"`;
//! - heredoc bodies arrive as one
//!   [`StringContent`](crate::TokenKind::StringContent) token per source
//!   line (terminator included, interpolation text embedded verbatim),
//!   bracketed by `HeredocBegin`/`HeredocEnd`, with the opener line's
//!   meaningful newline delivered after `HeredocEnd`.

use crate::token::Token;

/// Failure reported by a lexer for source that does not tokenize.
///
/// The minifier treats the fault as fatal and opaque; the fields exist
/// only so diagnostics stay readable.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("{message} at line {line}")]
pub struct SyntaxFault {
    pub message: String,
    pub line: usize,
}

impl SyntaxFault {
    #[must_use]
    pub fn new(message: impl Into<String>, line: usize) -> Self {
        Self {
            message: message.into(),
            line,
        }
    }
}

/// External lexing capability: source text to an ordered token sequence.
pub trait Lexer {
    /// Tokenize `source`, or report that it is not lexically valid.
    ///
    /// # Errors
    ///
    /// Returns [`SyntaxFault`] when the source cannot be tokenized.
    fn lex(&self, source: &str) -> Result<Vec<Token>, SyntaxFault>;
}

impl<L: Lexer + ?Sized> Lexer for &L {
    fn lex(&self, source: &str) -> Result<Vec<Token>, SyntaxFault> {
        (**self).lex(source)
    }
}
