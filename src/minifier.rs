//! The driver: walks the token sequence with a two-token lookahead
//! window, delegates to the classifier, separator engine, and heredoc
//! reassembler, and assembles the output buffer.

use crate::Error;
use crate::classifier::{Emit, classify};
use crate::heredoc::HeredocState;
use crate::lexer::Lexer;
use crate::separator::padding_required;
use crate::token::{Token, TokenKind};

/// Minify a token sequence.
///
/// Infallible: every token kind has a handling branch and unrecognized
/// punctuation falls through to a verbatim copy. The trailing
/// end-of-stream token is consumed as lookahead and never emitted.
#[must_use]
pub fn minify_tokens(tokens: &[Token]) -> String {
    let mut assembler = Assembler::new();
    for index in 0..tokens.len().saturating_sub(1) {
        let token = &tokens[index];
        let next = &tokens[index + 1];
        let prev = index.checked_sub(1).map(|p| &tokens[p]);
        assembler.step(prev, token, next);
        if padding_required(token, next) {
            assembler.out.push(' ');
        }
    }
    assembler.out
}

/// Per-invocation assembly state: the output buffer plus the heredoc
/// accumulator. Nothing outlives one [`minify_tokens`] call.
struct Assembler {
    out: String,
    heredoc: Option<HeredocState>,
}

impl Assembler {
    const fn new() -> Self {
        Self {
            out: String::new(),
            heredoc: None,
        }
    }

    fn step(&mut self, prev: Option<&Token>, token: &Token, next: &Token) {
        match token.kind {
            TokenKind::HeredocBegin => {
                let state = HeredocState::from_opener(&token.text);
                self.out.push(state.delimiter());
                self.heredoc = Some(state);
            }
            TokenKind::StringContent if self.heredoc.is_some() => {
                if let Some(state) = self.heredoc.as_mut() {
                    state.push_line(&token.text);
                }
            }
            TokenKind::HeredocEnd => {
                if let Some(state) = self.heredoc.take() {
                    let delimiter = state.delimiter();
                    self.out.push_str(&state.into_body());
                    self.out.push(delimiter);
                }
            }
            _ => match classify(prev, token, next) {
                Emit::Copy => self.out.push_str(&token.text),
                Emit::Skip => {}
                Emit::Separator(separator) => self.out.push_str(separator),
                Emit::Spaced { before, after } => {
                    if before {
                        self.out.push(' ');
                    }
                    self.out.push_str(&token.text);
                    if after {
                        self.out.push(' ');
                    }
                }
            },
        }
    }
}

/// Ties an injected [`Lexer`] to the transducer.
///
/// One instance may minify any number of independent sources; no state
/// is shared between invocations.
#[derive(Debug, Clone)]
pub struct Minifier<L> {
    lexer: L,
}

impl<L: Lexer> Minifier<L> {
    pub const fn new(lexer: L) -> Self {
        Self { lexer }
    }

    /// Minify `source`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidSyntax`] when the lexer rejects the
    /// source; no partial output is produced.
    pub fn minify(&self, source: &str) -> Result<String, Error> {
        self.run(source, None)
    }

    /// Minify `source`, labelling any syntax failure with `name`
    /// (typically a file path) for diagnostics.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidSyntax`] when the lexer rejects the
    /// source; no partial output is produced.
    pub fn minify_named(&self, name: &str, source: &str) -> Result<String, Error> {
        self.run(source, Some(name))
    }

    fn run(&self, source: &str, name: Option<&str>) -> Result<String, Error> {
        match self.lexer.lex(source) {
            Ok(tokens) => Ok(minify_tokens(&tokens)),
            Err(fault) => Err(Error::InvalidSyntax {
                source_name: name.map(str::to_string),
                fault,
            }),
        }
    }
}
