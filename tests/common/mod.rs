#![allow(dead_code)]

use rbminify::{Lexer, SyntaxFault, Token};

/// Lexer stub that replays a fixed token sequence regardless of input.
pub struct StubLexer(pub Vec<Token>);

impl Lexer for StubLexer {
    fn lex(&self, _source: &str) -> Result<Vec<Token>, SyntaxFault> {
        Ok(self.0.clone())
    }
}

/// Lexer stub that always reports a syntax fault.
pub struct FailingLexer;

impl Lexer for FailingLexer {
    fn lex(&self, _source: &str) -> Result<Vec<Token>, SyntaxFault> {
        Err(SyntaxFault::new("unterminated string", 1))
    }
}
