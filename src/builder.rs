//! Programmatic construction of token sequences.
//!
//! [`TokenStream`] produces sequences that obey the contract documented
//! in [`crate::lexer`]: line numbers grow as newline tokens are pushed,
//! heredoc bodies are one content token per line, and [`finish`]
//! terminates the stream with an end-of-stream token.
//!
//! [`finish`]: TokenStream::finish

use crate::token::{Keyword, Token, TokenKind};

/// Fluent, line-oriented builder for token sequences.
///
/// ```
/// use rbminify::{Keyword, TokenStream, minify_tokens};
///
/// let tokens = TokenStream::new()
///     .ident("foo")
///     .keyword(Keyword::Do)
///     .keyword(Keyword::End)
///     .newline()
///     .finish();
///
/// assert_eq!(minify_tokens(&tokens), "foo do end\n");
/// ```
#[derive(Debug)]
pub struct TokenStream {
    tokens: Vec<Token>,
    line: usize,
}

impl Default for TokenStream {
    fn default() -> Self {
        Self::new()
    }
}

impl TokenStream {
    #[must_use]
    pub const fn new() -> Self {
        Self {
            tokens: Vec::new(),
            line: 1,
        }
    }

    /// Push a token of any kind on the current line.
    #[must_use]
    pub fn token(mut self, kind: TokenKind, text: &str) -> Self {
        self.tokens.push(Token::new(kind, text, self.line));
        self
    }

    #[must_use]
    pub fn ident(self, name: &str) -> Self {
        self.token(TokenKind::Identifier, name)
    }

    #[must_use]
    pub fn constant(self, name: &str) -> Self {
        self.token(TokenKind::Constant, name)
    }

    #[must_use]
    pub fn method_name(self, name: &str) -> Self {
        self.token(TokenKind::MethodName, name)
    }

    /// `name:` in call position; `text` includes the trailing colon.
    #[must_use]
    pub fn label(self, text: &str) -> Self {
        self.token(TokenKind::Label, text)
    }

    #[must_use]
    pub fn integer(self, text: &str) -> Self {
        self.token(TokenKind::Integer, text)
    }

    #[must_use]
    pub fn float(self, text: &str) -> Self {
        self.token(TokenKind::Float, text)
    }

    #[must_use]
    pub fn keyword(self, keyword: Keyword) -> Self {
        let text = keyword_text(keyword);
        self.token(TokenKind::Keyword(keyword), text)
    }

    /// Any operator or punctuation without bespoke handling.
    #[must_use]
    pub fn op(self, text: &str) -> Self {
        self.token(TokenKind::Op, text)
    }

    #[must_use]
    pub fn symbol_begin(self) -> Self {
        self.token(TokenKind::SymbolBegin, ":")
    }

    #[must_use]
    pub fn comment(self, text: &str) -> Self {
        self.token(TokenKind::Comment, text)
    }

    /// A complete quoted string literal: opener, content, closer.
    #[must_use]
    pub fn string(self, quote: &str, content: &str) -> Self {
        self.token(TokenKind::StringBegin, quote)
            .token(TokenKind::StringContent, content)
            .token(TokenKind::StringEnd, quote)
    }

    /// Statement-terminating newline; advances to the next source line.
    #[must_use]
    pub fn newline(mut self) -> Self {
        self = self.token(TokenKind::Newline, "\n");
        self.line += 1;
        self
    }

    /// Newline with no statement to terminate; advances the line.
    #[must_use]
    pub fn ignored_newline(mut self) -> Self {
        self = self.token(TokenKind::IgnoredNewline, "\n");
        self.line += 1;
        self
    }

    /// Advance to the next source line without pushing a token, for line
    /// breaks the lexer swallows entirely (e.g. after a comment inside a
    /// bracketed construct).
    #[must_use]
    pub fn advance_line(mut self) -> Self {
        self.line += 1;
        self
    }

    /// Heredoc opener; the body follows via [`heredoc_line`] and
    /// [`heredoc_end`], and the opener line's own newline is pushed
    /// after the terminator, matching the lexer contract.
    ///
    /// [`heredoc_line`]: Self::heredoc_line
    /// [`heredoc_end`]: Self::heredoc_end
    #[must_use]
    pub fn heredoc_begin(self, opener: &str) -> Self {
        self.token(TokenKind::HeredocBegin, opener)
    }

    /// One body line, line terminator included.
    #[must_use]
    pub fn heredoc_line(mut self, text: &str) -> Self {
        self.line += 1;
        self.tokens
            .push(Token::new(TokenKind::StringContent, text, self.line));
        self
    }

    /// Terminator line (`marker` as written in the source).
    #[must_use]
    pub fn heredoc_end(mut self, marker: &str) -> Self {
        self.line += 1;
        self.tokens
            .push(Token::new(TokenKind::HeredocEnd, marker, self.line));
        self
    }

    /// Terminate the stream with an end-of-stream token.
    #[must_use]
    pub fn finish(self) -> Vec<Token> {
        let mut tokens = self.tokens;
        let line = self.line;
        tokens.push(Token::new(TokenKind::Eof, "", line));
        tokens
    }
}

const fn keyword_text(keyword: Keyword) -> &'static str {
    match keyword {
        Keyword::Alias => "alias",
        Keyword::And => "and",
        Keyword::Begin => "begin",
        Keyword::Break => "break",
        Keyword::Case => "case",
        Keyword::Class => "class",
        Keyword::Def => "def",
        Keyword::Do => "do",
        Keyword::Else => "else",
        Keyword::Elsif => "elsif",
        Keyword::End => "end",
        Keyword::Ensure => "ensure",
        Keyword::False => "false",
        Keyword::For => "for",
        Keyword::If | Keyword::IfModifier => "if",
        Keyword::In => "in",
        Keyword::Module => "module",
        Keyword::Next => "next",
        Keyword::Nil => "nil",
        Keyword::Not => "not",
        Keyword::Or => "or",
        Keyword::Redo => "redo",
        Keyword::Rescue | Keyword::RescueModifier => "rescue",
        Keyword::Retry => "retry",
        Keyword::Return => "return",
        Keyword::SelfValue => "self",
        Keyword::Super => "super",
        Keyword::Then => "then",
        Keyword::True => "true",
        Keyword::Undef => "undef",
        Keyword::Unless | Keyword::UnlessModifier => "unless",
        Keyword::Until | Keyword::UntilModifier => "until",
        Keyword::When => "when",
        Keyword::While | Keyword::WhileModifier => "while",
        Keyword::Yield => "yield",
    }
}
