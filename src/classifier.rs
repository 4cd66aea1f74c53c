//! Per-token dispatch: maps a token, in the context of its neighbours, to
//! the fragment it contributes to the output.
//!
//! Pure and total over [`TokenKind`]: kinds without a bespoke rule fall
//! through to a verbatim copy of the token text. Pairwise spacing that
//! does not depend on one-sided context lives in [`crate::separator`].

use crate::token::{Keyword, Token, TokenKind};

/// Handling decision for one token.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Emit {
    /// Copy the token text through unchanged.
    Copy,
    /// Contribute nothing to the output.
    Skip,
    /// Emit a synthesized separator instead of the token text.
    Separator(&'static str),
    /// Copy the token text with a required space on either side.
    Spaced { before: bool, after: bool },
}

const fn spaced(before: bool, after: bool) -> Emit {
    if before || after {
        Emit::Spaced { before, after }
    } else {
        Emit::Copy
    }
}

/// Characters that would fuse with a following `=` into a different
/// operator (`==`, `!=`, `<=`, `>=`, `*=`, and a predicate marker glued
/// to `=`).
const fn fuses_with_equal(ch: char) -> bool {
    matches!(ch, '=' | '!' | '<' | '>' | '*' | '?')
}

fn ends_with_fusing_char(token: &Token) -> bool {
    token.text.chars().next_back().is_some_and(fuses_with_equal)
}

/// Decide how `token` is emitted, given its neighbours.
pub(crate) fn classify(prev: Option<&Token>, token: &Token, next: &Token) -> Emit {
    match token.kind {
        TokenKind::Comment => {
            // A comment trailing code whose statement-ending newline was
            // swallowed: the line break must be resynthesized or the
            // surrounding statements fuse. Must stay a literal newline,
            // `;` is not valid inside bracketed constructs.
            let trails_code = prev.is_some_and(|p| p.span.end == token.span.start);
            if trails_code && token.span.start < next.span.start {
                Emit::Separator("\n")
            } else {
                Emit::Skip
            }
        }
        TokenKind::IgnoredNewline
        | TokenKind::EmbDocBegin
        | TokenKind::EmbDocLine
        | TokenKind::EmbDocEnd => Emit::Skip,
        TokenKind::Newline => {
            if next.kind == TokenKind::Eof {
                Emit::Copy
            } else if next.kind.closes_group() {
                Emit::Skip
            } else {
                Emit::Separator(";")
            }
        }
        TokenKind::Keyword(Keyword::End) => {
            // `begin 42 end`: the value and the keyword would otherwise
            // merge into one identifier/number-suffix token.
            let fuses = prev
                .is_some_and(|p| p.kind.is_bare_value() && p.span.start == token.span.start);
            spaced(fuses, false)
        }
        TokenKind::Keyword(Keyword::Def) => {
            let after_name = prev.is_some_and(|p| {
                matches!(
                    p.kind,
                    TokenKind::Identifier | TokenKind::Constant | TokenKind::MethodName
                )
            });
            spaced(after_name, false)
        }
        TokenKind::Identifier => {
            let bare_argument = matches!(
                next.kind,
                TokenKind::MethodName
                    | TokenKind::Integer
                    | TokenKind::Float
                    | TokenKind::IntegerRational
                    | TokenKind::FloatRational
            ) || matches!(next.kind, TokenKind::Keyword(k) if k.is_literal_value())
                || next.opens_percent_literal();
            spaced(false, bare_argument)
        }
        TokenKind::Question => {
            // After a predicate-style condition the markers may touch
            // (`cond??`); after anything else a leading space keeps the
            // condition from turning into a predicate name.
            let after_predicate = prev.is_some_and(|p| p.text.ends_with('?'));
            spaced(!after_predicate, true)
        }
        TokenKind::TernaryColon => spaced(false, true),
        TokenKind::ColonColon | TokenKind::BangTilde => {
            let after_name = prev.is_some_and(|p| {
                matches!(p.kind, TokenKind::Identifier | TokenKind::MethodName)
            });
            spaced(after_name, false)
        }
        TokenKind::Label => spaced(
            prev.is_some_and(|p| p.kind == TokenKind::Identifier),
            next.kind == TokenKind::SymbolBegin,
        ),
        TokenKind::Equal
        | TokenKind::EqualEqual
        | TokenKind::EqualEqualEqual
        | TokenKind::EqualGreater => spaced(prev.is_some_and(ends_with_fusing_char), false),
        _ => Emit::Copy,
    }
}
