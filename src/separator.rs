//! Pairwise spacing: decides whether a space must separate two adjacent
//! tokens after the classifier's branch has run.

use crate::token::{Token, TokenKind};

/// First match wins:
///
/// 1. identifier followed by identifier/constant: space (a bare call and
///    its bare argument would fuse into one name);
/// 2. symbol opener, or an opening parenthesis next: no space (tightest
///    binding);
/// 3. either side's keyword demands a space;
/// 4. otherwise operators and punctuation pack tight.
pub(crate) fn padding_required(token: &Token, next: &Token) -> bool {
    if token.kind == TokenKind::Identifier
        && matches!(next.kind, TokenKind::Identifier | TokenKind::Constant)
    {
        return true;
    }
    if token.kind == TokenKind::SymbolBegin || next.kind == TokenKind::ParenLeft {
        return false;
    }
    token.kind.requires_trailing_space() || next.kind.requires_leading_space()
}
