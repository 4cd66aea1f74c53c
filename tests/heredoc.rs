//! Heredoc reassembly scenarios: quoting modes, escaping, and
//! indentation stripping.

use rbminify::{TokenKind, TokenStream, minify_tokens};

#[test]
fn plain_heredoc_becomes_double_quoted() {
    let tokens = TokenStream::new()
        .heredoc_begin("<<HEREDOC")
        .heredoc_line("  text\n")
        .heredoc_end("HEREDOC\n")
        .newline()
        .finish();
    assert_eq!(minify_tokens(&tokens), "\"  text\n\"\n");
}

#[test]
fn single_quoted_heredoc_becomes_double_quoted() {
    let tokens = TokenStream::new()
        .heredoc_begin("<<'HEREDOC'")
        .heredoc_line("  text\n")
        .heredoc_end("HEREDOC\n")
        .newline()
        .finish();
    assert_eq!(minify_tokens(&tokens), "\"  text\n\"\n");
}

#[test]
fn backtick_heredoc_becomes_backtick_quoted() {
    let tokens = TokenStream::new()
        .heredoc_begin("<<`HEREDOC`")
        .heredoc_line("  command\n")
        .heredoc_end("HEREDOC\n")
        .newline()
        .finish();
    assert_eq!(minify_tokens(&tokens), "`  command\n`\n");
}

#[test]
fn dash_heredoc_keeps_indentation() {
    let tokens = TokenStream::new()
        .heredoc_begin("<<-HEREDOC")
        .heredoc_line("  text\n")
        .heredoc_end("  HEREDOC\n")
        .newline()
        .finish();
    assert_eq!(minify_tokens(&tokens), "\"  text\n\"\n");
}

#[test]
fn interpolation_passes_through_in_double_mode() {
    let tokens = TokenStream::new()
        .heredoc_begin("<<HEREDOC")
        .heredoc_line("  string #{interpolation} # comment\n")
        .heredoc_line("  text # comment\n")
        .heredoc_end("HEREDOC\n")
        .newline()
        .finish();
    assert_eq!(
        minify_tokens(&tokens),
        "\"  string #{interpolation} # comment\n  text # comment\n\"\n"
    );
}

#[test]
fn interpolation_escaped_in_single_mode() {
    let tokens = TokenStream::new()
        .heredoc_begin("<<'HEREDOC'")
        .heredoc_line("  string #{interpolation} # comment\n")
        .heredoc_line("  text # comment\n")
        .heredoc_end("HEREDOC\n")
        .newline()
        .finish();
    assert_eq!(
        minify_tokens(&tokens),
        "\"  string \\#{interpolation} # comment\n  text # comment\n\"\n"
    );
}

#[test]
fn squiggly_heredoc_with_interpolation_dedents() {
    let tokens = TokenStream::new()
        .heredoc_begin("<<~HEREDOC")
        .heredoc_line("  string #{interpolation} # comment\n")
        .heredoc_line("  text # comment\n")
        .heredoc_end("HEREDOC\n")
        .newline()
        .finish();
    assert_eq!(
        minify_tokens(&tokens),
        "\"string #{interpolation} # comment\ntext # comment\n\"\n"
    );
}

#[test]
fn single_quotes_in_body_survive() {
    let tokens = TokenStream::new()
        .heredoc_begin("<<-'HEREDOC'")
        .heredoc_line("  'foo'\n")
        .heredoc_end("HEREDOC\n")
        .newline()
        .finish();
    assert_eq!(minify_tokens(&tokens), "\"  'foo'\n\"\n");
}

#[test]
fn escaped_quotes_in_body_pass_through() {
    let tokens = TokenStream::new()
        .heredoc_begin("<<~'HEREDOC'")
        .heredoc_line("'  \\'foo\\'\n")
        .heredoc_line("'\n")
        .heredoc_end("HEREDOC\n")
        .newline()
        .finish();
    assert_eq!(minify_tokens(&tokens), "\"'  \\'foo\\'\n'\n\"\n");
}

#[test]
fn double_quotes_in_body_are_escaped() {
    let tokens = TokenStream::new()
        .heredoc_begin("<<-HEREDOC")
        .heredoc_line("  \"foo\"\n")
        .heredoc_end("HEREDOC\n")
        .newline()
        .finish();
    assert_eq!(minify_tokens(&tokens), "\"  \\\"foo\\\"\n\"\n");
}

#[test]
fn squiggly_dedents_single_quoted_body() {
    let tokens = TokenStream::new()
        .heredoc_begin("<<~'HEREDOC'")
        .heredoc_line("  'foo'\n")
        .heredoc_end("HEREDOC\n")
        .newline()
        .finish();
    assert_eq!(minify_tokens(&tokens), "\"'foo'\n\"\n");
}

#[test]
fn squiggly_single_line() {
    let tokens = TokenStream::new()
        .heredoc_begin("<<~HEREDOC")
        .heredoc_line("  foo\n")
        .heredoc_end("HEREDOC\n")
        .newline()
        .finish();
    assert_eq!(minify_tokens(&tokens), "\"foo\n\"\n");
}

#[test]
fn squiggly_strips_common_indentation_only() {
    // Leading-space runs of 4, 2, 6: exactly 2 stripped everywhere.
    let tokens = TokenStream::new()
        .heredoc_begin("<<~HEREDOC")
        .heredoc_line("    foo\n")
        .heredoc_line("  bar\n")
        .heredoc_line("      baz\n")
        .heredoc_end("HEREDOC\n")
        .newline()
        .finish();
    assert_eq!(minify_tokens(&tokens), "\"  foo\nbar\n    baz\n\"\n");
}

#[test]
fn squiggly_with_unindented_line_strips_nothing() {
    let tokens = TokenStream::new()
        .heredoc_begin("<<~HEREDOC")
        .heredoc_line("foo\n")
        .heredoc_line("   bar\n")
        .heredoc_end("HEREDOC\n")
        .newline()
        .finish();
    assert_eq!(minify_tokens(&tokens), "\"foo\n   bar\n\"\n");
}

#[test]
fn deeper_first_line_dedents_to_second() {
    let tokens = TokenStream::new()
        .heredoc_begin("<<~HEREDOC")
        .heredoc_line("    foo\n")
        .heredoc_line("  bar\n")
        .heredoc_end("HEREDOC\n")
        .newline()
        .finish();
    assert_eq!(minify_tokens(&tokens), "\"  foo\nbar\n\"\n");
}

#[test]
fn empty_body_yields_empty_literal() {
    let tokens = TokenStream::new()
        .heredoc_begin("<<~HEREDOC")
        .heredoc_end("HEREDOC\n")
        .newline()
        .finish();
    assert_eq!(minify_tokens(&tokens), "\"\"\n");
}

#[test]
fn heredoc_in_assignment_context() {
    let tokens = TokenStream::new()
        .ident("x")
        .token(TokenKind::Equal, "=")
        .heredoc_begin("<<~HEREDOC")
        .heredoc_line("  y\n")
        .heredoc_end("HEREDOC\n")
        .newline()
        .finish();
    assert_eq!(minify_tokens(&tokens), "x=\"y\n\"\n");
}

#[test]
fn statements_continue_after_heredoc() {
    let tokens = TokenStream::new()
        .ident("x")
        .token(TokenKind::Equal, "=")
        .heredoc_begin("<<~HEREDOC")
        .heredoc_line("  y\n")
        .heredoc_end("HEREDOC\n")
        .newline()
        .ident("puts")
        .ident("x")
        .newline()
        .finish();
    assert_eq!(minify_tokens(&tokens), "x=\"y\n\";puts x\n");
}
