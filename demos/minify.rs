//! Build a token stream programmatically and print the minified output.

use rbminify::{Keyword, TokenKind, TokenStream, minify_tokens};

fn main() {
    // def greet(name)
    //   message = <<~TEXT
    //     Hello, #{name}!
    //   TEXT
    //   puts message
    // end
    let tokens = TokenStream::new()
        .keyword(Keyword::Def)
        .ident("greet")
        .token(TokenKind::ParenLeft, "(")
        .ident("name")
        .token(TokenKind::ParenRight, ")")
        .newline()
        .ident("message")
        .token(TokenKind::Equal, "=")
        .heredoc_begin("<<~TEXT")
        .heredoc_line("  Hello, #{name}!\n")
        .heredoc_end("TEXT\n")
        .newline()
        .ident("puts")
        .ident("message")
        .newline()
        .keyword(Keyword::End)
        .newline()
        .finish();

    print!("{}", minify_tokens(&tokens));
}
