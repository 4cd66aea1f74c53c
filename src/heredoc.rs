//! Heredoc reassembly: buffers the body of one multi-line string literal
//! and collapses it into a single re-quoted literal on termination.

/// Quoting mode selected by a heredoc opener.
///
/// `Single` and `Double` both re-quote with `"`; `Single` additionally
/// escapes interpolation openers so the non-interpolating semantics
/// survive inside an interpolating literal. `Backtick` re-quotes with
/// `` ` `` and keeps command-substitution semantics.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum QuoteStyle {
    Single,
    Double,
    Backtick,
}

impl QuoteStyle {
    fn from_opener(opener: &str) -> Self {
        if opener.ends_with('\'') {
            Self::Single
        } else if opener.ends_with('`') {
            Self::Backtick
        } else {
            Self::Double
        }
    }

    pub(crate) const fn delimiter(self) -> char {
        match self {
            Self::Single | Self::Double => '"',
            Self::Backtick => '`',
        }
    }

    const fn interpolates(self) -> bool {
        !matches!(self, Self::Single)
    }
}

/// Buffered state of the heredoc currently being reassembled.
///
/// Created from the opener token, fed one content line at a time, and
/// consumed when the terminator is reached. At most one is active.
#[derive(Debug)]
pub(crate) struct HeredocState {
    quote: QuoteStyle,
    dedent: bool,
    lines: Vec<String>,
}

impl HeredocState {
    pub(crate) fn from_opener(opener: &str) -> Self {
        Self {
            quote: QuoteStyle::from_opener(opener),
            dedent: opener.starts_with("<<~"),
            lines: Vec::new(),
        }
    }

    pub(crate) const fn delimiter(&self) -> char {
        self.quote.delimiter()
    }

    /// Buffer one body line, escaped for the emitted delimiter.
    pub(crate) fn push_line(&mut self, text: &str) {
        self.lines.push(escape_content(text, self.quote));
    }

    /// Strip common indentation if the opener asked for it and join the
    /// buffered lines into the literal body.
    pub(crate) fn into_body(self) -> String {
        let indent = if self.dedent {
            self.lines.iter().map(|l| leading_spaces(l)).min().unwrap_or(0)
        } else {
            0
        };
        let mut body = String::with_capacity(self.lines.iter().map(String::len).sum());
        for line in &self.lines {
            body.push_str(&line[indent..]);
        }
        body
    }
}

fn leading_spaces(line: &str) -> usize {
    line.bytes().take_while(|&b| b == b' ').count()
}

/// Escape unescaped occurrences of the emitted delimiter, and of `#{`
/// when the body must not interpolate. Backslash parity decides
/// "unescaped"; already-escaped sequences pass through untouched.
fn escape_content(text: &str, quote: QuoteStyle) -> String {
    let delimiter = quote.delimiter();
    let mut out = String::with_capacity(text.len());
    let mut escaped = false;
    let mut chars = text.chars().peekable();
    while let Some(ch) = chars.next() {
        match ch {
            '\\' => {
                out.push('\\');
                escaped = !escaped;
            }
            c if c == delimiter && !escaped => {
                out.push('\\');
                out.push(c);
            }
            '#' if !escaped && !quote.interpolates() && chars.peek() == Some(&'{') => {
                out.push('\\');
                out.push('#');
                escaped = false;
            }
            c => {
                out.push(c);
                escaped = false;
            }
        }
    }
    out
}
