//! Single-pass, line-oriented tokenizer for annotated oracle text.
//!
//! At each position the first matching rule wins, in this order:
//!
//! 1. header marker (`#`..`######` plus whitespace), only at the start of a line
//! 2. brace run `{...}` without nested braces
//! 3. bold run `**...**` without an embedded `*`
//! 4. italic run `*...*` without an embedded `*`
//! 5. plain run up to the next `{` or `*`
//!
//! A classified run is never re-scanned. Delimiters that do not close fall
//! through to rule 5, so every byte of the line ends up in exactly one token.

/// Byte range of a token within its line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TextSpan {
    pub line: usize,
    pub start: usize,
    pub end: usize,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TokenKind {
    /// Header with the number of `#` characters in its marker (1..=6).
    Header { hashes: u8 },
    Symbol,
    Bold,
    Italic,
    Plain,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawToken {
    pub kind: TokenKind,
    /// Header title, symbol text with braces, emphasis inner text, or the plain run.
    pub text: String,
    /// Source bytes covered by the token, delimiters included.
    pub span: TextSpan,
}

impl RawToken {
    fn new(kind: TokenKind, text: &str, line: usize, start: usize, end: usize) -> Self {
        Self {
            kind,
            text: text.to_string(),
            span: TextSpan { line, start, end },
        }
    }

    /// The exact source text of this token within `line`.
    pub fn source<'a>(&self, line: &'a str) -> &'a str {
        &line[self.span.start..self.span.end]
    }
}

const MAX_HEADER_HASHES: usize = 6;

pub fn tokenize_line(line: &str, line_index: usize) -> Vec<RawToken> {
    if let Some(header) = match_header(line, line_index) {
        return vec![header];
    }

    let mut tokens = Vec::new();
    let mut pos = 0usize;
    while pos < line.len() {
        let rest = &line[pos..];
        let (kind, inner, len) = match_symbol(rest)
            .or_else(|| match_delimited(rest, "**", TokenKind::Bold))
            .or_else(|| match_delimited(rest, "*", TokenKind::Italic))
            .unwrap_or_else(|| plain_run(rest));
        tokens.push(RawToken::new(kind, inner, line_index, pos, pos + len));
        pos += len;
    }

    tracing::trace!(line = line_index, tokens = tokens.len(), "tokenized line");
    tokens
}

fn match_header(line: &str, line_index: usize) -> Option<RawToken> {
    let hashes = line.bytes().take_while(|&b| b == b'#').count();
    if hashes == 0 || hashes > MAX_HEADER_HASHES {
        return None;
    }

    let after_marker = &line[hashes..];
    let title = after_marker.trim_start();
    if title.len() == after_marker.len() {
        // No whitespace after the marker.
        return None;
    }

    Some(RawToken::new(
        TokenKind::Header {
            hashes: hashes as u8,
        },
        title,
        line_index,
        0,
        line.len(),
    ))
}

pub(crate) fn match_symbol(rest: &str) -> Option<(TokenKind, &str, usize)> {
    let contents = rest.strip_prefix('{')?;
    let close = contents.find(['{', '}'])?;
    if close == 0 || !contents[close..].starts_with('}') {
        return None;
    }
    let len = close + 2;
    Some((TokenKind::Symbol, &rest[..len], len))
}

fn match_delimited<'a>(
    rest: &'a str,
    delimiter: &str,
    kind: TokenKind,
) -> Option<(TokenKind, &'a str, usize)> {
    let inner = rest.strip_prefix(delimiter)?;
    let close = inner.find('*')?;
    if close == 0 || !inner[close..].starts_with(delimiter) {
        return None;
    }
    let len = delimiter.len() * 2 + close;
    Some((kind, &inner[..close], len))
}

fn plain_run(rest: &str) -> (TokenKind, &str, usize) {
    // The first character is always consumed so an unmatched `{` or `*`
    // becomes part of the plain run.
    let first_len = rest.chars().next().map_or(0, char::len_utf8);
    let tail = &rest[first_len..];
    let len = first_len + tail.find(['{', '*']).unwrap_or(tail.len());
    (TokenKind::Plain, &rest[..len], len)
}
