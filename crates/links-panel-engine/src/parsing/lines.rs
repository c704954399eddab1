use super::span::Span;

/// A single line of a document with its byte span.
#[derive(Debug, Clone, Copy)]
pub struct LineRef<'a> {
    /// Byte span of this line (includes the newline if present).
    pub span: Span,
    /// The raw line text, newline included.
    pub text: &'a str,
}

impl<'a> LineRef<'a> {
    /// Line text without the trailing `\n` / `\r\n`.
    pub fn content(&self) -> &'a str {
        self.text.trim_end_matches(['\r', '\n'])
    }
}

/// Returns an iterator over lines with their byte spans.
///
/// Newlines stay attached to their line so that consecutive spans tile the
/// whole input with no gaps.
pub fn lines_with_spans(s: &str) -> impl Iterator<Item = LineRef<'_>> + '_ {
    let mut offset = 0usize;
    s.split_inclusive('\n').map(move |text| {
        let start = offset;
        offset += text.len();
        LineRef {
            span: Span::new(start, offset),
            text,
        }
    })
}
