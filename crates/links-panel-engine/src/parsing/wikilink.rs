//! # WikiLink scanning
//!
//! Finds `[[target]]` and `[[target|label]]` occurrences in a block of text.
//!
//! Matching is deliberately lenient and mirrors a non-greedy
//! `\[\[(.*?)\]\]` pattern:
//! - the leftmost `[[` opens a link and the first following `]]` closes it
//! - the inner content never crosses a line break
//! - matches never overlap and are yielded left to right
//!
//! Malformed input is not rejected. `[[a [[b]]` yields one link whose
//! content is `a [[b`, and a stray `[[` with no close on its line is skipped.

use super::span::Span;

pub struct WikiLink;

impl WikiLink {
    pub const OPEN: &'static str = "[[";
    pub const CLOSE: &'static str = "]]";
    pub const ALIAS: char = '|';
}

/// One `[[...]]` occurrence, as byte spans into the scanned text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WikiLinkMatch {
    /// Full span including `[[` and `]]`.
    pub full: Span,
    /// Span of everything between the brackets.
    pub inner: Span,
    /// Span of the target (before the first `|`, or the whole inner span).
    pub target: Span,
    /// Span after the first `|`, if there is one.
    pub alias: Option<Span>,
}

/// Iterator over the wikilinks in a string. See [`scan_wikilinks`].
pub struct WikiLinks<'a> {
    s: &'a str,
    pos: usize,
}

/// Returns every wikilink in `s` in source order.
pub fn scan_wikilinks(s: &str) -> WikiLinks<'_> {
    WikiLinks { s, pos: 0 }
}

impl Iterator for WikiLinks<'_> {
    type Item = WikiLinkMatch;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            let open = self.pos + self.s.get(self.pos..)?.find(WikiLink::OPEN)?;
            let inner_start = open + WikiLink::OPEN.len();
            let line_end = self.s[inner_start..]
                .find('\n')
                .map_or(self.s.len(), |n| inner_start + n);

            let Some(close) = self.s[inner_start..line_end].find(WikiLink::CLOSE) else {
                // No close on this line, and any later `[[` on the same line
                // would see the same (shorter) search window.
                self.pos = line_end;
                continue;
            };

            let inner = Span::new(inner_start, inner_start + close);
            let end = inner.end + WikiLink::CLOSE.len();
            self.pos = end;
            return Some(split_alias(self.s, Span::new(open, end), inner));
        }
    }
}

fn split_alias(s: &str, full: Span, inner: Span) -> WikiLinkMatch {
    match inner.slice(s).find(WikiLink::ALIAS) {
        Some(pipe) => {
            let pipe = inner.start + pipe;
            WikiLinkMatch {
                full,
                inner,
                target: Span::new(inner.start, pipe),
                alias: Some(Span::new(pipe + 1, inner.end)),
            }
        }
        None => WikiLinkMatch {
            full,
            inner,
            target: inner,
            alias: None,
        },
    }
}
