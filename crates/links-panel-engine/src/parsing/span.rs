/// A byte range `[start, end)` into the scanned text.
///
/// Matches store spans rather than copied text so callers can slice the
/// original document for exact source reproduction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct Span {
    /// Inclusive start byte offset.
    pub start: usize,
    /// Exclusive end byte offset.
    pub end: usize,
}

impl Span {
    pub fn new(start: usize, end: usize) -> Self {
        Self { start, end }
    }

    /// Returns the length in bytes. Uses saturating subtraction for safety.
    #[must_use]
    pub fn len(self) -> usize {
        self.end.saturating_sub(self.start)
    }

    #[must_use]
    pub fn is_empty(self) -> bool {
        self.len() == 0
    }

    /// Returns the text this span covers in `s`.
    ///
    /// Spans produced by this crate always sit on char boundaries of the text
    /// they were scanned from; an out-of-range span yields an empty string.
    pub fn slice(self, s: &str) -> &str {
        s.get(self.start..self.end).unwrap_or_default()
    }
}
