use regex::Regex;
use std::sync::OnceLock;

/// An ATX heading line (`# Title` through `###### Title`).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AtxHeading<'a> {
    /// Number of leading `#` characters (1-6).
    pub level: u8,
    /// Visible heading text, without markers or a closing `#` sequence.
    pub text: &'a str,
}

impl<'a> AtxHeading<'a> {
    pub const MAX_LEVEL: usize = 6;

    /// Parses `line` as an ATX heading.
    ///
    /// Accepts up to three spaces of indentation. The markers must be followed
    /// by whitespace or the end of the line, so `#tag` is not a heading.
    pub fn parse(line: &'a str) -> Option<Self> {
        static HEADING_REGEX: OnceLock<Regex> = OnceLock::new();
        let regex = HEADING_REGEX.get_or_init(|| {
            Regex::new(r"^ {0,3}(#{1,6})(?:[ \t]+(.*?))?(?:[ \t]+#+)?[ \t]*$")
                .expect("Invalid heading regex")
        });

        let line = line.trim_end_matches(['\r', '\n']);
        let caps = regex.captures(line)?;
        let level = caps.get(1)?.as_str().len();
        debug_assert!(level <= Self::MAX_LEVEL);
        let text = caps.get(2).map_or("", |m| m.as_str()).trim();

        Some(Self {
            level: level as u8,
            text,
        })
    }

    /// Case-insensitive substring match against the visible text.
    pub fn mentions(&self, keyword: &str) -> bool {
        self.text.to_lowercase().contains(&keyword.to_lowercase())
    }
}
