//! Locating a heading-delimited section of a note.

use crate::parsing::{AtxHeading, Span, lines_with_spans};

/// Heading keyword the links panel looks for by default.
pub const LINKS_KEYWORD: &str = "Links";

/// Returns the trimmed body of the first heading mentioning "Links".
///
/// See [`extract_section`] for the matching rules.
pub fn extract_links_section(content: &str) -> Option<&str> {
    extract_section(content, LINKS_KEYWORD)
}

/// Returns the trimmed body of the first heading whose text contains
/// `keyword` (case-insensitive), or `None` when no heading matches.
///
/// The body runs from the line after the heading up to the next heading of
/// any level, or the end of the document. A matching heading with nothing
/// under it yields `Some("")`.
pub fn extract_section<'a>(content: &'a str, keyword: &str) -> Option<&'a str> {
    find_section(content, keyword).map(|body| body.slice(content).trim())
}

/// Byte span of the untrimmed section body.
pub fn find_section(content: &str, keyword: &str) -> Option<Span> {
    let mut body_start = None;

    for line in lines_with_spans(content) {
        let Some(heading) = AtxHeading::parse(line.content()) else {
            continue;
        };
        match body_start {
            Some(start) => return Some(Span::new(start, line.span.start)),
            None if heading.mentions(keyword) => body_start = Some(line.span.end),
            None => {}
        }
    }

    body_start.map(|start| Span::new(start, content.len()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn extracts_body_up_to_next_heading() {
        let doc = "## Links\n[[Note A]]\n[[Note B|Beta]]\n## Other";
        assert_eq!(
            extract_links_section(doc),
            Some("[[Note A]]\n[[Note B|Beta]]")
        );
    }

    #[test]
    fn runs_to_end_of_document_without_a_following_heading() {
        let doc = "# Title\nintro\n\n### See also links\n\n- [[x]]\n- [[y]]\n\n";
        assert_eq!(extract_links_section(doc), Some("- [[x]]\n- [[y]]"));
    }

    #[test]
    fn any_heading_level_ends_the_section() {
        let doc = "## Links\n[[a]]\n###### Deep\n[[b]]";
        assert_eq!(extract_links_section(doc), Some("[[a]]"));

        let doc = "### Links\n[[a]]\n# Top\n[[b]]";
        assert_eq!(extract_links_section(doc), Some("[[a]]"));
    }

    #[test]
    fn only_the_first_matching_heading_is_used() {
        let doc = "## Links\nfirst\n## More Links\nsecond";
        assert_eq!(extract_links_section(doc), Some("first"));
    }

    #[test]
    fn no_matching_heading_is_absent() {
        assert_eq!(extract_links_section(""), None);
        assert_eq!(extract_links_section("just [[text]]\nno headings"), None);
        assert_eq!(extract_links_section("## Notes\n[[a]]"), None);
        assert_eq!(extract_links_section("Links\n=====\n[[a]]"), None);
    }

    #[test]
    fn heading_without_body_is_empty() {
        assert_eq!(extract_links_section("## Links\n## Next"), Some(""));
        assert_eq!(extract_links_section("## Links"), Some(""));
        assert_eq!(extract_links_section("## Links\n   \n\n# Next"), Some(""));
    }

    #[test]
    fn keyword_match_is_case_insensitive() {
        let upper = "## LINKS SECTION\n[[a]]";
        let lower = "## links\n[[a]]";
        assert_eq!(extract_links_section(upper), extract_links_section(lower));
        assert_eq!(extract_links_section(upper), Some("[[a]]"));
    }

    #[test]
    fn crlf_line_endings() {
        let doc = "## Links\r\n[[a]]\r\n## Other\r\n";
        assert_eq!(extract_links_section(doc), Some("[[a]]"));
    }

    #[test]
    fn custom_keyword() {
        let doc = "## Links\n[[a]]\n## Backlinks\n[[b]]\n## Sources\n[[c]]";
        assert_eq!(extract_section(doc, "sources"), Some("[[c]]"));
        assert_eq!(extract_section(doc, "back"), Some("[[b]]"));
    }

    #[test]
    fn section_span_excludes_next_heading_line() {
        let doc = "## Links\n[[a]]\n## Other\n";
        let span = find_section(doc, LINKS_KEYWORD).unwrap();
        assert_eq!(span.slice(doc), "[[a]]\n");
    }

    #[test]
    fn empty_keyword_matches_any_heading() {
        assert_eq!(
            extract_section("# A\n[[a]]\n## Links\n[[b]]", ""),
            Some("[[a]]")
        );
    }

    #[test]
    fn heading_lines_inside_code_fences_still_end_the_section() {
        let doc = "## Links\n[[a]]\n```\n# code\n```\n[[b]]";
        assert_eq!(extract_links_section(doc), Some("[[a]]\n```"));
    }

    #[test]
    fn setext_underline_does_not_end_the_section() {
        let doc = "## Links\n[[a]]\nOther\n-----\n[[b]]";
        assert_eq!(
            extract_links_section(doc),
            Some("[[a]]\nOther\n-----\n[[b]]")
        );
    }
}
