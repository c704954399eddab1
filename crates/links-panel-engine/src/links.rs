//! Turning a section's wikilinks into the panel's list of entries.

use crate::parsing::scan_wikilinks;
use crate::section::extract_section;

/// Text shown in place of a list when a note has no links to show.
pub const NO_LINKS_MESSAGE: &str = "No links found.";

/// A link reference parsed from `[[target]]` or `[[target|label]]`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LinkRef {
    /// Note identifier to navigate to.
    pub target: String,
    /// Display text after the first `|`. `None` means show the target.
    pub alias: Option<String>,
}

impl LinkRef {
    pub fn new(target: impl Into<String>, alias: Option<String>) -> Self {
        Self {
            target: target.into(),
            alias: alias.filter(|a| !a.is_empty()),
        }
    }

    /// Visible text for this entry.
    pub fn label(&self) -> &str {
        self.alias.as_deref().unwrap_or(&self.target)
    }
}

/// Result of rendering a section: the links in source order, or the
/// empty state shown as [`NO_LINKS_MESSAGE`].
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum RenderedLinks {
    #[default]
    Empty,
    List(Vec<LinkRef>),
}

impl RenderedLinks {
    pub fn from_links(links: Vec<LinkRef>) -> Self {
        if links.is_empty() {
            Self::Empty
        } else {
            Self::List(links)
        }
    }

    pub fn links(&self) -> &[LinkRef] {
        match self {
            Self::Empty => &[],
            Self::List(links) => links,
        }
    }

    pub fn is_empty(&self) -> bool {
        matches!(self, Self::Empty)
    }

    /// Serializes to an HTML unordered list, one `li.link-item` per entry.
    ///
    /// The target is carried in `data-href` for the host's click handler.
    /// The empty state serializes to the bare [`NO_LINKS_MESSAGE`].
    pub fn to_html(&self) -> String {
        let Self::List(links) = self else {
            return NO_LINKS_MESSAGE.to_string();
        };

        let mut html = String::from("<ul>");
        for link in links {
            html.push_str(r##"<li class="link-item"><a href="#" data-href=""##);
            html.push_str(&html_escape::encode_double_quoted_attribute(&link.target));
            html.push_str(r#"">"#);
            html.push_str(&html_escape::encode_text(link.label()));
            html.push_str("</a></li>");
        }
        html.push_str("</ul>");
        html
    }
}

/// Collects every wikilink in `section`, in source order, duplicates kept.
pub fn render_links(section: &str) -> RenderedLinks {
    let links = scan_wikilinks(section)
        .map(|m| {
            LinkRef::new(
                m.target.slice(section),
                m.alias.map(|alias| alias.slice(section).to_string()),
            )
        })
        .collect();
    RenderedLinks::from_links(links)
}

/// Extracts the section under the first heading containing `keyword` and
/// renders its links. A missing section renders as the empty state.
pub fn render_document(content: &str, keyword: &str) -> RenderedLinks {
    extract_section(content, keyword)
        .map(render_links)
        .unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::section::LINKS_KEYWORD;
    use insta::assert_snapshot;
    use pretty_assertions::assert_eq;

    fn pairs(rendered: &RenderedLinks) -> Vec<(&str, &str)> {
        rendered
            .links()
            .iter()
            .map(|l| (l.target.as_str(), l.label()))
            .collect()
    }

    #[test]
    fn target_doubles_as_label_without_pipe() {
        let rendered = render_links("[[Note A]]\n[[Note B|Beta]]");
        assert_eq!(
            pairs(&rendered),
            vec![("Note A", "Note A"), ("Note B", "Beta")]
        );
    }

    #[test]
    fn label_is_everything_after_first_pipe() {
        let rendered = render_links("[[a|b|c]]");
        assert_eq!(pairs(&rendered), vec![("a", "b|c")]);
    }

    #[test]
    fn empty_label_falls_back_to_target() {
        let rendered = render_links("[[folder/Note|]]");
        assert_eq!(pairs(&rendered), vec![("folder/Note", "folder/Note")]);
    }

    #[test]
    fn duplicates_are_preserved() {
        let rendered = render_links("- [[x]]\n- [[y]]\n- [[x|again]]");
        assert_eq!(
            pairs(&rendered),
            vec![("x", "x"), ("y", "y"), ("x", "again")]
        );
    }

    #[test]
    fn no_links_is_the_empty_state() {
        assert_eq!(render_links(""), RenderedLinks::Empty);
        assert_eq!(render_links("  \n\t "), RenderedLinks::Empty);
        assert_eq!(render_links("text only, no brackets"), RenderedLinks::Empty);
        assert_eq!(RenderedLinks::from_links(vec![]), RenderedLinks::Empty);
    }

    #[test]
    fn html_list() {
        let rendered = render_links("[[Note A]] [[Note B|Beta]]");
        assert_snapshot!(
            rendered.to_html(),
            @r##"<ul><li class="link-item"><a href="#" data-href="Note A">Note A</a></li><li class="link-item"><a href="#" data-href="Note B">Beta</a></li></ul>"##
        );
    }

    #[test]
    fn html_escapes_target_and_label() {
        let rendered = render_links(r#"[[a "b" <c>|x & <y>]]"#);
        assert_snapshot!(
            rendered.to_html(),
            @r##"<ul><li class="link-item"><a href="#" data-href="a &quot;b&quot; &lt;c&gt;">x &amp; &lt;y&gt;</a></li></ul>"##
        );
    }

    #[test]
    fn empty_html_is_the_message() {
        assert_eq!(RenderedLinks::Empty.to_html(), "No links found.");
    }

    #[test]
    fn missing_section_renders_empty() {
        assert!(render_document("# Title\n[[a]]", LINKS_KEYWORD).is_empty());
        assert_eq!(
            pairs(&render_document("# Links\n[[a]]\n# Next\n[[b]]", LINKS_KEYWORD)),
            vec![("a", "a")]
        );
    }
}
