//! UniFFI bindings for links-panel hosts
//!
//! Exposes the pure extraction and rendering functions so a host written in
//! Kotlin, Swift or Python can drive its own links panel. Hosts keep their
//! own view lifecycle and call these on every refresh.

use links_panel_engine::{LinkRef, RenderedLinks};

uniffi::setup_scaffolding!();

// ============ DTOs ============

/// One entry of the links panel.
#[derive(Debug, PartialEq, uniffi::Record)]
pub struct LinkEntryDto {
    /// Navigation key passed back to the host when the entry is clicked
    pub target: String,
    /// Visible text
    pub label: String,
}

impl LinkEntryDto {
    fn from_engine(link: &LinkRef) -> Self {
        Self {
            target: link.target.clone(),
            label: link.label().to_string(),
        }
    }
}

/// Panel content: the entries in source order, or the empty-state message.
#[derive(Debug, PartialEq, uniffi::Record)]
pub struct RenderedLinksDto {
    pub entries: Vec<LinkEntryDto>,
    /// "No links found." when `entries` is empty, otherwise `None`
    pub empty_message: Option<String>,
}

impl RenderedLinksDto {
    fn from_engine(rendered: &RenderedLinks) -> Self {
        Self {
            entries: rendered
                .links()
                .iter()
                .map(LinkEntryDto::from_engine)
                .collect(),
            empty_message: rendered
                .is_empty()
                .then(|| links_panel_engine::NO_LINKS_MESSAGE.to_string()),
        }
    }
}

// ============ Standalone Functions ============

/// Body of the first heading mentioning "Links", trimmed.
#[uniffi::export]
pub fn extract_links_section(content: String) -> Option<String> {
    links_panel_engine::extract_links_section(&content).map(str::to_string)
}

/// Body of the first heading containing `keyword`, trimmed.
#[uniffi::export]
pub fn extract_section(content: String, keyword: String) -> Option<String> {
    links_panel_engine::extract_section(&content, &keyword).map(str::to_string)
}

/// Wikilinks of an already extracted section.
#[uniffi::export]
pub fn render_links(section: String) -> RenderedLinksDto {
    RenderedLinksDto::from_engine(&links_panel_engine::render_links(&section))
}

/// Section extraction and rendering in one call, for a full note.
#[uniffi::export]
pub fn render_document(content: String, keyword: String) -> RenderedLinksDto {
    RenderedLinksDto::from_engine(&links_panel_engine::render_document(&content, &keyword))
}

/// HTML list markup for a section, for hosts that display web content.
#[uniffi::export]
pub fn render_links_html(section: String) -> String {
    links_panel_engine::render_links(&section).to_html()
}

/// Resolve a wiki-link target to one of the given note paths.
///
/// Case-insensitive, with or without `.md`, ignoring `#heading` anchors.
#[uniffi::export]
pub fn resolve_wikilink(target: String, file_paths: Vec<String>) -> Option<String> {
    links_panel_engine::resolve_wikilink(&target, &file_paths).cloned()
}
