pub mod host;
pub mod links;
pub mod notes;
pub mod panel;
pub mod parsing;
pub mod section;


// Re-export key types for easier usage
pub use host::{Host, HostError, HostEvent, HostEventKind, ViewDescriptor};
pub use links::{LinkRef, NO_LINKS_MESSAGE, RenderedLinks, render_document, render_links};
pub use notes::{MarkdownFile, NotesDir, NotesError, resolve_wikilink};
pub use panel::{LinksPanelPlugin, LinksPanelView, PanelOptions, VIEW, VIEW_TYPE};
pub use section::{LINKS_KEYWORD, extract_links_section, extract_section};
