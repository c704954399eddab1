//! Capabilities the links panel needs from the application hosting it.
//!
//! The host owns windowing, note storage and navigation. A host binding (the
//! terminal UI, a mobile shell through FFI, a test double) implements [`Host`]
//! and forwards its events to the plugin as [`HostEvent`]s.

use thiserror::Error;

/// How a panel view type presents itself in the host's chrome.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ViewDescriptor {
    pub view_type: &'static str,
    pub display_text: &'static str,
    pub icon: &'static str,
}

/// Host event streams a plugin can subscribe to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum HostEventKind {
    /// The workspace finished restoring its layout.
    LayoutReady,
    /// A different note became the active one.
    ActiveDocumentChanged,
    /// The active note's text was edited.
    DocumentEdited,
}

/// Signals delivered by the host binding to the plugin.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HostEvent {
    LayoutReady,
    ActiveDocumentChanged,
    DocumentEdited,
    /// The plugin's ribbon icon was clicked.
    RibbonClicked,
    /// The host opened a leaf for the plugin's view type.
    ViewOpened,
    /// The host closed the plugin's view leaf.
    ViewClosed,
    /// A rendered link was clicked.
    LinkActivated { target: String },
}

impl HostEvent {
    /// The subscription this event belongs to. Events the host always
    /// delivers to the owning plugin (ribbon, view lifecycle, clicks) have none.
    pub fn kind(&self) -> Option<HostEventKind> {
        match self {
            Self::LayoutReady => Some(HostEventKind::LayoutReady),
            Self::ActiveDocumentChanged => Some(HostEventKind::ActiveDocumentChanged),
            Self::DocumentEdited => Some(HostEventKind::DocumentEdited),
            Self::RibbonClicked
            | Self::ViewOpened
            | Self::ViewClosed
            | Self::LinkActivated { .. } => None,
        }
    }
}

#[derive(Debug, Error)]
pub enum HostError {
    #[error("No side panel leaf available for view '{view_type}'")]
    NoLeaf { view_type: String },
    #[error("Document not found: {0}")]
    DocumentNotFound(String),
}

pub trait Host {
    fn register_view(&mut self, view: ViewDescriptor);

    fn add_ribbon_icon(&mut self, icon: &str, title: &str);

    fn subscribe(&mut self, kind: HostEventKind);

    /// Whether a leaf showing `view_type` already exists.
    fn has_view(&self, view_type: &str) -> bool;

    /// Creates a leaf for `view_type` in the side area.
    fn create_side_view(&mut self, view_type: &str) -> Result<(), HostError>;

    /// Brings the leaf for `view_type` into view and focus.
    fn reveal_view(&mut self, view_type: &str);

    /// Full text of the active note, or `None` when no note is active.
    fn active_document_text(&self) -> Option<String>;

    /// Navigates to the note identified by a link target.
    fn open_document(&mut self, target: &str) -> Result<(), HostError>;
}
