//! The links side panel: view state plus the plugin that wires it to a host.

use crate::host::{Host, HostEvent, HostEventKind, ViewDescriptor};
use crate::links::{RenderedLinks, render_document};
use crate::section::LINKS_KEYWORD;

pub const VIEW_TYPE: &str = "links-panel";

pub const VIEW: ViewDescriptor = ViewDescriptor {
    view_type: VIEW_TYPE,
    display_text: "Links Panel",
    icon: "link",
};

pub const RIBBON_TITLE: &str = "Open Links Panel";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PanelOptions {
    /// Heading text that marks the links section.
    pub heading_keyword: String,
    /// Reveal the panel once the host layout is ready.
    pub open_on_startup: bool,
}

impl Default for PanelOptions {
    fn default() -> Self {
        Self {
            heading_keyword: LINKS_KEYWORD.to_string(),
            open_on_startup: true,
        }
    }
}

/// Display state of an open links panel.
///
/// `content` is `None` until the view is opened; refreshes before that are
/// dropped.
#[derive(Debug)]
pub struct LinksPanelView {
    heading_keyword: String,
    content: Option<RenderedLinks>,
}

impl LinksPanelView {
    pub fn new(heading_keyword: impl Into<String>) -> Self {
        Self {
            heading_keyword: heading_keyword.into(),
            content: None,
        }
    }

    pub fn on_open<H: Host + ?Sized>(&mut self, host: &H) {
        self.content = Some(RenderedLinks::Empty);
        self.update(host);
    }

    pub fn on_close(&mut self) {
        self.content = None;
    }

    /// Recomputes the panel from the active note, replacing the previous
    /// content. Returns `false` without touching anything when there is no
    /// active note or the view has no content region yet.
    pub fn update<H: Host + ?Sized>(&mut self, host: &H) -> bool {
        let Some(content) = self.content.as_mut() else {
            return false;
        };
        let Some(text) = host.active_document_text() else {
            return false;
        };

        *content = render_document(&text, &self.heading_keyword);
        log::debug!("Links panel refreshed: {} link(s)", content.links().len());
        true
    }

    pub fn content(&self) -> Option<&RenderedLinks> {
        self.content.as_ref()
    }

    pub fn is_open(&self) -> bool {
        self.content.is_some()
    }
}

/// Plugin entry point: registers the view with the host and reacts to
/// host events.
#[derive(Debug)]
pub struct LinksPanelPlugin {
    options: PanelOptions,
    view: Option<LinksPanelView>,
}

impl LinksPanelPlugin {
    pub const SUBSCRIPTIONS: [HostEventKind; 3] = [
        HostEventKind::LayoutReady,
        HostEventKind::ActiveDocumentChanged,
        HostEventKind::DocumentEdited,
    ];

    pub fn load<H: Host + ?Sized>(host: &mut H, options: PanelOptions) -> Self {
        host.add_ribbon_icon(VIEW.icon, RIBBON_TITLE);
        host.register_view(VIEW);
        for kind in Self::SUBSCRIPTIONS {
            host.subscribe(kind);
        }

        Self {
            options,
            view: None,
        }
    }

    pub fn handle_event<H: Host + ?Sized>(&mut self, host: &mut H, event: &HostEvent) {
        match event {
            HostEvent::LayoutReady => {
                if self.options.open_on_startup {
                    self.activate_view(host);
                }
            }
            HostEvent::RibbonClicked => self.activate_view(host),
            HostEvent::ActiveDocumentChanged | HostEvent::DocumentEdited => {
                self.update_view(host);
            }
            HostEvent::ViewOpened => self.open_view(host),
            HostEvent::ViewClosed => {
                if let Some(view) = self.view.as_mut() {
                    view.on_close();
                }
                self.view = None;
            }
            HostEvent::LinkActivated { target } => {
                if let Err(e) = host.open_document(target) {
                    log::warn!("Failed to open link target '{target}': {e}");
                }
            }
        }
    }

    /// Reuses the existing panel leaf or creates one, then reveals it.
    pub fn activate_view<H: Host + ?Sized>(&mut self, host: &mut H) {
        if !host.has_view(VIEW_TYPE) {
            if let Err(e) = host.create_side_view(VIEW_TYPE) {
                log::error!("Failed to create a new leaf for the links panel: {e}");
                return;
            }
            self.open_view(host);
        } else if self.view.is_none() {
            self.open_view(host);
        }
        host.reveal_view(VIEW_TYPE);
    }

    pub fn update_view<H: Host + ?Sized>(&mut self, host: &H) {
        if let Some(view) = self.view.as_mut() {
            view.update(host);
        }
    }

    pub fn view(&self) -> Option<&LinksPanelView> {
        self.view.as_ref()
    }

    fn open_view<H: Host + ?Sized>(&mut self, host: &H) {
        let keyword = &self.options.heading_keyword;
        self.view
            .get_or_insert_with(|| LinksPanelView::new(keyword.clone()))
            .on_open(host);
    }
}
