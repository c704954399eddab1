//! The terminal app's side of the host contract: a notes directory, one
//! active note and a right-hand panel slot.

use links_panel_engine::{
    Host, HostError, HostEvent, HostEventKind, MarkdownFile, NotesDir, NotesError, ViewDescriptor,
};
use std::collections::{HashSet, VecDeque};

pub struct TuiHost {
    notes: NotesDir,
    files: Vec<MarkdownFile>,
    active: Option<usize>,
    active_text: Option<String>,
    views: Vec<ViewDescriptor>,
    ribbon: Vec<(String, String)>,
    subscriptions: HashSet<HostEventKind>,
    side_view: Option<&'static str>,
    revealed: bool,
    pending: VecDeque<HostEvent>,
    status: Option<String>,
}

impl TuiHost {
    pub fn new(notes: NotesDir) -> Result<Self, NotesError> {
        let files = notes.scan()?;
        Ok(Self {
            notes,
            files,
            active: None,
            active_text: None,
            views: Vec::new(),
            ribbon: Vec::new(),
            subscriptions: HashSet::new(),
            side_view: None,
            revealed: false,
            pending: VecDeque::new(),
            status: None,
        })
    }

    pub fn files(&self) -> &[MarkdownFile] {
        &self.files
    }

    pub fn active_index(&self) -> Option<usize> {
        self.active
    }

    pub fn active_file(&self) -> Option<&MarkdownFile> {
        self.active.and_then(|i| self.files.get(i))
    }

    /// Makes the note at `index` active and queues a document change.
    pub fn activate(&mut self, index: usize) -> Result<(), NotesError> {
        let Some(file) = self.files.get(index) else {
            return Ok(());
        };
        let text = self.notes.read(file)?;
        self.active = Some(index);
        self.active_text = Some(text);
        self.status = None;
        self.emit(HostEvent::ActiveDocumentChanged);
        Ok(())
    }

    /// Re-reads the active note from disk, as if it had been edited.
    pub fn reload_active(&mut self) -> Result<(), NotesError> {
        let Some(file) = self.active_file() else {
            return Ok(());
        };
        let text = self.notes.read(file)?;
        self.active_text = Some(text);
        self.emit(HostEvent::DocumentEdited);
        Ok(())
    }

    pub fn close_side_view(&mut self) {
        if self.side_view.take().is_some() {
            self.revealed = false;
            self.emit(HostEvent::ViewClosed);
        }
    }

    pub fn is_panel_visible(&self) -> bool {
        self.side_view.is_some() && self.revealed
    }

    pub fn view(&self, view_type: &str) -> Option<&ViewDescriptor> {
        self.views.iter().find(|v| v.view_type == view_type)
    }

    pub fn ribbon(&self) -> &[(String, String)] {
        &self.ribbon
    }

    pub fn active_text(&self) -> Option<&str> {
        self.active_text.as_deref()
    }

    pub fn status(&self) -> Option<&str> {
        self.status.as_deref()
    }

    pub fn set_status(&mut self, status: impl Into<String>) {
        self.status = Some(status.into());
    }

    /// Next event for the plugin, skipping streams it never subscribed to.
    pub fn next_event(&mut self) -> Option<HostEvent> {
        while let Some(event) = self.pending.pop_front() {
            if event
                .kind()
                .is_none_or(|kind| self.subscriptions.contains(&kind))
            {
                return Some(event);
            }
        }
        None
    }

    pub fn emit(&mut self, event: HostEvent) {
        self.pending.push_back(event);
    }
}

impl Host for TuiHost {
    fn register_view(&mut self, view: ViewDescriptor) {
        log::debug!("Registered view '{}'", view.view_type);
        self.views.push(view);
    }

    fn add_ribbon_icon(&mut self, icon: &str, title: &str) {
        self.ribbon.push((icon.to_string(), title.to_string()));
    }

    fn subscribe(&mut self, kind: HostEventKind) {
        self.subscriptions.insert(kind);
    }

    fn has_view(&self, view_type: &str) -> bool {
        self.side_view.is_some_and(|v| v == view_type)
    }

    fn create_side_view(&mut self, view_type: &str) -> Result<(), HostError> {
        let Some(registered) = self.view(view_type).map(|v| v.view_type) else {
            return Err(HostError::NoLeaf {
                view_type: view_type.to_string(),
            });
        };
        self.side_view = Some(registered);
        Ok(())
    }

    fn reveal_view(&mut self, view_type: &str) {
        if self.has_view(view_type) {
            self.revealed = true;
        }
    }

    fn active_document_text(&self) -> Option<String> {
        self.active_text.clone()
    }

    fn open_document(&mut self, target: &str) -> Result<(), HostError> {
        let resolved = self.notes.resolve(target).map_err(|e| {
            log::warn!("Failed to scan notes for [[{target}]]: {e}");
            HostError::DocumentNotFound(target.to_string())
        })?;
        let Some(index) = resolved.and_then(|file| self.files.iter().position(|f| *f == file))
        else {
            self.set_status(format!("No note matches [[{target}]]"));
            return Err(HostError::DocumentNotFound(target.to_string()));
        };
        self.activate(index).map_err(|e| {
            log::warn!("Failed to read linked note: {e}");
            HostError::DocumentNotFound(target.to_string())
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    fn notes_with(files: &[(&str, &str)]) -> (TempDir, TuiHost) {
        let dir = TempDir::new().unwrap();
        for (path, content) in files {
            let path = dir.path().join(path);
            fs::create_dir_all(path.parent().unwrap()).unwrap();
            fs::write(path, content).unwrap();
        }
        let host = TuiHost::new(NotesDir::open(dir.path()).unwrap()).unwrap();
        (dir, host)
    }

    #[test]
    fn open_document_resolves_and_activates() {
        let (_dir, mut host) = notes_with(&[("a.md", "## Links\n[[B]]"), ("sub/b.md", "bee")]);
        host.subscribe(HostEventKind::ActiveDocumentChanged);

        host.open_document("b").unwrap();

        assert_eq!(host.active_file().map(|f| f.display_name()), Some("b"));
        assert_eq!(host.active_document_text().as_deref(), Some("bee"));
        assert_eq!(host.next_event(), Some(HostEvent::ActiveDocumentChanged));
        assert_eq!(host.next_event(), None);
    }

    #[test]
    fn open_missing_document_sets_status() {
        let (_dir, mut host) = notes_with(&[("a.md", "")]);

        let result = host.open_document("Nowhere");

        assert!(matches!(result, Err(HostError::DocumentNotFound(_))));
        assert_eq!(host.status(), Some("No note matches [[Nowhere]]"));
        assert!(host.active_file().is_none());
    }

    #[test]
    fn open_document_follows_folder_qualified_targets() {
        let (_dir, mut host) = notes_with(&[("a/Index.md", "first"), ("b/Index.md", "second")]);

        host.open_document("b/index#Top").unwrap();

        assert_eq!(host.active_index(), Some(1));
        assert_eq!(host.active_text(), Some("second"));
    }

    #[test]
    fn unsubscribed_events_are_dropped() {
        let (_dir, mut host) = notes_with(&[("a.md", "")]);

        host.activate(0).unwrap();
        host.emit(HostEvent::RibbonClicked);

        assert_eq!(host.next_event(), Some(HostEvent::RibbonClicked));
        assert_eq!(host.next_event(), None);
    }

    #[test]
    fn side_view_requires_registration() {
        let (_dir, mut host) = notes_with(&[]);

        assert!(host.create_side_view("links-panel").is_err());

        host.register_view(links_panel_engine::VIEW);
        host.create_side_view("links-panel").unwrap();
        host.reveal_view("links-panel");
        assert!(host.is_panel_visible());

        host.close_side_view();
        assert!(!host.is_panel_visible());
        assert_eq!(host.next_event(), Some(HostEvent::ViewClosed));
    }
}
