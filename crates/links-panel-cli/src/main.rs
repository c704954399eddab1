use anyhow::Result;
use crossterm::{
    event::{self, DisableMouseCapture, EnableMouseCapture, Event, KeyCode},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use links_panel_config::{Config, ConfigError};
use links_panel_engine::{
    HostEvent, LinksPanelPlugin, NO_LINKS_MESSAGE, NotesDir, PanelOptions, RenderedLinks,
};
use ratatui::{
    Frame, Terminal,
    backend::CrosstermBackend,
    layout::{Constraint, Direction, Layout},
    style::{Color, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, ListState, Paragraph, Wrap},
};
use std::{env, io::stdout, path::PathBuf, process};

mod host;

use host::TuiHost;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Focus {
    Notes,
    Links,
}

struct App {
    host: TuiHost,
    plugin: LinksPanelPlugin,
    file_list_state: ListState,
    link_list_state: ListState,
    focus: Focus,
}

impl App {
    fn new(notes: NotesDir, options: PanelOptions) -> Result<Self> {
        let mut host = TuiHost::new(notes)?;
        let plugin = LinksPanelPlugin::load(&mut host, options);

        let mut app = Self {
            host,
            plugin,
            file_list_state: ListState::default(),
            link_list_state: ListState::default(),
            focus: Focus::Notes,
        };

        if !app.host.files().is_empty() {
            app.open_file(0);
        }
        app.host.emit(HostEvent::LayoutReady);
        app.pump_events();

        Ok(app)
    }

    /// Delivers queued host events to the plugin until the queue is empty.
    fn pump_events(&mut self) {
        while let Some(event) = self.host.next_event() {
            log::debug!("Dispatching {event:?}");
            self.plugin.handle_event(&mut self.host, &event);
        }
        self.sync_selection();
    }

    fn sync_selection(&mut self) {
        self.file_list_state.select(self.host.active_index());

        let link_count = self.links().map_or(0, |links| links.links().len());
        let selected = match self.link_list_state.selected() {
            _ if link_count == 0 => None,
            Some(i) => Some(i.min(link_count - 1)),
            None => Some(0),
        };
        self.link_list_state.select(selected);
        if link_count == 0 && self.focus == Focus::Links {
            self.focus = Focus::Notes;
        }
    }

    fn links(&self) -> Option<&RenderedLinks> {
        if !self.host.is_panel_visible() {
            return None;
        }
        self.plugin.view().and_then(|view| view.content())
    }

    fn open_file(&mut self, index: usize) {
        if let Err(e) = self.host.activate(index) {
            self.host.set_status(format!("Error reading file: {e}"));
        }
        self.pump_events();
    }

    fn move_selection(&mut self, forward: bool) {
        match self.focus {
            Focus::Notes => {
                let len = self.host.files().len();
                if len == 0 {
                    return;
                }
                let i = step(self.file_list_state.selected(), len, forward);
                self.open_file(i);
            }
            Focus::Links => {
                let len = self.links().map_or(0, |links| links.links().len());
                if len > 0 {
                    let i = step(self.link_list_state.selected(), len, forward);
                    self.link_list_state.select(Some(i));
                }
            }
        }
    }

    fn activate_selected_link(&mut self) {
        let target = self
            .link_list_state
            .selected()
            .and_then(|i| self.links()?.links().get(i))
            .map(|link| link.target.clone());

        if let Some(target) = target {
            self.host.emit(HostEvent::LinkActivated { target });
            self.pump_events();
        }
    }

    fn toggle_focus(&mut self) {
        let has_links = self.links().is_some_and(|links| !links.is_empty());
        self.focus = match self.focus {
            Focus::Notes if has_links => Focus::Links,
            _ => Focus::Notes,
        };
    }

    fn reload(&mut self) {
        if let Err(e) = self.host.reload_active() {
            self.host.set_status(format!("Error reloading file: {e}"));
        }
        self.pump_events();
    }

    fn show_panel(&mut self) {
        self.host.emit(HostEvent::RibbonClicked);
        self.pump_events();
    }

    fn hide_panel(&mut self) {
        self.host.close_side_view();
        self.pump_events();
    }
}

fn step(current: Option<usize>, len: usize, forward: bool) -> usize {
    match (current, forward) {
        (Some(i), true) => (i + 1) % len,
        (Some(0), false) | (None, false) => len - 1,
        (Some(i), false) => i - 1,
        (None, true) => 0,
    }
}

/// Where the notes path in the effective config came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum NotesSource {
    Args,
    ConfigFile,
}

/// Combines the command-line notes path with the loaded config file.
///
/// A config file that fails to load is an error even when a path was given,
/// so its `[panel]` settings are never silently replaced by defaults.
fn resolve_config(
    cli_path: Option<&str>,
    loaded: Result<Option<Config>, ConfigError>,
) -> Result<Option<(Config, NotesSource)>, ConfigError> {
    let loaded = loaded?;
    Ok(match (cli_path, loaded) {
        (Some(path), Some(config)) => Some((
            Config {
                notes_path: PathBuf::from(path),
                ..config
            },
            NotesSource::Args,
        )),
        (Some(path), None) => Some((Config::new(path), NotesSource::Args)),
        (None, Some(config)) => Some((config, NotesSource::ConfigFile)),
        (None, None) => None,
    })
}

fn main() -> Result<()> {
    env_logger::init();

    // Determine notes path from CLI args or config file
    let args: Vec<String> = env::args().collect();
    let config_path = Config::config_path();

    if args.len() > 2 {
        eprintln!("Usage: {} [notes-folder-path]", args[0]);
        process::exit(1);
    }

    let (config, source) = match resolve_config(args.get(1).map(String::as_str), Config::load()) {
        Ok(Some(resolved)) => resolved,
        Ok(None) => {
            eprintln!("Error: No notes path provided and no config file found");
            eprintln!("Usage: {} <notes-folder-path>", args[0]);
            eprintln!("Or create a config file at {}", config_path.display());
            process::exit(1);
        }
        Err(e) => {
            eprintln!("Error: Failed to load config file: {e}");
            eprintln!("Usage: {} <notes-folder-path>", args[0]);
            process::exit(1);
        }
    };

    let notes = match NotesDir::open(&config.notes_path) {
        Ok(notes) => notes,
        Err(e) => {
            let origin = match source {
                NotesSource::ConfigFile => {
                    format!(" from config file '{}'", config_path.display())
                }
                NotesSource::Args => String::new(),
            };
            eprintln!(
                "Error: Notes path '{}'{origin} is invalid: {e}",
                config.notes_path.display()
            );
            process::exit(1);
        }
    };

    let options = PanelOptions {
        heading_keyword: config.panel.heading_keyword,
        open_on_startup: config.panel.open_on_startup,
    };
    let mut app = App::new(notes, options)?;

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let res = run_app(&mut terminal, &mut app);

    // Restore terminal
    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;

    if let Err(err) = res {
        println!("{err:?}");
    }

    Ok(())
}

fn run_app(
    terminal: &mut Terminal<CrosstermBackend<std::io::Stdout>>,
    app: &mut App,
) -> Result<()> {
    loop {
        terminal.draw(|f| ui(f, app))?;

        if let Event::Key(key) = event::read()? {
            match key.code {
                KeyCode::Char('q') => return Ok(()),
                KeyCode::Down | KeyCode::Char('j') => app.move_selection(true),
                KeyCode::Up | KeyCode::Char('k') => app.move_selection(false),
                KeyCode::Tab => app.toggle_focus(),
                KeyCode::Enter if app.focus == Focus::Links => app.activate_selected_link(),
                KeyCode::Char('r') => app.reload(),
                KeyCode::Char('l') => app.show_panel(),
                KeyCode::Char('x') => app.hide_panel(),
                _ => {}
            }
        }
    }
}

fn ui(f: &mut Frame, app: &mut App) {
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .margin(1)
        .constraints([Constraint::Min(0), Constraint::Length(1)])
        .split(f.area());

    let panel_visible = app.links().is_some();
    let columns = if panel_visible {
        vec![
            Constraint::Percentage(25),
            Constraint::Percentage(45),
            Constraint::Percentage(30),
        ]
    } else {
        vec![Constraint::Percentage(30), Constraint::Percentage(70)]
    };
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints(columns)
        .split(rows[0]);

    let highlight = Style::default().bg(Color::Yellow).fg(Color::Black);
    let focused = |focus: Focus| {
        if app.focus == focus {
            Style::default().fg(Color::Yellow)
        } else {
            Style::default()
        }
    };

    // Notes list
    let file_items: Vec<ListItem> = app
        .host
        .files()
        .iter()
        .map(|file| ListItem::new(file.relative_path().as_str().to_string()))
        .collect();
    let files_list = List::new(file_items)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(focused(Focus::Notes))
                .title("Notes"),
        )
        .highlight_style(highlight);
    f.render_stateful_widget(files_list, chunks[0], &mut app.file_list_state);

    // Note content
    let title = app
        .host
        .active_file()
        .map_or("Content".to_string(), |file| file.display_name().to_string());
    let content_text: Vec<Line> = match app.host.active_text() {
        Some(text) => text.lines().map(|l| Line::from(l.to_string())).collect(),
        None => vec![Line::from("Select a note to view its content")],
    };
    let content = Paragraph::new(content_text)
        .block(Block::default().borders(Borders::ALL).title(title))
        .wrap(Wrap { trim: false });
    f.render_widget(content, chunks[1]);

    // Links panel
    if let Some(links) = app.links().cloned() {
        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(focused(Focus::Links))
            .title(
                app.host
                    .view(links_panel_engine::VIEW_TYPE)
                    .map_or("Links", |v| v.display_text),
            );
        match links {
            RenderedLinks::Empty => {
                f.render_widget(Paragraph::new(NO_LINKS_MESSAGE).block(block), chunks[2]);
            }
            RenderedLinks::List(entries) => {
                let items: Vec<ListItem> = entries
                    .iter()
                    .map(|link| ListItem::new(link.label().to_string()))
                    .collect();
                let list = List::new(items).block(block).highlight_style(highlight);
                f.render_stateful_widget(list, chunks[2], &mut app.link_list_state);
            }
        }
    }

    // Status / help line
    let ribbon_title = app
        .host
        .ribbon()
        .first()
        .map_or("Show links", |(_, title)| title.as_str());
    let help_text = match app.host.status() {
        Some(status) => Line::from(Span::styled(
            status.to_string(),
            Style::default().fg(Color::Red),
        )),
        None => Line::from(vec![
            Span::raw("q: Quit | "),
            Span::raw("↑/k ↓/j: Move | "),
            Span::raw("Tab: Notes/Links | Enter: Open link | "),
            Span::raw(format!("r: Reload | l: {ribbon_title} | x: Hide links")),
        ]),
    };
    f.render_widget(Paragraph::new(help_text), rows[1]);
}
