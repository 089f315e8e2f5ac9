mod backend;
mod update;

use chrono::NaiveDate;
use ratatui::layout::{Constraint, Layout};
use tokio::sync::mpsc;

use daybrief_core::{BriefingState, config_file, date};

use crate::model::calendar::CalendarState;
use crate::theme::Theme;
use crate::tui_event::BackendCommand;

/// Input mode determines how keyboard input is interpreted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InputMode {
    Normal,
    Calendar,
}

/// Main application state.
pub struct App {
    /// The date-selection and content-synchronization core.
    pub state: BriefingState,
    pub input_mode: InputMode,
    pub calendar: CalendarState,
    pub sidebar_visible: bool,
    pub show_help: bool,
    /// Content viewport scroll, in rendered lines.
    pub scroll: u16,
    /// Rendered content line count (set by the view, used for clamping).
    pub content_lines: u16,
    /// Height of the content viewport (refreshed on render and resize).
    pub visible_rows: u16,
    pub loading_index: bool,
    /// Date of the content fetch currently in flight, for the spinner.
    pub loading_content: Option<NaiveDate>,
    /// Start date requested on the command line, applied when the index
    /// arrives.
    pub start_date: Option<NaiveDate>,
    pub theme: Theme,
    pub theme_name: String,
    pub tick: usize,
    pub should_quit: bool,
    /// Channel to send fetch commands to the backend listener.
    pub backend_cmd_tx: Option<mpsc::UnboundedSender<BackendCommand>>,
    /// Briefing root, kept for Ctrl+s config save.
    pub root: Option<String>,
}

impl App {
    pub fn new(theme: Theme, theme_name: String) -> Self {
        Self {
            state: BriefingState::new(),
            input_mode: InputMode::Normal,
            calendar: CalendarState::new(date::today_local()),
            sidebar_visible: true,
            show_help: false,
            scroll: 0,
            content_lines: 0,
            visible_rows: 20,
            loading_index: false,
            loading_content: None,
            start_date: None,
            theme,
            theme_name,
            tick: 0,
            should_quit: false,
            backend_cmd_tx: None,
            root: None,
        }
    }

    /// Send a content fetch for a freshly accepted selection and reset the
    /// viewport. The in-flight marker is simply overwritten when a newer
    /// selection supersedes the fetch; the old task still completes and its
    /// result dies in the staleness check.
    pub(crate) fn dispatch_fetch(&mut self, date: NaiveDate) {
        self.scroll = 0;
        self.loading_content = Some(date);
        if let Some(tx) = &self.backend_cmd_tx {
            let _ = tx.send(BackendCommand::LoadContent { date });
        }
    }

    /// Cycle theme: paper → dark → paper.
    fn cycle_theme(&mut self) {
        let (name, theme) = match self.theme_name.as_str() {
            "paper" => ("dark", Theme::dark()),
            _ => ("paper", Theme::paper()),
        };
        self.theme_name = name.to_string();
        self.theme = theme;
    }

    /// Persist root and display options to the platform config file.
    fn save_config(&self) {
        let config = config_file::ConfigFile {
            source: Some(config_file::SourceConfig {
                root: self.root.clone(),
                ..Default::default()
            }),
            display: Some(config_file::DisplayConfig {
                theme: Some(self.theme_name.clone()),
                sidebar: Some(self.sidebar_visible),
            }),
        };
        match config_file::save_config(&config) {
            Ok(path) => tracing::info!(path = %path.display(), "config saved"),
            Err(e) => tracing::warn!(error = %e, "config save failed"),
        }
    }

    // update() is in update.rs
    // handle_backend_event() is in backend.rs

    /// Render the current frame.
    pub fn view(&mut self, f: &mut ratatui::Frame) {
        let area = f.area();

        let chunks = Layout::vertical([
            Constraint::Length(3), // masthead
            Constraint::Min(3),    // body
            Constraint::Length(1), // footer
        ])
        .split(area);

        crate::view::masthead::render(f, chunks[0], self);

        let body = chunks[1];
        let content_area = if self.sidebar_visible && !self.state.entries().is_empty() {
            let split =
                Layout::horizontal([Constraint::Min(40), Constraint::Length(30)]).split(body);
            crate::view::sidebar::render(f, split[1], self);
            split[0]
        } else {
            body
        };
        self.visible_rows = content_area.height.saturating_sub(1);
        crate::view::content::render(f, content_area, self);

        crate::view::render_footer(f, chunks[2], self);

        if self.input_mode == InputMode::Calendar {
            crate::view::calendar::render(f, self);
        }

        if self.show_help {
            crate::view::help::render(f, &self.theme);
        }
    }
}
