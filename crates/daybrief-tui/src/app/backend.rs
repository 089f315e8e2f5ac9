use super::App;
use crate::tui_event::BackendEvent;

impl App {
    /// Apply a backend completion event to the state.
    pub fn handle_backend_event(&mut self, event: BackendEvent) {
        match event {
            BackendEvent::IndexLoaded { entries } => {
                self.loading_index = false;
                let seeded = self.state.load_entries(entries);
                // A --date request overrides the newest-first seed, when it
                // names an available day.
                let target = self
                    .start_date
                    .take()
                    .and_then(|day| self.state.select_date(day))
                    .or(seeded);
                if let Some(day) = target {
                    self.dispatch_fetch(day);
                }
            }
            BackendEvent::IndexFailed { .. } => {
                // Already logged by the backend; the reader stays empty.
                self.loading_index = false;
            }
            BackendEvent::ContentLoaded { date, doc } => {
                if self.loading_content == Some(date) {
                    self.loading_content = None;
                }
                self.state.apply_content(date, doc);
            }
            BackendEvent::ContentFailed { date, .. } => {
                if self.loading_content == Some(date) {
                    self.loading_content = None;
                }
                // Previous content stays in place; the failure is silent.
            }
        }
    }
}
