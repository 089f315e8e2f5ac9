use daybrief_core::date;

use super::{App, InputMode};
use crate::action::Action;

impl App {
    /// Process a user action and update state. Returns true if the app
    /// should quit.
    pub fn update(&mut self, action: Action) -> bool {
        // Help overlay swallows everything except quit and its own toggles.
        if self.show_help {
            match action {
                Action::Quit => {
                    self.should_quit = true;
                    return true;
                }
                Action::ToggleHelp | Action::NavigateBack => self.show_help = false,
                Action::Tick => self.tick = self.tick.wrapping_add(1),
                Action::Resize(_, h) => self.on_resize(h),
                _ => {}
            }
            return false;
        }

        match action {
            Action::Quit => {
                self.should_quit = true;
                return true;
            }
            Action::Tick => self.tick = self.tick.wrapping_add(1),
            Action::Resize(_, h) => self.on_resize(h),

            // Date navigation. The state machine decides whether the move is
            // legal; an accepted move hands back the new date to fetch for.
            Action::GoToToday => {
                if let Some(day) = self.state.go_to_today() {
                    self.dispatch_fetch(day);
                }
            }
            Action::GoToPrev => {
                if let Some(day) = self.state.go_to_prev() {
                    self.dispatch_fetch(day);
                }
            }
            Action::GoToNext => {
                if let Some(day) = self.state.go_to_next() {
                    self.dispatch_fetch(day);
                }
            }

            // Calendar popover
            Action::OpenCalendar => {
                let at = self.state.selected().unwrap_or_else(date::today_local);
                self.calendar.open_at(at);
                self.input_mode = InputMode::Calendar;
            }
            Action::NavigateBack => {
                if self.input_mode == InputMode::Calendar {
                    self.input_mode = InputMode::Normal;
                }
            }
            Action::MoveLeft if self.input_mode == InputMode::Calendar => {
                self.calendar.move_days(-1);
            }
            Action::MoveRight if self.input_mode == InputMode::Calendar => {
                self.calendar.move_days(1);
            }
            Action::MoveUp if self.input_mode == InputMode::Calendar => {
                self.calendar.move_weeks(-1);
            }
            Action::MoveDown if self.input_mode == InputMode::Calendar => {
                self.calendar.move_weeks(1);
            }
            Action::PrevMonth if self.input_mode == InputMode::Calendar => {
                self.calendar.prev_month();
            }
            Action::NextMonth if self.input_mode == InputMode::Calendar => {
                self.calendar.next_month();
            }
            Action::DrillIn if self.input_mode == InputMode::Calendar => {
                // Days with no briefing are rejected by the state machine;
                // the popover stays open so the user can pick again.
                if let Some(day) = self.state.select_date(self.calendar.cursor()) {
                    self.dispatch_fetch(day);
                    self.input_mode = InputMode::Normal;
                }
            }

            // Content viewport
            Action::ScrollDown => {
                self.scroll = self.scroll.saturating_add(1).min(self.max_scroll());
            }
            Action::ScrollUp => self.scroll = self.scroll.saturating_sub(1),
            Action::PageDown => {
                self.scroll = self
                    .scroll
                    .saturating_add(self.visible_rows)
                    .min(self.max_scroll());
            }
            Action::PageUp => self.scroll = self.scroll.saturating_sub(self.visible_rows),
            Action::ScrollTop => self.scroll = 0,
            Action::ScrollBottom => self.scroll = self.max_scroll(),

            // Chrome
            Action::ToggleSidebar => self.sidebar_visible = !self.sidebar_visible,
            Action::ToggleHelp => self.show_help = true,
            Action::CycleTheme => self.cycle_theme(),
            Action::SaveConfig => self.save_config(),

            _ => {}
        }
        false
    }

    fn on_resize(&mut self, height: u16) {
        self.visible_rows = height.saturating_sub(5);
    }

    fn max_scroll(&self) -> u16 {
        self.content_lines.saturating_sub(self.visible_rows)
    }
}
