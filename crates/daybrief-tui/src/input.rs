use ratatui::crossterm::event::{
    Event, KeyCode, KeyEvent, KeyModifiers, KeyEventKind, MouseEvent, MouseEventKind,
};

use crate::action::Action;
use crate::app::InputMode;

/// Map a crossterm terminal event to a TUI action, respecting input mode.
pub fn map_event(event: &Event, input_mode: &InputMode) -> Action {
    match event {
        Event::Key(key) if key.kind == KeyEventKind::Press => {
            // The date-navigation chords are global: they apply in every
            // input mode and consume the key event outright.
            if key.modifiers.contains(KeyModifiers::CONTROL) {
                match key.code {
                    KeyCode::Char('c') => return Action::Quit,
                    KeyCode::Char('d') => return Action::GoToToday,
                    KeyCode::Char('p') => return Action::GoToPrev,
                    KeyCode::Char('n') => return Action::GoToNext,
                    KeyCode::Char('s') => return Action::SaveConfig,
                    _ => {}
                }
            }

            match input_mode {
                InputMode::Normal => map_key_normal(key),
                InputMode::Calendar => map_key_calendar(key),
            }
        }
        Event::Mouse(mouse) => map_mouse(mouse),
        Event::Resize(w, h) => Action::Resize(*w, *h),
        _ => Action::None,
    }
}

fn map_mouse(mouse: &MouseEvent) -> Action {
    match mouse.kind {
        MouseEventKind::ScrollDown => Action::ScrollDown,
        MouseEventKind::ScrollUp => Action::ScrollUp,
        _ => Action::None,
    }
}

fn map_key_normal(key: &KeyEvent) -> Action {
    match key.code {
        KeyCode::Char('q') => Action::Quit,
        KeyCode::Up => Action::GoToNext,
        KeyCode::Down => Action::GoToPrev,
        KeyCode::Char('j') => Action::ScrollDown,
        KeyCode::Char('k') => Action::ScrollUp,
        KeyCode::Char('g') | KeyCode::Home => Action::ScrollTop,
        KeyCode::Char('G') | KeyCode::End => Action::ScrollBottom,
        KeyCode::PageDown => Action::PageDown,
        KeyCode::PageUp => Action::PageUp,
        KeyCode::Char('c') => Action::OpenCalendar,
        KeyCode::Tab => Action::ToggleSidebar,
        KeyCode::Char('t') => Action::CycleTheme,
        KeyCode::Char('?') => Action::ToggleHelp,
        KeyCode::Esc => Action::NavigateBack,
        _ => Action::None,
    }
}

fn map_key_calendar(key: &KeyEvent) -> Action {
    match key.code {
        KeyCode::Char('q') => Action::Quit,
        KeyCode::Left | KeyCode::Char('h') => Action::MoveLeft,
        KeyCode::Right | KeyCode::Char('l') => Action::MoveRight,
        KeyCode::Up | KeyCode::Char('k') => Action::MoveUp,
        KeyCode::Down | KeyCode::Char('j') => Action::MoveDown,
        KeyCode::Char('[') => Action::PrevMonth,
        KeyCode::Char(']') => Action::NextMonth,
        KeyCode::Enter => Action::DrillIn,
        KeyCode::Esc | KeyCode::Char('c') => Action::NavigateBack,
        _ => Action::None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ctrl(c: char) -> Event {
        Event::Key(KeyEvent::new(KeyCode::Char(c), KeyModifiers::CONTROL))
    }

    fn plain(c: char) -> Event {
        Event::Key(KeyEvent::new(KeyCode::Char(c), KeyModifiers::NONE))
    }

    #[test]
    fn chords_route_to_date_navigation() {
        assert_eq!(map_event(&ctrl('d'), &InputMode::Normal), Action::GoToToday);
        assert_eq!(map_event(&ctrl('p'), &InputMode::Normal), Action::GoToPrev);
        assert_eq!(map_event(&ctrl('n'), &InputMode::Normal), Action::GoToNext);
    }

    #[test]
    fn chords_apply_inside_the_calendar_too() {
        assert_eq!(
            map_event(&ctrl('d'), &InputMode::Calendar),
            Action::GoToToday
        );
        assert_eq!(
            map_event(&ctrl('n'), &InputMode::Calendar),
            Action::GoToNext
        );
    }

    #[test]
    fn unmodified_chord_letters_do_not_navigate() {
        // 'd' and 'p' are chrome-free; 'n' likewise. None of them reach the
        // date-navigation controller without the modifier.
        assert_eq!(map_event(&plain('d'), &InputMode::Normal), Action::None);
        assert_eq!(map_event(&plain('p'), &InputMode::Normal), Action::None);
        assert_eq!(map_event(&plain('n'), &InputMode::Normal), Action::None);
    }

    #[test]
    fn arrows_step_through_dates_in_normal_mode() {
        let up = Event::Key(KeyEvent::new(KeyCode::Up, KeyModifiers::NONE));
        let down = Event::Key(KeyEvent::new(KeyCode::Down, KeyModifiers::NONE));
        assert_eq!(map_event(&up, &InputMode::Normal), Action::GoToNext);
        assert_eq!(map_event(&down, &InputMode::Normal), Action::GoToPrev);
    }

    #[test]
    fn arrows_move_the_cursor_in_calendar_mode() {
        let up = Event::Key(KeyEvent::new(KeyCode::Up, KeyModifiers::NONE));
        assert_eq!(map_event(&up, &InputMode::Calendar), Action::MoveUp);
    }

    #[test]
    fn key_release_is_ignored() {
        let mut key = KeyEvent::new(KeyCode::Char('q'), KeyModifiers::NONE);
        key.kind = KeyEventKind::Release;
        assert_eq!(map_event(&Event::Key(key), &InputMode::Normal), Action::None);
    }
}
