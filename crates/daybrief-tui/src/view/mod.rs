pub mod calendar;
pub mod content;
pub mod help;
pub mod masthead;
pub mod sidebar;

use ratatui::Frame;
use ratatui::layout::{Constraint, Flex, Layout, Rect};
use ratatui::style::Style;
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;

use crate::app::{App, InputMode};

/// Spinner frames for animated fetch indication.
const SPINNER_FRAMES: &[char] = &[
    '\u{280B}', '\u{2819}', '\u{2839}', '\u{2838}', '\u{283C}', '\u{2834}', '\u{2826}', '\u{2827}',
    '\u{2807}', '\u{280F}',
];

/// Get the current spinner character based on a tick counter.
pub fn spinner_char(tick: usize) -> char {
    SPINNER_FRAMES[tick % SPINNER_FRAMES.len()]
}

/// Truncate a string to fit in `max_width` columns, appending "\u{2026}" if truncated.
pub fn truncate(s: &str, max_width: usize) -> String {
    if max_width == 0 {
        return String::new();
    }
    if s.chars().count() <= max_width {
        return s.to_string();
    }
    let mut truncated: String = s.chars().take(max_width.saturating_sub(1)).collect();
    truncated.push('\u{2026}');
    truncated
}

/// Create a centered rectangle of the given width (columns) and height (rows).
pub fn centered_rect(width: u16, height: u16, area: Rect) -> Rect {
    let vertical = Layout::vertical([Constraint::Length(height)])
        .flex(Flex::Center)
        .split(area);
    Layout::horizontal([Constraint::Length(width)])
        .flex(Flex::Center)
        .split(vertical[0])[0]
}

/// Render the single-row key-hint footer.
pub fn render_footer(f: &mut Frame, area: Rect, app: &App) {
    let hints = match app.input_mode {
        InputMode::Calendar => {
            " \u{2190}\u{2191}\u{2193}\u{2192} move   [ ] month   Enter select   Esc close"
        }
        InputMode::Normal => {
            " q quit   \u{2191}/\u{2193} dates   ^D today   ^P/^N prev/next   c calendar   Tab sidebar   ? help"
        }
    };
    let line = Line::from(Span::styled(hints, Style::default().fg(app.theme.dim)));
    f.render_widget(Paragraph::new(line), area);
}
