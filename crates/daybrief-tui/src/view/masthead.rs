use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;

use daybrief_core::date;

use crate::app::App;
use crate::view::spinner_char;

/// Render the masthead: publication title, the selected date in full, and a
/// rule underneath.
pub fn render(f: &mut Frame, area: Rect, app: &App) {
    let theme = &app.theme;

    let mut title_spans = vec![Span::styled(" Daily briefing ", theme.header_style())];
    if app.loading_index || app.loading_content.is_some() {
        title_spans.push(Span::styled(
            format!(" {}", spinner_char(app.tick)),
            Style::default().fg(theme.accent),
        ));
    }

    let date_line = match app.state.selected() {
        Some(day) => {
            let mut spans = vec![Span::styled(
                format!(" {}", date::format_full(day)),
                Style::default()
                    .fg(theme.text)
                    .add_modifier(Modifier::BOLD),
            )];
            if let Some(index) = app.state.selected_index() {
                if let Some(entry) = app.state.entries().get(index) {
                    if !entry.title.is_empty() {
                        spans.push(Span::styled(
                            format!("  \u{2014} {}", entry.title),
                            Style::default().fg(theme.dim),
                        ));
                    }
                }
            }
            Line::from(spans)
        }
        None if app.loading_index => Line::from(Span::styled(
            " loading index\u{2026}",
            Style::default().fg(theme.dim),
        )),
        None => Line::from(Span::styled(
            " no briefings",
            Style::default().fg(theme.dim),
        )),
    };

    let rule = Line::from(Span::styled(
        "\u{2500}".repeat(area.width as usize),
        Style::default().fg(theme.accent),
    ));

    let lines = vec![Line::from(title_spans), date_line, rule];
    f.render_widget(Paragraph::new(lines), area);
}
