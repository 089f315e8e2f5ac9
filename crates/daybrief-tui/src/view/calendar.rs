use chrono::Datelike;
use ratatui::Frame;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Clear, Paragraph};

use crate::app::App;
use crate::view::centered_rect;

/// Render the calendar popover, centered. Days without a briefing render
/// dim and cannot be chosen; the current selection keeps its accent even
/// while the cursor roams.
pub fn render(f: &mut Frame, app: &App) {
    let theme = &app.theme;
    let grid = app.calendar.month_grid();
    let popup = centered_rect(28, grid.len() as u16 + 4, f.area());

    let mut lines = vec![
        Line::from(Span::styled(
            format!("{:^26}", app.calendar.month_label()),
            Style::default()
                .fg(theme.text)
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(Span::styled(
            "  Su Mo Tu We Th Fr Sa",
            Style::default().fg(theme.dim),
        )),
    ];

    let cursor = app.calendar.cursor();
    let selected = app.state.selected();
    for week in &grid {
        let mut spans = vec![Span::raw(" ")];
        for cell in week {
            match cell {
                Some(day) => {
                    let label = format!(" {:>2}", day.day());
                    let mut style = if app.state.is_available(*day) {
                        Style::default().fg(theme.text)
                    } else {
                        Style::default().fg(theme.disabled)
                    };
                    if selected == Some(*day) {
                        style = style.fg(theme.accent).add_modifier(Modifier::BOLD);
                    }
                    if *day == cursor {
                        style = style.bg(theme.highlight_bg);
                    }
                    spans.push(Span::styled(label, style));
                }
                None => spans.push(Span::raw("   ")),
            }
        }
        lines.push(Line::from(spans));
    }

    let paragraph = Paragraph::new(lines).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(theme.accent))
            .title(" Calendar "),
    );

    f.render_widget(Clear, popup);
    f.render_widget(paragraph, popup);
}
