use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};

use daybrief_core::date;

use crate::app::App;
use crate::view::truncate;

/// Render the date list panel. The highlight always follows the current
/// selection — stepping through dates is the same thing as moving through
/// this list.
pub fn render(f: &mut Frame, area: Rect, app: &App) {
    let theme = &app.theme;

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(theme.border))
        .title(" Briefings ");
    let inner = block.inner(area);
    f.render_widget(block, area);

    let entries = app.state.entries();
    let selected = app.state.selected_index().unwrap_or(0);
    let visible = inner.height as usize;
    if visible == 0 || entries.is_empty() {
        return;
    }

    // Keep the selected row roughly centered once the list outgrows the panel.
    let offset = selected
        .saturating_sub(visible / 2)
        .min(entries.len().saturating_sub(visible));

    let title_width = (inner.width as usize).saturating_sub(14);
    let lines: Vec<Line> = entries
        .iter()
        .enumerate()
        .skip(offset)
        .take(visible)
        .map(|(i, entry)| {
            let iso = date::format_iso(entry.date);
            let title = truncate(&entry.title, title_width);
            if i == selected {
                Line::from(vec![
                    Span::styled("\u{258C}", Style::default().fg(theme.accent)),
                    Span::styled(
                        format!("{iso} "),
                        Style::default()
                            .fg(theme.text)
                            .bg(theme.highlight_bg)
                            .add_modifier(Modifier::BOLD),
                    ),
                    Span::styled(
                        title,
                        Style::default().fg(theme.text).bg(theme.highlight_bg),
                    ),
                ])
            } else {
                Line::from(vec![
                    Span::styled(format!(" {iso} "), Style::default().fg(theme.text)),
                    Span::styled(title, Style::default().fg(theme.dim)),
                ])
            }
        })
        .collect();

    f.render_widget(Paragraph::new(lines), inner);
}
