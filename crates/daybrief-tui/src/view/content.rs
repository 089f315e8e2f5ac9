use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Paragraph, Wrap};

use daybrief_core::{ContentDocument, Section};

use crate::app::App;
use crate::theme::Theme;

/// Render the content viewport for the current selection.
pub fn render(f: &mut Frame, area: Rect, app: &mut App) {
    let lines: Vec<Line<'static>> = match app.state.content() {
        Some(ContentDocument::Structured(sections)) => structured_lines(sections, &app.theme),
        Some(ContentDocument::Markup(text)) => markup_lines(text, &app.theme),
        None if app.loading_content.is_some() => vec![
            Line::from(""),
            Line::from(Span::styled(
                "  fetching briefing\u{2026}",
                Style::default().fg(app.theme.dim),
            )),
        ],
        None => Vec::new(),
    };

    app.content_lines = lines.len() as u16;
    let scroll = app.scroll.min(app.content_lines.saturating_sub(1));

    let paragraph = Paragraph::new(lines)
        .wrap(Wrap { trim: false })
        .scroll((scroll, 0));
    f.render_widget(paragraph, area);
}

fn structured_lines(sections: &[Section], theme: &Theme) -> Vec<Line<'static>> {
    let mut lines = Vec::new();
    for section in sections {
        lines.push(Line::from(Span::styled(
            format!(" {}", section.title),
            Style::default()
                .fg(theme.accent)
                .add_modifier(Modifier::BOLD),
        )));
        lines.push(Line::from(""));
        for story in &section.stories {
            lines.push(Line::from(Span::styled(
                format!("   {}", story.headline),
                Style::default()
                    .fg(theme.text)
                    .add_modifier(Modifier::BOLD),
            )));
            lines.push(Line::from(Span::styled(
                format!("   {}", story.body),
                Style::default().fg(theme.text),
            )));
            if !story.sources.is_empty() {
                let names: Vec<&str> = story.sources.iter().map(|s| s.name.as_str()).collect();
                lines.push(Line::from(Span::styled(
                    format!("   {}", names.join("  \u{00B7}  ")),
                    Style::default().fg(theme.link),
                )));
            }
            lines.push(Line::from(""));
        }
    }
    lines
}

/// Light markdown styling: headings, bullets, everything else verbatim.
fn markup_lines(text: &str, theme: &Theme) -> Vec<Line<'static>> {
    text.lines()
        .map(|raw| {
            if let Some(rest) = raw.strip_prefix("### ") {
                Line::from(Span::styled(
                    format!(" {rest}"),
                    Style::default()
                        .fg(theme.text)
                        .add_modifier(Modifier::BOLD),
                ))
            } else if let Some(rest) = raw.strip_prefix("## ") {
                Line::from(Span::styled(
                    format!(" {rest}"),
                    Style::default()
                        .fg(theme.accent)
                        .add_modifier(Modifier::BOLD),
                ))
            } else if let Some(rest) = raw.strip_prefix("# ") {
                Line::from(Span::styled(
                    format!(" {rest}"),
                    Style::default()
                        .fg(theme.accent)
                        .add_modifier(Modifier::BOLD),
                ))
            } else if let Some(rest) = raw.strip_prefix("- ").or_else(|| raw.strip_prefix("* ")) {
                Line::from(vec![
                    Span::styled("   \u{2022} ", Style::default().fg(theme.accent)),
                    Span::styled(rest.to_string(), Style::default().fg(theme.text)),
                ])
            } else {
                Line::from(Span::styled(
                    format!(" {raw}"),
                    Style::default().fg(theme.text),
                ))
            }
        })
        .collect()
}
