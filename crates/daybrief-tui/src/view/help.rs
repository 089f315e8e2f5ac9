use ratatui::Frame;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Clear, Paragraph, Wrap};

use crate::theme::Theme;
use crate::view::centered_rect;

/// Render the help overlay as a centered popup.
pub fn render(f: &mut Frame, theme: &Theme) {
    let popup = centered_rect(56, 22, f.area());

    let lines = vec![
        Line::from(Span::styled(
            " Keyboard Shortcuts ",
            theme.header_style(),
        )),
        Line::from(""),
        section_header("Dates", theme),
        key_line("Ctrl+d", "Jump to today's briefing", theme),
        key_line("Ctrl+p / \u{2193}", "Previous (older) briefing", theme),
        key_line("Ctrl+n / \u{2191}", "Next (newer) briefing", theme),
        key_line("c", "Open the calendar", theme),
        Line::from(""),
        section_header("Calendar", theme),
        key_line("\u{2190}\u{2191}\u{2193}\u{2192} / hjkl", "Move the cursor", theme),
        key_line("[ / ]", "Previous / next month", theme),
        key_line("Enter", "Select the day under the cursor", theme),
        key_line("Esc", "Close without selecting", theme),
        Line::from(""),
        section_header("View", theme),
        key_line("j / k", "Scroll the briefing", theme),
        key_line("g / G", "Top / bottom", theme),
        key_line("Tab", "Toggle the date panel", theme),
        key_line("t", "Cycle theme", theme),
        key_line("Ctrl+s", "Save config", theme),
        Line::from(""),
        section_header("Global", theme),
        key_line("?", "Toggle this help", theme),
        key_line("q / Ctrl+c", "Quit", theme),
    ];

    let paragraph = Paragraph::new(lines)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(theme.accent))
                .title(" Help "),
        )
        .wrap(Wrap { trim: false });

    f.render_widget(Clear, popup);
    f.render_widget(paragraph, popup);
}

fn section_header<'a>(title: &'a str, theme: &Theme) -> Line<'a> {
    Line::from(Span::styled(
        format!("  {title}"),
        Style::default()
            .fg(theme.accent)
            .add_modifier(Modifier::BOLD),
    ))
}

fn key_line<'a>(key: &'a str, desc: &'a str, theme: &Theme) -> Line<'a> {
    Line::from(vec![
        Span::styled(format!("    {key:<16}"), Style::default().fg(theme.text)),
        Span::styled(desc, Style::default().fg(theme.dim)),
    ])
}
