use owo_colors::OwoColorize;

use daybrief_core::{ContentDocument, IndexEntry, date};

/// Whether to color terminal output.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColorMode {
    Colored,
    Plain,
}

impl ColorMode {
    pub fn from_flag(no_color: bool) -> Self {
        if no_color { Self::Plain } else { Self::Colored }
    }
}

/// Print the briefing index, one date per line.
pub fn print_index(entries: &[IndexEntry], color: ColorMode) {
    for entry in entries {
        let iso = date::format_iso(entry.date);
        match color {
            ColorMode::Colored => println!("{}  {}", iso.bold(), entry.title.dimmed()),
            ColorMode::Plain => println!("{iso}  {}", entry.title),
        }
    }
}

/// Print one briefing: a dateline header followed by the body.
pub fn print_briefing(day: chrono::NaiveDate, doc: &ContentDocument, color: ColorMode) {
    let dateline = date::format_full(day);
    match color {
        ColorMode::Colored => println!("{}\n", dateline.bold().underline()),
        ColorMode::Plain => println!("{dateline}\n"),
    }

    match doc {
        ContentDocument::Structured(sections) => {
            for section in sections {
                match color {
                    ColorMode::Colored => println!("{}", section.title.bold().red()),
                    ColorMode::Plain => println!("{}", section.title),
                }
                println!();
                for story in &section.stories {
                    match color {
                        ColorMode::Colored => println!("  {}", story.headline.bold()),
                        ColorMode::Plain => println!("  {}", story.headline),
                    }
                    println!("  {}", story.body);
                    if !story.sources.is_empty() {
                        let names: Vec<&str> =
                            story.sources.iter().map(|s| s.name.as_str()).collect();
                        let joined = names.join(" \u{00B7} ");
                        match color {
                            ColorMode::Colored => println!("  {}", joined.dimmed()),
                            ColorMode::Plain => println!("  {joined}"),
                        }
                    }
                    println!();
                }
            }
        }
        ContentDocument::Markup(text) => {
            for line in text.lines() {
                if let Some(rest) = line.strip_prefix("# ") {
                    match color {
                        ColorMode::Colored => println!("{}", rest.bold().red()),
                        ColorMode::Plain => println!("{rest}"),
                    }
                } else if let Some(rest) = line.strip_prefix("## ") {
                    match color {
                        ColorMode::Colored => println!("{}", rest.bold()),
                        ColorMode::Plain => println!("{rest}"),
                    }
                } else {
                    println!("{line}");
                }
            }
        }
    }
}
