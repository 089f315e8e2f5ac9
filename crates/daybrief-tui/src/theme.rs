use ratatui::style::{Color, Modifier, Style};

/// Color theme for the reader.
pub struct Theme {
    pub accent: Color,
    pub text: Color,
    pub dim: Color,
    pub border: Color,
    pub highlight_bg: Color,
    pub header_fg: Color,
    pub header_bg: Color,
    pub disabled: Color,
    pub link: Color,
}

impl Theme {
    /// Newsprint look: masthead red over the terminal's default background.
    pub fn paper() -> Self {
        Self {
            accent: Color::Rgb(178, 34, 34),
            text: Color::Reset,
            dim: Color::DarkGray,
            border: Color::DarkGray,
            highlight_bg: Color::Rgb(60, 30, 30),
            header_fg: Color::White,
            header_bg: Color::Rgb(178, 34, 34),
            disabled: Color::DarkGray,
            link: Color::Rgb(120, 120, 140),
        }
    }

    /// Dark theme: white text, electric blue accents.
    pub fn dark() -> Self {
        Self {
            accent: Color::Rgb(60, 140, 255),
            text: Color::White,
            dim: Color::Rgb(120, 120, 140),
            border: Color::Rgb(60, 60, 80),
            highlight_bg: Color::Rgb(30, 40, 80),
            header_fg: Color::White,
            header_bg: Color::Rgb(30, 60, 120),
            disabled: Color::Rgb(80, 80, 100),
            link: Color::Rgb(120, 120, 140),
        }
    }

    pub fn by_name(name: &str) -> Self {
        match name {
            "dark" => Self::dark(),
            _ => Self::paper(),
        }
    }

    pub fn header_style(&self) -> Style {
        Style::default()
            .fg(self.header_fg)
            .bg(self.header_bg)
            .add_modifier(Modifier::BOLD)
    }
}
