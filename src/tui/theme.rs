use ratatui::style::{Color, Modifier, Style};

use crate::models::{PrayerStatus, Theme};

/// Colours for one theme. Emerald accents on slate, as in the light and
/// dark modes of the dashboard.
#[derive(Debug, Clone, Copy)]
pub struct Palette {
    pub bg: Color,
    pub surface: Color,
    pub border: Color,
    pub text: Color,
    pub text_dim: Color,
    pub accent: Color,
    pub blue: Color,
    pub amber: Color,
    pub rose: Color,
}

pub const DARK: Palette = Palette {
    bg: Color::Rgb(15, 23, 42),
    surface: Color::Rgb(30, 41, 59),
    border: Color::Rgb(51, 65, 85),
    text: Color::Rgb(226, 232, 240),
    text_dim: Color::Rgb(100, 116, 139),
    accent: Color::Rgb(52, 211, 153),
    blue: Color::Rgb(96, 165, 250),
    amber: Color::Rgb(251, 191, 36),
    rose: Color::Rgb(251, 113, 133),
};

pub const LIGHT: Palette = Palette {
    bg: Color::Rgb(248, 250, 252),
    surface: Color::Rgb(255, 255, 255),
    border: Color::Rgb(226, 232, 240),
    text: Color::Rgb(30, 41, 59),
    text_dim: Color::Rgb(100, 116, 139),
    accent: Color::Rgb(4, 120, 87),
    blue: Color::Rgb(29, 78, 216),
    amber: Color::Rgb(180, 83, 9),
    rose: Color::Rgb(190, 18, 60),
};

pub fn palette(theme: Theme) -> Palette {
    match theme {
        Theme::Light => LIGHT,
        Theme::Dark => DARK,
    }
}

impl Palette {
    pub fn base(&self) -> Style {
        Style::default().fg(self.text).bg(self.bg)
    }

    pub fn surface(&self) -> Style {
        Style::default().fg(self.text).bg(self.surface)
    }

    pub fn border(&self) -> Style {
        Style::default().fg(self.border)
    }

    pub fn dim(&self) -> Style {
        Style::default().fg(self.text_dim)
    }

    pub fn bold(&self) -> Style {
        Style::default().fg(self.text).add_modifier(Modifier::BOLD)
    }

    pub fn accent(&self) -> Style {
        Style::default().fg(self.accent)
    }

    pub fn blue(&self) -> Style {
        Style::default().fg(self.blue)
    }

    pub fn amber(&self) -> Style {
        Style::default().fg(self.amber)
    }

    pub fn rose(&self) -> Style {
        Style::default().fg(self.rose)
    }

    pub fn status(&self, status: PrayerStatus) -> Style {
        match status {
            PrayerStatus::Jamaah => self.accent(),
            PrayerStatus::Sendiri => self.blue(),
            PrayerStatus::Missed => self.rose(),
            PrayerStatus::None => self.dim(),
        }
    }
}
