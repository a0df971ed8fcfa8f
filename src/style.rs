use crate::configuration::ColorMode;
use colored::Color;
use std::fmt::Display;

/// Text roles used by diagnostics and reports.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Style {
    Ok,
    Fail,
    Title,
    Muted,
}

impl Style {
    fn sgr(self) -> String {
        match self {
            Style::Ok => format!("1;{}", Color::Green.to_fg_str()),
            Style::Fail => format!("1;{}", Color::Red.to_fg_str()),
            Style::Title => "1".to_string(),
            Style::Muted => Color::BrightBlack.to_fg_str().into_owned(),
        }
    }
}

/// Resolves a [`Style`] to escape codes or to nothing at all.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct Palette {
    enabled: bool,
}

impl Palette {
    pub fn new(mode: ColorMode) -> Self {
        let enabled = match mode {
            ColorMode::Always => true,
            ColorMode::Never => false,
            // NO_COLOR, CLICOLOR(_FORCE) and tty detection
            ColorMode::Auto => colored::control::SHOULD_COLORIZE.should_colorize(),
        };
        Self { enabled }
    }

    pub fn plain() -> Self {
        Self { enabled: false }
    }

    pub fn enabled(&self) -> bool {
        self.enabled
    }

    pub fn paint(&self, style: Style, text: impl Display) -> String {
        if self.enabled {
            // colored's on/off override is process-wide; this switch is per palette
            format!("\x1b[{}m{}\x1b[0m", style.sgr(), text)
        } else {
            text.to_string()
        }
    }
}

impl Default for Palette {
    fn default() -> Self {
        Self::new(ColorMode::Auto)
    }
}
