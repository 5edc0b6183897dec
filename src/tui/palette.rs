//! Color palettes for light and dark mode
//!
//! Everything drawn picks its colors from the palette selected by the
//! rendering root flag.

use ratatui::style::{Color, Modifier, Style};

/// Named colors for one visual mode
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Palette {
    pub dark: bool,
    pub background: Color,
    pub surface: Color,
    pub text: Color,
    pub muted: Color,
    pub label: Color,
    pub accent: Color,
    pub success: Color,
    pub error: Color,
    pub border: Color,
}

impl Palette {
    pub fn dark() -> Self {
        Self {
            dark: true,
            background: Color::Black,
            surface: Color::Rgb(31, 41, 55),
            text: Color::White,
            muted: Color::Gray,
            label: Color::Yellow,
            accent: Color::Cyan,
            success: Color::Green,
            error: Color::LightRed,
            border: Color::DarkGray,
        }
    }

    pub fn light() -> Self {
        Self {
            dark: false,
            background: Color::Rgb(239, 246, 255),
            surface: Color::White,
            text: Color::Black,
            muted: Color::DarkGray,
            label: Color::Rgb(55, 65, 81),
            accent: Color::Blue,
            success: Color::Rgb(22, 163, 74),
            error: Color::Red,
            border: Color::Gray,
        }
    }

    pub fn for_mode(dark: bool) -> Self {
        if dark {
            Self::dark()
        } else {
            Self::light()
        }
    }

    /// Base style for a full-screen surface
    pub fn base(&self) -> Style {
        Style::default().fg(self.text).bg(self.background)
    }

    /// Style for the modal body
    pub fn panel(&self) -> Style {
        Style::default().fg(self.text).bg(self.surface)
    }

    /// Style for a focused label or selected item
    pub fn focus(&self) -> Style {
        Style::default()
            .fg(self.accent)
            .add_modifier(Modifier::BOLD)
    }

    pub fn title(&self) -> Style {
        Style::default().fg(self.text).add_modifier(Modifier::BOLD)
    }

    /// Inverted block used to draw the text cursor
    pub fn cursor(&self) -> Style {
        Style::default().fg(self.surface).bg(self.accent)
    }

    pub fn key_hint(&self) -> Style {
        Style::default().fg(self.accent)
    }
}
