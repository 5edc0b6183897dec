//! Help dialog
//!
//! Shows keyboard shortcuts for the home screen and the wizard

use ratatui::{
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
    Frame,
};

use crate::tui::app::App;
use crate::tui::layout::centered_rect;
use crate::tui::palette::Palette;

/// Render the help dialog
pub fn render(frame: &mut Frame, app: &App) {
    let p = app.palette();
    let area = centered_rect(60, 70, frame.area());

    // Clear the background
    frame.render_widget(Clear, area);

    let block = Block::default()
        .title(" Help ")
        .title_style(p.focus())
        .borders(Borders::ALL)
        .border_style(Style::default().fg(p.accent))
        .style(p.panel());

    let paragraph = Paragraph::new(help_lines(p))
        .block(block)
        .wrap(Wrap { trim: false });

    frame.render_widget(paragraph, area);
}

fn help_lines(p: Palette) -> Vec<Line<'static>> {
    vec![
        section("Home", p),
        Line::from(""),
        key_line("Enter / s", "Start onboarding", p),
        key_line("r", "Try again after completing", p),
        key_line("t / Ctrl+T", "Toggle dark mode", p),
        key_line("?", "Show/hide help", p),
        key_line("q", "Quit application", p),
        Line::from(""),
        section("Wizard", p),
        Line::from(""),
        key_line("Tab / ↓", "Next field", p),
        key_line("Shift+Tab / ↑", "Previous field", p),
        key_line("Enter", "Next step / Complete setup", p),
        key_line("Ctrl+B", "Previous step", p),
        key_line("F1-F3, Alt+1-3", "Jump to a completed step", p),
        key_line("Space / ←/→", "Change a preference", p),
        key_line("Ctrl+T", "Toggle dark mode", p),
        key_line("Esc", "Close and discard", p),
    ]
}

fn section(title: &'static str, p: Palette) -> Line<'static> {
    Line::from(Span::styled(
        title,
        Style::default().fg(p.label).add_modifier(Modifier::BOLD),
    ))
}

fn key_line(key: &'static str, description: &'static str, p: Palette) -> Line<'static> {
    Line::from(vec![
        Span::styled(format!("{:>16}", key), Style::default().fg(p.accent)),
        Span::raw("  "),
        Span::styled(description, Style::default().fg(p.text)),
    ])
}
