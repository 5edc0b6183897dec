//! Preferences step view
//!
//! Theme selector and newsletter checkbox. Nothing here is validated.

use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

use super::{render_heading, StepContext};
use crate::models::Theme;
use crate::tui::app::FormField;

pub fn render(frame: &mut Frame, area: Rect, ctx: &StepContext) {
    let p = ctx.palette;
    let prefs = ctx.form.preferences;

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(2), // Heading
            Constraint::Length(1), // Spacer
            Constraint::Length(1), // Theme
            Constraint::Length(1), // Spacer
            Constraint::Length(1), // Newsletter
            Constraint::Length(1), // Newsletter description
            Constraint::Min(0),
        ])
        .split(area);

    render_heading(
        frame,
        chunks[0],
        "Preferences",
        "Customize your experience",
        p,
    );

    let theme_focused = ctx.is_focused(FormField::Theme);
    let label_style = |focused: bool| {
        if focused {
            p.focus()
        } else {
            Style::default().fg(p.label)
        }
    };
    let option = |theme: Theme| {
        let selected = prefs.theme == theme;
        let marker = if selected { "(•)" } else { "( )" };
        let style = if selected {
            Style::default().fg(p.accent).add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(p.text)
        };
        Span::styled(format!("{} {}  ", marker, theme), style)
    };

    let mut theme_line = vec![
        Span::styled("Theme Preference: ", label_style(theme_focused)),
        option(Theme::Light),
        option(Theme::Dark),
    ];
    if theme_focused {
        theme_line.push(Span::styled("(←/→ to change)", Style::default().fg(p.muted)));
    }
    frame.render_widget(Paragraph::new(Line::from(theme_line)), chunks[2]);

    let newsletter_focused = ctx.is_focused(FormField::Newsletter);
    let checkbox = if prefs.newsletter { "[x]" } else { "[ ]" };
    let mut newsletter_line = vec![
        Span::styled(format!("{} ", checkbox), Style::default().fg(p.text)),
        Span::styled("Subscribe to newsletter", label_style(newsletter_focused)),
    ];
    if newsletter_focused {
        newsletter_line.push(Span::styled(" (Space to toggle)", Style::default().fg(p.muted)));
    }
    frame.render_widget(Paragraph::new(Line::from(newsletter_line)), chunks[4]);

    let description = Line::from(Span::styled(
        "    Get updates about new features and product announcements",
        Style::default().fg(p.muted),
    ));
    frame.render_widget(Paragraph::new(description), chunks[5]);
}
