//! Status bar view
//!
//! Shows the current step or screen, the last status message, and key hints

use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

use crate::tui::app::App;

/// Render the status bar
pub fn render(frame: &mut Frame, app: &App, area: Rect) {
    let p = app.palette();
    let mut spans = vec![];

    let location = match app.current_step() {
        Some(step) => format!(" Step {}/3: {} ", step.number(), step.title()),
        None if app.host.completed().is_some() => " Completed ".to_string(),
        None => " Home ".to_string(),
    };
    spans.push(Span::styled(
        location,
        Style::default()
            .fg(p.surface)
            .bg(p.accent)
            .add_modifier(Modifier::BOLD),
    ));

    if let Some(ref message) = app.status_message {
        spans.push(Span::raw(" │ "));
        spans.push(Span::styled(message.as_str(), Style::default().fg(p.label)));
    }

    let hints = if app.modal.is_open() {
        " Esc:Close  Ctrl+T:Theme  ?:Help "
    } else {
        " q:Quit  t:Theme  ?:Help "
    };

    let left_len: usize = spans.iter().map(|s| s.content.chars().count()).sum();
    let padding_len = (area.width as usize).saturating_sub(left_len + hints.len());
    spans.push(Span::raw(" ".repeat(padding_len.max(1))));
    spans.push(Span::styled(hints, Style::default().fg(p.muted)));

    frame.render_widget(
        Paragraph::new(Line::from(spans)).style(Style::default().bg(p.surface)),
        area,
    );
}
