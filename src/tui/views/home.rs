//! Home view
//!
//! The landing screen: title with the dark-mode indicator, then either the
//! prompt to start onboarding or the summary of the last completed run.

use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use crate::host::CompletionRecord;
use crate::tui::app::App;
use crate::tui::layout::centered_rect_fixed;
use crate::tui::palette::Palette;

/// Render the home view
pub fn render(frame: &mut Frame, app: &App, area: Rect) {
    let p = app.palette();
    frame.render_widget(Block::default().style(p.base()), area);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage(20),
            Constraint::Length(2), // Title
            Constraint::Length(1), // Spacer
            Constraint::Min(5),    // Prompt or summary
        ])
        .split(area);

    let indicator = if p.dark { "☾ dark" } else { "☀ light" };
    let title = Line::from(vec![
        Span::styled(
            "Multi-Step Onboarding Demo",
            Style::default().fg(p.text).add_modifier(Modifier::BOLD),
        ),
        Span::raw("   "),
        Span::styled(format!("[{}]", indicator), Style::default().fg(p.accent)),
    ]);
    frame.render_widget(
        Paragraph::new(title).alignment(Alignment::Center),
        chunks[1],
    );

    match app.host.completed() {
        Some(record) => render_summary(frame, chunks[3], record, p),
        None => render_prompt(frame, chunks[3], p),
    }
}

fn render_prompt(frame: &mut Frame, area: Rect, p: Palette) {
    let lines = vec![
        Line::from(Span::styled(
            "Press Enter to start the onboarding process",
            Style::default().fg(p.muted),
        )),
        Line::from(""),
        Line::from(Span::styled(
            " Start Onboarding ",
            Style::default()
                .fg(p.surface)
                .bg(p.accent)
                .add_modifier(Modifier::BOLD),
        )),
    ];
    frame.render_widget(Paragraph::new(lines).alignment(Alignment::Center), area);
}

fn render_summary(frame: &mut Frame, area: Rect, record: &CompletionRecord, p: Palette) {
    let card = centered_rect_fixed(48, 13, area);

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(p.success))
        .style(p.panel());

    let mut lines = vec![
        Line::from(Span::styled(
            "✓ Welcome aboard!",
            Style::default().fg(p.success).add_modifier(Modifier::BOLD),
        ))
        .centered(),
        Line::from(Span::styled(
            "Your account has been created successfully.",
            Style::default().fg(p.muted),
        ))
        .centered(),
        Line::from(""),
    ];

    for (label, value) in record.summary_rows() {
        lines.push(Line::from(vec![
            Span::styled(
                format!("  {:<12}", format!("{}:", label)),
                Style::default().fg(p.text).add_modifier(Modifier::BOLD),
            ),
            Span::styled(value, Style::default().fg(p.muted)),
        ]));
    }

    lines.push(Line::from(""));
    lines.push(
        Line::from(vec![
            Span::styled("[r]", p.key_hint()),
            Span::styled(" Try Again", Style::default().fg(p.text)),
        ])
        .centered(),
    );

    frame.render_widget(Paragraph::new(lines).block(block), card);
}
