//! Account setup step view

use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::Style,
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

use super::{render_heading, render_text_field, StepContext};
use crate::tui::app::FormField;
use crate::wizard::validate::MIN_PASSWORD_LEN;

pub fn render(frame: &mut Frame, area: Rect, ctx: &StepContext) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(2), // Heading
            Constraint::Length(1), // Spacer
            Constraint::Length(1), // Username
            Constraint::Length(1), // Username error
            Constraint::Length(1), // Spacer
            Constraint::Length(1), // Password
            Constraint::Length(1), // Password error
            Constraint::Length(1), // Password hint
            Constraint::Min(0),
        ])
        .split(area);

    render_heading(
        frame,
        chunks[0],
        "Account Setup",
        "Create your account credentials",
        ctx.palette,
    );

    render_text_field(
        frame,
        chunks[2],
        chunks[3],
        ctx,
        FormField::Username,
        "Username *",
        "Choose a username",
    );
    render_text_field(
        frame,
        chunks[5],
        chunks[6],
        ctx,
        FormField::Password,
        "Password *",
        "Create a secure password",
    );

    if ctx.show_password_hint {
        let hint = Line::from(Span::styled(
            format!(
                "  Password must be at least {} characters long",
                MIN_PASSWORD_LEN
            ),
            Style::default().fg(ctx.palette.muted),
        ));
        frame.render_widget(Paragraph::new(hint), chunks[7]);
    }
}
