//! Personal info step view

use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    Frame,
};

use super::{render_heading, render_text_field, StepContext};
use crate::tui::app::FormField;

pub fn render(frame: &mut Frame, area: Rect, ctx: &StepContext) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(2), // Heading
            Constraint::Length(1), // Spacer
            Constraint::Length(1), // Full name
            Constraint::Length(1), // Full name error
            Constraint::Length(1), // Spacer
            Constraint::Length(1), // Email
            Constraint::Length(1), // Email error
            Constraint::Min(0),
        ])
        .split(area);

    render_heading(
        frame,
        chunks[0],
        "Personal Information",
        "Let's start with some basic information about you",
        ctx.palette,
    );

    render_text_field(
        frame,
        chunks[2],
        chunks[3],
        ctx,
        FormField::FullName,
        "Full Name *",
        "Enter your full name",
    );
    render_text_field(
        frame,
        chunks[5],
        chunks[6],
        ctx,
        FormField::Email,
        "Email Address *",
        "Enter your email address",
    );
}
