//! Step views
//!
//! One view per wizard step. Views only draw a slice of the form; edits
//! are routed back to the wizard by the key handler.

pub mod account;
pub mod personal;
pub mod preferences;

use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

use crate::models::{Field, FieldErrors, FormData, Step};
use crate::tui::app::{FormField, FormInputs};
use crate::tui::palette::Palette;
use crate::tui::widgets::TextField;

/// Everything a step view needs to draw itself
pub struct StepContext<'a> {
    pub form: &'a FormData,
    pub inputs: &'a FormInputs,
    pub errors: Option<&'a FieldErrors>,
    pub focused: Option<FormField>,
    pub palette: Palette,
    pub show_password_hint: bool,
}

impl StepContext<'_> {
    fn error(&self, field: Field) -> Option<&str> {
        self.errors.and_then(|errors| errors.get(field))
    }

    fn is_focused(&self, field: FormField) -> bool {
        self.focused == Some(field)
    }
}

/// Render the view for `step`
pub fn render(frame: &mut Frame, area: Rect, step: Step, ctx: &StepContext) {
    match step {
        Step::PersonalInfo => personal::render(frame, area, ctx),
        Step::AccountSetup => account::render(frame, area, ctx),
        Step::Preferences => preferences::render(frame, area, ctx),
    }
}

/// Heading and subtitle, two lines
fn render_heading(frame: &mut Frame, area: Rect, title: &str, subtitle: &str, p: Palette) {
    let lines = vec![
        Line::from(Span::styled(
            title.to_string(),
            Style::default().fg(p.text).add_modifier(Modifier::BOLD),
        ))
        .centered(),
        Line::from(Span::styled(subtitle.to_string(), Style::default().fg(p.muted))).centered(),
    ];
    frame.render_widget(Paragraph::new(lines), area);
}

/// A labelled text input with its error line underneath
fn render_text_field(
    frame: &mut Frame,
    field_area: Rect,
    error_area: Rect,
    ctx: &StepContext,
    field: FormField,
    label: &str,
    placeholder: &str,
) {
    let Some(input) = ctx.inputs.get(field) else {
        return;
    };
    let error = field.validated().and_then(|f| ctx.error(f));

    let widget = TextField::new(input, label, ctx.palette)
        .placeholder(placeholder)
        .focused(ctx.is_focused(field))
        .masked(field == FormField::Password)
        .invalid(error.is_some());
    frame.render_widget(widget, field_area);

    if let Some(message) = error {
        let line = Line::from(Span::styled(
            format!("  {}", message),
            Style::default().fg(ctx.palette.error),
        ));
        frame.render_widget(Paragraph::new(line), error_area);
    }
}
