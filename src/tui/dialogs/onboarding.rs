//! Onboarding wizard dialog
//!
//! The wizard shell: progress tabs across the top, the active step view in
//! the middle, and navigation hints along the bottom.

use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};

use crate::models::Step;
use crate::tui::app::App;
use crate::tui::layout::{centered_rect_fixed, WizardLayout};
use crate::tui::palette::Palette;
use crate::tui::steps::{self, StepContext};
use crate::wizard::{StepStatus, Wizard};

/// Render the wizard dialog, if open
pub fn render(frame: &mut Frame, app: &App) {
    let Some(wizard) = app.modal.wizard() else {
        return;
    };
    let p = app.palette();
    let area = centered_rect_fixed(76, 22, frame.area());

    // Clear the background
    frame.render_widget(Clear, area);

    let block = Block::default()
        .title(" Create Your Account ")
        .title_style(p.title())
        .title_bottom(Line::from(" Esc close ").right_aligned())
        .borders(Borders::ALL)
        .border_style(Style::default().fg(p.accent))
        .style(p.panel());
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let inner = Rect {
        x: inner.x + 1,
        width: inner.width.saturating_sub(2),
        ..inner
    };
    let layout = WizardLayout::new(inner);

    render_progress(frame, layout.progress, wizard, p);

    let step = wizard.current_step();
    let ctx = StepContext {
        form: wizard.form(),
        inputs: &app.inputs,
        errors: wizard.errors_for(step),
        focused: app.focused_field(),
        palette: p,
        show_password_hint: app.show_password_hint,
    };
    steps::render(frame, layout.content, step, &ctx);

    render_footer(frame, layout.footer, step, p);
}

/// Tab label and style for a step in the progress indicator
fn tab_appearance(step: Step, status: StepStatus, p: Palette) -> (String, Style, Style) {
    match status {
        StepStatus::Current => (
            format!("{} {}", step.number(), step.title()),
            Style::default().fg(p.accent).add_modifier(Modifier::BOLD),
            Style::default().fg(p.accent),
        ),
        StepStatus::Completed => (
            format!("✓ {}", step.title()),
            Style::default().fg(p.success),
            Style::default().fg(p.success),
        ),
        StepStatus::Upcoming => (
            format!("{} {}", step.number(), step.title()),
            Style::default().fg(p.muted),
            Style::default().fg(p.border),
        ),
    }
}

fn render_progress(frame: &mut Frame, area: Rect, wizard: &Wizard, p: Palette) {
    let tabs = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Ratio(1, 3); 3])
        .split(area);

    for (step, tab_area) in Step::ALL.into_iter().zip(tabs.iter()) {
        let (label, text_style, border_style) = tab_appearance(step, wizard.status(step), p);
        let tab = Paragraph::new(Line::from(Span::styled(label, text_style)))
            .alignment(Alignment::Center)
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_style(border_style),
            );
        frame.render_widget(tab, *tab_area);
    }
}

fn render_footer(frame: &mut Frame, area: Rect, step: Step, p: Palette) {
    let back_style = if step.prev().is_some() {
        p.key_hint()
    } else {
        Style::default().fg(p.border)
    };

    let forward = if step.is_last() {
        " Complete Setup"
    } else {
        " Next"
    };

    let hints = Line::from(vec![
        Span::styled("[Ctrl+B]", back_style),
        Span::styled(" Back  ", Style::default().fg(p.muted)),
        Span::styled("[Tab]", p.key_hint()),
        Span::styled(" Field  ", Style::default().fg(p.muted)),
        Span::styled("[F1-F3]", p.key_hint()),
        Span::styled(" Step  ", Style::default().fg(p.muted)),
        Span::styled("[Enter]", Style::default().fg(p.success)),
        Span::styled(forward, Style::default().fg(p.text)),
    ]);
    frame.render_widget(Paragraph::new(hints).alignment(Alignment::Right), area);
}
