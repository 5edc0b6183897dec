//! TUI Views module
//!
//! The home screen and status bar, with the wizard and help dialogs drawn
//! on top when open.

pub mod home;
pub mod status_bar;

use ratatui::Frame;

use super::app::App;
use super::dialogs;
use super::layout::AppLayout;

/// Render the entire application
pub fn render(frame: &mut Frame, app: &App) {
    let layout = AppLayout::new(frame.area());

    home::render(frame, app, layout.main);
    status_bar::render(frame, app, layout.status_bar);

    if app.modal.is_open() {
        dialogs::onboarding::render(frame, app);
    }

    if app.show_help {
        dialogs::help::render(frame, app);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Settings;
    use crate::storage::MemoryStore;
    use crate::theme::{FixedScheme, RootFlag, ThemeHandle, ThemeStore};
    use ratatui::{backend::TestBackend, buffer::Buffer, Terminal};

    fn app() -> App {
        let theme = ThemeHandle::new(ThemeStore::new(
            Box::new(MemoryStore::new()),
            Box::new(FixedScheme(true)),
            RootFlag::default(),
        ));
        App::new(theme, &Settings::default())
    }

    fn draw(app: &App) -> String {
        let mut terminal = Terminal::new(TestBackend::new(100, 30)).unwrap();
        terminal.draw(|frame| render(frame, app)).unwrap();
        buffer_text(terminal.backend().buffer())
    }

    fn buffer_text(buf: &Buffer) -> String {
        let area = buf.area;
        let mut out = String::new();
        for y in area.top()..area.bottom() {
            for x in area.left()..area.right() {
                out.push_str(buf[(x, y)].symbol());
            }
            out.push('\n');
        }
        out
    }

    #[test]
    fn test_home_screen() {
        let text = draw(&app());
        assert!(text.contains("Multi-Step Onboarding Demo"));
        assert!(text.contains("Start Onboarding"));
        assert!(text.contains("Home"));
    }

    #[test]
    fn test_wizard_shows_errors_after_failed_advance() {
        let mut app = app();
        app.start_onboarding();
        app.advance();

        let text = draw(&app);
        assert!(text.contains("Create Your Account"));
        assert!(text.contains("Personal Information"));
        assert!(text.contains("Full name is required"));
        assert!(text.contains("Email is required"));
    }

    #[test]
    fn test_completed_tab_and_masked_password() {
        let mut app = app();
        app.start_onboarding();
        for c in "Jane Doe".chars() {
            app.edit_focused(|i| i.insert(c));
        }
        app.next_field();
        for c in "jane@x.com".chars() {
            app.edit_focused(|i| i.insert(c));
        }
        app.advance();
        app.next_field();
        for c in "secret99".chars() {
            app.edit_focused(|i| i.insert(c));
        }

        let text = draw(&app);
        assert!(text.contains("✓ Personal Info"));
        assert!(text.contains("Account Setup"));
        assert!(!text.contains("secret99"));
    }
}
