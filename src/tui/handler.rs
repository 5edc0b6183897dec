//! Event handler for the TUI
//!
//! Routes keyboard events to the appropriate handlers based on the current
//! application state.

use anyhow::Result;
use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

use super::app::{App, FormField};
use super::event::Event;
use crate::models::Step;

/// Handle an incoming event
pub fn handle_event(app: &mut App, event: Event) -> Result<()> {
    match event {
        Event::Key(key) => handle_key_event(app, key),
        Event::Mouse(_) | Event::Resize(_, _) | Event::Tick => Ok(()),
    }
}

/// Handle a key event
fn handle_key_event(app: &mut App, key: KeyEvent) -> Result<()> {
    // Windows reports releases too
    if key.kind == KeyEventKind::Release {
        return Ok(());
    }

    if key.modifiers.contains(KeyModifiers::CONTROL) {
        match key.code {
            KeyCode::Char('c') => {
                app.quit();
                return Ok(());
            }
            KeyCode::Char('t') => {
                app.toggle_dark_mode();
                return Ok(());
            }
            _ => {}
        }
    }

    if app.show_help {
        if matches!(key.code, KeyCode::Esc | KeyCode::Char('?') | KeyCode::Char('q')) {
            app.show_help = false;
        }
        return Ok(());
    }

    if app.modal.is_open() {
        handle_wizard_key(app, key)
    } else {
        handle_home_key(app, key)
    }
}

/// Handle keys on the home screen
fn handle_home_key(app: &mut App, key: KeyEvent) -> Result<()> {
    match key.code {
        KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc => app.quit(),
        KeyCode::Char('?') => app.show_help = true,
        KeyCode::Char('t') => app.toggle_dark_mode(),
        KeyCode::Enter | KeyCode::Char('s') if app.host.completed().is_none() => {
            app.start_onboarding()
        }
        KeyCode::Char('r') if app.host.completed().is_some() => app.try_again(),
        _ => {}
    }
    Ok(())
}

/// Step addressed by a jump key, if any
fn jump_target(key: &KeyEvent) -> Option<Step> {
    match key.code {
        KeyCode::F(n) if n <= 3 => Step::from_number(n),
        KeyCode::Char(c) if key.modifiers.contains(KeyModifiers::ALT) => {
            c.to_digit(10).and_then(|d| Step::from_number(d as u8))
        }
        _ => None,
    }
}

/// Handle keys while the wizard is open
fn handle_wizard_key(app: &mut App, key: KeyEvent) -> Result<()> {
    if let Some(step) = jump_target(&key) {
        app.jump_to(step);
        return Ok(());
    }

    let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);
    let alt = key.modifiers.contains(KeyModifiers::ALT);

    match key.code {
        KeyCode::Esc => app.dismiss_wizard(),

        KeyCode::Char('b') if ctrl => app.retreat(),
        KeyCode::Left if alt => app.retreat(),
        KeyCode::Right if alt => app.advance(),

        KeyCode::Enter => {
            if app.current_step().is_some_and(Step::is_last) {
                app.complete();
            } else {
                app.advance();
            }
        }

        KeyCode::Tab | KeyCode::Down => app.next_field(),
        KeyCode::BackTab | KeyCode::Up => app.prev_field(),

        _ => match app.focused_field() {
            Some(field) if field.is_text() => handle_text_key(app, key),
            Some(field) => handle_preference_key(app, field, key),
            None => {}
        },
    }

    Ok(())
}

/// Editing keys for a focused text input
fn handle_text_key(app: &mut App, key: KeyEvent) {
    if key
        .modifiers
        .intersects(KeyModifiers::CONTROL | KeyModifiers::ALT)
    {
        return;
    }

    match key.code {
        KeyCode::Char(c) => app.edit_focused(|input| input.insert(c)),
        KeyCode::Backspace => app.edit_focused(|input| input.backspace()),
        KeyCode::Delete => app.edit_focused(|input| input.delete()),
        KeyCode::Left => app.edit_focused(|input| input.move_left()),
        KeyCode::Right => app.edit_focused(|input| input.move_right()),
        KeyCode::Home => app.edit_focused(|input| input.move_start()),
        KeyCode::End => app.edit_focused(|input| input.move_end()),
        _ => {}
    }
}

/// Keys for the theme selector and newsletter checkbox
fn handle_preference_key(app: &mut App, field: FormField, key: KeyEvent) {
    match (field, key.code) {
        (FormField::Theme, KeyCode::Left | KeyCode::Right | KeyCode::Char(' ')) => {
            app.toggle_focused_preference()
        }
        (FormField::Newsletter, KeyCode::Char(' ')) => app.toggle_focused_preference(),
        _ => {}
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Settings;
    use crate::models::Theme;
    use crate::storage::MemoryStore;
    use crate::theme::{FixedScheme, RootFlag, ThemeHandle, ThemeStore};

    fn app() -> App {
        let theme = ThemeHandle::new(ThemeStore::new(
            Box::new(MemoryStore::new()),
            Box::new(FixedScheme(true)),
            RootFlag::default(),
        ));
        App::new(theme, &Settings::default())
    }

    fn press(app: &mut App, code: KeyCode) {
        press_with(app, code, KeyModifiers::NONE);
    }

    fn press_with(app: &mut App, code: KeyCode, modifiers: KeyModifiers) {
        handle_event(app, Event::Key(KeyEvent::new(code, modifiers))).unwrap();
    }

    fn type_text(app: &mut App, text: &str) {
        for c in text.chars() {
            press(app, KeyCode::Char(c));
        }
    }

    #[test]
    fn test_quit_from_home() {
        let mut app = app();
        press(&mut app, KeyCode::Char('q'));
        assert!(app.should_quit);
    }

    #[test]
    fn test_typing_q_in_wizard_does_not_quit() {
        let mut app = app();
        press(&mut app, KeyCode::Enter);
        type_text(&mut app, "quinn");
        assert!(!app.should_quit);
        assert_eq!(app.inputs.full_name.value(), "quinn");
    }

    #[test]
    fn test_full_keyboard_flow() {
        let mut app = app();
        press(&mut app, KeyCode::Enter);
        assert!(app.modal.is_open());

        type_text(&mut app, "Jane Doe");
        press(&mut app, KeyCode::Tab);
        type_text(&mut app, "jane@x.com");
        press(&mut app, KeyCode::Enter);
        assert_eq!(app.current_step(), Some(Step::AccountSetup));

        type_text(&mut app, "janed");
        press(&mut app, KeyCode::Tab);
        type_text(&mut app, "password123");
        press(&mut app, KeyCode::Enter);
        assert_eq!(app.current_step(), Some(Step::Preferences));

        press(&mut app, KeyCode::Right);
        press(&mut app, KeyCode::Down);
        press(&mut app, KeyCode::Char(' '));
        press(&mut app, KeyCode::Enter);

        assert!(!app.modal.is_open());
        let data = &app.host.completed().unwrap().data;
        assert_eq!(data.personal_info.full_name, "Jane Doe");
        assert_eq!(data.account_setup.password, "password123");
        assert_eq!(data.preferences.theme, Theme::Light);
        assert!(data.preferences.newsletter);
    }

    #[test]
    fn test_jump_keys() {
        let mut app = app();
        press(&mut app, KeyCode::Enter);

        press(&mut app, KeyCode::F(3));
        assert_eq!(app.current_step(), Some(Step::PersonalInfo));

        type_text(&mut app, "Jane");
        press(&mut app, KeyCode::Tab);
        type_text(&mut app, "jane@x.com");
        press(&mut app, KeyCode::Enter);
        press_with(&mut app, KeyCode::Char('1'), KeyModifiers::ALT);
        assert_eq!(app.current_step(), Some(Step::PersonalInfo));
        assert_eq!(app.inputs.full_name.value(), "Jane");
    }

    #[test]
    fn test_back_and_escape() {
        let mut app = app();
        press(&mut app, KeyCode::Enter);
        type_text(&mut app, "Jane");
        press(&mut app, KeyCode::Tab);
        type_text(&mut app, "jane@x.com");
        press(&mut app, KeyCode::Enter);

        press_with(&mut app, KeyCode::Char('b'), KeyModifiers::CONTROL);
        assert_eq!(app.current_step(), Some(Step::PersonalInfo));

        press(&mut app, KeyCode::Esc);
        assert!(!app.modal.is_open());
        assert!(app.host.completed().is_none());
        assert!(!app.should_quit);
    }

    #[test]
    fn test_try_again_only_after_completion() {
        let mut app = app();
        press(&mut app, KeyCode::Char('r'));
        assert!(!app.modal.is_open());
    }

    #[test]
    fn test_ctrl_t_toggles_theme_inside_wizard() {
        let mut app = app();
        press(&mut app, KeyCode::Enter);
        press_with(&mut app, KeyCode::Char('t'), KeyModifiers::CONTROL);
        assert!(!app.palette().dark);
        assert_eq!(app.inputs.full_name.value(), "");
    }

    #[test]
    fn test_help_toggle() {
        let mut app = app();
        press(&mut app, KeyCode::Char('?'));
        assert!(app.show_help);
        press(&mut app, KeyCode::Char('q'));
        assert!(!app.show_help);
        assert!(!app.should_quit);
    }
}
