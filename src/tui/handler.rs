//! Event handler for the TUI
//!
//! Routes key presses to the open dialog or to the calculator form.

use anyhow::Result;
use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

use super::app::{ActiveDialog, App, FormField};
use super::event::Event;

/// Handle an incoming event
pub fn handle_event(app: &mut App, event: Event) -> Result<()> {
    match event {
        Event::Key(key) if key.kind == KeyEventKind::Press => handle_key_event(app, key),
        Event::Key(_) | Event::Resize(_, _) => Ok(()),
        Event::Tick => {
            app.clear_expired_notification();
            Ok(())
        }
    }
}

/// Handle a key event
fn handle_key_event(app: &mut App, key: KeyEvent) -> Result<()> {
    let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);

    if ctrl && key.code == KeyCode::Char('c') {
        app.quit();
        return Ok(());
    }

    if app.has_dialog() {
        return handle_dialog_key(app, key);
    }

    // Global keys
    match key.code {
        KeyCode::Esc => {
            app.quit();
            return Ok(());
        }
        KeyCode::F(1) => {
            app.open_dialog(ActiveDialog::Help);
            return Ok(());
        }
        KeyCode::Char('e') if ctrl => {
            app.open_dialog(ActiveDialog::Export);
            return Ok(());
        }
        KeyCode::Char('p') if ctrl => {
            app.print_document();
            return Ok(());
        }
        KeyCode::Tab | KeyCode::Down => {
            app.focus_next();
            return Ok(());
        }
        KeyCode::BackTab | KeyCode::Up => {
            app.focus_prev();
            return Ok(());
        }
        _ => {}
    }

    if app.focused == FormField::Plan {
        handle_plan_key(app, key);
    } else {
        handle_editing_key(app, key);
    }
    Ok(())
}

/// Keys on the plan selector
fn handle_plan_key(app: &mut App, key: KeyEvent) {
    match key.code {
        KeyCode::Left | KeyCode::Right | KeyCode::Char(' ') => app.toggle_plan(),
        KeyCode::Enter => app.focus_next(),
        _ => {}
    }
}

/// Keys while a text field is focused
fn handle_editing_key(app: &mut App, key: KeyEvent) {
    match key.code {
        KeyCode::Char(c) if !key.modifiers.contains(KeyModifiers::CONTROL) => {
            app.edit(|input| input.insert(c));
        }
        KeyCode::Backspace => app.edit(|input| input.backspace()),
        KeyCode::Delete => app.edit(|input| input.delete()),
        KeyCode::Left => app.edit(|input| input.move_left()),
        KeyCode::Right => app.edit(|input| input.move_right()),
        KeyCode::Home => app.edit(|input| input.move_start()),
        KeyCode::End => app.edit(|input| input.move_end()),
        KeyCode::Enter if app.focused == FormField::Notes => {
            // New note line continues the bullet list
            app.edit(|input| {
                input.insert('\n');
                input.insert('•');
                input.insert(' ');
            });
        }
        KeyCode::Enter => app.focus_next(),
        _ => {}
    }
}

/// Keys while a dialog is open
fn handle_dialog_key(app: &mut App, key: KeyEvent) -> Result<()> {
    match app.active_dialog {
        ActiveDialog::Help => {
            // Any key closes help
            app.close_dialog();
        }
        ActiveDialog::Export => match key.code {
            KeyCode::Esc => app.close_dialog(),
            KeyCode::Enter => app.export_document(),
            KeyCode::Char(c) if !key.modifiers.contains(KeyModifiers::CONTROL) => {
                app.export_path.insert(c)
            }
            KeyCode::Backspace => app.export_path.backspace(),
            KeyCode::Delete => app.export_path.delete(),
            KeyCode::Left => app.export_path.move_left(),
            KeyCode::Right => app.export_path.move_right(),
            KeyCode::Home => app.export_path.move_start(),
            KeyCode::End => app.export_path.move_end(),
            _ => {}
        },
        ActiveDialog::None => {}
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::paths::RoiPaths;
    use crate::config::settings::Settings;
    use crate::models::{InputField, PlanKind};
    use tempfile::TempDir;

    fn press(app: &mut App, code: KeyCode) {
        handle_event(app, Event::Key(KeyEvent::new(code, KeyModifiers::NONE))).unwrap();
    }

    fn press_ctrl(app: &mut App, c: char) {
        handle_event(
            app,
            Event::Key(KeyEvent::new(KeyCode::Char(c), KeyModifiers::CONTROL)),
        )
        .unwrap();
    }

    #[test]
    fn test_typing_updates_worksheet_and_metrics() {
        let temp_dir = TempDir::new().unwrap();
        let paths = RoiPaths::with_base_dir(temp_dir.path().to_path_buf());
        let settings = Settings::default();
        let mut app = App::new(&settings, &paths);

        app.focus(FormField::Input(InputField::CurrentMarketingMonthly));
        for c in "2,000".chars() {
            press(&mut app, KeyCode::Char(c));
        }
        assert_eq!(app.worksheet.inputs.current_marketing_monthly, "2,000");
        assert_eq!(app.metrics.current_yearly_total, 24000.0);
    }

    #[test]
    fn test_plan_keys_toggle() {
        let temp_dir = TempDir::new().unwrap();
        let paths = RoiPaths::with_base_dir(temp_dir.path().to_path_buf());
        let settings = Settings::default();
        let mut app = App::new(&settings, &paths);

        app.focus(FormField::Plan);
        press(&mut app, KeyCode::Right);
        assert_eq!(app.plan(), PlanKind::Dwy);
        press(&mut app, KeyCode::Char(' '));
        assert_eq!(app.plan(), PlanKind::Dfy);
        // Letters do nothing on the selector
        press(&mut app, KeyCode::Char('x'));
        assert_eq!(app.plan(), PlanKind::Dfy);
    }

    #[test]
    fn test_tab_and_backtab_navigation() {
        let temp_dir = TempDir::new().unwrap();
        let paths = RoiPaths::with_base_dir(temp_dir.path().to_path_buf());
        let settings = Settings::default();
        let mut app = App::new(&settings, &paths);

        press(&mut app, KeyCode::Tab);
        assert_eq!(app.focused, FormField::Representative);
        press(&mut app, KeyCode::BackTab);
        assert_eq!(app.focused, FormField::CompanyName);
        press(&mut app, KeyCode::Up);
        assert_eq!(app.focused, FormField::Notes);
    }

    #[test]
    fn test_enter_in_notes_adds_bullet() {
        let temp_dir = TempDir::new().unwrap();
        let paths = RoiPaths::with_base_dir(temp_dir.path().to_path_buf());
        let settings = Settings::default();
        let mut app = App::new(&settings, &paths);

        app.focus(FormField::Notes);
        press(&mut app, KeyCode::Char('a'));
        press(&mut app, KeyCode::Enter);
        assert_eq!(app.worksheet.notes, "• a\n• ");
        assert_eq!(app.focused, FormField::Notes);
    }

    #[test]
    fn test_help_dialog_and_quit() {
        let temp_dir = TempDir::new().unwrap();
        let paths = RoiPaths::with_base_dir(temp_dir.path().to_path_buf());
        let settings = Settings::default();
        let mut app = App::new(&settings, &paths);

        press(&mut app, KeyCode::F(1));
        assert_eq!(app.active_dialog, ActiveDialog::Help);
        press(&mut app, KeyCode::Esc);
        assert!(!app.has_dialog());
        assert!(!app.should_quit);

        press(&mut app, KeyCode::Esc);
        assert!(app.should_quit);
    }

    #[test]
    fn test_ctrl_c_quits_from_dialog() {
        let temp_dir = TempDir::new().unwrap();
        let paths = RoiPaths::with_base_dir(temp_dir.path().to_path_buf());
        let settings = Settings::default();
        let mut app = App::new(&settings, &paths);

        press_ctrl(&mut app, 'e');
        assert_eq!(app.active_dialog, ActiveDialog::Export);
        press_ctrl(&mut app, 'c');
        assert!(app.should_quit);
    }

    #[test]
    fn test_control_chars_stay_out_of_export_path() {
        let temp_dir = TempDir::new().unwrap();
        let paths = RoiPaths::with_base_dir(temp_dir.path().to_path_buf());
        let settings = Settings::default();
        let mut app = App::new(&settings, &paths);

        press_ctrl(&mut app, 'e');
        let before = app.export_path.value().to_string();
        press_ctrl(&mut app, 'e');
        press_ctrl(&mut app, 'p');
        assert_eq!(app.export_path.value(), before);
        assert_eq!(app.active_dialog, ActiveDialog::Export);

        press(&mut app, KeyCode::Char('x'));
        assert_eq!(app.export_path.value(), format!("{}x", before));
    }

    #[test]
    fn test_control_chars_are_not_typed() {
        let temp_dir = TempDir::new().unwrap();
        let paths = RoiPaths::with_base_dir(temp_dir.path().to_path_buf());
        let settings = Settings::default();
        let mut app = App::new(&settings, &paths);

        press_ctrl(&mut app, 'z');
        assert_eq!(app.worksheet.company_name, "");
    }
}
