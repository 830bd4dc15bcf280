use crate::actions::Action;
use crate::app::{AppMode, AppState};
use anyhow::Result;
use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use std::time::Duration;

/// Wait up to `timeout` for one input event and turn it into an action.
pub fn handle_events(app: &AppState, timeout: Duration) -> Result<Option<Action>> {
    if event::poll(timeout)? {
        return match event::read()? {
            Event::Key(key) if key.kind == KeyEventKind::Press => Ok(handle_key_event(app, key)),
            Event::Resize(width, height) => Ok(Some(Action::Resize(width, height))),
            _ => Ok(None),
        };
    }
    Ok(None)
}

/// Throw away queued input so held keys do not pile up behind the splash.
pub fn drain_pending_input() -> Result<()> {
    while event::poll(Duration::ZERO)? {
        event::read()?;
    }
    Ok(())
}

pub fn handle_key_event(app: &AppState, key: KeyEvent) -> Option<Action> {
    if let Some(action) = handle_global(key) {
        return Some(action);
    }
    match app.mode()? {
        AppMode::Boot => handle_boot_mode(key),
        AppMode::Editor => handle_editor_mode(key),
        AppMode::LinkTree | AppMode::Graph => handle_view_mode(key),
        AppMode::Help => handle_help_mode(key),
    }
}

fn handle_global(key: KeyEvent) -> Option<Action> {
    use KeyCode::*;

    match (key.code, key.modifiers) {
        (Char('q'), KeyModifiers::CONTROL) | (Char('c'), KeyModifiers::CONTROL) => {
            Some(Action::Quit)
        }
        _ => None,
    }
}

fn handle_boot_mode(key: KeyEvent) -> Option<Action> {
    match key.code {
        KeyCode::Char(' ') => Some(Action::NextTip),
        _ => None,
    }
}

fn arrow(code: KeyCode) -> Option<Action> {
    match code {
        KeyCode::Up => Some(Action::MoveUp),
        KeyCode::Down => Some(Action::MoveDown),
        KeyCode::Left => Some(Action::MoveLeft),
        KeyCode::Right => Some(Action::MoveRight),
        _ => None,
    }
}

fn handle_editor_mode(key: KeyEvent) -> Option<Action> {
    use KeyCode::*;

    match (key.code, key.modifiers) {
        (Char('s'), KeyModifiers::CONTROL) => Some(Action::Save),
        (Char('g'), KeyModifiers::CONTROL) => Some(Action::FollowLink),

        (Enter, _) => Some(Action::SplitLine),
        (Backspace, _) => Some(Action::Backspace),
        (Tab, _) => Some(Action::Indent),

        // Printable ASCII only
        (Char(c), KeyModifiers::NONE | KeyModifiers::SHIFT) if (' '..='~').contains(&c) => {
            Some(Action::InsertChar(c))
        }

        (code, _) => arrow(code),
    }
}

fn handle_view_mode(key: KeyEvent) -> Option<Action> {
    match (key.code, key.modifiers) {
        (KeyCode::Char('g'), KeyModifiers::CONTROL) => Some(Action::FollowLink),
        (code, _) => arrow(code),
    }
}

fn handle_help_mode(key: KeyEvent) -> Option<Action> {
    match key.code {
        KeyCode::Up => Some(Action::MoveUp),
        KeyCode::Down => Some(Action::MoveDown),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::{HelpView, Screen};
    use crate::config::AppConfig;
    use crate::theme::Theme;

    fn help_app() -> AppState {
        AppState::with_screen(
            AppConfig::default(),
            Theme::default(),
            Screen::Help(HelpView::default()),
        )
    }

    fn key(code: KeyCode, modifiers: KeyModifiers) -> KeyEvent {
        KeyEvent::new(code, modifiers)
    }

    #[test]
    fn test_editor_keys() {
        let ctrl = KeyModifiers::CONTROL;
        assert!(matches!(
            handle_editor_mode(key(KeyCode::Char('s'), ctrl)),
            Some(Action::Save)
        ));
        assert!(matches!(
            handle_editor_mode(key(KeyCode::Char('g'), ctrl)),
            Some(Action::FollowLink)
        ));
        assert!(matches!(
            handle_editor_mode(key(KeyCode::Char('A'), KeyModifiers::SHIFT)),
            Some(Action::InsertChar('A'))
        ));
        assert!(matches!(
            handle_editor_mode(key(KeyCode::Tab, KeyModifiers::NONE)),
            Some(Action::Indent)
        ));
        assert!(matches!(
            handle_editor_mode(key(KeyCode::Left, KeyModifiers::NONE)),
            Some(Action::MoveLeft)
        ));
    }

    #[test]
    fn test_non_ascii_is_ignored() {
        assert!(handle_editor_mode(key(KeyCode::Char('é'), KeyModifiers::NONE)).is_none());
        assert!(handle_editor_mode(key(KeyCode::Char('x'), KeyModifiers::ALT)).is_none());
    }

    #[test]
    fn test_quit_works_everywhere() {
        let app = help_app();
        assert!(matches!(
            handle_key_event(&app, key(KeyCode::Char('q'), KeyModifiers::CONTROL)),
            Some(Action::Quit)
        ));
        assert!(matches!(
            handle_key_event(&app, key(KeyCode::Char('c'), KeyModifiers::CONTROL)),
            Some(Action::Quit)
        ));
    }

    #[test]
    fn test_help_only_scrolls() {
        let app = help_app();
        assert!(matches!(
            handle_key_event(&app, key(KeyCode::Down, KeyModifiers::NONE)),
            Some(Action::MoveDown)
        ));
        assert!(handle_key_event(&app, key(KeyCode::Left, KeyModifiers::NONE)).is_none());
        assert!(handle_key_event(&app, key(KeyCode::Char('x'), KeyModifiers::NONE)).is_none());
    }

    #[test]
    fn test_space_cycles_tips_on_boot() {
        assert!(matches!(
            handle_boot_mode(key(KeyCode::Char(' '), KeyModifiers::NONE)),
            Some(Action::NextTip)
        ));
        assert!(handle_boot_mode(key(KeyCode::Enter, KeyModifiers::NONE)).is_none());
    }
}
