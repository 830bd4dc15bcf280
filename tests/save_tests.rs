mod common;

use common::{current_editor, run, type_text, Vault};
use noteweave::actions::Action;
use noteweave::editor::SaveState;
use std::fs;
use std::time::{Duration, Instant};

#[test]
fn test_save_writes_lines_without_trailing_newline() {
    let vault = Vault::new();
    let mut app = vault.editor_app("Journal");

    type_text(&mut app, "first");
    run(&mut app, [Action::SplitLine, Action::Indent]);
    type_text(&mut app, "second");
    assert!(!vault.exists("Journal"));

    run(&mut app, [Action::Save]);
    assert_eq!(vault.read("Journal"), "first\n    second");
    assert_eq!(current_editor(&app).save_state(), SaveState::Saved);
}

#[test]
fn test_edits_stay_in_memory_until_saved() {
    let vault = Vault::with_notes(&[("N", "abc")]);
    let mut app = vault.editor_app("N");

    run(&mut app, [Action::MoveRight, Action::Backspace]);
    assert_eq!(vault.read("N"), "abc");
    assert_eq!(current_editor(&app).save_state(), SaveState::Unsaved);

    run(&mut app, [Action::Save]);
    assert_eq!(vault.read("N"), "bc");
}

#[test]
fn test_trailing_newline_is_dropped_on_save() {
    let vault = Vault::with_notes(&[("N", "one\ntwo\n")]);
    let mut app = vault.editor_app("N");
    run(&mut app, [Action::Save]);
    assert_eq!(vault.read("N"), "one\ntwo");
}

#[test]
fn test_saved_flash_expires() {
    let vault = Vault::new();
    let mut app = vault.editor_app("N");
    type_text(&mut app, "x");
    run(&mut app, [Action::Save]);

    let flash = app.config.saved_flash();
    let editor = current_editor(&app);
    let now = Instant::now();
    assert_eq!(editor.save_label(now, flash), Some("[Progress Saved]"));
    assert_eq!(
        editor.save_label(now + flash + Duration::from_millis(1), flash),
        None
    );
}

#[test]
fn test_failed_save_is_never_reported_as_saved() {
    let vault = Vault::new();
    let mut app = vault.editor_app("N");
    fs::create_dir(vault.note_path("N")).unwrap();

    type_text(&mut app, "lost");
    run(&mut app, [Action::Save]);

    let editor = current_editor(&app);
    assert_eq!(editor.save_state(), SaveState::Failed);
    assert_eq!(
        editor.save_label(Instant::now(), app.config.saved_flash()),
        Some("[Save Failed]")
    );
    assert!(app.message.is_some());
}
