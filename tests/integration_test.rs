mod common;

use common::{current_editor, run, type_text, Vault};
use noteweave::actions::{execute_action, tick, Action};
use noteweave::app::{AppMode, AppState, Screen};
use noteweave::boot::{BootScreen, PrecomputeRequest};
use noteweave::config::AppConfig;
use noteweave::model::derive_incoming;
use noteweave::theme::Theme;
use noteweave::tree::SortMode;
use noteweave::vault::scan_vault;
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::thread;
use std::time::{Duration, Instant};

fn move_to_col(app: &mut AppState, col: usize) {
    run(app, (0..col).map(|_| Action::MoveRight));
}

#[test]
fn test_graph_of_two_notes() {
    let vault = Vault::with_notes(&[("A", "see [[B]]"), ("B", "no links")]);
    let notes = scan_vault(vault.root());

    assert_eq!(notes.links_from("A"), ["B"]);
    assert!(notes.links_from("B").is_empty());

    let incoming = derive_incoming(&notes.outgoing);
    assert!(incoming["A"].is_empty());
    assert_eq!(incoming["B"], ["A"]);
}

#[test]
fn test_jump_opens_existing_note() {
    let vault = Vault::with_notes(&[("A", "[[B]]"), ("B", "bee")]);
    let mut app = vault.editor_app("A");

    move_to_col(&mut app, 2);
    run(&mut app, [Action::FollowLink]);

    let editor = current_editor(&app);
    assert_eq!(editor.buffer.lines(), ["bee"]);
    assert_eq!(editor.buffer.cursor(), (0, 0));
    assert_eq!(app.screens.len(), 1);
}

#[test]
fn test_jump_creates_missing_note() {
    let vault = Vault::with_notes(&[("A", "[[B]] and [[C]]"), ("B", "")]);
    let mut app = vault.editor_app("A");

    move_to_col(&mut app, 12);
    run(&mut app, [Action::FollowLink]);

    assert!(vault.exists("C"));
    assert_eq!(vault.read("C"), "");
    let editor = current_editor(&app);
    assert_eq!(editor.path, vault.note_path("C"));
    assert_eq!(editor.buffer.lines(), [""]);

    let notes = scan_vault(vault.root());
    assert!(notes.links_from("C").is_empty());
    assert!(notes.contains("C"));
}

#[test]
fn test_many_jumps_keep_one_screen() {
    let vault = Vault::with_notes(&[("A", "[[B]]"), ("B", "[[A]]")]);
    let mut app = vault.editor_app("A");

    for _ in 0..50 {
        move_to_col(&mut app, 2);
        run(&mut app, [Action::FollowLink]);
    }
    assert_eq!(app.screens.len(), 1);
    assert_eq!(current_editor(&app).buffer.lines(), ["[[B]]"]);
}

#[test]
fn test_jump_abandons_unsaved_edits() {
    let vault = Vault::with_notes(&[("A", "[[B]]"), ("B", "")]);
    let mut app = vault.editor_app("A");

    run(&mut app, [Action::MoveDown]);
    type_text(&mut app, " edited");
    run(&mut app, [Action::MoveUp, Action::MoveRight, Action::MoveRight]);
    run(&mut app, [Action::FollowLink]);

    assert_eq!(vault.read("A"), "[[B]]");
    assert!(current_editor(&app).path.ends_with("B.md"));
}

#[test]
fn test_left_arrow_stops_at_start() {
    let vault = Vault::with_notes(&[("N", "hello")]);
    let mut app = vault.editor_app("N");
    move_to_col(&mut app, 5);
    assert_eq!(current_editor(&app).buffer.cursor(), (0, 5));

    run(&mut app, (0..5).map(|_| Action::MoveLeft));
    assert_eq!(current_editor(&app).buffer.cursor(), (0, 0));
    run(&mut app, [Action::MoveLeft]);
    assert_eq!(current_editor(&app).buffer.cursor(), (0, 0));
}

#[test]
fn test_quit_closes_session() {
    let vault = Vault::new();
    let mut app = vault.editor_app("N");
    execute_action(Action::Quit, &mut app).unwrap();
    assert!(!app.running);
}

#[test]
fn test_boot_to_tree_to_editor_and_back() {
    let vault = Vault::with_notes(&[("A", "[[B]]"), ("B", "bee")]);
    let config = AppConfig {
        boot_min_duration_ms: 0,
        ..AppConfig::default()
    };
    let start = Instant::now();
    let boot = BootScreen::start(
        PrecomputeRequest::LinkTree {
            vault: vault.root().to_path_buf(),
            sort: SortMode::None,
        },
        config.boot_min_duration(),
        config.boot_frame(),
        start,
        &mut StdRng::seed_from_u64(1),
    )
    .unwrap();
    let mut app = AppState::with_screen(config, Theme::default(), Screen::Boot(boot));
    app.set_terminal_size(60, 20);

    for _ in 0..500 {
        tick(&mut app, Instant::now()).unwrap();
        if app.mode() != Some(AppMode::Boot) {
            break;
        }
        thread::sleep(Duration::from_millis(10));
    }
    assert_eq!(app.mode(), Some(AppMode::LinkTree));

    // "    -> [[B]]" is the fourth line of the tree
    run(&mut app, (0..3).map(|_| Action::MoveDown));
    move_to_col(&mut app, 8);
    run(&mut app, [Action::FollowLink]);
    assert_eq!(current_editor(&app).buffer.lines(), ["bee"]);

    run(&mut app, [Action::Quit]);
    assert_eq!(app.mode(), Some(AppMode::LinkTree));
    run(&mut app, [Action::Quit]);
    assert!(!app.running);
}
