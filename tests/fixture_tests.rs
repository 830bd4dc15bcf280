mod common;

use common::Vault;
use noteweave::buffer::TextBuffer;
use noteweave::layout::{ForceLayout, Positions};
use noteweave::model::{derive_incoming, Outgoing};
use noteweave::parser::link_names;
use noteweave::vault::scan_vault;
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::fs;

fn layout(graph: &Outgoing, width: u16, height: u16, seed: u64) -> Positions {
    ForceLayout::new(width, height).compute(graph, &mut StdRng::seed_from_u64(seed))
}

#[test]
fn test_scan_nested_vault() {
    let vault = Vault::with_notes(&[
        ("top", "[[deep]] [[nowhere]]"),
        ("a/b/c/deep", "[[top]]"),
    ]);
    fs::write(vault.root().join("notes.txt"), "[[top]]").unwrap();
    fs::write(vault.root().join("UPPER.MD"), "[[top]]").unwrap();

    let notes = scan_vault(vault.root());
    let names: Vec<&str> = notes.names().map(String::as_str).collect();
    assert_eq!(names, vec!["deep", "top"]);
    assert_eq!(notes.links_from("top"), ["deep", "nowhere"]);
    assert!(notes.path_of("deep").unwrap().ends_with("a/b/c/deep.md"));
}

#[test]
fn test_basename_collision_keeps_last_visited() {
    let vault = Vault::with_notes(&[("a/note", "[[first]]"), ("b/note", "[[second]]")]);
    let notes = scan_vault(vault.root());

    assert_eq!(notes.len(), 1);
    assert_eq!(notes.links_from("note"), ["second"]);
    assert!(notes.path_of("note").unwrap().ends_with("b/note.md"));
}

#[test]
fn test_incoming_mirrors_outgoing() {
    let vault = Vault::with_notes(&[
        ("A", "[[B]] [[C]] [[ghost]]"),
        ("B", "[[C]]"),
        ("C", "[[A]]"),
        ("D", ""),
    ]);
    let notes = scan_vault(vault.root());
    let incoming = derive_incoming(&notes.outgoing);

    for (source, targets) in &notes.outgoing {
        for target in targets.iter().filter(|t| notes.contains(t)) {
            assert!(incoming[target].contains(source));
        }
    }
    for (target, sources) in &incoming {
        for source in sources {
            assert!(notes.links_from(source).contains(target));
        }
    }
    assert!(!incoming.contains_key("ghost"));
    assert!(incoming["D"].is_empty());
}

#[test]
fn test_missing_vault_is_empty() {
    let vault = Vault::new();
    let notes = scan_vault(&vault.root().join("does-not-exist"));
    assert!(notes.is_empty());
}

#[test]
fn test_layout_stays_in_bounds() {
    let vault = Vault::with_notes(&[
        ("hub", "[[a]] [[b]] [[c]] [[d]] [[e]]"),
        ("a", "[[b]]"),
        ("b", ""),
        ("c", "[[hub]]"),
        ("d", ""),
        ("e", "[[a]]"),
    ]);
    let notes = scan_vault(vault.root());

    for (width, height) in [(80, 24), (12, 6), (3, 3)] {
        let layout_engine = ForceLayout::new(width, height);
        let bounds = layout_engine.bounds();
        let positions = layout(&notes.outgoing, width, height, 42);
        assert_eq!(positions.len(), notes.len());
        for &(x, y) in positions.values() {
            assert!(bounds.contains(x, y), "({}, {}) outside {}x{}", x, y, width, height);
        }
    }
}

#[test]
fn test_layout_edge_cases() {
    assert!(layout(&Outgoing::new(), 80, 24, 1).is_empty());

    let mut single = Outgoing::new();
    single.insert("solo".to_string(), vec!["missing".to_string()]);
    let positions = layout(&single, 80, 24, 1);
    assert_eq!(positions.len(), 1);
    assert!(positions.contains_key("solo"));
}

#[test]
fn test_layout_is_repeatable_with_seed() {
    let vault = Vault::with_notes(&[("x", "[[y]]"), ("y", "[[z]]"), ("z", "")]);
    let notes = scan_vault(vault.root());
    assert_eq!(
        layout(&notes.outgoing, 60, 20, 7),
        layout(&notes.outgoing, 60, 20, 7)
    );
}

#[test]
fn test_buffer_round_trip_keeps_links() {
    let text = "intro [[One]]\n\n  [[Two]] and [[Three]]\r\ntrailing [[One]]";
    let buffer = TextBuffer::from_text(text);
    assert_eq!(link_names(&buffer.to_text()), link_names(text));
    assert_eq!(buffer.to_text(), text);
}
