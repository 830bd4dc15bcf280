use crate::app::HelpView;
use crate::config::USAGE;
use crate::theme::StyleTag;
use crate::ui::frame::{fit_width, RenderFrame};
use once_cell::sync::Lazy;

const TITLE: &str = "noteweave - terminal note editor with [[wiki links]]";

// Help section structure
pub struct HelpSection {
    pub title: &'static str,
    pub items: &'static [(&'static str, &'static str)],
}

// Help section definitions
pub const SECTIONS: &[HelpSection] = &[
    HelpSection {
        title: "Modes:",
        items: &[
            ("(default)     ", "Edit a note"),
            ("--link-tree   ", "Show incoming and outgoing links of every note"),
            ("--link-graph  ", "Show the notes as a graph"),
            ("-h, --help    ", "Show this help screen"),
        ],
    },
    HelpSection {
        title: "Options:",
        items: &[
            (
                "--theme <name>",
                "Color theme (green, purple, cyan, blue, yellow, white, red, random)",
            ),
            ("-a            ", "Sort the link tree alphabetically"),
            ("-q            ", "Sort the link tree by number of links"),
            ("--config <file>", "Read settings from a TOML file"),
            ("--log-file <file>", "Write a log to <file>"),
        ],
    },
    HelpSection {
        title: "Keybinds:",
        items: &[
            ("CTRL+S", "Save"),
            ("CTRL+Q", "Quit"),
            ("CTRL+G", "Go to linked note"),
            ("SPACE ", "Next tip while loading"),
        ],
    },
    HelpSection {
        title: "Tips:",
        items: &[
            ("-", "Use [[NoteName]] to link between notes"),
            ("-", "Following a link to a missing note creates it"),
            ("-", "Themes can be randomized with --theme random"),
        ],
    },
];

static HELP_LINES: Lazy<Vec<String>> = Lazy::new(build_help_lines);

fn build_help_lines() -> Vec<String> {
    let mut lines = vec![TITLE.to_string(), "=".repeat(TITLE.len()), String::new()];
    lines.extend(USAGE.lines().map(str::to_string));
    lines.push(String::new());

    for section in SECTIONS {
        lines.push(section.title.to_string());
        for (key, desc) in section.items {
            lines.push(format!("  {}  {}", key, desc));
        }
        lines.push(String::new());
    }

    lines.push(format!("noteweave v{}", env!("CARGO_PKG_VERSION")));
    lines
}

/// The full help text, one entry per line.
pub fn help_lines() -> &'static [String] {
    &HELP_LINES
}

// Help renderer
pub struct HelpRenderer;

impl HelpRenderer {
    pub fn render(frame: &mut RenderFrame, help: &HelpView) {
        let limit = usize::from(frame.width).saturating_sub(1);
        let visible = help_lines()
            .iter()
            .skip(help.offset)
            .take(frame.text_height());
        for (row, line) in visible.enumerate() {
            frame.draw(row, 0, &fit_width(line, limit), StyleTag::Primary);
        }
    }
}
