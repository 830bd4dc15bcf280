use crate::boot::BootScreen;
use crate::config::AppConfig;
use crate::editor::EditorState;
use crate::graph_view::GraphView;
use crate::theme::Theme;
use crate::tree::TreeView;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppMode {
    Boot,
    Editor,
    LinkTree,
    Graph,
    Help,
}

/// Scroll position of the help text.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct HelpView {
    pub offset: usize,
}

impl HelpView {
    pub fn scroll_up(&mut self) {
        self.offset = self.offset.saturating_sub(1);
    }

    pub fn scroll_down(&mut self, total_lines: usize, visible_height: usize) {
        if self.offset + visible_height < total_lines {
            self.offset += 1;
        }
    }
}

#[derive(Debug)]
pub enum Screen {
    Boot(BootScreen),
    Editor(EditorState),
    LinkTree(TreeView),
    Graph(GraphView),
    Help(HelpView),
}

impl Screen {
    pub fn mode(&self) -> AppMode {
        match self {
            Screen::Boot(_) => AppMode::Boot,
            Screen::Editor(_) => AppMode::Editor,
            Screen::LinkTree(_) => AppMode::LinkTree,
            Screen::Graph(_) => AppMode::Graph,
            Screen::Help(_) => AppMode::Help,
        }
    }
}

pub struct AppState {
    pub running: bool,
    /// Navigation stack; the last screen is the one shown.
    pub screens: Vec<Screen>,
    pub config: AppConfig,
    pub theme: Theme,

    // Viewport state
    pub terminal_width: u16,
    pub terminal_height: u16,

    // Message for status line
    pub message: Option<String>,
}

impl AppState {
    pub fn new(config: AppConfig, theme: Theme) -> Self {
        Self {
            running: true,
            screens: Vec::new(),
            config,
            theme,
            terminal_width: 80,
            terminal_height: 24,
            message: None,
        }
    }

    pub fn with_screen(config: AppConfig, theme: Theme, screen: Screen) -> Self {
        let mut app = Self::new(config, theme);
        app.push_screen(screen);
        app
    }

    pub fn mode(&self) -> Option<AppMode> {
        self.current().map(Screen::mode)
    }

    pub fn current(&self) -> Option<&Screen> {
        self.screens.last()
    }

    pub fn current_mut(&mut self) -> Option<&mut Screen> {
        self.screens.last_mut()
    }

    pub fn push_screen(&mut self, screen: Screen) {
        log::debug!("Entering {:?}", screen.mode());
        self.screens.push(screen);
    }

    /// Swap the top screen for `screen`, keeping the stack depth.
    pub fn replace_screen(&mut self, screen: Screen) {
        self.screens.pop();
        self.push_screen(screen);
    }

    /// Leave the top screen. The session ends when nothing is left.
    pub fn pop_screen(&mut self) -> Option<Screen> {
        let popped = self.screens.pop();
        if self.screens.is_empty() {
            self.running = false;
        }
        popped
    }

    pub fn set_terminal_size(&mut self, width: u16, height: u16) {
        self.terminal_width = width;
        self.terminal_height = height;
    }

    /// Rows above the status line.
    pub fn text_height(&self) -> usize {
        usize::from(self.terminal_height.saturating_sub(1)).max(1)
    }

    pub fn set_message(&mut self, msg: impl Into<String>) {
        self.message = Some(msg.into());
    }

    pub fn clear_message(&mut self) {
        self.message = None;
    }
}
