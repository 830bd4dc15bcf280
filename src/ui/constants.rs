use ratatui::style::Style;

// Type aliases for clarity
pub type CharBuffer = Vec<Vec<char>>;
pub type StyleBuffer = Vec<Vec<Style>>;

/// Marks the second cell of a double-width char.
pub const WIDE_CONTINUATION: char = '\0';

// Status line layout
pub const STATUS_MARGIN: &str = "    ";
pub const STATUS_SEPARATOR: &str = "    |    ";

// Graph node symbols by importance
pub mod symbols {
    pub const MAJOR: char = '◉';
    pub const UPPER: char = '◎';
    pub const LOWER: char = 'o';
    pub const MINOR: char = '·';
    pub const CURSOR: char = '◎';
}

// Boot splash needs this much room for the banner
pub const BANNER_MIN_WIDTH: u16 = 80;
pub const BANNER_MIN_HEIGHT: u16 = 15;
