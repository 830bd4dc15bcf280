use crate::app::{AppState, Screen};
use crate::ui::help::help_lines;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Direction {
    Up,
    Down,
    Left,
    Right,
}

fn go(app: &mut AppState, direction: Direction) {
    let height = app.text_height();
    let width = usize::from(app.terminal_width);

    match app.current_mut() {
        Some(Screen::Editor(editor)) => {
            let buffer = &mut editor.buffer;
            match direction {
                Direction::Up => buffer.move_up(),
                Direction::Down => buffer.move_down(),
                Direction::Left => buffer.move_left(),
                Direction::Right => buffer.move_right(),
            }
            buffer.scroll_to_cursor(height);
        }
        Some(Screen::LinkTree(tree)) => match direction {
            Direction::Up => tree.move_up(),
            Direction::Down => tree.move_down(height),
            Direction::Left => tree.move_left(),
            Direction::Right => tree.move_right(width),
        },
        Some(Screen::Graph(graph)) => match direction {
            Direction::Up => graph.move_up(),
            Direction::Down => graph.move_down(),
            Direction::Left => graph.move_left(),
            Direction::Right => graph.move_right(),
        },
        Some(Screen::Help(help)) => match direction {
            Direction::Up => help.scroll_up(),
            Direction::Down => help.scroll_down(help_lines().len(), height),
            Direction::Left | Direction::Right => {}
        },
        Some(Screen::Boot(_)) | None => {}
    }
}

pub fn move_up(app: &mut AppState) {
    go(app, Direction::Up);
}

pub fn move_down(app: &mut AppState) {
    go(app, Direction::Down);
}

pub fn move_left(app: &mut AppState) {
    go(app, Direction::Left);
}

pub fn move_right(app: &mut AppState) {
    go(app, Direction::Right);
}
