pub mod app;
pub mod boot;
pub mod buffer;
pub mod config;
pub mod editor;
pub mod errors;
pub mod graph_view;
pub mod io;
pub mod layout;
pub mod logging;
pub mod model;
pub mod parser;
pub mod theme;
pub mod tree;
pub mod ui;
pub mod vault;

// Internal modules
pub mod actions;
pub mod event;

// Re-export commonly used types
pub use app::{AppMode, AppState, Screen};
pub use config::AppConfig;
pub use errors::{AppError, AppResult};
pub use model::{NoteGraph, NoteName};
