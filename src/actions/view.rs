use crate::app::{AppState, HelpView, Screen};
use crate::boot::Precomputed;
use crate::config::AppConfig;
use crate::errors::{AppError, AppResult};
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::time::Instant;

/// Randomness for layouts: reproducible when a seed is configured.
pub fn layout_rng(config: &AppConfig) -> StdRng {
    match config.layout_seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    }
}

pub fn next_tip(app: &mut AppState) {
    if let Some(Screen::Boot(boot)) = app.current_mut() {
        boot.next_tip(&mut rand::thread_rng());
    }
}

/// Track the new terminal size and refit the active view to it.
pub fn resize(app: &mut AppState, width: u16, height: u16) {
    app.set_terminal_size(width, height);
    let text_height = app.text_height();
    let iterations = app.config.layout_iterations;
    let mut rng = layout_rng(&app.config);

    match app.current_mut() {
        Some(Screen::Editor(editor)) => editor.buffer.scroll_to_cursor(text_height),
        Some(Screen::LinkTree(tree)) => tree.clamp_cursor(text_height, usize::from(width)),
        Some(Screen::Graph(graph)) => graph.relayout(width, height, iterations, &mut rng),
        _ => {}
    }
}

fn screen_for(precomputed: Precomputed) -> Screen {
    match precomputed {
        Precomputed::Edit(editor) => Screen::Editor(editor),
        Precomputed::LinkTree(tree) => Screen::LinkTree(tree),
        Precomputed::LinkGraph(graph) => Screen::Graph(graph),
    }
}

/// Advance the splash; once loading is done its screen replaces the splash.
pub fn tick(app: &mut AppState, now: Instant) -> AppResult<()> {
    let Some(Screen::Boot(boot)) = app.current_mut() else {
        return Ok(());
    };
    boot.tick(now);
    let Some(result) = boot.finish(now) else {
        return Ok(());
    };

    match result {
        Ok(precomputed) => {
            let mut screen = screen_for(precomputed);
            // The terminal may have changed size while the layout was computed
            if let Screen::Graph(graph) = &mut screen {
                let size = (app.terminal_width, app.terminal_height);
                if graph.size() != size {
                    let mut rng = layout_rng(&app.config);
                    graph.relayout(size.0, size.1, app.config.layout_iterations, &mut rng);
                }
            }
            app.replace_screen(screen);
            Ok(())
        }
        Err(AppError::Cancelled) => {
            app.screens.clear();
            app.running = false;
            Ok(())
        }
        Err(e) => {
            // Nothing to edit; an empty buffer here could later overwrite the note on save
            log::error!("Loading failed: {}", e);
            app.replace_screen(Screen::Help(HelpView::default()));
            app.set_message(format!("Could not load: {}", e));
            Ok(())
        }
    }
}
