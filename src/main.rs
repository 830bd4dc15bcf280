use noteweave::{actions, app, boot, config, errors, event, logging, theme, ui};

use actions::Action;
use anyhow::Result;
use app::{AppMode, AppState, HelpView, Screen};
use boot::{BootScreen, PrecomputeRequest};
use clap::Parser;
use config::{load_config, CliArgs, LaunchMode, USAGE};
use crossterm::{
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use errors::AppError;
use rand::Rng;
use ratatui::{backend::CrosstermBackend, Terminal};
use std::io;
use std::process;
use std::time::{Duration, Instant};

// Poll interval outside the splash; also refreshes the save indicator
const IDLE_POLL: Duration = Duration::from_millis(250);

fn main() -> Result<()> {
    // Parse command line arguments
    let args = match CliArgs::try_parse() {
        Ok(args) => args,
        Err(err) => {
            let message = err.to_string();
            let reason = message.lines().next().unwrap_or_default();
            eprintln!("{}\n\n{}", reason, USAGE);
            process::exit(1);
        }
    };

    // Load configuration
    let config = load_config(&args)?;

    if args.debug_config {
        println!("Configuration:");
        println!("{:#?}", config);
        return Ok(());
    }

    let mode = match LaunchMode::from_args(&args) {
        Ok(mode) => mode,
        Err(err) => {
            eprintln!("{}", err);
            process::exit(1);
        }
    };

    if logging::init_logging(config.log_file.as_deref())? {
        log::info!("noteweave {} starting", env!("CARGO_PKG_VERSION"));
    }

    if let LaunchMode::Edit { vault, .. } = &mode {
        std::fs::create_dir_all(vault).map_err(|e| AppError::io(vault, e))?;
    }

    let mut rng = rand::thread_rng();
    let theme = theme::resolve_theme(&config.theme, &mut rng);

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Clear the terminal
    terminal.clear()?;

    // Run the main loop
    let res = start(&mut terminal, mode, config, theme, &mut rng);

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    // Handle any errors from the main loop
    if let Err(err) = res {
        log::error!("{}", err);
        eprintln!("Error: {}", err);
        process::exit(1);
    }

    Ok(())
}

fn start<B: ratatui::backend::Backend, R: Rng>(
    terminal: &mut Terminal<B>,
    mode: LaunchMode,
    config: config::AppConfig,
    theme: theme::Theme,
    rng: &mut R,
) -> Result<()> {
    let size = terminal.size()?;
    let mut app = AppState::new(config, theme);
    app.set_terminal_size(size.width, size.height);

    let screen = initial_screen(mode, &app, rng)?;
    app.push_screen(screen);

    run_app(terminal, &mut app)
}

fn initial_screen<R: Rng>(mode: LaunchMode, app: &AppState, rng: &mut R) -> Result<Screen> {
    let request = match mode {
        LaunchMode::Help => return Ok(Screen::Help(HelpView::default())),
        LaunchMode::Edit { vault, note } => PrecomputeRequest::Edit { note, vault },
        LaunchMode::LinkTree { vault, sort } => PrecomputeRequest::LinkTree { vault, sort },
        LaunchMode::LinkGraph { vault } => PrecomputeRequest::LinkGraph {
            vault,
            width: app.terminal_width,
            height: app.terminal_height,
            iterations: app.config.layout_iterations,
            seed: app.config.layout_seed,
        },
    };

    let boot = BootScreen::start(
        request,
        app.config.boot_min_duration(),
        app.config.boot_frame(),
        Instant::now(),
        rng,
    )?;
    Ok(Screen::Boot(boot))
}

fn poll_timeout(app: &AppState) -> Duration {
    match app.mode() {
        Some(AppMode::Boot) => app.config.boot_frame(),
        _ => IDLE_POLL,
    }
}

fn run_app<B: ratatui::backend::Backend>(
    terminal: &mut Terminal<B>,
    app: &mut AppState,
) -> Result<()> {
    while app.running {
        // Splash animation and hand-over
        actions::tick(app, Instant::now())?;
        if !app.running {
            break;
        }

        // Draw the UI
        terminal.draw(|frame| ui::render(frame, app))?;

        // Handle events
        if let Some(action) = event::handle_events(app, poll_timeout(app))? {
            let shuffled = action == Action::NextTip;
            actions::execute_action(action, app)?;
            if shuffled {
                event::drain_pending_input()?;
            }
        }
    }

    Ok(())
}
