use crate::layout::DEFAULT_ITERATIONS;
use crate::model::{note_path_for, NOTE_EXTENSION};
use crate::tree::SortMode;
use clap::Parser;
use config::{
    Config as ConfigCrate, // Need this for builder
    ConfigError as ConfigCrateError,
    Environment,
    File,
    Map,
    Source,
    Value,
};
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use std::time::Duration;
use thiserror::Error;

const DEFAULT_THEME: &str = "green";
const DEFAULT_BOOT_MIN_DURATION_MS: u64 = 3000;
const DEFAULT_BOOT_FRAME_MS: u64 = 250;
const DEFAULT_SAVED_FLASH_SECS: u64 = 3;

pub const ENV_PREFIX: &str = "NOTEWEAVE";

pub const USAGE: &str = "\
Usage:
  noteweave <directory> <filename> [--theme <name>]
  noteweave <directory> --link-tree [-a|-q] [--theme <name>]
  noteweave <directory> --link-graph [--theme <name>]
  noteweave -h | --help";

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Configuration file error: {0}")]
    ConfigFile(#[from] ConfigCrateError),
    #[error("{0}")]
    Usage(String),
    #[error("Validation error: {0}")]
    ValidationError(String),
}

// Serde struct for deserializing file and environment values.
// Optional fields allow for layered config (defaults -> file -> env -> args).
#[derive(Deserialize, Debug, Default, Clone)]
#[serde(default)]
struct FileConfig {
    theme: Option<String>,
    layout_iterations: Option<usize>,
    layout_seed: Option<u64>,
    boot_min_duration_ms: Option<u64>,
    boot_frame_ms: Option<u64>,
    saved_flash_secs: Option<u64>,
    log_file: Option<PathBuf>,
}

/// Resolved settings. Every field has a value once all layers are merged.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AppConfig {
    pub theme: String,
    pub layout_iterations: usize,
    pub layout_seed: Option<u64>,
    pub boot_min_duration_ms: u64,
    pub boot_frame_ms: u64,
    pub saved_flash_secs: u64,
    pub log_file: Option<PathBuf>,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            theme: DEFAULT_THEME.to_string(),
            layout_iterations: DEFAULT_ITERATIONS,
            layout_seed: None,
            boot_min_duration_ms: DEFAULT_BOOT_MIN_DURATION_MS,
            boot_frame_ms: DEFAULT_BOOT_FRAME_MS,
            saved_flash_secs: DEFAULT_SAVED_FLASH_SECS,
            log_file: None,
        }
    }
}

impl AppConfig {
    pub fn boot_min_duration(&self) -> Duration {
        Duration::from_millis(self.boot_min_duration_ms)
    }

    pub fn boot_frame(&self) -> Duration {
        Duration::from_millis(self.boot_frame_ms)
    }

    pub fn saved_flash(&self) -> Duration {
        Duration::from_secs(self.saved_flash_secs)
    }
}

#[derive(Parser, Debug, Default, Clone)]
#[command(
    name = "noteweave",
    about = "Terminal note editor with [[wiki links]], a link tree and a link graph",
    disable_help_flag = true
)]
pub struct CliArgs {
    /// Vault directory holding the notes
    pub directory: Option<PathBuf>,

    /// Note to edit, without the .md suffix
    pub filename: Option<String>,

    /// Color theme: green, purple, cyan, blue, yellow, white, red or random
    #[arg(long)]
    pub theme: Option<String>,

    /// Show incoming and outgoing links of every note
    #[arg(long = "link-tree", conflicts_with = "link_graph")]
    pub link_tree: bool,

    /// Show the notes as a force-directed graph
    #[arg(long = "link-graph")]
    pub link_graph: bool,

    /// Sort the link tree alphabetically
    #[arg(short = 'a', conflicts_with = "quantity", requires = "link_tree")]
    pub alpha: bool,

    /// Sort the link tree by number of links
    #[arg(short = 'q', requires = "link_tree")]
    pub quantity: bool,

    /// Open the help screen
    #[arg(short = 'h', long = "help")]
    pub help: bool,

    /// Path to a custom configuration file
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Write logs to this file
    #[arg(long)]
    pub log_file: Option<PathBuf>,

    #[arg(long)]
    pub layout_iterations: Option<usize>,

    /// Seed for the graph layout, for reproducible graphs
    #[arg(long)]
    pub layout_seed: Option<u64>,

    /// Print the resolved configuration and exit
    #[arg(long)]
    pub debug_config: bool,
}

/// What the session starts with.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LaunchMode {
    Help,
    Edit { vault: PathBuf, note: PathBuf },
    LinkTree { vault: PathBuf, sort: SortMode },
    LinkGraph { vault: PathBuf },
}

impl LaunchMode {
    pub fn from_args(args: &CliArgs) -> Result<Self, ConfigError> {
        if args.help {
            return Ok(LaunchMode::Help);
        }

        let Some(vault) = args.directory.clone() else {
            return Err(usage_error("missing <directory>"));
        };

        if args.link_tree || args.link_graph {
            if let Some(extra) = &args.filename {
                return Err(usage_error(&format!("unexpected argument '{}'", extra)));
            }
            if args.link_graph {
                return Ok(LaunchMode::LinkGraph { vault });
            }
            let sort = if args.alpha {
                SortMode::Alpha
            } else if args.quantity {
                SortMode::Quantity
            } else {
                SortMode::None
            };
            return Ok(LaunchMode::LinkTree { vault, sort });
        }

        let Some(filename) = args.filename.as_deref() else {
            return Err(usage_error("missing <filename>"));
        };
        let name = filename.strip_suffix(NOTE_EXTENSION).unwrap_or(filename);
        if name.is_empty() {
            return Err(usage_error("empty <filename>"));
        }
        let note = note_path_for(&vault, name);
        Ok(LaunchMode::Edit { vault, note })
    }
}

fn usage_error(reason: &str) -> ConfigError {
    ConfigError::Usage(format!("Error: {}\n\n{}", reason, USAGE))
}

/// Default location of the config file: `<config dir>/noteweave/config.toml`.
pub fn default_config_path() -> Option<PathBuf> {
    ProjectDirs::from("", "", "noteweave").map(|dirs| dirs.config_dir().join("config.toml"))
}

// Load configuration from all sources.
pub fn load_config(args: &CliArgs) -> Result<AppConfig, ConfigError> {
    let env_source = Environment::with_prefix(ENV_PREFIX)
        .separator("__")
        .try_parsing(true);
    // Missing env vars are fine; an unreadable environment just means no overrides
    let env_map: Map<String, Value> = env_source.collect().unwrap_or_else(|_| Map::new());

    build_config_from_args(args, Some(env_map))
}

// Separate function to allow testing with specific args and override sources
pub fn build_config_from_args(
    args: &CliArgs,
    override_source: Option<Map<String, Value>>,
) -> Result<AppConfig, ConfigError> {
    let config_file_path = args.config.clone().or_else(default_config_path);

    let mut config_builder = ConfigCrate::builder();

    if let Some(ref path) = config_file_path {
        // A custom file must exist; the default one is optional
        let required = args.config.is_some();
        config_builder = config_builder.add_source(File::from(path.clone()).required(required));
    }

    // Overrides (environment or a test map) beat the file
    if let Some(overrides) = override_source {
        for (key, value) in overrides {
            config_builder = config_builder.set_override(&key, value)?;
        }
    }

    let loaded: FileConfig = config_builder.build()?.try_deserialize()?;

    // Args beat everything
    let config = AppConfig {
        theme: args
            .theme
            .clone()
            .or(loaded.theme)
            .unwrap_or_else(|| DEFAULT_THEME.to_string()),
        layout_iterations: args
            .layout_iterations
            .or(loaded.layout_iterations)
            .unwrap_or(DEFAULT_ITERATIONS),
        layout_seed: args.layout_seed.or(loaded.layout_seed),
        boot_min_duration_ms: loaded
            .boot_min_duration_ms
            .unwrap_or(DEFAULT_BOOT_MIN_DURATION_MS),
        boot_frame_ms: loaded.boot_frame_ms.unwrap_or(DEFAULT_BOOT_FRAME_MS),
        saved_flash_secs: loaded.saved_flash_secs.unwrap_or(DEFAULT_SAVED_FLASH_SECS),
        log_file: args.log_file.clone().or(loaded.log_file),
    };

    validate_config(&config)?;
    Ok(config)
}

fn validate_config(config: &AppConfig) -> Result<(), ConfigError> {
    if config.boot_frame_ms == 0 {
        return Err(ConfigError::ValidationError(
            "boot_frame_ms must be at least 1".to_string(),
        ));
    }
    if config.theme.trim().is_empty() {
        return Err(ConfigError::ValidationError(
            "theme must not be empty".to_string(),
        ));
    }
    Ok(())
}
