//! Configuration loading with command line overrides.
//!
//! Reads `gaiamap.toml` from the current working directory (or the file
//! given with `--config`), then applies the command line arguments.

use gaiamap::geo::HexSize;
use gaiamap::loader::Preset;
use serde::Deserialize;

use std::fs;
use std::path::{ Path, PathBuf };

use crate::cli::Args;
use crate::error::AppError;

pub const DEFAULT_CONFIG: &str = "gaiamap.toml";
pub const DEFAULT_LOG_LEVEL: &str = "info";

/// The contents of a configuration file. Every setting is optional.
#[derive(Debug, Default, PartialEq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Config {
    pub server: Option<String>,
    pub board: Option<PathBuf>,
    pub preset: Option<String>,
    pub size: Option<f64>,
    pub log_level: Option<String>,
}

impl Config {
    /// Load the configuration from the given file, which must exist, or
    /// else from the default file, if it exists.
    pub fn load(path: Option<&Path>) -> Result<Config, AppError> {
        let path = match path {
            Some(p) => p,
            None => {
                let default = Path::new(DEFAULT_CONFIG);
                if !default.exists() {
                    return Ok(Config::default())
                }
                default
            }
        };
        let text = fs::read_to_string(path)
            .map_err(|e| AppError::Config(format!("cannot read {}: {}", path.display(), e)))?;
        Self::parse(&text)
    }

    pub fn parse(text: &str) -> Result<Config, AppError> {
        toml::from_str(text).map_err(Into::into)
    }
}

/// Where the map comes from.
#[derive(Debug, PartialEq)]
pub enum Source {
    /// Fetch it from the map server at the given base URL.
    Server(String),
    /// Generate it from a board configuration, the bundled one if `None`.
    Board(Option<PathBuf>),
}

/// The resolved settings of a run.
#[derive(Debug)]
pub struct Settings {
    pub source: Source,
    pub preset: Preset,
    pub size: HexSize,
    pub out: Option<PathBuf>,
    pub log_level: String,
}

impl Settings {
    /// Resolve the settings, command line arguments taking precedence
    /// over the configuration file.
    pub fn resolve(args: Args, config: Config) -> Result<Settings, AppError> {
        let source = if let Some(board) = args.board {
            Source::Board(Some(board))
        } else if let Some(server) = args.server.or(config.server) {
            Source::Server(server)
        } else {
            Source::Board(config.board)
        };

        let preset = match args.preset.or(config.preset) {
            Some(name) => name.parse::<Preset>()?,
            None => Preset::default(),
        };

        let size = match args.size.or(config.size) {
            Some(s) => HexSize::new(s)?,
            None => HexSize::default(),
        };

        let log_level = args.log_level
            .or(config.log_level)
            .unwrap_or_else(|| DEFAULT_LOG_LEVEL.to_string());

        Ok(Settings { source, preset, size, out: args.out, log_level })
    }
}
