use clap::Parser;

use std::path::PathBuf;

/// Render a board of hexagonal sectors to SVG, fetching it from a map
/// server or generating it from a board configuration.
#[derive(Parser, Debug, Default)]
#[command(name = "gaiamap-viewer", version)]
pub struct Args {
    /// Base URL of the map server, e.g. `http://localhost:5000`.
    #[arg(long, conflicts_with = "board")]
    pub server: Option<String>,

    /// Board configuration to generate the map from, instead of
    /// fetching it. Defaults to the bundled board.
    #[arg(long)]
    pub board: Option<PathBuf>,

    /// Map preset: `1p_2p_default`, `3p_4p_default` or `lots_o_buildings`.
    #[arg(long)]
    pub preset: Option<String>,

    /// Hexagon size in pixels.
    #[arg(long)]
    pub size: Option<f64>,

    /// Write the SVG document to this file instead of stdout.
    #[arg(short, long)]
    pub out: Option<PathBuf>,

    /// Configuration file. Defaults to `gaiamap.toml`, if present.
    #[arg(long)]
    pub config: Option<PathBuf>,

    #[arg(long)]
    pub log_level: Option<String>,

    /// List the available presets and exit.
    #[arg(long)]
    pub list_presets: bool,
}
