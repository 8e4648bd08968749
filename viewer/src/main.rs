//! Board viewer: obtains a map, renders it to SVG and writes it out.
//!
//! Startup sequence:
//!   1. Parse the command line
//!   2. Load the config file and resolve settings
//!   3. Init logger at the configured level
//!   4. Fetch or generate the map, render it, write it

mod cli;
mod config;
mod error;
mod fetch;
mod logger;

use clap::Parser;
use gaiamap::loader::{ Board, Preset };
use gaiamap::map::Map;
use gaiamap_svg::Renderer;
use tracing::info;

use std::fs;
use std::io::{ self, Write };

use crate::config::{ Config, Settings, Source };
use crate::error::AppError;

fn main() {
    if let Err(e) = run() {
        eprintln!("error: {}", e);
        std::process::exit(1);
    }
}

fn run() -> Result<(), AppError> {
    let args = cli::Args::parse();

    if args.list_presets {
        for p in Preset::ALL.iter() {
            println!("{}\t{}", p.as_str(), p.label());
        }
        return Ok(())
    }

    let config = Config::load(args.config.as_deref())?;
    let settings = Settings::resolve(args, config)?;

    logger::init(&settings.log_level)?;
    info!(preset = %settings.preset, size = settings.size.get(), "settings resolved");

    let map = load_map(&settings)?;
    let svg = Renderer::new(settings.size).render(&map)?;

    match &settings.out {
        Some(path) => {
            fs::write(path, svg.as_bytes())?;
            info!(path = %path.display(), "wrote board");
        }
        None => io::stdout().write_all(svg.as_bytes())?,
    }
    Ok(())
}

fn load_map(settings: &Settings) -> Result<Map, AppError> {
    match &settings.source {
        Source::Server(server) => fetch::fetch_map(server, settings.preset),
        Source::Board(path) => {
            let board = match path {
                Some(p) => Board::from_path(p)?,
                None => Board::bundled()?,
            };
            Ok(board.generate(settings.preset, &mut rand::thread_rng())?)
        }
    }
}
