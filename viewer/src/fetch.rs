//! Retrieval of the map from the map server.
//!
//! A single request/response exchange: no retries and no recovery from
//! partial failures.

use gaiamap::loader::Preset;
use gaiamap::map::Map;
use reqwest::blocking::Client;
use tracing::{ debug, info };

use crate::error::AppError;

/// The URL of the map endpoint for the given preset. The preset selects
/// the game type; buildings on all planets are a board option of the
/// 1p/2p game type.
pub fn map_url(server: &str, preset: Preset) -> String {
    let base = format!("{}/map?game_type={}", server.trim_end_matches('/'), preset.game_type());
    match preset {
        Preset::LotsOBuildings => format!("{}&board_options={}", base, preset.as_str()),
        Preset::OneTwoPlayer | Preset::ThreeFourPlayer => base,
    }
}

/// Fetch and decode the map for the given preset.
pub fn fetch_map(server: &str, preset: Preset) -> Result<Map, AppError> {
    let client = reqwest::blocking::Client::builder()
        .user_agent(concat!("gaiamap-viewer/", env!("CARGO_PKG_VERSION")))
        .build()?;
    fetch_map_with(&client, server, preset)
}

/// Fetch and decode the map for the given preset with the given client.
/// Responses with a non-success status are errors.
pub fn fetch_map_with(client: &Client, server: &str, preset: Preset) -> Result<Map, AppError> {
    let url = map_url(server, preset);
    info!(url = %url, "fetching map");

    let body = client
        .get(&url)
        .send()?
        .error_for_status()?
        .text()?;
    debug!(bytes = body.len(), "received map");

    Map::from_json(&body).map_err(Into::into)
}
