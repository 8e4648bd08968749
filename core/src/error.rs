use thiserror::Error;

/// Errors raised while validating, decoding or generating maps.
#[derive(Debug, Error)]
pub enum Error {
    #[error("hex size must be finite and positive, got {0}")]
    InvalidHexSize(f64),

    #[error("{what} is not a finite number: {value}")]
    NonFiniteFactor { what: String, value: f64 },

    #[error("unknown planet type code {0}")]
    UnknownPlanetType(u8),

    #[error("unknown planet type name {0:?}")]
    UnknownPlanetName(String),

    #[error("unknown faction code {0}")]
    UnknownFaction(u8),

    #[error("unknown building type code {0}")]
    UnknownBuildingType(u8),

    #[error("sector radius must be at least 1, got {0}")]
    InvalidRadius(i32),

    #[error("board has no tile number {0}")]
    UnknownTile(u32),

    #[error("tile {tile} has no side {side}")]
    UnknownSide { tile: u32, side: usize },

    #[error("unknown map preset {0:?}")]
    UnknownPreset(String),

    #[error("board has no layout for game type {0:?}")]
    MissingLayout(String),

    #[error("malformed json")]
    Json(#[from] serde_json::Error),

    #[error("io error")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
