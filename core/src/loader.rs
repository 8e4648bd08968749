//! Generation of maps from a board configuration, i.e. a set of
//! (double-sided) tiles and the layouts to place them in per game type.

use rand::Rng;
use rand::seq::SliceRandom;
use serde::{ Deserialize, Serialize };
use tracing::{ debug, info, warn };

use std::collections::HashMap;
use std::convert::TryFrom;
use std::fmt;
use std::path::Path;
use std::str::FromStr;

use crate::error::{ Error, Result };
use crate::grid::{ self, Cube, Z6 };
use crate::map::{ BuildingType, Faction, Hexagon, Map, Planet, PlanetType, Sector };

/// The board configuration bundled with the crate.
const DEFAULT_BOARD: &str = include_str!("../data/board.json");

/// A planet on a tile side, relative to the center of the tile.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct PlanetConfig {
    pub x: i32,
    pub z: i32,
    #[serde(rename = "type")]
    pub planet_type: String,
}

/// A physical tile with one or two sides, each side being a sector.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct TileConfig {
    pub number: u32,
    pub radius: i32,
    pub sides: Vec<Vec<PlanetConfig>>,
}

/// The placement of a tile side on the board.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Placement {
    pub number: u32,
    pub side: usize,
    pub x_offset: i32,
    pub z_offset: i32,
    /// Steps of 60 degrees to rotate the tile by before placing it.
    #[serde(default)]
    pub rotation: i32,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Layout {
    pub tiles: Vec<Placement>,
}

/// A board configuration: the available tiles and, keyed by game
/// type, the layouts to place them in.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Board {
    pub tiles: Vec<TileConfig>,
    #[serde(flatten)]
    pub layouts: HashMap<String, Layout>,
}

impl Board {
    pub fn from_json(json: &str) -> Result<Board> {
        let board: Board = serde_json::from_str(json)?;
        debug!(tiles = board.tiles.len(), layouts = board.layouts.len(), "decoded board");
        Ok(board)
    }

    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Board> {
        let json = std::fs::read_to_string(path.as_ref())?;
        Self::from_json(&json)
    }

    /// The board configuration bundled with the crate.
    pub fn bundled() -> Result<Board> {
        Self::from_json(DEFAULT_BOARD)
    }

    fn tile(&self, number: u32) -> Result<&TileConfig> {
        self.tiles.iter()
            .find(|t| t.number == number)
            .ok_or(Error::UnknownTile(number))
    }

    /// Lay out the sectors for the given game type.
    pub fn layout(&self, game_type: &str) -> Result<Vec<Sector>> {
        let layout = self.layouts.get(game_type)
            .ok_or_else(|| Error::MissingLayout(game_type.to_string()))?;
        layout.tiles.iter().map(|p| self.place(p)).collect()
    }

    fn place(&self, p: &Placement) -> Result<Sector> {
        let tile = self.tile(p.number)?;
        let side = tile.sides.get(p.side)
            .ok_or(Error::UnknownSide { tile: p.number, side: p.side })?;
        let range = tile.radius.checked_sub(1)
            .and_then(|r| u16::try_from(r).ok())
            .ok_or(Error::InvalidRadius(tile.radius))?;

        let center = Cube::new_xz(p.x_offset, p.z_offset);
        let rotation = Z6::from_steps(p.rotation);

        let mut hexagons = grid::range(center, range).collect::<Vec<_>>();
        hexagons.sort();

        let planets = side.iter().map(|pc| -> Result<Planet> {
            let c = Cube::new_xz(pc.x, pc.z)
                .rotate(rotation)
                .offset(p.x_offset, p.z_offset);
            if grid::distance(center, c) >= tile.radius as u32 {
                warn!(tile = p.number, planet = %c, "planet outside of its sector");
            }
            Ok(Planet::new(Hexagon::at(c), PlanetType::from_name(&pc.planet_type)?))
        }).collect::<Result<Vec<_>>>()?;

        let (screen_x_factor, screen_y_factor) = center.screen_factors();
        Ok(Sector {
            hexagons: hexagons.into_iter().map(Hexagon::at).collect(),
            planets,
            screen_x_factor,
            screen_y_factor,
        })
    }

    /// Generate a map for the given preset.
    pub fn generate<R: Rng + ?Sized>(&self, preset: Preset, rng: &mut R) -> Result<Map> {
        let mut map = Map {
            sectors: self.layout(preset.game_type())?,
            federations: Vec::new(),
        };
        if preset == Preset::LotsOBuildings {
            populate_buildings(&mut map, rng);
        }
        info!(preset = %preset, sectors = map.sectors.len(), planets = map.planets().count(), "generated map");
        Ok(map)
    }
}

/// Place a building of a random faction on every planet of the map.
pub fn populate_buildings<R: Rng + ?Sized>(map: &mut Map, rng: &mut R) {
    for planet in map.sectors.iter_mut().flat_map(|s| s.planets.iter_mut()) {
        let faction = Faction::ALL.choose(rng);
        let building = BuildingType::ALL.choose(rng);
        if let (Some(&f), Some(&b)) = (faction, building) {
            planet.inhabit(f, b);
        }
    }
}

/// The map generation presets offered to the user.
#[derive(PartialEq, Eq, Copy, Clone, Debug)]
pub enum Preset {
    OneTwoPlayer,
    ThreeFourPlayer,
    /// The 1p/2p layout with a building on every planet.
    LotsOBuildings,
}

impl Preset {
    pub const ALL: [Preset; 3] = [Preset::OneTwoPlayer, Preset::ThreeFourPlayer, Preset::LotsOBuildings];

    /// The name of the preset as used in query strings.
    pub fn as_str(self) -> &'static str {
        match self {
            Preset::OneTwoPlayer    => "1p_2p_default",
            Preset::ThreeFourPlayer => "3p_4p_default",
            Preset::LotsOBuildings  => "lots_o_buildings",
        }
    }

    /// The human-readable label of the preset.
    pub fn label(self) -> &'static str {
        match self {
            Preset::OneTwoPlayer    => "1p/2p Default",
            Preset::ThreeFourPlayer => "3p/4p Default",
            Preset::LotsOBuildings  => "lots o' buildings",
        }
    }

    /// The game type whose layout the preset uses.
    pub fn game_type(self) -> &'static str {
        match self {
            Preset::ThreeFourPlayer => Preset::ThreeFourPlayer.as_str(),
            Preset::OneTwoPlayer | Preset::LotsOBuildings => Preset::OneTwoPlayer.as_str(),
        }
    }
}

impl Default for Preset {
    fn default() -> Preset {
        Preset::OneTwoPlayer
    }
}

impl fmt::Display for Preset {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Preset {
    type Err = Error;

    fn from_str(s: &str) -> Result<Preset> {
        Preset::ALL.iter()
            .find(|p| p.as_str() == s)
            .copied()
            .ok_or_else(|| Error::UnknownPreset(s.to_string()))
    }
}
