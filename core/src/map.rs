//! The map model: sectors of hexagons, planets and buildings, as
//! exchanged in JSON between the map server and its renderers.
//!
//! Enumerations are encoded as their integer codes. Decoding rejects
//! unknown codes, and [`Map::from_json`] additionally rejects screen
//! factors that are not finite numbers.
//!
//! [`Map::from_json`]: struct.Map.html#method.from_json

use num_traits::cast::FromPrimitive;
use serde::{ Deserialize, Serialize };
use tracing::debug;

use std::convert::TryFrom;
use std::fmt;

use crate::error::{ Error, Result };
use crate::grid::Cube;

/// A single cell of the board, with the unit-scale screen factors
/// of its center.
#[derive(PartialEq, Clone, Debug, Serialize, Deserialize)]
pub struct Hexagon {
    pub x: i32,
    pub z: i32,
    pub screen_x_factor: f64,
    pub screen_y_factor: f64,
}

impl Hexagon {
    /// The hexagon at the given coordinates, projecting them to
    /// their screen factors.
    pub fn at(c: Cube) -> Hexagon {
        let (screen_x_factor, screen_y_factor) = c.screen_factors();
        Hexagon { x: c.x(), z: c.z(), screen_x_factor, screen_y_factor }
    }

    /// The cube coordinates of the hexagon. The axial coordinates of a
    /// decoded hexagon are unchecked, so `-x - z` may overflow for values
    /// near the bounds of `i32`.
    pub fn coords(&self) -> Cube {
        Cube::new_xz(self.x, self.z)
    }

    fn validate(&self) -> Result<()> {
        finite(self.screen_x_factor, || format!("hexagon {} screen_x_factor", self))?;
        finite(self.screen_y_factor, || format!("hexagon {} screen_y_factor", self))
    }
}

/// Formats the axial coordinates as `(x,z)`, the id of the hexagon.
impl fmt::Display for Hexagon {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({},{})", self.x, self.z)
    }
}

/// A group of hexagons sharing a common offset, i.e. one side of a
/// physical board tile.
#[derive(PartialEq, Clone, Debug, Serialize, Deserialize)]
pub struct Sector {
    pub hexagons: Vec<Hexagon>,
    #[serde(default)]
    pub planets: Vec<Planet>,
    pub screen_x_factor: f64,
    pub screen_y_factor: f64,
}

impl Sector {
    fn validate(&self) -> Result<()> {
        finite(self.screen_x_factor, || "sector screen_x_factor".to_string())?;
        finite(self.screen_y_factor, || "sector screen_y_factor".to_string())?;
        for h in &self.hexagons {
            h.validate()?;
        }
        for p in &self.planets {
            p.hex.validate()?;
        }
        Ok(())
    }
}

/// A planet on a hexagon. Encoding adds the `planet_color` of its type,
/// which decoding ignores.
#[derive(PartialEq, Clone, Debug, Serialize, Deserialize)]
#[serde(into = "PlanetRecord")]
pub struct Planet {
    pub hex: Hexagon,
    pub planet_type: PlanetType,
    #[serde(default)]
    pub faction: Option<Faction>,
    #[serde(default)]
    pub building: Option<Building>,
}

#[derive(Serialize)]
struct PlanetRecord {
    hex: Hexagon,
    planet_type: PlanetType,
    planet_color: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    faction: Option<Faction>,
    #[serde(skip_serializing_if = "Option::is_none")]
    building: Option<Building>,
}

impl From<Planet> for PlanetRecord {
    fn from(p: Planet) -> PlanetRecord {
        PlanetRecord {
            planet_color: p.color(),
            hex: p.hex,
            planet_type: p.planet_type,
            faction: p.faction,
            building: p.building,
        }
    }
}

impl Planet {
    pub fn new(hex: Hexagon, planet_type: PlanetType) -> Planet {
        Planet { hex, planet_type, faction: None, building: None }
    }

    /// Place a building of the given faction on the planet, which
    /// thereby becomes inhabited by the faction.
    pub fn inhabit(&mut self, faction: Faction, building_type: BuildingType) {
        self.faction = Some(faction);
        self.building = Some(Building { faction, building_type });
    }

    pub fn is_inhabited(&self) -> bool {
        self.building.is_some()
    }

    pub fn color(&self) -> &'static str {
        self.planet_type.color()
    }
}

#[derive(PartialEq, Eq, Copy, Clone, Debug, Serialize, Deserialize)]
pub struct Building {
    pub faction: Faction,
    pub building_type: BuildingType,
}

/// A federation of planets, carried through as is.
#[derive(PartialEq, Clone, Debug, Serialize, Deserialize)]
pub struct Federation {
    pub hexagons: Vec<Hexagon>,
    pub faction: Faction,
    #[serde(default)]
    pub activated: bool,
}

/// The complete state of the board.
#[derive(PartialEq, Clone, Debug, Default, Serialize, Deserialize)]
pub struct Map {
    pub sectors: Vec<Sector>,
    #[serde(default)]
    pub federations: Vec<Federation>,
}

impl Map {
    /// Decode and validate a map.
    pub fn from_json(json: &str) -> Result<Map> {
        let map: Map = serde_json::from_str(json)?;
        map.validate()?;
        debug!(sectors = map.sectors.len(), federations = map.federations.len(), "decoded map");
        Ok(map)
    }

    pub fn to_json(&self) -> Result<String> {
        serde_json::to_string(self).map_err(Into::into)
    }

    /// Check that all screen factors are finite numbers.
    pub fn validate(&self) -> Result<()> {
        for s in &self.sectors {
            s.validate()?;
        }
        for f in &self.federations {
            for h in &f.hexagons {
                h.validate()?;
            }
        }
        Ok(())
    }

    /// Iterate over the hexagons of all sectors.
    pub fn hexagons(&self) -> impl Iterator<Item=&Hexagon> + '_ {
        self.sectors.iter().flat_map(|s| s.hexagons.iter())
    }

    /// Iterate over the planets of all sectors.
    pub fn planets(&self) -> impl Iterator<Item=&Planet> + '_ {
        self.sectors.iter().flat_map(|s| s.planets.iter())
    }

    /// Get the planet on the hexagon with the given coordinates, if any.
    pub fn planet_at(&self, x: i32, z: i32) -> Option<&Planet> {
        self.planets().find(|p| p.hex.x == x && p.hex.z == z)
    }
}

fn finite<F: FnOnce() -> String>(value: f64, what: F) -> Result<()> {
    if value.is_finite() {
        Ok(())
    } else {
        Err(Error::NonFiniteFactor { what: what(), value })
    }
}

#[derive(PartialEq, Eq, Hash, Copy, Clone, Debug, FromPrimitive)]
#[derive(Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub enum PlanetType {
    Red      = 1,
    Orange   = 2,
    White    = 3,
    Grey     = 4,
    Yellow   = 5,
    Brown    = 6,
    Blue     = 7,
    Gaia     = 8,
    Transdim = 9,
    Lost     = 10,
}

impl PlanetType {
    pub fn color(self) -> &'static str {
        use PlanetType::*;
        match self {
            Red      => "#ff0000",
            Orange   => "#ff6600",
            White    => "#ffffff",
            Grey     => "#b3b3b3",
            Yellow   => "#ffff00",
            Brown    => "#663300",
            Blue     => "#0000ff",
            Gaia     => "#00ff00",
            Transdim => "#cc00cc",
            Lost     => "#cc6699",
        }
    }

    /// Parse the upper-case name used in board configurations, e.g. `"RED"`.
    pub fn from_name(name: &str) -> Result<PlanetType> {
        use PlanetType::*;
        match name {
            "RED"      => Ok(Red),
            "ORANGE"   => Ok(Orange),
            "WHITE"    => Ok(White),
            "GREY"     => Ok(Grey),
            "YELLOW"   => Ok(Yellow),
            "BROWN"    => Ok(Brown),
            "BLUE"     => Ok(Blue),
            "GAIA"     => Ok(Gaia),
            "TRANSDIM" => Ok(Transdim),
            "LOST"     => Ok(Lost),
            _ => Err(Error::UnknownPlanetName(name.to_string())),
        }
    }
}

impl TryFrom<u8> for PlanetType {
    type Error = Error;
    fn try_from(code: u8) -> Result<PlanetType> {
        PlanetType::from_u8(code).ok_or(Error::UnknownPlanetType(code))
    }
}

impl From<PlanetType> for u8 {
    fn from(t: PlanetType) -> u8 { t as u8 }
}

#[derive(PartialEq, Eq, Hash, Copy, Clone, Debug, FromPrimitive)]
#[derive(Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub enum Faction {
    Terrans      = 0,
    Lantids      = 1,
    Xenos        = 2,
    Gleens       = 3,
    Taklons      = 4,
    Ambas        = 5,
    HadschHallas = 6,
    Ivits        = 7,
    Geodens      = 8,
    Baltaks      = 9,
    Firaks       = 10,
    Bescods      = 11,
    Nevlas       = 12,
    Itars        = 13,
}

impl Faction {
    pub const ALL: [Faction; 14] = [
        Faction::Terrans, Faction::Lantids, Faction::Xenos, Faction::Gleens,
        Faction::Taklons, Faction::Ambas, Faction::HadschHallas, Faction::Ivits,
        Faction::Geodens, Faction::Baltaks, Faction::Firaks, Faction::Bescods,
        Faction::Nevlas, Faction::Itars,
    ];

    /// The type of the home planet of the faction.
    pub fn home_planet(self) -> PlanetType {
        use Faction::*;
        match self {
            Terrans | Lantids      => PlanetType::Blue,
            Xenos | Gleens         => PlanetType::Yellow,
            Taklons | Ambas        => PlanetType::Brown,
            HadschHallas | Ivits   => PlanetType::Red,
            Geodens | Baltaks      => PlanetType::Orange,
            Firaks | Bescods       => PlanetType::Grey,
            Nevlas | Itars         => PlanetType::White,
        }
    }

    /// The color of the faction, i.e. that of its home planet.
    pub fn color(self) -> &'static str {
        self.home_planet().color()
    }
}

impl TryFrom<u8> for Faction {
    type Error = Error;
    fn try_from(code: u8) -> Result<Faction> {
        Faction::from_u8(code).ok_or(Error::UnknownFaction(code))
    }
}

impl From<Faction> for u8 {
    fn from(f: Faction) -> u8 { f as u8 }
}

#[derive(PartialEq, Eq, Hash, Copy, Clone, Debug, FromPrimitive)]
#[derive(Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub enum BuildingType {
    Mine               = 0,
    TradingStation     = 1,
    ResearchLab        = 2,
    PlanetaryInstitute = 3,
    Academy            = 4,
}

impl BuildingType {
    pub const ALL: [BuildingType; 5] = [
        BuildingType::Mine, BuildingType::TradingStation, BuildingType::ResearchLab,
        BuildingType::PlanetaryInstitute, BuildingType::Academy,
    ];
}

impl TryFrom<u8> for BuildingType {
    type Error = Error;
    fn try_from(code: u8) -> Result<BuildingType> {
        BuildingType::from_u8(code).ok_or(Error::UnknownBuildingType(code))
    }
}

impl From<BuildingType> for u8 {
    fn from(b: BuildingType) -> u8 { b as u8 }
}
