//! Rendering of gaiamap boards as SVG documents.

use gaiamap::geo::{ self, HexSize, Schema };
use gaiamap::map::{ Building, BuildingType, Hexagon, Map, Planet, Sector };

use either::Either;
use nalgebra::Point2;
use tracing::debug;

use std::fmt::{ self, Write };
use std::iter;

pub const SVG_NS: &str = "http://www.w3.org/2000/svg";

/// A node of the render tree of a board.
#[derive(Copy, Clone, Debug)]
pub enum Node<'a> {
    Board(&'a Map),
    Sector(&'a Sector),
    Hexagon(&'a Hexagon),
    Planet(&'a Planet),
    Building(&'a Building),
}

impl<'a> Node<'a> {
    /// The nodes drawn within this node, in drawing order.
    pub fn children(self) -> impl Iterator<Item=Node<'a>> {
        match self {
            Node::Board(m) => Either::Left(Either::Left(
                m.sectors.iter().map(Node::Sector)
            )),
            Node::Sector(s) => Either::Left(Either::Right(
                s.hexagons.iter().map(Node::Hexagon)
                    .chain(s.planets.iter().map(Node::Planet))
            )),
            Node::Planet(p) => Either::Right(Either::Left(
                p.building.iter().map(Node::Building)
            )),
            Node::Hexagon(_) | Node::Building(_) => Either::Right(Either::Right(
                iter::empty()
            )),
        }
    }
}

/// Renders boards with hexagons of a fixed size.
#[derive(Clone, Debug)]
pub struct Renderer {
    size: HexSize,
    schema: Schema,
}

impl Renderer {
    /// A renderer drawing hexagons of the given size.
    pub fn new(size: HexSize) -> Renderer {
        Renderer { size, schema: Schema::new(size) }
    }

    /// The size of the hexagons drawn.
    pub fn size(&self) -> HexSize {
        self.size
    }

    /// Render the map as a standalone SVG document.
    pub fn render(&self, map: &Map) -> Result<String, fmt::Error> {
        let mut out = String::new();
        self.write_node(&mut out, Node::Board(map))?;
        Ok(out)
    }

    /// Write the SVG markup of a node and its children.
    pub fn write_node<W: Write>(&self, w: &mut W, node: Node<'_>) -> fmt::Result {
        match node {
            Node::Board(m) => {
                let viewbox = geo::compute_viewbox(&m.sectors, self.size);
                debug!(sectors = m.sectors.len(), viewbox = %viewbox, "rendering board");
                write!(w, r#"<svg viewBox="{}" xmlns="{}">"#, viewbox, SVG_NS)?;
                self.write_children(w, node)?;
                w.write_str("</svg>")
            }
            Node::Sector(s) => {
                let t = geo::sector_translation(s, self.size);
                write!(w, r#"<g class="sector" transform="{}">"#, translate(t))?;
                self.write_children(w, node)?;
                w.write_str("</g>")
            }
            Node::Hexagon(h) => {
                let t = geo::hex_position(h, self.size);
                write!(w, r#"<g transform="{}">"#, translate(t))?;
                write!(w, r#"<g stroke="white" stroke-width="1">"#)?;
                write!(w, r#"<polygon id="{}" class="hex" points="{}"/>"#,
                    h, self.points())?;
                w.write_str("</g></g>")
            }
            Node::Planet(p) => {
                let t = geo::hex_position(&p.hex, self.size);
                write!(w, r#"<g class="planet" transform="{}">"#, translate(t))?;
                write!(w, r#"<circle cx="0" cy="0" r="{}" stroke="black" stroke-width="3" fill="{}"/>"#,
                    self.schema.planet_radius(), p.color())?;
                self.write_children(w, node)?;
                w.write_str("</g>")
            }
            Node::Building(b) => self.write_building(w, b),
        }
    }

    fn write_children<W: Write>(&self, w: &mut W, node: Node<'_>) -> fmt::Result {
        for child in node.children() {
            self.write_node(w, child)?;
        }
        Ok(())
    }

    /// Buildings are drawn centered on their planet, as a square or a
    /// disc in the color of their faction.
    fn write_building<W: Write>(&self, w: &mut W, b: &Building) -> fmt::Result {
        let s = self.schema.size();
        let class = building_class(b.building_type);
        let color = b.faction.color();
        match b.building_type {
            BuildingType::Mine | BuildingType::TradingStation | BuildingType::PlanetaryInstitute => {
                let half = s * match b.building_type {
                    BuildingType::Mine => 0.15,
                    BuildingType::TradingStation => 0.2,
                    _ => 0.3,
                };
                write!(w, r#"<rect class="building {}" x="{}" y="{}" width="{}" height="{}" stroke="black" stroke-width="2" fill="{}"/>"#,
                    class, -half, -half, 2. * half, 2. * half, color)
            }
            BuildingType::ResearchLab | BuildingType::Academy => {
                let r = s * if b.building_type == BuildingType::Academy { 0.3 } else { 0.2 };
                write!(w, r#"<circle class="building {}" cx="0" cy="0" r="{}" stroke="black" stroke-width="2" fill="{}"/>"#,
                    class, r, color)
            }
        }
    }

    /// The corners of a hexagon centered on the origin, as the value
    /// of a `points` attribute.
    fn points(&self) -> String {
        self.schema.corners(Point2::origin()).iter()
            .map(|c| format!("{},{}", c.x, c.y))
            .collect::<Vec<_>>()
            .join(" ")
    }
}

impl Default for Renderer {
    fn default() -> Renderer {
        Renderer::new(HexSize::default())
    }
}

fn translate(p: Point2<f64>) -> String {
    format!("translate({},{})", p.x, p.y)
}

fn building_class(b: BuildingType) -> &'static str {
    match b {
        BuildingType::Mine               => "mine",
        BuildingType::TradingStation     => "trading-station",
        BuildingType::ResearchLab        => "research-lab",
        BuildingType::PlanetaryInstitute => "planetary-institute",
        BuildingType::Academy            => "academy",
    }
}
