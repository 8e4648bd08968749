//! Geometry and data model for rendering hexagonal board-game maps,
//! i.e. maps made of sectors of hexagons carrying planets and buildings.

#[macro_use]
extern crate num_derive;

pub mod error;
pub mod geo;
pub mod grid;
pub mod loader;
pub mod map;

pub use error::Error;
