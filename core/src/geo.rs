//! Geometry of the board in a 2d cartesian (screen) coordinate system.
//!
//! Hexagons and sectors carry precomputed unit-scale screen factors
//! (see [`Cube::screen_factors`]). Everything here scales those factors
//! by the current hexagon size and never recomputes them.
//!
//! [`Cube::screen_factors`]: ../grid/struct.Cube.html#method.screen_factors

use nalgebra::geometry::Point2;

use std::fmt;

use crate::error::{ Error, Result };
use crate::map::{ Hexagon, Sector };

/// The angle (in radians) of the equilateral triangles that
/// a hexagon is composed of, i.e. 60 degrees in radians.
pub const ANGLE_RADIANS: f64 = std::f64::consts::FRAC_PI_3;

/// The scale applied to the screen factors of a sector, relative to
/// the scale of its hexagons, when computing the translation of the sector.
pub const SECTOR_STRETCH_FACTOR: f64 = 0.01;

/// The margin (in hexagon sizes) added on every side of a viewbox.
/// Screen factors address the center of a hexagon, not its edge.
pub const VIEWBOX_BORDER: f64 = 2.0;

/// The radius of a planet, relative to the size of its hexagon.
pub const PLANET_RADIUS: f64 = 0.7;

/// The display size of a hexagon, i.e. its circumradius in pixels.
#[derive(PartialEq, PartialOrd, Copy, Clone, Debug)]
pub struct HexSize(f64);

impl HexSize {
    /// Create a new hexagon size, which must be finite and positive.
    pub fn new(size: f64) -> Result<HexSize> {
        if size.is_finite() && size > 0. {
            Ok(HexSize(size))
        } else {
            Err(Error::InvalidHexSize(size))
        }
    }

    /// The size in pixels.
    pub fn get(self) -> f64 {
        self.0
    }
}

impl Default for HexSize {
    fn default() -> HexSize {
        HexSize(100.)
    }
}

impl From<HexSize> for f64 {
    fn from(HexSize(s): HexSize) -> f64 { s }
}

/// Scale a pair of screen factors to a position in pixel space.
pub fn pixel_position(factor_x: f64, factor_y: f64, size: f64) -> Point2<f64> {
    Point2::new(factor_x * size, factor_y * size)
}

/// The translation of a sector, i.e. the origin of the pixel space
/// its hexagons and planets are placed in.
pub fn sector_translation(sector: &Sector, size: HexSize) -> Point2<f64> {
    pixel_position(
        sector.screen_x_factor,
        sector.screen_y_factor,
        size.get() * SECTOR_STRETCH_FACTOR)
}

/// The position of a hexagon of a sector, relative to the sector.
pub fn hex_position(hex: &Hexagon, size: HexSize) -> Point2<f64> {
    pixel_position(hex.screen_x_factor, hex.screen_y_factor, size.get())
}

/// The absolute position of a hexagon of a sector, composing the
/// translation of the sector with the position of the hexagon.
pub fn position_in_sector(sector: &Sector, hex: &Hexagon, size: HexSize) -> Point2<f64> {
    sector_translation(sector, size) + hex_position(hex, size).coords
}

/// The region of pixel space to be displayed in order to fit a map.
#[derive(PartialEq, Copy, Clone, Debug, Default)]
pub struct Viewbox {
    pub min_x: f64,
    pub min_y: f64,
    pub width: f64,
    pub height: f64,
    max_x: f64,
    max_y: f64,
}

impl Viewbox {
    /// Whether the fitted bounds (borders included) contain the origin
    /// of pixel space. Only then are `width` and `height` the actual
    /// extent of the bounds: they are computed as the sum of the absolute
    /// distances of both edges from the origin, which overstates the
    /// extent when both edges lie on the same side.
    pub fn spans_origin(&self) -> bool {
        self.min_x <= 0. && 0. <= self.max_x && self.min_y <= 0. && 0. <= self.max_y
    }

    /// The actual `(width, height)` of the fitted bounds.
    pub fn extent(&self) -> (f64, f64) {
        (self.max_x - self.min_x, self.max_y - self.min_y)
    }
}

/// Formats the viewbox as the value of an SVG `viewBox` attribute.
impl fmt::Display for Viewbox {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {} {} {}", self.min_x, self.min_y, self.width, self.height)
    }
}

/// Compute the viewbox that fits all hexagons of the given sectors,
/// with a border of [`VIEWBOX_BORDER`] hexagon sizes on every side.
///
/// Without any hexagons the viewbox is all zeros.
///
/// Note: `width` and `height` are `|min| + |max|` per axis, which is only
/// the true span if the origin lies within the bounds (see
/// [`Viewbox::spans_origin`]).
///
/// [`VIEWBOX_BORDER`]: constant.VIEWBOX_BORDER.html
/// [`Viewbox::spans_origin`]: struct.Viewbox.html#method.spans_origin
pub fn compute_viewbox(sectors: &[Sector], size: HexSize) -> Viewbox {
    let mut hexagons = sectors.iter().flat_map(|s| s.hexagons.iter());
    let first = match hexagons.next() {
        Some(h) => h,
        None => return Viewbox::default(),
    };
    let init = (first.screen_x_factor, first.screen_x_factor,
                first.screen_y_factor, first.screen_y_factor);
    let (min_fx, max_fx, min_fy, max_fy) = hexagons.fold(init, |(x0, x1, y0, y1), h|
        ( f64::min(x0, h.screen_x_factor)
        , f64::max(x1, h.screen_x_factor)
        , f64::min(y0, h.screen_y_factor)
        , f64::max(y1, h.screen_y_factor)
        ));

    let s = size.get();
    let min_x = (min_fx - VIEWBOX_BORDER) * s;
    let max_x = (max_fx + VIEWBOX_BORDER) * s;
    let min_y = (min_fy - VIEWBOX_BORDER) * s;
    let max_y = (max_fy + VIEWBOX_BORDER) * s;

    Viewbox {
        min_x,
        min_y,
        width: min_x.abs() + max_x.abs(),
        height: min_y.abs() + max_y.abs(),
        max_x,
        max_y,
    }
}

/// A schematic for a regular flat-top hexagon of a given size.
#[derive(Clone, Debug)]
pub struct Schema {
    size: f64,
}

impl Schema {
    /// The schema of hexagons of the given size.
    pub fn new(size: HexSize) -> Schema {
        Schema { size: size.get() }
    }

    /// The circumradius of the hexagon in pixels.
    pub fn size(&self) -> f64 {
        self.size
    }

    /// The radius of a planet drawn on a hexagon of this schema.
    pub fn planet_radius(&self) -> f64 {
        self.size * PLANET_RADIUS
    }

    /// The corners of the hexagon around the given center, starting
    /// at the rightmost corner and continuing upwards on the screen,
    /// i.e. counterclockwise given a downwards pointing y-axis.
    pub fn corners(&self, center: Point2<f64>) -> [Point2<f64>; 6] {
        [ self.corner(center, 0)
        , self.corner(center, 1)
        , self.corner(center, 2)
        , self.corner(center, 3)
        , self.corner(center, 4)
        , self.corner(center, 5)
        ]
    }

    fn corner(&self, center: Point2<f64>, i: u8) -> Point2<f64> {
        let angle_rad = -ANGLE_RADIANS * i as f64;
        let x = center.x + self.size * angle_rad.cos();
        let y = center.y + self.size * angle_rad.sin();
        Point2::new(x, y)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use quickcheck::*;
    use rand::Rng;
    use rand::seq::SliceRandom;

    fn hex(fx: f64, fy: f64) -> Hexagon {
        Hexagon { x: 0, z: 0, screen_x_factor: fx, screen_y_factor: fy }
    }

    fn sector(hexagons: Vec<Hexagon>) -> Sector {
        Sector { hexagons, planets: Vec::new(), screen_x_factor: 0., screen_y_factor: 0. }
    }

    fn size(s: f64) -> HexSize {
        HexSize::new(s).unwrap()
    }

    impl Arbitrary for HexSize {
        fn arbitrary<G: Gen>(g: &mut G) -> HexSize {
            HexSize(g.gen_range(0.5, 500.))
        }
    }

    #[derive(Clone, Debug)]
    struct Sectors(Vec<Sector>);

    impl Arbitrary for Sectors {
        fn arbitrary<G: Gen>(g: &mut G) -> Sectors {
            let n = g.gen_range(1, 6);
            Sectors((0 .. n).map(|_| {
                let m = g.gen_range(1, 20);
                sector((0 .. m).map(|_| {
                    let (q, r) = (g.gen_range(-20, 20), g.gen_range(-20, 20));
                    hex(1.5 * q as f64, 0.5 * r as f64)
                }).collect())
            }).collect())
        }
    }

    #[test]
    fn viewbox_empty() {
        assert_eq!(compute_viewbox(&[], size(100.)), Viewbox::default());
        assert_eq!(compute_viewbox(&[], size(0.25)).to_string(), "0 0 0 0");
    }

    #[test]
    fn viewbox_sectors_without_hexagons() {
        let sectors = vec![sector(Vec::new()), sector(Vec::new())];
        assert_eq!(compute_viewbox(&sectors, size(100.)), Viewbox::default());
    }

    #[test]
    fn viewbox_single_hexagon() {
        let vb = compute_viewbox(&[sector(vec![hex(0., 0.)])], size(100.));
        assert_eq!(vb, Viewbox {
            min_x: -200., min_y: -200., width: 400., height: 400., max_x: 200., max_y: 200.
        });
        assert_eq!(vb.extent(), (400., 400.));
        assert_eq!(vb.to_string(), "-200 -200 400 400");
        assert!(vb.spans_origin());
    }

    #[test]
    fn viewbox_symmetric_pair() {
        let vb = compute_viewbox(&[sector(vec![hex(1., 0.), hex(-1., 0.)])], size(50.));
        assert_eq!(vb.min_x, -150.);
        assert_eq!(vb.width, 300.);
        assert_eq!(vb.min_y, -100.);
        assert_eq!(vb.height, 200.);
    }

    #[test]
    fn viewbox_spans_multiple_sectors() {
        let sectors = vec![sector(vec![hex(-3., 1.)]), sector(vec![hex(4.5, -2.)])];
        let vb = compute_viewbox(&sectors, size(10.));
        assert_eq!(vb.min_x, -50.);
        assert_eq!(vb.width, 50. + 65.);
        assert_eq!(vb.min_y, -40.);
        assert_eq!(vb.height, 40. + 30.);
    }

    /// The width is `|min_x| + |max_x|`: with all hexagons far right of
    /// the origin it exceeds the actual span `max_x - min_x`.
    #[test]
    fn viewbox_off_origin_overstates_span() {
        let vb = compute_viewbox(&[sector(vec![hex(10., 0.), hex(12., 0.)])], size(1.));
        let (min_x, max_x) = (8., 14.);
        assert_eq!(vb.min_x, min_x);
        assert_eq!(vb.width, min_x + max_x);
        assert!(vb.width > max_x - min_x);
        assert_eq!(vb.extent().0, max_x - min_x);
        assert!(!vb.spans_origin());
    }

    /// Same for hexagons far left of and above the origin: both edges
    /// are negative and the width is again `|min_x| + |max_x|`.
    #[test]
    fn viewbox_off_origin_negative_side() {
        let vb = compute_viewbox(&[sector(vec![hex(-12., -12.), hex(-10., -10.)])], size(1.));
        assert_eq!(vb.to_string(), "-14 -14 22 22");
        assert_eq!(vb.extent(), (6., 6.));
        assert!(!vb.spans_origin());
    }

    #[test]
    fn prop_viewbox_quirk_detected() {
        fn prop(s: Sectors, z: HexSize) -> bool {
            let vb = compute_viewbox(&s.0, z);
            let (w, h) = vb.extent();
            !vb.spans_origin() || (vb.width == w && vb.height == h)
        }
        quickcheck(prop as fn(_,_) -> _);
    }

    #[test]
    fn prop_viewbox_idempotent() {
        fn prop(s: Sectors, z: HexSize) -> bool {
            let a = compute_viewbox(&s.0, z);
            let b = compute_viewbox(&s.0, z);
            a.min_x.to_bits() == b.min_x.to_bits()
                && a.min_y.to_bits() == b.min_y.to_bits()
                && a.width.to_bits() == b.width.to_bits()
                && a.height.to_bits() == b.height.to_bits()
        }
        quickcheck(prop as fn(_,_) -> _);
    }

    #[test]
    fn prop_viewbox_order_independent() {
        fn prop(s: Sectors, z: HexSize) -> bool {
            let mut g = rand::thread_rng();
            let mut shuffled = s.0.clone();
            shuffled.shuffle(&mut g);
            for sec in shuffled.iter_mut() {
                sec.hexagons.shuffle(&mut g);
            }
            compute_viewbox(&s.0, z) == compute_viewbox(&shuffled, z)
        }
        quickcheck(prop as fn(_,_) -> _);
    }

    #[test]
    fn prop_viewbox_contains_hexagons() {
        fn prop(s: Sectors, z: HexSize) -> bool {
            let vb = compute_viewbox(&s.0, z);
            s.0.iter().flat_map(|sec| sec.hexagons.iter()).all(|h| {
                let p = hex_position(h, z);
                vb.min_x < p.x && vb.min_y < p.y
            })
        }
        quickcheck(prop as fn(_,_) -> _);
    }

    #[test]
    fn prop_pixel_position_linear() {
        fn prop(fx: i16, fy: i16, z: HexSize) -> bool {
            let (fx, fy) = (fx as f64 / 8., fy as f64 / 8.);
            let s = z.get();
            let p1 = pixel_position(fx, fy, s);
            let p2 = pixel_position(fx, fy, 2. * s);
            p2.x == 2. * p1.x && p2.y == 2. * p1.y
        }
        quickcheck(prop as fn(_,_,_) -> _);
    }

    #[test]
    fn pixel_position_scales_factors() {
        assert_eq!(pixel_position(1.5, -2., 100.), Point2::new(150., -200.));
        assert_eq!(pixel_position(0., 0., 42.), Point2::origin());
    }

    #[test]
    fn position_in_sector_is_additive() {
        let sec = Sector {
            hexagons: Vec::new(),
            planets: Vec::new(),
            screen_x_factor: 300.,
            screen_y_factor: -100.,
        };
        let h = hex(1.5, 0.5);
        let p = position_in_sector(&sec, &h, size(100.));
        assert_eq!(sector_translation(&sec, size(100.)), Point2::new(300., -100.));
        assert_eq!(p, Point2::new(450., -50.));
    }

    #[test]
    fn hex_size_validation() {
        assert!(HexSize::new(1.).is_ok());
        assert!(matches!(HexSize::new(0.), Err(Error::InvalidHexSize(_))));
        assert!(HexSize::new(-3.).is_err());
        assert!(HexSize::new(f64::NAN).is_err());
        assert!(HexSize::new(f64::INFINITY).is_err());
        assert_eq!(HexSize::default().get(), 100.);
    }

    #[test]
    fn schema_corners_flat_top() {
        let schema = Schema::new(size(100.));
        let cs = schema.corners(Point2::origin());
        let expected = [(100., 0.), (50., -87.), (-50., -87.), (-100., 0.), (-50., 87.), (50., 87.)];
        for (c, (x, y)) in cs.iter().zip(expected.iter()) {
            assert!((c.x - x).abs() < 0.5, "{} != {}", c.x, x);
            assert!((c.y - y).abs() < 0.5, "{} != {}", c.y, y);
        }
        assert_eq!(schema.planet_radius(), 70.);
    }
}
