//! Cube coordinates of the board, addressed by their axial `(x, z)`
//! components, and their projection to unit-scale screen factors.

use nalgebra::{ Point3, Vector3 };
use num_traits::cast::FromPrimitive;

use std::cmp::{ min, max, Ordering };
use std::fmt;

/// Cube coordinates, i.e. points in 3d space, satisfying `x + y + z = 0`.
///
/// The board is addressed by the axial pair `(x, z)`, the third component
/// being implied. The projection to the screen uses a flat-top orientation:
///
/// ```raw
///         -x/+z
///  -x/+y   ___   +z/-y
///         /   \
///         \___/
///  +y/-z         +x/-y ...
/// ```
///
/// Guide: [Cube coordinates]
///
/// [Cube coordinates]: https://www.redblobgames.com/grids/hexagons/#coordinates-cube
#[derive(Copy, Clone, PartialEq, Eq, Debug, Hash)]
pub struct Cube {
    p: Point3<i32>,
}

impl Cube {
    pub fn origin() -> Cube {
        Self::mk(0, 0, 0)
    }

    pub fn new_xz(x: i32, z: i32) -> Cube {
        Self::mk(x, -x - z, z)
    }

    pub fn x(&self) -> i32 { self.p.x }
    pub fn y(&self) -> i32 { self.p.y }
    pub fn z(&self) -> i32 { self.p.z }

    /// The column of the coordinates in the projection onto the screen.
    pub fn q(&self) -> i32 {
        self.x() + self.z()
    }

    /// The row of the coordinates in the projection onto the screen.
    pub fn r(&self) -> i32 {
        -self.x()
    }

    /// The unit-scale screen factors of the hexagon center, i.e. its
    /// pixel position for a hexagon of size 1, satisfying
    /// ```ignore
    /// Cube::origin().screen_factors() == (0., 0.)
    /// ```
    pub fn screen_factors(&self) -> (f64, f64) {
        let (q, r) = (f64::from(self.q()), f64::from(self.r()));
        let sqrt3 = f64::sqrt(3.0);
        (1.5 * q, sqrt3 / 2.0 * q + sqrt3 * r)
    }

    /// Translate the coordinates along the `x` and `z` axes.
    pub fn offset(self, dx: i32, dz: i32) -> Cube {
        Cube { p: self.p + Vector3::new(dx, -dx - dz, dz) }
    }

    /// Rotate the coordinates around the origin by `n` steps of 60 degrees.
    pub fn rotate(self, n: Z6) -> Cube {
        let (mut x, mut y, mut z) = (self.x(), self.y(), self.z());
        for _ in 0 .. n as u8 {
            let turned = (-z, -x, -y);
            x = turned.0;
            y = turned.1;
            z = turned.2;
        }
        Self::mk(x, y, z)
    }

    fn mk(x: i32, y: i32, z: i32) -> Cube {
        debug_assert!(x + y + z == 0);
        Cube { p: Point3::new(x, y, z) }
    }

    /// Validity check for the cube coordinates, i.e. that they
    /// represent a point in the plane defined by `x + y + z = 0`.
    #[cfg(test)]
    fn is_valid(&self) -> bool {
        self.x() + self.y() + self.z() == 0
    }
}

impl fmt::Display for Cube {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({},{})", self.x(), self.z())
    }
}

impl Ord for Cube {
    fn cmp(&self, other: &Cube) -> Ordering {
        self.x().cmp(&other.x()).then(self.z().cmp(&other.z()))
    }
}

impl PartialOrd for Cube {
    fn partial_cmp(&self, other: &Cube) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// The cyclic group of order 6, i.e. the number of 60 degree steps
/// of a rotation.
#[derive(PartialEq, Eq, Copy, Clone, Debug, FromPrimitive)]
pub enum Z6 {
    Zero  = 0,
    One   = 1,
    Two   = 2,
    Three = 3,
    Four  = 4,
    Five  = 5,
}

impl Z6 {
    /// Reduce an arbitrary number of steps modulo 6.
    pub fn from_steps(n: i32) -> Z6 {
        Z6::from_i32(n.rem_euclid(6)).unwrap_or(Z6::Zero)
    }
}

/// The distance between two cube coordinates.
pub fn distance(a: Cube, b: Cube) -> u32 {
    ( (a.x() - b.x()).abs() as u32 +
      (a.y() - b.y()).abs() as u32 +
      (a.z() - b.z()).abs() as u32 ) / 2
}

/// The number of cube coordinates that are within the given range.
pub fn num_in_range(r: u16) -> usize {
    3 * (r as usize) * (r as usize + 1) + 1
}

/// The cube coordinates that are within the given range.
pub fn range(c: Cube, r: u16) -> impl Iterator<Item=Cube> + Clone {
    let x_end   = r as i32;
    let x_start = -x_end;
    (x_start ..= x_end).flat_map(move |x| {
        let y_start = max(x_start, -x - x_end);
        let y_end   = min(x_end,   -x + x_end);
        (y_start ..= y_end).map(move |y| {
            Cube { p: c.p + Vector3::new(x, y, -x - y) }
        })
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use quickcheck::*;
    use rand::Rng;
    use std::collections::HashSet;

    impl Arbitrary for Cube {
        fn arbitrary<G: Gen>(g: &mut G) -> Cube {
            let (x, z) = (g.gen::<i16>(), g.gen::<i16>());
            Cube::new_xz(x as i32, z as i32)
        }
    }

    impl Arbitrary for Z6 {
        fn arbitrary<G: Gen>(g: &mut G) -> Z6 {
            Z6::from_u8(g.gen_range(0, 6)).unwrap()
        }
    }

    #[test]
    fn prop_new_cube() {
        fn prop(c: Cube) -> bool {
            c.is_valid()
        }
        quickcheck(prop as fn(_) -> _);
    }

    #[test]
    fn prop_range() {
        fn prop(c: Cube, r: u8) -> bool {
            let r = r as u16 % 32;
            let v = range(c, r).collect::<Vec<Cube>>();
            v.iter().all(|n| n.is_valid() && distance(c, *n) <= r as u32)
                && v.contains(&c)
                && v.len() == num_in_range(r)
        }
        quickcheck(prop as fn(_,_) -> _);
    }

    #[test]
    fn prop_rotate_full_circle() {
        fn prop(c: Cube) -> bool {
            (0 .. 6).fold(c, |acc, _| acc.rotate(Z6::One)) == c
        }
        quickcheck(prop as fn(_) -> _);
    }

    #[test]
    fn prop_rotate_preserves_distance() {
        fn prop(c: Cube, n: Z6) -> bool {
            let r = c.rotate(n);
            r.is_valid() && distance(Cube::origin(), r) == distance(Cube::origin(), c)
        }
        quickcheck(prop as fn(_,_) -> _);
    }

    #[test]
    fn prop_offset_round_trip() {
        fn prop(c: Cube, dx: i16, dz: i16) -> bool {
            let (dx, dz) = (dx as i32, dz as i32);
            let moved = c.offset(dx, dz);
            moved.is_valid() && moved.offset(-dx, -dz) == c
        }
        quickcheck(prop as fn(_,_,_) -> _);
    }

    #[test]
    fn rotate_single_step() {
        // (x, y, z) -> (-z, -x, -y)
        let c = Cube::new_xz(1, 0);
        assert_eq!(c.rotate(Z6::One), Cube::new_xz(0, 1));
        assert_eq!(c.rotate(Z6::Three), Cube::new_xz(-1, 0));
    }

    #[test]
    fn z6_from_steps_wraps() {
        assert_eq!(Z6::from_steps(7), Z6::One);
        assert_eq!(Z6::from_steps(-1), Z6::Five);
        assert_eq!(Z6::from_steps(0), Z6::Zero);
    }

    #[test]
    fn sector_sized_ranges() {
        assert_eq!(range(Cube::origin(), 0).count(), 1);
        assert_eq!(range(Cube::origin(), 1).count(), 7);
        assert_eq!(range(Cube::origin(), 2).count(), 19);
        let ring = range(Cube::new_xz(3, -1), 1).collect::<HashSet<_>>();
        assert!(ring.contains(&Cube::new_xz(4, -1)));
        assert!(!ring.contains(&Cube::new_xz(5, -1)));
    }

    #[test]
    fn screen_factors() {
        assert_eq!(Cube::origin().screen_factors(), (0., 0.));
        let (sx, sy) = Cube::new_xz(0, 1).screen_factors();
        assert_eq!(sx, 1.5);
        assert!((sy - f64::sqrt(3.0) / 2.0).abs() < 1e-12);
        let (sx, sy) = Cube::new_xz(1, 0).screen_factors();
        assert_eq!(sx, 1.5);
        assert!((sy - (f64::sqrt(3.0) / 2.0 - f64::sqrt(3.0))).abs() < 1e-12);
    }

    #[test]
    fn display_axial() {
        assert_eq!(Cube::new_xz(-2, 5).to_string(), "(-2,5)");
    }

    #[test]
    fn distance_along_axis() {
        assert_eq!(distance(Cube::origin(), Cube::new_xz(3, 0)), 3);
        assert_eq!(distance(Cube::new_xz(1, 1), Cube::new_xz(-1, 2)), 2);
    }
}
