use std::fmt;
use std::ops::Add;

/// Integer displacement between two lattice coordinates.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Vector {
    pub dx: i64,
    pub dy: i64,
}

impl Vector {
    pub const fn new(dx: i64, dy: i64) -> Self {
        Self { dx, dy }
    }
}

impl Add for Vector {
    type Output = Vector;

    #[inline]
    fn add(self, other: Vector) -> Vector {
        Vector::new(self.dx + other.dx, self.dy + other.dy)
    }
}

/// A cell on the integer lattice shared by every topology.
///
/// Which coordinates are actually cells is decided by the topology; the
/// triangular lattice only uses coordinates whose components share a parity.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct GridCoord {
    pub x: i64,
    pub y: i64,
}

impl GridCoord {
    pub const ORIGIN: GridCoord = GridCoord { x: 0, y: 0 };

    pub const fn new(x: i64, y: i64) -> Self {
        Self { x, y }
    }

    /// `self + v`, or `None` if either component leaves the `i64` range.
    #[inline]
    pub fn checked_add(self, v: Vector) -> Option<GridCoord> {
        Some(GridCoord::new(self.x.checked_add(v.dx)?, self.y.checked_add(v.dy)?))
    }
}

impl Add<Vector> for GridCoord {
    type Output = GridCoord;

    #[inline]
    fn add(self, v: Vector) -> GridCoord {
        GridCoord::new(self.x + v.dx, self.y + v.dy)
    }
}

impl Add<GridCoord> for Vector {
    type Output = GridCoord;

    #[inline]
    fn add(self, coord: GridCoord) -> GridCoord {
        coord + self
    }
}

impl fmt::Display for GridCoord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

/// A point in rendering space. +y points north.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct DisplayCoord {
    pub x: f64,
    pub y: f64,
}

impl DisplayCoord {
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

impl fmt::Display for DisplayCoord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({:.3}, {:.3})", self.x, self.y)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_adding_vectors_to_coords() {
        let coord = GridCoord::new(10, 10);
        let vector = Vector::new(4, 1);
        let expected = GridCoord::new(14, 11);

        assert_eq!(coord + vector, expected);
        assert_eq!(vector + coord, expected);
    }

    #[test]
    fn test_adding_vectors() {
        assert_eq!(Vector::new(1, -2) + Vector::new(-3, 5), Vector::new(-2, 3));
    }

    #[test]
    fn test_coords_compare_by_value() {
        use std::collections::HashSet;

        let mut seen = HashSet::new();
        seen.insert(GridCoord::new(3, -7));
        assert!(seen.contains(&GridCoord::new(3, -7)));
        assert!(!seen.contains(&GridCoord::new(-7, 3)));
    }
}
