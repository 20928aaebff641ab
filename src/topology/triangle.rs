//! Triangular tiling on the shared integer lattice.
//!
//! Only coordinates whose components share a parity are cells. Cells with an
//! even `x` point up and have edges facing NE, NW and S; cells with an odd `x`
//! point down and have edges facing N, SE and SW. Every step therefore lands
//! on a cell of the other orientation.
//!
//! Scheme: <https://github.com/mhwombat/grid/wiki/Implementation%3A-Triangular-tiles>

use crate::coord::{DisplayCoord, GridCoord, Vector};
use crate::direction::CardinalDirection::{self, *};
use crate::rules::Turn;

pub(super) const EVEN: &[(CardinalDirection, Vector)] = &[
    (NorthEast, Vector::new(1, 1)),
    (South, Vector::new(1, -1)),
    (NorthWest, Vector::new(-1, 1)),
];

pub(super) const ODD: &[(CardinalDirection, Vector)] = &[
    (North, Vector::new(-1, 1)),
    (SouthEast, Vector::new(1, -1)),
    (SouthWest, Vector::new(-1, -1)),
];

pub(super) const LR_TOKENS: &[(&str, Turn)] = &[("R", 1), ("B", 2), ("L", 3)];

#[inline]
pub(super) fn is_valid(coord: GridCoord) -> bool {
    coord.x.rem_euclid(2) == coord.y.rem_euclid(2)
}

#[inline]
pub(super) fn is_even(coord: GridCoord) -> bool {
    coord.x.rem_euclid(2) == 0
}

pub(super) fn direction_vectors(coord: GridCoord) -> &'static [(CardinalDirection, Vector)] {
    if is_even(coord) {
        EVEN
    } else {
        ODD
    }
}

/// Directions an ant arrives with, i.e. the other orientation's edges.
pub(super) fn arrival_vectors(coord: GridCoord) -> &'static [(CardinalDirection, Vector)] {
    if is_even(coord) {
        ODD
    } else {
        EVEN
    }
}

fn index_of(set: &[(CardinalDirection, Vector)], direction: CardinalDirection) -> Option<usize> {
    set.iter().position(|(d, _)| *d == direction)
}

/// Turning always picks from the opposite set. Leaving the odd set uses one
/// less turn than leaving the even set; trajectories depend on this offset.
pub(super) fn rotate(current: CardinalDirection, turn: Turn) -> Option<CardinalDirection> {
    let (old_index, new_set, turn) = if let Some(i) = index_of(EVEN, current) {
        (i, ODD, i64::from(turn))
    } else if let Some(i) = index_of(ODD, current) {
        (i, EVEN, i64::from(turn) - 1)
    } else {
        return None;
    };

    let next = (old_index as i64 + turn).rem_euclid(new_set.len() as i64) as usize;
    Some(new_set[next].0)
}

/// Side length 2, so a strip of triangles is sqrt(3) tall.
#[inline]
fn height() -> f64 {
    3f64.sqrt()
}

/// Horizontal centre and strip index of a cell.
#[inline]
fn placement(coord: GridCoord) -> (f64, i64) {
    let strip = coord.y.div_euclid(2);
    (coord.x as f64 + strip as f64, strip)
}

pub(super) fn cell_vertices(coord: GridCoord) -> Vec<DisplayCoord> {
    let (cx, strip) = placement(coord);
    let bottom = strip as f64 * height();
    let top = (strip + 1) as f64 * height();

    if is_even(coord) {
        vec![
            DisplayCoord::new(cx, top),
            DisplayCoord::new(cx + 1.0, bottom),
            DisplayCoord::new(cx - 1.0, bottom),
        ]
    } else {
        vec![
            DisplayCoord::new(cx - 1.0, top),
            DisplayCoord::new(cx + 1.0, top),
            DisplayCoord::new(cx, bottom),
        ]
    }
}

pub(super) fn cell_centrepoint(coord: GridCoord) -> DisplayCoord {
    let (cx, strip) = placement(coord);
    let thirds = if is_even(coord) { 1.0 } else { 2.0 };
    DisplayCoord::new(cx, (strip as f64 + thirds / 3.0) * height())
}

pub(super) fn facing_angle(direction: CardinalDirection) -> Option<f64> {
    match direction {
        North => Some(0.0),
        NorthEast => Some(60.0),
        SouthEast => Some(120.0),
        South => Some(180.0),
        SouthWest => Some(240.0),
        NorthWest => Some(300.0),
        East | West => None,
    }
}
