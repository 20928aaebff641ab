use crate::coord::{DisplayCoord, GridCoord, Vector};
use crate::direction::CardinalDirection::{self, *};
use crate::rules::Turn;

/// N, E, S, W in sort order
pub(super) const DIRECTIONS: &[(CardinalDirection, Vector)] = &[
    (North, Vector::new(0, 1)),
    (East, Vector::new(1, 0)),
    (South, Vector::new(0, -1)),
    (West, Vector::new(-1, 0)),
];

pub(super) const LR_TOKENS: &[(&str, Turn)] = &[
    ("F", 1),
    ("N", 1),
    ("R", 2),
    ("B", 3),
    ("U", 3),
    ("L", 4),
];

/// Unit square with its lower-left corner on the coordinate.
pub(super) fn cell_vertices(coord: GridCoord) -> Vec<DisplayCoord> {
    let left = coord.x as f64;
    let right = left + 1.0;
    let bottom = coord.y as f64;
    let top = bottom + 1.0;
    vec![
        DisplayCoord::new(left, top),
        DisplayCoord::new(right, top),
        DisplayCoord::new(right, bottom),
        DisplayCoord::new(left, bottom),
    ]
}

pub(super) fn cell_centrepoint(coord: GridCoord) -> DisplayCoord {
    DisplayCoord::new(coord.x as f64 + 0.5, coord.y as f64 + 0.5)
}

pub(super) fn facing_angle(direction: CardinalDirection) -> Option<f64> {
    match direction {
        North => Some(0.0),
        East => Some(90.0),
        South => Some(180.0),
        West => Some(270.0),
        _ => None,
    }
}
