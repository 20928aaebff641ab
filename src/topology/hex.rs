//! Pointy-topped hexagons stored as an "odd-r" offset grid: cells lie in
//! horizontal rows and every odd row is shifted half a cell east.
//!
//! See <https://www.redblobgames.com/grids/hexagons/> for the layout.

use crate::coord::{DisplayCoord, GridCoord, Vector};
use crate::direction::CardinalDirection::{self, *};
use crate::rules::Turn;

pub(super) const EVEN_ROW: &[(CardinalDirection, Vector)] = &[
    (NorthEast, Vector::new(0, 1)),
    (East, Vector::new(1, 0)),
    (SouthEast, Vector::new(0, -1)),
    (SouthWest, Vector::new(-1, -1)),
    (West, Vector::new(-1, 0)),
    (NorthWest, Vector::new(-1, 1)),
];

pub(super) const ODD_ROW: &[(CardinalDirection, Vector)] = &[
    (NorthEast, Vector::new(1, 1)),
    (East, Vector::new(1, 0)),
    (SouthEast, Vector::new(1, -1)),
    (SouthWest, Vector::new(0, -1)),
    (West, Vector::new(-1, 0)),
    (NorthWest, Vector::new(0, 1)),
];

pub(super) const LR_TOKENS: &[(&str, Turn)] = &[
    ("F", 1),
    ("N", 1),
    ("R", 2),
    ("R1", 2),
    ("I", 3),
    ("R2", 3),
    ("B", 4),
    ("U", 4),
    ("E", 5),
    ("L2", 5),
    ("L", 6),
    ("L1", 6),
];

#[inline]
fn is_odd_row(coord: GridCoord) -> bool {
    coord.y.rem_euclid(2) == 1
}

pub(super) fn direction_vectors(coord: GridCoord) -> &'static [(CardinalDirection, Vector)] {
    if is_odd_row(coord) {
        ODD_ROW
    } else {
        EVEN_ROW
    }
}

/// Centre to vertex distance when neighbouring centres in a row are one unit apart.
#[inline]
fn size() -> f64 {
    3f64.powf(-0.5)
}

pub(super) fn cell_centrepoint(coord: GridCoord) -> DisplayCoord {
    let x = coord.x as f64 + coord.y.rem_euclid(2) as f64 / 2.0;
    let y = coord.y as f64 / (size() * 2.0);
    DisplayCoord::new(x, y)
}

//  /`\
// | C |
//  \./
pub(super) fn cell_vertices(coord: GridCoord) -> Vec<DisplayCoord> {
    let size = size();
    let centre = cell_centrepoint(coord);

    let left_x = centre.x - 0.5;
    let right_x = centre.x + 0.5;

    let top_y = centre.y + size;
    let upper_mid_y = centre.y + size / 2.0;
    let lower_mid_y = centre.y - size / 2.0;
    let bottom_y = centre.y - size;

    vec![
        DisplayCoord::new(centre.x, top_y),
        DisplayCoord::new(right_x, upper_mid_y),
        DisplayCoord::new(right_x, lower_mid_y),
        DisplayCoord::new(centre.x, bottom_y),
        DisplayCoord::new(left_x, lower_mid_y),
        DisplayCoord::new(left_x, upper_mid_y),
    ]
}

pub(super) fn facing_angle(direction: CardinalDirection) -> Option<f64> {
    match direction {
        NorthEast => Some(30.0),
        East => Some(90.0),
        SouthEast => Some(150.0),
        SouthWest => Some(210.0),
        West => Some(270.0),
        NorthWest => Some(330.0),
        North | South => None,
    }
}
