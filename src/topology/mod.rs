//! Grid geometry for the three supported tessellations.
//!
//! A [`Topology`] decides which lattice coordinates are cells, which
//! directions lead out of a cell, how a rule's turn amount rotates a heading
//! and where a cell sits in display space.

mod hex;
mod square;
mod triangle;

use crate::coord::{DisplayCoord, GridCoord, Vector};
use crate::direction::CardinalDirection;
use crate::error::{AntError, Result};
use crate::rules::{compile_lr_string, Rule, Turn};
use std::fmt;
use std::str::FromStr;

/// The closed set of supported tessellations
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Topology {
    #[default]
    Square,
    Hexagonal,
    Triangular,
}

impl FromStr for Topology {
    type Err = AntError;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_ascii_lowercase().as_str() {
            "square" | "sq" | "4" => Ok(Topology::Square),
            "hex" | "hexagonal" | "6" => Ok(Topology::Hexagonal),
            "triangle" | "triangular" | "tri" | "3" => Ok(Topology::Triangular),
            _ => Err(AntError::UnknownTopology(s.to_string())),
        }
    }
}

impl fmt::Display for Topology {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Position of `current` in a sorted direction table, turned by `turn`.
fn rotate_within(
    table: &[(CardinalDirection, Vector)],
    current: CardinalDirection,
    turn: Turn,
) -> Option<CardinalDirection> {
    let index = table.iter().position(|(d, _)| *d == current)?;
    let next = (index as i64 + i64::from(turn) - 1).rem_euclid(table.len() as i64);
    Some(table[next as usize].0)
}

impl Topology {
    pub const ALL: [Topology; 3] = [Topology::Square, Topology::Hexagonal, Topology::Triangular];

    pub const fn as_str(self) -> &'static str {
        match self {
            Topology::Square => "square",
            Topology::Hexagonal => "hexagonal",
            Topology::Triangular => "triangular",
        }
    }

    /// Whether `coord` names a cell of this tessellation.
    #[inline]
    pub fn is_valid(self, coord: GridCoord) -> bool {
        match self {
            Topology::Square | Topology::Hexagonal => true,
            Topology::Triangular => triangle::is_valid(coord),
        }
    }

    /// Fails with `InvalidCoordinate` unless `coord` is a cell.
    #[inline]
    pub fn check_coord(self, coord: GridCoord) -> Result<()> {
        if self.is_valid(coord) {
            Ok(())
        } else {
            Err(AntError::InvalidCoordinate(coord))
        }
    }

    /// Directions leading out of `coord` and their displacement, sorted by
    /// direction.
    pub fn direction_vectors(
        self,
        coord: GridCoord,
    ) -> Result<&'static [(CardinalDirection, Vector)]> {
        self.check_coord(coord)?;
        Ok(self.vectors_unchecked(coord))
    }

    /// Caller guarantees `coord` is valid.
    fn vectors_unchecked(self, coord: GridCoord) -> &'static [(CardinalDirection, Vector)] {
        match self {
            Topology::Square => square::DIRECTIONS,
            Topology::Hexagonal => hex::direction_vectors(coord),
            Topology::Triangular => triangle::direction_vectors(coord),
        }
    }

    /// Directions leading out of `coord`, sorted.
    pub fn directions(self, coord: GridCoord) -> Result<impl Iterator<Item = CardinalDirection>> {
        Ok(self.direction_vectors(coord)?.iter().map(|(d, _)| *d))
    }

    /// Headings an ant standing on `coord` may have so that its next
    /// `rotate` + `neighbour` succeeds.
    ///
    /// On the triangular grid this is the other orientation's set: the
    /// heading is the direction the ant stepped in to get here.
    pub fn headings(self, coord: GridCoord) -> Result<impl Iterator<Item = CardinalDirection>> {
        self.check_coord(coord)?;
        let table = match self {
            Topology::Triangular => triangle::arrival_vectors(coord),
            _ => self.vectors_unchecked(coord),
        };
        Ok(table.iter().map(|(d, _)| *d))
    }

    /// Whether `direction` is used anywhere on this tessellation.
    pub fn knows_direction(self, direction: CardinalDirection) -> bool {
        match self {
            Topology::Square => square::facing_angle(direction).is_some(),
            Topology::Hexagonal => hex::facing_angle(direction).is_some(),
            Topology::Triangular => triangle::facing_angle(direction).is_some(),
        }
    }

    /// Turn `current` by a 1-based `turn` (1 = straight on, 2 = the next
    /// direction clockwise, ...), wrapping around the direction set.
    pub fn rotate(
        self,
        coord: GridCoord,
        current: CardinalDirection,
        turn: Turn,
    ) -> Result<CardinalDirection> {
        self.check_coord(coord)?;
        let rotated = match self {
            Topology::Triangular => triangle::rotate(current, turn),
            _ => rotate_within(self.vectors_unchecked(coord), current, turn),
        };
        rotated.ok_or_else(|| AntError::bad_direction(current))
    }

    /// The adjacent cell of `coord` in `direction`.
    pub fn neighbour(self, coord: GridCoord, direction: CardinalDirection) -> Result<GridCoord> {
        // Checked first so an invalid coordinate never reports a misleading
        // direction error.
        self.check_coord(coord)?;

        if !self.knows_direction(direction) {
            return Err(AntError::bad_direction(direction));
        }

        let (_, offset) = self
            .vectors_unchecked(coord)
            .iter()
            .find(|(d, _)| *d == direction)
            .ok_or_else(|| AntError::bad_direction_at(direction, coord))?;
        // Off the edge of the i64 plane
        coord
            .checked_add(*offset)
            .ok_or(AntError::InvalidCoordinate(coord))
    }

    /// Polygon outline of a cell, clockwise, for rendering.
    pub fn cell_vertices(self, coord: GridCoord) -> Result<Vec<DisplayCoord>> {
        self.check_coord(coord)?;
        Ok(self.vertices_unchecked(coord))
    }

    /// Caller guarantees `coord` is valid.
    pub(crate) fn vertices_unchecked(self, coord: GridCoord) -> Vec<DisplayCoord> {
        match self {
            Topology::Square => square::cell_vertices(coord),
            Topology::Hexagonal => hex::cell_vertices(coord),
            Topology::Triangular => triangle::cell_vertices(coord),
        }
    }

    pub fn cell_centrepoint(self, coord: GridCoord) -> Result<DisplayCoord> {
        self.check_coord(coord)?;
        Ok(match self {
            Topology::Square => square::cell_centrepoint(coord),
            Topology::Hexagonal => hex::cell_centrepoint(coord),
            Topology::Triangular => triangle::cell_centrepoint(coord),
        })
    }

    /// Degrees clockwise from north in which an ant heading `direction` is drawn.
    pub fn ant_facing_angle(self, direction: CardinalDirection) -> Result<f64> {
        let angle = match self {
            Topology::Square => square::facing_angle(direction),
            Topology::Hexagonal => hex::facing_angle(direction),
            Topology::Triangular => triangle::facing_angle(direction),
        };
        angle.ok_or_else(|| AntError::bad_direction(direction))
    }

    /// Vocabulary of the LR-string mini-language for this tessellation.
    pub fn lr_token_table(self) -> &'static [(&'static str, Turn)] {
        match self {
            Topology::Square => square::LR_TOKENS,
            Topology::Hexagonal => hex::LR_TOKENS,
            Topology::Triangular => triangle::LR_TOKENS,
        }
    }

    /// Compile an LR string such as `"RL"` into rules. See [`compile_lr_string`].
    pub fn compile_lr_string(self, lr_string: &str) -> Result<Vec<Rule>> {
        compile_lr_string(self, lr_string)
    }

    /// Heading an ant gets when none is given.
    pub fn default_heading(self, coord: GridCoord) -> Result<CardinalDirection> {
        Ok(self
            .headings(coord)?
            .next()
            .unwrap_or(CardinalDirection::North))
    }
}
