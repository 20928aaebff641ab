use crate::coord::GridCoord;
use crate::direction::CardinalDirection;
use crate::rules::{AntColour, CellColour, RuleKey};
use crate::topology::Topology;
use thiserror::Error;

/// Errors raised by the grid, topology, rule and ant layers
#[derive(Debug, Error)]
pub enum AntError {
    /// Coordinate fails the topology's validity predicate
    #[error("invalid coordinate {0}")]
    InvalidCoordinate(GridCoord),

    /// Direction is not usable here
    #[error("bad direction {direction}{}", for_coord(.coord))]
    InvalidDirection {
        direction: CardinalDirection,
        coord: Option<GridCoord>,
    },

    /// No rule for the ant's colour on the current cell colour
    #[error("no rule for ant colour {ant_colour} on cell colour {cell_colour}")]
    UnhandledRule {
        ant_colour: AntColour,
        cell_colour: CellColour,
    },

    /// LR string contains something that is not a token of the topology
    #[error("bad LR string for {topology} grid: no token matches {rest:?} at offset {offset}")]
    InvalidLrToken {
        topology: Topology,
        offset: usize,
        rest: String,
    },

    /// Two rules share a key and the table was built strictly
    #[error("duplicate rules for {0}")]
    DuplicateRule(RuleKey),

    /// Explicit rule text did not parse
    #[error("invalid rule {text:?}: {reason}")]
    InvalidRule { text: String, reason: String },

    /// Invalid direction name
    #[error("unknown direction: {0}")]
    UnknownDirection(String),

    /// Invalid topology name
    #[error("unknown topology: {0}")]
    UnknownTopology(String),

    /// Ant was created for a different grid instance
    #[error("ant {index} does not live on this grid")]
    ForeignAnt { index: usize },

    /// IO operation failed
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

fn for_coord(coord: &Option<GridCoord>) -> String {
    match coord {
        Some(c) => format!(" for coord {c}"),
        None => String::new(),
    }
}

impl AntError {
    pub(crate) fn bad_direction(direction: CardinalDirection) -> Self {
        AntError::InvalidDirection {
            direction,
            coord: None,
        }
    }

    pub(crate) fn bad_direction_at(direction: CardinalDirection, coord: GridCoord) -> Self {
        AntError::InvalidDirection {
            direction,
            coord: Some(coord),
        }
    }
}

/// Result type alias for this crate
pub type Result<T> = std::result::Result<T, AntError>;
