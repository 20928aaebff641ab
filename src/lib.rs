//! # Polyant
//!
//! Generalised Langton's ants (turmites) walking over unbounded square,
//! hexagonal and triangular grids.
//!
//! This library provides the grid geometry for each tessellation, a sparse
//! coloured grid, rule tables with a compact LR-string notation, and the ant
//! state machine that ties them together.

pub mod ant;
pub mod cli;
pub mod coord;
pub mod direction;
pub mod error;
pub mod grid;
pub mod rules;
pub mod simulation;
pub mod topology;

pub use ant::Ant;
pub use cli::Args;
pub use coord::{DisplayCoord, GridCoord, Vector};
pub use direction::CardinalDirection;
pub use error::{AntError, Result};
pub use grid::{Bbox, Grid};
pub use rules::{AntColour, CellColour, Rule, RuleTable};
pub use simulation::SimulationEngine;
pub use topology::Topology;

/// Re-export commonly used types
pub mod prelude {
    pub use crate::{
        Ant, AntColour, AntError, Args, CardinalDirection, CellColour, Grid, GridCoord, Result,
        Rule, RuleTable, SimulationEngine, Topology,
    };
}
