pub mod bbox;
pub mod grid;

pub use bbox::Bbox;
pub use grid::{Grid, GridId};
