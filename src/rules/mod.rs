pub mod parser;
pub mod table;

pub use parser::{compile_lr_string, parse_rules, parse_rules_file};
pub use table::{RuleDiagnostic, RuleTable};

use crate::error::AntError;
use std::fmt;
use std::str::FromStr;

/// 1-based relative rotation: 1 keeps the heading, 2 is the next direction
/// clockwise, and so on, wrapping around the available directions.
pub type Turn = i32;

/// Colour painted onto a cell
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct CellColour(pub u32);

/// An ant's colour, which doubles as its automaton state
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct AntColour(pub u32);

impl fmt::Display for CellColour {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

impl fmt::Display for AntColour {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

/// Lookup key of a rule: the ant's colour and the colour under it
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct RuleKey {
    pub ant_colour: AntColour,
    pub cell_colour: CellColour,
}

impl fmt::Display for RuleKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "ant colour {} on cell colour {}", self.ant_colour, self.cell_colour)
    }
}

/// `(ant colour, cell colour) -> (new ant colour, new cell colour, turn)`
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Rule {
    pub ant_colour: AntColour,
    pub cell_colour: CellColour,
    pub new_ant_colour: AntColour,
    pub new_cell_colour: CellColour,
    pub turn: Turn,
}

impl Rule {
    pub fn new(ant: u32, cell: u32, new_ant: u32, new_cell: u32, turn: Turn) -> Self {
        Self {
            ant_colour: AntColour(ant),
            cell_colour: CellColour(cell),
            new_ant_colour: AntColour(new_ant),
            new_cell_colour: CellColour(new_cell),
            turn,
        }
    }

    #[inline]
    pub fn key(&self) -> RuleKey {
        RuleKey {
            ant_colour: self.ant_colour,
            cell_colour: self.cell_colour,
        }
    }
}

impl fmt::Display for Rule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{},{},{},{},{}",
            self.ant_colour, self.cell_colour, self.new_ant_colour, self.new_cell_colour, self.turn
        )
    }
}

/// Parses `ant,cell,new_ant,new_cell,turn`, whitespace around fields allowed.
impl FromStr for Rule {
    type Err = AntError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = |reason: &str| AntError::InvalidRule {
            text: s.to_string(),
            reason: reason.to_string(),
        };

        let fields: Vec<&str> = s.split(',').map(str::trim).collect();
        if fields.len() != 5 {
            return Err(invalid("expected 5 comma separated fields"));
        }

        let colour = |field: &str| {
            field
                .parse::<u32>()
                .map_err(|_| invalid(&format!("{field:?} is not a colour")))
        };
        let turn = fields[4]
            .parse::<Turn>()
            .map_err(|_| invalid(&format!("{:?} is not a turn", fields[4])))?;

        Ok(Rule::new(
            colour(fields[0])?,
            colour(fields[1])?,
            colour(fields[2])?,
            colour(fields[3])?,
            turn,
        ))
    }
}
