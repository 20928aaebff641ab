use crate::coord::GridCoord;
use crate::direction::CardinalDirection;
use crate::error::{AntError, Result};
use crate::grid::{Grid, GridId};
use crate::rules::{AntColour, RuleTable};

/// A rule-driven walker on a [`Grid`].
///
/// The ant remembers which grid it was created for but does not hold it;
/// the grid is passed to every [`step`](Ant::step).
#[derive(Clone, Debug)]
pub struct Ant {
    grid: GridId,
    rules: RuleTable,
    position: GridCoord,
    previous_position: GridCoord,
    // The last direction the ant stepped in
    direction: CardinalDirection,
    colour: AntColour,
    steps: u64,
}

impl Ant {
    /// Create an ant for `grid`.
    ///
    /// Fails if `position` is not a cell of the grid's topology, or if an ant
    /// standing there could not move with `direction` as its heading.
    pub fn new(
        grid: &Grid,
        rules: RuleTable,
        position: GridCoord,
        direction: CardinalDirection,
        colour: AntColour,
    ) -> Result<Self> {
        let topology = grid.topology();
        if !topology.headings(position)?.any(|h| h == direction) {
            return Err(AntError::bad_direction_at(direction, position));
        }

        Ok(Self {
            grid: grid.id(),
            rules,
            position,
            previous_position: position,
            direction,
            colour,
            steps: 0,
        })
    }

    #[inline]
    pub fn position(&self) -> GridCoord {
        self.position
    }

    /// Where the ant was before its last step (its start before any step)
    #[inline]
    pub fn previous_position(&self) -> GridCoord {
        self.previous_position
    }

    #[inline]
    pub fn direction(&self) -> CardinalDirection {
        self.direction
    }

    #[inline]
    pub fn colour(&self) -> AntColour {
        self.colour
    }

    /// Number of completed steps
    #[inline]
    pub fn steps(&self) -> u64 {
        self.steps
    }

    pub fn rules(&self) -> &RuleTable {
        &self.rules
    }

    /// Whether this ant was created for `grid`
    #[inline]
    pub fn lives_on(&self, grid: &Grid) -> bool {
        self.grid == grid.id()
    }

    /// Apply the rule for the current cell: repaint it, turn, and move on.
    ///
    /// Every lookup happens before anything is written, so a failing step
    /// leaves both the ant and the grid unchanged.
    pub fn step(&mut self, grid: &mut Grid) -> Result<()> {
        debug_assert!(self.lives_on(grid), "ant stepped on a foreign grid");
        let topology = grid.topology();

        let cell_colour = grid.get(self.position)?;
        let rule = *self.rules.lookup(self.colour, cell_colour)?;
        let direction = topology.rotate(self.position, self.direction, rule.turn)?;
        let position = topology.neighbour(self.position, direction)?;

        grid.set(self.position, rule.new_cell_colour)?;

        self.previous_position = self.position;
        self.position = position;
        self.direction = direction;
        self.colour = rule.new_ant_colour;
        self.steps += 1;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::direction::CardinalDirection::*;
    use crate::rules::{CellColour, Rule};
    use crate::topology::Topology;

    fn c(x: i64, y: i64) -> GridCoord {
        GridCoord::new(x, y)
    }

    fn lr_table(topology: Topology, lr: &str) -> RuleTable {
        RuleTable::from_rules(topology.compile_lr_string(lr).unwrap()).0
    }

    #[test]
    fn test_ant_creation() {
        let grid = Grid::new(Topology::Square, CellColour(0));
        let ant = Ant::new(&grid, lr_table(Topology::Square, "RL"), c(4, 2), West, AntColour(3)).unwrap();

        assert_eq!(ant.position(), c(4, 2));
        assert_eq!(ant.previous_position(), c(4, 2));
        assert_eq!(ant.direction(), West);
        assert_eq!(ant.colour(), AntColour(3));
        assert_eq!(ant.steps(), 0);
        assert_eq!(ant.rules().len(), 2);
        assert!(ant.lives_on(&grid));
    }

    #[test]
    fn test_ant_creation_validates_placement() {
        let square = Grid::new(Topology::Square, CellColour(0));
        assert!(matches!(
            Ant::new(&square, RuleTable::default(), c(0, 0), NorthEast, AntColour(0)),
            Err(AntError::InvalidDirection { .. })
        ));

        let triangle = Grid::new(Topology::Triangular, CellColour(0));
        assert!(matches!(
            Ant::new(&triangle, RuleTable::default(), c(1, 0), North, AntColour(0)),
            Err(AntError::InvalidCoordinate(_))
        ));
        // An up-pointing cell is entered heading N, SE or SW
        assert!(Ant::new(&triangle, RuleTable::default(), c(0, 0), North, AntColour(0)).is_ok());
        assert!(Ant::new(&triangle, RuleTable::default(), c(0, 0), NorthEast, AntColour(0)).is_err());
    }

    #[test]
    fn test_ant_belongs_to_one_grid() {
        let grid = Grid::new(Topology::Square, CellColour(0));
        let other = Grid::new(Topology::Square, CellColour(0));
        let ant = Ant::new(&grid, RuleTable::default(), c(0, 0), North, AntColour(0)).unwrap();

        assert!(ant.lives_on(&grid));
        assert!(!ant.lives_on(&other));
    }

    #[test]
    fn test_single_step() {
        let mut grid = Grid::new(Topology::Square, CellColour(0));
        let mut ant = Ant::new(&grid, lr_table(Topology::Square, "RL"), c(0, 0), North, AntColour(0)).unwrap();

        ant.step(&mut grid).unwrap();

        assert_eq!(grid.get(c(0, 0)).unwrap(), CellColour(1));
        assert_eq!(ant.direction(), East);
        assert_eq!(ant.position(), c(1, 0));
        assert_eq!(ant.previous_position(), c(0, 0));
        assert_eq!(ant.steps(), 1);
    }

    #[test]
    fn test_ant_colour_changes_with_rule() {
        let mut grid = Grid::new(Topology::Square, CellColour(0));
        let (rules, _) = RuleTable::from_rules([
            Rule::new(0, 0, 1, 1, 1),
            Rule::new(1, 0, 0, 2, 3),
        ]);
        let mut ant = Ant::new(&grid, rules, c(0, 0), North, AntColour(0)).unwrap();

        ant.step(&mut grid).unwrap();
        assert_eq!(ant.colour(), AntColour(1));
        assert_eq!(ant.position(), c(0, 1));
        assert_eq!(ant.direction(), North);

        ant.step(&mut grid).unwrap();
        assert_eq!(ant.colour(), AntColour(0));
        assert_eq!(ant.direction(), South);
        assert_eq!(ant.position(), c(0, 0));
        assert_eq!(grid.get(c(0, 1)).unwrap(), CellColour(2));
    }

    #[test]
    fn test_unhandled_rule_leaves_state_untouched() {
        let mut grid = Grid::new(Topology::Square, CellColour(0));
        let (rules, _) = RuleTable::from_rules([Rule::new(0, 0, 0, 1, 2)]);
        let mut ant = Ant::new(&grid, rules, c(0, 0), North, AntColour(0)).unwrap();

        grid.set(c(0, 0), CellColour(1)).unwrap();
        let err = ant.step(&mut grid).unwrap_err();

        assert!(matches!(
            err,
            AntError::UnhandledRule {
                ant_colour: AntColour(0),
                cell_colour: CellColour(1),
            }
        ));
        assert_eq!(ant.position(), c(0, 0));
        assert_eq!(ant.direction(), North);
        assert_eq!(ant.steps(), 0);
        assert_eq!(grid.get(c(0, 0)).unwrap(), CellColour(1));
    }

    #[test]
    fn test_step_off_the_plane_fails_cleanly() {
        let mut grid = Grid::new(Topology::Square, CellColour(0));
        let edge = c(i64::MAX, 0);
        let mut ant = Ant::new(&grid, lr_table(Topology::Square, "F"), edge, East, AntColour(0)).unwrap();

        assert!(matches!(ant.step(&mut grid), Err(AntError::InvalidCoordinate(_))));
        assert_eq!(ant.position(), edge);
        assert_eq!(ant.steps(), 0);
        assert!(grid.is_empty());
    }
}
