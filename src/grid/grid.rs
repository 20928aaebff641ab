use crate::ant::Ant;
use crate::coord::{DisplayCoord, GridCoord};
use crate::direction::CardinalDirection;
use crate::error::Result;
use crate::grid::bbox::Bbox;
use crate::rules::{AntColour, CellColour, RuleTable};
use crate::topology::Topology;
use std::collections::{BTreeMap, HashMap};
use std::sync::atomic::{AtomicU64, Ordering};
use tracing::debug;

static NEXT_GRID_ID: AtomicU64 = AtomicU64::new(1);

/// Identity of a grid instance, used to check ants belong to it
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct GridId(u64);

/// An unbounded coloured grid.
///
/// Every cell starts in the default colour and only cells holding another
/// colour are stored. The grid also keeps the ants placed on it.
#[derive(Debug)]
pub struct Grid {
    id: GridId,
    topology: Topology,
    default_colour: CellColour,
    cells: HashMap<GridCoord, CellColour>,
    // Ignores true cell geometry, grows on every write
    fast_bbox: Option<Bbox<i64>>,
    ants: Vec<Ant>,
}

impl Grid {
    pub fn new(topology: Topology, default_colour: CellColour) -> Self {
        let id = GridId(NEXT_GRID_ID.fetch_add(1, Ordering::Relaxed));
        debug!(?id, %topology, %default_colour, "created grid");
        Self {
            id,
            topology,
            default_colour,
            cells: HashMap::new(),
            fast_bbox: None,
            ants: Vec::new(),
        }
    }

    #[inline]
    pub fn id(&self) -> GridId {
        self.id
    }

    #[inline]
    pub fn topology(&self) -> Topology {
        self.topology
    }

    #[inline]
    pub fn default_colour(&self) -> CellColour {
        self.default_colour
    }

    /// Colour of a cell
    #[inline]
    pub fn get(&self, coord: GridCoord) -> Result<CellColour> {
        self.topology.check_coord(coord)?;
        Ok(self
            .cells
            .get(&coord)
            .copied()
            .unwrap_or(self.default_colour))
    }

    /// Paint a cell. Painting the default colour drops the stored entry.
    pub fn set(&mut self, coord: GridCoord, colour: CellColour) -> Result<()> {
        self.topology.check_coord(coord)?;

        match &mut self.fast_bbox {
            Some(bbox) => bbox.expand(coord.x, coord.y),
            None => self.fast_bbox = Some(Bbox::point(coord.x, coord.y)),
        }

        if colour == self.default_colour {
            self.cells.remove(&coord);
        } else {
            self.cells.insert(coord, colour);
        }
        Ok(())
    }

    /// Whether a non-default colour is stored for `coord`
    pub fn contains(&self, coord: GridCoord) -> Result<bool> {
        self.topology.check_coord(coord)?;
        Ok(self.cells.contains_key(&coord))
    }

    /// Stored (non-default) cells in no particular order
    pub fn iter(&self) -> impl Iterator<Item = (GridCoord, CellColour)> + '_ {
        self.cells.iter().map(|(coord, colour)| (*coord, *colour))
    }

    /// Number of non-default cells
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// How many stored cells hold each colour
    pub fn colour_counts(&self) -> BTreeMap<CellColour, usize> {
        let mut counts = BTreeMap::new();
        for colour in self.cells.values() {
            *counts.entry(*colour).or_insert(0) += 1;
        }
        counts
    }

    /// Integer box around every coordinate ever written, O(1).
    ///
    /// Zero-sized at the origin until the first write.
    #[inline]
    pub fn fast_bbox(&self) -> Bbox<i64> {
        self.fast_bbox.unwrap_or_default()
    }

    /// Display-space box around the polygons of all stored cells.
    ///
    /// Walks every stored cell. Zero-sized at the origin when nothing is stored.
    pub fn display_bbox(&self) -> Bbox<f64> {
        let mut vertices = self
            .cells
            .keys()
            .flat_map(|coord| self.topology.vertices_unchecked(*coord));

        let Some(DisplayCoord { x, y }) = vertices.next() else {
            return Bbox::default();
        };

        let mut bbox = Bbox::point(x, y);
        for vertex in vertices {
            bbox.expand(vertex.x, vertex.y);
        }
        bbox
    }

    /// Register an ant. Membership is checked by the simulation driver.
    pub fn add_ant(&mut self, ant: Ant) {
        debug!(position = %ant.position(), direction = %ant.direction(), "ant placed");
        self.ants.push(ant);
    }

    /// Ants in registration order
    pub fn ants(&self) -> &[Ant] {
        &self.ants
    }

    /// Step every registered ant once, in registration order.
    ///
    /// Stops at the first failing ant; ants before it keep their move and
    /// the failing ant is left untouched.
    pub fn step_ants(&mut self) -> Result<()> {
        let mut ants = std::mem::take(&mut self.ants);
        let result = ants.iter_mut().try_for_each(|ant| ant.step(self));
        self.ants = ants;
        result
    }

    /// Build `count` ants for this grid.
    ///
    /// The first ant starts at the origin facing `first_heading`; the rest are
    /// scattered over valid cells within `spread` of the origin with random
    /// usable headings.
    pub fn create_ants(
        &self,
        count: usize,
        rules: &RuleTable,
        spread: i64,
        first_heading: CardinalDirection,
        rng: &mut fastrand::Rng,
    ) -> Result<Vec<Ant>> {
        let spread = i64::try_from(spread.unsigned_abs()).unwrap_or(i64::MAX);
        let mut ants = Vec::with_capacity(count);

        for i in 0..count {
            let (position, heading) = if i == 0 {
                (GridCoord::ORIGIN, first_heading)
            } else {
                let position = self.random_cell(spread, rng);
                let headings: Vec<_> = self.topology.headings(position)?.collect();
                (position, headings[rng.usize(..headings.len())])
            };
            ants.push(Ant::new(self, rules.clone(), position, heading, AntColour(0))?);
        }

        Ok(ants)
    }

    fn random_cell(&self, spread: i64, rng: &mut fastrand::Rng) -> GridCoord {
        let x = rng.i64(-spread..=spread);
        let mut y = rng.i64(-spread..=spread);
        if !self.topology.is_valid(GridCoord::new(x, y)) {
            // Only the triangular lattice rejects cells; a parity fix is enough
            y += if y < spread { 1 } else { -1 };
        }
        GridCoord::new(x, y)
    }
}
