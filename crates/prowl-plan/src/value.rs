//! State-value tables produced by the planner.

use indexmap::IndexMap;
use prowl_core::{Cell, MazeInstanceId};
use prowl_grid::Maze;

/// A value for every cell in one maze's legal universe.
///
/// Each table remembers which [`Maze`] instance it was solved
/// against. The planner only warm-starts from a table carrying the
/// current maze's id, so values never leak across map changes even
/// when two maps share dimensions.
#[derive(Clone, Debug)]
pub struct ValueFunction {
    maze_id: MazeInstanceId,
    values: IndexMap<Cell, f64>,
}

impl ValueFunction {
    /// A zero-initialised table over `maze`'s universe, in
    /// [`Maze::legal_cells`] order.
    pub fn zeroed(maze: &Maze) -> Self {
        Self {
            maze_id: maze.instance_id(),
            values: maze.legal_cells().iter().map(|&cell| (cell, 0.0)).collect(),
        }
    }

    /// The maze instance this table was solved against.
    pub fn maze_id(&self) -> MazeInstanceId {
        self.maze_id
    }

    /// The value at `cell`.
    ///
    /// # Panics
    ///
    /// Panics if `cell` is not in the universe this table was built
    /// over; sweeps and policy queries only visit legal cells.
    pub fn get(&self, cell: Cell) -> f64 {
        match self.values.get(&cell) {
            Some(&value) => value,
            None => panic!("cell {cell} is outside the legal universe of this value function"),
        }
    }

    pub(crate) fn set(&mut self, cell: Cell, value: f64) {
        self.values.insert(cell, value);
    }

    /// Number of cells in the table.
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Whether the universe is empty.
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Cells and values in universe order.
    pub fn iter(&self) -> impl Iterator<Item = (Cell, f64)> + '_ {
        self.values.iter().map(|(&cell, &value)| (cell, value))
    }
}
