//! The immutable maze model and its legal-cell universe.

use crate::error::MazeError;
use prowl_core::{Cell, Direction, MazeInstanceId};
use smallvec::SmallVec;

/// An immutable wall grid with a precomputed legal-cell universe.
///
/// A cell is *legal* (open) when it is in bounds and not a wall. The
/// legal cells form the planning universe: reward maps and value
/// functions are defined over exactly this set, in the canonical
/// ordering returned by [`legal_cells`](Maze::legal_cells). Everything
/// derived from a maze is deterministic in that ordering.
///
/// Each constructed maze carries a process-unique [`MazeInstanceId`],
/// used to tie warm-started value functions to the maze they were
/// solved against.
#[derive(Debug, Clone)]
pub struct Maze {
    width: u32,
    height: u32,
    walls: Vec<bool>,
    legal: Vec<Cell>,
    wall_count: usize,
    instance_id: MazeInstanceId,
}

impl Maze {
    /// Maximum dimension size: coordinates use `i32`, so each axis must fit.
    pub const MAX_DIM: u32 = i32::MAX as u32;

    /// Create a maze from its dimensions and wall cells.
    ///
    /// Duplicate wall cells are accepted and collapse into the mask.
    /// Returns `Err(MazeError::EmptyMaze)` if either dimension is 0,
    /// `Err(MazeError::DimensionTooLarge)` if either exceeds
    /// [`MAX_DIM`](Maze::MAX_DIM), and `Err(MazeError::WallOutOfBounds)`
    /// for a wall cell outside the map.
    ///
    /// # Examples
    ///
    /// ```
    /// use prowl_core::Cell;
    /// use prowl_grid::Maze;
    ///
    /// let maze = Maze::new(3, 3, vec![Cell::new(1, 1)]).unwrap();
    /// assert_eq!(maze.legal_cells().len(), 8);
    /// assert!(maze.is_wall(Cell::new(1, 1)));
    /// ```
    pub fn new(
        width: u32,
        height: u32,
        walls: impl IntoIterator<Item = Cell>,
    ) -> Result<Self, MazeError> {
        if width == 0 || height == 0 {
            return Err(MazeError::EmptyMaze);
        }
        if width > Self::MAX_DIM {
            return Err(MazeError::DimensionTooLarge {
                name: "width",
                value: width,
                max: Self::MAX_DIM,
            });
        }
        if height > Self::MAX_DIM {
            return Err(MazeError::DimensionTooLarge {
                name: "height",
                value: height,
                max: Self::MAX_DIM,
            });
        }

        let cell_count = (width as usize) * (height as usize);
        let mut mask = vec![false; cell_count];
        for cell in walls {
            if cell.x < 0 || cell.x >= width as i32 || cell.y < 0 || cell.y >= height as i32 {
                return Err(MazeError::WallOutOfBounds {
                    cell,
                    width,
                    height,
                });
            }
            mask[(cell.y as usize) * (width as usize) + (cell.x as usize)] = true;
        }
        let wall_count = mask.iter().filter(|&&w| w).count();

        // Canonical ordering: y then x, matching the mask layout.
        let mut legal = Vec::with_capacity(cell_count - wall_count);
        for y in 0..height as i32 {
            for x in 0..width as i32 {
                if !mask[(y as usize) * (width as usize) + (x as usize)] {
                    legal.push(Cell::new(x, y));
                }
            }
        }

        Ok(Self {
            width,
            height,
            walls: mask,
            legal,
            wall_count,
            instance_id: MazeInstanceId::next(),
        })
    }

    /// Map width in cells.
    pub fn width(&self) -> u32 {
        self.width
    }

    /// Map height in cells.
    pub fn height(&self) -> u32 {
        self.height
    }

    /// Number of wall cells.
    pub fn wall_count(&self) -> usize {
        self.wall_count
    }

    /// Unique identifier of this maze instance.
    pub fn instance_id(&self) -> MazeInstanceId {
        self.instance_id
    }

    /// Whether `cell` lies within the map bounds.
    pub fn in_bounds(&self, cell: Cell) -> bool {
        cell.x >= 0 && cell.x < self.width as i32 && cell.y >= 0 && cell.y < self.height as i32
    }

    /// Whether `cell` is a wall. Out-of-bounds cells are not walls;
    /// use [`is_open`](Maze::is_open) to test traversability.
    pub fn is_wall(&self, cell: Cell) -> bool {
        self.in_bounds(cell)
            && self.walls[(cell.y as usize) * (self.width as usize) + (cell.x as usize)]
    }

    /// Whether `cell` is part of the legal universe: in bounds and not
    /// a wall.
    pub fn is_open(&self, cell: Cell) -> bool {
        self.in_bounds(cell) && !self.is_wall(cell)
    }

    /// The legal-cell universe in canonical order (y ascending, then x).
    pub fn legal_cells(&self) -> &[Cell] {
        &self.legal
    }

    /// Resolve a move from `cell` in `direction`.
    ///
    /// Returns the target cell when it is open; a move into a wall or
    /// off the map collapses back to `cell` (the mover stays put).
    /// `Stop` always resolves to `cell`.
    pub fn resolve_move(&self, cell: Cell, direction: Direction) -> Cell {
        let target = cell.translate(direction);
        if self.is_open(target) {
            target
        } else {
            cell
        }
    }

    /// The actions available at `cell`: every cardinal whose target is
    /// open, then `Stop`. `Stop` is always available, so the result is
    /// never empty, even for a cell that is itself a wall.
    pub fn legal_moves(&self, cell: Cell) -> SmallVec<[Direction; 5]> {
        let mut moves: SmallVec<[Direction; 5]> = Direction::CARDINALS
            .into_iter()
            .filter(|&d| self.is_open(cell.translate(d)))
            .collect();
        moves.push(Direction::Stop);
        moves
    }
}
