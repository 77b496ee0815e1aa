//! Grid cells and the Manhattan metric.

use crate::direction::Direction;
use std::fmt;

/// A cell on the game grid.
///
/// Coordinates follow the host engine's convention: `x` grows east and
/// `y` grows north, so `(0, 0)` is the south-west corner. Cells compare
/// and hash by value; two cells are the same cell exactly when their
/// coordinates match.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Cell {
    /// Column, growing east.
    pub x: i32,
    /// Row, growing north.
    pub y: i32,
}

impl Cell {
    /// Create a cell at `(x, y)`.
    pub fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// Manhattan (L1) distance to `other`.
    ///
    /// This is the graph geodesic on a 4-connected grid without walls,
    /// and the metric used for audibility and danger-zone tests.
    pub fn manhattan_distance(self, other: Self) -> u32 {
        self.x.abs_diff(other.x) + self.y.abs_diff(other.y)
    }

    /// The cell one step in `direction`, ignoring walls and bounds.
    ///
    /// [`Direction::Stop`] returns `self`. Callers that care about
    /// blocked moves resolve the result against a maze.
    pub fn translate(self, direction: Direction) -> Self {
        let (dx, dy) = direction.offset();
        Self {
            x: self.x.saturating_add(dx),
            y: self.y.saturating_add(dy),
        }
    }
}

impl fmt::Display for Cell {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

impl From<(i32, i32)> for Cell {
    fn from((x, y): (i32, i32)) -> Self {
        Self { x, y }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn manhattan_distance_axis_aligned() {
        assert_eq!(Cell::new(0, 0).manhattan_distance(Cell::new(3, 0)), 3);
        assert_eq!(Cell::new(0, 0).manhattan_distance(Cell::new(0, 4)), 4);
        assert_eq!(Cell::new(2, 3).manhattan_distance(Cell::new(5, 7)), 7);
    }

    #[test]
    fn manhattan_distance_negative_coords() {
        assert_eq!(Cell::new(-2, -3).manhattan_distance(Cell::new(1, 1)), 7);
    }

    #[test]
    fn translate_follows_offsets() {
        let c = Cell::new(4, 4);
        assert_eq!(c.translate(Direction::North), Cell::new(4, 5));
        assert_eq!(c.translate(Direction::South), Cell::new(4, 3));
        assert_eq!(c.translate(Direction::East), Cell::new(5, 4));
        assert_eq!(c.translate(Direction::West), Cell::new(3, 4));
        assert_eq!(c.translate(Direction::Stop), c);
    }

    #[test]
    fn display_reads_as_pair() {
        assert_eq!(Cell::new(3, -1).to_string(), "(3, -1)");
    }

    fn arb_cell() -> impl Strategy<Value = Cell> {
        (-100i32..100, -100i32..100).prop_map(|(x, y)| Cell::new(x, y))
    }

    proptest! {
        #[test]
        fn distance_is_metric(a in arb_cell(), b in arb_cell(), c in arb_cell()) {
            prop_assert_eq!(a.manhattan_distance(a), 0);
            prop_assert_eq!(a.manhattan_distance(b), b.manhattan_distance(a));
            prop_assert!(
                a.manhattan_distance(c) <= a.manhattan_distance(b) + b.manhattan_distance(c)
            );
        }

        #[test]
        fn translate_moves_one_step(a in arb_cell()) {
            for d in Direction::CARDINALS {
                prop_assert_eq!(a.manhattan_distance(a.translate(d)), 1);
            }
        }

        #[test]
        fn translate_round_trip(a in arb_cell()) {
            for d in Direction::CARDINALS {
                prop_assert_eq!(a.translate(d).translate(d.opposite()), a);
            }
        }
    }
}
