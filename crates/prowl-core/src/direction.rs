//! Movement directions on the 4-connected grid.

use std::fmt;

/// A movement action on the grid.
///
/// The four cardinal moves translate the agent one cell; [`Stop`]
/// keeps it in place. `Stop` is a valid executed action but is never a
/// planning candidate, so most planning code iterates [`CARDINALS`]
/// instead of all five variants.
///
/// [`Stop`]: Direction::Stop
/// [`CARDINALS`]: Direction::CARDINALS
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum Direction {
    /// Move one cell north (y + 1).
    North = 0,
    /// Move one cell south (y - 1).
    South = 1,
    /// Move one cell east (x + 1).
    East = 2,
    /// Move one cell west (x - 1).
    West = 3,
    /// Do not move.
    #[default]
    Stop = 4,
}

impl Direction {
    /// The four cardinal moves in canonical sweep order.
    ///
    /// Argmax ties between equal action values break toward the
    /// earlier entry, so this ordering is part of the deterministic
    /// behaviour contract.
    pub const CARDINALS: [Direction; 4] = [
        Direction::North,
        Direction::South,
        Direction::East,
        Direction::West,
    ];

    /// Returns the `(dx, dy)` offset for this direction.
    pub fn offset(self) -> (i32, i32) {
        match self {
            Direction::North => (0, 1),
            Direction::South => (0, -1),
            Direction::East => (1, 0),
            Direction::West => (-1, 0),
            Direction::Stop => (0, 0),
        }
    }

    /// The reverse direction. `Stop` is its own opposite.
    pub fn opposite(self) -> Direction {
        match self {
            Direction::North => Direction::South,
            Direction::South => Direction::North,
            Direction::East => Direction::West,
            Direction::West => Direction::East,
            Direction::Stop => Direction::Stop,
        }
    }

    /// The two moves orthogonal to this one, counterclockwise first.
    ///
    /// Returns `None` for `Stop`, which has no perpendiculars. The
    /// ordering matters to the execution-noise fallback, which picks
    /// between the two with a fair coin.
    pub fn perpendicular(self) -> Option<[Direction; 2]> {
        match self {
            Direction::North => Some([Direction::West, Direction::East]),
            Direction::South => Some([Direction::East, Direction::West]),
            Direction::East => Some([Direction::North, Direction::South]),
            Direction::West => Some([Direction::South, Direction::North]),
            Direction::Stop => None,
        }
    }

    /// `true` for the four moves, `false` for `Stop`.
    pub fn is_cardinal(self) -> bool {
        self != Direction::Stop
    }

    /// Parse a host-engine direction symbol.
    ///
    /// Accepts the conventional `"North"`, `"South"`, `"East"`,
    /// `"West"`, and `"Stop"` strings. Unrecognized symbols return
    /// `None`; hosts typically fold that to [`Direction::Stop`], which
    /// the sensor layer treats as stationary (omnidirectional) sensing.
    ///
    /// # Examples
    ///
    /// ```
    /// use prowl_core::Direction;
    ///
    /// assert_eq!(Direction::from_symbol("North"), Some(Direction::North));
    /// assert_eq!(Direction::from_symbol("Sideways"), None);
    /// ```
    pub fn from_symbol(symbol: &str) -> Option<Direction> {
        match symbol {
            "North" => Some(Direction::North),
            "South" => Some(Direction::South),
            "East" => Some(Direction::East),
            "West" => Some(Direction::West),
            "Stop" => Some(Direction::Stop),
            _ => None,
        }
    }

    /// The symbol accepted by [`from_symbol`](Direction::from_symbol).
    pub fn as_str(self) -> &'static str {
        match self {
            Direction::North => "North",
            Direction::South => "South",
            Direction::East => "East",
            Direction::West => "West",
            Direction::Stop => "Stop",
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn offsets_are_unit_moves() {
        for d in Direction::CARDINALS {
            let (dx, dy) = d.offset();
            assert_eq!(dx.abs() + dy.abs(), 1, "{d} offset ({dx}, {dy})");
        }
        assert_eq!(Direction::Stop.offset(), (0, 0));
    }

    #[test]
    fn opposite_is_involution() {
        for d in Direction::CARDINALS {
            assert_eq!(d.opposite().opposite(), d);
            assert_ne!(d.opposite(), d);
        }
        assert_eq!(Direction::Stop.opposite(), Direction::Stop);
    }

    #[test]
    fn perpendicular_is_orthogonal() {
        for d in Direction::CARDINALS {
            let [left, right] = d.perpendicular().unwrap();
            assert_eq!(left.opposite(), right);
            let (dx, dy) = d.offset();
            let (lx, ly) = left.offset();
            assert_eq!(dx * lx + dy * ly, 0, "{d} not orthogonal to {left}");
        }
        assert!(Direction::Stop.perpendicular().is_none());
    }

    #[test]
    fn perpendicular_counterclockwise_first() {
        assert_eq!(
            Direction::North.perpendicular(),
            Some([Direction::West, Direction::East])
        );
        assert_eq!(
            Direction::East.perpendicular(),
            Some([Direction::North, Direction::South])
        );
        assert_eq!(
            Direction::South.perpendicular(),
            Some([Direction::East, Direction::West])
        );
        assert_eq!(
            Direction::West.perpendicular(),
            Some([Direction::South, Direction::North])
        );
    }

    #[test]
    fn from_symbol_round_trips() {
        for d in [
            Direction::North,
            Direction::South,
            Direction::East,
            Direction::West,
            Direction::Stop,
        ] {
            assert_eq!(Direction::from_symbol(d.as_str()), Some(d));
        }
    }

    #[test]
    fn from_symbol_rejects_unknown() {
        assert_eq!(Direction::from_symbol(""), None);
        assert_eq!(Direction::from_symbol("north"), None);
        assert_eq!(Direction::from_symbol("Northeast"), None);
    }

    #[test]
    fn default_is_stop() {
        assert_eq!(Direction::default(), Direction::Stop);
    }
}
