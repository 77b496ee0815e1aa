//! Test utilities and mock game states for Prowl development.
//!
//! Provides a [`MockGameState`] implementation of [`GameState`] with
//! chainable setup methods, plus a [`parse_layout`] helper that builds
//! one from an ASCII map.

#![forbid(unsafe_code)]
#![allow(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

use prowl_core::{Cell, Direction, GameState, GhostSighting};
use prowl_grid::{Maze, MazeError};
use smallvec::SmallVec;

/// Mock implementation of [`GameState`].
///
/// All fields are public for flexible test setup; the `with_*` methods
/// exist for the common chained style. [`apply_move`](MockGameState::apply_move)
/// gives tests a minimal turn loop: it moves the agent, updates its
/// facing, and consumes food or capsules at the destination.
#[derive(Clone, Debug)]
pub struct MockGameState {
    pub width: u32,
    pub height: u32,
    pub walls: Vec<Cell>,
    pub agent: Cell,
    pub facing: Direction,
    pub food: Vec<Cell>,
    pub capsules: Vec<Cell>,
    pub ghosts: Vec<GhostSighting>,
}

impl MockGameState {
    /// An open map of the given dimensions with the agent at the
    /// origin, facing nowhere.
    pub fn open(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            walls: Vec::new(),
            agent: Cell::new(0, 0),
            facing: Direction::Stop,
            food: Vec::new(),
            capsules: Vec::new(),
            ghosts: Vec::new(),
        }
    }

    pub fn with_walls(mut self, walls: Vec<Cell>) -> Self {
        self.walls = walls;
        self
    }

    pub fn with_agent(mut self, agent: Cell) -> Self {
        self.agent = agent;
        self
    }

    pub fn with_facing(mut self, facing: Direction) -> Self {
        self.facing = facing;
        self
    }

    pub fn with_food(mut self, food: Vec<Cell>) -> Self {
        self.food = food;
        self
    }

    pub fn with_capsules(mut self, capsules: Vec<Cell>) -> Self {
        self.capsules = capsules;
        self
    }

    pub fn with_ghosts(mut self, ghosts: Vec<GhostSighting>) -> Self {
        self.ghosts = ghosts;
        self
    }

    /// Build the [`Maze`] for this state's dimensions and walls.
    pub fn maze(&self) -> Result<Maze, MazeError> {
        Maze::new(self.width, self.height, self.walls.iter().copied())
    }

    fn is_open(&self, cell: Cell) -> bool {
        cell.x >= 0
            && cell.y >= 0
            && (cell.x as u32) < self.width
            && (cell.y as u32) < self.height
            && !self.walls.contains(&cell)
    }

    /// Advance the state one tick by executing `direction`.
    ///
    /// Blocked moves leave the agent in place. A non-`Stop` direction
    /// becomes the new facing either way; `Stop` keeps the old facing,
    /// matching hosts that report the last direction of travel.
    pub fn apply_move(&mut self, direction: Direction) {
        if direction == Direction::Stop {
            return;
        }
        self.facing = direction;
        let target = self.agent.translate(direction);
        if self.is_open(target) {
            self.agent = target;
            self.food.retain(|&cell| cell != target);
            self.capsules.retain(|&cell| cell != target);
        }
    }
}

impl GameState for MockGameState {
    fn agent_position(&self) -> Cell {
        self.agent
    }

    fn agent_facing(&self) -> Direction {
        self.facing
    }

    fn legal_actions(&self) -> SmallVec<[Direction; 5]> {
        let mut actions: SmallVec<[Direction; 5]> = Direction::CARDINALS
            .into_iter()
            .filter(|&direction| self.is_open(self.agent.translate(direction)))
            .collect();
        actions.push(Direction::Stop);
        actions
    }

    fn map_dimensions(&self) -> (u32, u32) {
        (self.width, self.height)
    }

    fn walls(&self) -> Vec<Cell> {
        self.walls.clone()
    }

    fn food(&self) -> Vec<Cell> {
        self.food.clone()
    }

    fn capsules(&self) -> Vec<Cell> {
        self.capsules.clone()
    }

    fn ghosts(&self) -> Vec<GhostSighting> {
        self.ghosts.clone()
    }
}

/// Build a [`MockGameState`] from an ASCII layout.
///
/// The bottom text row is `y = 0` and columns run west to east, so
/// layouts read the way the map is oriented. Glyphs: `%` wall,
/// `.` food, `o` capsule, `P` agent, `G` ghost (not scared), space
/// for an open cell. Blank lines are skipped; any other glyph panics.
///
/// ```
/// use prowl_test_utils::parse_layout;
/// use prowl_core::Cell;
///
/// let state = parse_layout("%%%%%\n%. P%\n%%%%%");
/// assert_eq!(state.agent, Cell::new(3, 1));
/// assert_eq!(state.food, vec![Cell::new(1, 1)]);
/// ```
pub fn parse_layout(text: &str) -> MockGameState {
    let rows: Vec<&str> = text
        .lines()
        .map(str::trim_end)
        .filter(|line| !line.is_empty())
        .collect();
    let height = rows.len() as u32;
    let width = rows.iter().map(|row| row.chars().count()).max().unwrap_or(0) as u32;

    let mut state = MockGameState::open(width, height);
    for (y, row) in rows.iter().rev().enumerate() {
        for (x, glyph) in row.chars().enumerate() {
            let cell = Cell::new(x as i32, y as i32);
            match glyph {
                '%' => state.walls.push(cell),
                '.' => state.food.push(cell),
                'o' => state.capsules.push(cell),
                'P' => state.agent = cell,
                'G' => state
                    .ghosts
                    .push(GhostSighting::new(cell.x as f64, cell.y as f64, 0)),
                ' ' => {}
                other => panic!("unrecognised layout glyph {other:?} at {cell}"),
            }
        }
    }
    state
}
