//! Per-tick reward maps over the legal-cell universe.

use indexmap::IndexMap;
use prowl_core::Cell;
use prowl_grid::Maze;
use prowl_sense::Observation;

use crate::danger::danger_zones;

/// What the agent is ultimately steering towards.
///
/// The policy decides how the reward map reacts to scared ghosts: the
/// hunting policies invert ghost and danger rewards once every sensed
/// ghost is scared, turning threats into targets.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum TargetPolicy {
    /// Eat food and stay alive. Ghosts remain repulsive even while
    /// scared.
    #[default]
    Food,
    /// Hunt ghosts whenever the whole sensed pack is scared.
    EdibleGhosts,
    /// Chase capsules to arm a ghost hunt, then hunt like
    /// [`EdibleGhosts`](TargetPolicy::EdibleGhosts). Until the pack is
    /// scared, capsules outrank any danger painted over them.
    Capsules,
}

impl TargetPolicy {
    /// Whether this policy inverts ghost rewards on an all-scared
    /// pack.
    pub fn arms_sign_flip(&self) -> bool {
        !matches!(self, TargetPolicy::Food)
    }
}

/// The reward constants a [`RewardMap`] is painted from.
#[derive(Clone, Copy, Debug)]
pub struct RewardProfile {
    /// Reward on each food cell.
    pub food: f64,
    /// Reward on each capsule cell.
    pub capsule: f64,
    /// Reward on each cell holding a sensed ghost.
    pub ghost: f64,
    /// Reward inside a nearby ghost's danger ball.
    pub danger_zone: f64,
    /// Reward on every other legal cell, typically a small step cost.
    pub blank: f64,
    /// Manhattan radius of each danger ball, and the agent-to-ghost
    /// distance within which a ghost projects one.
    pub safety_distance: u32,
    /// How scared ghosts reshape the map.
    pub policy: TargetPolicy,
}

impl Default for RewardProfile {
    fn default() -> Self {
        Self {
            food: 10.0,
            capsule: 50.0,
            ghost: -500.0,
            danger_zone: -250.0,
            blank: -0.04,
            safety_distance: 1,
            policy: TargetPolicy::Food,
        }
    }
}

/// A reward value for every cell in the maze's legal universe.
///
/// Rebuilt from scratch each tick: blank rewards cover the universe,
/// then food, capsules, danger zones, and ghosts paint over one
/// another in that order, so a ghost standing on food leaves a ghost
/// reward. Entities the host reports outside the universe are
/// dropped. Iteration order matches [`Maze::legal_cells`].
#[derive(Clone, Debug)]
pub struct RewardMap {
    values: IndexMap<Cell, f64>,
    sign_flipped: bool,
    danger_cells: usize,
}

impl RewardMap {
    /// Paint a fresh map for this tick's observation.
    pub fn build(maze: &Maze, observation: &Observation, profile: &RewardProfile) -> Self {
        let mut values: IndexMap<Cell, f64> = maze
            .legal_cells()
            .iter()
            .map(|&cell| (cell, profile.blank))
            .collect();

        paint(&mut values, &observation.food, profile.food);
        paint(&mut values, &observation.capsules, profile.capsule);

        let ghost_cells = observation.ghost_cells();
        let danger = danger_zones(maze, observation.agent, &ghost_cells, profile.safety_distance);
        let flipped = profile.policy.arms_sign_flip() && observation.all_ghosts_scared();
        let sign = if flipped { -1.0 } else { 1.0 };

        paint(&mut values, &danger, profile.danger_zone * sign);
        paint(&mut values, &ghost_cells, profile.ghost * sign);

        // An unarmed capsule hunter values capsules above the danger
        // painted over them; once the pack is scared the hunt is on
        // and capsules drop back below ghosts.
        if profile.policy == TargetPolicy::Capsules && !flipped {
            paint(&mut values, &observation.capsules, profile.capsule);
        }

        Self {
            values,
            sign_flipped: flipped,
            danger_cells: danger.len(),
        }
    }

    /// The reward at `cell`.
    ///
    /// # Panics
    ///
    /// Panics if `cell` is not in the legal universe. Planning only
    /// ever lands on legal cells, so a miss is a caller bug and not a
    /// recoverable condition.
    pub fn get(&self, cell: Cell) -> f64 {
        match self.values.get(&cell) {
            Some(&value) => value,
            None => panic!("cell {cell} is outside the legal universe of this reward map"),
        }
    }

    /// Whether ghost and danger rewards were inverted this tick.
    pub fn sign_flipped(&self) -> bool {
        self.sign_flipped
    }

    /// Size of the combined danger zone painted this tick. Ghost
    /// cells overpaint their own ball centres, so this can exceed the
    /// number of cells left holding the danger reward.
    pub fn danger_cell_count(&self) -> usize {
        self.danger_cells
    }

    /// Number of cells in the map, equal to the universe size.
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Whether the universe is empty (a fully walled map).
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Cells and rewards in universe order.
    pub fn iter(&self) -> impl Iterator<Item = (Cell, f64)> + '_ {
        self.values.iter().map(|(&cell, &value)| (cell, value))
    }
}

fn paint(values: &mut IndexMap<Cell, f64>, cells: &[Cell], reward: f64) {
    for cell in cells {
        if let Some(value) = values.get_mut(cell) {
            *value = reward;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use prowl_sense::GhostContact;
    use prowl_test_utils::parse_layout;

    fn c(x: i32, y: i32) -> Cell {
        Cell::new(x, y)
    }

    fn observe_everything(state: &prowl_test_utils::MockGameState) -> Observation {
        Observation {
            agent: state.agent,
            facing: state.facing,
            food: state.food.clone(),
            capsules: state.capsules.clone(),
            ghosts: state
                .ghosts
                .iter()
                .map(|g| GhostContact {
                    cell: g.cell(),
                    scared: g.is_scared(),
                })
                .collect(),
        }
    }

    #[test]
    fn blank_reward_covers_the_whole_universe() {
        let state = parse_layout("%%%%%\n%   %\n%   %\n%%%%%");
        let maze = state.maze().unwrap();
        let map = RewardMap::build(&maze, &observe_everything(&state), &RewardProfile::default());
        assert_eq!(map.len(), maze.legal_cells().len());
        assert!(map.iter().all(|(_, reward)| reward == -0.04));
        assert_eq!(map.danger_cell_count(), 0);
        assert!(!map.sign_flipped());
    }

    #[test]
    fn iteration_follows_the_universe_order() {
        let state = parse_layout("%%%%%\n% % %\n%   %\n%%%%%");
        let maze = state.maze().unwrap();
        let map = RewardMap::build(&maze, &observe_everything(&state), &RewardProfile::default());
        let cells: Vec<Cell> = map.iter().map(|(cell, _)| cell).collect();
        assert_eq!(cells.as_slice(), maze.legal_cells());
    }

    #[test]
    fn food_and_capsules_paint_over_blank() {
        let state = parse_layout("%%%%%\n%.o %\n%%%%%");
        let maze = state.maze().unwrap();
        let map = RewardMap::build(&maze, &observe_everything(&state), &RewardProfile::default());
        assert_eq!(map.get(c(1, 1)), 10.0);
        assert_eq!(map.get(c(2, 1)), 50.0);
        assert_eq!(map.get(c(3, 1)), -0.04);
    }

    #[test]
    fn danger_paints_over_food_and_ghost_over_danger() {
        // Agent adjacent to the ghost, so the ghost projects its ball.
        let state = parse_layout("%%%%%\n%PG.%\n%%%%%");
        let maze = state.maze().unwrap();
        let map = RewardMap::build(&maze, &observe_everything(&state), &RewardProfile::default());
        assert_eq!(map.get(c(2, 1)), -500.0, "ghost cell");
        assert_eq!(map.get(c(3, 1)), -250.0, "food inside the danger ball");
        assert_eq!(map.get(c(1, 1)), -250.0);
        assert_eq!(map.danger_cell_count(), 3);
    }

    #[test]
    fn distant_ghost_keeps_its_cell_reward_only() {
        let state = parse_layout("%%%%%%%%\n%P    G%\n%%%%%%%%");
        let maze = state.maze().unwrap();
        let map = RewardMap::build(&maze, &observe_everything(&state), &RewardProfile::default());
        assert_eq!(map.get(c(6, 1)), -500.0);
        assert_eq!(map.get(c(5, 1)), -0.04, "no ball without a nearby agent");
        assert_eq!(map.danger_cell_count(), 0);
    }

    #[test]
    fn hunting_policy_flips_signs_on_an_all_scared_pack() {
        let mut state = parse_layout("%%%%%\n%PG %\n%%%%%");
        state.ghosts[0].scared_ticks = 30;
        let maze = state.maze().unwrap();
        let profile = RewardProfile {
            policy: TargetPolicy::EdibleGhosts,
            ..RewardProfile::default()
        };
        let map = RewardMap::build(&maze, &observe_everything(&state), &profile);
        assert!(map.sign_flipped());
        assert_eq!(map.get(c(2, 1)), 500.0, "scared ghost is a target");
        assert_eq!(map.get(c(3, 1)), 250.0, "its ball attracts too");
    }

    #[test]
    fn food_policy_never_flips() {
        let mut state = parse_layout("%%%%%\n%PG %\n%%%%%");
        state.ghosts[0].scared_ticks = 30;
        let maze = state.maze().unwrap();
        let map = RewardMap::build(&maze, &observe_everything(&state), &RewardProfile::default());
        assert!(!map.sign_flipped());
        assert_eq!(map.get(c(2, 1)), -500.0);
    }

    #[test]
    fn one_brave_ghost_blocks_the_flip() {
        let mut state = parse_layout("%%%%%%%\n%P GG %\n%%%%%%%");
        state.ghosts[0].scared_ticks = 30;
        let maze = state.maze().unwrap();
        let profile = RewardProfile {
            policy: TargetPolicy::EdibleGhosts,
            ..RewardProfile::default()
        };
        let map = RewardMap::build(&maze, &observe_everything(&state), &profile);
        assert!(!map.sign_flipped(), "every sensed ghost must be scared");
        assert_eq!(map.get(c(3, 1)), -500.0);
    }

    #[test]
    fn capsule_hunter_keeps_capsules_above_danger_until_armed() {
        let state = parse_layout("%%%%%\n%PGo%\n%%%%%");
        let maze = state.maze().unwrap();
        let profile = RewardProfile {
            policy: TargetPolicy::Capsules,
            ..RewardProfile::default()
        };
        let map = RewardMap::build(&maze, &observe_everything(&state), &profile);
        // The capsule sits inside the ghost's ball yet keeps its pull.
        assert_eq!(map.get(c(3, 1)), 50.0);
        assert_eq!(map.get(c(2, 1)), -500.0);
    }

    #[test]
    fn armed_capsule_hunter_stops_promoting_capsules() {
        let mut state = parse_layout("%%%%%\n%PGo%\n%%%%%");
        state.ghosts[0].scared_ticks = 30;
        let maze = state.maze().unwrap();
        let profile = RewardProfile {
            policy: TargetPolicy::Capsules,
            ..RewardProfile::default()
        };
        let map = RewardMap::build(&maze, &observe_everything(&state), &profile);
        assert!(map.sign_flipped());
        assert_eq!(map.get(c(3, 1)), 250.0, "flipped ball wins the capsule cell");
        assert_eq!(map.get(c(2, 1)), 500.0);
    }

    #[test]
    fn entities_outside_the_universe_are_dropped() {
        let state = parse_layout("%%%%%\n%P  %\n%%%%%");
        let maze = state.maze().unwrap();
        let mut observation = observe_everything(&state);
        observation.food.push(c(0, 0));
        observation.food.push(c(9, 9));
        let map = RewardMap::build(&maze, &observation, &RewardProfile::default());
        assert_eq!(map.len(), maze.legal_cells().len());
    }

    #[test]
    #[should_panic(expected = "outside the legal universe")]
    fn get_panics_on_a_wall_cell() {
        let state = parse_layout("%%%%%\n%P  %\n%%%%%");
        let maze = state.maze().unwrap();
        let map = RewardMap::build(&maze, &observe_everything(&state), &RewardProfile::default());
        map.get(c(0, 0));
    }
}
