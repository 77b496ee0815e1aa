//! Danger zones painted around nearby ghosts.

use prowl_core::Cell;
use prowl_grid::Maze;

/// The legal cells inside a Manhattan ball around each nearby ghost.
///
/// A ghost only projects a zone while the agent is within
/// `safety_distance` of it; distant ghosts contribute nothing, which
/// keeps far corners of the map from being poisoned by ghosts the
/// agent is in no danger from. Zones of nearby ghosts overlap freely
/// and each cell appears once, in the order first painted.
pub fn danger_zones(
    maze: &Maze,
    agent: Cell,
    ghosts: &[Cell],
    safety_distance: u32,
) -> Vec<Cell> {
    let radius = safety_distance as i32;
    let mut zone = Vec::new();
    for &ghost in ghosts {
        if agent.manhattan_distance(ghost) > safety_distance {
            continue;
        }
        for dx in -radius..=radius {
            let remainder = radius - dx.abs();
            for dy in -remainder..=remainder {
                let cell = Cell::new(ghost.x.saturating_add(dx), ghost.y.saturating_add(dy));
                if maze.is_open(cell) && !zone.contains(&cell) {
                    zone.push(cell);
                }
            }
        }
    }
    zone
}

#[cfg(test)]
mod tests {
    use super::*;

    fn c(x: i32, y: i32) -> Cell {
        Cell::new(x, y)
    }

    #[test]
    fn zone_is_a_manhattan_ball() {
        let maze = Maze::new(9, 9, vec![]).unwrap();
        let zone = danger_zones(&maze, c(4, 4), &[c(4, 4)], 2);
        // Radius 2 around the centre: 1 + 4 + 8 cells.
        assert_eq!(zone.len(), 13);
        assert!(zone.contains(&c(4, 4)));
        assert!(zone.contains(&c(4, 6)));
        assert!(zone.contains(&c(5, 5)));
        assert!(!zone.contains(&c(6, 6)), "Chebyshev corner is outside");
    }

    #[test]
    fn distant_ghost_projects_no_zone() {
        let maze = Maze::new(9, 9, vec![]).unwrap();
        let zone = danger_zones(&maze, c(0, 0), &[c(8, 8)], 2);
        assert!(zone.is_empty());
    }

    #[test]
    fn eligibility_is_per_ghost() {
        let maze = Maze::new(9, 9, vec![]).unwrap();
        let zone = danger_zones(&maze, c(0, 0), &[c(0, 1), c(8, 8)], 1);
        // Only the adjacent ghost's ball: (0,1) and its open neighbours.
        assert_eq!(zone.len(), 4);
        assert!(zone.contains(&c(0, 0)));
        assert!(zone.contains(&c(0, 2)));
        assert!(zone.contains(&c(1, 1)));
        assert!(!zone.contains(&c(8, 8)));
    }

    #[test]
    fn walls_are_excluded_from_zones() {
        let maze = Maze::new(5, 5, vec![c(2, 3)]).unwrap();
        let zone = danger_zones(&maze, c(2, 2), &[c(2, 2)], 1);
        assert!(!zone.contains(&c(2, 3)));
        assert_eq!(zone.len(), 4);
    }

    #[test]
    fn overlapping_zones_merge_without_duplicates() {
        let maze = Maze::new(9, 9, vec![]).unwrap();
        let zone = danger_zones(&maze, c(4, 4), &[c(4, 4), c(5, 4)], 1);
        let mut sorted = zone.clone();
        sorted.sort();
        sorted.dedup();
        assert_eq!(sorted.len(), zone.len(), "painted cells must be unique");
        // Two overlapping radius-1 balls cover 4 + 4 distinct cells.
        assert_eq!(zone.len(), 8);
    }

    #[test]
    fn zero_radius_marks_the_ghost_cell_only() {
        let maze = Maze::new(5, 5, vec![]).unwrap();
        let zone = danger_zones(&maze, c(2, 2), &[c(2, 2)], 0);
        assert_eq!(zone, vec![c(2, 2)]);
    }
}
