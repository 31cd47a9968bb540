//! Single-goal searches: depth-first, breadth-first, greedy best-first and
//! A*.
//!
//! All four share the tour engine's conventions: 4-connected unit moves in
//! [`Dir::ALL`](gridtour_core::Dir::ALL) order, a [`PredecessorMap`] for
//! reconstruction, the goal pop counted as an expansion, and the same
//! [`TourError`] taxonomy.

use std::collections::{HashMap, VecDeque};

use gridtour_core::{Coord, Grid};

use crate::config::SearchConfig;
use crate::distance::manhattan;
use crate::error::{TourError, TourResult};
use crate::frontier::Frontier;
use crate::predecessors::PredecessorMap;

/// Search strategy for [`find_path`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum SearchKind {
    /// LIFO stack, nodes marked when pushed.
    DepthFirst,
    /// FIFO queue; finds a shortest path.
    BreadthFirst,
    /// Best-first on Manhattan distance to the goal alone.
    Greedy,
    /// Best-first on cost-so-far plus Manhattan distance; finds a shortest
    /// path.
    AStar,
}

impl SearchKind {
    pub const ALL: [SearchKind; 4] = [
        SearchKind::DepthFirst,
        SearchKind::BreadthFirst,
        SearchKind::Greedy,
        SearchKind::AStar,
    ];

    pub fn name(self) -> &'static str {
        match self {
            SearchKind::DepthFirst => "dfs",
            SearchKind::BreadthFirst => "bfs",
            SearchKind::Greedy => "greedy",
            SearchKind::AStar => "astar",
        }
    }
}

/// Result of a single-goal search.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PathOutcome {
    pub expansions: usize,
    /// Start to goal, both included.
    pub path: Vec<Coord>,
}

/// Find a path from `start` to `goal` with the chosen strategy.
pub fn find_path(
    grid: &Grid,
    start: Coord,
    goal: Coord,
    kind: SearchKind,
    config: &SearchConfig,
) -> TourResult<PathOutcome> {
    if !grid.contains(goal) {
        return Err(TourError::InvalidGoal(goal));
    }
    if !grid.contains(start) {
        return Err(TourError::InvalidStart(start));
    }

    let mut expansions = 0;
    let preds = match kind {
        SearchKind::DepthFirst => depth_first(grid, start, goal, config, &mut expansions)?,
        SearchKind::BreadthFirst => breadth_first(grid, start, goal, config, &mut expansions)?,
        SearchKind::Greedy => greedy(grid, start, goal, config, &mut expansions)?,
        SearchKind::AStar => astar(grid, start, goal, config, &mut expansions)?,
    };

    let path = preds.path_to(goal).ok_or_else(|| unreachable_goal(start, goal))?;
    log::debug!(
        "{} {} -> {}: {} moves, {} expansions",
        kind.name(),
        start,
        goal,
        path.len() - 1,
        expansions
    );
    Ok(PathOutcome { expansions, path })
}

fn unreachable_goal(from: Coord, goal: Coord) -> TourError {
    TourError::Unreachable {
        from,
        remaining: vec![goal],
    }
}

fn depth_first(
    grid: &Grid,
    start: Coord,
    goal: Coord,
    config: &SearchConfig,
    expansions: &mut usize,
) -> TourResult<PredecessorMap> {
    let mut preds = PredecessorMap::rooted_at(start);
    let mut stack = vec![start];

    while let Some(c) = stack.pop() {
        config.charge(expansions)?;
        if c == goal {
            return Ok(preds);
        }
        for n in grid.neighbors(c) {
            if !preds.contains(n) {
                preds.insert(n, c);
                stack.push(n);
            }
        }
    }
    Err(unreachable_goal(start, goal))
}

fn breadth_first(
    grid: &Grid,
    start: Coord,
    goal: Coord,
    config: &SearchConfig,
    expansions: &mut usize,
) -> TourResult<PredecessorMap> {
    let mut preds = PredecessorMap::rooted_at(start);
    let mut queue = VecDeque::from([start]);

    while let Some(c) = queue.pop_front() {
        config.charge(expansions)?;
        if c == goal {
            return Ok(preds);
        }
        for n in grid.neighbors(c) {
            if !preds.contains(n) {
                preds.insert(n, c);
                queue.push_back(n);
            }
        }
    }
    Err(unreachable_goal(start, goal))
}

fn greedy(
    grid: &Grid,
    start: Coord,
    goal: Coord,
    config: &SearchConfig,
    expansions: &mut usize,
) -> TourResult<PredecessorMap> {
    let mut preds = PredecessorMap::rooted_at(start);
    let mut open = Frontier::new(config.tie_break);
    open.push(start, manhattan(start, goal), 0);

    while let Some(node) = open.pop() {
        config.charge(expansions)?;
        if node.coord == goal {
            return Ok(preds);
        }
        for n in grid.neighbors(node.coord) {
            if !preds.contains(n) {
                preds.insert(n, node.coord);
                open.push(n, manhattan(n, goal), node.cost + 1);
            }
        }
    }
    Err(unreachable_goal(start, goal))
}

/// A* that reopens a node whenever a cheaper route to it turns up, so the
/// result is a shortest path.
fn astar(
    grid: &Grid,
    start: Coord,
    goal: Coord,
    config: &SearchConfig,
    expansions: &mut usize,
) -> TourResult<PredecessorMap> {
    let mut preds = PredecessorMap::rooted_at(start);
    let mut best: HashMap<Coord, i32> = HashMap::from([(start, 0)]);
    let mut open = Frontier::new(config.tie_break);
    open.push(start, manhattan(start, goal), 0);

    while let Some(node) = open.pop() {
        // Skip stale entries.
        if best.get(&node.coord).is_some_and(|&g| node.cost > g) {
            continue;
        }
        config.charge(expansions)?;
        if node.coord == goal {
            return Ok(preds);
        }
        let tentative = node.cost + 1;
        for n in grid.neighbors(node.coord) {
            if best.get(&n).is_some_and(|&g| tentative >= g) {
                continue;
            }
            best.insert(n, tentative);
            preds.insert(n, node.coord);
            open.push(n, tentative + manhattan(n, goal), tentative);
        }
    }
    Err(unreachable_goal(start, goal))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::bfs::bfs_distances;
    use rand::rngs::StdRng;
    use rand::{Rng, SeedableRng};

    fn c(row: i32, col: i32) -> Coord {
        Coord::new(row, col)
    }

    fn run(grid: &Grid, start: Coord, goal: Coord, kind: SearchKind) -> TourResult<PathOutcome> {
        find_path(grid, start, goal, kind, &SearchConfig::default())
    }

    fn assert_valid(grid: &Grid, start: Coord, goal: Coord, out: &PathOutcome) {
        assert_eq!(out.path.first(), Some(&start));
        assert_eq!(out.path.last(), Some(&goal));
        for &p in &out.path {
            assert!(grid.contains(p));
        }
        for w in out.path.windows(2) {
            assert!(w[0].is_adjacent(w[1]));
        }
        assert!(out.expansions >= out.path.len() - 1);
    }

    /// A U-shaped wall forcing a detour.
    fn cup() -> Grid {
        // . . . . .
        // . # # # .
        // . # . # .
        // . . . . .
        let walls = [c(1, 1), c(1, 2), c(1, 3), c(2, 1), c(2, 3)];
        Grid::from_fn(4, 5, |p| !walls.contains(&p))
    }

    #[test]
    fn every_kind_finds_a_valid_path() {
        let grid = cup();
        for kind in SearchKind::ALL {
            let out = run(&grid, c(0, 2), c(2, 2), kind).unwrap();
            assert_valid(&grid, c(0, 2), c(2, 2), &out);
        }
    }

    #[test]
    fn bfs_and_astar_are_shortest() {
        let grid = cup();
        let shortest = bfs_distances(&grid, c(0, 2))[&c(2, 2)];
        assert_eq!(shortest, 8);
        for kind in [SearchKind::BreadthFirst, SearchKind::AStar] {
            let out = run(&grid, c(0, 2), c(2, 2), kind).unwrap();
            assert_eq!(out.path.len() as i32 - 1, shortest, "{}", kind.name());
        }
    }

    #[test]
    fn start_equals_goal() {
        let grid = Grid::from_cells([c(0, 0)]);
        for kind in SearchKind::ALL {
            let out = run(&grid, c(0, 0), c(0, 0), kind).unwrap();
            assert_eq!(out, PathOutcome { expansions: 1, path: vec![c(0, 0)] });
        }
    }

    #[test]
    fn unreachable_goal_for_every_kind() {
        let grid = Grid::from_cells([c(0, 0), c(0, 1), c(2, 2)]);
        for kind in SearchKind::ALL {
            assert_eq!(
                run(&grid, c(0, 0), c(2, 2), kind),
                Err(TourError::Unreachable {
                    from: c(0, 0),
                    remaining: vec![c(2, 2)],
                })
            );
        }
    }

    #[test]
    fn rejects_walls() {
        let grid = Grid::from_cells([c(0, 0)]);
        assert_eq!(
            run(&grid, c(0, 0), c(1, 1), SearchKind::AStar),
            Err(TourError::InvalidGoal(c(1, 1)))
        );
        assert_eq!(
            run(&grid, c(1, 1), c(0, 0), SearchKind::DepthFirst),
            Err(TourError::InvalidStart(c(1, 1)))
        );
    }

    #[test]
    fn greedy_expands_less_than_bfs_in_the_open() {
        let grid = Grid::from_fn(15, 15, |_| true);
        let bfs = run(&grid, c(0, 0), c(14, 14), SearchKind::BreadthFirst).unwrap();
        let greedy = run(&grid, c(0, 0), c(14, 14), SearchKind::Greedy).unwrap();
        assert!(greedy.expansions < bfs.expansions);
        assert_eq!(greedy.path.len(), 29);
    }

    #[test]
    fn budget_applies_to_single_searches() {
        let grid = Grid::from_fn(1, 20, |_| true);
        let cfg = SearchConfig::default().with_max_expansions(5);
        for kind in SearchKind::ALL {
            assert_eq!(
                find_path(&grid, c(0, 0), c(0, 19), kind, &cfg),
                Err(TourError::ExpansionLimit(5))
            );
        }
    }

    #[test]
    fn astar_matches_bfs_on_random_mazes() {
        let mut rng = StdRng::seed_from_u64(42);
        for _ in 0..50 {
            let grid = Grid::from_fn(10, 10, |_| rng.random_bool(0.7));
            let cells = grid.sorted();
            if cells.len() < 2 {
                continue;
            }
            let start = cells[rng.random_range(0..cells.len())];
            let goal = cells[rng.random_range(0..cells.len())];
            let dist = bfs_distances(&grid, start);

            let astar = run(&grid, start, goal, SearchKind::AStar);
            let bfs = run(&grid, start, goal, SearchKind::BreadthFirst);
            match dist.get(&goal) {
                Some(&d) => {
                    let astar = astar.unwrap();
                    let bfs = bfs.unwrap();
                    assert_valid(&grid, start, goal, &astar);
                    assert_eq!(astar.path.len() as i32 - 1, d);
                    assert_eq!(bfs.path.len() as i32 - 1, d);
                    // Admissible: never more than the true cost.
                    assert!(manhattan(start, goal) <= d);
                }
                None => {
                    assert!(matches!(astar, Err(TourError::Unreachable { .. })));
                    assert!(matches!(bfs, Err(TourError::Unreachable { .. })));
                }
            }
        }
    }
}
