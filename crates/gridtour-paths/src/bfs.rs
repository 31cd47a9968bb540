use std::collections::{HashMap, VecDeque};

use gridtour_core::{Coord, Grid};

/// Breadth-first step distances from `source` to every reachable open cell.
///
/// Each move costs 1. The map is empty if `source` is a wall.
pub fn bfs_distances(grid: &Grid, source: Coord) -> HashMap<Coord, i32> {
    let mut dist = HashMap::new();
    if !grid.contains(source) {
        return dist;
    }
    dist.insert(source, 0);

    let mut queue: VecDeque<Coord> = VecDeque::new();
    queue.push_back(source);

    while let Some(c) = queue.pop_front() {
        let nd = dist[&c] + 1;
        for n in grid.neighbors(c) {
            if dist.contains_key(&n) {
                continue;
            }
            dist.insert(n, nd);
            queue.push_back(n);
        }
    }
    dist
}
