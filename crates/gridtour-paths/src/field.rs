//! Nearest-goal heuristic fields.

use std::collections::{HashMap, HashSet};

use gridtour_core::{Coord, Grid};

use crate::distance::manhattan;

/// Manhattan distance from every open cell to the nearest of a goal set.
///
/// A field is built for one goal set and never patched: when the goal set
/// changes a new field is built from scratch.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct HeuristicField {
    dist: HashMap<Coord, i32>,
}

impl HeuristicField {
    /// Build the field of `grid` for `goals`.
    ///
    /// Cost is O(|grid| × |goals|). An empty goal set produces an empty field.
    pub fn build(grid: &Grid, goals: &[Coord]) -> Self {
        if goals.is_empty() {
            return Self::default();
        }
        let goal_set: HashSet<Coord> = goals.iter().copied().collect();
        let mut dist = HashMap::with_capacity(grid.len());

        for &c in grid {
            if goal_set.contains(&c) {
                dist.insert(c, 0);
                continue;
            }
            let mut best = i32::MAX;
            for &g in goals {
                best = best.min(manhattan(c, g));
                // c is not a goal, so 1 cannot be beaten.
                if best == 1 {
                    break;
                }
            }
            dist.insert(c, best);
        }

        log::trace!("built heuristic field: {} cells, {} goals", dist.len(), goals.len());
        Self { dist }
    }

    /// Heuristic value at `c`, or `None` if `c` is not an open cell.
    #[inline]
    pub fn get(&self, c: Coord) -> Option<i32> {
        self.dist.get(&c).copied()
    }

    /// Number of cells covered by the field.
    pub fn len(&self) -> usize {
        self.dist.len()
    }

    pub fn is_empty(&self) -> bool {
        self.dist.is_empty()
    }

    /// Iterate over `(cell, distance)` pairs in arbitrary order.
    pub fn iter(&self) -> impl Iterator<Item = (Coord, i32)> + '_ {
        self.dist.iter().map(|(&c, &d)| (c, d))
    }
}
