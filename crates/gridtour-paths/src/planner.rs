//! Goal-sequencing strategies for multi-goal tours.
//!
//! A tour is a series of legs. Before every leg the engine asks a
//! [`LegPlanner`] which of the remaining goals that leg may end on; the
//! leg's heuristic field is then built from exactly those goals and the
//! leg stops at the first of them it expands.
//!
//! | Planner | Next leg targets |
//! |---|---|
//! | [`AllRemaining`] | every remaining goal, the search picks whichever it reaches first |
//! | [`NearestGoal`] | the single goal closest (Manhattan) to the leg start |
//! | [`HeldKarp`] | the next goal of an exact shortest visiting order |

use gridtour_core::{Coord, Grid};

use crate::bfs::bfs_distances;
use crate::distance::closest;
use crate::error::{TourError, TourResult};

/// Chooses the goals a tour leg may finish on.
pub trait LegPlanner {
    /// Short name used in log output.
    fn name(&self) -> &'static str;

    /// Targets for the leg starting at `from`.
    ///
    /// `remaining` is never empty and lists unvisited goals in their
    /// original order. The returned goals must be a non-empty subset of
    /// `remaining`.
    fn leg_targets(
        &mut self,
        grid: &Grid,
        from: Coord,
        remaining: &[Coord],
    ) -> TourResult<Vec<Coord>>;
}

/// Target every remaining goal at once.
#[derive(Debug, Clone, Copy, Default)]
pub struct AllRemaining;

impl LegPlanner for AllRemaining {
    fn name(&self) -> &'static str {
        "all-remaining"
    }

    fn leg_targets(&mut self, _: &Grid, _: Coord, remaining: &[Coord]) -> TourResult<Vec<Coord>> {
        Ok(remaining.to_vec())
    }
}

/// Target the remaining goal nearest to the leg start by Manhattan
/// distance. Ties go to the goal listed first.
#[derive(Debug, Clone, Copy, Default)]
pub struct NearestGoal;

impl LegPlanner for NearestGoal {
    fn name(&self) -> &'static str {
        "nearest-goal"
    }

    fn leg_targets(&mut self, _: &Grid, from: Coord, remaining: &[Coord]) -> TourResult<Vec<Coord>> {
        Ok(closest(from, remaining)
            .map(|i| vec![remaining[i]])
            .unwrap_or_default())
    }
}

/// Visit goals in the order with the least total BFS distance.
///
/// The order is computed by Held–Karp dynamic programming over exact BFS
/// distances between the start and every goal. Time and memory grow as
/// 2^n, so at most [`HeldKarp::MAX_GOALS`] goals are accepted.
///
/// Only the order is optimal. Each leg is still walked by the tour engine,
/// which can return a leg longer than its BFS distance, so the tour may
/// exceed the planned total.
///
/// The plan is kept across legs while the planner is asked for exactly
/// the next step of it: from the goal it last handed out, over the goals
/// it has not handed out yet. Anything else, such as a new tour or a
/// different start, triggers a fresh plan.
#[derive(Debug, Clone, Default)]
pub struct HeldKarp {
    order: Vec<Coord>,
    /// Where the next leg must start for `order` to still apply.
    expect_from: Option<Coord>,
}

impl HeldKarp {
    /// Largest goal count the planner accepts.
    pub const MAX_GOALS: usize = 16;

    pub fn new() -> Self {
        Self::default()
    }

    /// The planned visiting order, empty until the first leg is planned.
    pub fn order(&self) -> &[Coord] {
        &self.order
    }

    /// Whether a leg from `from` over `remaining` continues the current
    /// plan.
    fn continues_plan(&self, from: Coord, remaining: &[Coord]) -> bool {
        if self.expect_from != Some(from) || remaining.len() > self.order.len() {
            return false;
        }
        let rest = &self.order[self.order.len() - remaining.len()..];
        rest.iter().all(|g| remaining.contains(g))
    }

    /// Shortest visiting order of `goals` from `start` and its length in
    /// moves.
    pub fn plan(grid: &Grid, start: Coord, goals: &[Coord]) -> TourResult<(Vec<Coord>, i32)> {
        let n = goals.len();
        if n > Self::MAX_GOALS {
            return Err(TourError::TooManyGoals {
                count: n,
                max: Self::MAX_GOALS,
            });
        }
        if n == 0 {
            return Ok((Vec::new(), 0));
        }

        // Goals reachable from the start are mutually reachable on an
        // undirected grid, so only the start row needs checking.
        let from_start = bfs_distances(grid, start);
        let unreachable: Vec<Coord> = goals
            .iter()
            .copied()
            .filter(|g| !from_start.contains_key(g))
            .collect();
        if !unreachable.is_empty() {
            return Err(TourError::Unreachable {
                from: start,
                remaining: unreachable,
            });
        }
        let start_dist: Vec<i32> = goals.iter().map(|g| from_start[g]).collect();
        let between: Vec<Vec<i32>> = goals
            .iter()
            .map(|&g| {
                let d = bfs_distances(grid, g);
                goals.iter().map(|h| d[h]).collect()
            })
            .collect();

        const INF: i32 = i32::MAX;
        let full = 1usize << n;
        let mut cost = vec![INF; full * n];
        let mut parent = vec![usize::MAX; full * n];
        let at = |mask: usize, j: usize| mask * n + j;

        for j in 0..n {
            cost[at(1 << j, j)] = start_dist[j];
        }
        for mask in 1..full {
            for j in 0..n {
                let c = cost[at(mask, j)];
                if mask & (1 << j) == 0 || c == INF {
                    continue;
                }
                for k in 0..n {
                    if mask & (1 << k) != 0 {
                        continue;
                    }
                    let next = mask | (1 << k);
                    let nc = c + between[j][k];
                    if nc < cost[at(next, k)] {
                        cost[at(next, k)] = nc;
                        parent[at(next, k)] = j;
                    }
                }
            }
        }

        let all = full - 1;
        let mut last = 0;
        for j in 1..n {
            if cost[at(all, j)] < cost[at(all, last)] {
                last = j;
            }
        }
        let total = cost[at(all, last)];

        let mut order = Vec::with_capacity(n);
        let mut mask = all;
        let mut j = last;
        loop {
            order.push(goals[j]);
            let p = parent[at(mask, j)];
            mask &= !(1 << j);
            if p == usize::MAX {
                break;
            }
            j = p;
        }
        order.reverse();
        Ok((order, total))
    }
}

impl LegPlanner for HeldKarp {
    fn name(&self) -> &'static str {
        "held-karp"
    }

    fn leg_targets(
        &mut self,
        grid: &Grid,
        from: Coord,
        remaining: &[Coord],
    ) -> TourResult<Vec<Coord>> {
        if !self.continues_plan(from, remaining) {
            let (order, total) = Self::plan(grid, from, remaining)?;
            log::debug!("held-karp order over {} goals: {} moves", order.len(), total);
            self.order = order;
        }
        let Some(&next) = self.order.get(self.order.len() - remaining.len()) else {
            return Ok(Vec::new());
        };
        self.expect_from = Some(next);
        Ok(vec![next])
    }
}
