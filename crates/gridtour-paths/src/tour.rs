//! Multi-goal tours: repeated A* legs with a recomputed heuristic field.
//!
//! A tour starts at `start` and must step on every goal. Each leg runs A*
//! from the current position with a [`HeuristicField`] built over the leg's
//! targets (see [`LegPlanner`]). The first target the leg expands ends it:
//! the leg's path is appended, the goal is struck off, and a fresh leg with
//! its own frontier, predecessor map and field starts from that goal.
//!
//! Nodes are fixed at first discovery and never reopened, so a leg can be
//! longer than the shortest path to the goal it reaches. Every leg is still
//! a valid walk, and the tour as a whole is greedy.

use std::collections::HashSet;

use gridtour_core::{Coord, Grid};

use crate::config::SearchConfig;
use crate::error::{TourError, TourResult};
use crate::field::HeuristicField;
use crate::frontier::Frontier;
use crate::planner::{AllRemaining, LegPlanner};
use crate::predecessors::PredecessorMap;

/// Outcome of a completed tour.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Tour {
    /// Nodes expanded over all legs.
    pub expansions: usize,
    /// Every coordinate walked, start first. Consecutive legs share their
    /// boundary coordinate once.
    pub path: Vec<Coord>,
    /// Goals in the order they were reached.
    pub visit_order: Vec<Coord>,
}

impl Tour {
    /// Number of coordinates on the path.
    pub fn len(&self) -> usize {
        self.path.len()
    }

    pub fn is_empty(&self) -> bool {
        self.path.is_empty()
    }

    /// Number of moves walked.
    pub fn steps(&self) -> usize {
        self.path.len().saturating_sub(1)
    }
}

/// Visit every goal starting from `start`, letting each leg end on
/// whichever remaining goal it reaches first.
///
/// An empty goal list succeeds immediately with an empty tour.
pub fn find_tour(grid: &Grid, start: Coord, goals: &[Coord]) -> TourResult<Tour> {
    find_tour_with(grid, start, goals, &mut AllRemaining, &SearchConfig::default())
}

/// [`find_tour`] with an explicit goal-sequencing strategy and config.
///
/// Goals are validated before any search: a goal outside the grid fails
/// with [`TourError::InvalidGoal`], a walled start with
/// [`TourError::InvalidStart`]. Duplicate goals count once.
pub fn find_tour_with<P: LegPlanner + ?Sized>(
    grid: &Grid,
    start: Coord,
    goals: &[Coord],
    planner: &mut P,
    config: &SearchConfig,
) -> TourResult<Tour> {
    if goals.is_empty() {
        return Ok(Tour::default());
    }
    if let Some(&g) = goals.iter().find(|&&g| !grid.contains(g)) {
        return Err(TourError::InvalidGoal(g));
    }
    if !grid.contains(start) {
        return Err(TourError::InvalidStart(start));
    }

    let mut seen = HashSet::with_capacity(goals.len());
    let mut remaining: Vec<Coord> = goals.iter().copied().filter(|g| seen.insert(*g)).collect();

    log::debug!(
        "tour from {} over {} goals ({} planner)",
        start,
        remaining.len(),
        planner.name()
    );

    let mut tour = Tour::default();
    let mut origin = start;
    let mut first_leg = true;

    while !remaining.is_empty() {
        let mut targets: Vec<Coord> = planner
            .leg_targets(grid, origin, &remaining)?
            .into_iter()
            .filter(|t| remaining.contains(t))
            .collect();
        if targets.is_empty() {
            log::warn!("{} planner chose no targets, using all remaining", planner.name());
            targets = remaining.clone();
        }

        let mut leg = Leg::new(grid, origin, &targets, config);
        let before = tour.expansions;
        let reached = leg.run(first_leg, &mut tour.expansions, &remaining)?;
        let segment = leg.preds.path_to(reached).ok_or_else(|| TourError::Unreachable {
            from: origin,
            remaining: remaining.clone(),
        })?;

        log::debug!(
            "leg {} -> {}: {} moves, {} expansions",
            origin,
            reached,
            segment.len() - 1,
            tour.expansions - before
        );

        let skip = if tour.path.is_empty() { 0 } else { 1 };
        tour.path.extend(segment.into_iter().skip(skip));
        tour.visit_order.push(reached);
        remaining.retain(|&g| g != reached);

        origin = reached;
        first_leg = false;
    }

    log::debug!(
        "tour complete: {} steps, {} expansions",
        tour.steps(),
        tour.expansions
    );
    Ok(tour)
}

/// One A* search from `origin` to the nearest of a target set.
struct Leg<'a> {
    grid: &'a Grid,
    config: &'a SearchConfig,
    origin: Coord,
    targets: HashSet<Coord>,
    field: HeuristicField,
    frontier: Frontier,
    preds: PredecessorMap,
}

impl<'a> Leg<'a> {
    fn new(grid: &'a Grid, origin: Coord, targets: &[Coord], config: &'a SearchConfig) -> Self {
        Self {
            grid,
            config,
            origin,
            targets: targets.iter().copied().collect(),
            field: HeuristicField::build(grid, targets),
            frontier: Frontier::new(config.tie_break),
            preds: PredecessorMap::rooted_at(origin),
        }
    }

    /// Search until a target is expanded and return it.
    ///
    /// On the first leg the origin is pushed and expanded like any other
    /// node. Later legs start at a goal the previous leg already expanded,
    /// so its neighbours are pushed directly without counting it again.
    fn run(
        &mut self,
        first_leg: bool,
        expansions: &mut usize,
        remaining: &[Coord],
    ) -> TourResult<Coord> {
        if first_leg {
            let h = self.field.get(self.origin).unwrap_or(0);
            self.frontier.push(self.origin, h, 0);
        } else {
            self.expand(self.origin, 0);
        }

        while let Some(node) = self.frontier.pop() {
            self.config.charge(expansions)?;
            if self.targets.contains(&node.coord) {
                return Ok(node.coord);
            }
            self.expand(node.coord, node.cost);
        }

        Err(TourError::Unreachable {
            from: self.origin,
            remaining: remaining.to_vec(),
        })
    }

    /// Push every open, undiscovered neighbour of `c`.
    fn expand(&mut self, c: Coord, cost: i32) {
        let grid = self.grid;
        for n in grid.neighbors(c) {
            if self.preds.contains(n) {
                continue;
            }
            let Some(h) = self.field.get(n) else {
                continue;
            };
            self.frontier.push(n, cost + 1 + h, cost + 1);
            self.preds.insert(n, c);
        }
    }
}
