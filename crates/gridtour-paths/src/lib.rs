//! Multi-goal pathfinding on 4-connected grids.
//!
//! The centre of the crate is [`find_tour`]: visit every goal of a maze
//! with a sequence of A* legs, rebuilding the nearest-goal
//! [`HeuristicField`] each time a goal is struck off. Around it:
//!
//! - **Leg planners** choosing which goals a leg aims at ([`AllRemaining`],
//!   [`NearestGoal`], [`HeldKarp`])
//! - **Single-goal searches** ([`find_path`] with DFS, BFS, greedy or A*)
//! - **BFS distance maps** ([`bfs_distances`])
//! - **Path reconstruction** from a [`PredecessorMap`]
//!
//! Every search is synchronous and owns its frontier and predecessor map;
//! ties between equal priorities are broken by insertion order (see
//! [`TieBreak`]), so results are reproducible.

mod bfs;
mod config;
mod distance;
mod error;
mod field;
mod frontier;
mod planner;
mod predecessors;
mod single;
mod tour;

pub use bfs::bfs_distances;
pub use config::{SearchConfig, TieBreak};
pub use distance::{closest, manhattan};
pub use error::{TourError, TourResult};
pub use field::HeuristicField;
pub use planner::{AllRemaining, HeldKarp, LegPlanner, NearestGoal};
pub use predecessors::PredecessorMap;
pub use single::{PathOutcome, SearchKind, find_path};
pub use tour::{Tour, find_tour, find_tour_with};

pub use gridtour_core::{Coord, Dir, Grid};
