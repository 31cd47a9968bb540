use gridtour_core::Coord;
use thiserror::Error;

/// Errors reported by tours and single-goal searches.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TourError {
    #[error("goal {0} is not an open cell")]
    InvalidGoal(Coord),

    #[error("start {0} is not an open cell")]
    InvalidStart(Coord),

    #[error("no path from {from} to any of {} remaining goal(s)", .remaining.len())]
    Unreachable { from: Coord, remaining: Vec<Coord> },

    #[error("expansion budget of {0} nodes exhausted")]
    ExpansionLimit(usize),

    #[error("{count} goals exceed the planner limit of {max}")]
    TooManyGoals { count: usize, max: usize },
}

/// Result type for search operations.
pub type TourResult<T> = Result<T, TourError>;
