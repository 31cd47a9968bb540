use crate::error::{TourError, TourResult};

/// How frontier nodes with equal priority are ordered.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum TieBreak {
    /// Earliest-inserted node first.
    #[default]
    Fifo,
    /// Most recently inserted node first.
    Lifo,
}

/// Tunables shared by tours and single-goal searches.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct SearchConfig {
    /// Secondary ordering for equal-priority frontier nodes.
    pub tie_break: TieBreak,
    /// Abort with [`TourError::ExpansionLimit`](crate::TourError::ExpansionLimit)
    /// once this many nodes have been expanded. `None` means unbounded.
    pub max_expansions: Option<usize>,
}

impl SearchConfig {
    pub fn with_tie_break(mut self, tie_break: TieBreak) -> Self {
        self.tie_break = tie_break;
        self
    }

    pub fn with_max_expansions(mut self, limit: usize) -> Self {
        self.max_expansions = Some(limit);
        self
    }

    /// Whether `expansions` has reached the configured budget.
    #[inline]
    pub(crate) fn exhausted(&self, expansions: usize) -> bool {
        self.max_expansions.is_some_and(|max| expansions >= max)
    }

    /// Count one more expansion, failing if the budget is already spent.
    pub(crate) fn charge(&self, expansions: &mut usize) -> TourResult<()> {
        if self.exhausted(*expansions) {
            log::warn!("search stopped after {} expansions", *expansions);
            return Err(TourError::ExpansionLimit(*expansions));
        }
        *expansions += 1;
        Ok(())
    }
}
