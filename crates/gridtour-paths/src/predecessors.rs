//! Predecessor maps and path reconstruction.

use std::collections::HashMap;

use gridtour_core::Coord;

/// Maps each discovered coordinate to the coordinate it was reached from.
///
/// The origin maps to itself and terminates reconstruction. One map
/// belongs to exactly one search or tour leg.
#[derive(Debug, Clone, Default)]
pub struct PredecessorMap {
    prev: HashMap<Coord, Coord>,
}

impl PredecessorMap {
    /// A map containing only `origin`.
    pub fn rooted_at(origin: Coord) -> Self {
        let mut prev = HashMap::new();
        prev.insert(origin, origin);
        Self { prev }
    }

    /// Whether `c` has been discovered.
    #[inline]
    pub fn contains(&self, c: Coord) -> bool {
        self.prev.contains_key(&c)
    }

    /// Record that `c` was reached from `from`, replacing any earlier entry.
    #[inline]
    pub fn insert(&mut self, c: Coord, from: Coord) {
        self.prev.insert(c, from);
    }

    /// The coordinate `c` was reached from.
    #[inline]
    pub fn get(&self, c: Coord) -> Option<Coord> {
        self.prev.get(&c).copied()
    }

    /// Number of discovered coordinates, origin included.
    pub fn len(&self) -> usize {
        self.prev.len()
    }

    pub fn is_empty(&self) -> bool {
        self.prev.is_empty()
    }

    /// Path from the origin to `goal`, both endpoints included.
    ///
    /// Returns `None` if `goal` was never discovered or its chain does not
    /// lead back to a self-mapped origin.
    pub fn path_to(&self, goal: Coord) -> Option<Vec<Coord>> {
        let mut path = Vec::new();
        let mut cur = goal;
        loop {
            path.push(cur);
            let prev = self.get(cur)?;
            if prev == cur {
                break;
            }
            // A chain longer than the map has a cycle.
            if path.len() > self.prev.len() {
                return None;
            }
            cur = prev;
        }
        path.reverse();
        Some(path)
    }
}
