//! The [`Grid`] type — the set of traversable cells of a maze.
//!
//! Walls are not stored: a coordinate is open iff it is a member of the
//! grid. The grid is built once by whoever reads the maze and is only read
//! during a search.

use std::collections::HashSet;
use std::collections::hash_set;

use crate::geom::{Coord, Dir};

/// Set of open (non-wall) coordinates.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct Grid {
    cells: HashSet<Coord>,
}

impl Grid {
    /// Create an empty grid (every cell is a wall).
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a grid from any collection of open coordinates. Duplicates are
    /// collapsed.
    pub fn from_cells(cells: impl IntoIterator<Item = Coord>) -> Self {
        cells.into_iter().collect()
    }

    /// Build a `rows` × `cols` grid, keeping the coordinates for which
    /// `open` returns `true`.
    pub fn from_fn(rows: i32, cols: i32, mut open: impl FnMut(Coord) -> bool) -> Self {
        let mut cells = HashSet::new();
        for row in 0..rows.max(0) {
            for col in 0..cols.max(0) {
                let c = Coord::new(row, col);
                if open(c) {
                    cells.insert(c);
                }
            }
        }
        Self { cells }
    }

    /// Whether `c` is an open cell.
    #[inline]
    pub fn contains(&self, c: Coord) -> bool {
        self.cells.contains(&c)
    }

    /// Number of open cells.
    #[inline]
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    /// Whether there are no open cells at all.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// Mark `c` open. Returns `false` if it already was.
    pub fn insert(&mut self, c: Coord) -> bool {
        self.cells.insert(c)
    }

    /// Turn `c` into a wall. Returns `false` if it already was one.
    pub fn remove(&mut self, c: Coord) -> bool {
        self.cells.remove(&c)
    }

    /// Iterate over the open cells in arbitrary order.
    pub fn iter(&self) -> hash_set::Iter<'_, Coord> {
        self.cells.iter()
    }

    /// Open cells sorted row-major.
    pub fn sorted(&self) -> Vec<Coord> {
        let mut v: Vec<Coord> = self.cells.iter().copied().collect();
        v.sort_unstable();
        v
    }

    /// Open axis-aligned neighbours of `c`, in [`Dir::ALL`] order. Moves
    /// that would leave the `i32` range are dropped.
    pub fn neighbors(&self, c: Coord) -> impl Iterator<Item = Coord> + '_ {
        Dir::ALL
            .into_iter()
            .filter_map(move |d| c.checked_step(d))
            .filter(|n| self.contains(*n))
    }
}

impl FromIterator<Coord> for Grid {
    fn from_iter<I: IntoIterator<Item = Coord>>(iter: I) -> Self {
        Self {
            cells: iter.into_iter().collect(),
        }
    }
}

impl Extend<Coord> for Grid {
    fn extend<I: IntoIterator<Item = Coord>>(&mut self, iter: I) {
        self.cells.extend(iter);
    }
}

impl<'a> IntoIterator for &'a Grid {
    type Item = &'a Coord;
    type IntoIter = hash_set::Iter<'a, Coord>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}


#[cfg(all(test, feature = "serde"))]
mod serde_tests {
    use super::*;

    #[test]
    fn grid_round_trip() {
        let g = Grid::from_fn(3, 4, |c| (c.row + c.col) % 3 != 0);
        let json = serde_json::to_string(&g).unwrap();
        let back: Grid = serde_json::from_str(&json).unwrap();
        assert_eq!(g, back);
    }

    #[test]
    fn coord_round_trip() {
        let c = Coord::new(3, 7);
        let json = serde_json::to_string(&c).unwrap();
        assert_eq!(json, r#"{"row":3,"col":7}"#);
        let back: Coord = serde_json::from_str(&json).unwrap();
        assert_eq!(c, back);
    }
}
