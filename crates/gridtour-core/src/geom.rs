//! Geometry primitives: [`Coord`] and [`Dir`].
//!
//! Coordinates are `(row, col)` pairs. Rows grow downward and columns grow
//! to the right, matching the way maze text is laid out.

use std::fmt;
use std::ops::{Add, Sub};

// ---------------------------------------------------------------------------
// Coord
// ---------------------------------------------------------------------------

/// A 2D integer grid coordinate.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Coord {
    pub row: i32,
    pub col: i32,
}

impl Coord {
    /// Origin (0, 0).
    pub const ZERO: Self = Self { row: 0, col: 0 };

    /// Create a new coordinate.
    #[inline]
    pub const fn new(row: i32, col: i32) -> Self {
        Self { row, col }
    }

    /// Return a coordinate shifted by (drow, dcol).
    #[inline]
    pub const fn shift(self, drow: i32, dcol: i32) -> Self {
        Self {
            row: self.row + drow,
            col: self.col + dcol,
        }
    }

    /// The coordinate one step away in direction `dir`.
    #[inline]
    pub const fn step(self, dir: Dir) -> Self {
        let (dr, dc) = dir.delta();
        self.shift(dr, dc)
    }

    /// Like [`Coord::step`], but `None` when the move leaves the `i32`
    /// range.
    #[inline]
    pub const fn checked_step(self, dir: Dir) -> Option<Self> {
        let (dr, dc) = dir.delta();
        match (self.row.checked_add(dr), self.col.checked_add(dc)) {
            (Some(row), Some(col)) => Some(Self { row, col }),
            _ => None,
        }
    }

    /// The four axis-aligned neighbours, in [`Dir::ALL`] order.
    ///
    /// Unchecked: `self` must not sit on the edge of the `i32` range.
    #[inline]
    pub fn neighbors_4(self) -> [Coord; 4] {
        Dir::ALL.map(|d| self.step(d))
    }

    /// Manhattan (L1) distance to `other`.
    #[inline]
    pub const fn manhattan(self, other: Coord) -> i32 {
        (self.row - other.row).abs() + (self.col - other.col).abs()
    }

    /// Whether `other` is exactly one axis-aligned step away.
    #[inline]
    pub const fn is_adjacent(self, other: Coord) -> bool {
        self.manhattan(other) == 1
    }
}

// --- trait impls for Coord ---

impl PartialOrd for Coord {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Coord {
    /// Row-major ordering.
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        self.row.cmp(&other.row).then(self.col.cmp(&other.col))
    }
}

impl fmt::Display for Coord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

impl From<(i32, i32)> for Coord {
    fn from((row, col): (i32, i32)) -> Self {
        Self::new(row, col)
    }
}

impl From<Coord> for (i32, i32) {
    fn from(c: Coord) -> Self {
        (c.row, c.col)
    }
}

impl Add for Coord {
    type Output = Self;
    #[inline]
    fn add(self, rhs: Self) -> Self {
        Self::new(self.row + rhs.row, self.col + rhs.col)
    }
}

impl Sub for Coord {
    type Output = Self;
    #[inline]
    fn sub(self, rhs: Self) -> Self {
        Self::new(self.row - rhs.row, self.col - rhs.col)
    }
}

// ---------------------------------------------------------------------------
// Dir
// ---------------------------------------------------------------------------

/// One of the four unit moves allowed on the grid.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Dir {
    Down,
    Right,
    Up,
    Left,
}

impl Dir {
    /// Expansion order used by every search in the workspace.
    pub const ALL: [Dir; 4] = [Dir::Down, Dir::Right, Dir::Up, Dir::Left];

    /// `(drow, dcol)` for this move.
    #[inline]
    pub const fn delta(self) -> (i32, i32) {
        match self {
            Dir::Down => (1, 0),
            Dir::Right => (0, 1),
            Dir::Up => (-1, 0),
            Dir::Left => (0, -1),
        }
    }

    /// The opposite move.
    #[inline]
    pub const fn reverse(self) -> Self {
        match self {
            Dir::Down => Dir::Up,
            Dir::Right => Dir::Left,
            Dir::Up => Dir::Down,
            Dir::Left => Dir::Right,
        }
    }

    /// The move that takes `from` to the adjacent `to`, if any.
    pub fn between(from: Coord, to: Coord) -> Option<Self> {
        Dir::ALL.into_iter().find(|&d| from.step(d) == to)
    }
}
