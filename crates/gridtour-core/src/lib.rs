//! **gridtour-core** — grid model for multi-goal maze tours.
//!
//! This crate provides the foundational types shared by the search crates:
//! [`Coord`] and [`Dir`] geometry and the [`Grid`] set of open cells.

pub mod geom;
pub mod grid;

pub use geom::{Coord, Dir};
pub use grid::Grid;
