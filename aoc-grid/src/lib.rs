//! Grid and 2D geometry primitives for Advent of Code puzzles
//!
//! Most puzzle maps are rectangles of characters. This crate provides the
//! shared vocabulary for them: [`Point`] coordinates and [`Direction`]s, and
//! a dense row-major [`Grid`] parsed straight from puzzle text. Search code
//! stays elsewhere; a grid is just the substrate a puzzle builds its graph
//! over.
//!
//! # Quick Example
//!
//! ```
//! use aoc_grid::{Direction, Grid, Point};
//!
//! let grid: Grid<char> = ".#.\n...".parse().unwrap();
//! let wall = grid.position_of(&'#').unwrap();
//! assert_eq!(wall, Point::new(1, 0));
//! assert_eq!(grid[wall + Direction::Down.offset()], '.');
//! assert_eq!(grid.orthogonal_neighbors(Point::new(0, 0)).len(), 2);
//! ```

mod error;
mod grid;
mod point;

pub use error::GridError;
pub use grid::Grid;
pub use point::{Direction, Point};
