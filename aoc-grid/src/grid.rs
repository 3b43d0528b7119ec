//! Dense rectangular grid storage addressed by [`Point`].

use std::ops::{Index, IndexMut};
use std::str::FromStr;

use itertools::Itertools;

use crate::error::GridError;
use crate::point::Point;

/// A rectangular grid stored row-major, addressed by [`Point`] with `y`
/// growing downward.
///
/// # Example
///
/// ```
/// use aoc_grid::{Grid, Point};
///
/// let grid: Grid<char> = "ab\ncd".parse().unwrap();
/// assert_eq!(grid.width(), 2);
/// assert_eq!(grid[Point::new(1, 1)], 'd');
/// assert_eq!(grid.position_of(&'c'), Some(Point::new(0, 1)));
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid<T> {
    cells: Vec<T>,
    width: usize,
    height: usize,
}

impl<T> Grid<T> {
    /// A grid of the given size with every cell set to `fill`.
    pub fn new(width: usize, height: usize, fill: T) -> Self
    where
        T: Clone,
    {
        Self {
            cells: vec![fill; width * height],
            width,
            height,
        }
    }

    /// Builds a grid from rows, rejecting empty or ragged input.
    pub fn from_rows(rows: Vec<Vec<T>>) -> Result<Self, GridError> {
        let height = rows.len();
        let width = rows.first().map_or(0, Vec::len);
        if width == 0 {
            return Err(GridError::Empty);
        }
        let mut cells = Vec::with_capacity(width * height);
        for (row, values) in rows.into_iter().enumerate() {
            if values.len() != width {
                return Err(GridError::RaggedRows {
                    row,
                    expected: width,
                    actual: values.len(),
                });
            }
            cells.extend(values);
        }
        Ok(Self {
            cells,
            width,
            height,
        })
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    pub fn in_bounds(&self, point: Point) -> bool {
        point.x >= 0
            && point.y >= 0
            && (point.x as usize) < self.width
            && (point.y as usize) < self.height
    }

    fn offset(&self, point: Point) -> usize {
        point.y as usize * self.width + point.x as usize
    }

    /// The cell at `point`, or `None` outside the grid.
    pub fn get(&self, point: Point) -> Option<&T> {
        if self.in_bounds(point) {
            Some(&self.cells[self.offset(point)])
        } else {
            None
        }
    }

    pub fn get_mut(&mut self, point: Point) -> Option<&mut T> {
        if self.in_bounds(point) {
            let index = self.offset(point);
            Some(&mut self.cells[index])
        } else {
            None
        }
    }

    /// Every position, row by row.
    pub fn positions(&self) -> impl Iterator<Item = Point> {
        let (width, height) = (self.width as i64, self.height as i64);
        (0..height)
            .cartesian_product(0..width)
            .map(|(y, x)| Point::new(x, y))
    }

    /// Every position with its cell, row by row.
    pub fn iter(&self) -> impl Iterator<Item = (Point, &T)> {
        self.positions().zip(self.cells.iter())
    }

    /// Position of the first cell equal to `value`, scanning row by row.
    pub fn position_of(&self, value: &T) -> Option<Point>
    where
        T: PartialEq,
    {
        self.iter()
            .find(|(_, cell)| *cell == value)
            .map(|(point, _)| point)
    }

    /// Edge-adjacent positions of `point` that fall inside the grid.
    pub fn orthogonal_neighbors(&self, point: Point) -> Vec<Point> {
        point
            .orthogonal_neighbors()
            .into_iter()
            .filter(|&p| self.in_bounds(p))
            .collect()
    }
}

impl<T> Index<Point> for Grid<T> {
    type Output = T;

    fn index(&self, point: Point) -> &T {
        assert!(
            self.in_bounds(point),
            "point ({}, {}) out of bounds for {}x{} grid",
            point.x,
            point.y,
            self.width,
            self.height
        );
        &self.cells[self.offset(point)]
    }
}

impl<T> IndexMut<Point> for Grid<T> {
    fn index_mut(&mut self, point: Point) -> &mut T {
        assert!(
            self.in_bounds(point),
            "point ({}, {}) out of bounds for {}x{} grid",
            point.x,
            point.y,
            self.width,
            self.height
        );
        let index = self.offset(point);
        &mut self.cells[index]
    }
}

impl FromStr for Grid<char> {
    type Err = GridError;

    /// Parses newline-separated rows of single-character cells.
    fn from_str(s: &str) -> Result<Self, GridError> {
        Self::from_rows(s.lines().map(|line| line.chars().collect()).collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_text_into_cells() {
        let grid: Grid<char> = "ab\ncd\nef".parse().unwrap();
        assert_eq!(grid.width(), 2);
        assert_eq!(grid.height(), 3);
        assert_eq!(grid[Point::new(0, 0)], 'a');
        assert_eq!(grid[Point::new(1, 2)], 'f');
    }

    #[test]
    fn rejects_ragged_rows() {
        let err = "ab\ncde".parse::<Grid<char>>().unwrap_err();
        assert_eq!(
            err,
            GridError::RaggedRows {
                row: 1,
                expected: 2,
                actual: 3
            }
        );
    }

    #[test]
    fn rejects_empty_input() {
        assert_eq!("".parse::<Grid<char>>().unwrap_err(), GridError::Empty);
    }

    #[test]
    fn get_is_bounds_checked() {
        let grid = Grid::new(2, 2, 0u8);
        assert_eq!(grid.get(Point::new(1, 1)), Some(&0));
        assert_eq!(grid.get(Point::new(2, 0)), None);
        assert_eq!(grid.get(Point::new(-1, 0)), None);
    }

    #[test]
    fn get_mut_writes_through() {
        let mut grid = Grid::new(2, 2, 0u8);
        *grid.get_mut(Point::new(1, 0)).unwrap() = 9;
        assert_eq!(grid[Point::new(1, 0)], 9);
        grid[Point::new(0, 1)] = 7;
        assert_eq!(grid[Point::new(0, 1)], 7);
    }

    #[test]
    #[should_panic(expected = "out of bounds")]
    fn indexing_outside_panics() {
        let grid = Grid::new(2, 2, 0u8);
        let _ = grid[Point::new(5, 5)];
    }

    #[test]
    fn positions_cover_the_grid_row_major() {
        let grid = Grid::new(3, 2, ());
        let positions: Vec<Point> = grid.positions().collect();
        assert_eq!(positions.len(), 6);
        assert_eq!(positions[0], Point::new(0, 0));
        assert_eq!(positions[1], Point::new(1, 0));
        assert_eq!(positions[5], Point::new(2, 1));
    }

    #[test]
    fn neighbors_clip_at_borders() {
        let grid = Grid::new(3, 3, ());
        assert_eq!(grid.orthogonal_neighbors(Point::new(0, 0)).len(), 2);
        assert_eq!(grid.orthogonal_neighbors(Point::new(1, 0)).len(), 3);
        assert_eq!(grid.orthogonal_neighbors(Point::new(1, 1)).len(), 4);
    }

    #[test]
    fn position_of_scans_row_major() {
        let grid: Grid<char> = "ab\nba".parse().unwrap();
        assert_eq!(grid.position_of(&'b'), Some(Point::new(1, 0)));
        assert_eq!(grid.position_of(&'z'), None);
    }
}
