//! Dense 2D grid over a rectangular floor area

use crate::core::types::Point;

/// Generic row-major 2D grid whose cells stretch to fill a `width × height` area
///
/// Cells are addressed by `(col, row)`; column maps to x, row maps to y.
#[derive(Debug, Clone, PartialEq)]
pub struct Grid<T: Clone + Default> {
    pub cols: usize,
    pub rows: usize,
    pub cell_width: f64,
    pub cell_height: f64,
    data: Vec<T>,
}

impl<T: Clone + Default> Grid<T> {
    /// Create a grid of `cols × rows` cells spanning `[0, width] × [0, height]`
    pub fn new(cols: usize, rows: usize, width: f64, height: f64) -> Self {
        Self {
            cols,
            rows,
            cell_width: if cols > 0 { width / cols as f64 } else { 0.0 },
            cell_height: if rows > 0 { height / rows as f64 } else { 0.0 },
            data: vec![T::default(); cols * rows],
        }
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.data.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    #[inline]
    pub fn get(&self, col: usize, row: usize) -> Option<&T> {
        if col < self.cols && row < self.rows {
            Some(&self.data[row * self.cols + col])
        } else {
            None
        }
    }

    #[inline]
    pub fn set(&mut self, col: usize, row: usize, value: T) {
        if col < self.cols && row < self.rows {
            self.data[row * self.cols + col] = value;
        }
    }

    /// Cell center in floor coordinates
    pub fn cell_center(&self, col: usize, row: usize) -> Point {
        Point::new(
            (col as f64 + 0.5) * self.cell_width,
            (row as f64 + 0.5) * self.cell_height,
        )
    }

    /// Map fractional grid coordinates (in cells) back to floor coordinates
    pub fn grid_to_world(&self, col: f64, row: f64) -> Point {
        Point::new(col * self.cell_width, row * self.cell_height)
    }

    /// In-bounds 4-neighbours of a cell (no diagonals)
    pub fn neighbors4(&self, col: usize, row: usize) -> impl Iterator<Item = (usize, usize)> + '_ {
        const OFFSETS: [(i64, i64); 4] = [(1, 0), (-1, 0), (0, 1), (0, -1)];
        OFFSETS.iter().filter_map(move |(dc, dr)| {
            let nc = col as i64 + dc;
            let nr = row as i64 + dr;
            if nc >= 0 && nr >= 0 && (nc as usize) < self.cols && (nr as usize) < self.rows {
                Some((nc as usize, nr as usize))
            } else {
                None
            }
        })
    }

    /// Iterate all cells as `(col, row, value)` in row-major order
    pub fn cells(&self) -> impl Iterator<Item = (usize, usize, &T)> + '_ {
        self.data
            .iter()
            .enumerate()
            .map(move |(i, value)| (i % self.cols, i / self.cols, value))
    }

    /// Number of cells whose value satisfies `pred`
    pub fn count(&self, pred: impl Fn(&T) -> bool) -> usize {
        self.data.iter().filter(|v| pred(v)).count()
    }
}
