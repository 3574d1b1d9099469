//! Dense 2D grid of cells.

use itertools::Itertools;
use std::fmt;
use std::ops::{Index, IndexMut};

use crate::cell::Cell;
use crate::error::{GridResult, LifeError};

/// 2D grid of cells stored contiguously in row-major order.
///
/// The minimum coordinate of the grid is always 0 along both axes; the cell
/// at `(x, y)` lives at flat index `y * width + x`. The buffer length always
/// equals `width * height`. A `Grid` owns its buffer exclusively; cloning it
/// deep-copies every cell.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct Grid {
    width: usize,
    height: usize,
    cells: Box<[Cell]>,
}

impl Grid {
    /// Creates an all-dead grid with the given dimensions.
    ///
    /// # Panics
    ///
    /// This function panics if `width * height` overflows `usize`.
    pub fn new(width: usize, height: usize) -> Self {
        let len = width
            .checked_mul(height)
            .expect("Cannot make a Grid with that many cells");
        Self {
            width,
            height,
            cells: vec![Cell::Dead; len].into_boxed_slice(),
        }
    }

    /// Creates an all-dead square grid.
    pub fn square(size: usize) -> Self {
        Self::new(size, size)
    }

    /// Creates a grid from a flat row-major cell buffer.
    ///
    /// # Panics
    ///
    /// This function panics if the length of `cells` does not equal `width *
    /// height`.
    pub fn from_flat_slice(width: usize, height: usize, cells: impl Into<Box<[Cell]>>) -> Self {
        let cells = cells.into();
        assert_eq!(
            width.checked_mul(height),
            Some(cells.len()),
            "Wrong cell count for Grid",
        );
        Self {
            width,
            height,
            cells,
        }
    }

    /// Returns the flat row-major cell buffer behind the grid.
    #[inline]
    pub fn into_flat_slice(self) -> Box<[Cell]> {
        self.cells
    }

    /// Returns the width of the grid.
    #[inline]
    pub fn width(&self) -> usize {
        self.width
    }
    /// Returns the height of the grid.
    #[inline]
    pub fn height(&self) -> usize {
        self.height
    }
    /// Returns the total number of cells in the grid.
    #[inline]
    pub fn total_cells(&self) -> usize {
        self.cells.len()
    }
    /// Returns the number of live cells in the grid.
    pub fn alive_cells(&self) -> usize {
        self.cells.iter().filter(|cell| cell.is_alive()).count()
    }
    /// Returns the number of dead cells in the grid.
    pub fn dead_cells(&self) -> usize {
        self.total_cells() - self.alive_cells()
    }

    /// Returns the index into the cell buffer corresponding to a position,
    /// or an error if the position is outside the grid.
    #[inline]
    fn flatten_idx(&self, x: usize, y: usize) -> GridResult<usize> {
        if x < self.width && y < self.height {
            Ok(y * self.width + x)
        } else {
            Err(LifeError::OutOfRange {
                x,
                y,
                width: self.width,
                height: self.height,
            })
        }
    }

    /// Returns the cell at `(x, y)`, or [`LifeError::OutOfRange`] if the
    /// position is outside the grid.
    #[inline]
    pub fn get(&self, x: usize, y: usize) -> GridResult<Cell> {
        Ok(self.cells[self.flatten_idx(x, y)?])
    }
    /// Writes the cell at `(x, y)`, or returns [`LifeError::OutOfRange`] if
    /// the position is outside the grid (leaving the grid untouched).
    #[inline]
    pub fn set(&mut self, x: usize, y: usize, cell: Cell) -> GridResult<()> {
        let idx = self.flatten_idx(x, y)?;
        self.cells[idx] = cell;
        Ok(())
    }

    /// Resizes the grid to a square, resetting every cell to dead.
    pub fn resize_square(&mut self, size: usize) {
        self.resize(size, size);
    }
    /// Resizes the grid, resetting every cell to dead. This is not a
    /// content-preserving resize; prior contents are discarded.
    pub fn resize(&mut self, width: usize, height: usize) {
        *self = Self::new(width, height);
    }

    /// Returns a new grid containing the sub-rectangle with corners `(x0,
    /// y0)` inclusive and `(x1, y1)` exclusive, so the result is `(x1 - x0)`
    /// by `(y1 - y0)`.
    ///
    /// A requested region that extends past this grid's bounds is clamped to
    /// the valid range, with the out-of-range portion dead in the result.
    /// Returns [`LifeError::InvalidDimension`] if the corners are inverted,
    /// or [`LifeError::OutOfRange`] if a non-empty requested region lies
    /// entirely outside this grid.
    pub fn crop(&self, x0: usize, y0: usize, x1: usize, y1: usize) -> GridResult<Self> {
        if x1 < x0 || y1 < y0 {
            return Err(LifeError::InvalidDimension(format!(
                "inverted crop corners ({}, {})..({}, {})",
                x0, y0, x1, y1,
            )));
        }
        let (width, height) = (x1 - x0, y1 - y0);
        if width > 0 && height > 0 && (x0 >= self.width || y0 >= self.height) {
            return Err(LifeError::OutOfRange {
                x: x0,
                y: y0,
                width: self.width,
                height: self.height,
            });
        }
        let mut ret = Self::new(width, height);
        for sy in y0..y1.min(self.height) {
            for sx in x0..x1.min(self.width) {
                ret[(sx - x0, sy - y0)] = self[(sx, sy)];
            }
        }
        Ok(ret)
    }

    /// Overlays `other` onto this grid with its top-left corner placed at
    /// `(x0, y0)`. Cells of `other` that fall outside this grid are silently
    /// clipped; this never fails.
    ///
    /// When `alive_only` is `true`, only live cells of `other` are written,
    /// so dead cells of `other` leave the destination untouched. This allows
    /// several creatures to be composed additively onto one canvas. When
    /// `alive_only` is `false`, every placed cell overwrites the destination.
    pub fn merge(&mut self, other: &Self, x0: isize, y0: isize, alive_only: bool) {
        for ((x, y), &cell) in other.iter_enumerated() {
            if alive_only && !cell.is_alive() {
                continue;
            }
            let (dest_x, dest_y) = (x0 + x as isize, y0 + y as isize);
            if dest_x < 0 || dest_y < 0 {
                continue;
            }
            // In-bounds writes only; everything else is clipped.
            let _ = self.set(dest_x as usize, dest_y as usize, cell);
        }
    }

    /// Returns a new grid rotated by `rotation` clockwise quarter-turns.
    ///
    /// The rotation is interpreted modulo 4, so negative values wrap to the
    /// equivalent positive rotation. Odd rotations swap width and height in
    /// the result.
    #[must_use = "This method returns a new value instead of mutating its input"]
    pub fn rotate(&self, rotation: i64) -> Self {
        match rotation.rem_euclid(4) {
            0 => self.clone(),
            // 90 degrees clockwise: (x, y) maps to (height - 1 - y, x).
            1 => {
                let mut ret = Self::new(self.height, self.width);
                for ((x, y), &cell) in self.iter_enumerated() {
                    ret[(self.height - 1 - y, x)] = cell;
                }
                ret
            }
            // 180 degrees is a reversal of the row-major buffer.
            2 => Self::from_flat_slice(
                self.width,
                self.height,
                self.cells.iter().rev().copied().collect_vec(),
            ),
            // 270 degrees clockwise: (x, y) maps to (y, width - 1 - x).
            3 => {
                let mut ret = Self::new(self.height, self.width);
                for ((x, y), &cell) in self.iter_enumerated() {
                    ret[(y, self.width - 1 - x)] = cell;
                }
                ret
            }
            _ => unreachable!("rem_euclid(4) out of range"),
        }
    }

    /// Returns an iterator over all the cells in the grid, enumerated by
    /// their positions in row-major order.
    #[inline]
    pub fn iter_enumerated(&self) -> impl '_ + Iterator<Item = ((usize, usize), &Cell)> {
        let width = self.width;
        self.cells
            .iter()
            .enumerate()
            .map(move |(idx, cell)| ((idx % width, idx / width), cell))
    }
}

impl Index<(usize, usize)> for Grid {
    type Output = Cell;

    /// # Panics
    ///
    /// Indexing panics if the position is outside the grid; use
    /// [`Grid::get()`] for a fallible lookup.
    #[inline]
    fn index(&self, (x, y): (usize, usize)) -> &Cell {
        let idx = self
            .flatten_idx(x, y)
            .unwrap_or_else(|e| panic!("{}", e));
        &self.cells[idx]
    }
}
impl IndexMut<(usize, usize)> for Grid {
    #[inline]
    fn index_mut(&mut self, (x, y): (usize, usize)) -> &mut Cell {
        let idx = self
            .flatten_idx(x, y)
            .unwrap_or_else(|e| panic!("{}", e));
        &mut self.cells[idx]
    }
}

impl fmt::Display for Grid {
    /// Renders the grid bordered by a box of `+`, `-`, and `|` characters,
    /// with one row of cell characters per line.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let border: String = "-".repeat(self.width);
        writeln!(f, "+{}+", border)?;
        for y in 0..self.height {
            write!(f, "|")?;
            for x in 0..self.width {
                write!(f, "{}", self[(x, y)])?;
            }
            writeln!(f, "|")?;
        }
        writeln!(f, "+{}+", border)
    }
}
