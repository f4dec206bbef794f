//! Ownership grid for the true board: which ship, if any, owns each cell.

use alloc::vec;
use alloc::vec::Vec;
use core::fmt;

use crate::common::{BoardError, Coord, ShipId};
use crate::shape::Shape;

/// Count of empty and occupied cells. `empty + occupied == rows * cols`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub struct BoardStats {
    pub empty: usize,
    pub occupied: usize,
}

/// One ship instance on the grid.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlacedShip {
    pub id: ShipId,
    pub cells: Vec<Coord>,
}

/// Row-major `rows x cols` ownership grid.
#[derive(Clone, PartialEq, Eq)]
pub struct Grid {
    rows: usize,
    cols: usize,
    // index into `ships`
    cells: Vec<Option<usize>>,
    ships: Vec<PlacedShip>,
}

impl Grid {
    /// Create an all-empty grid.
    pub fn new(rows: usize, cols: usize) -> Self {
        Grid {
            rows,
            cols,
            cells: vec![None; rows * cols],
            ships: Vec::new(),
        }
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    pub fn contains(&self, x: usize, y: usize) -> bool {
        x < self.cols && y < self.rows
    }

    pub(crate) fn check_bounds(&self, x: usize, y: usize) -> Result<(), BoardError> {
        if self.contains(x, y) {
            Ok(())
        } else {
            Err(BoardError::OutOfRange {
                x,
                y,
                cols: self.cols,
                rows: self.rows,
            })
        }
    }

    #[inline]
    fn index(&self, x: usize, y: usize) -> usize {
        y * self.cols + x
    }

    /// Ship id at `(x, y)`, or `None` for water.
    pub fn tile(&self, x: usize, y: usize) -> Result<Option<ShipId>, BoardError> {
        self.check_bounds(x, y)?;
        Ok(self.cells[self.index(x, y)].map(|i| self.ships[i].id))
    }

    /// Index into [`Grid::placed_ships`] of the instance covering `(x, y)`.
    pub fn instance_at(&self, x: usize, y: usize) -> Result<Option<usize>, BoardError> {
        self.check_bounds(x, y)?;
        Ok(self.cells[self.index(x, y)])
    }

    pub fn placed_ships(&self) -> &[PlacedShip] {
        &self.ships
    }

    /// Full ownership snapshot, indexed `[y][x]`.
    pub fn snapshot(&self) -> Vec<Vec<Option<ShipId>>> {
        (0..self.rows)
            .map(|y| {
                (0..self.cols)
                    .map(|x| self.cells[self.index(x, y)].map(|i| self.ships[i].id))
                    .collect()
            })
            .collect()
    }

    /// Numeric snapshot, indexed `[y][x]`: `0` is water, otherwise the ship id.
    pub fn codes(&self) -> Vec<Vec<u8>> {
        self.snapshot()
            .into_iter()
            .map(|row| row.into_iter().map(|c| c.map_or(0, ShipId::get)).collect())
            .collect()
    }

    pub fn stats(&self) -> BoardStats {
        let occupied = self.cells.iter().filter(|c| c.is_some()).count();
        BoardStats {
            empty: self.cells.len() - occupied,
            occupied,
        }
    }

    /// Clear every cell back to water.
    pub fn reset(&mut self) {
        self.cells.iter_mut().for_each(|c| *c = None);
        self.ships.clear();
    }

    /// In-bounds orthogonal neighbours of `(x, y)`: left, right, up, down.
    pub fn neighbours(&self, x: usize, y: usize) -> impl Iterator<Item = Coord> {
        neighbours(x, y, self.cols, self.rows)
    }

    /// Why `cells` cannot be added as a new ship, if anything.
    ///
    /// The cells must be distinct and form one orthogonally connected piece.
    pub fn check_placement(&self, cells: &[Coord]) -> Result<(), BoardError> {
        if cells.iter().any(|&(x, y)| !self.contains(x, y)) {
            return Err(BoardError::ShipOutOfBounds);
        }
        let footprint = Shape::from_cells(cells)?;
        if footprint.len() != cells.len() {
            // duplicates collapse in the footprint
            return Err(BoardError::InvalidShape);
        }
        if cells
            .iter()
            .any(|&(x, y)| self.cells[self.index(x, y)].is_some())
        {
            return Err(BoardError::ShipOverlaps);
        }
        // The new cells are all empty, so any occupied neighbour is another ship.
        let touches = cells.iter().any(|&(x, y)| {
            self.neighbours(x, y)
                .any(|(nx, ny)| self.cells[self.index(nx, ny)].is_some())
        });
        if touches {
            return Err(BoardError::ShipTouches);
        }
        Ok(())
    }

    /// Add a ship instance covering `cells`. Returns its instance index.
    ///
    /// Rejected cells leave the grid unchanged; see [`Grid::check_placement`].
    pub fn insert_ship(&mut self, id: ShipId, cells: Vec<Coord>) -> Result<usize, BoardError> {
        self.check_placement(&cells)?;
        let instance = self.ships.len();
        for &(x, y) in &cells {
            let idx = self.index(x, y);
            self.cells[idx] = Some(instance);
        }
        self.ships.push(PlacedShip { id, cells });
        Ok(instance)
    }
}

pub(crate) fn neighbours(x: usize, y: usize, cols: usize, rows: usize) -> impl Iterator<Item = Coord> {
    let left = x.checked_sub(1).map(|nx| (nx, y));
    let right = (x + 1 < cols).then(|| (x + 1, y));
    let up = y.checked_sub(1).map(|ny| (x, ny));
    let down = (y + 1 < rows).then(|| (x, y + 1));
    [left, right, up, down].into_iter().flatten()
}

impl fmt::Debug for Grid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Grid<{}x{}>:", self.cols, self.rows)?;
        for row in self.codes() {
            for code in row {
                write!(f, "{} ", code)?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
