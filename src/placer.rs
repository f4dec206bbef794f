//! Randomised ship placement with bounded local retries and global restarts.

use alloc::vec::Vec;
use log::{debug, trace};
use rand::Rng;

use crate::catalog::ShipCatalog;
use crate::common::{Coord, PlacementError, ShipId};
use crate::config::PlacementConfig;
use crate::grid::Grid;
use crate::shape::Shape;

/// Source of randomness: choose an index in `0..n`.
///
/// Implemented for every `rand::Rng`, so a seeded `SmallRng` (or a
/// `&mut` to one) can be handed to the placer and the planner.
pub trait Picker {
    /// Uniform index in `0..n`. `n` is never zero.
    fn pick(&mut self, n: usize) -> usize;
}

impl<R: Rng + ?Sized> Picker for R {
    fn pick(&mut self, n: usize) -> usize {
        self.random_range(0..n)
    }
}

/// Places every ship of a catalog on a fresh grid.
pub struct GridPlacer<P> {
    picker: P,
    config: PlacementConfig,
}

struct Pending {
    id: ShipId,
    orientations: Vec<Shape>,
}

impl<P: Picker> GridPlacer<P> {
    pub fn new(picker: P) -> Self {
        Self::with_config(picker, PlacementConfig::default())
    }

    pub fn with_config(picker: P, config: PlacementConfig) -> Self {
        Self { picker, config }
    }

    /// Produce a fully populated `rows x cols` grid or fail.
    ///
    /// Ships go down largest first, then by ascending id. Each one gets
    /// `attempts_per_ship` random (orientation, anchor) samples; running out
    /// throws the whole board away and starts over, up to `restarts` times.
    pub fn place(
        &mut self,
        rows: usize,
        cols: usize,
        catalog: &ShipCatalog,
    ) -> Result<Grid, PlacementError> {
        let mut queue = Vec::new();
        for (id, entry) in catalog.iter() {
            if entry.count == 0 {
                continue;
            }
            let orientations: Vec<Shape> = entry
                .shape
                .orientations()
                .into_iter()
                .filter(|o| o.width() <= cols && o.height() <= rows)
                .collect();
            if orientations.is_empty() {
                return Err(PlacementError::DoesNotFit { ship: id });
            }
            for _ in 0..entry.count {
                queue.push(Pending {
                    id,
                    orientations: orientations.clone(),
                });
            }
        }
        // stable: ties keep ascending id order
        queue.sort_by(|a, b| b.orientations[0].len().cmp(&a.orientations[0].len()));

        for restart in 0..=self.config.restarts {
            if let Some(grid) = self.attempt(rows, cols, &queue) {
                debug!(
                    "placed {} ships on {}x{} after {} restarts",
                    queue.len(),
                    cols,
                    rows,
                    restart
                );
                return Ok(grid);
            }
            trace!("placement restart {}", restart + 1);
        }
        debug!(
            "giving up placing {} ships on {}x{}",
            queue.len(),
            cols,
            rows
        );
        Err(PlacementError::Exhausted {
            restarts: self.config.restarts,
        })
    }

    /// Replace `grid` with a new placement of the same dimensions.
    ///
    /// On failure `grid` is left exactly as it was.
    pub fn place_into(&mut self, grid: &mut Grid, catalog: &ShipCatalog) -> Result<(), PlacementError> {
        let placed = self.place(grid.rows(), grid.cols(), catalog)?;
        *grid = placed;
        Ok(())
    }

    fn attempt(&mut self, rows: usize, cols: usize, queue: &[Pending]) -> Option<Grid> {
        let mut grid = Grid::new(rows, cols);
        for ship in queue {
            let cells = self.sample(&grid, ship)?;
            grid.insert_ship(ship.id, cells).ok()?;
        }
        Some(grid)
    }

    fn sample(&mut self, grid: &Grid, ship: &Pending) -> Option<Vec<Coord>> {
        for _ in 0..self.config.attempts_per_ship {
            let shape = &ship.orientations[self.picker.pick(ship.orientations.len())];
            let x = self.picker.pick(grid.cols() - shape.width() + 1);
            let y = self.picker.pick(grid.rows() - shape.height() + 1);
            let cells: Vec<Coord> = shape.project((x, y)).collect();
            if grid.check_placement(&cells).is_ok() {
                return Some(cells);
            }
        }
        None
    }
}
