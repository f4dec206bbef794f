//! Hunt/target attack planner for the opponent's hidden board.
//!
//! Hunt mode fires uniformly at random among the cells still worth firing
//! at. The first hit of a ship opens a *run*; its neighbours are queued and
//! fired in FIFO order, and once the run is a line only the two cells past
//! its ends are queued. On a sink the run is matched to a catalog entry by
//! its length and every cell touching it is marked as water, since ships
//! never touch.

use alloc::collections::{BTreeMap, VecDeque};
use alloc::vec;
use alloc::vec::Vec;
use core::fmt;
use log::{debug, trace, warn};

use crate::catalog::ShipCatalog;
use crate::common::{BoardError, Coord, ShipId, ShotOutcome};
use crate::grid::neighbours;
use crate::placer::Picker;

/// What the planner knows about one opponent cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub enum Knowledge {
    Unknown,
    Hit,
    /// Fired and missed, or deduced to be water.
    Miss,
}

impl Knowledge {
    pub fn symbol(self) -> char {
        match self {
            Knowledge::Unknown => '?',
            Knowledge::Hit => 'H',
            Knowledge::Miss => 'M',
        }
    }
}

impl fmt::Display for Knowledge {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

/// Which targeting phase the next attack comes from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    Hunt,
    Target,
}

/// Cells still eligible for a shot, with O(1) removal and uniform sampling.
#[derive(Debug, Clone)]
struct CandidateSet {
    cols: usize,
    items: Vec<Coord>,
    // position of each cell in `items`
    slots: Vec<Option<usize>>,
}

impl CandidateSet {
    fn full(rows: usize, cols: usize) -> Self {
        let items: Vec<Coord> = (0..rows)
            .flat_map(|y| (0..cols).map(move |x| (x, y)))
            .collect();
        let slots = (0..items.len()).map(Some).collect();
        CandidateSet { cols, items, slots }
    }

    fn len(&self) -> usize {
        self.items.len()
    }

    fn contains(&self, (x, y): Coord) -> bool {
        self.slots[y * self.cols + x].is_some()
    }

    fn remove(&mut self, (x, y): Coord) {
        let Some(pos) = self.slots[y * self.cols + x].take() else {
            return;
        };
        self.items.swap_remove(pos);
        if let Some(&(mx, my)) = self.items.get(pos) {
            self.slots[my * self.cols + mx] = Some(pos);
        }
    }
}

/// Stateful attacker: yields coordinates and learns from their outcomes.
pub struct AttackPlanner<P> {
    rows: usize,
    cols: usize,
    picker: P,
    knowledge: Vec<Knowledge>,
    fired: Vec<bool>,
    remaining: ShipCatalog,
    candidates: CandidateSet,
    pending: VecDeque<Coord>,
    run: Vec<Coord>,
}

impl<P: Picker> AttackPlanner<P> {
    /// Planner for a `rows x cols` board believed to hold `catalog`.
    pub fn new(rows: usize, cols: usize, catalog: ShipCatalog, picker: P) -> Self {
        Self {
            rows,
            cols,
            picker,
            knowledge: vec![Knowledge::Unknown; rows * cols],
            fired: vec![false; rows * cols],
            remaining: catalog,
            candidates: CandidateSet::full(rows, cols),
            pending: VecDeque::new(),
            run: Vec::new(),
        }
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    fn check_bounds(&self, x: usize, y: usize) -> Result<usize, BoardError> {
        if x < self.cols && y < self.rows {
            Ok(y * self.cols + x)
        } else {
            Err(BoardError::OutOfRange {
                x,
                y,
                cols: self.cols,
                rows: self.rows,
            })
        }
    }

    /// Next cell to fire at, as `(x, y)`.
    ///
    /// Queued target cells take precedence over a random hunt shot. Fails
    /// with `NoCandidates` once every cell has been fired at or ruled out.
    pub fn next_attack(&mut self) -> Result<Coord, BoardError> {
        if let Some(cell) = self.pop_pending() {
            trace!("target {:?}", cell);
            return Ok(cell);
        }
        if !self.run.is_empty() {
            // The line heuristic ran dry on a ship that is still afloat
            // (non-straight shapes): try every cell around the run.
            self.pending = self.frontier(&self.run).collect();
            if let Some(cell) = self.pop_pending() {
                trace!("target {:?} around run of {}", cell, self.run.len());
                return Ok(cell);
            }
            warn!("run of {} hits has no unexplored neighbours, dropping it", self.run.len());
            self.run.clear();
        }
        if self.candidates.len() == 0 {
            return Err(BoardError::NoCandidates);
        }
        let cell = self.candidates.items[self.picker.pick(self.candidates.len())];
        trace!("hunt {:?}", cell);
        Ok(cell)
    }

    fn pop_pending(&mut self) -> Option<Coord> {
        while let Some(cell) = self.pending.pop_front() {
            if self.candidates.contains(cell) {
                return Some(cell);
            }
        }
        None
    }

    /// Record the outcome of firing at `(x, y)`.
    ///
    /// Each coordinate may be reported once; a second report fails with
    /// `AlreadyFired`. Invalid reports are rejected before any state changes.
    pub fn register_result(
        &mut self,
        x: usize,
        y: usize,
        is_hit: bool,
        is_sunk: bool,
    ) -> Result<(), BoardError> {
        let idx = self.check_bounds(x, y)?;
        if self.fired[idx] {
            return Err(BoardError::AlreadyFired { x, y });
        }
        if is_sunk && !is_hit {
            return Err(BoardError::SinkWithoutHit { x, y });
        }
        if is_hit && self.knowledge[idx] == Knowledge::Miss {
            return Err(BoardError::ContradictsKnowledge { x, y });
        }
        if is_sunk && self.remaining.total_ships() == 0 {
            return Err(BoardError::NoShipsAfloat);
        }

        self.fired[idx] = true;
        self.candidates.remove((x, y));
        if !is_hit {
            self.knowledge[idx] = Knowledge::Miss;
            return Ok(());
        }

        self.knowledge[idx] = Knowledge::Hit;
        self.run.push((x, y));
        if is_sunk {
            self.resolve_sink();
        } else {
            let next = self.extensions();
            self.pending.extend(next);
        }
        Ok(())
    }

    /// [`AttackPlanner::register_result`] taking a [`ShotOutcome`].
    pub fn register_outcome(&mut self, x: usize, y: usize, outcome: ShotOutcome) -> Result<(), BoardError> {
        self.register_result(x, y, outcome.is_hit(), outcome.is_sunk())
    }

    /// Cells to queue after a non-sinking hit.
    fn extensions(&self) -> Vec<Coord> {
        let newest = self.run[self.run.len() - 1];
        if self.run.len() == 1 {
            return self.frontier(&self.run).collect();
        }
        let (x0, y0) = self.run[0];
        if self.run.iter().all(|&(_, y)| y == y0) {
            let lo = self.run.iter().map(|&(x, _)| x).min().unwrap_or(x0);
            let hi = self.run.iter().map(|&(x, _)| x).max().unwrap_or(x0);
            let ends = [lo.checked_sub(1).map(|x| (x, y0)), Some((hi + 1, y0))];
            self.open_cells(ends.into_iter().flatten())
        } else if self.run.iter().all(|&(x, _)| x == x0) {
            let lo = self.run.iter().map(|&(_, y)| y).min().unwrap_or(y0);
            let hi = self.run.iter().map(|&(_, y)| y).max().unwrap_or(y0);
            let ends = [lo.checked_sub(1).map(|y| (x0, y)), Some((x0, hi + 1))];
            self.open_cells(ends.into_iter().flatten())
        } else {
            self.frontier(core::slice::from_ref(&newest)).collect()
        }
    }

    fn open_cells(&self, cells: impl Iterator<Item = Coord>) -> Vec<Coord> {
        cells
            .filter(|&(x, y)| x < self.cols && y < self.rows && self.candidates.contains((x, y)))
            .collect()
    }

    /// Candidate cells orthogonally adjacent to any of `cells`, in order.
    fn frontier<'a>(&'a self, cells: &'a [Coord]) -> impl Iterator<Item = Coord> + 'a {
        cells
            .iter()
            .flat_map(move |&(x, y)| neighbours(x, y, self.cols, self.rows))
            .filter(move |&c| self.candidates.contains(c))
    }

    fn resolve_sink(&mut self) {
        let size = self.run.len();
        let id = match self.remaining.lowest_afloat_of_size(size) {
            Some(id) => id,
            None => {
                // checked non-empty before any mutation
                let fallback = self.remaining.lowest_afloat();
                warn!("no ship afloat covers {} cells, assuming {:?}", size, fallback);
                match fallback {
                    Some(id) => id,
                    None => return,
                }
            }
        };
        self.remaining.decrement(id);
        debug!("sank ship {} ({} hits), {} left", id, size, self.remaining.total_ships());

        let run = core::mem::take(&mut self.run);
        let around: Vec<Coord> = run
            .iter()
            .flat_map(|&(x, y)| neighbours(x, y, self.cols, self.rows))
            .collect();
        for (x, y) in around {
            let idx = y * self.cols + x;
            if self.knowledge[idx] == Knowledge::Unknown {
                self.knowledge[idx] = Knowledge::Miss;
                self.candidates.remove((x, y));
            }
        }
        self.pending.clear();
    }

    /// Snapshot of the knowledge grid, indexed `[y][x]`.
    pub fn knowledge_grid(&self) -> Vec<Vec<Knowledge>> {
        (0..self.rows)
            .map(|y| self.knowledge[y * self.cols..(y + 1) * self.cols].to_vec())
            .collect()
    }

    /// Symbol rows (`?`, `H`, `M`), indexed `[y][x]`.
    pub fn symbol_grid(&self) -> Vec<Vec<char>> {
        self.knowledge_grid()
            .into_iter()
            .map(|row| row.into_iter().map(Knowledge::symbol).collect())
            .collect()
    }

    pub fn knowledge(&self, x: usize, y: usize) -> Result<Knowledge, BoardError> {
        let idx = self.check_bounds(x, y)?;
        Ok(self.knowledge[idx])
    }

    /// Ships believed afloat, by id.
    pub fn remaining_ships(&self) -> BTreeMap<ShipId, usize> {
        self.remaining.counts()
    }

    /// Belief catalog, counts decremented on every sink.
    pub fn catalog(&self) -> &ShipCatalog {
        &self.remaining
    }

    pub fn all_ships_sunk(&self) -> bool {
        self.remaining.total_ships() == 0
    }

    pub fn mode(&self) -> Mode {
        if self.pending.is_empty() && self.run.is_empty() {
            Mode::Hunt
        } else {
            Mode::Target
        }
    }

    /// Hits of the ship currently being engaged, in the order they landed.
    pub fn run(&self) -> &[Coord] {
        &self.run
    }

    pub fn candidates_remaining(&self) -> usize {
        self.candidates.len()
    }

    pub fn is_candidate(&self, x: usize, y: usize) -> Result<bool, BoardError> {
        self.check_bounds(x, y)?;
        Ok(self.candidates.contains((x, y)))
    }
}
