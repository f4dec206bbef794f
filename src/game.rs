//! Shot resolution against a true board and the planner-vs-board loop.

use alloc::vec;
use alloc::vec::Vec;
use log::{debug, trace};

use crate::common::{BoardError, ShotOutcome};
use crate::grid::Grid;
use crate::placer::Picker;
use crate::planner::AttackPlanner;

/// A placed board taking fire.
#[derive(Debug, Clone)]
pub struct Defender {
    grid: Grid,
    fired: Vec<bool>,
    // intact cells per placed instance
    afloat: Vec<usize>,
}

impl Defender {
    pub fn new(grid: Grid) -> Self {
        let fired = vec![false; grid.rows() * grid.cols()];
        let afloat = grid.placed_ships().iter().map(|s| s.cells.len()).collect();
        Defender {
            grid,
            fired,
            afloat,
        }
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    /// Fire at `(x, y)` and report what was struck.
    pub fn fire(&mut self, x: usize, y: usize) -> Result<ShotOutcome, BoardError> {
        let instance = self.grid.instance_at(x, y)?;
        let idx = y * self.grid.cols() + x;
        if self.fired[idx] {
            return Err(BoardError::AlreadyFired { x, y });
        }
        self.fired[idx] = true;
        let Some(instance) = instance else {
            return Ok(ShotOutcome::Miss);
        };
        self.afloat[instance] -= 1;
        if self.afloat[instance] == 0 {
            Ok(ShotOutcome::Sunk(self.grid.placed_ships()[instance].id))
        } else {
            Ok(ShotOutcome::Hit)
        }
    }

    pub fn ships_afloat(&self) -> usize {
        self.afloat.iter().filter(|&&n| n > 0).count()
    }

    pub fn all_sunk(&self) -> bool {
        self.ships_afloat() == 0
    }
}

/// Tally of one engagement.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub struct EngagementReport {
    pub shots: usize,
    pub hits: usize,
    pub misses: usize,
    pub sinks: usize,
}

/// Let `planner` fire at `defender` until it believes every ship is sunk.
///
/// Fails with `ShotLimit` if that takes more than `max_shots` shots.
pub fn engage<P: Picker>(
    planner: &mut AttackPlanner<P>,
    defender: &mut Defender,
    max_shots: usize,
) -> Result<EngagementReport, BoardError> {
    let mut report = EngagementReport::default();
    while !planner.all_ships_sunk() {
        if report.shots == max_shots {
            return Err(BoardError::ShotLimit(max_shots));
        }
        let (x, y) = planner.next_attack()?;
        let outcome = defender.fire(x, y)?;
        trace!("shot {} at ({}, {}): {:?}", report.shots + 1, x, y, outcome);
        planner.register_outcome(x, y, outcome)?;
        report.shots += 1;
        match outcome {
            ShotOutcome::Miss => report.misses += 1,
            ShotOutcome::Hit => report.hits += 1,
            ShotOutcome::Sunk(_) => {
                report.hits += 1;
                report.sinks += 1;
            }
        }
    }
    debug!(
        "engagement over after {} shots ({} hits, {} sinks)",
        report.shots, report.hits, report.sinks
    );
    Ok(report)
}
