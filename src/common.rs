//! Common types: coordinates, ship ids, shot outcomes and errors.

use core::fmt;

/// Board coordinate as `(x, y)`: `x` is the column, `y` is the row.
pub type Coord = (usize, usize);

/// Identifier of a ship type in a catalog.
///
/// `0` is reserved for water in the numeric board view, so ids start at 1.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "std", serde(transparent))]
pub struct ShipId(u8);

impl ShipId {
    /// Returns `None` for the reserved water id `0`.
    pub const fn new(id: u8) -> Option<Self> {
        if id == 0 {
            None
        } else {
            Some(ShipId(id))
        }
    }

    pub const fn get(self) -> u8 {
        self.0
    }
}

impl fmt::Display for ShipId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Result of firing at a cell of the true board.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShotOutcome {
    /// Shot landed in water.
    Miss,
    /// Shot hit a ship that is still afloat.
    Hit,
    /// Shot hit the last intact cell of a ship.
    Sunk(ShipId),
}

impl ShotOutcome {
    pub fn is_hit(self) -> bool {
        !matches!(self, ShotOutcome::Miss)
    }

    pub fn is_sunk(self) -> bool {
        matches!(self, ShotOutcome::Sunk(_))
    }
}

/// Errors returned by grid, planner and defender operations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BoardError {
    /// Coordinate outside `[0, cols) x [0, rows)`.
    OutOfRange { x: usize, y: usize, cols: usize, rows: usize },
    /// The cell was already fired upon.
    AlreadyFired { x: usize, y: usize },
    /// No unfired candidate cell is left to attack.
    NoCandidates,
    /// A sink was reported while no ship is believed afloat.
    NoShipsAfloat,
    /// A result reported a sink without a hit.
    SinkWithoutHit { x: usize, y: usize },
    /// A hit was reported on a cell already deduced to be water.
    ContradictsKnowledge { x: usize, y: usize },
    /// Ship id not present in the catalog or the standard fleet.
    UnknownShip(u8),
    /// Shape is empty or not orthogonally connected.
    InvalidShape,
    /// Ship cells fall outside the grid.
    ShipOutOfBounds,
    /// Ship cells overlap an existing ship.
    ShipOverlaps,
    /// Ship cells are orthogonally adjacent to another ship.
    ShipTouches,
    /// An engagement exceeded its shot budget.
    ShotLimit(usize),
}

impl fmt::Display for BoardError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BoardError::OutOfRange { x, y, cols, rows } => write!(
                f,
                "coordinate ({}, {}) is outside the {}x{} grid",
                x, y, cols, rows
            ),
            BoardError::AlreadyFired { x, y } => {
                write!(f, "cell ({}, {}) was already fired upon", x, y)
            }
            BoardError::NoCandidates => write!(f, "no candidate cells left to attack"),
            BoardError::NoShipsAfloat => write!(f, "sink reported but no ships remain afloat"),
            BoardError::SinkWithoutHit { x, y } => {
                write!(f, "sink reported at ({}, {}) without a hit", x, y)
            }
            BoardError::ContradictsKnowledge { x, y } => {
                write!(f, "hit reported at ({}, {}) which is known to be water", x, y)
            }
            BoardError::UnknownShip(id) => write!(f, "unknown ship id {}", id),
            BoardError::InvalidShape => write!(f, "ship shape is empty or disconnected"),
            BoardError::ShipOutOfBounds => write!(f, "ship placement is out of bounds"),
            BoardError::ShipOverlaps => write!(f, "ship placement overlaps another ship"),
            BoardError::ShipTouches => write!(f, "ship placement touches another ship"),
            BoardError::ShotLimit(n) => write!(f, "engagement exceeded {} shots", n),
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for BoardError {}

/// Failure to produce a complete placement.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PlacementError {
    /// No orientation of the ship's shape fits inside the grid.
    DoesNotFit { ship: ShipId },
    /// Every restart ran out of attempts for some ship.
    Exhausted { restarts: usize },
}

impl fmt::Display for PlacementError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PlacementError::DoesNotFit { ship } => {
                write!(f, "ship {} does not fit on the grid in any orientation", ship)
            }
            PlacementError::Exhausted { restarts } => {
                write!(f, "no valid placement found after {} restarts", restarts)
            }
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for PlacementError {}
