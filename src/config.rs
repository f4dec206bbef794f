use crate::common::BoardError;
use crate::shape::Shape;

pub const DEFAULT_ROWS: usize = 10;
pub const DEFAULT_COLS: usize = 10;

/// Standard fleet table: ship id and footprint offsets `(dx, dy)`.
pub const STANDARD_SHIPS: [(u8, &[(i32, i32)]); 7] = [
    (1, &[(0, 0), (1, 0)]),
    (2, &[(0, 0), (1, 0), (2, 0)]),
    (3, &[(0, 0), (1, 0), (2, 0), (3, 0)]),
    (4, &[(0, 0), (1, 0), (2, 0), (3, 0), (4, 0)]),
    // L
    (5, &[(0, 0), (1, 0), (2, 0), (2, 1)]),
    // U
    (6, &[(0, 0), (0, 1), (1, 1), (2, 1), (2, 0)]),
    // plus
    (7, &[(1, 0), (0, 1), (1, 1), (2, 1), (1, 2)]),
];

/// One of each of the five classic-sized ships.
pub const DEFAULT_FLEET: [(u8, usize); 5] = [(1, 1), (2, 1), (3, 1), (4, 1), (5, 1)];

/// Shape of a ship from the standard fleet table.
pub fn standard_shape(id: u8) -> Result<Shape, BoardError> {
    STANDARD_SHIPS
        .iter()
        .find(|(sid, _)| *sid == id)
        .ok_or(BoardError::UnknownShip(id))
        .and_then(|(_, offsets)| Shape::new(offsets))
}

/// Retry budgets for random placement.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PlacementConfig {
    /// Random samples tried for a single ship before restarting.
    pub attempts_per_ship: usize,
    /// Restarts from an empty grid before giving up.
    pub restarts: usize,
}

impl Default for PlacementConfig {
    fn default() -> Self {
        Self {
            attempts_per_ship: 1000,
            restarts: 500,
        }
    }
}
