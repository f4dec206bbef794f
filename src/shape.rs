//! Ship footprints: normalised offset sets and their orientations.

use alloc::collections::VecDeque;
use alloc::vec::Vec;
use core::fmt;

use crate::common::{BoardError, Coord};

/// Canonical footprint of a ship: offsets `(dx, dy)` from an anchor cell.
///
/// Offsets are normalised so the smallest `dx` and `dy` are zero and kept
/// sorted, so two shapes compare equal exactly when they cover the same
/// cells.
#[derive(Clone, PartialEq, Eq, Hash)]
pub struct Shape {
    cells: Vec<(usize, usize)>,
    width: usize,
    height: usize,
}

/// The eight rotations and reflections of the square.
const SYMMETRIES: [fn(i64, i64) -> (i64, i64); 8] = [
    |x, y| (x, y),
    |x, y| (-y, x),
    |x, y| (-x, -y),
    |x, y| (y, -x),
    |x, y| (-x, y),
    |x, y| (y, x),
    |x, y| (x, -y),
    |x, y| (-y, -x),
];

impl Shape {
    /// Build a shape from arbitrary (possibly negative) offsets.
    ///
    /// Duplicate offsets collapse. Fails with `InvalidShape` when the set is
    /// empty or not orthogonally connected.
    pub fn new(offsets: &[(i32, i32)]) -> Result<Self, BoardError> {
        let wide: Vec<(i64, i64)> = offsets
            .iter()
            .map(|&(dx, dy)| (dx as i64, dy as i64))
            .collect();
        Self::connected(&wide)
    }

    /// Footprint of absolute board cells, e.g. a placed ship.
    pub fn from_cells(cells: &[Coord]) -> Result<Self, BoardError> {
        let wide: Vec<(i64, i64)> = cells.iter().map(|&(x, y)| (x as i64, y as i64)).collect();
        Self::connected(&wide)
    }

    fn connected(offsets: &[(i64, i64)]) -> Result<Self, BoardError> {
        let shape = Self::normalise(offsets).ok_or(BoardError::InvalidShape)?;
        if !shape.is_connected() {
            return Err(BoardError::InvalidShape);
        }
        Ok(shape)
    }

    /// Straight ship of `len` cells, laid out horizontally.
    pub fn line(len: usize) -> Result<Self, BoardError> {
        if len == 0 {
            return Err(BoardError::InvalidShape);
        }
        Ok(Shape {
            cells: (0..len).map(|dx| (dx, 0)).collect(),
            width: len,
            height: 1,
        })
    }

    fn normalise(offsets: &[(i64, i64)]) -> Option<Self> {
        let min_x = offsets.iter().map(|&(x, _)| x).min()?;
        let min_y = offsets.iter().map(|&(_, y)| y).min()?;
        let mut cells: Vec<(usize, usize)> = offsets
            .iter()
            .map(|&(x, y)| ((x - min_x) as usize, (y - min_y) as usize))
            .collect();
        cells.sort_unstable();
        cells.dedup();
        let width = cells.iter().map(|&(x, _)| x).max()? + 1;
        let height = cells.iter().map(|&(_, y)| y).max()? + 1;
        Some(Shape {
            cells,
            width,
            height,
        })
    }

    fn is_connected(&self) -> bool {
        let mut seen = alloc::vec![false; self.cells.len()];
        let mut queue = VecDeque::new();
        seen[0] = true;
        queue.push_back(self.cells[0]);
        while let Some((x, y)) = queue.pop_front() {
            for (i, &(ox, oy)) in self.cells.iter().enumerate() {
                if !seen[i] && x.abs_diff(ox) + y.abs_diff(oy) == 1 {
                    seen[i] = true;
                    queue.push_back((ox, oy));
                }
            }
        }
        seen.iter().all(|&s| s)
    }

    /// Number of cells covered.
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    /// Always `false`; shapes are non-empty by construction.
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// Normalised offsets, sorted.
    pub fn cells(&self) -> &[(usize, usize)] {
        &self.cells
    }

    /// Bounding-box width (columns spanned).
    pub fn width(&self) -> usize {
        self.width
    }

    /// Bounding-box height (rows spanned).
    pub fn height(&self) -> usize {
        self.height
    }

    /// Whether the shape is a single row or column.
    pub fn is_straight(&self) -> bool {
        self.width == 1 || self.height == 1
    }

    /// Distinct images of this shape under rotation and reflection.
    ///
    /// A line yields 2 (1 for a single cell), an L-tetromino 8.
    pub fn orientations(&self) -> Vec<Shape> {
        let mut out: Vec<Shape> = Vec::with_capacity(SYMMETRIES.len());
        for transform in SYMMETRIES.iter() {
            let image: Vec<(i64, i64)> = self
                .cells
                .iter()
                .map(|&(x, y)| transform(x as i64, y as i64))
                .collect();
            if let Some(shape) = Self::normalise(&image) {
                if !out.contains(&shape) {
                    out.push(shape);
                }
            }
        }
        out
    }

    /// Absolute cells when the shape's origin sits on `anchor`.
    pub fn project(&self, anchor: Coord) -> impl Iterator<Item = Coord> + '_ {
        let (ax, ay) = anchor;
        self.cells.iter().map(move |&(dx, dy)| (ax + dx, ay + dy))
    }

    /// Whether `self` is some orientation of `other`.
    pub fn is_orientation_of(&self, other: &Shape) -> bool {
        self.len() == other.len() && other.orientations().contains(self)
    }
}

impl fmt::Debug for Shape {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Shape {{ {}x{}, cells: {:?} }}", self.width, self.height, self.cells)
    }
}
