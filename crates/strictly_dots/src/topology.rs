//! Grid topology for dots-and-boxes.
//!
//! A grid of size `N` has `(N+1)²` dots, `2·N·(N+1)` edges and `N²` cells.
//! Everything here is pure geometry: no component in this module knows who
//! drew what.

use derive_more::Display;
use serde::{Deserialize, Serialize};
use strum::IntoEnumIterator;
use tracing::instrument;

/// A vertex of the grid, addressed by `(row, col)` with `0 ≤ row,col ≤ N`.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, Display,
)]
#[display("({row}, {col})")]
pub struct Dot {
    /// Row index, counted from the top.
    pub row: usize,
    /// Column index, counted from the left.
    pub col: usize,
}

impl Dot {
    /// Creates a dot at the given coordinates.
    pub const fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }

    /// True iff `other` lies exactly one step away along exactly one axis.
    pub fn is_adjacent_to(self, other: Dot) -> bool {
        self.row.abs_diff(other.row) + self.col.abs_diff(other.col) == 1
    }
}

impl From<(usize, usize)> for Dot {
    fn from((row, col): (usize, usize)) -> Self {
        Self::new(row, col)
    }
}

/// Direction an edge runs in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Display)]
pub enum Orientation {
    /// Both endpoints share a row.
    Horizontal,
    /// Both endpoints share a column.
    Vertical,
}

/// An unordered pair of grid-adjacent dots.
///
/// Endpoints are stored canonically (lesser dot first), so an edge drawn
/// from `a` to `b` compares equal to the one drawn from `b` to `a`.
/// Non-adjacent pairs cannot be represented.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, Display,
)]
#[serde(try_from = "(Dot, Dot)", into = "(Dot, Dot)")]
#[display("{a}-{b}")]
pub struct Edge {
    a: Dot,
    b: Dot,
}

impl Edge {
    /// Creates an edge between two adjacent dots, in either order.
    ///
    /// # Errors
    ///
    /// Returns [`GridError::IllegalEdge`] if the dots are not adjacent.
    pub fn new(a: Dot, b: Dot) -> Result<Self, GridError> {
        if a.is_adjacent_to(b) {
            Ok(Self::canonical(a, b))
        } else {
            Err(GridError::IllegalEdge(a, b))
        }
    }

    /// Orders the endpoints. Callers guarantee adjacency.
    pub(crate) fn canonical(a: Dot, b: Dot) -> Self {
        debug_assert!(a.is_adjacent_to(b), "edge endpoints must be adjacent");
        if a <= b { Self { a, b } } else { Self { a: b, b: a } }
    }

    /// Returns the endpoints, lesser dot first.
    pub fn endpoints(&self) -> (Dot, Dot) {
        (self.a, self.b)
    }

    /// Returns whether the edge is horizontal or vertical.
    pub fn orientation(&self) -> Orientation {
        if self.a.row == self.b.row {
            Orientation::Horizontal
        } else {
            Orientation::Vertical
        }
    }
}

impl TryFrom<(Dot, Dot)> for Edge {
    type Error = GridError;

    fn try_from((a, b): (Dot, Dot)) -> Result<Self, Self::Error> {
        Self::new(a, b)
    }
}

impl From<Edge> for (Dot, Dot) {
    fn from(edge: Edge) -> Self {
        edge.endpoints()
    }
}

/// One of the four sides of a cell, in checking order.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Display, strum::EnumIter,
)]
pub enum Side {
    /// Edge from the top-left to the top-right corner.
    Top,
    /// Edge from the top-right to the bottom-right corner.
    Right,
    /// Edge from the bottom-left to the bottom-right corner.
    Bottom,
    /// Edge from the top-left to the bottom-left corner.
    Left,
}

/// A unit square, identified by its top-left dot (`0 ≤ row,col < N`).
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, Display,
)]
#[display("[{row}, {col}]")]
pub struct Cell {
    /// Row of the top-left dot.
    pub row: usize,
    /// Column of the top-left dot.
    pub col: usize,
}

impl Cell {
    /// Creates a cell with the given top-left corner.
    pub const fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }

    /// Returns the edge on the given side of this cell.
    pub fn side(self, side: Side) -> Edge {
        let (r, c) = (self.row, self.col);
        match side {
            Side::Top => Edge::canonical(Dot::new(r, c), Dot::new(r, c + 1)),
            Side::Right => Edge::canonical(Dot::new(r, c + 1), Dot::new(r + 1, c + 1)),
            Side::Bottom => Edge::canonical(Dot::new(r + 1, c), Dot::new(r + 1, c + 1)),
            Side::Left => Edge::canonical(Dot::new(r, c), Dot::new(r + 1, c)),
        }
    }

    /// Returns the four bounding edges in `Side` order (top, right, bottom, left).
    pub fn edges(self) -> [Edge; 4] {
        [
            self.side(Side::Top),
            self.side(Side::Right),
            self.side(Side::Bottom),
            self.side(Side::Left),
        ]
    }
}

/// Geometry errors.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display)]
pub enum GridError {
    /// A coordinate lies outside the grid.
    #[display("Coordinate {_0} is outside the grid")]
    InvalidCoordinate(Dot),

    /// The two dots are not one step apart along a single axis.
    #[display("Dots {_0} and {_1} are not adjacent")]
    IllegalEdge(Dot, Dot),
}

impl std::error::Error for GridError {}

/// Shape of an `N×N` dots-and-boxes grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Grid {
    size: usize,
}

impl Grid {
    /// Creates a grid with `size` cells per side.
    #[instrument]
    pub fn new(size: usize) -> Self {
        Self { size }
    }

    /// Number of cells per side (`N`).
    pub fn size(&self) -> usize {
        self.size
    }

    /// Edge count `2·N·(N+1)` for a grid of `size`, or `None` if it does
    /// not fit in a `usize`.
    pub fn checked_edge_count(size: usize) -> Option<usize> {
        size.checked_add(1)?.checked_mul(size)?.checked_mul(2)
    }

    /// Total number of drawable edges, `2·N·(N+1)`. Saturates at
    /// `usize::MAX`.
    pub fn edge_count(&self) -> usize {
        Self::checked_edge_count(self.size).unwrap_or(usize::MAX)
    }

    /// Total number of cells, `N²`. Saturates at `usize::MAX`.
    pub fn cell_count(&self) -> usize {
        self.size.saturating_mul(self.size)
    }

    /// True iff the dot lies within `[0, N]` on both axes.
    pub fn contains_dot(&self, dot: Dot) -> bool {
        dot.row <= self.size && dot.col <= self.size
    }

    /// True iff the cell lies within `[0, N)` on both axes.
    pub fn contains_cell(&self, cell: Cell) -> bool {
        cell.row < self.size && cell.col < self.size
    }

    /// True iff both endpoints of the edge are on the grid.
    pub fn contains_edge(&self, edge: Edge) -> bool {
        let (a, b) = edge.endpoints();
        self.contains_dot(a) && self.contains_dot(b)
    }

    fn check_dot(&self, dot: Dot) -> Result<Dot, GridError> {
        if self.contains_dot(dot) {
            Ok(dot)
        } else {
            Err(GridError::InvalidCoordinate(dot))
        }
    }

    fn check_edge(&self, edge: Edge) -> Result<Edge, GridError> {
        let (a, b) = edge.endpoints();
        self.check_dot(a)?;
        self.check_dot(b)?;
        Ok(edge)
    }

    /// All dots in row-major order. Each call starts a fresh pass.
    pub fn dots(&self) -> impl Iterator<Item = Dot> + Clone + use<> {
        let n = self.size;
        (0..=n).flat_map(move |row| (0..=n).map(move |col| Dot::new(row, col)))
    }

    /// All cells in row-major order.
    pub fn cells(&self) -> impl Iterator<Item = Cell> + Clone + use<> {
        let n = self.size;
        (0..n).flat_map(move |row| (0..n).map(move |col| Cell::new(row, col)))
    }

    /// All edges: horizontal edges row by row, then vertical edges row by row.
    pub fn edges(&self) -> impl Iterator<Item = Edge> + Clone + use<> {
        let n = self.size;
        let horizontal = (0..=n).flat_map(move |row| {
            (0..n).map(move |col| Edge::canonical(Dot::new(row, col), Dot::new(row, col + 1)))
        });
        let vertical = (0..n).flat_map(move |row| {
            (0..=n).map(move |col| Edge::canonical(Dot::new(row, col), Dot::new(row + 1, col)))
        });
        horizontal.chain(vertical)
    }

    /// Checks whether two on-grid dots are adjacent.
    ///
    /// # Errors
    ///
    /// Returns [`GridError::InvalidCoordinate`] if either dot is off the grid.
    pub fn is_adjacent(&self, a: Dot, b: Dot) -> Result<bool, GridError> {
        self.check_dot(a)?;
        self.check_dot(b)?;
        Ok(a.is_adjacent_to(b))
    }

    /// Builds the edge between two dots, validating bounds then adjacency.
    ///
    /// # Errors
    ///
    /// Returns [`GridError::InvalidCoordinate`] for off-grid dots and
    /// [`GridError::IllegalEdge`] for non-adjacent ones.
    #[instrument(skip(self), fields(size = self.size, a = %a, b = %b))]
    pub fn edge(&self, a: Dot, b: Dot) -> Result<Edge, GridError> {
        self.check_dot(a)?;
        self.check_dot(b)?;
        Edge::new(a, b)
    }

    /// The four edges bordering a cell, in `Side` order.
    ///
    /// # Errors
    ///
    /// Returns [`GridError::InvalidCoordinate`] if the cell is off the grid.
    pub fn bounding_edges(&self, cell: Cell) -> Result<[Edge; 4], GridError> {
        if !self.contains_cell(cell) {
            return Err(GridError::InvalidCoordinate(Dot::new(cell.row, cell.col)));
        }
        Ok(cell.edges())
    }

    /// The cells an edge borders: two for interior edges, one on the boundary.
    ///
    /// Cells above (for horizontal edges) or to the left (for vertical edges)
    /// come first.
    ///
    /// # Errors
    ///
    /// Returns [`GridError::InvalidCoordinate`] if the edge is off the grid.
    #[instrument(skip(self), fields(size = self.size, edge = %edge))]
    pub fn cells_adjacent_to_edge(&self, edge: Edge) -> Result<Vec<Cell>, GridError> {
        let (a, _) = self.check_edge(edge)?.endpoints();
        let mut cells = Vec::with_capacity(2);
        match edge.orientation() {
            Orientation::Horizontal => {
                if a.row > 0 {
                    cells.push(Cell::new(a.row - 1, a.col));
                }
                if a.row < self.size {
                    cells.push(Cell::new(a.row, a.col));
                }
            }
            Orientation::Vertical => {
                if a.col > 0 {
                    cells.push(Cell::new(a.row, a.col - 1));
                }
                if a.col < self.size {
                    cells.push(Cell::new(a.row, a.col));
                }
            }
        }
        Ok(cells)
    }

    /// Which side of `cell` the edge lies on, if it borders the cell at all.
    pub fn side_of(&self, cell: Cell, edge: Edge) -> Option<Side> {
        Side::iter().find(|side| cell.side(*side) == edge)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_counts_match_formula() {
        for n in 1..=8 {
            let grid = Grid::new(n);
            assert_eq!(grid.dots().count(), (n + 1) * (n + 1));
            assert_eq!(grid.edges().count(), 2 * n * (n + 1));
            assert_eq!(grid.edges().collect::<HashSet<_>>().len(), grid.edge_count());
            assert_eq!(grid.cells().count(), n * n);
        }
    }

    #[test]
    fn test_dots_restartable() {
        let grid = Grid::new(2);
        let first: Vec<_> = grid.dots().collect();
        let second: Vec<_> = grid.dots().collect();
        assert_eq!(first, second);
        assert_eq!(first[0], Dot::new(0, 0));
        assert_eq!(first[8], Dot::new(2, 2));
    }

    #[test]
    fn test_edge_unordered() {
        let a = Dot::new(1, 1);
        let b = Dot::new(1, 2);
        assert_eq!(Edge::new(a, b), Edge::new(b, a));
    }

    #[test]
    fn test_diagonal_rejected() {
        let result = Edge::new(Dot::new(0, 0), Dot::new(1, 1));
        assert_eq!(
            result,
            Err(GridError::IllegalEdge(Dot::new(0, 0), Dot::new(1, 1)))
        );
        assert!(Edge::new(Dot::new(0, 0), Dot::new(0, 0)).is_err());
        assert!(Edge::new(Dot::new(0, 0), Dot::new(0, 2)).is_err());
    }

    #[test]
    fn test_is_adjacent_bounds() {
        let grid = Grid::new(2);
        assert_eq!(grid.is_adjacent(Dot::new(2, 1), Dot::new(2, 2)), Ok(true));
        assert_eq!(grid.is_adjacent(Dot::new(0, 0), Dot::new(1, 1)), Ok(false));
        assert_eq!(
            grid.is_adjacent(Dot::new(2, 2), Dot::new(2, 3)),
            Err(GridError::InvalidCoordinate(Dot::new(2, 3)))
        );
    }

    #[test]
    fn test_bounding_edges_order() {
        let grid = Grid::new(3);
        let [top, right, bottom, left] = grid.bounding_edges(Cell::new(1, 2)).unwrap();
        assert_eq!(top.endpoints(), (Dot::new(1, 2), Dot::new(1, 3)));
        assert_eq!(right.endpoints(), (Dot::new(1, 3), Dot::new(2, 3)));
        assert_eq!(bottom.endpoints(), (Dot::new(2, 2), Dot::new(2, 3)));
        assert_eq!(left.endpoints(), (Dot::new(1, 2), Dot::new(2, 2)));
        assert!(grid.bounding_edges(Cell::new(3, 0)).is_err());
    }

    #[test]
    fn test_cells_adjacent_to_edge() {
        let grid = Grid::new(2);
        let boundary = grid.edge(Dot::new(0, 0), Dot::new(0, 1)).unwrap();
        assert_eq!(grid.cells_adjacent_to_edge(boundary).unwrap(), vec![Cell::new(0, 0)]);

        let interior = grid.edge(Dot::new(0, 1), Dot::new(1, 1)).unwrap();
        assert_eq!(
            grid.cells_adjacent_to_edge(interior).unwrap(),
            vec![Cell::new(0, 0), Cell::new(0, 1)]
        );

        let bottom = grid.edge(Dot::new(2, 1), Dot::new(2, 2)).unwrap();
        assert_eq!(grid.cells_adjacent_to_edge(bottom).unwrap(), vec![Cell::new(1, 1)]);
    }

    #[test]
    fn test_every_edge_borders_its_cells() {
        let grid = Grid::new(4);
        for edge in grid.edges() {
            let cells = grid.cells_adjacent_to_edge(edge).unwrap();
            assert!(!cells.is_empty() && cells.len() <= 2);
            for cell in cells {
                assert!(grid.side_of(cell, edge).is_some());
            }
        }
    }

    #[test]
    fn test_off_grid_edge_rejected() {
        let grid = Grid::new(1);
        assert_eq!(
            grid.edge(Dot::new(1, 1), Dot::new(1, 2)),
            Err(GridError::InvalidCoordinate(Dot::new(1, 2)))
        );
    }

    #[test]
    fn test_counts_saturate_on_huge_grid() {
        let huge = 1usize << (usize::BITS / 2);
        assert_eq!(Grid::checked_edge_count(huge), None);
        assert_eq!(Grid::new(huge).edge_count(), usize::MAX);
        assert_eq!(Grid::new(usize::MAX).cell_count(), usize::MAX);
        assert_eq!(Grid::checked_edge_count(3), Some(24));
    }
}
