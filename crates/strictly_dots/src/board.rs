//! Board state: which edges are drawn, and which cells are owned.
//!
//! The board stores facts and rejects duplicates. It never decides on its
//! own that a cell is complete; that is the completion rule's job.

use crate::player::PlayerId;
use crate::topology::{Cell, Edge};
use derive_more::Display;
use std::collections::BTreeMap;
use tracing::{instrument, trace};

/// Errors raised by board mutations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display)]
pub enum BoardError {
    /// The edge is already drawn.
    #[display("Edge {_0} is already drawn")]
    DuplicateEdge(Edge),

    /// The cell already has an owner.
    #[display("Cell {_0} is already claimed")]
    AlreadyClaimed(Cell),
}

impl std::error::Error for BoardError {}

/// Mutable record of drawn edges and claimed cells.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Board {
    /// Drawn edges and who drew them.
    edges: BTreeMap<Edge, PlayerId>,
    /// Claimed cells and their owners.
    owners: BTreeMap<Cell, PlayerId>,
}

impl Board {
    /// Creates an empty board.
    pub fn new() -> Self {
        Self::default()
    }

    /// True iff the edge has been drawn.
    pub fn has_edge(&self, edge: Edge) -> bool {
        self.edges.contains_key(&edge)
    }

    /// Who drew the edge, if anyone.
    pub fn edge_owner(&self, edge: Edge) -> Option<PlayerId> {
        self.edges.get(&edge).copied()
    }

    /// Records a newly drawn edge.
    ///
    /// # Errors
    ///
    /// Returns [`BoardError::DuplicateEdge`] if the edge is already drawn.
    #[instrument(skip(self), fields(edge = %edge, player = %player))]
    pub fn record_edge(&mut self, edge: Edge, player: PlayerId) -> Result<(), BoardError> {
        if self.has_edge(edge) {
            return Err(BoardError::DuplicateEdge(edge));
        }
        self.edges.insert(edge, player);
        trace!("Edge recorded");
        Ok(())
    }

    /// Owner of a cell, or `None` while it is open.
    pub fn cell_owner(&self, cell: Cell) -> Option<PlayerId> {
        self.owners.get(&cell).copied()
    }

    /// Assigns an owner to an open cell.
    ///
    /// # Errors
    ///
    /// Returns [`BoardError::AlreadyClaimed`] if the cell is already owned.
    #[instrument(skip(self), fields(cell = %cell, player = %player))]
    pub fn claim_cell(&mut self, cell: Cell, player: PlayerId) -> Result<(), BoardError> {
        if self.owners.contains_key(&cell) {
            return Err(BoardError::AlreadyClaimed(cell));
        }
        self.owners.insert(cell, player);
        trace!("Cell claimed");
        Ok(())
    }

    /// Drawn edges in canonical order.
    pub fn drawn_edges(&self) -> impl Iterator<Item = (Edge, PlayerId)> + '_ {
        self.edges.iter().map(|(e, p)| (*e, *p))
    }

    /// Claimed cells in row-major order.
    pub fn cell_owners(&self) -> impl Iterator<Item = (Cell, PlayerId)> + '_ {
        self.owners.iter().map(|(c, p)| (*c, *p))
    }

    /// Number of drawn edges.
    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }

    /// Number of claimed cells.
    pub fn claimed_count(&self) -> usize {
        self.owners.len()
    }

    /// Undoes a partially applied move: removes `edge` and frees `cells`.
    pub(crate) fn revert(&mut self, edge: Edge, cells: &[Cell]) {
        self.edges.remove(&edge);
        for cell in cells {
            self.owners.remove(cell);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::topology::Dot;

    fn edge(a: (usize, usize), b: (usize, usize)) -> Edge {
        Edge::new(a.into(), b.into()).unwrap()
    }

    #[test]
    fn test_record_edge_once() {
        let mut board = Board::new();
        let e = edge((0, 0), (0, 1));
        let p = PlayerId::new(0);

        assert!(!board.has_edge(e));
        board.record_edge(e, p).unwrap();
        assert!(board.has_edge(e));
        assert_eq!(board.edge_owner(e), Some(p));

        let reversed = Edge::new(Dot::new(0, 1), Dot::new(0, 0)).unwrap();
        assert_eq!(
            board.record_edge(reversed, PlayerId::new(1)),
            Err(BoardError::DuplicateEdge(e))
        );
        assert_eq!(board.edge_owner(e), Some(p));
        assert_eq!(board.edge_count(), 1);
    }

    #[test]
    fn test_claim_cell_never_reassigned() {
        let mut board = Board::new();
        let cell = Cell::new(0, 0);

        assert_eq!(board.cell_owner(cell), None);
        board.claim_cell(cell, PlayerId::new(1)).unwrap();
        assert_eq!(
            board.claim_cell(cell, PlayerId::new(0)),
            Err(BoardError::AlreadyClaimed(cell))
        );
        assert_eq!(board.cell_owner(cell), Some(PlayerId::new(1)));
    }

    #[test]
    fn test_board_does_not_auto_claim() {
        let mut board = Board::new();
        for e in Cell::new(0, 0).edges() {
            board.record_edge(e, PlayerId::new(0)).unwrap();
        }
        assert_eq!(board.cell_owner(Cell::new(0, 0)), None);
        assert_eq!(board.claimed_count(), 0);
    }

    #[test]
    fn test_revert() {
        let mut board = Board::new();
        let e = edge((1, 0), (1, 1));
        board.record_edge(e, PlayerId::new(0)).unwrap();
        board.claim_cell(Cell::new(0, 0), PlayerId::new(0)).unwrap();

        board.revert(e, &[Cell::new(0, 0)]);
        assert_eq!(board, Board::new());
    }
}
