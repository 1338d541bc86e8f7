//! Cell completion detection.

use crate::board::Board;
use crate::topology::{Cell, Edge, Grid, GridError};
use tracing::{debug, instrument};

/// True iff all four bounding edges of `cell` are drawn.
pub fn is_enclosed(board: &Board, cell: Cell) -> bool {
    cell.edges().into_iter().all(|edge| board.has_edge(edge))
}

/// Cells that `new_edge` just completed.
///
/// Only the (at most two) cells bordering the edge are inspected. A cell
/// qualifies when it is enclosed and still open. Read-only over the board.
///
/// # Errors
///
/// Returns [`GridError::InvalidCoordinate`] if the edge is off the grid.
#[instrument(skip(board, grid), fields(edge = %new_edge))]
pub fn check_completions(
    board: &Board,
    new_edge: Edge,
    grid: &Grid,
) -> Result<Vec<Cell>, GridError> {
    let completed: Vec<Cell> = grid
        .cells_adjacent_to_edge(new_edge)?
        .into_iter()
        .filter(|cell| board.cell_owner(*cell).is_none() && is_enclosed(board, *cell))
        .collect();

    if !completed.is_empty() {
        debug!(count = completed.len(), "Edge completed cells");
    }
    Ok(completed)
}
