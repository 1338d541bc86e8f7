//! First-class action types for dots-and-boxes.
//!
//! A move is a domain event: a player drawing one edge. It can be validated
//! against a game before it is applied, and its effect is reported back as a
//! [`MoveOutcome`].

use crate::board::BoardError;
use crate::player::PlayerId;
use crate::topology::{Cell, Dot, Edge, GridError};
use derive_getters::Getters;
use derive_more::Display;
use serde::{Deserialize, Serialize};

/// A player drawing an edge.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Display, derive_new::new,
)]
#[display("{player} draws {edge}")]
pub struct Move {
    /// The player drawing the edge.
    pub player: PlayerId,
    /// The edge being drawn.
    pub edge: Edge,
}

/// Effect of an accepted move.
#[derive(Debug, Clone, PartialEq, Eq, Getters, Serialize, Deserialize)]
pub struct MoveOutcome {
    /// Cells this move completed, claimed by the mover. Zero, one or two.
    completed_cells: Vec<Cell>,
    /// Whose turn it is now.
    next_active_player: PlayerId,
}

impl MoveOutcome {
    pub(crate) fn new(completed_cells: Vec<Cell>, next_active_player: PlayerId) -> Self {
        Self {
            completed_cells,
            next_active_player,
        }
    }

    /// True iff the mover keeps the turn.
    pub fn extra_turn(&self) -> bool {
        !self.completed_cells.is_empty()
    }
}

/// Reasons a move is rejected. A rejected move changes nothing.
#[derive(Debug, Clone, PartialEq, Eq, Display)]
pub enum MoveError {
    /// A dot lies outside the grid.
    #[display("Coordinate {_0} is outside the grid")]
    InvalidCoordinate(Dot),

    /// The two dots are not grid-adjacent.
    #[display("Dots {_0} and {_1} are not adjacent")]
    IllegalEdge(Dot, Dot),

    /// The edge has already been drawn.
    #[display("Edge {_0} is already drawn")]
    EdgeAlreadyDrawn(Edge),

    /// A completed cell already had an owner. Indicates a logic error.
    #[display("Cell {_0} is already claimed")]
    AlreadyClaimed(Cell),

    /// The move names a player who is not active.
    #[display("It's not {_0}'s turn")]
    WrongPlayer(PlayerId),

    /// An invariant was violated (postcondition failure).
    #[display("Invariant violation: {_0}")]
    InvariantViolation(String),
}

impl std::error::Error for MoveError {}

impl From<GridError> for MoveError {
    fn from(err: GridError) -> Self {
        match err {
            GridError::InvalidCoordinate(dot) => MoveError::InvalidCoordinate(dot),
            GridError::IllegalEdge(a, b) => MoveError::IllegalEdge(a, b),
        }
    }
}

impl From<BoardError> for MoveError {
    fn from(err: BoardError) -> Self {
        match err {
            BoardError::DuplicateEdge(edge) => MoveError::EdgeAlreadyDrawn(edge),
            BoardError::AlreadyClaimed(cell) => MoveError::AlreadyClaimed(cell),
        }
    }
}

/// Reasons a game cannot be created.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display)]
pub enum SetupError {
    /// The grid must have at least one cell per side.
    #[display("Grid size must be at least 1")]
    EmptyGrid,

    /// The grid has more edges than can be counted.
    #[display("Grid size {_0} is too large")]
    GridTooLarge(usize),

    /// A game needs at least two players.
    #[display("At least 2 players are required, got {_0}")]
    TooFewPlayers(usize),
}

impl std::error::Error for SetupError {}
