//! Turn controller for dots-and-boxes.
//!
//! [`GameState`] is the single owner of all game data. Every intent is
//! resolved completely (validate, record, complete, advance) before the next
//! one is accepted. The only steady state is "awaiting a move from the
//! active player"; once every edge is drawn there are simply no legal moves
//! left.

use crate::action::{Move, MoveError, MoveOutcome, SetupError};
use crate::board::Board;
use crate::config::GameConfig;
use crate::contracts::{Contract, MoveContract};
use crate::player::{Player, PlayerId, Roster};
use crate::rules::{Scores, check_completions, scores};
use crate::snapshot::BoardSnapshot;
use crate::topology::{Dot, Edge, Grid};
use tracing::{debug, error, info, instrument};

/// Complete state of one game.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameState {
    pub(crate) grid: Grid,
    pub(crate) roster: Roster,
    pub(crate) board: Board,
    pub(crate) active: PlayerId,
    pub(crate) history: Vec<Move>,
}

impl GameState {
    /// Starts a game on an `grid_size × grid_size` grid. The first player
    /// in `players` moves first.
    ///
    /// # Errors
    ///
    /// Returns [`SetupError::EmptyGrid`] for a zero-size grid,
    /// [`SetupError::GridTooLarge`] when the edge count overflows `usize`,
    /// and [`SetupError::TooFewPlayers`] for fewer than two players.
    #[instrument(skip(players), fields(players = players.len()))]
    pub fn new_game(grid_size: usize, players: Vec<Player>) -> Result<Self, SetupError> {
        if grid_size == 0 {
            return Err(SetupError::EmptyGrid);
        }
        if Grid::checked_edge_count(grid_size).is_none() {
            return Err(SetupError::GridTooLarge(grid_size));
        }
        let roster = Roster::new(players)?;
        info!("Starting new game");
        Ok(Self {
            grid: Grid::new(grid_size),
            active: roster.first(),
            roster,
            board: Board::new(),
            history: Vec::new(),
        })
    }

    /// Starts a game from loaded configuration.
    ///
    /// # Errors
    ///
    /// Same as [`GameState::new_game`].
    #[instrument(skip(config))]
    pub fn from_config(config: &GameConfig) -> Result<Self, SetupError> {
        Self::new_game(*config.grid_size(), config.players().clone())
    }

    /// Attempts to draw the edge between two dots for the active player.
    ///
    /// Checks run in order: both dots on the grid, dots adjacent, edge not
    /// yet drawn. A rejected attempt leaves the game untouched.
    ///
    /// # Errors
    ///
    /// [`MoveError::InvalidCoordinate`], [`MoveError::IllegalEdge`] or
    /// [`MoveError::EdgeAlreadyDrawn`] for rejected input.
    #[instrument(skip(self), fields(a = %a, b = %b, player = %self.active))]
    pub fn attempt_move(&mut self, a: Dot, b: Dot) -> Result<MoveOutcome, MoveError> {
        let edge = self.grid.edge(a, b)?;
        self.apply(Move::new(self.active, edge))
    }

    /// Applies a first-class move.
    ///
    /// Contract enforcement:
    /// - Preconditions checked always
    /// - Postconditions checked in debug builds only; a failure restores the
    ///   state from before the move
    ///
    /// # Errors
    ///
    /// Returns [`MoveError::WrongPlayer`] if `action.player` is not active,
    /// plus every error [`GameState::attempt_move`] can return.
    #[instrument(skip(self), fields(action = %action))]
    pub fn apply(&mut self, action: Move) -> Result<MoveOutcome, MoveError> {
        MoveContract::pre(self, &action)?;

        #[cfg(debug_assertions)]
        let before = self.clone();

        let outcome = self.resolve(action)?;

        #[cfg(debug_assertions)]
        if let Err(err) = MoveContract::post(&before, self) {
            *self = before;
            return Err(err);
        }

        Ok(outcome)
    }

    /// Applies each move in order, stopping at the first rejection.
    ///
    /// # Errors
    ///
    /// Returns the first move error encountered.
    #[instrument(skip(self, moves), fields(count = moves.len()))]
    pub fn replay(mut self, moves: &[Move]) -> Result<Self, MoveError> {
        for action in moves {
            self.apply(*action)?;
        }
        Ok(self)
    }

    /// Records the edge, claims what it completes and settles the turn.
    ///
    /// Runs without contract checks; callers validate first.
    fn resolve(&mut self, action: Move) -> Result<MoveOutcome, MoveError> {
        let Move { player, edge } = action;

        self.board.record_edge(edge, player)?;

        let completed = match check_completions(&self.board, edge, &self.grid) {
            Ok(completed) => completed,
            Err(err) => {
                self.board.revert(edge, &[]);
                return Err(err.into());
            }
        };

        for (claimed, cell) in completed.iter().enumerate() {
            if let Err(err) = self.board.claim_cell(*cell, player) {
                error!(%cell, %player, "Completed cell already had an owner");
                self.board.revert(edge, &completed[..claimed]);
                return Err(err.into());
            }
        }

        if completed.is_empty() {
            self.active = self.roster.next(player);
        }
        self.history.push(action);

        debug!(
            %edge,
            %player,
            completed = completed.len(),
            next = %self.active,
            "Move resolved"
        );
        Ok(MoveOutcome::new(completed, self.active))
    }

    /// Rebuilds the game from an empty board by resolving the history.
    pub(crate) fn rebuild_from_history(&self) -> Result<GameState, MoveError> {
        let mut fresh = Self {
            grid: self.grid,
            roster: self.roster.clone(),
            board: Board::new(),
            active: self.roster.first(),
            history: Vec::with_capacity(self.history.len()),
        };
        for action in &self.history {
            if action.player != fresh.active {
                return Err(MoveError::WrongPlayer(action.player));
            }
            fresh.resolve(*action)?;
        }
        Ok(fresh)
    }

    /// Read-only view for rendering.
    #[instrument(skip(self))]
    pub fn current_board(&self) -> BoardSnapshot {
        BoardSnapshot::new(
            self.grid.size(),
            self.board.drawn_edges().collect(),
            self.board.cell_owners().collect(),
            self.scores(),
            self.active,
        )
    }

    /// Current scores, derived from the board.
    pub fn scores(&self) -> Scores {
        scores(&self.board, &self.roster)
    }

    /// Edges still available to draw.
    pub fn undrawn_edges(&self) -> Vec<Edge> {
        self.grid
            .edges()
            .filter(|edge| !self.board.has_edge(*edge))
            .collect()
    }

    /// True once every edge is drawn (and therefore every cell claimed).
    pub fn is_finished(&self) -> bool {
        self.board.edge_count() == self.grid.edge_count()
    }

    /// The grid being played on.
    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    /// The players in turn order.
    pub fn roster(&self) -> &Roster {
        &self.roster
    }

    /// The board.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Whose turn it is.
    pub fn active_player(&self) -> PlayerId {
        self.active
    }

    /// Accepted moves, oldest first.
    pub fn history(&self) -> &[Move] {
        &self.history
    }
}
