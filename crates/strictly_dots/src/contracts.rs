//! Contract-based validation for dots-and-boxes.
//!
//! Contracts define correctness through preconditions and postconditions.
//! They formalize the Hoare-style reasoning: {P} action {Q}

use crate::action::{Move, MoveError};
use crate::game::GameState;
use crate::invariants::{DotsInvariants, InvariantSet};
use tracing::{instrument, warn};

// ─────────────────────────────────────────────────────────────
//  Contract Trait
// ─────────────────────────────────────────────────────────────

/// A contract defines preconditions and postconditions for state transitions.
///
/// - Precondition: {P(state, action)} - must hold before applying action
/// - Postcondition: {Q(before, after)} - must hold after applying action
pub trait Contract<S, A> {
    /// Checks preconditions before applying the action.
    fn pre(state: &S, action: &A) -> Result<(), MoveError>;

    /// Checks postconditions after applying the action.
    fn post(before: &S, after: &S) -> Result<(), MoveError>;
}

// ─────────────────────────────────────────────────────────────
//  Move Preconditions
// ─────────────────────────────────────────────────────────────

/// Precondition: both endpoints of the edge lie on the grid.
///
/// Adjacency needs no check here; an `Edge` cannot hold non-adjacent dots.
pub struct WithinGrid;

impl WithinGrid {
    /// Rejects edges that leave the grid.
    #[instrument(skip(game))]
    pub fn check(mov: &Move, game: &GameState) -> Result<(), MoveError> {
        let (a, b) = mov.edge.endpoints();
        for dot in [a, b] {
            if !game.grid().contains_dot(dot) {
                return Err(MoveError::InvalidCoordinate(dot));
            }
        }
        Ok(())
    }
}

/// Precondition: the edge has not been drawn.
pub struct EdgeUndrawn;

impl EdgeUndrawn {
    /// Rejects duplicate claims.
    #[instrument(skip(game))]
    pub fn check(mov: &Move, game: &GameState) -> Result<(), MoveError> {
        if game.board().has_edge(mov.edge) {
            Err(MoveError::EdgeAlreadyDrawn(mov.edge))
        } else {
            Ok(())
        }
    }
}

/// Precondition: it must be the player's turn.
pub struct PlayersTurn;

impl PlayersTurn {
    /// Rejects moves by anyone but the active player.
    #[instrument(skip(game))]
    pub fn check(mov: &Move, game: &GameState) -> Result<(), MoveError> {
        if mov.player != game.active_player() {
            Err(MoveError::WrongPlayer(mov.player))
        } else {
            Ok(())
        }
    }
}

/// Composite precondition, checked in the order bounds, turn, duplicate.
pub struct LegalClaim;

impl LegalClaim {
    /// Validates all preconditions for a move.
    #[instrument(skip(game))]
    pub fn check(mov: &Move, game: &GameState) -> Result<(), MoveError> {
        WithinGrid::check(mov, game)?;
        PlayersTurn::check(mov, game)?;
        EdgeUndrawn::check(mov, game)?;
        Ok(())
    }
}

// ─────────────────────────────────────────────────────────────
//  Postconditions
// ─────────────────────────────────────────────────────────────

/// Postcondition: no owner recorded before the move changed or vanished.
pub struct ClaimsPreserved;

impl ClaimsPreserved {
    /// True iff every claim in `before` is still present in `after`.
    #[instrument(skip(before, after))]
    pub fn holds(before: &GameState, after: &GameState) -> bool {
        let valid = before
            .board()
            .cell_owners()
            .all(|(cell, owner)| after.board().cell_owner(cell) == Some(owner));
        if !valid {
            warn!("Claimed cell changed owner");
        }
        valid
    }
}

// ─────────────────────────────────────────────────────────────
//  Move Contract (Pre + Post)
// ─────────────────────────────────────────────────────────────

/// Contract for move actions.
///
/// Preconditions:
/// - Edge lies on the grid
/// - Mover is the active player
/// - Edge not yet drawn
///
/// Postconditions:
/// - Earlier claims are untouched
/// - Every invariant in [`DotsInvariants`] holds
pub struct MoveContract;

impl Contract<GameState, Move> for MoveContract {
    fn pre(game: &GameState, action: &Move) -> Result<(), MoveError> {
        LegalClaim::check(action, game)
    }

    fn post(before: &GameState, after: &GameState) -> Result<(), MoveError> {
        if !ClaimsPreserved::holds(before, after) {
            return Err(MoveError::InvariantViolation(
                "Postcondition failed: claimed cells are never reassigned".to_string(),
            ));
        }

        DotsInvariants::check_all(after).map_err(|violations| {
            let descriptions = violations
                .iter()
                .map(|v| v.description.as_str())
                .collect::<Vec<_>>()
                .join("; ");
            warn!(%descriptions, "Invariant check failed");
            MoveError::InvariantViolation(format!("Postcondition failed: {}", descriptions))
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::player::{Color, Player, PlayerId};
    use crate::topology::{Cell, Dot, Edge};

    fn game() -> GameState {
        GameState::new_game(
            2,
            vec![Player::new("A", Color::RED), Player::new("B", Color::BLUE)],
        )
        .unwrap()
    }

    fn edge(a: (usize, usize), b: (usize, usize)) -> Edge {
        Edge::new(a.into(), b.into()).unwrap()
    }

    #[test]
    fn test_precondition_fresh_edge() {
        let game = game();
        let action = Move::new(PlayerId::new(0), edge((0, 0), (0, 1)));
        assert!(MoveContract::pre(&game, &action).is_ok());
    }

    #[test]
    fn test_precondition_drawn_edge() {
        let mut game = game();
        game.attempt_move(Dot::new(0, 0), Dot::new(0, 1)).unwrap();

        let action = Move::new(PlayerId::new(1), edge((0, 1), (0, 0)));
        assert!(matches!(
            MoveContract::pre(&game, &action),
            Err(MoveError::EdgeAlreadyDrawn(_))
        ));
    }

    #[test]
    fn test_precondition_wrong_turn() {
        let game = game();
        let action = Move::new(PlayerId::new(1), edge((0, 0), (0, 1)));
        assert_eq!(
            MoveContract::pre(&game, &action),
            Err(MoveError::WrongPlayer(PlayerId::new(1)))
        );
    }

    #[test]
    fn test_precondition_off_grid() {
        let game = game();
        let action = Move::new(PlayerId::new(0), edge((3, 0), (3, 1)));
        assert_eq!(
            MoveContract::pre(&game, &action),
            Err(MoveError::InvalidCoordinate(Dot::new(3, 0)))
        );
    }

    #[test]
    fn test_postcondition_holds_after_move() {
        let before = game();
        let mut after = before.clone();
        after.attempt_move(Dot::new(1, 0), Dot::new(1, 1)).unwrap();
        assert!(MoveContract::post(&before, &after).is_ok());
    }

    #[test]
    fn test_postcondition_detects_reassigned_claim() {
        let mut before = game();
        for edge in Cell::new(0, 0).edges() {
            let (a, b) = edge.endpoints();
            before.attempt_move(a, b).unwrap();
        }
        assert_eq!(before.board().cell_owner(Cell::new(0, 0)), Some(PlayerId::new(1)));

        let mut after = before.clone();
        after.board = crate::board::Board::new();
        assert!(!ClaimsPreserved::holds(&before, &after));
        assert!(MoveContract::post(&before, &after).is_err());
    }

    #[test]
    fn test_postcondition_detects_corruption() {
        let before = game();
        let mut after = before.clone();
        after.attempt_move(Dot::new(0, 0), Dot::new(0, 1)).unwrap();

        // Edge recorded without a matching history entry.
        after
            .board
            .record_edge(edge((2, 0), (2, 1)), PlayerId::new(0))
            .unwrap();
        assert!(MoveContract::post(&before, &after).is_err());
    }
}
