//! History consistency invariant: the board is exactly what the history built.

use super::Invariant;
use crate::game::GameState;

/// Invariant: replaying the move history on an empty board reproduces the
/// current board and active player.
///
/// Every drawn edge has exactly one move behind it, edges are never drawn
/// twice, and every owner was assigned by the move that enclosed the cell.
pub struct HistoryConsistentInvariant;

impl Invariant<GameState> for HistoryConsistentInvariant {
    fn holds(game: &GameState) -> bool {
        match game.rebuild_from_history() {
            Ok(rebuilt) => {
                rebuilt.board() == game.board()
                    && rebuilt.active_player() == game.active_player()
            }
            Err(_) => false,
        }
    }

    fn description() -> &'static str {
        "Board matches a replay of the move history"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::action::Move;
    use crate::player::{Color, Player, PlayerId};
    use crate::topology::{Cell, Dot, Edge};

    fn game() -> GameState {
        GameState::new_game(
            2,
            vec![Player::new("A", Color::RED), Player::new("B", Color::BLUE)],
        )
        .unwrap()
    }

    #[test]
    fn test_empty_game_holds() {
        assert!(HistoryConsistentInvariant::holds(&game()));
    }

    #[test]
    fn test_multiple_moves_hold() {
        let mut game = game();
        for edge in game.undrawn_edges().into_iter().step_by(2) {
            let (a, b) = edge.endpoints();
            game.attempt_move(a, b).unwrap();
        }
        assert!(HistoryConsistentInvariant::holds(&game));
        assert_eq!(game.history().len(), game.board().edge_count());
    }

    #[test]
    fn test_edge_without_move_violates() {
        let mut game = game();
        let edge = Edge::new(Dot::new(1, 1), Dot::new(1, 2)).unwrap();
        game.board.record_edge(edge, PlayerId::new(0)).unwrap();
        assert!(!HistoryConsistentInvariant::holds(&game));
    }

    #[test]
    fn test_duplicate_history_violates() {
        let mut game = game();
        game.attempt_move(Dot::new(0, 0), Dot::new(0, 1)).unwrap();
        let edge = Edge::new(Dot::new(0, 0), Dot::new(0, 1)).unwrap();
        game.history.push(Move::new(PlayerId::new(1), edge));
        assert!(!HistoryConsistentInvariant::holds(&game));
    }

    #[test]
    fn test_reassigned_owner_violates() {
        let mut game = game();
        for edge in Cell::new(0, 0).edges() {
            let (a, b) = edge.endpoints();
            game.attempt_move(a, b).unwrap();
        }
        let owner = game.board().cell_owner(Cell::new(0, 0)).unwrap();
        let other = game.roster().next(owner);

        game.board.revert(Cell::new(0, 0).edges()[0], &[Cell::new(0, 0)]);
        let top = Cell::new(0, 0).edges()[0];
        game.board.record_edge(top, owner).unwrap();
        game.board.claim_cell(Cell::new(0, 0), other).unwrap();
        assert!(!HistoryConsistentInvariant::holds(&game));
    }
}
