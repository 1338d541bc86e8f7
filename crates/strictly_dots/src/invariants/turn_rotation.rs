//! Turn rotation invariant: the extra-turn rule explains who is active.

use super::Invariant;
use crate::game::GameState;
use crate::rules::is_enclosed;

/// Invariant: the active player follows from the last move.
///
/// With no history the first player is active. Otherwise a last move that
/// completed no cell passes the turn to the next player in rotation, and
/// one that completed one or two cells keeps it. The last edge drawn is
/// the only one that can have just enclosed its neighbours, so any
/// enclosed cell bordering it was completed by that move.
///
/// Earlier turns are covered by [`super::HistoryConsistentInvariant`],
/// whose replay rejects out-of-turn moves.
pub struct TurnRotationInvariant;

impl Invariant<GameState> for TurnRotationInvariant {
    fn holds(game: &GameState) -> bool {
        if !game.roster().contains(game.active_player()) {
            return false;
        }
        let Some(last) = game.history().last() else {
            return game.active_player() == game.roster().first();
        };
        let Ok(cells) = game.grid().cells_adjacent_to_edge(last.edge) else {
            return false;
        };
        let completed = cells
            .into_iter()
            .any(|cell| is_enclosed(game.board(), cell));
        let expected = if completed {
            last.player
        } else {
            game.roster().next(last.player)
        };
        game.active_player() == expected
    }

    fn description() -> &'static str {
        "Turn passes round-robin unless the mover completed a cell"
    }
}
