//! Score invariant: scores add up to the claimed cells and never exceed N².

use super::Invariant;
use crate::game::GameState;

/// Invariant: the sum of all scores equals the number of claimed cells,
/// which is at most the number of cells on the grid.
pub struct ScoreBoundedInvariant;

impl Invariant<GameState> for ScoreBoundedInvariant {
    fn holds(game: &GameState) -> bool {
        let total = game.scores().total();
        total == game.board().claimed_count() && total <= game.grid().cell_count()
    }

    fn description() -> &'static str {
        "Scores sum to the claimed cell count, at most N²"
    }
}
