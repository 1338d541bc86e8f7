//! Claim invariant: a cell is owned exactly when all four sides are drawn.

use super::Invariant;
use crate::game::GameState;
use crate::rules::is_enclosed;

/// Invariant: a cell is claimed iff its four bounding edges are drawn.
///
/// Also rules out owners recorded for cells that are not on the grid.
pub struct ClaimedIffEnclosedInvariant;

impl Invariant<GameState> for ClaimedIffEnclosedInvariant {
    fn holds(game: &GameState) -> bool {
        let board = game.board();
        let mut on_grid_claims = 0;

        for cell in game.grid().cells() {
            let claimed = board.cell_owner(cell).is_some();
            if claimed != is_enclosed(board, cell) {
                return false;
            }
            if claimed {
                on_grid_claims += 1;
            }
        }

        on_grid_claims == board.claimed_count()
    }

    fn description() -> &'static str {
        "A cell is claimed iff all four of its edges are drawn"
    }
}
