//! Score counting.

use crate::board::Board;
use crate::player::{PlayerId, Roster};
use serde::{Deserialize, Serialize};
use tracing::{instrument, warn};

/// Number of cells owned by each player, indexed by [`PlayerId`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Scores {
    counts: Vec<usize>,
}

impl Scores {
    /// Cells owned by `player`; zero for unknown ids.
    pub fn get(&self, player: PlayerId) -> usize {
        self.counts.get(player.index()).copied().unwrap_or(0)
    }

    /// Sum over all players.
    pub fn total(&self) -> usize {
        self.counts.iter().sum()
    }

    /// Scores in turn order.
    pub fn iter(&self) -> impl Iterator<Item = (PlayerId, usize)> + '_ {
        self.counts
            .iter()
            .enumerate()
            .map(|(i, count)| (PlayerId::from(i), *count))
    }

    /// Every player tied for the highest score.
    pub fn leaders(&self) -> Vec<PlayerId> {
        let best = self.counts.iter().copied().max().unwrap_or(0);
        self.iter()
            .filter(|(_, count)| *count == best)
            .map(|(id, _)| id)
            .collect()
    }
}

/// Counts owned cells per player.
#[instrument(skip(board, roster))]
pub fn scores(board: &Board, roster: &Roster) -> Scores {
    let mut counts = vec![0; roster.len()];
    for (cell, owner) in board.cell_owners() {
        match counts.get_mut(owner.index()) {
            Some(count) => *count += 1,
            None => warn!(%cell, %owner, "Cell owned by player outside roster"),
        }
    }
    Scores { counts }
}
