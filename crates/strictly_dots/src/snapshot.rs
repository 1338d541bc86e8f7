//! Read-only board view handed to the presentation layer.

use crate::player::PlayerId;
use crate::rules::Scores;
use crate::topology::{Cell, Edge};
use derive_getters::Getters;
use serde::{Deserialize, Deserializer, Serialize};

/// Everything a renderer needs to draw one frame.
#[derive(Debug, Clone, PartialEq, Eq, Getters, Serialize, Deserialize, derive_new::new)]
pub struct BoardSnapshot {
    /// Cells per side.
    grid_size: usize,
    /// Drawn edges and who drew them, in canonical edge order.
    #[serde(deserialize_with = "sorted_by_key")]
    drawn_edges: Vec<(Edge, PlayerId)>,
    /// Claimed cells and their owners, in row-major order.
    #[serde(deserialize_with = "sorted_by_key")]
    cell_owners: Vec<(Cell, PlayerId)>,
    /// Cells owned per player.
    scores: Scores,
    /// Whose turn it is.
    active_player: PlayerId,
}

impl BoardSnapshot {
    /// Owner of `cell` in this snapshot.
    pub fn owner_of(&self, cell: Cell) -> Option<PlayerId> {
        self.cell_owners
            .binary_search_by_key(&cell, |(c, _)| *c)
            .ok()
            .map(|i| self.cell_owners[i].1)
    }

    /// True iff `edge` was drawn when the snapshot was taken.
    pub fn is_drawn(&self, edge: Edge) -> bool {
        self.drawn_edges
            .binary_search_by_key(&edge, |(e, _)| *e)
            .is_ok()
    }
}

/// Restores key order on incoming lookup tables so binary search stays valid.
fn sorted_by_key<'de, D, K, V>(deserializer: D) -> Result<Vec<(K, V)>, D::Error>
where
    D: Deserializer<'de>,
    K: Deserialize<'de> + Ord,
    V: Deserialize<'de>,
{
    let mut entries = Vec::<(K, V)>::deserialize(deserializer)?;
    entries.sort_by(|x, y| x.0.cmp(&y.0));
    Ok(entries)
}
