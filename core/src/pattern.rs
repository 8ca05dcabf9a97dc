use alloc::collections::BTreeSet;
use alloc::vec::Vec;
use serde::{Deserialize, Serialize};

use crate::*;

/// The tiles the player has to reproduce in a round.
///
/// Indices are unique and in range. Generation order is kept so effects are emitted deterministically.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Pattern {
    tiles: Vec<TileIndex>,
    total_tiles: TileCount,
}

impl Pattern {
    pub fn from_indices(total_tiles: TileCount, indices: &[TileIndex]) -> Result<Self> {
        let mut seen = BTreeSet::new();
        for &index in indices {
            if index >= total_tiles {
                return Err(RoundError::InvalidTile(index));
            }
            if !seen.insert(index) {
                return Err(RoundError::DuplicateTile(index));
            }
        }
        Ok(Self::from_unique_unchecked(total_tiles, indices.to_vec()))
    }

    pub(crate) fn from_unique_unchecked(total_tiles: TileCount, tiles: Vec<TileIndex>) -> Self {
        Self { tiles, total_tiles }
    }

    pub fn len(&self) -> usize {
        self.tiles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tiles.is_empty()
    }

    pub fn total_tiles(&self) -> TileCount {
        self.total_tiles
    }

    pub fn contains(&self, index: TileIndex) -> bool {
        self.tiles.contains(&index)
    }

    pub fn as_slice(&self) -> &[TileIndex] {
        &self.tiles
    }

    pub fn iter(&self) -> impl Iterator<Item = TileIndex> + '_ {
        self.tiles.iter().copied()
    }

    /// Set equality, order does not matter.
    pub fn matches(&self, selection: &[TileIndex]) -> bool {
        let expected: BTreeSet<_> = self.tiles.iter().collect();
        let actual: BTreeSet<_> = selection.iter().collect();
        expected == actual
    }
}
