use thiserror::Error;

use crate::TileIndex;

#[derive(Error, Debug, Copy, Clone, PartialEq, Eq)]
pub enum RoundError {
    #[error("Tile {0} is outside the grid")]
    InvalidTile(TileIndex),
    #[error("Tile {0} appears more than once in the pattern")]
    DuplicateTile(TileIndex),
}

pub type Result<T> = core::result::Result<T, RoundError>;
