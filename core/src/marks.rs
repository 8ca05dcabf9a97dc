use bitflags::bitflags;
use serde::{Deserialize, Serialize};

bitflags! {
    /// Visual marks a tile can carry, several may be set at once (e.g. selected + incorrect).
    #[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
    pub struct TileMarks: u8 {
        const SELECTED  = 1;
        const CORRECT   = 1 << 1;
        const INCORRECT = 1 << 2;
        const FLASHING  = 1 << 3;
    }
}

bitflags! {
    #[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
    pub struct Controls: u8 {
        const START  = 1;
        const RESET  = 1 << 1;
        const REVEAL = 1 << 2;
    }
}

/// How the result line should be presented.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum ResultTone {
    #[default]
    Neutral,
    Success,
    Failure,
    Info,
}
