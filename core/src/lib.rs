#![no_std]

extern crate alloc;

use serde::{Deserialize, Serialize};

pub use controller::*;
pub use error::*;
pub use generator::*;
pub use marks::*;
pub use pattern::*;
pub use presenter::*;
pub use types::*;

mod controller;
mod error;
mod generator;
mod marks;
mod pattern;
mod presenter;
mod types;

#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoundConfig {
    pub grid_side: GridSide,
    pub pattern_size: TileCount,
    pub flash_duration_ms: Millis,
}

impl RoundConfig {
    pub const DEFAULT_GRID_SIDE: GridSide = 5;
    pub const DEFAULT_PATTERN_SIZE: TileCount = 5;
    pub const DEFAULT_FLASH_DURATION_MS: Millis = 500;
    pub const MAX_FLASH_DURATION_MS: Millis = 60_000;

    pub const fn new_unchecked(
        grid_side: GridSide,
        pattern_size: TileCount,
        flash_duration_ms: Millis,
    ) -> Self {
        Self {
            grid_side,
            pattern_size,
            flash_duration_ms,
        }
    }

    /// Out-of-range values are clamped to the nearest valid one.
    pub fn new(grid_side: GridSide, pattern_size: TileCount, flash_duration_ms: Millis) -> Self {
        let grid_side = grid_side.clamp(1, GridSide::MAX);
        Self::new_unchecked(grid_side, 1, Self::DEFAULT_FLASH_DURATION_MS)
            .with_pattern_size(pattern_size)
            .with_flash_duration_ms(flash_duration_ms)
    }

    pub const fn total_tiles(&self) -> TileCount {
        mult(self.grid_side, self.grid_side)
    }

    pub fn with_pattern_size(self, pattern_size: TileCount) -> Self {
        Self {
            pattern_size: pattern_size.clamp(1, self.total_tiles()),
            ..self
        }
    }

    pub fn with_flash_duration_ms(self, flash_duration_ms: Millis) -> Self {
        Self {
            flash_duration_ms: flash_duration_ms.min(Self::MAX_FLASH_DURATION_MS),
            ..self
        }
    }

    pub fn flash_duration_secs(&self) -> f64 {
        f64::from(self.flash_duration_ms) / 1000.
    }
}

impl Default for RoundConfig {
    fn default() -> Self {
        Self::new_unchecked(
            Self::DEFAULT_GRID_SIDE,
            Self::DEFAULT_PATTERN_SIZE,
            Self::DEFAULT_FLASH_DURATION_MS,
        )
    }
}

/// Converts a duration in (possibly fractional) seconds, negative and NaN become zero.
pub fn secs_to_millis(secs: f64) -> Millis {
    // float to int casts saturate, NaN maps to 0
    (secs * 1000. + 0.5) as Millis
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pattern_size_is_clamped_to_grid() {
        let config = RoundConfig::new(5, 30, 500);
        assert_eq!(config.pattern_size, 25);

        let config = RoundConfig::new(5, 0, 500);
        assert_eq!(config.pattern_size, 1);
    }

    #[test]
    fn grid_side_is_at_least_one() {
        let config = RoundConfig::new(0, 3, 500);
        assert_eq!(config.grid_side, 1);
        assert_eq!(config.total_tiles(), 1);
        assert_eq!(config.pattern_size, 1);
    }

    #[test]
    fn flash_duration_is_capped() {
        let config = RoundConfig::default().with_flash_duration_ms(Millis::MAX);
        assert_eq!(config.flash_duration_ms, RoundConfig::MAX_FLASH_DURATION_MS);
    }

    #[test]
    fn seconds_convert_to_non_negative_millis() {
        assert_eq!(secs_to_millis(0.5), 500);
        assert_eq!(secs_to_millis(1.25), 1250);
        assert_eq!(secs_to_millis(-3.), 0);
        assert_eq!(secs_to_millis(f64::NAN), 0);
    }

    #[test]
    fn default_matches_classic_board() {
        let config = RoundConfig::default();
        assert_eq!(config.total_tiles(), 25);
        assert_eq!(config.pattern_size, 5);
        assert_eq!(config.flash_duration_secs(), 0.5);
    }
}
