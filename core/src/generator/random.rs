use alloc::collections::BTreeSet;
use alloc::vec::Vec;

use super::*;

/// Draws tile indices uniformly, rejecting repeats until the pattern is full.
#[derive(Clone, Debug, PartialEq)]
pub struct RandomPatternGenerator {
    seed: u64,
}

impl RandomPatternGenerator {
    pub fn new(seed: u64) -> Self {
        Self { seed }
    }
}

impl PatternGenerator for RandomPatternGenerator {
    fn generate(self, config: RoundConfig) -> Pattern {
        use rand::rngs::SmallRng;
        use rand::{Rng, SeedableRng};

        let total_tiles = config.total_tiles();
        if config.pattern_size > total_tiles {
            log::warn!(
                "Pattern cannot fit, requested {} but only {} tiles, generated full grid",
                config.pattern_size,
                total_tiles
            );
        }
        let wanted = usize::from(config.pattern_size.min(total_tiles));

        let mut rng = SmallRng::seed_from_u64(self.seed);
        let mut drawn = BTreeSet::new();
        let mut tiles = Vec::with_capacity(wanted);
        while tiles.len() < wanted {
            let index: TileIndex = rng.random_range(0..total_tiles);
            if drawn.insert(index) {
                tiles.push(index);
            }
        }

        Pattern::from_unique_unchecked(total_tiles, tiles)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_size_yields_exact_unique_in_range_pattern() {
        for grid_side in 1..=6 {
            let total_tiles = mult(grid_side, grid_side);
            for pattern_size in 1..=total_tiles {
                for seed in 0..8 {
                    let config = RoundConfig::new(grid_side, pattern_size, 500);
                    let pattern = RandomPatternGenerator::new(seed).generate(config);

                    assert_eq!(pattern.len(), usize::from(pattern_size));
                    assert_eq!(pattern.total_tiles(), total_tiles);
                    let unique: BTreeSet<_> = pattern.iter().collect();
                    assert_eq!(unique.len(), pattern.len());
                    assert!(pattern.iter().all(|index| index < total_tiles));
                }
            }
        }
    }

    #[test]
    fn same_seed_same_pattern() {
        let config = RoundConfig::default();
        let a = RandomPatternGenerator::new(42).generate(config);
        let b = RandomPatternGenerator::new(42).generate(config);
        assert_eq!(a, b);
    }

    #[test]
    fn oversized_request_is_capped() {
        let config = RoundConfig::new_unchecked(2, 9, 500);
        let pattern = RandomPatternGenerator::new(7).generate(config);
        assert_eq!(pattern.len(), 4);
    }
}
