use crate::*;
pub use random::*;

mod random;

pub trait PatternGenerator {
    fn generate(self, config: RoundConfig) -> Pattern;
}

/// A fixed pattern generates itself, whatever the configured size.
impl PatternGenerator for Pattern {
    fn generate(self, config: RoundConfig) -> Pattern {
        if self.len() != usize::from(config.pattern_size) || self.total_tiles() != config.total_tiles()
        {
            log::warn!(
                "Fixed pattern does not match configuration, pattern has {} of {} tiles, configured {} of {}",
                self.len(),
                self.total_tiles(),
                config.pattern_size,
                config.total_tiles()
            );
        }
        self
    }
}
