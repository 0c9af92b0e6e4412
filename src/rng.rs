use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Random source for everything the engine rolls: starting level, stat
/// variances and attack picks.
///
/// Live play uses [`StatRng::new_random`]. Tests either seed a stream with
/// [`StatRng::from_seed`] or script every outcome with [`StatRng::new_for_test`].
pub struct StatRng {
    source: RngSource,
}

enum RngSource {
    Live(StdRng),
    Scripted { outcomes: Vec<u8>, index: usize },
}

impl StatRng {
    pub fn new_random() -> Self {
        Self {
            source: RngSource::Live(StdRng::from_rng(&mut rand::rng())),
        }
    }

    pub fn from_seed(seed: u64) -> Self {
        Self {
            source: RngSource::Live(StdRng::seed_from_u64(seed)),
        }
    }

    /// Outcomes are handed out in order, each reduced into the requested range.
    pub fn new_for_test(outcomes: Vec<u8>) -> Self {
        Self {
            source: RngSource::Scripted { outcomes, index: 0 },
        }
    }

    /// Uniform draw in `[0, max_inclusive]`.
    pub fn next_in_range(&mut self, reason: &str, max_inclusive: u8) -> u8 {
        let outcome = match &mut self.source {
            RngSource::Live(rng) => rng.random_range(0..=max_inclusive),
            RngSource::Scripted { outcomes, index } => {
                if *index >= outcomes.len() {
                    panic!(
                        "StatRng exhausted! Tried to get a value for: '{}'. Need more scripted values.",
                        reason
                    );
                }
                let raw = outcomes[*index];
                *index += 1;
                (raw as u16 % (max_inclusive as u16 + 1)) as u8
            }
        };

        log::trace!("[RNG] Rolled {} (0..={}) for: {}", outcome, max_inclusive, reason);
        outcome
    }
}
