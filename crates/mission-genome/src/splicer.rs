//! Stochastic recombination of two parent genomes.

use mission_core::{Genome, Result, SpliceConfig, Symbol};
use rand::{Rng, RngCore, SeedableRng};
use rand_chacha::ChaCha8Rng;

/// Produces a child genome from two parents
pub trait Splice {
    fn splice(&mut self, left: &Genome, right: &Genome) -> Genome;
}

pub struct Splicer<R: RngCore = ChaCha8Rng> {
    config: SpliceConfig,
    rng: R,
}

impl Splicer<ChaCha8Rng> {
    pub fn from_entropy(config: SpliceConfig) -> Self {
        Self::with_rng(config, ChaCha8Rng::from_entropy())
    }

    pub fn seeded(config: SpliceConfig, seed: u64) -> Self {
        Self::with_rng(config, ChaCha8Rng::seed_from_u64(seed))
    }

    /// Validated splicer, seeded when `seed` is given
    pub fn from_config(config: &SpliceConfig, seed: Option<u64>) -> Result<Self> {
        config.validate()?;
        Ok(match seed {
            Some(seed) => Self::seeded(config.clone(), seed),
            None => Self::from_entropy(config.clone()),
        })
    }
}

impl<R: RngCore> Splicer<R> {
    pub fn with_rng(config: SpliceConfig, rng: R) -> Self {
        Self { config, rng }
    }

    fn random_symbol(&mut self) -> Symbol {
        Symbol::ALL[self.rng.gen_range(0..Symbol::ALL.len())]
    }
}

impl<R: RngCore> Splice for Splicer<R> {
    /// Walk both parents position by position. Later positions see higher
    /// replacement and insertion thresholds (up to twice the base rate).
    ///
    /// One draw decides each position. The insertion check reuses that draw
    /// after it has already missed the replacement threshold, so insertion
    /// only fires when `insertion_probability` exceeds
    /// `replacement_probability`.
    fn splice(&mut self, left: &Genome, right: &Genome) -> Genome {
        let span = left.len().max(right.len());
        let mut child = Vec::with_capacity(span);
        let (mut deleted, mut replaced, mut inserted) = (0usize, 0usize, 0usize);

        for i in 0..span {
            let draw: f64 = self.rng.gen();
            let normalizer = 1.0 + i as f64 / span as f64;

            // Drop this position
            if draw <= self.config.deletion_probability {
                deleted += 1;
                continue;
            }

            // Replace with a random symbol
            if draw <= self.config.replacement_probability * normalizer {
                child.push(self.random_symbol());
                replaced += 1;
                continue;
            }

            // Copy from either parent
            let base = match (left.get(i), right.get(i)) {
                (Some(l), Some(r)) => {
                    if self.rng.gen_bool(0.5) {
                        r
                    } else {
                        l
                    }
                }
                (Some(s), None) | (None, Some(s)) => s,
                (None, None) => continue,
            };
            child.push(base);

            // Same draw as above
            if draw <= self.config.insertion_probability * normalizer {
                child.push(self.random_symbol());
                inserted += 1;
            }
        }

        tracing::debug!(
            left_len = left.len(),
            right_len = right.len(),
            child_len = child.len(),
            deleted,
            replaced,
            inserted,
            "Spliced genomes"
        );

        Genome::new(child)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use rand::rngs::mock::StepRng;

    fn genome(text: &str) -> Genome {
        text.parse().unwrap()
    }

    /// Every draw lands just below 1.0 and every coin flip picks the left parent
    fn high_draws() -> StepRng {
        StepRng::new(u64::MAX, 0)
    }

    fn copy_only() -> SpliceConfig {
        SpliceConfig {
            deletion_probability: 0.0,
            replacement_probability: 0.0,
            insertion_probability: 0.0,
        }
    }

    #[test]
    fn test_identical_single_symbols() {
        let mut splicer = Splicer::with_rng(copy_only(), high_draws());
        let child = splicer.splice(&genome("G"), &genome("G"));
        assert_eq!(child, genome("G"));
    }

    #[test]
    fn test_copy_path_prefers_longer_parent_tail() {
        let mut splicer = Splicer::with_rng(copy_only(), high_draws());
        let child = splicer.splice(&genome("GA"), &genome("CTTAC"));
        // coin flips pick left while both parents have symbols
        assert_eq!(child, genome("GATAC"));
    }

    #[test]
    fn test_full_deletion_gives_empty_child() {
        let config = SpliceConfig {
            deletion_probability: 1.0,
            ..Default::default()
        };
        let mut splicer = Splicer::seeded(config, 42);
        let child = splicer.splice(&genome("GATTACA"), &genome("CCGG"));
        assert!(child.is_empty());
    }

    #[test]
    fn test_empty_parents() {
        let mut splicer = Splicer::seeded(SpliceConfig::default(), 1);
        assert!(splicer.splice(&Genome::empty(), &Genome::empty()).is_empty());
    }

    #[test]
    fn test_full_replacement_ignores_parents_length_only() {
        let config = SpliceConfig {
            deletion_probability: 0.0,
            replacement_probability: 1.0,
            insertion_probability: 1.0,
        };
        let mut splicer = Splicer::seeded(config, 7);
        let child = splicer.splice(&genome("GGGGGG"), &genome("GGG"));
        // replacement wins before insertion can be reached
        assert_eq!(child.len(), 6);
    }

    #[test]
    fn test_insertion_reuses_replacement_draw() {
        // Documented quirk: a single draw per position. With no replacement
        // and an insertion threshold of 1, every copied symbol gains a follower.
        let config = SpliceConfig {
            deletion_probability: 0.0,
            replacement_probability: 0.0,
            insertion_probability: 1.0,
        };
        let mut splicer = Splicer::seeded(config, 99);
        let parent = genome("GATC");
        let child = splicer.splice(&parent, &parent);

        assert_eq!(child.len(), 2 * parent.len());
        for (i, symbol) in parent.iter().enumerate() {
            assert_eq!(child.get(2 * i), Some(symbol));
        }
    }

    #[test]
    fn test_insertion_below_replacement_never_fires() {
        let config = SpliceConfig {
            deletion_probability: 0.0,
            replacement_probability: 0.5,
            insertion_probability: 0.4,
        };
        let mut splicer = Splicer::seeded(config, 3);
        for _ in 0..50 {
            let child = splicer.splice(&genome("GATCGATC"), &genome("CTAG"));
            assert!(child.len() <= 8);
        }
    }

    #[test]
    fn test_seeded_splicers_agree() {
        let left = genome("GATTACAGATTACA");
        let right = genome("CCCTTTGGGAAA");
        let mut a = Splicer::seeded(SpliceConfig::default(), 2024);
        let mut b = Splicer::seeded(SpliceConfig::default(), 2024);
        assert_eq!(a.splice(&left, &right), b.splice(&left, &right));
    }

    #[test]
    fn test_from_config_validates() {
        let bad = SpliceConfig {
            insertion_probability: -0.1,
            ..Default::default()
        };
        assert!(Splicer::from_config(&bad, Some(1)).is_err());
        assert!(Splicer::from_config(&SpliceConfig::default(), None).is_ok());
    }

    fn arb_genome() -> impl Strategy<Value = Genome> {
        proptest::collection::vec(0u8..4, 0..48)
            .prop_map(|ranks| ranks.into_iter().filter_map(Symbol::from_rank).collect())
    }

    proptest! {
        #[test]
        fn copy_path_matches_a_parent(left in arb_genome(), right in arb_genome()) {
            let mut splicer = Splicer::with_rng(copy_only(), high_draws());
            let child = splicer.splice(&left, &right);

            prop_assert_eq!(child.len(), left.len().max(right.len()));
            for (i, symbol) in child.iter().enumerate() {
                prop_assert!(left.get(i) == Some(symbol) || right.get(i) == Some(symbol));
            }
        }

        #[test]
        fn child_length_is_bounded(left in arb_genome(), right in arb_genome(), seed in any::<u64>()) {
            let mut splicer = Splicer::seeded(SpliceConfig::default(), seed);
            let child = splicer.splice(&left, &right);
            prop_assert!(child.len() <= 2 * left.len().max(right.len()));
        }
    }
}
