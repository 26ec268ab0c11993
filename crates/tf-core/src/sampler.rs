//! Drawing single tips

use rand::prelude::*;
use rand::seq::index;
use rand_chacha::ChaCha8Rng;

use crate::tip::Tip;
use crate::variant::Variant;

/// Source of tips
pub trait TipSampler {
    /// Draw one tip for `variant`
    fn draw(&mut self, variant: Variant) -> Tip;
}

/// Uniform sampling without replacement from the variant's range
pub struct RandomSampler {
    rng: ChaCha8Rng,
}

impl RandomSampler {
    /// Create a sampler, seeded from the OS unless `seed` is given
    pub fn new(seed: Option<u64>) -> Self {
        let rng = match seed {
            Some(s) => ChaCha8Rng::seed_from_u64(s),
            None => ChaCha8Rng::from_os_rng(),
        };
        Self { rng }
    }
}

impl Default for RandomSampler {
    fn default() -> Self {
        Self::new(None)
    }
}

impl TipSampler for RandomSampler {
    fn draw(&mut self, variant: Variant) -> Tip {
        let span = usize::from(variant.highest() - variant.lowest()) + 1;
        let mut numbers: Vec<u8> = index::sample(&mut self.rng, span, variant.tip_len())
            .into_iter()
            .map(|i| variant.lowest() + i as u8)
            .collect();
        numbers.sort_unstable();

        // index::sample yields distinct indices below `span`
        Tip::from_sorted(numbers)
    }
}
