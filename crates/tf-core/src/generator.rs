//! Unique tip generation

use std::collections::HashSet;

use log::debug;

use crate::error::{TipError, TipResult};
use crate::sampler::TipSampler;
use crate::tip::{Batch, Tip};
use crate::variant::Variant;

/// Default number of draws before generation gives up
pub const DEFAULT_DRAW_LIMIT: usize = 10_000;

/// Collects distinct tips from a sampler
pub struct UniqueTipGenerator<S: TipSampler> {
    sampler: S,
    draw_limit: usize,
}

impl<S: TipSampler> UniqueTipGenerator<S> {
    pub fn new(sampler: S) -> Self {
        Self {
            sampler,
            draw_limit: DEFAULT_DRAW_LIMIT,
        }
    }

    /// Builder: cap on sampler draws per batch
    pub fn with_draw_limit(mut self, limit: usize) -> Self {
        self.draw_limit = limit;
        self
    }

    pub fn sampler_mut(&mut self) -> &mut S {
        &mut self.sampler
    }

    /// Generate `count` tips, no two sharing the same numbers.
    ///
    /// Tips keep the order in which they were first drawn. Repeated draws are
    /// discarded; once `draw_limit` draws are spent the batch is abandoned.
    pub fn generate(&mut self, variant: Variant, count: usize) -> TipResult<Batch> {
        if count == 0 {
            return Err(TipError::InvalidBatchSize(
                "at least one tip must be requested".into(),
            ));
        }
        if count as u64 > variant.combination_count() {
            return Err(TipError::InvalidBatchSize(format!(
                "{} only has {} distinct tips",
                variant,
                variant.combination_count()
            )));
        }

        let mut seen: HashSet<Tip> = HashSet::with_capacity(count);
        let mut tips = Vec::with_capacity(count);
        let mut draws = 0usize;

        while tips.len() < count {
            if draws >= self.draw_limit {
                return Err(TipError::DrawLimitExceeded {
                    requested: count,
                    produced: tips.len(),
                    draws,
                });
            }
            draws += 1;

            let tip = self.sampler.draw(variant);
            if seen.insert(tip.clone()) {
                tips.push(tip);
            } else {
                debug!("Discarded repeated {} tip {}", variant, tip);
            }
        }

        debug!("Generated {} {} tips in {} draws", count, variant, draws);
        Batch::new(variant, tips)
    }
}

/// Generate `count` unique tips with a one-off generator
pub fn generate_unique_tips<S: TipSampler>(
    sampler: S,
    variant: Variant,
    count: usize,
) -> TipResult<Batch> {
    UniqueTipGenerator::new(sampler).generate(variant, count)
}
