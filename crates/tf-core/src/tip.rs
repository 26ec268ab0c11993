//! Tips and batches of tips

use std::collections::HashSet;
use std::fmt;

use serde::Serialize;

use crate::error::{TipError, TipResult};
use crate::variant::Variant;

/// One lottery guess: distinct numbers in ascending order.
///
/// Equality and hashing compare the sorted numbers, so two tips are equal
/// exactly when they contain the same set of numbers.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(transparent)]
pub struct Tip {
    numbers: Vec<u8>,
}

impl Tip {
    /// Build a tip for `variant`, sorting the numbers.
    ///
    /// Fails when the count does not match the variant, a number is outside
    /// the variant's range, or a number repeats.
    pub fn new(variant: Variant, mut numbers: Vec<u8>) -> TipResult<Self> {
        if numbers.len() != variant.tip_len() {
            return Err(TipError::InvalidTip(format!(
                "{} tips have {} numbers, got {}",
                variant,
                variant.tip_len(),
                numbers.len()
            )));
        }

        if let Some(&n) = numbers.iter().find(|&&n| !variant.range().contains(&n)) {
            return Err(TipError::InvalidTip(format!(
                "{} is outside {}..={}",
                n,
                variant.lowest(),
                variant.highest()
            )));
        }

        numbers.sort_unstable();
        if let Some(pair) = numbers.windows(2).find(|w| w[0] == w[1]) {
            return Err(TipError::InvalidTip(format!("{} appears twice", pair[0])));
        }

        Ok(Self { numbers })
    }

    /// Wrap numbers already known to be sorted, distinct and in range
    pub(crate) fn from_sorted(numbers: Vec<u8>) -> Self {
        debug_assert!(numbers.windows(2).all(|w| w[0] < w[1]));
        Self { numbers }
    }

    pub fn numbers(&self) -> &[u8] {
        &self.numbers
    }

    pub fn len(&self) -> usize {
        self.numbers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.numbers.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = u8> + '_ {
        self.numbers.iter().copied()
    }
}

impl AsRef<[u8]> for Tip {
    fn as_ref(&self) -> &[u8] {
        &self.numbers
    }
}

impl fmt::Display for Tip {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("[")?;
        for (i, n) in self.numbers.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            write!(f, "{}", n)?;
        }
        f.write_str("]")
    }
}

/// Label used for the tip at `index` (0-based) in reports and records
pub fn tip_label(index: usize) -> String {
    format!("Tip {}", index + 1)
}

/// Tips generated together for one variant
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Batch {
    variant: Variant,
    tips: Vec<Tip>,
}

impl Batch {
    /// Assemble a batch, checking every tip belongs to `variant`
    pub fn new(variant: Variant, tips: Vec<Tip>) -> TipResult<Self> {
        let fits = |t: &Tip| {
            t.len() == variant.tip_len() && t.iter().all(|n| variant.range().contains(&n))
        };
        if let Some((i, tip)) = tips.iter().enumerate().find(|(_, t)| !fits(*t)) {
            return Err(TipError::InvalidTip(format!(
                "{} {} does not fit {}",
                tip_label(i),
                tip,
                variant
            )));
        }
        Ok(Self { variant, tips })
    }

    pub fn variant(&self) -> Variant {
        self.variant
    }

    pub fn tips(&self) -> &[Tip] {
        &self.tips
    }

    pub fn len(&self) -> usize {
        self.tips.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tips.is_empty()
    }

    /// Tips paired with their "Tip N" labels
    pub fn labeled(&self) -> impl Iterator<Item = (String, &Tip)> {
        self.tips.iter().enumerate().map(|(i, t)| (tip_label(i), t))
    }

    /// True when no two tips share the same numbers
    pub fn is_unique(&self) -> bool {
        let mut seen = HashSet::with_capacity(self.tips.len());
        self.tips.iter().all(|t| seen.insert(t))
    }
}
