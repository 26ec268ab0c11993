//! Supported lottery formats

use std::fmt;
use std::ops::RangeInclusive;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Lottery format: number range plus numbers per tip
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Variant {
    /// 6 numbers out of 1..=42
    Swisslos,
    /// 5 numbers out of 1..=49
    EuroMillions,
}

impl Variant {
    pub const ALL: [Variant; 2] = [Variant::Swisslos, Variant::EuroMillions];

    /// Smallest number that may be drawn
    pub fn lowest(self) -> u8 {
        1
    }

    /// Largest number that may be drawn
    pub fn highest(self) -> u8 {
        match self {
            Variant::Swisslos => 42,
            Variant::EuroMillions => 49,
        }
    }

    pub fn range(self) -> RangeInclusive<u8> {
        self.lowest()..=self.highest()
    }

    /// Numbers per tip
    pub fn tip_len(self) -> usize {
        match self {
            Variant::Swisslos => 6,
            Variant::EuroMillions => 5,
        }
    }

    /// Smallest batch a user may request.
    ///
    /// Swisslos requires at least two tips per ticket.
    pub fn min_batch(self) -> usize {
        match self {
            Variant::Swisslos => 2,
            Variant::EuroMillions => 1,
        }
    }

    /// Number of distinct tips this format allows (n choose k)
    pub fn combination_count(self) -> u64 {
        let n = u64::from(self.highest() - self.lowest() + 1);
        let k = self.tip_len() as u64;
        (0..k).fold(1u64, |acc, i| acc * (n - i) / (i + 1))
    }

    /// Guess the format of a stored tip from its length
    pub fn infer_from_len(len: usize) -> Self {
        if len == Variant::EuroMillions.tip_len() {
            Variant::EuroMillions
        } else {
            Variant::Swisslos
        }
    }

    pub fn display_name(self) -> &'static str {
        match self {
            Variant::Swisslos => "Swisslos",
            Variant::EuroMillions => "EuroMillions",
        }
    }
}

impl fmt::Display for Variant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.display_name())
    }
}

impl FromStr for Variant {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().replace(['-', '_', ' '], "").as_str() {
            "swisslos" => Ok(Variant::Swisslos),
            "euromillions" => Ok(Variant::EuroMillions),
            other => Err(format!("unknown lottery variant '{}'", other)),
        }
    }
}
