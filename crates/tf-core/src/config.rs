//! TipForge configuration

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::{TipError, TipResult};
use crate::generator::DEFAULT_DRAW_LIMIT;
use crate::variant::Variant;

/// Default record file, relative to the working directory
pub const DEFAULT_RECORD_FILE: &str = "tips.json";

/// Draws allowed per requested tip, leaving room for repeated draws
pub const DRAW_HEADROOM: usize = 10;

/// Configuration for a tip session
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct TipConfig {
    /// Largest batch a user may request
    pub max_tips: usize,

    /// Prompt attempts before the driver gives up
    pub max_attempts: u32,

    /// Sampler draws allowed per batch
    pub draw_limit: usize,

    /// Where the record is written and read
    pub record_path: PathBuf,

    /// Random seed (None = OS entropy)
    pub seed: Option<u64>,
}

impl Default for TipConfig {
    fn default() -> Self {
        Self {
            max_tips: 20,
            max_attempts: 10,
            draw_limit: DEFAULT_DRAW_LIMIT,
            record_path: PathBuf::from(DEFAULT_RECORD_FILE),
            seed: None,
        }
    }
}

impl TipConfig {
    /// Load a JSON config file; missing fields take their defaults
    pub fn from_file<P: AsRef<Path>>(path: P) -> TipResult<Self> {
        let text = fs::read_to_string(path.as_ref())?;
        let config: TipConfig = serde_json::from_str(&text)?;
        config.validate()?;
        Ok(config)
    }

    /// Reject settings the driver cannot work with
    pub fn validate(&self) -> TipResult<()> {
        let needed = Variant::ALL.iter().map(|v| v.min_batch()).max().unwrap_or(1);
        if self.max_tips < needed {
            return Err(TipError::Config(format!(
                "max_tips must be at least {} so every variant has a valid batch size",
                needed
            )));
        }
        if self.max_attempts == 0 {
            return Err(TipError::Config("max_attempts must be at least 1".into()));
        }
        let min_draws = self.max_tips.saturating_mul(DRAW_HEADROOM);
        if self.draw_limit < min_draws {
            return Err(TipError::Config(format!(
                "draw_limit ({}) must be at least {} for max_tips {}",
                self.draw_limit, min_draws, self.max_tips
            )));
        }
        if self.record_path.as_os_str().is_empty() {
            return Err(TipError::Config("record_path is empty".into()));
        }
        Ok(())
    }

    /// Builder: set maximum batch size
    pub fn with_max_tips(mut self, n: usize) -> Self {
        self.max_tips = n;
        self
    }

    /// Builder: set prompt attempts
    pub fn with_max_attempts(mut self, n: u32) -> Self {
        self.max_attempts = n;
        self
    }

    /// Builder: set draw limit
    pub fn with_draw_limit(mut self, n: usize) -> Self {
        self.draw_limit = n;
        self
    }

    /// Builder: set record path
    pub fn with_record_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.record_path = path.into();
        self
    }

    /// Builder: set seed for reproducibility
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::batch_size::parse_batch_size;
    use crate::generator::UniqueTipGenerator;
    use crate::sampler::RandomSampler;

    #[test]
    fn test_default_config() {
        let config = TipConfig::default();
        assert_eq!(config.max_tips, 20);
        assert_eq!(config.max_attempts, 10);
        assert_eq!(config.record_path, PathBuf::from("tips.json"));
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_builder() {
        let config = TipConfig::default()
            .with_max_tips(50)
            .with_seed(42)
            .with_record_path("out/tips.json");

        assert_eq!(config.max_tips, 50);
        assert_eq!(config.seed, Some(42));
        assert_eq!(config.record_path, PathBuf::from("out/tips.json"));
    }

    #[test]
    fn test_validate_rejects_bad_values() {
        assert!(TipConfig::default().with_max_tips(0).validate().is_err());
        assert!(TipConfig::default().with_max_attempts(0).validate().is_err());
        assert!(
            TipConfig::default()
                .with_max_tips(50)
                .with_draw_limit(10)
                .validate()
                .is_err()
        );
    }

    #[test]
    fn test_validate_rejects_max_below_min_batch() {
        let config = TipConfig::default().with_max_tips(1);
        assert!(matches!(config.validate(), Err(TipError::Config(_))));

        // with max_tips = 1 no Swisslos size would ever pass
        assert!(parse_batch_size("1", Variant::Swisslos, 1).is_err());
        assert!(parse_batch_size("2", Variant::Swisslos, 1).is_err());

        assert!(TipConfig::default().with_max_tips(2).validate().is_ok());
    }

    #[test]
    fn test_validate_requires_draw_headroom() {
        let tight = TipConfig::default()
            .with_max_tips(20_000)
            .with_draw_limit(20_000);
        assert!(matches!(tight.validate(), Err(TipError::Config(_))));

        let roomy = TipConfig::default()
            .with_max_tips(20_000)
            .with_draw_limit(200_000);
        assert!(roomy.validate().is_ok());

        let batch = UniqueTipGenerator::new(RandomSampler::new(Some(11)))
            .with_draw_limit(roomy.draw_limit)
            .generate(Variant::EuroMillions, roomy.max_tips)
            .unwrap();
        assert_eq!(batch.len(), 20_000);
    }

    #[test]
    fn test_from_file_partial() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("tipforge.json");
        fs::write(&path, r#"{ "max_tips": 50, "seed": 9 }"#).unwrap();

        let config = TipConfig::from_file(&path).unwrap();
        assert_eq!(config.max_tips, 50);
        assert_eq!(config.seed, Some(9));
        assert_eq!(config.max_attempts, 10);
    }

    #[test]
    fn test_from_file_invalid() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("tipforge.json");
        fs::write(&path, r#"{ "max_tips": 0 }"#).unwrap();

        assert!(matches!(TipConfig::from_file(&path), Err(TipError::Config(_))));
    }
}
