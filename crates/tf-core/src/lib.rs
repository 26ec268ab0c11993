//! # tf-core — Lottery tip engine for TipForge
//!
//! Generates lottery tips for Swisslos (6 of 42) and EuroMillions (5 of 49),
//! checks them and keeps the last batch on disk.
//!
//! ## Pipeline
//!
//! ```text
//! Variant ──► UniqueTipGenerator ──► Batch
//!              (TipSampler draws)      │
//!                                      ├── has_identical_tips   (duplicate check)
//!                                      ├── analyze_distribution (parity / runs)
//!                                      └── export_batch         (JSON record)
//! ```
//!
//! The variant is passed explicitly at every step; nothing here holds
//! session-wide state.

pub mod analysis;
pub mod batch_size;
pub mod config;
pub mod discovery;
pub mod duplicates;
pub mod error;
pub mod generator;
pub mod record;
pub mod sampler;
pub mod tip;
pub mod variant;

pub use analysis::{DistributionReport, Finding, Issue, analyze_distribution};
pub use batch_size::{BatchSizeError, parse_batch_size, validate_batch_size};
pub use config::TipConfig;
pub use discovery::{FoundRecord, find_record};
pub use duplicates::{find_identical_pair, has_identical_tips};
pub use error::{TipError, TipResult};
pub use generator::{UniqueTipGenerator, generate_unique_tips};
pub use record::{TipRecord, export_batch};
pub use sampler::{RandomSampler, TipSampler};
pub use tip::{Batch, Tip, tip_label};
pub use variant::Variant;
