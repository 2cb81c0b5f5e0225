//! Detector trait and related types.

use serde::{Deserialize, Serialize};

use crate::error::GlossaResult;
use crate::types::{DetectionOutcome, DetectionSource};

/// Core Detector trait - every language detector implements this.
///
/// Detection is CPU-bound and synchronous; async callers should run it on
/// a blocking thread.
pub trait Detector: Send + Sync {
    /// Detect the language of `text`, returning up to five ranked candidates.
    fn detect(&self, text: &str) -> GlossaResult<DetectionOutcome>;

    /// Which source tag this detector's outcomes carry.
    fn source(&self) -> DetectionSource;

    /// Get the detector name.
    fn name(&self) -> &str;
}

/// Detector configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct DetectorConfig {
    /// Seed for the simulated legacy detector. Entropy-seeded when unset.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub legacy_seed: Option<u64>,
}

/// Text length limits, counted in characters.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TextLimits {
    /// Minimum trimmed length before any detector is invoked.
    pub min_chars: usize,
    /// Maximum accepted form input length.
    pub max_chars: usize,
}

impl Default for TextLimits {
    fn default() -> Self {
        Self {
            min_chars: 3,
            max_chars: 10_000,
        }
    }
}
