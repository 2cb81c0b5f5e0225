//! glossa-core - Core library for glossa.
//!
//! This crate provides the types, the [`Detector`] trait, the in-memory
//! [`DetectionLog`] and the statistics aggregation used by the glossa
//! language detection comparison service.
//!
//! # Example
//!
//! ```ignore
//! use std::sync::Arc;
//! use glossa_core::{DetectionLog, DetectionService, DetectionSource, TextLimits};
//!
//! let log = Arc::new(DetectionLog::new());
//! let service = DetectionService::new(proposed, legacy, log.clone(), TextLimits::default())?;
//!
//! let outcome = service.detect_proposed("Bonjour, comment allez-vous?")?;
//! println!("{} ({})", outcome.best.language, outcome.best.confidence.percent());
//!
//! let stats = log.stats(DetectionSource::Proposed);
//! assert_eq!(stats.total_detections, 1);
//! ```

pub mod config;
pub mod error;
pub mod form;
pub mod languages;
pub mod log;
pub mod sampler;
pub mod service;
pub mod stats;
pub mod traits;
pub mod types;

// Re-export commonly used types
pub use config::GlossaConfig;
pub use error::{ErrorCategory, GlossaError, GlossaResult};
pub use form::{DetectionForm, ValidatedForm};
pub use log::DetectionLog;
pub use sampler::{confidence_curve, CurvePoint, LengthConfidenceSeries, LinePoint};
pub use service::DetectionService;
pub use stats::{compute_stats, DetectionStats, LanguageShare};
pub use traits::{Detector, DetectorConfig, TextLimits};
pub use types::{Confidence, DetectionOutcome, DetectionRecord, DetectionSource, LanguageCandidate};
