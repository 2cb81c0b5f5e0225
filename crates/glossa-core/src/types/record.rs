//! Detection log records.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::{Confidence, DetectionOutcome, DetectionSource};

/// One logged outcome of a detection call.
///
/// Records are immutable: fields are only readable through accessors.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DetectionRecord {
    id: Uuid,
    language: String,
    code: String,
    confidence: Confidence,
    source: DetectionSource,
    detected_at: DateTime<Utc>,
}

impl DetectionRecord {
    /// Create a new record stamped with the current time.
    pub fn new(
        language: impl Into<String>,
        code: impl AsRef<str>,
        confidence: Confidence,
        source: DetectionSource,
    ) -> Self {
        Self {
            id: Uuid::new_v4(),
            language: language.into(),
            code: code.as_ref().to_uppercase(),
            confidence,
            source,
            detected_at: Utc::now(),
        }
    }

    /// Build the record for an outcome's best candidate.
    pub fn from_outcome(outcome: &DetectionOutcome) -> Self {
        Self::new(
            outcome.best.language.clone(),
            &outcome.best.code,
            outcome.best.confidence,
            outcome.source,
        )
    }

    pub fn id(&self) -> Uuid {
        self.id
    }

    pub fn language(&self) -> &str {
        &self.language
    }

    pub fn code(&self) -> &str {
        &self.code
    }

    pub fn confidence(&self) -> Confidence {
        self.confidence
    }

    pub fn source(&self) -> DetectionSource {
        self.source
    }

    pub fn detected_at(&self) -> DateTime<Utc> {
        self.detected_at
    }
}
