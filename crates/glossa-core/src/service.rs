//! Detection service: validation, detector dispatch and logging.

use std::sync::Arc;

use tracing::{debug, warn};

use crate::error::{GlossaError, GlossaResult};
use crate::log::DetectionLog;
use crate::sampler::{self, CurvePoint, LengthConfidenceSeries};
use crate::stats::DetectionStats;
use crate::traits::{Detector, TextLimits};
use crate::types::{DetectionOutcome, DetectionRecord, DetectionSource};

/// Runs detections against the proposed and legacy detectors and records
/// every successful outcome in the shared [`DetectionLog`].
pub struct DetectionService {
    proposed: Arc<dyn Detector>,
    legacy: Arc<dyn Detector>,
    log: Arc<DetectionLog>,
    limits: TextLimits,
}

impl DetectionService {
    /// Create a new service.
    ///
    /// Fails if a detector is plugged into the wrong slot, so the simulated
    /// detector can never be recorded as the proposed one (or vice versa).
    pub fn new(
        proposed: Arc<dyn Detector>,
        legacy: Arc<dyn Detector>,
        log: Arc<DetectionLog>,
        limits: TextLimits,
    ) -> GlossaResult<Self> {
        for (slot, detector) in [
            (DetectionSource::Proposed, &proposed),
            (DetectionSource::Legacy, &legacy),
        ] {
            if detector.source() != slot {
                return Err(GlossaError::Configuration(format!(
                    "detector '{}' produces {} outcomes but was configured as {}",
                    detector.name(),
                    detector.source(),
                    slot
                )));
            }
        }

        Ok(Self {
            proposed,
            legacy,
            log,
            limits,
        })
    }

    /// Detect with the statistical (proposed) detector.
    pub fn detect_proposed(&self, text: &str) -> GlossaResult<DetectionOutcome> {
        self.detect(DetectionSource::Proposed, text)
    }

    /// Detect with the simulated (legacy) detector. The result is random.
    pub fn detect_legacy(&self, text: &str) -> GlossaResult<DetectionOutcome> {
        self.detect(DetectionSource::Legacy, text)
    }

    /// Detect with the detector for `source` and log the outcome.
    ///
    /// Text shorter than the minimum (after trimming) is rejected before any
    /// detector runs. Nothing is logged unless detection succeeds.
    pub fn detect(&self, source: DetectionSource, text: &str) -> GlossaResult<DetectionOutcome> {
        let text = text.trim();
        self.check_length(text)?;

        let detector = self.detector(source);
        let outcome = detector.detect(text).map_err(|e| {
            warn!(detector = detector.name(), error = %e, "Detection failed");
            e
        })?;

        debug!(
            detector = detector.name(),
            code = %outcome.best.code,
            confidence = outcome.best.confidence.fraction(),
            "Detection succeeded"
        );

        self.log.append(DetectionRecord::from_outcome(&outcome));
        Ok(outcome)
    }

    /// Per-line length/confidence series for both detectors. Not logged.
    pub fn sample_lines(&self, text: &str) -> LengthConfidenceSeries {
        sampler::sample_lines(
            self.legacy.as_ref(),
            self.proposed.as_ref(),
            text,
            &self.limits,
        )
    }

    /// Confidence of the proposed detector over growing prefixes of `text`.
    pub fn proposed_curve(&self, text: &str, step: usize) -> Vec<CurvePoint> {
        sampler::confidence_curve(self.proposed.as_ref(), text, step, &self.limits)
    }

    /// Statistics over the logged records of `source`.
    pub fn stats(&self, source: DetectionSource) -> DetectionStats {
        self.log.stats(source)
    }

    pub fn log(&self) -> &Arc<DetectionLog> {
        &self.log
    }

    pub fn limits(&self) -> &TextLimits {
        &self.limits
    }

    pub fn detector(&self, source: DetectionSource) -> &Arc<dyn Detector> {
        match source {
            DetectionSource::Proposed => &self.proposed,
            DetectionSource::Legacy => &self.legacy,
        }
    }

    fn check_length(&self, text: &str) -> GlossaResult<()> {
        let length = text.chars().count();
        if length < self.limits.min_chars {
            return Err(GlossaError::too_short(length, self.limits.min_chars));
        }
        Ok(())
    }
}
