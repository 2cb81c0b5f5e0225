//! Length-vs-confidence sampling for the visualization charts.
//!
//! Sampling runs detectors directly and never touches the detection log.
//! A line that cannot be detected contributes an `UNKNOWN` point with zero
//! confidence instead of failing the batch.

use serde::{Deserialize, Serialize};

use crate::traits::{Detector, TextLimits};

/// Label used when a line could not be detected.
pub const UNKNOWN_CODE: &str = "UNKNOWN";

/// Upper bound on the points of one confidence curve.
pub const MAX_CURVE_POINTS: usize = 50;

/// One chart point for one input line.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LinePoint {
    /// Line length in characters.
    pub length: usize,
    /// Detected code, or [`UNKNOWN_CODE`].
    pub code: String,
    /// Confidence as a fraction in `[0, 1]`.
    pub confidence: f64,
    /// `"<CODE> (<confidence:.2>)"`.
    pub label: String,
}

impl LinePoint {
    fn new(length: usize, code: &str, confidence: f64) -> Self {
        Self {
            length,
            code: code.to_string(),
            confidence,
            label: format!("{} ({:.2})", code, confidence),
        }
    }

    fn unknown(length: usize) -> Self {
        Self::new(length, UNKNOWN_CODE, 0.0)
    }
}

/// Per-line points for both detectors, in input order.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct LengthConfidenceSeries {
    pub legacy: Vec<LinePoint>,
    pub proposed: Vec<LinePoint>,
}

/// A point on a confidence-by-prefix-length curve.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CurvePoint {
    /// Prefix length in characters.
    pub length: usize,
    /// Confidence in percent, 0 when detection failed.
    pub confidence: f64,
}

/// Split `text` into trimmed non-empty lines and sample each line with
/// both detectors.
pub fn sample_lines(
    legacy: &dyn Detector,
    proposed: &dyn Detector,
    text: &str,
    limits: &TextLimits,
) -> LengthConfidenceSeries {
    let mut series = LengthConfidenceSeries::default();

    for line in text.trim().split('\n').map(str::trim).filter(|l| !l.is_empty()) {
        series.legacy.push(sample_line(legacy, line, limits));
        series.proposed.push(sample_line(proposed, line, limits));
    }

    series
}

fn sample_line(detector: &dyn Detector, line: &str, limits: &TextLimits) -> LinePoint {
    let length = line.chars().count();
    if length < limits.min_chars {
        return LinePoint::unknown(length);
    }

    match detector.detect(line) {
        Ok(outcome) => LinePoint::new(
            length,
            &outcome.best.code,
            outcome.best.confidence.fraction(),
        ),
        Err(_) => LinePoint::unknown(length),
    }
}

/// Confidence of `detector` over growing prefixes of `text`.
///
/// The text is lower-cased and its whitespace collapsed first. A prefix is
/// taken every `step` characters; a `step` of zero yields no points. The step
/// widens on long texts so the curve never exceeds [`MAX_CURVE_POINTS`].
pub fn confidence_curve(
    detector: &dyn Detector,
    text: &str,
    step: usize,
    limits: &TextLimits,
) -> Vec<CurvePoint> {
    if step == 0 {
        return Vec::new();
    }

    let normalized = normalize(text);
    let chars: Vec<char> = normalized.chars().collect();
    let step = step.max(chars.len().div_ceil(MAX_CURVE_POINTS));

    (step..=chars.len())
        .step_by(step)
        .map(|length| {
            let prefix: String = chars[..length].iter().collect();
            let confidence = if prefix.trim().chars().count() < limits.min_chars {
                0.0
            } else {
                detector
                    .detect(&prefix)
                    .map(|o| o.best.confidence.percent())
                    .unwrap_or(0.0)
            };
            CurvePoint { length, confidence }
        })
        .collect()
}

/// Lower-case and collapse runs of whitespace into single spaces.
pub fn normalize(text: &str) -> String {
    text.to_lowercase()
        .split_whitespace()
        .collect::<Vec<_>>()
        .join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::{GlossaError, GlossaResult};
    use crate::types::{Confidence, DetectionOutcome, DetectionSource, LanguageCandidate};
    use std::sync::atomic::{AtomicUsize, Ordering};

    /// Reports confidence proportional to input length, capped at 1.
    struct LengthDetector;

    impl Detector for LengthDetector {
        fn detect(&self, text: &str) -> GlossaResult<DetectionOutcome> {
            if text.chars().any(|c| c.is_ascii_digit()) {
                return Err(GlossaError::detection_failed("length", "digits"));
            }
            let fraction = (text.chars().count() as f64 / 100.0).min(1.0);
            let best = LanguageCandidate::new(
                "English",
                "en",
                Confidence::from_fraction(fraction).unwrap(),
            );
            Ok(DetectionOutcome::new(DetectionSource::Proposed, best, Vec::new()))
        }

        fn source(&self) -> DetectionSource {
            DetectionSource::Proposed
        }

        fn name(&self) -> &str {
            "length"
        }
    }

    /// Counts calls and delegates to [`LengthDetector`].
    struct CountingDetector<'a> {
        calls: &'a AtomicUsize,
    }

    impl Detector for CountingDetector<'_> {
        fn detect(&self, text: &str) -> GlossaResult<DetectionOutcome> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            LengthDetector.detect(text)
        }

        fn source(&self) -> DetectionSource {
            DetectionSource::Proposed
        }

        fn name(&self) -> &str {
            "counting"
        }
    }

    #[test]
    fn test_sample_lines_skips_blank_lines() {
        let text = "\n  hello world  \n\n   \nguten tag\n";
        let series = sample_lines(&LengthDetector, &LengthDetector, text, &TextLimits::default());

        assert_eq!(series.legacy.len(), 2);
        assert_eq!(series.proposed.len(), 2);
        assert_eq!(series.proposed[0].length, 11);
        assert_eq!(series.proposed[1].length, 9);
        assert_eq!(series.proposed[0].label, "EN (0.11)");
    }

    #[test]
    fn test_failed_or_short_lines_are_unknown() {
        let text = "12345\nab";
        let series = sample_lines(&LengthDetector, &LengthDetector, text, &TextLimits::default());

        for point in &series.proposed {
            assert_eq!(point.code, UNKNOWN_CODE);
            assert_eq!(point.confidence, 0.0);
            assert_eq!(point.label, "UNKNOWN (0.00)");
        }
        assert_eq!(series.proposed[0].length, 5);
        assert_eq!(series.proposed[1].length, 2);
    }

    #[test]
    fn test_confidence_curve_steps() {
        let text = "The   Quick brown fox jumps";
        let curve = confidence_curve(&LengthDetector, text, 10, &TextLimits::default());

        // normalized: "the quick brown fox jumps" (25 chars)
        let lengths: Vec<_> = curve.iter().map(|p| p.length).collect();
        assert_eq!(lengths, vec![10, 20]);
        assert_eq!(curve[0].confidence, 10.0);
        assert_eq!(curve[1].confidence, 20.0);
    }

    #[test]
    fn test_confidence_curve_is_bounded_on_long_text() {
        let calls = AtomicUsize::new(0);
        let detector = CountingDetector { calls: &calls };
        let text = "lorem ipsum ".repeat(834);
        let curve = confidence_curve(&detector, &text[..10_000], 10, &TextLimits::default());

        assert!(!curve.is_empty());
        assert!(curve.len() <= MAX_CURVE_POINTS);
        assert_eq!(calls.load(Ordering::SeqCst), curve.len());
        assert_eq!(curve[0].length, 200);
        assert!(curve.windows(2).all(|w| w[1].length - w[0].length == 200));
    }

    #[test]
    fn test_confidence_curve_zero_step() {
        assert!(confidence_curve(&LengthDetector, "hello", 0, &TextLimits::default()).is_empty());
    }

    #[test]
    fn test_normalize() {
        assert_eq!(normalize("  Hello\n\tWORLD  "), "hello world");
    }
}
