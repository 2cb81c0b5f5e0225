//! Statistical language detector backed by lingua.

use lingua::{Language, LanguageDetector, LanguageDetectorBuilder};
use tracing::{debug, info};

use glossa_core::error::{ErrorCode, GlossaError, GlossaResult};
use glossa_core::languages;
use glossa_core::traits::Detector;
use glossa_core::types::{
    Confidence, DetectionOutcome, DetectionSource, LanguageCandidate, MAX_CANDIDATES,
};

/// Proposed detector: n-gram statistical language identification.
///
/// Deterministic for a given input.
pub struct StatisticalDetector {
    detector: LanguageDetector,
}

impl StatisticalDetector {
    /// Create a detector covering every language lingua knows about.
    pub fn new() -> Self {
        info!("Building statistical language detector (all languages)");
        Self {
            detector: LanguageDetectorBuilder::from_all_languages().build(),
        }
    }

    /// Create a detector restricted to `languages`. At least two are needed.
    pub fn with_languages(languages: &[Language]) -> GlossaResult<Self> {
        if languages.len() < 2 {
            return Err(GlossaError::Configuration(
                "statistical detector needs at least two languages".to_string(),
            ));
        }
        Ok(Self {
            detector: LanguageDetectorBuilder::from_languages(languages).build(),
        })
    }

    fn candidate(language: Language, value: f64) -> GlossaResult<LanguageCandidate> {
        let code = format!("{:?}", language.iso_code_639_1()).to_lowercase();
        let name = match languages::language_name(&code) {
            Some(name) => name.to_string(),
            None => format!("{:?}", language),
        };
        let confidence = Confidence::from_fraction(value.clamp(0.0, 1.0))?;
        Ok(LanguageCandidate::new(name, code, confidence))
    }
}

impl Default for StatisticalDetector {
    fn default() -> Self {
        Self::new()
    }
}

impl Detector for StatisticalDetector {
    fn detect(&self, text: &str) -> GlossaResult<DetectionOutcome> {
        let ranked = self
            .detector
            .compute_language_confidence_values(text)
            .into_iter()
            .filter(|(_, value)| *value > 0.0)
            .take(MAX_CANDIDATES)
            .map(|(language, value)| Self::candidate(language, value))
            .collect::<GlossaResult<Vec<_>>>()?;

        let best = match ranked.first() {
            Some(best) => best.clone(),
            None => {
                return Err(GlossaError::DetectionFailed {
                    message: "No features in text to identify a language".to_string(),
                    code: ErrorCode::DetEmptyResult,
                    detector: self.name().to_string(),
                })
            }
        };

        debug!(code = %best.code, candidates = ranked.len(), "Statistical detection");
        Ok(DetectionOutcome::new(DetectionSource::Proposed, best, ranked))
    }

    fn source(&self) -> DetectionSource {
        DetectionSource::Proposed
    }

    fn name(&self) -> &str {
        "lingua"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn small_detector() -> StatisticalDetector {
        StatisticalDetector::with_languages(&[
            Language::English,
            Language::French,
            Language::German,
            Language::Spanish,
        ])
        .unwrap()
    }

    #[test]
    fn test_detects_french() {
        let outcome = small_detector()
            .detect("Bonjour, comment allez-vous aujourd'hui?")
            .unwrap();

        assert_eq!(outcome.source, DetectionSource::Proposed);
        assert_eq!(outcome.best.code, "FR");
        assert_eq!(outcome.best.language, "French");
        assert_eq!(outcome.ranked[0], outcome.best);
    }

    #[test]
    fn test_ranked_sorted_and_capped() {
        let outcome = StatisticalDetector::new()
            .detect("The quick brown fox jumps over the lazy dog")
            .unwrap();

        assert_eq!(outcome.best.code, "EN");
        assert!(!outcome.ranked.is_empty());
        assert!(outcome.ranked.len() <= MAX_CANDIDATES);
        assert!(outcome
            .ranked
            .windows(2)
            .all(|w| w[0].confidence >= w[1].confidence));
        for candidate in &outcome.ranked {
            let percent = candidate.confidence.percent();
            assert!((0.0..=100.0).contains(&percent));
        }
    }

    #[test]
    fn test_digits_only_fails() {
        let err = small_detector().detect("12345").unwrap_err();
        assert!(matches!(err, GlossaError::DetectionFailed { .. }));
    }

    #[test]
    fn test_needs_two_languages() {
        assert!(StatisticalDetector::with_languages(&[Language::English]).is_err());
    }
}
