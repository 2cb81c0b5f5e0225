//! Detection outcome types.

use serde::{Deserialize, Serialize};

use super::{Confidence, DetectionSource};

/// Maximum number of ranked candidates carried by an outcome.
pub const MAX_CANDIDATES: usize = 5;

/// One (language, confidence) pair produced by a detector.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LanguageCandidate {
    /// Display name, e.g. "French".
    pub language: String,
    /// Upper-case short code, e.g. "FR".
    pub code: String,
    pub confidence: Confidence,
}

impl LanguageCandidate {
    /// Create a new candidate. The code is upper-cased.
    pub fn new(language: impl Into<String>, code: impl AsRef<str>, confidence: Confidence) -> Self {
        Self {
            language: language.into(),
            code: code.as_ref().to_uppercase(),
            confidence,
        }
    }
}

/// Result of a single successful detection call.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DetectionOutcome {
    /// Detector that produced this outcome.
    pub source: DetectionSource,
    /// Best guess.
    pub best: LanguageCandidate,
    /// Up to [`MAX_CANDIDATES`] candidates, most likely first.
    pub ranked: Vec<LanguageCandidate>,
}

impl DetectionOutcome {
    /// Create an outcome, truncating `ranked` to [`MAX_CANDIDATES`].
    pub fn new(
        source: DetectionSource,
        best: LanguageCandidate,
        mut ranked: Vec<LanguageCandidate>,
    ) -> Self {
        ranked.truncate(MAX_CANDIDATES);
        Self {
            source,
            best,
            ranked,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn candidate(code: &str) -> LanguageCandidate {
        LanguageCandidate::new("Test", code, Confidence::from_fraction(0.5).unwrap())
    }

    #[test]
    fn test_code_is_uppercased() {
        assert_eq!(candidate("zh-cn").code, "ZH-CN");
    }

    #[test]
    fn test_ranked_truncated() {
        let ranked = (0..8).map(|_| candidate("en")).collect();
        let outcome = DetectionOutcome::new(DetectionSource::Proposed, candidate("en"), ranked);
        assert_eq!(outcome.ranked.len(), MAX_CANDIDATES);
    }
}
