//! Simulated legacy detector.
//!
//! THIS IS NOT A LANGUAGE DETECTOR. It ignores its input and returns a
//! random language from the supported catalog with a random confidence. It
//! stands in for the legacy system so the proposed detector has a baseline
//! to be compared against on the dashboard and charts.

use std::sync::{Mutex, PoisonError};

use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};
use tracing::debug;

use glossa_core::error::{GlossaError, GlossaResult};
use glossa_core::languages::SUPPORTED_LANGUAGES;
use glossa_core::traits::Detector;
use glossa_core::types::{
    round2, Confidence, DetectionOutcome, DetectionSource, LanguageCandidate, MAX_CANDIDATES,
};

/// Confidence range of the best guess, in percent.
const BEST_CONFIDENCE: (f64, f64) = (30.0, 70.0);
/// Confidence range of the detailed candidates, in percent.
const DETAIL_CONFIDENCE: (f64, f64) = (20.0, 80.0);

/// Random stand-in for the legacy detector. See the module docs.
pub struct SimulatedDetector {
    rng: Mutex<StdRng>,
}

impl SimulatedDetector {
    /// Create a simulated detector. A seed makes the sequence reproducible.
    pub fn new(seed: Option<u64>) -> Self {
        let rng = match seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        Self {
            rng: Mutex::new(rng),
        }
    }

    fn draw(rng: &mut StdRng, range: (f64, f64)) -> GlossaResult<LanguageCandidate> {
        let (code, name) = SUPPORTED_LANGUAGES
            .choose(rng)
            .ok_or_else(|| GlossaError::internal("language catalog is empty"))?;
        let percent = round2(rng.gen_range(range.0..=range.1));
        Ok(LanguageCandidate::new(
            *name,
            code,
            Confidence::from_percent(percent)?,
        ))
    }
}

impl Detector for SimulatedDetector {
    fn detect(&self, _text: &str) -> GlossaResult<DetectionOutcome> {
        let mut rng = self.rng.lock().unwrap_or_else(PoisonError::into_inner);

        let best = Self::draw(&mut rng, BEST_CONFIDENCE)?;
        let ranked = (0..MAX_CANDIDATES)
            .map(|_| Self::draw(&mut rng, DETAIL_CONFIDENCE))
            .collect::<GlossaResult<Vec<_>>>()?;

        debug!(code = %best.code, "Simulated legacy detection (random)");
        Ok(DetectionOutcome::new(DetectionSource::Legacy, best, ranked))
    }

    fn source(&self) -> DetectionSource {
        DetectionSource::Legacy
    }

    fn name(&self) -> &str {
        "simulated-legacy"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use glossa_core::languages;

    #[test]
    fn test_ranges_and_shape() {
        let detector = SimulatedDetector::new(Some(1));

        for _ in 0..200 {
            let outcome = detector.detect("anything at all").unwrap();
            assert_eq!(outcome.source, DetectionSource::Legacy);

            let best = outcome.best.confidence.percent();
            assert!((30.0..=70.0).contains(&best), "best {}", best);
            assert!(languages::language_name(&outcome.best.code).is_some());

            assert_eq!(outcome.ranked.len(), MAX_CANDIDATES);
            for candidate in &outcome.ranked {
                let percent = candidate.confidence.percent();
                assert!((20.0..=80.0).contains(&percent), "detail {}", percent);
            }
        }
    }

    #[test]
    fn test_seed_is_reproducible() {
        let a = SimulatedDetector::new(Some(42));
        let b = SimulatedDetector::new(Some(42));
        for _ in 0..10 {
            assert_eq!(a.detect("x y z").unwrap(), b.detect("q r s").unwrap());
        }
    }

    #[test]
    fn test_ignores_input() {
        let a = SimulatedDetector::new(Some(9));
        let b = SimulatedDetector::new(Some(9));
        assert_eq!(
            a.detect("Bonjour, comment allez-vous?").unwrap(),
            b.detect("Guten Tag, wie geht es Ihnen?").unwrap()
        );
    }
}
