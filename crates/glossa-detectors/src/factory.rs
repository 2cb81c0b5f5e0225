//! Factory for creating detectors.

use std::sync::Arc;

use glossa_core::error::{GlossaError, GlossaResult};
use glossa_core::traits::{Detector, DetectorConfig};
use glossa_core::types::DetectionSource;

/// Factory for creating detectors.
pub struct DetectorFactory;

impl DetectorFactory {
    /// Create the detector that serves `source`.
    ///
    /// The proposed path is always statistical and the legacy path is always
    /// simulated; a missing cargo feature is a configuration error.
    #[allow(unused_variables)]
    pub fn create(
        source: DetectionSource,
        config: &DetectorConfig,
    ) -> GlossaResult<Arc<dyn Detector>> {
        match source {
            #[cfg(feature = "statistical")]
            DetectionSource::Proposed => Ok(Self::statistical()),

            #[cfg(feature = "simulated")]
            DetectionSource::Legacy => Ok(Self::simulated(config.legacy_seed)),

            #[allow(unreachable_patterns)]
            _ => Err(GlossaError::Configuration(format!(
                "no detector compiled in for the {} source",
                source
            ))),
        }
    }

    /// Create the lingua-backed statistical detector.
    #[cfg(feature = "statistical")]
    pub fn statistical() -> Arc<dyn Detector> {
        Arc::new(crate::statistical::StatisticalDetector::new())
    }

    /// Create the random legacy stand-in.
    #[cfg(feature = "simulated")]
    pub fn simulated(seed: Option<u64>) -> Arc<dyn Detector> {
        Arc::new(crate::simulated::SimulatedDetector::new(seed))
    }
}

#[cfg(all(test, feature = "statistical", feature = "simulated"))]
mod tests {
    use super::*;

    #[test]
    fn test_sources_match() {
        let config = DetectorConfig {
            legacy_seed: Some(3),
        };
        let proposed = DetectorFactory::create(DetectionSource::Proposed, &config).unwrap();
        let legacy = DetectorFactory::create(DetectionSource::Legacy, &config).unwrap();

        assert_eq!(proposed.source(), DetectionSource::Proposed);
        assert_eq!(proposed.name(), "lingua");
        assert_eq!(legacy.source(), DetectionSource::Legacy);
        assert_eq!(legacy.name(), "simulated-legacy");
    }
}
