//! Factory for creating the detection service from configuration.

use std::sync::Arc;

use glossa_core::config::GlossaConfig;
use glossa_core::error::GlossaResult;
use glossa_core::log::DetectionLog;
use glossa_core::service::DetectionService;
use glossa_core::types::DetectionSource;
use glossa_detectors::DetectorFactory;
use tracing::{info, warn};

/// Create a DetectionService from configuration.
pub fn create_service(config: &GlossaConfig) -> GlossaResult<DetectionService> {
    config.validate()?;

    let proposed = DetectorFactory::create(DetectionSource::Proposed, &config.detectors)?;
    let legacy = DetectorFactory::create(DetectionSource::Legacy, &config.detectors)?;
    info!(
        proposed = proposed.name(),
        legacy = legacy.name(),
        "Detectors ready"
    );
    warn!("The legacy detector is simulated: its results are random and carry no meaning");

    let log = Arc::new(DetectionLog::with_max_records(config.log.max_records));
    match log.max_records() {
        Some(max) => info!(max_records = max, "Detection log capped"),
        None => info!("Detection log unbounded"),
    }

    DetectionService::new(proposed, legacy, log, config.limits)
}
