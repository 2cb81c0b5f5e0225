//! Server state management.

use std::sync::Arc;

use glossa_core::config::GlossaConfig;
use glossa_core::error::GlossaResult;
use glossa_core::service::DetectionService;

use crate::factory::create_service;

/// Shared application state.
///
/// The detection log lives inside the service and carries its own lock, so
/// the state itself is immutable and cheap to clone.
#[derive(Clone)]
pub struct AppState {
    pub inner: Arc<AppStateInner>,
}

pub struct AppStateInner {
    pub service: Arc<DetectionService>,
    pub config: GlossaConfig,
}

impl AppState {
    /// Create state around an existing service.
    pub fn new(service: DetectionService, config: GlossaConfig) -> Self {
        Self {
            inner: Arc::new(AppStateInner {
                service: Arc::new(service),
                config,
            }),
        }
    }

    /// Build the detectors, log and service described by `config`.
    pub fn from_config(config: GlossaConfig) -> GlossaResult<Self> {
        let service = create_service(&config)?;
        Ok(Self::new(service, config))
    }

    /// Shared handle to the detection service.
    pub fn service(&self) -> Arc<DetectionService> {
        Arc::clone(&self.inner.service)
    }

    pub fn config(&self) -> &GlossaConfig {
        &self.inner.config
    }
}
