//! glossa-detectors - Detector implementations for glossa.
//!
//! # Supported Backends
//!
//! - **Statistical** (feature: `statistical`) - lingua n-gram language
//!   identification; backs the proposed path.
//! - **Simulated** (feature: `simulated`) - random stand-in for the legacy
//!   detector. It performs no detection at all and exists only to produce
//!   comparison baseline data.

mod factory;

#[cfg(feature = "statistical")]
mod statistical;

#[cfg(feature = "simulated")]
mod simulated;

pub use factory::DetectorFactory;

#[cfg(feature = "statistical")]
pub use statistical::StatisticalDetector;

#[cfg(feature = "simulated")]
pub use simulated::SimulatedDetector;

// Re-export core types
pub use glossa_core::traits::{Detector, DetectorConfig};
