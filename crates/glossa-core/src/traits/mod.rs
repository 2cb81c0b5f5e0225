//! Core traits for glossa detectors.

mod detector;

pub use detector::*;
