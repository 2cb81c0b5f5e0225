//! Core types for glossa.

mod confidence;
mod outcome;
mod record;
mod source;

pub use confidence::Confidence;
pub use confidence::round2;
pub use outcome::*;
pub use record::DetectionRecord;
pub use source::DetectionSource;
