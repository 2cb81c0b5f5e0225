//! Detection source tags.

use serde::{Deserialize, Serialize};
use strum::{Display, EnumIter, EnumString, IntoStaticStr};

/// Which detector produced a detection.
///
/// `Legacy` is the simulated baseline (random data, no real detection);
/// `Proposed` is backed by the statistical language identifier.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    Display,
    EnumString,
    EnumIter,
    IntoStaticStr,
)]
#[strum(serialize_all = "snake_case")]
#[serde(rename_all = "snake_case")]
pub enum DetectionSource {
    Legacy,
    Proposed,
}

impl DetectionSource {
    /// Label shown next to results in the UI.
    pub fn label(&self) -> &'static str {
        match self {
            DetectionSource::Legacy => "Existing",
            DetectionSource::Proposed => "Proposed",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;
    use strum::IntoEnumIterator;

    #[test]
    fn test_source_display_and_parse() {
        assert_eq!(DetectionSource::Legacy.to_string(), "legacy");
        assert_eq!(DetectionSource::Proposed.to_string(), "proposed");
        assert_eq!(
            DetectionSource::from_str("proposed").unwrap(),
            DetectionSource::Proposed
        );
        assert!(DetectionSource::from_str("existing").is_err());
        assert_eq!(DetectionSource::iter().count(), 2);
    }

    #[test]
    fn test_source_serde() {
        let json = serde_json::to_string(&DetectionSource::Legacy).unwrap();
        assert_eq!(json, "\"legacy\"");
        let parsed: DetectionSource = serde_json::from_str("\"proposed\"").unwrap();
        assert_eq!(parsed, DetectionSource::Proposed);
    }
}
