//! Confidence scores.
//!
//! Confidence is always held as a fraction in `[0, 1]`. Percentages only
//! appear at presentation boundaries via [`Confidence::percent`].

use serde::{Deserialize, Deserializer, Serialize};

use crate::error::{GlossaError, GlossaResult};

/// A detection confidence, stored as a fraction in `[0, 1]`.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize)]
#[serde(transparent)]
pub struct Confidence(f64);

impl Confidence {
    pub const ZERO: Confidence = Confidence(0.0);

    /// Create from a fraction in `[0, 1]`.
    pub fn from_fraction(value: f64) -> GlossaResult<Self> {
        if !value.is_finite() || !(0.0..=1.0).contains(&value) {
            return Err(GlossaError::validation(format!(
                "confidence must be a finite fraction in [0, 1], got {}",
                value
            )));
        }
        Ok(Self(value))
    }

    /// Create from a percentage in `[0, 100]`.
    pub fn from_percent(value: f64) -> GlossaResult<Self> {
        if !value.is_finite() || !(0.0..=100.0).contains(&value) {
            return Err(GlossaError::validation(format!(
                "confidence must be a finite percentage in [0, 100], got {}",
                value
            )));
        }
        Ok(Self(value / 100.0))
    }

    /// The raw fraction.
    pub fn fraction(&self) -> f64 {
        self.0
    }

    /// The value as a percentage, rounded to 2 decimals.
    pub fn percent(&self) -> f64 {
        round2(self.0 * 100.0)
    }
}

impl<'de> Deserialize<'de> for Confidence {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let value = f64::deserialize(deserializer)?;
        Confidence::from_fraction(value).map_err(serde::de::Error::custom)
    }
}

/// Round to 2 decimal places.
pub fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fraction_bounds() {
        assert!(Confidence::from_fraction(0.0).is_ok());
        assert!(Confidence::from_fraction(1.0).is_ok());
        assert!(Confidence::from_fraction(-0.01).is_err());
        assert!(Confidence::from_fraction(1.01).is_err());
        assert!(Confidence::from_fraction(f64::NAN).is_err());
        assert!(Confidence::from_fraction(f64::INFINITY).is_err());
    }

    #[test]
    fn test_percent_conversion() {
        let c = Confidence::from_percent(42.5).unwrap();
        assert!((c.fraction() - 0.425).abs() < 1e-12);
        assert_eq!(c.percent(), 42.5);

        let c = Confidence::from_fraction(0.123456).unwrap();
        assert_eq!(c.percent(), 12.35);

        assert!(Confidence::from_percent(100.5).is_err());
    }

    #[test]
    fn test_deserialize_rejects_out_of_range() {
        let ok: Confidence = serde_json::from_str("0.5").unwrap();
        assert_eq!(ok.fraction(), 0.5);
        assert!(serde_json::from_str::<Confidence>("42.0").is_err());
    }
}
