//! Detection form validation.

use serde::{Deserialize, Serialize};

use crate::error::{ErrorCode, GlossaError, GlossaResult};
use crate::traits::TextLimits;

/// Raw detection form as submitted by the client.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct DetectionForm {
    /// Text to analyze.
    pub text: Option<String>,
    /// Expected languages, comma-separated. Echoed back only.
    pub languages: Option<String>,
    /// Submit button value.
    pub submit: Option<String>,
}

/// A form that passed validation.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ValidatedForm {
    /// The submitted text, untrimmed.
    pub text: String,
    /// Parsed expected-language codes, lower-cased.
    pub languages: Vec<String>,
}

impl DetectionForm {
    /// Create a form with just the text field set.
    pub fn with_text(text: impl Into<String>) -> Self {
        Self {
            text: Some(text.into()),
            ..Default::default()
        }
    }

    /// Validate the form against `limits`.
    ///
    /// Text is required (whitespace-only counts as missing) and must be
    /// between 1 and `limits.max_chars` characters long. The minimum
    /// detection length is checked later, by the detection service.
    pub fn validate(&self, limits: &TextLimits) -> GlossaResult<ValidatedForm> {
        let text = match self.text.as_deref() {
            Some(t) if !t.trim().is_empty() => t,
            _ => {
                return Err(GlossaError::field(
                    "text",
                    ErrorCode::ValMissingField,
                    "Please enter some text to analyze.",
                ))
            }
        };

        let length = text.chars().count();
        if length < 1 || length > limits.max_chars {
            return Err(GlossaError::field(
                "text",
                ErrorCode::ValLength,
                format!(
                    "Text must be between 1 and {} characters.",
                    group_thousands(limits.max_chars)
                ),
            ));
        }

        Ok(ValidatedForm {
            text: text.to_string(),
            languages: parse_languages(self.languages.as_deref().unwrap_or("")),
        })
    }
}

/// Split a comma-separated language list into trimmed, lower-cased codes.
pub fn parse_languages(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(|s| s.trim().to_lowercase())
        .filter(|s| !s.is_empty())
        .collect()
}

fn group_thousands(n: usize) -> String {
    let digits = n.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_text() {
        let limits = TextLimits::default();
        let err = DetectionForm::default().validate(&limits).unwrap_err();
        assert_eq!(err.code(), ErrorCode::ValMissingField);
        assert_eq!(
            err.to_string(),
            "Validation error: Please enter some text to analyze."
        );

        let err = DetectionForm::with_text("   \n\t").validate(&limits).unwrap_err();
        assert_eq!(err.code(), ErrorCode::ValMissingField);
    }

    #[test]
    fn test_too_long() {
        let limits = TextLimits::default();
        let err = DetectionForm::with_text("a".repeat(10_001))
            .validate(&limits)
            .unwrap_err();
        assert_eq!(err.code(), ErrorCode::ValLength);
        assert!(err.to_string().contains("10,000"));

        assert!(DetectionForm::with_text("a".repeat(10_000))
            .validate(&limits)
            .is_ok());
    }

    #[test]
    fn test_length_counts_chars_not_bytes() {
        let limits = TextLimits {
            min_chars: 3,
            max_chars: 4,
        };
        assert!(DetectionForm::with_text("äöüß").validate(&limits).is_ok());
    }

    #[test]
    fn test_short_text_passes_form_validation() {
        let form = DetectionForm::with_text("ab").validate(&TextLimits::default());
        assert_eq!(form.unwrap().text, "ab");
    }

    #[test]
    fn test_languages_parsed() {
        let form = DetectionForm {
            text: Some("hello there".into()),
            languages: Some(" EN, fr ,, de ".into()),
            submit: None,
        };
        let validated = form.validate(&TextLimits::default()).unwrap();
        assert_eq!(validated.languages, vec!["en", "fr", "de"]);
    }

    #[test]
    fn test_group_thousands() {
        assert_eq!(group_thousands(7), "7");
        assert_eq!(group_thousands(10_000), "10,000");
        assert_eq!(group_thousands(1_234_567), "1,234,567");
    }
}
