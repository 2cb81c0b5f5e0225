//! Error types for glossa operations.
//!
//! Every error maps onto one of three user-facing categories (see
//! [`ErrorCategory`]). None of them is fatal to the process; the server
//! recovers all of them at the request boundary.

use thiserror::Error;

/// Result type alias for glossa operations.
pub type GlossaResult<T> = Result<T, GlossaError>;

/// Main error type for all glossa operations.
#[derive(Error, Debug)]
pub enum GlossaError {
    /// Input validation failed.
    #[error("Validation error: {message}")]
    Validation {
        message: String,
        code: ErrorCode,
        field: Option<String>,
    },

    /// Text is below the minimum length for detection.
    #[error("Text too short: {length} characters, at least {min} required")]
    TooShort { length: usize, min: usize },

    /// The detector could not identify any language.
    #[error("Detection failed: {message}")]
    DetectionFailed {
        message: String,
        code: ErrorCode,
        detector: String,
    },

    /// Configuration error.
    #[error("Configuration error: {0}")]
    Configuration(String),

    /// IO error.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON serialization error.
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// Internal error.
    #[error("Internal error: {0}")]
    Internal(String),
}

/// Error codes for programmatic handling.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCode {
    // Validation (VAL_xxx)
    ValInvalidInput,
    ValMissingField,
    ValLength,
    ValTooShort,

    // Detection (DET_xxx)
    DetNoLanguage,
    DetEmptyResult,

    // Configuration (CFG_xxx)
    CfgInvalid,

    // Internal
    Internal,
}

impl ErrorCode {
    /// Get the string representation of the error code.
    pub fn as_str(&self) -> &'static str {
        match self {
            ErrorCode::ValInvalidInput => "VAL_001",
            ErrorCode::ValMissingField => "VAL_002",
            ErrorCode::ValLength => "VAL_003",
            ErrorCode::ValTooShort => "VAL_004",
            ErrorCode::DetNoLanguage => "DET_001",
            ErrorCode::DetEmptyResult => "DET_002",
            ErrorCode::CfgInvalid => "CFG_001",
            ErrorCode::Internal => "INT_001",
        }
    }
}

/// How an error is surfaced to the user.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    /// Missing or too-short text; shown as a warning, nothing is detected.
    Validation,
    /// The detector found no language; shown as an error, nothing is logged.
    DetectionFailed,
    /// Anything else; logged server-side, generic message to the user.
    Unexpected,
}

impl GlossaError {
    /// Create a validation error.
    pub fn validation(message: impl Into<String>) -> Self {
        Self::Validation {
            message: message.into(),
            code: ErrorCode::ValInvalidInput,
            field: None,
        }
    }

    /// Create a validation error bound to a form field.
    pub fn field(field: impl Into<String>, code: ErrorCode, message: impl Into<String>) -> Self {
        Self::Validation {
            message: message.into(),
            code,
            field: Some(field.into()),
        }
    }

    /// Create a too-short error.
    pub fn too_short(length: usize, min: usize) -> Self {
        Self::TooShort { length, min }
    }

    /// Create a detection failure for the named detector.
    pub fn detection_failed(detector: impl Into<String>, message: impl Into<String>) -> Self {
        Self::DetectionFailed {
            message: message.into(),
            code: ErrorCode::DetNoLanguage,
            detector: detector.into(),
        }
    }

    /// Create an internal error.
    pub fn internal(message: impl Into<String>) -> Self {
        Self::Internal(message.into())
    }

    /// Get the error code.
    pub fn code(&self) -> ErrorCode {
        match self {
            Self::Validation { code, .. } => *code,
            Self::TooShort { .. } => ErrorCode::ValTooShort,
            Self::DetectionFailed { code, .. } => *code,
            Self::Configuration(_) => ErrorCode::CfgInvalid,
            _ => ErrorCode::Internal,
        }
    }

    /// Get the user-facing category of this error.
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::Validation { .. } | Self::TooShort { .. } => ErrorCategory::Validation,
            Self::DetectionFailed { .. } => ErrorCategory::DetectionFailed,
            _ => ErrorCategory::Unexpected,
        }
    }

    /// Whether this error should be reported to the user as a warning
    /// rather than an error.
    pub fn is_validation(&self) -> bool {
        self.category() == ErrorCategory::Validation
    }
}
