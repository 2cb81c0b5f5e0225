//! Shared view-model pieces: flash messages and the landing page.

use serde::Serialize;

/// Severity of a flash message.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum FlashCategory {
    Info,
    Success,
    Warning,
    Error,
}

/// A one-shot user-facing message attached to a page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Flash {
    pub category: FlashCategory,
    pub message: String,
}

impl Flash {
    pub fn new(category: FlashCategory, message: impl Into<String>) -> Self {
        Self {
            category,
            message: message.into(),
        }
    }

    pub fn info(message: impl Into<String>) -> Self {
        Self::new(FlashCategory::Info, message)
    }

    pub fn success(message: impl Into<String>) -> Self {
        Self::new(FlashCategory::Success, message)
    }

    pub fn warning(message: impl Into<String>) -> Self {
        Self::new(FlashCategory::Warning, message)
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self::new(FlashCategory::Error, message)
    }
}

/// Landing page. Also rendered for 404 and 500 responses.
#[derive(Debug, Clone, Serialize)]
pub struct HomePage {
    pub page: &'static str,
    pub flashes: Vec<Flash>,
}

impl HomePage {
    pub fn new() -> Self {
        Self {
            page: "home",
            flashes: Vec::new(),
        }
    }

    pub fn with_flash(mut self, flash: Flash) -> Self {
        self.flashes.push(flash);
        self
    }
}

impl Default for HomePage {
    fn default() -> Self {
        Self::new()
    }
}

/// Echo of the submitted form, returned so the client can re-render it.
#[derive(Debug, Clone, Default, Serialize)]
pub struct FormEcho {
    pub text: String,
    pub languages: Vec<String>,
}
