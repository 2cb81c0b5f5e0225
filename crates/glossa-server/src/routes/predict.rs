//! Prediction endpoints for the legacy and proposed detectors.

use axum::{
    extract::{rejection::FormRejection, State},
    http::{header, StatusCode},
    Form, Json,
};
use serde::Serialize;
use tracing::{error, warn};

use glossa_core::error::{ErrorCategory, GlossaError};
use glossa_core::form::DetectionForm;
use glossa_core::types::{DetectionOutcome, DetectionSource, LanguageCandidate};

use crate::error::PageResult;
use crate::state::AppState;
use crate::views::{Flash, FormEcho};

/// One result row, confidence in percent.
#[derive(Debug, Clone, Serialize)]
pub struct ResultView {
    pub language: String,
    pub code: String,
    pub confidence: f64,
}

impl From<&LanguageCandidate> for ResultView {
    fn from(candidate: &LanguageCandidate) -> Self {
        Self {
            language: candidate.language.clone(),
            code: candidate.code.clone(),
            confidence: candidate.confidence.percent(),
        }
    }
}

/// Prediction page for one detector.
#[derive(Debug, Serialize)]
pub struct PredictPage {
    pub page: &'static str,
    pub flashes: Vec<Flash>,
    pub form: FormEcho,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub errors: Vec<String>,
    pub result: Option<ResultView>,
    pub detailed_results: Option<Vec<ResultView>>,
    #[serde(skip)]
    source: DetectionSource,
}

impl PredictPage {
    /// Empty page for `source`.
    pub fn new(source: DetectionSource) -> Self {
        let page = match source {
            DetectionSource::Legacy => "predict_existing",
            DetectionSource::Proposed => "predict_proposed",
        };
        Self {
            page,
            flashes: Vec::new(),
            form: FormEcho::default(),
            errors: Vec::new(),
            result: None,
            detailed_results: None,
            source,
        }
    }

    fn accept(&mut self, outcome: &DetectionOutcome) {
        let flash = match self.source {
            DetectionSource::Legacy => Flash::info(format!(
                "({}) Language detected: {}",
                self.source.label(),
                outcome.best.language
            )),
            DetectionSource::Proposed => Flash::success(format!(
                "({}) Language detected successfully: {}",
                self.source.label(),
                outcome.best.language
            )),
        };
        self.flashes.push(flash);
        self.result = Some(ResultView::from(&outcome.best));
        self.detailed_results = Some(outcome.ranked.iter().map(ResultView::from).collect());
    }

    fn reject(&mut self, err: &GlossaError) {
        match err.category() {
            ErrorCategory::Validation => {
                let message = match err {
                    GlossaError::TooShort { .. } => self.too_short_message().to_string(),
                    GlossaError::Validation { message, .. } => message.clone(),
                    other => other.to_string(),
                };
                self.errors.push(message.clone());
                self.flashes.push(Flash::warning(message));
            }
            ErrorCategory::DetectionFailed => {
                error!("{} detection error: {}", self.source.label(), err);
                self.flashes.push(Flash::error("Unable to detect language."));
            }
            ErrorCategory::Unexpected => {
                error!("Unexpected error in {} detection: {}", self.source, err);
                let message = match self.source {
                    DetectionSource::Legacy => "Error in existing detection.",
                    DetectionSource::Proposed => "An unexpected error occurred.",
                };
                self.flashes.push(Flash::error(message));
            }
        }
    }

    fn reject_form(&mut self, rejection: &FormRejection) {
        warn!("Rejected {} form: {}", self.source, rejection);
        let message = rejection.body_text();
        self.errors.push(message.clone());
        self.flashes.push(Flash::warning(message));
    }

    fn too_short_message(&self) -> &'static str {
        match self.source {
            DetectionSource::Legacy => "Text is too short for detection.",
            DetectionSource::Proposed => "Text is too short for reliable language detection.",
        }
    }
}

/// Validate the form, run the detector off the async runtime and build the
/// page. Every detection error ends up as a flash on a 200 page.
async fn run_prediction(
    state: &AppState,
    source: DetectionSource,
    form: Result<Form<DetectionForm>, FormRejection>,
) -> PageResult<PredictPage> {
    let mut page = PredictPage::new(source);
    let form = match form {
        Ok(Form(form)) => form,
        Err(rejection) => {
            page.reject_form(&rejection);
            return Ok(page);
        }
    };
    page.form.text = form.text.clone().unwrap_or_default();

    let service = state.service();
    let validated = match form.validate(service.limits()) {
        Ok(validated) => validated,
        Err(err) => {
            page.reject(&err);
            return Ok(page);
        }
    };
    page.form.languages = validated.languages;

    let text = validated.text;
    let result = tokio::task::spawn_blocking(move || service.detect(source, &text)).await?;

    match result {
        Ok(outcome) => page.accept(&outcome),
        Err(err) => page.reject(&err),
    }
    Ok(page)
}

/// Legacy prediction form.
/// GET /predict_existing
pub async fn predict_existing_page() -> Json<PredictPage> {
    Json(PredictPage::new(DetectionSource::Legacy))
}

/// Run the simulated legacy detector.
/// POST /predict_existing
pub async fn predict_existing(
    State(state): State<AppState>,
    form: Result<Form<DetectionForm>, FormRejection>,
) -> PageResult<Json<PredictPage>> {
    Ok(Json(run_prediction(&state, DetectionSource::Legacy, form).await?))
}

/// Proposed prediction form.
/// GET /predict_proposed
pub async fn predict_proposed_page() -> Json<PredictPage> {
    Json(PredictPage::new(DetectionSource::Proposed))
}

/// Run the statistical detector.
/// POST /predict_proposed
pub async fn predict_proposed(
    State(state): State<AppState>,
    form: Result<Form<DetectionForm>, FormRejection>,
) -> PageResult<Json<PredictPage>> {
    Ok(Json(run_prediction(&state, DetectionSource::Proposed, form).await?))
}

/// Alias for the proposed detector, answered with a 302.
/// GET, POST /predict
pub async fn predict() -> (StatusCode, [(header::HeaderName, &'static str); 1]) {
    (StatusCode::FOUND, [(header::LOCATION, "/predict_proposed")])
}
