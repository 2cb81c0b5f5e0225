//! Length-vs-confidence visualization endpoint.

use axum::{
    extract::{rejection::FormRejection, State},
    Form, Json,
};
use serde::Serialize;
use tracing::warn;

use glossa_core::form::DetectionForm;
use glossa_core::sampler::{CurvePoint, LengthConfidenceSeries, LinePoint};

use crate::error::PageResult;
use crate::state::AppState;
use crate::views::{Flash, FormEcho};

/// Prefix step, in characters, of the proposed confidence curve.
pub const CURVE_STEP: usize = 10;

/// Chart data for both detectors. Confidences are fractions in `[0, 1]`.
#[derive(Debug, Default, Serialize)]
pub struct VisualizationPage {
    pub page: &'static str,
    pub flashes: Vec<Flash>,
    pub form: FormEcho,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub errors: Vec<String>,
    pub lengths_existing: Vec<usize>,
    pub conf_existing: Vec<f64>,
    pub lang_labels_existing: Vec<String>,
    pub lengths_proposed: Vec<usize>,
    pub conf_proposed: Vec<f64>,
    pub lang_labels_proposed: Vec<String>,
    /// Proposed confidence (percent) over growing prefixes of the input.
    pub confidence_curve: Vec<CurvePoint>,
}

impl VisualizationPage {
    pub fn new() -> Self {
        Self {
            page: "visualization",
            ..Default::default()
        }
    }

    fn fill(&mut self, series: &LengthConfidenceSeries) {
        fn split(points: &[LinePoint]) -> (Vec<usize>, Vec<f64>, Vec<String>) {
            let lengths = points.iter().map(|p| p.length).collect();
            let confidences = points.iter().map(|p| p.confidence).collect();
            let labels = points.iter().map(|p| p.label.clone()).collect();
            (lengths, confidences, labels)
        }

        (
            self.lengths_existing,
            self.conf_existing,
            self.lang_labels_existing,
        ) = split(&series.legacy);
        (
            self.lengths_proposed,
            self.conf_proposed,
            self.lang_labels_proposed,
        ) = split(&series.proposed);
    }
}

/// Empty chart page.
/// GET /visualization
pub async fn visualization_page() -> Json<VisualizationPage> {
    Json(VisualizationPage::new())
}

/// Sample every non-blank input line with both detectors. Nothing is
/// written to the detection log.
/// POST /visualization
pub async fn visualization(
    State(state): State<AppState>,
    form: Result<Form<DetectionForm>, FormRejection>,
) -> PageResult<Json<VisualizationPage>> {
    let mut page = VisualizationPage::new();
    let form = match form {
        Ok(Form(form)) => form,
        Err(rejection) => {
            warn!("Rejected visualization form: {}", rejection);
            let message = rejection.body_text();
            page.errors.push(message.clone());
            page.flashes.push(Flash::warning(message));
            return Ok(Json(page));
        }
    };
    page.form.text = form.text.clone().unwrap_or_default();

    let service = state.service();
    let validated = match form.validate(service.limits()) {
        Ok(validated) => validated,
        Err(err) => {
            let message = match &err {
                glossa_core::GlossaError::Validation { message, .. } => message.clone(),
                other => other.to_string(),
            };
            page.errors.push(message.clone());
            page.flashes.push(Flash::warning(message));
            return Ok(Json(page));
        }
    };
    page.form.languages = validated.languages;

    let text = validated.text;
    let (series, curve) = tokio::task::spawn_blocking(move || {
        let series = service.sample_lines(&text);
        let curve = service.proposed_curve(&text, CURVE_STEP);
        (series, curve)
    })
    .await?;

    page.fill(&series);
    page.confidence_curve = curve;
    Ok(Json(page))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn point(length: usize, code: &str, confidence: f64) -> LinePoint {
        LinePoint {
            length,
            code: code.to_string(),
            confidence,
            label: format!("{} ({:.2})", code, confidence),
        }
    }

    #[test]
    fn test_fill_splits_series() {
        let series = LengthConfidenceSeries {
            legacy: vec![point(11, "SW", 0.42), point(9, "LA", 0.61)],
            proposed: vec![point(11, "EN", 0.97), point(9, "DE", 0.88)],
        };
        let mut page = VisualizationPage::new();
        page.fill(&series);

        assert_eq!(page.lengths_existing, vec![11, 9]);
        assert_eq!(page.conf_existing, vec![0.42, 0.61]);
        assert_eq!(page.lang_labels_existing, vec!["SW (0.42)", "LA (0.61)"]);
        assert_eq!(page.lengths_proposed, vec![11, 9]);
        assert_eq!(page.lang_labels_proposed, vec!["EN (0.97)", "DE (0.88)"]);
    }
}
