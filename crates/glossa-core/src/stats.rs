//! Aggregate statistics over detection records.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::types::{round2, DetectionRecord};

/// Number of languages reported in [`DetectionStats::top_languages`].
pub const TOP_LANGUAGES: usize = 5;

/// Share of one language within a set of records.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LanguageShare {
    pub name: String,
    pub count: usize,
    /// `count / total * 100`, rounded to 2 decimals.
    pub percentage: f64,
}

/// Summary statistics for a set of detection records.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct DetectionStats {
    pub total_detections: usize,
    pub languages_detected: usize,
    /// Mean confidence in percent, rounded to 2 decimals.
    pub avg_confidence: f64,
    /// Most frequent languages, highest count first.
    pub top_languages: Vec<LanguageShare>,
}

/// Compute statistics over `records`.
///
/// Records are grouped by language name. Ties in `top_languages` keep the
/// order in which each language first appears. An empty slice yields
/// all-zero stats.
pub fn compute_stats<'a, I>(records: I) -> DetectionStats
where
    I: IntoIterator<Item = &'a DetectionRecord>,
{
    let mut counts: Vec<(&str, usize)> = Vec::new();
    let mut index: HashMap<&str, usize> = HashMap::new();
    let mut total = 0usize;
    let mut confidence_sum = 0.0f64;

    for record in records {
        total += 1;
        confidence_sum += record.confidence().fraction();
        match index.get(record.language()) {
            Some(&i) => counts[i].1 += 1,
            None => {
                index.insert(record.language(), counts.len());
                counts.push((record.language(), 1));
            }
        }
    }

    if total == 0 {
        return DetectionStats::default();
    }

    // Stable: equal counts keep first-seen order.
    counts.sort_by(|a, b| b.1.cmp(&a.1));

    let top_languages = counts
        .iter()
        .take(TOP_LANGUAGES)
        .map(|(name, count)| LanguageShare {
            name: (*name).to_string(),
            count: *count,
            percentage: round2(*count as f64 / total as f64 * 100.0),
        })
        .collect();

    DetectionStats {
        total_detections: total,
        languages_detected: counts.len(),
        avg_confidence: round2(confidence_sum / total as f64 * 100.0),
        top_languages,
    }
}
