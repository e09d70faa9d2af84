use crate::core::numeric::group_thousands;
use crate::models::{DetailProjection, RecommendationRecord};

pub const TUITION_NOT_AVAILABLE: &str = "Not available";

/// Format annual tuition as `$21,500/year`, or "Not available" when unknown
pub fn format_tuition(tuition: Option<f64>) -> String {
    match tuition.filter(|t| t.is_finite()) {
        Some(amount) => format!("${}/year", group_thousands(amount)),
        None => TUITION_NOT_AVAILABLE.to_string(),
    }
}

/// Project a record into the fields the detail viewer shows
pub fn project_detail(record: &RecommendationRecord) -> DetailProjection {
    DetailProjection {
        title: record.title.clone(),
        institution_line: record.institution_line.clone(),
        fit_score_label: record
            .fit_score
            .map(|score| format!("{}/100", score))
            .unwrap_or_default(),
        degree_level: record.degree_level.clone(),
        tuition_label: format_tuition(record.annual_tuition),
        why_interests: record.why_interests.clone(),
        why_academic: record.why_academic.clone(),
        why_practical: record.why_practical.clone(),
    }
}
