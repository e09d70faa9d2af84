use serde::{Deserialize, Serialize};
use crate::models::domain::{ListView, ProfileSubmission};

/// Completeness bar, label, hint and generate-button state
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CompletenessIndicator {
    pub percent: u8,
    pub label: String,
    pub bar_width: String,
    pub generate_enabled: bool,
    pub hint: String,
}

/// What the two views of a paired control currently show
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PairedView {
    pub slider: f64,
    pub input: String,
}

/// Profile form state the renderer needs after a form command
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FormView {
    pub completeness: CompletenessIndicator,
    pub gpa: Option<PairedView>,
    pub max_tuition: Option<PairedView>,
}

/// Display-ready projection handed to the detail viewer
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DetailProjection {
    pub title: String,
    #[serde(rename = "institutionLine")]
    pub institution_line: String,
    #[serde(rename = "fitScoreLabel")]
    pub fit_score_label: String,
    #[serde(rename = "degreeLevel")]
    pub degree_level: String,
    #[serde(rename = "tuitionLabel")]
    pub tuition_label: String,
    #[serde(rename = "whyInterests")]
    pub why_interests: String,
    #[serde(rename = "whyAcademic")]
    pub why_academic: String,
    #[serde(rename = "whyPractical")]
    pub why_practical: String,
}

/// Result of dispatching one command
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "update", rename_all = "snake_case")]
pub enum Update {
    Form(FormView),
    List(ListView),
    Detail {
        detail: Option<DetailProjection>,
    },
    Submission {
        submission: Option<ProfileSubmission>,
        profile_summary: String,
        constraints_summary: String,
    },
}

/// Error line written by the headless host for malformed input
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
    pub message: String,
}
