use serde::{Deserialize, Serialize};

/// A single edit coming from one profile form control
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "field", rename_all = "snake_case")]
pub enum FieldEdit {
    Role { value: String },
    CurrentStatus { value: String },
    HomeState { value: String },
    LocationPref { value: String },
    /// GPA slider moved
    GpaSlider { value: f64 },
    /// GPA number field committed
    GpaInput { value: String },
    MaxTuitionSlider { value: f64 },
    MaxTuitionInput { value: String },
    DegreeLevel { value: String, checked: bool },
    InterestArea { value: String, checked: bool },
    SatScore { value: String },
    ActScore { value: String },
}

/// A single edit coming from one filter control
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "control", content = "value", rename_all = "snake_case")]
pub enum FilterEdit {
    DegreeLevel(String),
    MaxTuition(String),
}

/// Named UI commands accepted by the session dispatcher
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "command", rename_all = "snake_case")]
pub enum Command {
    FieldChanged { edit: FieldEdit },
    FilterChanged { edit: FilterEdit },
    SortChanged { sort_by: String },
    QuickFillRequested,
    ClearRequested,
    DetailRequested {
        #[serde(default)]
        program_id: Option<String>,
    },
    GenerateRequested,
}
