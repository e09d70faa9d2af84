use serde::de::Error as _;
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;
use std::collections::BTreeSet;
use validator::Validate;
use crate::core::numeric::{parse_float, parse_int};

/// One recommendation card as rendered upstream
///
/// Records are produced by the recommendation endpoint and never mutated here;
/// the list engine only reorders and hides them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate)]
pub struct RecommendationRecord {
    #[validate(length(min = 1))]
    pub id: String,
    #[serde(default)]
    pub title: String,
    #[serde(rename = "institutionLine", default)]
    pub institution_line: String,
    #[validate(range(max = 100))]
    #[serde(rename = "fitScore", default, deserialize_with = "deserialize_fit_score")]
    pub fit_score: Option<u8>,
    #[serde(rename = "degreeLevel", default)]
    pub degree_level: String,
    #[validate(range(min = 0.0))]
    #[serde(
        rename = "annualTuition",
        default,
        deserialize_with = "deserialize_tuition"
    )]
    pub annual_tuition: Option<f64>,
    #[serde(rename = "whyInterests", default)]
    pub why_interests: String,
    #[serde(rename = "whyAcademic", default)]
    pub why_academic: String,
    #[serde(rename = "whyPractical", default)]
    pub why_practical: String,
}

impl RecommendationRecord {
    /// Fit score used for ordering; a card without one sorts as 0
    pub fn fit_value(&self) -> u8 {
        self.fit_score.unwrap_or(0)
    }

    /// Known, finite tuition
    pub fn tuition(&self) -> Option<f64> {
        self.annual_tuition.filter(|t| t.is_finite())
    }
}

/// Tuition arrives as a number, a numeric string, an empty string or null.
/// Anything that is not a finite number is treated as unknown.
fn deserialize_tuition<'de, D>(deserializer: D) -> Result<Option<f64>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = Value::deserialize(deserializer)?;
    let tuition = match raw {
        Value::Number(n) => n.as_f64(),
        Value::String(s) => parse_float(&s),
        _ => None,
    };
    Ok(tuition.filter(|t| t.is_finite()))
}

/// Fit scores arrive as integers, floats or numeric strings and are read
/// like `parseInt`. Values that do not fit a `u8` are rejected; the
/// `range` validation bounds the rest.
fn deserialize_fit_score<'de, D>(deserializer: D) -> Result<Option<u8>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = Value::deserialize(deserializer)?;
    let score = match raw {
        Value::Number(n) => n.as_i64().or_else(|| {
            n.as_f64()
                .filter(|f| f.is_finite())
                .map(|f| f.trunc() as i64)
        }),
        Value::String(s) => parse_int(&s),
        _ => None,
    };

    score
        .map(|s| {
            u8::try_from(s)
                .map_err(|_| D::Error::custom(format!("fit score out of range: {}", s)))
        })
        .transpose()
}

/// Active filter criteria, rebuilt from the filter controls on every change
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct FilterCriteria {
    #[serde(rename = "degreeLevel", default)]
    pub degree_level: Option<String>,
    #[serde(rename = "maxTuition", default)]
    pub max_tuition: Option<f64>,
}

impl FilterCriteria {
    /// Build criteria from raw control values
    ///
    /// An empty degree selection and an unparseable tuition bound both mean
    /// "no constraint".
    pub fn from_controls(degree_level: &str, max_tuition: &str) -> Self {
        Self {
            degree_level: Some(degree_level)
                .filter(|d| !d.is_empty())
                .map(str::to_string),
            max_tuition: parse_float(max_tuition),
        }
    }

    /// Tuition bound, ignoring NaN
    pub fn tuition_bound(&self) -> Option<f64> {
        self.max_tuition.filter(|m| !m.is_nan())
    }
}

/// Ordering applied to the full recommendation list
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum SortKey {
    #[default]
    #[serde(rename = "fit_desc")]
    FitDescending,
    #[serde(rename = "tuition_asc")]
    TuitionAscending,
    #[serde(rename = "tuition_desc")]
    TuitionDescending,
    /// Any value the sort control does not know; leaves the order untouched
    #[serde(other, rename = "unrecognized")]
    Unrecognized,
}

impl SortKey {
    /// Map a sort control value. A missing control sorts by fit.
    pub fn from_control(value: Option<&str>) -> Self {
        match value {
            None | Some("fit_desc") => SortKey::FitDescending,
            Some("tuition_asc") => SortKey::TuitionAscending,
            Some("tuition_desc") => SortKey::TuitionDescending,
            Some(_) => SortKey::Unrecognized,
        }
    }
}

/// Output of one filter/sort pass
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ListView {
    /// Every record id, in display order (hidden records included)
    #[serde(rename = "orderedIds")]
    pub ordered_ids: Vec<String>,
    #[serde(rename = "visibleIds")]
    pub visible_ids: BTreeSet<String>,
    #[serde(rename = "visibleCount")]
    pub visible_count: usize,
}

impl ListView {
    pub fn is_visible(&self, id: &str) -> bool {
        self.visible_ids.contains(id)
    }

    /// Visible ids in display order
    pub fn visible_in_order(&self) -> impl Iterator<Item = &str> {
        self.ordered_ids
            .iter()
            .map(String::as_str)
            .filter(|id| self.visible_ids.contains(*id))
    }
}

/// Plain read of the profile form
///
/// Controls missing from the form read as empty values.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ProfileSnapshot {
    pub role: Option<String>,
    pub current_status: String,
    pub home_state: String,
    pub location_pref: String,
    pub gpa: Option<f64>,
    pub max_tuition: Option<f64>,
    pub degree_levels: Vec<String>,
    pub interest_areas: Vec<String>,
    pub sat_score: String,
    pub act_score: String,
}

/// Normalized profile posted to the recommendation endpoint
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProfileSubmission {
    pub role: String,
    pub current_status: String,
    pub home_state: String,
    pub gpa: f64,
    pub degree_levels: Vec<String>,
    pub interest_areas: Vec<String>,
    pub max_tuition: Option<f64>,
    pub sat_score: Option<i64>,
    pub act_score: Option<i64>,
    pub location_pref: String,
}

impl ProfileSubmission {
    pub fn from_snapshot(profile: &ProfileSnapshot) -> Self {
        Self {
            role: profile.role.clone().unwrap_or_default(),
            current_status: profile.current_status.clone(),
            home_state: profile.home_state.clone(),
            gpa: profile.gpa.filter(|g| g.is_finite()).unwrap_or(0.0),
            degree_levels: non_empty(&profile.degree_levels),
            interest_areas: non_empty(&profile.interest_areas),
            max_tuition: profile.max_tuition.filter(|t| t.is_finite()),
            sat_score: parse_score(&profile.sat_score),
            act_score: parse_score(&profile.act_score),
            location_pref: profile.location_pref.clone(),
        }
    }
}

fn non_empty(values: &[String]) -> Vec<String> {
    values.iter().filter(|v| !v.is_empty()).cloned().collect()
}

fn parse_score(raw: &str) -> Option<i64> {
    raw.trim().parse::<i64>().ok()
}
