use crate::models::{CompletenessIndicator, ProfileSnapshot};

/// Number of profile fields that gate the generate action
pub const TOTAL_REQUIRED_FIELDS: usize = 6;

pub const READY_HINT: &str = "You’re ready to generate recommendations.";
pub const INCOMPLETE_HINT: &str = "Fill out the required fields to enable the Generate button.";

/// Required profile fields
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ProfileField {
    Role,
    CurrentStatus,
    HomeState,
    Gpa,
    DegreeLevels,
    InterestAreas,
}

impl ProfileField {
    pub const REQUIRED: [ProfileField; TOTAL_REQUIRED_FIELDS] = [
        ProfileField::Role,
        ProfileField::CurrentStatus,
        ProfileField::HomeState,
        ProfileField::Gpa,
        ProfileField::DegreeLevels,
        ProfileField::InterestAreas,
    ];

    /// Field-type specific "filled" predicate
    ///
    /// A choice is made, a select holds a non-empty value, the GPA is
    /// strictly positive, or a checkbox set is non-empty.
    #[inline]
    pub fn is_filled(self, profile: &ProfileSnapshot) -> bool {
        match self {
            ProfileField::Role => profile.role.as_deref().is_some_and(|r| !r.is_empty()),
            ProfileField::CurrentStatus => !profile.current_status.is_empty(),
            ProfileField::HomeState => !profile.home_state.is_empty(),
            ProfileField::Gpa => profile.gpa.is_some_and(|g| g > 0.0),
            ProfileField::DegreeLevels => !profile.degree_levels.is_empty(),
            ProfileField::InterestAreas => !profile.interest_areas.is_empty(),
        }
    }
}

/// Completeness percentage (0-100) of the required profile fields
pub fn compute_completeness(profile: &ProfileSnapshot) -> u8 {
    let filled = ProfileField::REQUIRED
        .iter()
        .filter(|field| field.is_filled(profile))
        .count();

    ((filled as f64 / TOTAL_REQUIRED_FIELDS as f64) * 100.0).round() as u8
}

#[inline]
pub fn is_complete(percent: u8) -> bool {
    percent == 100
}

impl CompletenessIndicator {
    pub fn from_percent(percent: u8) -> Self {
        let complete = is_complete(percent);
        Self {
            percent,
            label: format!("{}% complete", percent),
            bar_width: format!("{}%", percent),
            generate_enabled: complete,
            hint: if complete { READY_HINT } else { INCOMPLETE_HINT }.to_string(),
        }
    }
}

/// Keeps the completeness indicator in step with the profile form
#[derive(Debug, Clone)]
pub struct CompletenessTracker {
    indicator: CompletenessIndicator,
}

impl CompletenessTracker {
    pub fn new() -> Self {
        Self {
            indicator: CompletenessIndicator::from_percent(0),
        }
    }

    /// Recompute from a fresh snapshot and return the updated indicator
    pub fn recompute(&mut self, profile: &ProfileSnapshot) -> &CompletenessIndicator {
        let percent = compute_completeness(profile);
        tracing::trace!("Profile completeness: {}%", percent);
        self.indicator = CompletenessIndicator::from_percent(percent);
        &self.indicator
    }

    pub fn indicator(&self) -> &CompletenessIndicator {
        &self.indicator
    }
}

impl Default for CompletenessTracker {
    fn default() -> Self {
        Self::new()
    }
}
