use crate::host::form::ProfileFormHost;

/// Max-tuition slider default shared by quick-fill and clear
pub const DEFAULT_MAX_TUITION: &str = "25000";

pub const QUICK_FILL_ROLE: &str = "student";
pub const QUICK_FILL_STATUS: &str = "high_school_student";
pub const QUICK_FILL_HOME_STATE: &str = "IL";
pub const QUICK_FILL_GPA: &str = "3.6";
pub const QUICK_FILL_DEGREES: &[&str] = &["Bachelor's"];
pub const QUICK_FILL_INTERESTS: &[&str] = &["Engineering", "Computer Science"];

pub const CLEARED_GPA: &str = "3.0";

/// Fill the form with the demo student persona
///
/// Controls missing from the form are skipped. The caller recomputes
/// completeness once afterwards.
pub fn apply_quick_fill_persona(form: &mut ProfileFormHost) {
    if let Some(role) = form.role.as_mut() {
        if let Err(e) = role.select(QUICK_FILL_ROLE) {
            e.absorb();
        }
    }
    if let Some(status) = form.current_status.as_mut() {
        status.set(QUICK_FILL_STATUS);
    }
    if let Some(home_state) = form.home_state.as_mut() {
        home_state.set(QUICK_FILL_HOME_STATE);
    }
    if let Some(gpa) = form.gpa.as_mut() {
        gpa.assign_literal(QUICK_FILL_GPA);
    }
    if let Some(max_tuition) = form.max_tuition.as_mut() {
        max_tuition.assign_literal(DEFAULT_MAX_TUITION);
    }
    if let Some(degrees) = form.degree_levels.as_mut() {
        degrees.check_only(|value| QUICK_FILL_DEGREES.iter().any(|d| *d == value));
    }
    if let Some(interests) = form.interest_areas.as_mut() {
        interests.check_only(|value| QUICK_FILL_INTERESTS.iter().any(|i| *i == value));
    }

    tracing::debug!("Applied quick-fill persona");
}

/// Reset the form: selects and checkboxes emptied, sliders back to defaults
pub fn clear_profile_form(form: &mut ProfileFormHost) {
    if let Some(role) = form.role.as_mut() {
        role.clear();
    }
    for select in [
        form.current_status.as_mut(),
        form.home_state.as_mut(),
        form.location_pref.as_mut(),
    ]
    .into_iter()
    .flatten()
    {
        select.set("");
    }
    for group in [form.degree_levels.as_mut(), form.interest_areas.as_mut()]
        .into_iter()
        .flatten()
    {
        group.clear();
    }
    if let Some(gpa) = form.gpa.as_mut() {
        gpa.assign_literal(CLEARED_GPA);
    }
    if let Some(max_tuition) = form.max_tuition.as_mut() {
        max_tuition.assign_literal(DEFAULT_MAX_TUITION);
    }
    for score in [form.sat_score.as_mut(), form.act_score.as_mut()]
        .into_iter()
        .flatten()
    {
        score.clear();
    }

    tracing::debug!("Cleared profile form");
}
