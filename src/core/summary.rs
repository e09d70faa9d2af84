use crate::core::numeric::group_thousands;
use crate::models::ProfileSubmission;

const SEPARATOR: &str = " · ";

/// Short human-readable profile line for the recommendations header
///
/// e.g. `Student from IL · GPA 3.6 · Bachelor's · Engineering, Computer Science`
pub fn summarize_profile(profile: &ProfileSubmission) -> String {
    let mut parts: Vec<String> = Vec::new();

    match profile.role.to_lowercase().as_str() {
        "student" => parts.push("Student".to_string()),
        "parent" => parts.push("Parent".to_string()),
        _ => {}
    }

    if !profile.home_state.is_empty() {
        match parts.last_mut() {
            Some(last) => *last = format!("{} from {}", last, profile.home_state),
            None => parts.push(format!("From {}", profile.home_state)),
        }
    }

    if profile.gpa > 0.0 {
        parts.push(format!("GPA {:.1}", profile.gpa));
    }

    if !profile.degree_levels.is_empty() {
        parts.push(profile.degree_levels.join(", "));
    }

    if !profile.interest_areas.is_empty() {
        parts.push(profile.interest_areas.join(", "));
    }

    if let Some(max) = profile.max_tuition.filter(|m| *m > 0.0) {
        parts.push(format!("Max tuition ~${}/year", group_thousands(max)));
    }

    parts.join(SEPARATOR)
}

/// Summary of the hard constraints the recommendations were filtered by
pub fn summarize_constraints(profile: &ProfileSubmission) -> String {
    let mut parts: Vec<String> = Vec::new();

    if !profile.degree_levels.is_empty() {
        parts.push(format!("Degree: {}", profile.degree_levels.join(", ")));
    }

    if !profile.interest_areas.is_empty() {
        parts.push(format!("Interests: {}", profile.interest_areas.join(", ")));
    }

    if let Some(max) = profile.max_tuition.filter(|m| *m > 0.0) {
        parts.push(format!("Tuition ≤ ${}/year", group_thousands(max)));
    }

    match profile.location_pref.to_lowercase().as_str() {
        "instate" if !profile.home_state.is_empty() => {
            parts.push(format!("In-state only ({})", profile.home_state))
        }
        "out_of_state_ok" => parts.push("In-state or out-of-state".to_string()),
        "anywhere" => parts.push("Anywhere in the U.S.".to_string()),
        _ => {}
    }

    parts.join(SEPARATOR)
}
