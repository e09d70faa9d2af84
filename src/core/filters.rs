use crate::models::{FilterCriteria, RecommendationRecord};

/// Check the degree-level filter (exact match, unset passes everything)
#[inline]
pub fn matches_degree_level(
    record: &RecommendationRecord,
    criteria: &FilterCriteria,
) -> bool {
    match criteria.degree_level.as_deref() {
        None | Some("") => true,
        Some(degree) => record.degree_level == degree,
    }
}

/// Check the inclusive max-tuition bound
///
/// Records with unknown tuition are never excluded by a bound.
#[inline]
pub fn within_tuition_bound(
    record: &RecommendationRecord,
    criteria: &FilterCriteria,
) -> bool {
    match (criteria.tuition_bound(), record.tuition()) {
        (Some(max), Some(tuition)) => tuition <= max,
        _ => true,
    }
}

/// Whether a record stays visible under the filter criteria
#[inline]
pub fn is_visible(
    record: &RecommendationRecord,
    criteria: &FilterCriteria,
) -> bool {
    matches_degree_level(record, criteria) && within_tuition_bound(record, criteria)
}
