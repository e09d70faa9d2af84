use std::cmp::Ordering;
use std::collections::BTreeSet;
use crate::models::{FilterCriteria, ListView, RecommendationRecord, SortKey};
use crate::core::filters::is_visible;

/// Compare two records under a sort key
///
/// Unknown tuition sorts last in both tuition directions. Unrecognized keys
/// compare everything as equal so the stable sort keeps the input order.
pub fn compare_records(
    a: &RecommendationRecord,
    b: &RecommendationRecord,
    sort: SortKey,
) -> Ordering {
    match sort {
        SortKey::FitDescending => b.fit_value().cmp(&a.fit_value()),
        SortKey::TuitionAscending => {
            let a_val = a.tuition().unwrap_or(f64::INFINITY);
            let b_val = b.tuition().unwrap_or(f64::INFINITY);
            a_val.partial_cmp(&b_val).unwrap_or(Ordering::Equal)
        }
        SortKey::TuitionDescending => {
            let a_val = a.tuition().unwrap_or(f64::NEG_INFINITY);
            let b_val = b.tuition().unwrap_or(f64::NEG_INFINITY);
            b_val.partial_cmp(&a_val).unwrap_or(Ordering::Equal)
        }
        SortKey::Unrecognized => Ordering::Equal,
    }
}

/// Filter and order the full recommendation list
///
/// # Pipeline
/// 1. Filter pass marks each record visible or hidden
/// 2. Stable sort over every record, hidden ones included
/// 3. Count of visible records
///
/// Pure in its three inputs: the same records, criteria and key always
/// produce the same view.
pub fn apply(
    records: &[RecommendationRecord],
    filter: &FilterCriteria,
    sort: SortKey,
) -> ListView {
    let mut visible_count = 0;
    let mut visible_ids = BTreeSet::new();

    for record in records {
        if is_visible(record, filter) {
            visible_count += 1;
            visible_ids.insert(record.id.clone());
        }
    }

    // slice::sort_by is stable; ties keep their relative order
    let mut ordered: Vec<&RecommendationRecord> = records.iter().collect();
    ordered.sort_by(|a, b| compare_records(a, b, sort));

    ListView {
        ordered_ids: ordered.into_iter().map(|r| r.id.clone()).collect(),
        visible_ids,
        visible_count,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn create_record(id: &str, fit: Option<u8>, tuition: Option<f64>, degree: &str) -> RecommendationRecord {
        RecommendationRecord {
            id: id.to_string(),
            title: format!("Program {}", id),
            institution_line: String::new(),
            fit_score: fit,
            degree_level: degree.to_string(),
            annual_tuition: tuition,
            why_interests: String::new(),
            why_academic: String::new(),
            why_practical: String::new(),
        }
    }

    fn sample() -> Vec<RecommendationRecord> {
        vec![
            create_record("A", Some(90), Some(20000.0), "Bachelor's"),
            create_record("B", Some(70), None, "Master's"),
            create_record("C", Some(85), Some(30000.0), "Bachelor's"),
        ]
    }

    #[test]
    fn test_degree_filter_fit_sort() {
        let filter = FilterCriteria {
            degree_level: Some("Bachelor's".to_string()),
            max_tuition: None,
        };
        let view = apply(&sample(), &filter, SortKey::FitDescending);

        assert_eq!(view.ordered_ids, vec!["A", "C", "B"]);
        assert_eq!(view.visible_ids, BTreeSet::from(["A".to_string(), "C".to_string()]));
        assert_eq!(view.visible_count, 2);
    }

    #[test]
    fn test_tuition_filter_keeps_unknown() {
        let filter = FilterCriteria {
            degree_level: None,
            max_tuition: Some(25000.0),
        };
        let view = apply(&sample(), &filter, SortKey::TuitionAscending);

        assert_eq!(view.ordered_ids, vec!["A", "C", "B"]);
        assert_eq!(view.visible_ids, BTreeSet::from(["A".to_string(), "B".to_string()]));
        assert_eq!(view.visible_count, 2);
    }

    #[test]
    fn test_tuition_descending_unknown_last() {
        let view = apply(&sample(), &FilterCriteria::default(), SortKey::TuitionDescending);
        assert_eq!(view.ordered_ids, vec!["C", "A", "B"]);
    }

    #[test]
    fn test_fit_ties_are_stable() {
        let records = vec![
            create_record("x", Some(80), None, ""),
            create_record("y", Some(95), None, ""),
            create_record("z", Some(80), None, ""),
            create_record("w", None, None, ""),
            create_record("v", Some(0), None, ""),
        ];
        let view = apply(&records, &FilterCriteria::default(), SortKey::FitDescending);
        assert_eq!(view.ordered_ids, vec!["y", "x", "z", "w", "v"]);
    }

    #[test]
    fn test_unrecognized_key_keeps_order() {
        let view = apply(&sample(), &FilterCriteria::default(), SortKey::Unrecognized);
        assert_eq!(view.ordered_ids, vec!["A", "B", "C"]);
        assert_eq!(view.visible_count, 3);
    }

    #[test]
    fn test_empty_records() {
        let view = apply(&[], &FilterCriteria::default(), SortKey::FitDescending);
        assert!(view.ordered_ids.is_empty());
        assert_eq!(view.visible_count, 0);
    }
}
