// Integration tests for Course Finder

use course_finder::core::apply;
use course_finder::host::ControlId;
use course_finder::models::{Command, FieldEdit, FilterCriteria, FilterEdit, SortKey, Update};
use course_finder::{FilterControls, ProfileFormHost, RecordCollection, Session};
use std::collections::BTreeSet;

const RECORDS_JSON: &str = r#"[
    {"id": "A", "title": "BS Electrical Engineering", "institutionLine": "Northern Tech · Chicago, IL",
     "fitScore": 90, "degreeLevel": "Bachelor's", "annualTuition": 20000,
     "whyInterests": "Matches your interest areas: Engineering.",
     "whyAcademic": "Your GPA is roughly in line with the typical range for this school.",
     "whyPractical": "Located in your home state."},
    {"id": "B", "title": "MS Data Science", "institutionLine": "Lakeshore University · Evanston, IL",
     "fitScore": 70, "degreeLevel": "Master's", "annualTuition": null},
    {"id": "C", "title": "BS Computer Science", "institutionLine": "River State · Madison, WI",
     "fitScore": 85, "degreeLevel": "Bachelor's", "annualTuition": "30000"}
]"#;

fn create_records() -> RecordCollection {
    RecordCollection::from_json_str(RECORDS_JSON).unwrap()
}

fn create_session() -> Session {
    Session::new(ProfileFormHost::standard(), create_records(), FilterControls::default())
}

fn ids(values: &[&str]) -> BTreeSet<String> {
    values.iter().map(|v| v.to_string()).collect()
}

fn expect_list(update: Update) -> course_finder::ListView {
    match update {
        Update::List(view) => view,
        other => panic!("expected list update, got {:?}", other),
    }
}

fn expect_form(update: Update) -> course_finder::models::FormView {
    match update {
        Update::Form(view) => view,
        other => panic!("expected form update, got {:?}", other),
    }
}

#[test]
fn test_integration_degree_filter_fit_sort() {
    let records = create_records();
    let filter = FilterCriteria {
        degree_level: Some("Bachelor's".to_string()),
        max_tuition: None,
    };

    let view = apply(records.as_slice(), &filter, SortKey::FitDescending);

    assert_eq!(view.visible_ids, ids(&["A", "C"]));
    assert_eq!(view.ordered_ids, vec!["A", "C", "B"]);
    assert_eq!(view.visible_count, 2);
}

#[test]
fn test_integration_tuition_filter_ascending() {
    let records = create_records();
    let filter = FilterCriteria {
        degree_level: None,
        max_tuition: Some(25000.0),
    };

    let view = apply(records.as_slice(), &filter, SortKey::TuitionAscending);

    assert_eq!(view.visible_ids, ids(&["A", "B"]));
    assert_eq!(view.ordered_ids, vec!["A", "C", "B"]);
    assert_eq!(view.visible_count, 2);
}

#[test]
fn test_apply_is_idempotent() {
    let records = create_records();
    let filters = [
        FilterCriteria::default(),
        FilterCriteria { degree_level: Some("Bachelor's".to_string()), max_tuition: Some(25000.0) },
    ];
    let keys = [
        SortKey::FitDescending,
        SortKey::TuitionAscending,
        SortKey::TuitionDescending,
        SortKey::Unrecognized,
    ];

    for filter in &filters {
        for key in keys {
            let first = apply(records.as_slice(), filter, key);
            let reordered = records.reordered(&first);
            let second = apply(reordered.as_slice(), filter, key);

            assert_eq!(first, second, "not idempotent for {:?} / {:?}", filter, key);
            assert_eq!(first, apply(records.as_slice(), filter, key));
        }
    }
}

#[test]
fn test_session_filter_and_sort_commands() {
    let mut session = create_session();

    let view = expect_list(session.dispatch(Command::FilterChanged {
        edit: FilterEdit::DegreeLevel("Bachelor's".to_string()),
    }));
    assert_eq!(view.visible_count, 2);
    assert_eq!(view.ordered_ids, vec!["A", "C", "B"]);

    let view = expect_list(session.dispatch(Command::SortChanged {
        sort_by: "tuition_desc".to_string(),
    }));
    assert_eq!(view.ordered_ids, vec!["C", "A", "B"]);
    assert_eq!(view.visible_ids, ids(&["A", "C"]));

    // Clearing the degree filter shows everything again
    let view = expect_list(session.dispatch(Command::FilterChanged {
        edit: FilterEdit::DegreeLevel(String::new()),
    }));
    assert_eq!(view.visible_count, 3);

    // Unparseable bound means no bound
    let view = expect_list(session.dispatch(Command::FilterChanged {
        edit: FilterEdit::MaxTuition("lots".to_string()),
    }));
    assert_eq!(view.visible_count, 3);

    let view = expect_list(session.dispatch(Command::SortChanged {
        sort_by: "alphabetical".to_string(),
    }));
    assert_eq!(view.ordered_ids, vec!["A", "B", "C"]);
}

#[test]
fn test_repeated_events_are_idempotent() {
    let mut session = create_session();
    let command = Command::FilterChanged {
        edit: FilterEdit::MaxTuition("25000".to_string()),
    };

    let first = session.dispatch(command.clone());
    let second = session.dispatch(command);
    assert_eq!(first, second);

    let first = session.dispatch(Command::QuickFillRequested);
    let second = session.dispatch(Command::QuickFillRequested);
    assert_eq!(first, second);
}

#[test]
fn test_quick_fill_then_clear() {
    let mut session = create_session();

    let form = expect_form(session.dispatch(Command::QuickFillRequested));
    assert_eq!(form.completeness.percent, 100);
    assert!(form.completeness.generate_enabled);
    assert_eq!(form.completeness.hint, "You’re ready to generate recommendations.");
    assert_eq!(form.gpa.as_ref().map(|g| g.input.as_str()), Some("3.6"));
    assert_eq!(form.max_tuition.as_ref().map(|t| t.slider), Some(25000.0));

    let form = expect_form(session.dispatch(Command::ClearRequested));
    assert!(form.completeness.percent < 100);
    assert!(!form.completeness.generate_enabled);
    assert_eq!(
        form.completeness.hint,
        "Fill out the required fields to enable the Generate button."
    );
    assert_eq!(form.gpa.as_ref().map(|g| g.slider), Some(3.0));
    assert_eq!(form.max_tuition.as_ref().map(|t| t.input.as_str()), Some("25000"));
}

#[test]
fn test_field_edits_drive_completeness() {
    let mut session = create_session();
    let edits = vec![
        FieldEdit::Role { value: "student".to_string() },
        FieldEdit::CurrentStatus { value: "high_school_student".to_string() },
        FieldEdit::HomeState { value: "MN".to_string() },
        FieldEdit::DegreeLevel { value: "Associate".to_string(), checked: true },
        FieldEdit::InterestArea { value: "Healthcare".to_string(), checked: true },
    ];

    let mut last = session.completeness().percent;
    for edit in edits {
        let form = expect_form(session.dispatch(Command::FieldChanged { edit }));
        assert!(form.completeness.percent > last);
        last = form.completeness.percent;
    }
    assert_eq!(last, 100);

    // Dragging the GPA slider to zero unfills the GPA
    let form = expect_form(session.dispatch(Command::FieldChanged {
        edit: FieldEdit::GpaSlider { value: 0.0 },
    }));
    assert_eq!(form.completeness.percent, 83);
    assert_eq!(form.gpa.map(|g| g.input), Some("0".to_string()));

    // Typed GPA above range clamps to 4 and refills it
    let form = expect_form(session.dispatch(Command::FieldChanged {
        edit: FieldEdit::GpaInput { value: "5".to_string() },
    }));
    assert_eq!(form.completeness.percent, 100);
    assert_eq!(form.gpa.map(|g| (g.slider, g.input)), Some((4.0, "4".to_string())));
}

#[test]
fn test_tuition_pair_does_not_affect_completeness() {
    let mut session = create_session();
    let before = session.completeness().clone();

    let form = expect_form(session.dispatch(Command::FieldChanged {
        edit: FieldEdit::MaxTuitionInput { value: "-10".to_string() },
    }));
    assert_eq!(form.max_tuition.as_ref().map(|t| t.slider), Some(0.0));
    assert_eq!(form.completeness, before);

    let form = expect_form(session.dispatch(Command::FieldChanged {
        edit: FieldEdit::MaxTuitionInput { value: "999999".to_string() },
    }));
    assert_eq!(form.max_tuition.map(|t| t.slider), Some(80000.0));
    assert_eq!(form.completeness, before);
}

#[test]
fn test_tuition_slider_mirrors_into_input() {
    let mut session = create_session();
    let before = session.completeness().clone();

    let form = expect_form(session.dispatch(Command::FieldChanged {
        edit: FieldEdit::MaxTuitionSlider { value: 42500.0 },
    }));
    let tuition = form.max_tuition.unwrap();
    assert_eq!(tuition.slider, 42500.0);
    assert_eq!(tuition.input, "42500");
    assert_eq!(form.completeness, before);

    // The GPA pair is untouched by the tuition slider
    assert_eq!(form.gpa.map(|g| g.input), Some("3".to_string()));
}

#[test]
fn test_missing_control_degrades() {
    let form = ProfileFormHost::standard().without(ControlId::InterestAreas);
    let mut session = Session::new(form, create_records(), FilterControls::default());

    let form = expect_form(session.dispatch(Command::FieldChanged {
        edit: FieldEdit::InterestArea { value: "Arts".to_string(), checked: true },
    }));
    assert_eq!(form.completeness.percent, 17);

    let form = expect_form(session.dispatch(Command::QuickFillRequested));
    assert_eq!(form.completeness.percent, 83);
    assert!(!form.completeness.generate_enabled);
}

#[test]
fn test_detail_requests() {
    let mut session = create_session();

    match session.dispatch(Command::DetailRequested { program_id: Some("A".to_string()) }) {
        Update::Detail { detail: Some(detail) } => {
            assert_eq!(detail.title, "BS Electrical Engineering");
            assert_eq!(detail.institution_line, "Northern Tech · Chicago, IL");
            assert_eq!(detail.fit_score_label, "90/100");
            assert_eq!(detail.tuition_label, "$20,000/year");
            assert_eq!(detail.why_practical, "Located in your home state.");
        }
        other => panic!("expected detail, got {:?}", other),
    }

    match session.dispatch(Command::DetailRequested { program_id: Some("B".to_string()) }) {
        Update::Detail { detail: Some(detail) } => {
            assert_eq!(detail.tuition_label, "Not available");
            assert_eq!(detail.degree_level, "Master's");
        }
        other => panic!("expected detail, got {:?}", other),
    }

    assert_eq!(
        session.dispatch(Command::DetailRequested { program_id: Some("Z".to_string()) }),
        Update::Detail { detail: None }
    );
    assert_eq!(
        session.dispatch(Command::DetailRequested { program_id: None }),
        Update::Detail { detail: None }
    );
}

#[test]
fn test_generate_request() {
    let mut session = create_session();

    match session.dispatch(Command::GenerateRequested) {
        Update::Submission { submission, profile_summary, .. } => {
            assert!(submission.is_none());
            assert!(profile_summary.is_empty());
        }
        other => panic!("expected submission, got {:?}", other),
    }

    session.dispatch(Command::QuickFillRequested);
    session.dispatch(Command::FieldChanged {
        edit: FieldEdit::LocationPref { value: "instate".to_string() },
    });
    session.dispatch(Command::FieldChanged {
        edit: FieldEdit::SatScore { value: "1310".to_string() },
    });

    match session.dispatch(Command::GenerateRequested) {
        Update::Submission { submission, profile_summary, constraints_summary } => {
            let submission = submission.unwrap();
            assert_eq!(submission.role, "student");
            assert_eq!(submission.sat_score, Some(1310));
            assert_eq!(submission.act_score, None);
            assert_eq!(
                profile_summary,
                "Student from IL · GPA 3.6 · Bachelor's · Engineering, Computer Science · Max tuition ~$25,000/year"
            );
            assert_eq!(
                constraints_summary,
                "Degree: Bachelor's · Interests: Engineering, Computer Science · Tuition ≤ $25,000/year · In-state only (IL)"
            );
        }
        other => panic!("expected submission, got {:?}", other),
    }
}

#[test]
fn test_commands_from_json_lines() {
    let mut session = create_session();
    let lines = [
        r#"{"command":"quick_fill_requested"}"#,
        r#"{"command":"sort_changed","sort_by":"tuition_asc"}"#,
        r#"{"command":"filter_changed","edit":{"control":"max_tuition","value":"25000"}}"#,
    ];

    let updates: Vec<Update> = lines
        .iter()
        .map(|line| session.dispatch(serde_json::from_str(line).unwrap()))
        .collect();

    let last = serde_json::to_value(&updates[2]).unwrap();
    assert_eq!(last["update"], "list");
    assert_eq!(last["orderedIds"], serde_json::json!(["A", "C", "B"]));
    assert_eq!(last["visibleIds"], serde_json::json!(["A", "B"]));
    assert_eq!(last["visibleCount"], 2);
}

#[test]
fn test_empty_collection() {
    let mut session = Session::new(
        ProfileFormHost::standard(),
        RecordCollection::default(),
        FilterControls::default(),
    );
    let view = expect_list(session.dispatch(Command::SortChanged {
        sort_by: "tuition_asc".to_string(),
    }));
    assert!(view.ordered_ids.is_empty());
    assert_eq!(view.visible_count, 0);
}
