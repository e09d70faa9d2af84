use serde::{Deserialize, Serialize};
use crate::core::{project_detail, summarize_constraints, summarize_profile, CompletenessTracker};
use crate::error::ViewError;
use crate::host::{apply_quick_fill_persona, clear_profile_form, ProfileFormHost, RecordCollection};
use crate::models::{
    Command, CompletenessIndicator, DetailProjection, FieldEdit, FilterCriteria, FilterEdit,
    FormView, ListView, ProfileSubmission, SortKey, Update,
};

/// Raw values of the filter and sort controls above the recommendation list
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FilterControls {
    #[serde(default)]
    pub degree_level: String,
    #[serde(default)]
    pub max_tuition: String,
    /// `None` when the page has no sort control
    #[serde(default)]
    pub sort_by: Option<String>,
}

impl FilterControls {
    pub fn criteria(&self) -> FilterCriteria {
        FilterCriteria::from_controls(&self.degree_level, &self.max_tuition)
    }

    pub fn sort_key(&self) -> SortKey {
        SortKey::from_control(self.sort_by.as_deref())
    }

    fn apply(&mut self, edit: FilterEdit) {
        match edit {
            FilterEdit::DegreeLevel(value) => self.degree_level = value,
            FilterEdit::MaxTuition(value) => self.max_tuition = value,
        }
    }
}

impl Default for FilterControls {
    fn default() -> Self {
        Self {
            degree_level: String::new(),
            max_tuition: String::new(),
            sort_by: Some("fit_desc".to_string()),
        }
    }
}

/// One page's worth of view state and the command dispatcher over it
///
/// Every command runs to completion synchronously. The list is always
/// recomputed from the upstream record order, so the result depends only on
/// the current controls.
#[derive(Debug, Clone)]
pub struct Session {
    form: ProfileFormHost,
    tracker: CompletenessTracker,
    records: RecordCollection,
    controls: FilterControls,
    list: ListView,
}

impl Session {
    /// Start a session: sync completeness and apply the initial controls once
    pub fn new(form: ProfileFormHost, records: RecordCollection, controls: FilterControls) -> Self {
        let mut session = Self {
            form,
            tracker: CompletenessTracker::new(),
            records,
            controls,
            list: ListView::default(),
        };
        session.recompute_completeness();
        session.refresh_list();

        tracing::info!(
            "Session started with {} recommendations ({}% profile complete)",
            session.records.len(),
            session.tracker.indicator().percent
        );
        session
    }

    /// Dispatch one UI command and return what the renderer should update
    pub fn dispatch(&mut self, command: Command) -> Update {
        tracing::trace!("Dispatching command: {:?}", command);

        match command {
            Command::FieldChanged { edit } => {
                self.field_changed(&edit);
                Update::Form(self.form_view())
            }
            Command::FilterChanged { edit } => {
                self.controls.apply(edit);
                self.refresh_list();
                Update::List(self.list.clone())
            }
            Command::SortChanged { sort_by } => {
                self.controls.sort_by = Some(sort_by);
                self.refresh_list();
                Update::List(self.list.clone())
            }
            Command::QuickFillRequested => {
                apply_quick_fill_persona(&mut self.form);
                self.recompute_completeness();
                Update::Form(self.form_view())
            }
            Command::ClearRequested => {
                clear_profile_form(&mut self.form);
                self.recompute_completeness();
                Update::Form(self.form_view())
            }
            Command::DetailRequested { program_id } => Update::Detail {
                detail: self.detail(program_id.as_deref()),
            },
            Command::GenerateRequested => {
                let submission = self.submission();
                let (profile_summary, constraints_summary) = submission
                    .as_ref()
                    .map(|s| (summarize_profile(s), summarize_constraints(s)))
                    .unwrap_or_default();
                Update::Submission {
                    submission,
                    profile_summary,
                    constraints_summary,
                }
            }
        }
    }

    fn field_changed(&mut self, edit: &FieldEdit) {
        match self.form.apply_edit(edit) {
            Ok(()) => self.recompute_completeness(),
            Err(e) => e.absorb(),
        }
    }

    fn recompute_completeness(&mut self) {
        let profile = self.form.snapshot();
        self.tracker.recompute(&profile);
    }

    fn refresh_list(&mut self) {
        self.list = crate::core::apply(
            self.records.as_slice(),
            &self.controls.criteria(),
            self.controls.sort_key(),
        );
        tracing::debug!(
            "Recommendation list refreshed: {} of {} visible",
            self.list.visible_count,
            self.records.len()
        );
    }

    /// Detail projection for a card; unknown or absent ids show nothing
    pub fn detail(&self, program_id: Option<&str>) -> Option<DetailProjection> {
        let id = program_id?;
        match self.records.find_by_id(id) {
            Some(record) => Some(project_detail(record)),
            None => {
                ViewError::UnknownRecordReference(id.to_string()).absorb();
                None
            }
        }
    }

    /// Payload for the recommendation endpoint, only once the profile is complete
    pub fn submission(&self) -> Option<ProfileSubmission> {
        if !self.tracker.indicator().generate_enabled {
            tracing::debug!("Generate requested with incomplete profile");
            return None;
        }
        Some(ProfileSubmission::from_snapshot(&self.form.snapshot()))
    }

    pub fn form_view(&self) -> FormView {
        FormView {
            completeness: self.tracker.indicator().clone(),
            gpa: self.form.gpa().map(|c| c.view()),
            max_tuition: self.form.max_tuition().map(|c| c.view()),
        }
    }

    pub fn completeness(&self) -> &CompletenessIndicator {
        self.tracker.indicator()
    }

    pub fn list(&self) -> &ListView {
        &self.list
    }

    pub fn controls(&self) -> &FilterControls {
        &self.controls
    }

    pub fn form(&self) -> &ProfileFormHost {
        &self.form
    }

    pub fn records(&self) -> &RecordCollection {
        &self.records
    }
}
