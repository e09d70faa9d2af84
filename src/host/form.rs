use std::fmt;
use crate::core::paired::PairedControl;
use crate::error::ViewError;
use crate::models::{FieldEdit, ProfileSnapshot};

pub const ROLE_OPTIONS: &[&str] = &["student", "parent"];

pub const DEGREE_OPTIONS: &[&str] = &["Certificate", "Associate", "Bachelor's"];

pub const INTEREST_OPTIONS: &[&str] = &[
    "Engineering",
    "Computer Science",
    "Business",
    "Healthcare",
    "Arts",
];

pub const LOCATION_OPTIONS: &[&str] = &["instate", "out_of_state_ok", "anywhere"];

pub const US_STATES: &[&str] = &[
    "AL", "AK", "AZ", "AR", "CA", "CO", "CT", "DE", "FL", "GA",
    "HI", "ID", "IL", "IN", "IA", "KS", "KY", "LA", "ME", "MD",
    "MA", "MI", "MN", "MS", "MO", "MT", "NE", "NV", "NH", "NJ",
    "NM", "NY", "NC", "ND", "OH", "OK", "OR", "PA", "RI", "SC",
    "SD", "TN", "TX", "UT", "VT", "VA", "WA", "WV", "WI", "WY",
];

/// Initial slider positions
pub const INITIAL_GPA: f64 = 3.0;
pub const INITIAL_MAX_TUITION: f64 = 25_000.0;

/// Identifies one control of the profile form
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ControlId {
    Role,
    CurrentStatus,
    HomeState,
    LocationPref,
    Gpa,
    MaxTuition,
    DegreeLevels,
    InterestAreas,
    SatScore,
    ActScore,
}

impl fmt::Display for ControlId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            ControlId::Role => "role",
            ControlId::CurrentStatus => "current_status",
            ControlId::HomeState => "home_state",
            ControlId::LocationPref => "location_pref",
            ControlId::Gpa => "gpa",
            ControlId::MaxTuition => "max_tuition",
            ControlId::DegreeLevels => "degree_levels",
            ControlId::InterestAreas => "interest_areas",
            ControlId::SatScore => "sat_score",
            ControlId::ActScore => "act_score",
        };
        f.write_str(name)
    }
}

/// Radio group; at most one option selected
#[derive(Debug, Clone, PartialEq)]
pub struct RadioGroup {
    options: &'static [&'static str],
    selected: Option<&'static str>,
}

impl RadioGroup {
    pub fn new(options: &'static [&'static str]) -> Self {
        Self { options, selected: None }
    }

    pub fn select(&mut self, value: &str) -> Result<(), ViewError> {
        let option = self
            .options
            .iter()
            .find(|o| **o == value)
            .ok_or_else(|| ViewError::MissingControl(format!("role[{}]", value)))?;
        self.selected = Some(*option);
        Ok(())
    }

    pub fn clear(&mut self) {
        self.selected = None;
    }

    pub fn selected(&self) -> Option<&'static str> {
        self.selected
    }
}

/// Select box; a closed option list empties on unknown values
#[derive(Debug, Clone, PartialEq)]
pub struct SelectControl {
    options: Option<&'static [&'static str]>,
    value: String,
}

impl SelectControl {
    pub fn open() -> Self {
        Self { options: None, value: String::new() }
    }

    pub fn closed(options: &'static [&'static str]) -> Self {
        Self { options: Some(options), value: String::new() }
    }

    pub fn set(&mut self, value: &str) {
        let known = match self.options {
            Some(options) => value.is_empty() || options.iter().any(|o| *o == value),
            None => true,
        };
        if known {
            self.value = value.to_string();
        } else {
            tracing::debug!("Select has no option {:?}; resetting to empty", value);
            self.value.clear();
        }
    }

    pub fn value(&self) -> &str {
        &self.value
    }
}

/// Fixed set of checkboxes sharing a class
#[derive(Debug, Clone, PartialEq)]
pub struct CheckboxGroup {
    control: ControlId,
    boxes: Vec<(&'static str, bool)>,
}

impl CheckboxGroup {
    pub fn new(control: ControlId, options: &'static [&'static str]) -> Self {
        Self {
            control,
            boxes: options.iter().map(|o| (*o, false)).collect(),
        }
    }

    pub fn set(&mut self, value: &str, checked: bool) -> Result<(), ViewError> {
        let control = self.control;
        let entry = self
            .boxes
            .iter_mut()
            .find(|(option, _)| *option == value)
            .ok_or_else(|| ViewError::MissingControl(format!("{}[{}]", control, value)))?;
        entry.1 = checked;
        Ok(())
    }

    /// Check exactly the boxes matching `keep`
    pub fn check_only(&mut self, keep: impl Fn(&str) -> bool) {
        for (option, checked) in &mut self.boxes {
            *checked = keep(option);
        }
    }

    pub fn clear(&mut self) {
        self.check_only(|_| false);
    }

    /// Checked values in form order
    pub fn checked_values(&self) -> Vec<String> {
        self.boxes
            .iter()
            .filter(|(_, checked)| *checked)
            .map(|(option, _)| option.to_string())
            .collect()
    }
}

/// Owner of the raw profile form values
///
/// Any control may be absent; reads from an absent control are empty and
/// writes to it are rejected with `ViewError::MissingControl`.
#[derive(Debug, Clone, PartialEq)]
pub struct ProfileFormHost {
    pub(crate) role: Option<RadioGroup>,
    pub(crate) current_status: Option<SelectControl>,
    pub(crate) home_state: Option<SelectControl>,
    pub(crate) location_pref: Option<SelectControl>,
    pub(crate) gpa: Option<PairedControl>,
    pub(crate) max_tuition: Option<PairedControl>,
    pub(crate) degree_levels: Option<CheckboxGroup>,
    pub(crate) interest_areas: Option<CheckboxGroup>,
    pub(crate) sat_score: Option<String>,
    pub(crate) act_score: Option<String>,
}

impl ProfileFormHost {
    /// The full profile form with every control present
    pub fn standard() -> Self {
        Self {
            role: Some(RadioGroup::new(ROLE_OPTIONS)),
            current_status: Some(SelectControl::open()),
            home_state: Some(SelectControl::closed(US_STATES)),
            location_pref: Some(SelectControl::closed(LOCATION_OPTIONS)),
            gpa: Some(PairedControl::gpa(INITIAL_GPA)),
            max_tuition: Some(PairedControl::max_tuition(INITIAL_MAX_TUITION)),
            degree_levels: Some(CheckboxGroup::new(ControlId::DegreeLevels, DEGREE_OPTIONS)),
            interest_areas: Some(CheckboxGroup::new(ControlId::InterestAreas, INTEREST_OPTIONS)),
            sat_score: Some(String::new()),
            act_score: Some(String::new()),
        }
    }

    /// Remove a control, as when a page variant does not render it
    pub fn without(mut self, control: ControlId) -> Self {
        match control {
            ControlId::Role => self.role = None,
            ControlId::CurrentStatus => self.current_status = None,
            ControlId::HomeState => self.home_state = None,
            ControlId::LocationPref => self.location_pref = None,
            ControlId::Gpa => self.gpa = None,
            ControlId::MaxTuition => self.max_tuition = None,
            ControlId::DegreeLevels => self.degree_levels = None,
            ControlId::InterestAreas => self.interest_areas = None,
            ControlId::SatScore => self.sat_score = None,
            ControlId::ActScore => self.act_score = None,
        }
        self
    }

    pub fn has_control(&self, control: ControlId) -> bool {
        match control {
            ControlId::Role => self.role.is_some(),
            ControlId::CurrentStatus => self.current_status.is_some(),
            ControlId::HomeState => self.home_state.is_some(),
            ControlId::LocationPref => self.location_pref.is_some(),
            ControlId::Gpa => self.gpa.is_some(),
            ControlId::MaxTuition => self.max_tuition.is_some(),
            ControlId::DegreeLevels => self.degree_levels.is_some(),
            ControlId::InterestAreas => self.interest_areas.is_some(),
            ControlId::SatScore => self.sat_score.is_some(),
            ControlId::ActScore => self.act_score.is_some(),
        }
    }

    pub fn gpa(&self) -> Option<&PairedControl> {
        self.gpa.as_ref()
    }

    pub fn max_tuition(&self) -> Option<&PairedControl> {
        self.max_tuition.as_ref()
    }

    /// Read every control into a plain snapshot
    pub fn snapshot(&self) -> ProfileSnapshot {
        fn select_value(control: &Option<SelectControl>) -> String {
            control.as_ref().map(|c| c.value().to_string()).unwrap_or_default()
        }
        fn checked(group: &Option<CheckboxGroup>) -> Vec<String> {
            group.as_ref().map(CheckboxGroup::checked_values).unwrap_or_default()
        }

        ProfileSnapshot {
            role: self.role.as_ref().and_then(RadioGroup::selected).map(str::to_string),
            current_status: select_value(&self.current_status),
            home_state: select_value(&self.home_state),
            location_pref: select_value(&self.location_pref),
            gpa: self.gpa.as_ref().map(PairedControl::value),
            max_tuition: self.max_tuition.as_ref().map(PairedControl::value),
            degree_levels: checked(&self.degree_levels),
            interest_areas: checked(&self.interest_areas),
            sat_score: self.sat_score.clone().unwrap_or_default(),
            act_score: self.act_score.clone().unwrap_or_default(),
        }
    }

    /// Apply one control edit
    pub fn apply_edit(&mut self, edit: &FieldEdit) -> Result<(), ViewError> {
        match edit {
            FieldEdit::Role { value } => control(&mut self.role, ControlId::Role)?.select(value),
            FieldEdit::CurrentStatus { value } => {
                control(&mut self.current_status, ControlId::CurrentStatus)?.set(value);
                Ok(())
            }
            FieldEdit::HomeState { value } => {
                control(&mut self.home_state, ControlId::HomeState)?.set(value);
                Ok(())
            }
            FieldEdit::LocationPref { value } => {
                control(&mut self.location_pref, ControlId::LocationPref)?.set(value);
                Ok(())
            }
            FieldEdit::GpaSlider { value } => {
                control(&mut self.gpa, ControlId::Gpa)?.on_primary_change(*value);
                Ok(())
            }
            FieldEdit::GpaInput { value } => control(&mut self.gpa, ControlId::Gpa)?
                .on_secondary_change(value)
                .map(|_| ()),
            FieldEdit::MaxTuitionSlider { value } => {
                control(&mut self.max_tuition, ControlId::MaxTuition)?.on_primary_change(*value);
                Ok(())
            }
            FieldEdit::MaxTuitionInput { value } => control(&mut self.max_tuition, ControlId::MaxTuition)?
                .on_secondary_change(value)
                .map(|_| ()),
            FieldEdit::DegreeLevel { value, checked } => {
                control(&mut self.degree_levels, ControlId::DegreeLevels)?.set(value, *checked)
            }
            FieldEdit::InterestArea { value, checked } => {
                control(&mut self.interest_areas, ControlId::InterestAreas)?.set(value, *checked)
            }
            FieldEdit::SatScore { value } => {
                *control(&mut self.sat_score, ControlId::SatScore)? = value.clone();
                Ok(())
            }
            FieldEdit::ActScore { value } => {
                *control(&mut self.act_score, ControlId::ActScore)? = value.clone();
                Ok(())
            }
        }
    }
}

impl Default for ProfileFormHost {
    fn default() -> Self {
        Self::standard()
    }
}

fn control<T>(slot: &mut Option<T>, id: ControlId) -> Result<&mut T, ViewError> {
    slot.as_mut().ok_or_else(|| ViewError::MissingControl(id.to_string()))
}
