// Collaborators the engine reads from and writes into
pub mod form;
pub mod presets;
pub mod records;

pub use form::{ControlId, ProfileFormHost, DEGREE_OPTIONS, INTEREST_OPTIONS, US_STATES};
pub use presets::{apply_quick_fill_persona, clear_profile_form, DEFAULT_MAX_TUITION};
pub use records::RecordCollection;
