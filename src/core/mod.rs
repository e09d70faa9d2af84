// Core engine exports
pub mod completeness;
pub mod detail;
pub mod engine;
pub mod filters;
pub mod numeric;
pub mod paired;
pub mod summary;

pub use completeness::{compute_completeness, is_complete, CompletenessTracker, ProfileField};
pub use detail::{format_tuition, project_detail};
pub use engine::{apply, compare_records};
pub use filters::{is_visible, matches_degree_level, within_tuition_bound};
pub use numeric::{parse_float, parse_int, format_number};
pub use paired::{Bounds, PairedControl, GPA_BOUNDS, MAX_TUITION_BOUNDS};
pub use summary::{summarize_constraints, summarize_profile};
