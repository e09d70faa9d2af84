// Model exports
pub mod domain;
pub mod requests;
pub mod responses;

pub use domain::{RecommendationRecord, FilterCriteria, SortKey, ListView, ProfileSnapshot, ProfileSubmission};
pub use requests::{Command, FieldEdit, FilterEdit};
pub use responses::{CompletenessIndicator, PairedView, FormView, DetailProjection, Update, ErrorResponse};
