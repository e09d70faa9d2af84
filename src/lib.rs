//! Course Finder - view engine for the course recommendation app
//!
//! This library holds the client-side state of the Course Finder pages:
//! profile completeness, slider/number-field pairs, persona presets, and the
//! filter/sort pass over the server-rendered recommendation list. UI events
//! arrive as [`Command`]s and are dispatched against an owned [`Session`].

pub mod config;
pub mod core;
pub mod dispatch;
pub mod error;
pub mod host;
pub mod models;

// Re-export commonly used types
pub use crate::core::{apply, compute_completeness, PairedControl};
pub use dispatch::{FilterControls, Session};
pub use error::{LoadError, ViewError};
pub use host::{ProfileFormHost, RecordCollection};
pub use models::{Command, FilterCriteria, ListView, RecommendationRecord, SortKey, Update};
