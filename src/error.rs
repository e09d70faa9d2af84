use thiserror::Error;

/// Degradations the view engine absorbs instead of propagating
///
/// None of these ever reach a caller of the session; they are logged and the
/// affected operation falls back to its default.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ViewError {
    #[error("Control not present in form: {0}")]
    MissingControl(String),

    #[error("Unparseable numeric input: {0:?}")]
    UnparseableNumericInput(String),

    #[error("Unknown record reference: {0}")]
    UnknownRecordReference(String),
}

impl ViewError {
    /// Log and drop the error
    pub fn absorb(self) {
        tracing::debug!("Absorbed view error: {}", self);
    }
}

/// Errors that can occur while loading the recommendation list
#[derive(Debug, Error)]
pub enum LoadError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}
