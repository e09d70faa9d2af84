// Command dispatch exports
pub mod session;

pub use session::{FilterControls, Session};
