//! Pipeline entry points for multi-step operations.
//!
//! - `run_survey`: Subjects of every catalog class
//! - `run_validate`: Check configuration and the class catalog

pub mod survey;
pub mod validate;

pub use survey::{ClassSurvey, run_survey};
pub use validate::run_validate;
