//! Projects - Saved calculation records and their results.
//!
//! A [`ProjectInput`] is the string-keyed record clients submit. It resolves
//! into the engine's typed [`CalculationInput`](crate::domain::ahp::CalculationInput).

mod aggregate;
mod patch;
mod record;

pub use aggregate::{validate_title, Project, ProjectStatus, MIN_TITLE_LENGTH};
pub use patch::ProjectPatch;
pub use record::{
    FieldBags, FieldValue, ProjectInput, ALTERNATIVE_JUDGMENT_FIELD, DISTANCE_SCOPE_SUFFIX,
    SUB_WEIGHT_FIELD,
};
