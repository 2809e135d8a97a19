//! Domain layer containing business logic and domain types.
//!
//! # Module Organization
//!
//! - `foundation` - Shared domain primitives (ids, timestamps, enums, errors)
//! - `ahp` - Pure Analytic Hierarchy Process engine
//! - `project` - Saved calculation records and the Project aggregate

pub mod ahp;
pub mod foundation;
pub mod project;
