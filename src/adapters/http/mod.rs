//! HTTP adapters - REST API implementations.
//!
//! Each domain module has its own HTTP adapter for endpoint exposure.

pub mod projects;
mod router;

// Re-export key types for convenience
pub use projects::{projects_router, ProjectsAppState};
pub use router::build_router;
