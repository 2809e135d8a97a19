//! Adapters - Implementations of port interfaces.
//!
//! Adapters connect the domain to external systems:
//! - `http` - Axum REST API
//! - `storage` - Project persistence (in-memory)

pub mod http;
pub mod storage;

pub use http::{build_router, ProjectsAppState};
pub use storage::InMemoryProjectRepository;
