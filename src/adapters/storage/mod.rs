//! Storage adapters.

mod in_memory_project_repository;

pub use in_memory_project_repository::InMemoryProjectRepository;
