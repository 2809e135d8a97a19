//! AHP Ranking - Decision support backend using the Analytic Hierarchy Process
//!
//! This crate ranks alternatives against weighted criteria. Criteria weights
//! come from pairwise comparison matrices, alternatives are scored either
//! from normalized raw measurements or through a sub-criteria hierarchy, and
//! the result is a ranked list with consistency diagnostics.

pub mod adapters;
pub mod application;
pub mod config;
pub mod domain;
pub mod ports;
