//! Shared helpers for integration tests

#![allow(dead_code)]

pub mod project;
pub mod registry;

pub use project::TestProject;
pub use registry::MockRegistry;
