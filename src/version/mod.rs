//! Version management layer for module release checks
//!
//! This module provides the core functionality for resolving a module's
//! version from its source tree, its installed copy and the public registry,
//! and for comparing those versions.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────┐     ┌─────────────┐     ┌─────────────┐
//! │  Installed  │────▶│  Resolver   │◀────│  Registry   │
//! │ (@INC scan) │     │ (Absence on │     │   (fetch)   │
//! └─────────────┘     │   failure)  │     └─────────────┘
//!                     └─────────────┘            │
//!                            │                   ▼
//!                            ▼            ┌─────────────┐
//!                     ┌─────────────┐     │ Registries  │
//!                     │   Compare   │     │  (MetaCPAN) │
//!                     │(version cmp)│     └─────────────┘
//!                     └─────────────┘
//! ```
//!
//! # Modules
//!
//! - [`compare`]: Strict "greater than" over parsed versions
//! - [`error`]: Registry errors and the `Absence` resolution outcome
//! - [`installed`]: Installed-module search path
//! - [`registry`]: Registry trait for fetching published versions
//! - [`registries`]: Concrete registry implementations (MetaCPAN)
//! - [`resolver`]: Three-tier version resolution
//! - [`types`]: The `Version` type

pub mod compare;
pub mod error;
pub mod installed;
pub mod registries;
pub mod registry;
pub mod resolver;
pub mod types;
