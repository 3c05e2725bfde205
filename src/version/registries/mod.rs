//! Registry implementations for fetching published module versions

pub mod metacpan;

pub use metacpan::MetaCpanRegistry;
