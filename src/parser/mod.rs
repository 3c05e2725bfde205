//! Parser layer
//! - traits.rs: VersionExtractor trait definition
//! - types.rs: Common types (ModuleName)
//! - perl_module.rs: static `$VERSION` extraction from `.pm` files

pub mod perl_module;
pub mod traits;
pub mod types;

pub use perl_module::PerlModuleExtractor;
pub use traits::{ExtractError, VersionExtractor};
pub use types::ModuleName;
