use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum RegistryError {
    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    #[error("Package not found: {0}")]
    NotFound(String),

    #[error("Invalid response: {0}")]
    InvalidResponse(String),
}

/// Why no usable version could be determined for a module
///
/// This is an outcome, not a failure of the caller: every lower-level error
/// is folded into one of these variants at the resolver boundary.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Absence {
    #[error("no module name given")]
    MissingModuleName,

    #[error("{0:?} is not a valid module name")]
    InvalidModuleName(String),

    #[error("file not found: {}", .0.display())]
    FileNotFound(PathBuf),

    #[error("could not read {}: {reason}", .path.display())]
    Unreadable { path: PathBuf, reason: String },

    #[error("no version declared in {}", .0.display())]
    NoVersionDeclared(PathBuf),

    #[error("unparsable version {raw:?} in {}", .path.display())]
    UnparsableVersion { path: PathBuf, raw: String },

    #[error("{0} is not installed")]
    NotInstalled(String),

    #[error("{0} is not in the registry")]
    NotInRegistry(String),

    #[error("registry lookup for {module} failed: {reason}")]
    LookupFailed { module: String, reason: String },
}
