//! Version resolution from the three places a module version can live
//!
//! - installed: the copy reachable through the module search path
//! - source: the project's own `lib` tree
//! - registry: the latest published release
//!
//! Every failure below this boundary (I/O, extraction, parsing, network) is
//! turned into an [`Absence`]; nothing is raised to the caller.

use std::path::{Path, PathBuf};
use std::sync::Arc;

use tracing::{debug, warn};

use crate::config::CheckerConfig;
use crate::parser::perl_module::PerlModuleExtractor;
use crate::parser::traits::{ExtractError, VersionExtractor};
use crate::parser::types::ModuleName;
use crate::version::error::{Absence, RegistryError};
use crate::version::installed::SearchPaths;
use crate::version::registry::Registry;
use crate::version::types::Version;

/// Outcome of looking up a version
pub type Resolution = Result<Version, Absence>;

/// Resolves module versions from disk and from a registry
pub struct VersionResolver {
    source_dir: PathBuf,
    source_extension: String,
    search_paths: SearchPaths,
    extractor: Arc<dyn VersionExtractor>,
    registry: Arc<dyn Registry>,
}

impl VersionResolver {
    /// Create a resolver with the given components
    pub fn new(
        config: &CheckerConfig,
        search_paths: SearchPaths,
        extractor: Arc<dyn VersionExtractor>,
        registry: Arc<dyn Registry>,
    ) -> Self {
        Self {
            source_dir: config.source_dir(),
            source_extension: config.source_extension.clone(),
            search_paths,
            extractor,
            registry,
        }
    }

    /// Create a resolver for Perl modules, discovering the search path
    pub fn from_config(config: &CheckerConfig, registry: Arc<dyn Registry>) -> Self {
        Self::new(
            config,
            SearchPaths::discover(config),
            Arc::new(PerlModuleExtractor::new()),
            registry,
        )
    }

    /// Get the registry used for published versions
    pub fn registry(&self) -> &Arc<dyn Registry> {
        &self.registry
    }

    /// Path of the module inside the project's source tree
    pub fn source_path(&self, module: &ModuleName) -> PathBuf {
        self.source_dir.join(module.relative_path(&self.source_extension))
    }

    /// Version of the copy found first on the installed-module search path
    pub fn resolve_installed(&self, module: &ModuleName) -> Resolution {
        let relative = module.relative_path(&self.source_extension);
        let Some(path) = self.search_paths.find(&relative) else {
            debug!("{} not found in installed module search path", module);
            return Err(Absence::NotInstalled(module.to_string()));
        };
        debug!("Installed copy of {} found at {:?}", module, path);
        self.read_declared_version(&path)
    }

    /// Version declared in the project's own source file
    pub fn resolve_from_source(&self, module: &ModuleName) -> Resolution {
        let path = self.source_path(module);
        if !path.is_file() {
            return Err(Absence::FileNotFound(path));
        }
        self.read_declared_version(&path)
    }

    /// Latest version published in the registry
    pub async fn resolve_from_registry(&self, module: &ModuleName) -> Resolution {
        let raw = match self.registry.fetch_latest_version(module.as_str()).await {
            Ok(raw) => raw,
            Err(RegistryError::NotFound(_)) => {
                return Err(Absence::NotInRegistry(module.to_string()));
            }
            Err(e) => {
                warn!("{} lookup for {} failed: {}", self.registry.name(), module, e);
                return Err(Absence::LookupFailed {
                    module: module.to_string(),
                    reason: e.to_string(),
                });
            }
        };

        Version::parse(&raw).map_err(|e| {
            warn!(
                "{} returned unparsable version for {}: {}",
                self.registry.name(),
                module,
                e
            );
            Absence::LookupFailed {
                module: module.to_string(),
                reason: format!("unparsable version {raw:?}"),
            }
        })
    }

    fn read_declared_version(&self, path: &Path) -> Resolution {
        let content = std::fs::read_to_string(path).map_err(|e| Absence::Unreadable {
            path: path.to_path_buf(),
            reason: e.to_string(),
        })?;

        let raw = self.extractor.extract(&content).map_err(|e| match e {
            ExtractError::NotDeclared => Absence::NoVersionDeclared(path.to_path_buf()),
            ExtractError::NotLiteral(expression) => Absence::UnparsableVersion {
                path: path.to_path_buf(),
                raw: expression,
            },
        })?;

        Version::parse(&raw).map_err(|_| Absence::UnparsableVersion {
            path: path.to_path_buf(),
            raw,
        })
    }
}
