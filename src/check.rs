//! Release checks comparing the source version with installed and published ones

use std::sync::Arc;

use tracing::debug;

use crate::config::CheckerConfig;
use crate::parser::types::ModuleName;
use crate::report::{Outcome, Reporter, report};
use crate::version::compare::greater_than;
use crate::version::error::Absence;
use crate::version::registries::MetaCpanRegistry;
use crate::version::registry::Registry;
use crate::version::resolver::{Resolution, VersionResolver};
use crate::version::types::Version;

/// Runs the "version was bumped" assertions for modules of one project
pub struct VersionChecker {
    resolver: VersionResolver,
}

impl VersionChecker {
    /// Create a checker against the configured MetaCPAN instance
    pub fn new(config: &CheckerConfig) -> Self {
        let registry = Arc::new(MetaCpanRegistry::new(config.registry.url.clone()));
        Self::with_registry(config, registry)
    }

    /// Create a checker with a custom registry client
    pub fn with_registry(config: &CheckerConfig, registry: Arc<dyn Registry>) -> Self {
        Self::with_resolver(VersionResolver::from_config(config, registry))
    }

    pub fn with_resolver(resolver: VersionResolver) -> Self {
        Self { resolver }
    }

    pub fn resolver(&self) -> &VersionResolver {
        &self.resolver
    }

    /// Assert that the source version of `module` is greater than the installed one
    ///
    /// Returns `false` with a diagnostic when the name is missing or either
    /// version cannot be determined.
    pub fn has_greater_version<'a>(
        &self,
        reporter: &mut dyn Reporter,
        module: impl Into<Option<&'a str>>,
    ) -> bool {
        let module = module.into();
        let description = describe(module, "has greater version");
        self.has_greater_version_named(reporter, module, &description)
    }

    /// [`has_greater_version`](Self::has_greater_version) with an explicit test description
    pub fn has_greater_version_named<'a>(
        &self,
        reporter: &mut dyn Reporter,
        module: impl Into<Option<&'a str>>,
        description: &str,
    ) -> bool {
        let versions = validate(module.into()).and_then(|module| {
            let installed = self.resolver.resolve_installed(&module);
            let source = self.resolver.resolve_from_source(&module);
            both(source, installed)
        });
        conclude(reporter, versions, description, "installed")
    }

    /// Assert that the source version of `module` is greater than the published one
    ///
    /// The registry lookup may block on the network; a failed or unknown
    /// lookup is a diagnostic, not an assertion failure.
    pub async fn has_greater_version_than_cpan<'a>(
        &self,
        reporter: &mut dyn Reporter,
        module: impl Into<Option<&'a str>>,
    ) -> bool {
        let module = module.into();
        let description = describe(module, "has greater version than on CPAN");
        self.has_greater_version_than_cpan_named(reporter, module, &description).await
    }

    /// [`has_greater_version_than_cpan`](Self::has_greater_version_than_cpan) with an explicit
    /// test description
    pub async fn has_greater_version_than_cpan_named<'a>(
        &self,
        reporter: &mut dyn Reporter,
        module: impl Into<Option<&'a str>>,
        description: &str,
    ) -> bool {
        let versions = match validate(module.into()) {
            Ok(module) => {
                let published = self.resolver.resolve_from_registry(&module).await;
                let source = self.resolver.resolve_from_source(&module);
                both(source, published)
            }
            Err(absence) => Err(absence),
        };
        conclude(
            reporter,
            versions,
            description,
            self.resolver.registry().name(),
        )
    }
}

fn describe(module: Option<&str>, check: &str) -> String {
    match module.map(str::trim).filter(|name| !name.is_empty()) {
        Some(name) => format!("{} {}", name, check),
        None => format!("module {}", check),
    }
}

fn validate(module: Option<&str>) -> Result<ModuleName, Absence> {
    let name = module.map(str::trim).unwrap_or_default();
    if name.is_empty() {
        return Err(Absence::MissingModuleName);
    }
    name.parse().map_err(|()| Absence::InvalidModuleName(name.to_string()))
}

/// Pair the source version with the other one, short-circuiting on any absence
fn both(source: Resolution, other: Resolution) -> Result<(Version, Version), Absence> {
    Ok((source?, other?))
}

/// Report whether the source version is greater
///
/// A failed assertion is followed by a diagnostic naming both versions.
fn conclude(
    reporter: &mut dyn Reporter,
    versions: Result<(Version, Version), Absence>,
    description: &str,
    other_label: &str,
) -> bool {
    let compared = versions.as_ref().ok().cloned();
    let greater = report(
        reporter,
        versions.map(|(source, other)| greater_than(&source, &other)),
        description,
    );

    if let Some((source, other)) = compared {
        debug!(
            "source version {} vs {} version {}: greater = {}",
            source, other_label, other, greater
        );
        if !greater {
            reporter.record(
                Outcome::Diagnostic,
                &format!(
                    "source version {} is not greater than {} version {}",
                    source, other_label, other
                ),
            );
        }
    }
    greater
}
