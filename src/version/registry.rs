//! Registry trait for fetching published module versions

#[cfg(test)]
use mockall::automock;

use crate::version::error::RegistryError;

/// Trait for looking up the currently published version of a module
#[cfg_attr(test, automock)]
#[async_trait::async_trait]
pub trait Registry: Send + Sync {
    /// Human-readable registry name used in diagnostics
    fn name(&self) -> &'static str;

    /// Fetches the latest published version of a module
    ///
    /// # Arguments
    /// * `module_name` - The module to look up (e.g., "Moose::Role")
    ///
    /// # Returns
    /// * `Ok(String)` - The version string as published
    /// * `Err(RegistryError)` - If the module is unknown or the fetch fails
    async fn fetch_latest_version(&self, module_name: &str) -> Result<String, RegistryError>;
}
