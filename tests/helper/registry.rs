//! Registry test utilities

use std::collections::HashMap;

use async_trait::async_trait;

use greater_version::version::error::RegistryError;
use greater_version::version::registry::Registry;

/// Mock registry for testing
#[derive(Default)]
pub struct MockRegistry {
    versions: HashMap<String, String>,
    failing: bool,
    hanging: bool,
}

impl MockRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_version(mut self, module: &str, version: &str) -> Self {
        self.versions.insert(module.to_string(), version.to_string());
        self
    }

    /// Every lookup fails as if the registry were unreachable
    pub fn unreachable() -> Self {
        Self {
            failing: true,
            ..Self::default()
        }
    }

    /// Every lookup waits forever
    pub fn hanging() -> Self {
        Self {
            hanging: true,
            ..Self::default()
        }
    }
}

#[async_trait]
impl Registry for MockRegistry {
    fn name(&self) -> &'static str {
        "CPAN"
    }

    async fn fetch_latest_version(&self, module_name: &str) -> Result<String, RegistryError> {
        if self.hanging {
            std::future::pending::<()>().await;
        }
        if self.failing {
            return Err(RegistryError::InvalidResponse("registry unreachable".to_string()));
        }
        match self.versions.get(module_name) {
            Some(version) => Ok(version.clone()),
            None => Err(RegistryError::NotFound(module_name.to_string())),
        }
    }
}
