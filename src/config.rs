use serde::Deserialize;
use std::path::{Path, PathBuf};

use crate::version::registries::metacpan::DEFAULT_METACPAN_REGISTRY;

/// Timeout for registry lookups made by the command line tool (30 seconds)
pub const FETCH_TIMEOUT_MS: u64 = 30_000;

/// Directory under the project root holding the module sources
pub const DEFAULT_LIB_DIR: &str = "lib";

/// Extension of module source files
pub const DEFAULT_SOURCE_EXTENSION: &str = "pm";

/// Name of the log file inside the data directory
pub const LOG_FILE_NAME: &str = "greater-version.log";

/// Path component marking build output that must not count as installed
pub const DEFAULT_EXCLUDED_COMPONENT: &str = "blib";

/// Checker configuration structure
#[derive(Debug, Clone, Deserialize, PartialEq)]
#[serde(default, rename_all = "camelCase")]
pub struct CheckerConfig {
    /// Root of the distribution being released
    pub project_root: PathBuf,
    /// Source directory relative to `project_root`
    pub lib_dir: PathBuf,
    pub source_extension: String,
    /// Explicit installed-module search path; discovered when unset
    pub search_paths: Option<Vec<PathBuf>>,
    /// Search path entries containing any of these components are skipped
    pub exclude_components: Vec<String>,
    pub registry: RegistryConfig,
}

impl Default for CheckerConfig {
    fn default() -> Self {
        Self {
            project_root: PathBuf::from("."),
            lib_dir: PathBuf::from(DEFAULT_LIB_DIR),
            source_extension: DEFAULT_SOURCE_EXTENSION.to_string(),
            search_paths: None,
            exclude_components: vec![DEFAULT_EXCLUDED_COMPONENT.to_string()],
            registry: RegistryConfig::default(),
        }
    }
}

impl CheckerConfig {
    /// Read a JSON configuration file
    pub fn from_file(path: &Path) -> anyhow::Result<Self> {
        let content = std::fs::read_to_string(path)?;
        Ok(serde_json::from_str(&content)?)
    }

    /// Absolute or project-relative source directory
    pub fn source_dir(&self) -> PathBuf {
        self.project_root.join(&self.lib_dir)
    }
}

/// Registry-specific configuration
#[derive(Debug, Clone, Deserialize, PartialEq)]
#[serde(default)]
pub struct RegistryConfig {
    pub url: String,
}

impl Default for RegistryConfig {
    fn default() -> Self {
        Self {
            url: DEFAULT_METACPAN_REGISTRY.to_string(),
        }
    }
}

/// Returns the path to the data directory for greater-version.
/// Uses $XDG_DATA_HOME/greater-version if XDG_DATA_HOME is set,
/// otherwise falls back to ~/.local/share/greater-version,
/// or ./greater-version if neither is available.
pub fn data_dir() -> PathBuf {
    data_dir_with_env(std::env::var("XDG_DATA_HOME").ok(), dirs::home_dir())
}

/// Returns the path to the log file.
pub fn log_path() -> PathBuf {
    data_dir().join(LOG_FILE_NAME)
}

fn data_dir_with_env(xdg_data_home: Option<String>, home_dir: Option<PathBuf>) -> PathBuf {
    let data_dir = xdg_data_home
        .map(PathBuf::from)
        .or_else(|| home_dir.map(|home| home.join(".local/share")))
        .unwrap_or_else(|| PathBuf::from("."));

    data_dir.join("greater-version")
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn checker_config_from_partial_object_uses_defaults_for_missing_fields() {
        let result = serde_json::from_value::<CheckerConfig>(json!({
            "projectRoot": "/work/My-Module"
        }))
        .unwrap();

        assert_eq!(result.project_root, PathBuf::from("/work/My-Module"));
        assert_eq!(result.lib_dir, PathBuf::from("lib"));
        assert_eq!(result.search_paths, None);
        assert_eq!(result.exclude_components, vec!["blib".to_string()]);
        assert_eq!(result.registry, RegistryConfig::default());
    }

    #[test]
    fn checker_config_from_full_object_parses_all_fields() {
        let result = serde_json::from_value::<CheckerConfig>(json!({
            "projectRoot": "/work/dist",
            "libDir": "src",
            "sourceExtension": "pmc",
            "searchPaths": ["/usr/share/perl5", "/usr/local/lib/perl5"],
            "excludeComponents": ["blib", "_build"],
            "registry": { "url": "http://localhost:5000" }
        }))
        .unwrap();

        assert_eq!(
            result,
            CheckerConfig {
                project_root: PathBuf::from("/work/dist"),
                lib_dir: PathBuf::from("src"),
                source_extension: "pmc".to_string(),
                search_paths: Some(vec![
                    PathBuf::from("/usr/share/perl5"),
                    PathBuf::from("/usr/local/lib/perl5"),
                ]),
                exclude_components: vec!["blib".to_string(), "_build".to_string()],
                registry: RegistryConfig {
                    url: "http://localhost:5000".to_string()
                },
            }
        );
    }

    #[test]
    fn from_file_reads_json() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("greater-version.json");
        std::fs::write(&path, r#"{ "libDir": "lib2" }"#).unwrap();

        let result = CheckerConfig::from_file(&path).unwrap();
        assert_eq!(result.source_dir(), PathBuf::from("./lib2"));
    }

    #[test]
    fn from_file_fails_for_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        assert!(CheckerConfig::from_file(&dir.path().join("missing.json")).is_err());
    }

    #[test]
    fn data_dir_with_env_uses_xdg_data_home_when_set() {
        let path = data_dir_with_env(
            Some("/tmp/test-data".to_string()),
            Some(PathBuf::from("/home/user")),
        );

        assert_eq!(path, PathBuf::from("/tmp/test-data/greater-version"));
    }

    #[test]
    fn data_dir_with_env_falls_back_to_home_local_share() {
        let path = data_dir_with_env(None, Some(PathBuf::from("/home/user")));

        assert_eq!(
            path,
            PathBuf::from("/home/user/.local/share/greater-version")
        );
    }

    #[test]
    fn data_dir_with_env_falls_back_to_current_dir_when_no_dirs_available() {
        let path = data_dir_with_env(None, None);
        assert_eq!(path, PathBuf::from("./greater-version"));
    }
}
