//! Installed-module search path
//!
//! Mirrors the interpreter's `@INC` so the installed copy of a module can be
//! found on disk and read statically, without loading it.

use std::ffi::OsString;
use std::path::{Component, Path, PathBuf};
use std::process::Command;

use tracing::{debug, warn};

use crate::config::CheckerConfig;

/// Environment variable with extra module directories
pub const PERL5LIB: &str = "PERL5LIB";

/// Prints `@INC` one entry per line, skipping code-ref hooks
const PRINT_INC_SCRIPT: &str = "print qq{$_\\n} for grep { !ref } @INC";

/// Ordered list of directories searched for installed modules
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SearchPaths {
    paths: Vec<PathBuf>,
}

impl SearchPaths {
    /// Create a search path, dropping empty and repeated entries
    pub fn new(paths: impl IntoIterator<Item = PathBuf>) -> Self {
        let mut unique: Vec<PathBuf> = Vec::new();
        for path in paths {
            if !path.as_os_str().is_empty() && !unique.contains(&path) {
                unique.push(path);
            }
        }
        Self { paths: unique }
    }

    /// Build the search path for a configuration
    ///
    /// Uses `search_paths` when configured, otherwise `PERL5LIB` followed by
    /// the interpreter's own `@INC`. Build output and the project's source
    /// directory are always removed.
    pub fn discover(config: &CheckerConfig) -> Self {
        let candidates = match &config.search_paths {
            Some(paths) => paths.clone(),
            None => {
                let mut paths = perl5lib_entries(std::env::var_os(PERL5LIB));
                paths.extend(interpreter_inc());
                paths
            }
        };

        let search_paths =
            Self::new(candidates).excluding(&config.exclude_components, &config.source_dir());
        debug!("Installed module search path: {:?}", search_paths.paths);
        search_paths
    }

    /// Remove entries containing an excluded component or pointing at `source_dir`
    pub fn excluding(self, components: &[String], source_dir: &Path) -> Self {
        let paths = self
            .paths
            .into_iter()
            .filter(|path| {
                let excluded = has_component(path, components) || same_dir(path, source_dir);
                if excluded {
                    debug!("Skipping {:?} in installed module search path", path);
                }
                !excluded
            })
            .collect();
        Self { paths }
    }

    pub fn paths(&self) -> &[PathBuf] {
        &self.paths
    }

    /// First existing file at `relative` below any search directory
    pub fn find(&self, relative: &Path) -> Option<PathBuf> {
        self.paths
            .iter()
            .map(|dir| dir.join(relative))
            .find(|candidate| candidate.is_file())
    }
}

fn perl5lib_entries(value: Option<OsString>) -> Vec<PathBuf> {
    value
        .map(|value| std::env::split_paths(&value).collect())
        .unwrap_or_default()
}

fn interpreter_inc() -> Vec<PathBuf> {
    let output = match Command::new("perl").args(["-e", PRINT_INC_SCRIPT]).output() {
        Ok(output) if output.status.success() => output,
        Ok(output) => {
            warn!("perl exited with {} while listing @INC", output.status);
            return Vec::new();
        }
        Err(e) => {
            warn!("Failed to run perl to list @INC: {}", e);
            return Vec::new();
        }
    };

    String::from_utf8_lossy(&output.stdout)
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(PathBuf::from)
        .collect()
}

fn has_component(path: &Path, components: &[String]) -> bool {
    path.components().any(|component| match component {
        Component::Normal(name) => components.iter().any(|excluded| name == excluded.as_str()),
        _ => false,
    })
}

fn same_dir(a: &Path, b: &Path) -> bool {
    match (a.canonicalize(), b.canonicalize()) {
        (Ok(a), Ok(b)) => a == b,
        _ => a == b,
    }
}
