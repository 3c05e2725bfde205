//! Fake distribution and install trees on disk

use std::path::{Path, PathBuf};
use std::sync::Arc;

use tempfile::TempDir;

use greater_version::check::VersionChecker;
use greater_version::config::CheckerConfig;
use greater_version::version::registry::Registry;

/// A project directory with `lib/`, plus a separate installed-module directory
pub struct TestProject {
    root: TempDir,
    installed: TempDir,
}

impl TestProject {
    pub fn new() -> Self {
        Self {
            root: TempDir::new().unwrap(),
            installed: TempDir::new().unwrap(),
        }
    }

    pub fn root(&self) -> &Path {
        self.root.path()
    }

    pub fn installed_dir(&self) -> &Path {
        self.installed.path()
    }

    /// Write `lib/<Module>.pm` declaring `version`
    pub fn with_source(self, module: &str, version: &str) -> Self {
        write_module(&self.root.path().join("lib"), module, version);
        self
    }

    /// Write the installed copy of `module` declaring `version`
    pub fn with_installed(self, module: &str, version: &str) -> Self {
        write_module(self.installed.path(), module, version);
        self
    }

    /// Write a freshly built copy under `blib/lib`
    pub fn with_built(self, module: &str, version: &str) -> Self {
        write_module(&self.root.path().join("blib").join("lib"), module, version);
        self
    }

    /// Search path: the build output first, then the installed directory
    pub fn config(&self) -> CheckerConfig {
        CheckerConfig {
            project_root: self.root.path().to_path_buf(),
            search_paths: Some(vec![
                self.root.path().join("blib").join("lib"),
                self.installed.path().to_path_buf(),
            ]),
            ..CheckerConfig::default()
        }
    }

    pub fn checker(&self, registry: impl Registry + 'static) -> VersionChecker {
        VersionChecker::with_registry(&self.config(), Arc::new(registry))
    }
}

fn write_module(dir: &Path, module: &str, version: &str) -> PathBuf {
    let path = module
        .split("::")
        .fold(dir.to_path_buf(), |path, segment| path.join(segment))
        .with_extension("pm");
    std::fs::create_dir_all(path.parent().unwrap()).unwrap();
    std::fs::write(
        &path,
        format!("package {module};\nuse strict;\n\nour $VERSION = '{version}';\n\n1;\n"),
    )
    .unwrap();
    path
}
