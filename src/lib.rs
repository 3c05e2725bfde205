//! Release-time checks that a module's version was bumped
//!
//! Compares the version declared in a project's source tree with the copy
//! installed on this machine and with the latest release on CPAN.
//!
//! ```no_run
//! use greater_version::check::VersionChecker;
//! use greater_version::config::CheckerConfig;
//! use greater_version::report::TapReporter;
//!
//! # async fn run() {
//! let checker = VersionChecker::new(&CheckerConfig::default());
//! let mut reporter = TapReporter::new(std::io::stdout());
//! checker.has_greater_version(&mut reporter, "My::Module");
//! checker
//!     .has_greater_version_than_cpan(&mut reporter, "My::Module")
//!     .await;
//! reporter.finish();
//! # }
//! ```

pub mod check;
pub mod config;
pub mod parser;
pub mod report;
pub mod runner;
pub mod version;
