//! Batch run used by the command line tool
//!
//! Checks each module in turn, writes TAP to the given writer and returns
//! whether every check passed.

use std::io::Write;
use std::time::Duration;

use clap::ValueEnum;
use tracing::warn;

use crate::check::VersionChecker;
use crate::report::{Outcome, Reporter, TapReporter};
use crate::version::error::Absence;

/// Which versions the source version must exceed
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Against {
    Installed,
    Cpan,
    Both,
}

impl Against {
    fn installed(self) -> bool {
        matches!(self, Against::Installed | Against::Both)
    }

    fn cpan(self) -> bool {
        matches!(self, Against::Cpan | Against::Both)
    }
}

/// Run the selected checks for `modules` and write TAP to `writer`
///
/// Each registry check is abandoned after `timeout`; an elapsed timeout is
/// recorded as a diagnostic and counts as a failed check. With no modules a
/// single "no module name given" diagnostic is written.
pub async fn run_checks<W: Write>(
    checker: &VersionChecker,
    modules: &[String],
    against: Against,
    timeout: Duration,
    writer: W,
) -> bool {
    let mut reporter = TapReporter::new(writer);

    let all_passed = if modules.is_empty() {
        reporter.record(Outcome::Diagnostic, &Absence::MissingModuleName.to_string());
        false
    } else {
        let mut all_passed = true;
        for module in modules {
            if against.installed() {
                all_passed &= checker.has_greater_version(&mut reporter, module.as_str());
            }
            if against.cpan() {
                all_passed &= check_cpan(checker, &mut reporter, module, timeout).await;
            }
        }
        all_passed
    };

    let mut writer = reporter.finish();
    if let Err(e) = writer.flush() {
        warn!("Failed to flush TAP output: {}", e);
    }
    all_passed
}

async fn check_cpan(
    checker: &VersionChecker,
    reporter: &mut dyn Reporter,
    module: &str,
    timeout: Duration,
) -> bool {
    let check = checker.has_greater_version_than_cpan(&mut *reporter, module);
    let outcome = tokio::time::timeout(timeout, check).await;
    match outcome {
        Ok(passed) => passed,
        Err(_) => {
            warn!("Registry lookup for {} timed out", module);
            reporter.record(
                Outcome::Diagnostic,
                &format!(
                    "registry lookup for {} timed out after {:?}",
                    module, timeout
                ),
            );
            false
        }
    }
}
