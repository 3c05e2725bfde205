use std::path::PathBuf;
use std::time::Duration;

use clap::Parser;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

use greater_version::check::VersionChecker;
use greater_version::config::{
    CheckerConfig, FETCH_TIMEOUT_MS, LOG_FILE_NAME, data_dir, log_path,
};
use greater_version::runner::{Against, run_checks};

#[derive(Parser)]
#[command(name = "greater-version")]
#[command(
    version,
    about = "Check that a module's source version is greater than the installed and published ones"
)]
struct Cli {
    /// Modules to check (e.g., My::Module)
    modules: Vec<String>,

    /// Which versions the source version must exceed
    #[arg(long, value_enum, default_value_t = Against::Both)]
    against: Against,

    /// JSON configuration file
    #[arg(long)]
    config: Option<PathBuf>,

    /// Root of the distribution (contains lib/)
    #[arg(long)]
    project_root: Option<PathBuf>,

    /// Installed-module directory to search instead of perl's @INC (repeatable)
    #[arg(long = "inc", value_name = "DIR")]
    search_paths: Vec<PathBuf>,

    /// Base URL of the MetaCPAN API
    #[arg(long)]
    registry_url: Option<String>,

    /// Give up on a registry lookup after this many seconds
    #[arg(long, default_value_t = FETCH_TIMEOUT_MS / 1000)]
    timeout_secs: u64,

    /// Write logs to the data directory instead of stderr
    #[arg(long)]
    log_to_file: bool,
}

impl Cli {
    fn checker_config(&self) -> anyhow::Result<CheckerConfig> {
        let mut config = match &self.config {
            Some(path) => CheckerConfig::from_file(path)?,
            None => CheckerConfig::default(),
        };
        if let Some(root) = &self.project_root {
            config.project_root = root.clone();
        }
        if !self.search_paths.is_empty() {
            config.search_paths = Some(self.search_paths.clone());
        }
        if let Some(url) = &self.registry_url {
            config.registry.url = url.clone();
        }
        Ok(config)
    }
}

fn init_logging(log_to_file: bool) -> anyhow::Result<Option<WorkerGuard>> {
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));

    if !log_to_file {
        tracing_subscriber::registry()
            .with(env_filter)
            .with(fmt::layer().with_writer(std::io::stderr))
            .init();
        return Ok(None);
    }

    std::fs::create_dir_all(data_dir())?;
    let file_appender = tracing_appender::rolling::never(data_dir(), LOG_FILE_NAME);
    let (non_blocking, guard) = tracing_appender::non_blocking(file_appender);
    tracing_subscriber::registry()
        .with(env_filter)
        .with(fmt::layer().json().with_writer(non_blocking))
        .init();
    eprintln!("Logging to {}", log_path().display());
    Ok(Some(guard))
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let log_guard = init_logging(cli.log_to_file)?;
    let config = cli.checker_config()?;
    let checker = VersionChecker::new(&config);

    let all_passed = tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()?
        .block_on(run_checks(
            &checker,
            &cli.modules,
            cli.against,
            Duration::from_secs(cli.timeout_secs),
            std::io::stdout(),
        ));

    if !all_passed {
        drop(log_guard);
        std::process::exit(1);
    }
    Ok(())
}
