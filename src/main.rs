use clap::Parser;
use fix_lf::core::TargetProvider;
use fix_lf::utils::{logger, validation::Validate};
use fix_lf::{CliConfig, Driver, FixLfError, LocalStorage, RunMode, RunReport};

fn main() {
    let config = CliConfig::parse();

    logger::init_cli_logger(config.verbose, config.log_format);

    tracing::debug!("CLI config: {:?}", config);

    if let Err(e) = run(&config) {
        tracing::error!("{} (Category: {:?}, Severity: {:?})", e, e.category(), e.severity());
        tracing::debug!("Recovery suggestion: {}", e.recovery_suggestion());

        eprintln!("error: {}", e.user_friendly_message());
        eprintln!("hint: {}", e.recovery_suggestion());
        std::process::exit(e.exit_code());
    }
}

fn run(config: &CliConfig) -> Result<RunReport, FixLfError> {
    let targets = config.resolve_targets()?;
    targets.validate()?;

    let mode = if config.dry_run {
        tracing::info!("Dry run: no files will be modified");
        RunMode::DryRun
    } else {
        RunMode::Apply
    };

    tracing::debug!(
        "Normalizing {} target(s) under {}",
        targets.target_files().len(),
        targets.root_dir()
    );

    let storage = LocalStorage::new(targets.root_dir().to_string());
    let driver = Driver::with_mode(storage, mode);

    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    driver.run(targets.target_files(), &mut out)
}
