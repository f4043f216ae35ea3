//! CLI entrypoint for veracity
//!
//! This is the main binary that wires together all layers using
//! dependency injection.

use anyhow::{Context, Result, bail};
use clap::Parser;
use std::sync::Arc;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;
use veracity_application::{
    AnalysisEventLogger, AnalysisOrchestrator, AnalysisProgressNotifier,
    ClassifySubmissionUseCase, KeyValueStore, NoEventLogger, NoProgress,
    RecommendResourcesUseCase, RunAnalysisUseCase, SharedRandom, entropy_random, shared_random,
};
use veracity_domain::{OutputFormat, StdRandom};
use veracity_infrastructure::{
    ConfigLoader, FileConfig, JsonFileStore, JsonlAnalysisLogger, MemoryStore, StoreBackend,
};
use veracity_presentation::{Cli, ConsoleFormatter, ProgressReporter, SimpleProgress};

/// Exit status after Ctrl-C, as shells report it.
const EXIT_INTERRUPTED: i32 = 130;

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging based on verbosity level
    let filter = match cli.verbose {
        0 => EnvFilter::new("warn"),
        1 => EnvFilter::new("info"),
        2 => EnvFilter::new("debug"),
        _ => EnvFilter::new("trace"), // -vvv or more
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    if cli.show_config {
        ConfigLoader::print_config_sources(cli.config.as_ref());
        return Ok(());
    }

    let Some(command) = cli.command.clone() else {
        bail!("A command is required: text, url or file. See --help.");
    };

    // === Configuration ===
    let config = load_config(&cli)?;
    for issue in config.validate() {
        eprintln!("warning: {}", issue);
    }

    let (analysis_params, _) = config.analysis.to_params();
    let (recommendation_params, _) = config.recommendation.to_params();
    let format = match cli.output {
        Some(format) => OutputFormat::from(format),
        None => config.output.parse_format().0,
    };
    ConsoleFormatter::set_color(config.output.color);

    // Blank input is rejected before anything is stored or logged
    let submission = command.to_submission()?;
    info!(
        "Analyzing {} submission {}",
        submission.modality(),
        submission.analysis_id()
    );

    // === Dependency Injection ===
    let store = build_store(&config);
    let event_logger = build_event_logger(&config);
    let random: SharedRandom = match cli.seed {
        Some(seed) => shared_random(StdRandom::seeded(seed)),
        None => entropy_random(),
    };
    let notifier: Arc<dyn AnalysisProgressNotifier> = if cli.quiet {
        Arc::new(NoProgress)
    } else if format == OutputFormat::Summary {
        Arc::new(SimpleProgress)
    } else {
        Arc::new(ProgressReporter::new())
    };

    let use_case = RunAnalysisUseCase::new(
        ClassifySubmissionUseCase::new(store.clone(), random.clone())
            .with_event_logger(event_logger.clone()),
        AnalysisOrchestrator::new(analysis_params)
            .with_notifier(notifier)
            .with_event_logger(event_logger.clone()),
        RecommendResourcesUseCase::new(store, random)
            .with_params(recommendation_params)
            .with_event_logger(event_logger),
    );

    // Dropping the analysis future on Ctrl-C cancels its timers.
    let output = tokio::select! {
        output = use_case.execute(submission) => output?,
        _ = tokio::signal::ctrl_c() => {
            eprintln!("Analysis cancelled");
            std::process::exit(EXIT_INTERRUPTED);
        }
    };

    println!("{}", ConsoleFormatter::render(&output, format));

    Ok(())
}

fn load_config(cli: &Cli) -> Result<FileConfig> {
    if cli.no_config {
        return Ok(ConfigLoader::load_defaults());
    }
    if let Some(path) = &cli.config
        && !path.exists()
    {
        bail!("Config file not found: {}", path.display());
    }
    ConfigLoader::load(cli.config.as_ref()).context("Failed to load configuration")
}

fn build_store(config: &FileConfig) -> Arc<dyn KeyValueStore> {
    match config.store.parse_backend().0 {
        StoreBackend::Memory => Arc::new(MemoryStore::new()),
        StoreBackend::File => match config.store.resolved_path() {
            Some(path) => {
                info!("Using store {}", path.display());
                Arc::new(JsonFileStore::new(path))
            }
            None => {
                warn!("No data directory for the store file, history will not persist");
                Arc::new(MemoryStore::new())
            }
        },
    }
}

fn build_event_logger(config: &FileConfig) -> Arc<dyn AnalysisEventLogger> {
    config
        .logging
        .resolved_dir()
        .and_then(JsonlAnalysisLogger::in_dir)
        .map(|logger| {
            info!("Writing analysis events to {}", logger.path().display());
            Arc::new(logger) as Arc<dyn AnalysisEventLogger>
        })
        .unwrap_or_else(|| Arc::new(NoEventLogger))
}
