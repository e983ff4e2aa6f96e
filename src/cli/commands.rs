//! CLI command implementations
//!
//! Boot sequence shared by every command:
//! 1. Configuration load (file, environment, flags)
//! 2. Validation and log level
//! 3. Dataset ingestion, signalling load-complete on the store
//!
//! `serve` then hands the ready store to the HTTP server; `query` and
//! `facets` answer once on stdout and exit.

use std::sync::Arc;

use crate::facets::FacetDeriver;
use crate::http_server::HttpServer;
use crate::observability::{log_event, log_event_with_fields, Event, Logger, MetricsRegistry};
use crate::pipeline::{QueryExecutor, RawSalesQuery};
use crate::store::RecordStore;

use super::args::{Command, QueryArgs, SourceArgs};
use super::config::Config;
use super::errors::{CliError, CliResult};
use super::io::{write_page, write_response};

/// Main CLI entry point
///
/// Parses arguments and dispatches to the appropriate command.
/// This is the only function that main.rs should call.
pub fn run() -> CliResult<()> {
    let cli = super::args::Cli::parse_args();
    run_command(cli.command)
}

/// Run the appropriate command based on CLI args
pub fn run_command(cmd: Command) -> CliResult<()> {
    match cmd {
        Command::Serve { source, port } => serve(&source, port),
        Command::Query { source, query: q } => query(&source, q),
        Command::Facets { source } => facets(&source),
    }
}

/// Resolves configuration and applies command-line overrides
pub fn configure(source: &SourceArgs, port: Option<u16>) -> CliResult<Config> {
    let mut config = Config::resolve(source.config.as_deref())?;

    if let Some(data) = &source.data {
        config.data_path = data.to_string_lossy().into_owned();
    }
    if let Some(port) = port {
        config.port = port;
    }

    config.validate()?;
    Logger::set_min_severity(config.log_severity()?);

    let port = config.port.to_string();
    log_event_with_fields(
        Event::ConfigLoaded,
        &[("data_path", config.data_path.as_str()), ("port", port.as_str())],
    );

    Ok(config)
}

/// Loads the configured dataset into a fresh store
pub fn load_store(config: &Config, metrics: &MetricsRegistry) -> CliResult<Arc<RecordStore>> {
    let store = RecordStore::new();
    let skipped = store.ingest_csv(&config.data_path())?;
    metrics.set_ingestion(store.len() as u64, skipped as u64);
    Ok(Arc::new(store))
}

/// Load the dataset and serve the HTTP API until the process is stopped
pub fn serve(source: &SourceArgs, port: Option<u16>) -> CliResult<()> {
    log_event(Event::BootStart);

    let result = boot(source, port);
    let (config, store, metrics) = match result {
        Ok(booted) => booted,
        Err(e) => {
            log_event_with_fields(Event::BootFailed, &[("reason", e.message())]);
            return Err(e);
        }
    };

    let records = store.len().to_string();
    log_event_with_fields(Event::BootComplete, &[("records", records.as_str())]);

    let server = HttpServer::new(config.http_config(), store, metrics);

    // Start the async runtime and run the server
    let rt = tokio::runtime::Runtime::new()
        .map_err(|e| CliError::boot_failed(format!("Failed to create tokio runtime: {}", e)))?;

    rt.block_on(async {
        server
            .start()
            .await
            .map_err(|e| CliError::boot_failed(format!("HTTP server failed: {}", e)))
    })?;

    Ok(())
}

fn boot(
    source: &SourceArgs,
    port: Option<u16>,
) -> CliResult<(Config, Arc<RecordStore>, Arc<MetricsRegistry>)> {
    let config = configure(source, port)?;
    let metrics = Arc::new(MetricsRegistry::new());
    let store = load_store(&config, &metrics)?;
    Ok((config, store, metrics))
}

/// Execute a single query and print the page
pub fn query(source: &SourceArgs, args: QueryArgs) -> CliResult<()> {
    Logger::reserve_stdout();
    let config = configure(source, None)?;
    let metrics = MetricsRegistry::new();
    let store = load_store(&config, &metrics)?;

    let params = RawSalesQuery::from(args).normalize();
    let page = QueryExecutor::new(store).execute(&params)?;

    write_page(&page)
}

/// Print filter options for the full dataset
pub fn facets(source: &SourceArgs) -> CliResult<()> {
    Logger::reserve_stdout();
    let config = configure(source, None)?;
    let metrics = MetricsRegistry::new();
    let store = load_store(&config, &metrics)?;

    let options = FacetDeriver::new(store).filter_options()?;

    write_response(&options)
}
