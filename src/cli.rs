//! CLI definition and dispatch.

use chrono::NaiveDate;
use clap::{Parser, Subcommand};
use serde::Serialize;
use std::path::PathBuf;
use std::process::ExitCode;
use std::sync::Arc;
use tracing_subscriber::EnvFilter;

use crate::adapters::catalog_adapter::CatalogAdapter;
use crate::adapters::csv_adapter::CsvRegistryAdapter;
use crate::adapters::file_config_adapter::FileConfigAdapter;
use crate::domain::config_validation::{validate_generator_config, validate_service_config};
use crate::domain::error::SynthError;
use crate::domain::sequence::instrument_seed;
use crate::domain::series::{
    today, GeneratorSettings, MarketDataEngine, SeriesKind, DEFAULT_HORIZON_DAYS,
};
use crate::domain::window::PageRequest;
use crate::ports::config_port::ConfigPort;
use crate::ports::instrument_port::InstrumentPort;

pub const DEFAULT_LISTEN: &str = "127.0.0.1:5000";
pub const DEFAULT_LOG_LEVEL: &str = "info";

#[derive(Parser, Debug)]
#[command(name = "synthmarket", about = "Deterministic synthetic market data service")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Start the HTTP API server
    Serve {
        #[arg(short, long)]
        config: PathBuf,
    },
    /// Print a window of a generated series as JSON
    Generate {
        #[arg(long)]
        symbol: String,
        #[arg(long, default_value = "predictions")]
        kind: SeriesKind,
        #[arg(long, default_value_t = DEFAULT_HORIZON_DAYS)]
        days: usize,
        #[arg(long)]
        page: Option<String>,
        #[arg(long)]
        size: Option<String>,
        /// Anchor date (YYYY-MM-DD); defaults to today (UTC)
        #[arg(long)]
        anchor: Option<NaiveDate>,
        #[arg(short, long)]
        config: Option<PathBuf>,
    },
    /// List registered instruments with their quote for the anchor date
    Instruments {
        #[arg(short, long)]
        config: Option<PathBuf>,
        #[arg(long)]
        page: Option<String>,
        #[arg(long)]
        size: Option<String>,
        #[arg(long)]
        anchor: Option<NaiveDate>,
    },
    /// Print the seed derived from a symbol
    Seed {
        #[arg(long)]
        symbol: String,
    },
}

pub fn run(cli: Cli) -> ExitCode {
    match cli.command {
        Command::Serve { config } => run_serve(&config),
        Command::Generate {
            symbol,
            kind,
            days,
            page,
            size,
            anchor,
            config,
        } => {
            init_tracing("warn");
            let request = PageRequest::from_query(page.as_deref(), size.as_deref());
            run_generate(&symbol, kind, days, request, anchor, config.as_ref())
        }
        Command::Instruments {
            config,
            page,
            size,
            anchor,
        } => {
            init_tracing("warn");
            let request = PageRequest::from_query(page.as_deref(), size.as_deref());
            run_instruments(config.as_ref(), request, anchor)
        }
        Command::Seed { symbol } => {
            println!("{}", instrument_seed(&symbol));
            ExitCode::SUCCESS
        }
    }
}

/// Install the global subscriber. `RUST_LOG` takes precedence over `default_level`.
pub fn init_tracing(default_level: &str) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    // A subscriber may already be installed (tests, repeated calls).
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init();
}

pub fn load_config(path: &PathBuf) -> Result<FileConfigAdapter, ExitCode> {
    FileConfigAdapter::from_file(path).map_err(|err| {
        eprintln!("error: {err}");
        ExitCode::from(&err)
    })
}

pub fn build_generator_settings(config: &dyn ConfigPort) -> Result<GeneratorSettings, SynthError> {
    validate_generator_config(config)?;
    let defaults = GeneratorSettings::default();
    Ok(GeneratorSettings {
        horizon_days: config.get_int("generator", "horizon_days", defaults.horizon_days as i64)
            as usize,
        max_page_size: config.get_int(
            "generator",
            "max_page_size",
            defaults.max_page_size as i64,
        ) as u64,
        lookback_days: config.get_int(
            "generator",
            "lookback_days",
            defaults.lookback_days as i64,
        ) as usize,
    })
}

/// CSV registry when `[registry] path` is set, otherwise the builtin catalog.
pub fn build_registry(
    config: Option<&dyn ConfigPort>,
) -> Result<Arc<dyn InstrumentPort + Send + Sync>, SynthError> {
    match config.and_then(|c| c.get_string("registry", "path")) {
        Some(path) => Ok(Arc::new(CsvRegistryAdapter::from_file(path)?)),
        None => {
            tracing::debug!("no registry path configured, using builtin catalog");
            Ok(Arc::new(CatalogAdapter::new()))
        }
    }
}

fn print_json<T: Serialize>(value: &T) -> ExitCode {
    match serde_json::to_string_pretty(value) {
        Ok(json) => {
            println!("{json}");
            ExitCode::SUCCESS
        }
        Err(e) => {
            tracing::error!(error = %e, "failed to serialize output");
            ExitCode::from(1)
        }
    }
}

fn run_generate(
    symbol: &str,
    kind: SeriesKind,
    days: usize,
    request: PageRequest,
    anchor: Option<NaiveDate>,
    config_path: Option<&PathBuf>,
) -> ExitCode {
    let settings = match config_path {
        Some(path) => {
            let config = match load_config(path) {
                Ok(c) => c,
                Err(code) => return code,
            };
            match build_generator_settings(&config) {
                Ok(s) => s,
                Err(e) => {
                    tracing::error!(error = %e, "invalid generator config");
                    return (&e).into();
                }
            }
        }
        None => GeneratorSettings::default(),
    };

    let engine = MarketDataEngine::new(GeneratorSettings {
        horizon_days: days,
        ..settings
    });
    let anchor = anchor.unwrap_or_else(today);
    tracing::info!(symbol, %kind, days, %anchor, "generating series");

    match kind {
        SeriesKind::Predictions => print_json(&engine.predictions(symbol, anchor, request)),
        SeriesKind::DailyBasics => print_json(&engine.daily_basics(symbol, anchor, request)),
        SeriesKind::TechnicalFactors => {
            print_json(&engine.technical_factors(symbol, anchor, request))
        }
    }
}

fn run_instruments(
    config_path: Option<&PathBuf>,
    request: PageRequest,
    anchor: Option<NaiveDate>,
) -> ExitCode {
    let config = match config_path.map(load_config).transpose() {
        Ok(c) => c,
        Err(code) => return code,
    };

    let registry = match build_registry(config.as_ref().map(|c| c as &dyn ConfigPort)) {
        Ok(r) => r,
        Err(e) => {
            tracing::error!(error = %e, "failed to load registry");
            return (&e).into();
        }
    };

    match registry.list_instruments() {
        Ok(instruments) => {
            let anchor = anchor.unwrap_or_else(today);
            print_json(&MarketDataEngine::default().quotes(instruments, anchor, request))
        }
        Err(e) => {
            tracing::error!(error = %e, "failed to list instruments");
            (&e).into()
        }
    }
}

fn run_serve(config_path: &PathBuf) -> ExitCode {
    let config = match load_config(config_path) {
        Ok(c) => c,
        Err(code) => return code,
    };

    if let Err(e) = validate_service_config(&config) {
        eprintln!("error: {e}");
        return (&e).into();
    }

    let level = config
        .get_string("log", "level")
        .unwrap_or_else(|| DEFAULT_LOG_LEVEL.to_string());
    init_tracing(&level);
    tracing::info!(config = %config_path.display(), "loaded config");

    #[cfg(feature = "web")]
    {
        match serve(&config) {
            Ok(()) => ExitCode::SUCCESS,
            Err(e) => {
                tracing::error!(error = %e, "server stopped");
                (&e).into()
            }
        }
    }

    #[cfg(not(feature = "web"))]
    {
        tracing::error!("web feature is required for serve");
        ExitCode::from(1)
    }
}

#[cfg(feature = "web")]
fn serve(config: &FileConfigAdapter) -> Result<(), SynthError> {
    use crate::adapters::web::{build_router, AppState};
    use std::net::SocketAddr;

    let settings = build_generator_settings(config)?;
    let registry = build_registry(Some(config as &dyn ConfigPort))?;

    let listen = config
        .get_string("server", "listen")
        .unwrap_or_else(|| DEFAULT_LISTEN.to_string());
    let addr: SocketAddr = listen.parse().map_err(|_| SynthError::ConfigInvalid {
        section: "server".into(),
        key: "listen".into(),
        reason: format!("'{listen}' is not a socket address"),
    })?;

    let mut state = AppState::new(registry, MarketDataEngine::new(settings));
    state.cors = config.get_bool("server", "cors", true);
    let router = build_router(state);

    let runtime = tokio::runtime::Runtime::new()?;
    runtime.block_on(async {
        let listener = tokio::net::TcpListener::bind(addr).await?;
        tracing::info!(%addr, "server listening");
        axum::serve(listener, router).await
    })?;

    Ok(())
}
