use std::net::SocketAddr;
use std::path::{Path, PathBuf};

use anyhow::Context;
use attrition_engine::api::{AppState, create_router};
use attrition_engine::config::{ConfigLoader, EngineConfig};
use attrition_engine::engine::AttritionEngine;
use attrition_engine::ingest::DatasetLoader;
use attrition_engine::models::{Dataset, FilterSelection};
use clap::{Parser, Subcommand};
use tracing::{debug, error, info};

/// Workforce attrition metrics over an HR roster
#[derive(Parser)]
#[command(name = "attrition-engine")]
#[command(about = "Compute workforce attrition metrics from an HR roster", long_about = None)]
struct Cli {
    /// Enable verbose output (-v for debug, -vv for trace)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Serve filter options and metrics over HTTP
    Serve {
        /// Path to the roster CSV
        #[arg(short, long)]
        data: PathBuf,

        /// Path to the engine configuration file
        #[arg(short, long)]
        config: Option<PathBuf>,

        /// Address to listen on
        #[arg(long, default_value = "127.0.0.1:3000")]
        addr: SocketAddr,
    },
    /// Compute metrics once and print them as JSON
    Report {
        /// Path to the roster CSV
        #[arg(short, long)]
        data: PathBuf,

        /// Path to the engine configuration file
        #[arg(short, long)]
        config: Option<PathBuf>,

        /// Departments to include (repeatable)
        #[arg(long)]
        department: Vec<String>,

        /// Genders to include (repeatable)
        #[arg(long)]
        gender: Vec<String>,

        /// Termination statuses to include (repeatable)
        #[arg(long)]
        status: Vec<String>,

        /// First termination year to include
        #[arg(long, requires = "to_year")]
        from_year: Option<i32>,

        /// Last termination year to include
        #[arg(long, requires = "from_year")]
        to_year: Option<i32>,
    },
}

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    let log_level = match cli.verbose {
        0 => "info",
        1 => "debug",
        _ => "trace",
    };

    tracing_subscriber::fmt()
        .with_env_filter(log_level)
        .with_target(cli.verbose >= 2)
        .with_writer(std::io::stderr)
        .init();

    debug!("attrition-engine started with verbosity level: {}", cli.verbose);

    let result = match cli.command {
        Commands::Serve { data, config, addr } => run_serve(&data, config.as_deref(), addr).await,
        Commands::Report {
            data,
            config,
            department,
            gender,
            status,
            from_year,
            to_year,
        } => {
            let selection = FilterSelection {
                departments: non_empty(department),
                genders: non_empty(gender),
                statuses: non_empty(status),
                year_range: from_year.zip(to_year),
            };
            run_report(&data, config.as_deref(), &selection)
        }
    };

    if let Err(e) = result {
        error!("Fatal error: {:#}", e);
        eprintln!("Error: {e:#}");
        std::process::exit(1);
    }
}

fn non_empty(values: Vec<String>) -> Option<Vec<String>> {
    (!values.is_empty()).then_some(values)
}

fn load_config(path: Option<&Path>) -> anyhow::Result<EngineConfig> {
    match path {
        Some(path) => Ok(ConfigLoader::load(path)?.into_config()),
        None => Ok(EngineConfig::default()),
    }
}

fn load_inputs(data: &Path, config: Option<&Path>) -> anyhow::Result<(Dataset, AttritionEngine)> {
    let config = load_config(config)?;
    let dataset = DatasetLoader::new(config.ingest.clone())
        .load(data)
        .with_context(|| format!("loading roster {}", data.display()))?;
    Ok((dataset, AttritionEngine::new(config)))
}

async fn run_serve(data: &Path, config: Option<&Path>, addr: SocketAddr) -> anyhow::Result<()> {
    let (dataset, engine) = load_inputs(data, config)?;
    let app = create_router(AppState::new(dataset, engine));

    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .with_context(|| format!("binding {}", addr))?;
    info!(addr = %addr, "Listening");
    axum::serve(listener, app).await?;
    Ok(())
}

fn run_report(data: &Path, config: Option<&Path>, selection: &FilterSelection) -> anyhow::Result<()> {
    let (dataset, engine) = load_inputs(data, config)?;
    let result = engine.compute_selection(&dataset, selection);
    println!("{}", serde_json::to_string_pretty(&result)?);
    Ok(())
}
