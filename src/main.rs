mod cli;

use clap::Parser;
use perfpoint::config;
use perfpoint::engine::batch::query_batch;
use perfpoint::engine::query::{breakdown, QueryRequest};
use perfpoint::engine::validate::validate_tables;
use perfpoint::error::{PerfError, Result};
use perfpoint::report;
use perfpoint::store::{DirectoryStore, TaskStore};
use perfpoint::types::config::PerfConfig;
use std::path::Path;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

pub mod exit_code {
    pub const SUCCESS: i32 = 0;
    pub const WARNINGS: i32 = 1;
    pub const BLOCKING: i32 = 2;
    pub const RUNTIME_FAILURE: i32 = 3;
}

struct Workspace {
    config: PerfConfig,
    loaded: Option<config::LoadedConfig>,
    store: DirectoryStore,
}

fn open_workspace(root: &Path) -> Result<Workspace> {
    if !root.exists() {
        return Err(PerfError::PathNotFound(root.display().to_string()));
    }
    let loaded = config::load_config(root)?;
    if loaded.is_none() {
        eprintln!(
            "warning: no {} found in {}",
            config::DEFAULT_CONFIG_FILE,
            root.display()
        );
    }
    let config = loaded
        .as_ref()
        .map(|loaded| loaded.config.clone())
        .unwrap_or_default();
    let store = DirectoryStore::new(root.join(config.data_dir()), config.read_timeout());
    Ok(Workspace {
        config,
        loaded,
        store,
    })
}

fn run(cli: cli::Cli) -> Result<i32> {
    match cli.command {
        cli::Commands::Query(cmd) => {
            let (start, end) = cmd.range.bounds()?;
            let workspace = open_workspace(&cmd.root)?;
            let buckets = query_batch(
                &workspace.store,
                &cmd.identifiers,
                start,
                end,
                cmd.range.team,
                cmd.weekly,
                workspace.config.workers(),
            )?;
            let format = cli::ReportFormat::resolve(cmd.format, workspace.config.report_format());
            println!("{}", report::render_buckets(&buckets, format)?);
            Ok(exit_code::SUCCESS)
        }
        cli::Commands::Breakdown(cmd) => {
            let (start, end) = cmd.range.bounds()?;
            let workspace = open_workspace(&cmd.root)?;
            let request = QueryRequest::new(cmd.identifier, start, end, cmd.range.team, false);
            let rows = breakdown(&workspace.store, &request)?;
            let format = cli::ReportFormat::resolve(cmd.format, workspace.config.report_format());
            println!("{}", report::render_breakdown(&rows, format)?);
            Ok(exit_code::SUCCESS)
        }
        cli::Commands::Validate(cmd) => {
            let workspace = open_workspace(&cmd.root)?;
            let levels = workspace.store.load_all_levels()?;
            let tools = workspace.store.load_all_tools()?;
            let tasks = workspace.store.load_all_tasks()?;
            let findings = validate_tables(&levels, &tools, &tasks);
            if let Some(loaded) = &workspace.loaded {
                println!("config layers: {}", loaded.describe_layers());
            }

            if findings.is_empty() {
                println!(
                    "validate: no findings ({} level tables, {} tools, {} tasks)",
                    levels.len(),
                    tools.len(),
                    tasks.len()
                );
                return Ok(if workspace.loaded.is_some() {
                    exit_code::SUCCESS
                } else {
                    exit_code::WARNINGS
                });
            }

            for finding in &findings {
                let level = if finding.blocking { "BLOCKING" } else { "WARN" };
                println!("[{}] {}: {}", level, finding.id, finding.title);
                println!("  {}", finding.body);
            }

            if findings.iter().any(|finding| finding.blocking) {
                Ok(exit_code::BLOCKING)
            } else {
                Ok(exit_code::WARNINGS)
            }
        }
    }
}

fn init_tracing(cli: &cli::Cli) {
    if cli.quiet {
        return;
    }

    let filter = match cli.verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(filter));

    tracing_subscriber::registry()
        .with(env_filter)
        .with(fmt::layer().with_writer(std::io::stderr))
        .init();
}

fn main() {
    let cli = cli::Cli::parse();
    init_tracing(&cli);
    match run(cli) {
        Ok(code) => {
            if code != 0 {
                std::process::exit(code);
            }
        }
        Err(e) => {
            eprintln!("error: {}", e);
            std::process::exit(exit_code::RUNTIME_FAILURE);
        }
    }
}
