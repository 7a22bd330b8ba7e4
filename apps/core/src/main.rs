// TaskSense command-line entry point
// Classifies tasks from arguments or JSON lines and prints JSON.

use std::fs;
use std::io::{self, Write};
use std::path::PathBuf;
use std::process;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

use tasksense_core::batch::classify_lines;
use tasksense_core::config::AppConfig;
use tasksense_core::intake::TaskIntake;

#[derive(Parser)]
#[command(name = "tasksense", version, about = "Infer task priority and category")]
struct Cli {
    /// JSON vocabulary file replacing the built-in one
    #[arg(long, global = true)]
    patterns: Option<PathBuf>,

    /// Log filter directive (e.g. "debug", "tasksense_core=trace")
    #[arg(long, global = true)]
    log: Option<String>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Analyze a single task and print the result
    Analyze {
        #[arg(long)]
        title: String,
        #[arg(long)]
        description: Option<String>,
        /// Include the per-level and per-category score breakdown
        #[arg(long)]
        explain: bool,
        #[arg(long)]
        pretty: bool,
    },
    /// Classify JSON lines ({"title", "description"?, "priority"?, "category"?})
    Batch {
        file: PathBuf,
        /// Worker threads (defaults to TASKSENSE_BATCH_WORKERS or 4)
        #[arg(long, value_parser = AppConfig::parse_workers)]
        workers: Option<usize>,
    },
    /// Print the active vocabulary as JSON
    Patterns,
}

fn init_tracing(filter: &str) {
    // stderr keeps stdout clean for JSON output
    tracing_subscriber::fmt()
        .with_writer(io::stderr)
        .with_env_filter(EnvFilter::try_new(filter).unwrap_or_else(|_| EnvFilter::new("warn")))
        .init();
}

fn to_json<T: serde::Serialize>(value: &T, pretty: bool) -> Result<String> {
    let json = if pretty {
        serde_json::to_string_pretty(value)?
    } else {
        serde_json::to_string(value)?
    };
    Ok(json)
}

fn run(cli: Cli) -> Result<bool> {
    let mut config = AppConfig::from_env().context("Failed to read configuration")?;
    if let Some(path) = cli.patterns {
        config.patterns_path = Some(path);
    }
    if let Some(filter) = cli.log {
        config.log_filter = Some(filter);
    }
    init_tracing(&config.effective_log_filter());

    let analyzer = config
        .build_analyzer()
        .context("Failed to load vocabulary")?;

    let stdout = io::stdout();
    let mut out = stdout.lock();

    match cli.command {
        Command::Analyze {
            title,
            description,
            explain,
            pretty,
        } => {
            let json = if explain {
                to_json(&analyzer.analyze_detailed(&title, description.as_deref()), pretty)?
            } else {
                to_json(&analyzer.analyze(&title, description.as_deref()), pretty)?
            };
            writeln!(out, "{}", json)?;
            Ok(true)
        }
        Command::Batch { file, workers } => {
            let input = fs::read_to_string(&file)
                .with_context(|| format!("Failed to read {}", file.display()))?;
            let workers = workers.unwrap_or(config.batch_workers);
            let intake = TaskIntake::new(analyzer);

            let items = classify_lines(&intake, &input, workers);
            let mut failures = 0;
            for item in &items {
                match &item.outcome {
                    Ok(task) => writeln!(out, "{}", to_json(task, false)?)?,
                    Err(e) => {
                        failures += 1;
                        error!("Line {}: {}", item.line, e);
                    }
                }
            }
            info!(
                "Batch finished: {} classified, {} failed",
                items.len() - failures,
                failures
            );
            Ok(failures == 0)
        }
        Command::Patterns => {
            writeln!(out, "{}", analyzer.patterns().to_json_pretty()?)?;
            Ok(true)
        }
    }
}

fn main() {
    dotenv::dotenv().ok();

    let cli = Cli::parse();

    match run(cli) {
        Ok(true) => {}
        Ok(false) => process::exit(1),
        Err(e) => {
            eprintln!("Error: {e}");
            for cause in e.chain().skip(1) {
                eprintln!("  Caused by: {cause}");
            }
            process::exit(1);
        }
    }
}
