use anyhow::Context;
use clap::{Parser, Subcommand};
use comfy_table::Table;
use configuration::settings::Config;
use configuration::ModeSettings;
use core_types::{DimensionSet, PerformanceVector};
use engine::{AnalysisEngine, AnalysisResult};
use rayon::prelude::*;
use rust_decimal::Decimal;
use serde::Deserialize;
use serde_json::{Map, Value};
use std::collections::BTreeMap;
use std::fs::File;
use std::io::{BufReader, BufWriter};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

/// The main entry point for the Pantheon ranking application.
fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    // Parse command-line arguments
    let cli = Cli::parse();

    let config = match configuration::load_config_from(&cli.config) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Failed to load configuration: {e}");
            std::process::exit(1);
        }
    };
    tracing::info!(modes = config.modes.len(), "configuration loaded");

    // Execute the appropriate command
    match cli.command {
        Commands::Analyze(args) => {
            if let Err(e) = handle_analyze(args, &config) {
                eprintln!("Error during analysis: {e:#}");
                std::process::exit(1);
            }
        }
        Commands::Modes => handle_modes(&config),
    }
}

// ==============================================================================
// CLI Structure
// ==============================================================================

/// Ranks historical sports performances by multi-dimensional Pareto dominance.
#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Path to the configuration file.
    #[arg(long, default_value = "config.toml")]
    config: String,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Run the dominance analysis over a prepared population file.
    Analyze(AnalyzeArgs),

    /// List the analysis modes defined in the configuration.
    Modes,
}

#[derive(Parser)]
struct AnalyzeArgs {
    /// JSON file of prepared performance records.
    #[arg(long)]
    input: PathBuf,

    /// Run a single configured mode instead of all of them.
    #[arg(long)]
    mode: Option<String>,

    /// Where to write the result JSON.
    #[arg(long, default_value = "pantheon_results.json")]
    output: PathBuf,
}

// ==============================================================================
// Input Records
// ==============================================================================

/// One prepared performance record, as produced by the upstream data
/// preparation step. Stats are keyed by dimension name so a single file can
/// feed modes with different dimension sets; a missing or null stat simply
/// leaves that entry unranked in modes that need it.
#[derive(Debug, Deserialize)]
struct InputRecord {
    id: String,
    stats: BTreeMap<String, Option<Decimal>>,
    #[serde(default)]
    meta: Map<String, Value>,
}

/// Projects name-keyed records into positional vectors for one mode.
fn to_vectors(records: &[InputRecord], dims: &DimensionSet) -> Vec<PerformanceVector> {
    records
        .iter()
        .map(|record| {
            let values = dims
                .dimension_names()
                .iter()
                .map(|name| record.stats.get(name).copied().flatten())
                .collect();
            PerformanceVector::new(record.id.clone(), values).with_metadata(record.meta.clone())
        })
        .collect()
}

// ==============================================================================
// Analyze Command Logic
// ==============================================================================

/// Handles the orchestration of a full analysis: load, run per mode, write.
fn handle_analyze(args: AnalyzeArgs, config: &Config) -> anyhow::Result<()> {
    let file = File::open(&args.input)
        .with_context(|| format!("opening input file {}", args.input.display()))?;
    let records: Vec<InputRecord> =
        serde_json::from_reader(BufReader::new(file)).context("parsing input records")?;
    println!(
        "Loaded {} performance records from {}",
        records.len(),
        args.input.display()
    );

    let selected: Vec<&ModeSettings> = match &args.mode {
        Some(name) => vec![config
            .mode(name)
            .with_context(|| format!("mode '{name}' is not configured"))?],
        None => config.modes.iter().collect(),
    };

    // Modes are wholly independent runs over the same records; fan them out.
    let engine = AnalysisEngine::new(config.analysis.clone());
    let results: BTreeMap<String, AnalysisResult> = selected
        .par_iter()
        .map(|mode| -> anyhow::Result<(String, AnalysisResult)> {
            let dims = mode.to_dimension_set()?;
            let population = to_vectors(&records, &dims);
            let result = engine
                .run(&population, &dims)
                .with_context(|| format!("analyzing mode '{}'", mode.name))?;
            Ok((mode.name.clone(), result))
        })
        .collect::<anyhow::Result<_>>()?;

    for result in results.values() {
        print_summary(result);
    }

    let out = File::create(&args.output)
        .with_context(|| format!("creating output file {}", args.output.display()))?;
    serde_json::to_writer_pretty(BufWriter::new(out), &results)
        .context("writing result JSON")?;
    println!(
        "Wrote {} mode result(s) to {}",
        results.len(),
        args.output.display()
    );

    Ok(())
}

/// Prints a per-mode layer breakdown to the console.
fn print_summary(result: &AnalysisResult) {
    println!(
        "\nMode '{}': {} entries ({} skipped), max layer {}, {} dominance edges",
        result.run.mode,
        result.run.total_entries,
        result.skipped.len(),
        result.dag.stats.max_layer,
        result.dag.edges.len()
    );

    let mut table = Table::new();
    table.set_header(vec!["Layer", "Entries"]);
    for (layer, size) in &result.dag.stats.layer_sizes {
        table.add_row(vec![layer.to_string(), size.to_string()]);
    }
    println!("{table}");

    for warning in &result.warnings {
        println!("warning: {warning}");
    }
}

/// Prints the configured analysis modes.
fn handle_modes(config: &Config) {
    let mut table = Table::new();
    table.set_header(vec!["Mode", "Dimensions"]);
    for mode in &config.modes {
        table.add_row(vec![mode.name.clone(), mode.dimensions.join(", ")]);
    }
    println!("{table}");
}
