//! Shape report CLI
//!
//! # Usage
//!
//! ```bash
//! # JSON report on stdout
//! cargo run --bin shape-report --release -- analyze data/people.nt
//!
//! # Custom config, undirected canonical forms, report to a file
//! cargo run --bin shape-report --release -- analyze data/people.nt \
//!     --config shapes.yaml --traversal undirected --output report.json
//!
//! # Graphviz rendering of one component's canonical form
//! cargo run --bin shape-report --release -- dot data/people.nt --component 3
//! ```

use anyhow::{bail, Context, Result};
use clap::{Parser, Subcommand};
use shapegraph_engine::config::{AnalysisConfig, ConfigError};
use shapegraph_engine::features::canonical_form::TraversalKind;
use shapegraph_engine::pipeline::ShapeAnalyzer;
use std::path::{Path, PathBuf};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "shape-report")]
#[command(about = "Classify and deduplicate the connected components of an RDF graph", long_about = None)]
struct Cli {
    /// Log debug output (overridden by RUST_LOG)
    #[arg(short, long, global = true)]
    verbose: bool,

    /// YAML configuration file (schema v1)
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Write a JSON analysis report
    Analyze {
        /// N-Triples input
        input: PathBuf,

        /// Skip grouping for components above this many vertices
        #[arg(long)]
        max_component_size: Option<usize>,

        /// Canonical form traversal: directed or undirected
        #[arg(long, value_parser = parse_traversal)]
        traversal: Option<TraversalKind>,

        /// Report file (stdout when omitted)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Print one component's canonical form as Graphviz DOT
    Dot {
        /// N-Triples input
        input: PathBuf,

        /// Component index as listed in the report
        #[arg(long)]
        component: usize,

        #[arg(long, value_parser = parse_traversal)]
        traversal: Option<TraversalKind>,
    },
}

fn parse_traversal(value: &str) -> Result<TraversalKind, ConfigError> {
    TraversalKind::from_str(value)
        .ok_or_else(|| ConfigError::unknown_value("traversal", value, &["directed", "undirected"]))
}

fn init_logging(verbose: bool) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        if verbose {
            EnvFilter::new("debug")
        } else {
            EnvFilter::new("warn")
        }
    });

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}

fn load_config(path: Option<&Path>) -> Result<AnalysisConfig> {
    match path {
        Some(path) => AnalysisConfig::from_yaml_file(path)
            .with_context(|| format!("failed to load config {}", path.display())),
        None => Ok(AnalysisConfig::default()),
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);
    let config = load_config(cli.config.as_deref())?;

    match cli.command {
        Commands::Analyze {
            input,
            max_component_size,
            traversal,
            output,
        } => {
            let mut config = config;
            if let Some(max) = max_component_size {
                config = config.max_component_size(max);
            }
            if let Some(kind) = traversal {
                config = config.traversal(kind);
            }
            analyze(config, &input, output.as_deref())
        }
        Commands::Dot {
            input,
            component,
            traversal,
        } => {
            let config = match traversal {
                Some(kind) => config.traversal(kind),
                None => config,
            };
            dot(config, &input, component)
        }
    }
}

fn analyze(config: AnalysisConfig, input: &Path, output: Option<&Path>) -> Result<()> {
    let analyzer = ShapeAnalyzer::new(config)?;
    let report = analyzer
        .analyze_file(input)
        .with_context(|| format!("failed to analyze {}", input.display()))?;

    match output {
        Some(path) => {
            report
                .write_json(path)
                .with_context(|| format!("failed to write {}", path.display()))?;
            eprintln!(
                "{} components, {} bags, {} skipped -> {}",
                report.components.len(),
                report.bags.len(),
                report.skipped.len(),
                path.display()
            );
        }
        None => println!("{}", report.to_json()?),
    }
    Ok(())
}

fn dot(config: AnalysisConfig, input: &Path, index: usize) -> Result<()> {
    let analyzer = ShapeAnalyzer::new(config)?;
    let graph = analyzer
        .load_file(input)
        .with_context(|| format!("failed to read {}", input.display()))?;
    let components = analyzer.components(&graph);

    let Some(features) = components.get(index) else {
        bail!(
            "component {} out of range ({} components)",
            index,
            components.len()
        );
    };
    print!("{}", analyzer.canonical_form(features).to_dot());
    Ok(())
}
