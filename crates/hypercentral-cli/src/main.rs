//! Hypercentral CLI - time one centrality measure on one dataset.
//!
//! # Usage
//!
//! ```bash
//! # Node PageRank on datasets/email-enron.json
//! hypercentral --dataset email-enron --measure pagerank
//!
//! # Edge closeness, datasets elsewhere, results under out/
//! hypercentral --dataset email-enron --measure closeness --edge \
//!     --path ~/xgi-data --output-dir out
//! ```
//!
//! Each run appends `<dataset> <target>_<measure> <secs>s` to
//! `<output-dir>/runtime.txt` and saves the scores, in entity order, to
//! `<output-dir>/values/<dataset>/<target>_<measure>.npy`.
//!
//! Logging goes to stderr and is controlled with `RUST_LOG`.

use anyhow::{ensure, Context, Result};
use clap::Parser;
use hypercentral_core::algo::centrality::Target;
use hypercentral_core::formats::{load_dataset, write_npy};
use hypercentral_core::stats::{edgestats, nodestats, to_dense, Measure};
use hypercentral_core::{EdgeId, Hypergraph, NodeId};
use indicatif::ProgressBar;
use ndarray::Array1;
use std::fs::{self, OpenOptions};
use std::io::{IsTerminal, Write};
use std::path::{Path, PathBuf};
use std::time::Instant;
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

/// Largest accepted distance between the sum of the scores and 1.
const SUM_TOLERANCE: f64 = 1e-3;

#[derive(Parser)]
#[command(name = "hypercentral")]
#[command(about = "Time hypergraph centrality measures", long_about = None)]
struct Cli {
    /// Dataset name, read from <path>/<dataset>.json
    #[arg(long)]
    dataset: String,

    /// Centrality measure (degree, line_expansion_degree, closeness,
    /// betweenness, harmonic, eigenvector, pagerank, hypercoreness, node_edge)
    #[arg(long)]
    measure: String,

    /// Score edges instead of nodes
    #[arg(long)]
    edge: bool,

    /// Directory holding the datasets
    #[arg(long, default_value = "datasets")]
    path: PathBuf,

    /// Directory for runtime.txt and values/
    #[arg(long, default_value = ".")]
    output_dir: PathBuf,
}

fn main() -> Result<()> {
    init_tracing();
    let cli = Cli::parse();

    let measure: Measure = cli.measure.parse()?;
    let target = if cli.edge { Target::Edge } else { Target::Node };
    let label = format!("{target}_{measure}");

    let hg = load(&cli.dataset, &cli.path)?;
    println!("loaded hypergraph {}", cli.dataset);

    let start = Instant::now();
    let values = score(&hg, target, &measure);
    let secs = start.elapsed().as_secs_f64();
    println!("Time taken for {label}: {secs} seconds");

    let total = values.sum();
    ensure!(
        (total - 1.0).abs() <= SUM_TOLERANCE,
        "{label} scores sum to {total}, expected 1"
    );

    record_runtime(&cli.output_dir, &cli.dataset, &label, secs)?;

    let dir = cli.output_dir.join("values").join(&cli.dataset);
    fs::create_dir_all(&dir).with_context(|| format!("Failed to create {}", dir.display()))?;
    let out = dir.join(format!("{label}.npy"));
    write_npy(&out, &values).with_context(|| format!("Failed to write {}", out.display()))?;
    info!(path = %out.display(), entries = values.len(), "saved scores");

    Ok(())
}

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    // A subscriber installed earlier (e.g. by a test harness) wins.
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_ansi(std::io::stderr().is_terminal())
        .with_target(false)
        .try_init();
}

fn load(dataset: &str, dir: &Path) -> Result<Hypergraph> {
    let start = Instant::now();
    let pb = ProgressBar::new_spinner();
    pb.set_message(format!("Loading {dataset}..."));

    let hg = load_dataset(dataset, dir)
        .with_context(|| format!("Failed to load dataset {dataset} from {}", dir.display()))?;

    pb.finish_with_message(format!("Loaded in {:.2?}", start.elapsed()));
    debug!(
        nodes = hg.num_nodes(),
        edges = hg.num_edges(),
        "hypergraph ready"
    );
    Ok(hg)
}

/// Score every entity of `target`, densified in the hypergraph's entity order.
fn score(hg: &Hypergraph, target: Target, measure: &Measure) -> Array1<f64> {
    match target {
        Target::Node => {
            let ids: Vec<NodeId> = hg.node_ids().cloned().collect();
            to_dense(&nodestats::centrality(hg, &ids, measure), &ids)
        }
        Target::Edge => {
            let ids: Vec<EdgeId> = hg.edge_ids().cloned().collect();
            to_dense(&edgestats::centrality(hg, &ids, measure), &ids)
        }
    }
}

fn record_runtime(output_dir: &Path, dataset: &str, label: &str, secs: f64) -> Result<()> {
    fs::create_dir_all(output_dir)
        .with_context(|| format!("Failed to create {}", output_dir.display()))?;
    let path = output_dir.join("runtime.txt");
    let mut file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(&path)
        .with_context(|| format!("Failed to open {}", path.display()))?;
    writeln!(file, "{dataset} {label} {secs:.4}s")
        .with_context(|| format!("Failed to write {}", path.display()))?;
    Ok(())
}
