use std::fs;
use std::path::{Path, PathBuf};
use std::time::{Duration, Instant};

use anyhow::{Context, Result, ensure};
use clap::{Parser, Subcommand, ValueEnum};
use log::debug;

use quill_core::model::comparator::identify_speaker;
use quill_core::model::storage::StorageKind;

/// Gram storage backend, selectable on the command line.
#[derive(Debug, Clone, Copy, ValueEnum)]
enum Backend {
    /// The crate's own separate-chaining hash table
    Chained,
    /// The standard library HashMap
    Native,
}

impl From<Backend> for StorageKind {
    fn from(backend: Backend) -> Self {
        match backend {
            Backend::Chained => StorageKind::Chained,
            Backend::Native => StorageKind::Native,
        }
    }
}

#[derive(Parser, Debug)]
#[command(name = "quill")]
#[command(version)]
#[command(about = "Speaker attribution with order-k character Markov models", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Decide which reference speaker most likely produced an unknown text
    Identify {
        /// Reference text of speaker A
        file_a: PathBuf,

        /// Reference text of speaker B
        file_b: PathBuf,

        /// Unknown text to attribute
        file_c: PathBuf,

        /// Markov model order (gram length)
        k: usize,

        /// Storage backend for the gram counts
        #[arg(value_enum)]
        backend: Backend,

        /// Emit the attribution as JSON instead of text
        #[arg(long)]
        json: bool,
    },

    /// Time both backends over a range of model orders
    Bench {
        /// Reference text of speaker A
        file_a: PathBuf,

        /// Reference text of speaker B
        file_b: PathBuf,

        /// Unknown text to attribute
        file_c: PathBuf,

        /// Largest model order to time, starting from 1
        max_k: usize,

        /// Timed runs per order and backend
        runs: usize,
    },
}

/// Reads a whole text file into memory.
fn read_text(path: &Path) -> Result<String> {
    fs::read_to_string(path).with_context(|| format!("failed to read {}", path.display()))
}

fn run_identify(
    file_a: &Path,
    file_b: &Path,
    file_c: &Path,
    k: usize,
    backend: Backend,
    json: bool,
) -> Result<()> {
    let text_a = read_text(file_a)?;
    let text_b = read_text(file_b)?;
    let text_c = read_text(file_c)?;

    let attribution = identify_speaker(&text_a, &text_b, &text_c, k, backend.into())?;

    if json {
        println!("{}", serde_json::to_string_pretty(&attribution)?);
    } else {
        println!();
        println!("Speaker A: {}", attribution.score_a);
        println!("Speaker B: {}", attribution.score_b);
        println!();
        println!("Conclusion: Speaker {} is most likely", attribution.verdict);
        println!();
    }

    Ok(())
}

fn run_bench(
    file_a: &Path,
    file_b: &Path,
    file_c: &Path,
    max_k: usize,
    runs: usize,
) -> Result<()> {
    ensure!(max_k >= 1, "max-k must be at least 1");
    ensure!(runs >= 1, "runs must be at least 1");

    let text_a = read_text(file_a)?;
    let text_b = read_text(file_b)?;
    let text_c = read_text(file_c)?;

    println!("{:<10} {:>4} {:>16}", "Backend", "K", "Mean time (s)");
    for k in 1..=max_k {
        for backend in [Backend::Chained, Backend::Native] {
            let mut total = Duration::ZERO;
            for run in 1..=runs {
                let start = Instant::now();
                identify_speaker(&text_a, &text_b, &text_c, k, backend.into())?;
                let elapsed = start.elapsed();
                debug!("k={} backend={:?} run={} took {:?}", k, backend, run, elapsed);
                total += elapsed;
            }
            let mean = total.as_secs_f64() / runs as f64;
            println!("{:<10} {:>4} {:>16.6}", format!("{:?}", backend), k, mean);
        }
    }

    Ok(())
}

fn main() -> Result<()> {
    env_logger::init();

    match Cli::parse().command {
        Command::Identify { file_a, file_b, file_c, k, backend, json } => {
            run_identify(&file_a, &file_b, &file_c, k, backend, json)
        }
        Command::Bench { file_a, file_b, file_c, max_k, runs } => {
            run_bench(&file_a, &file_b, &file_c, max_k, runs)
        }
    }
}
