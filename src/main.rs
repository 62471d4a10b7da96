//! pagesim CLI: compare FIFO and LRU page replacement over a trace file.

use clap::Parser;
use pagesim::common::config::{DEFAULT_FRAME_CAPACITY, DEFAULT_INPUT_FILE};
use pagesim::driver::{self, DriverConfig, DriverOutput};
use pagesim::{Policy, TraceLoader};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "pagesim")]
#[command(about = "Simulate FIFO and LRU page replacement over an access trace")]
#[command(version)]
struct Cli {
    /// Delimited file of page numbers, read row by row
    #[arg(default_value = DEFAULT_INPUT_FILE)]
    input: PathBuf,

    /// Number of memory frames
    #[arg(short, long, default_value_t = DEFAULT_FRAME_CAPACITY)]
    frames: usize,

    /// Directory the report files are written to
    #[arg(short, long, default_value = ".")]
    out_dir: PathBuf,

    /// Field delimiter of the input file (a single ASCII character)
    #[arg(short, long, default_value = ",", value_parser = parse_delimiter)]
    delimiter: u8,

    /// Policy to run (fifo or lru); may be repeated, defaults to both
    #[arg(short, long = "policy", value_parser = parse_policy)]
    policies: Vec<Policy>,

    /// Do not write report files, only print the fault counts
    #[arg(short, long)]
    quiet: bool,

    /// Print a per-step trace to stderr
    #[arg(short, long)]
    verbose: bool,
}

fn parse_policy(name: &str) -> Result<Policy, String> {
    Policy::parse(name).ok_or_else(|| format!("unknown policy: {name} (expected fifo or lru)"))
}

fn parse_delimiter(s: &str) -> Result<u8, String> {
    match s.as_bytes() {
        [b] if b.is_ascii() => Ok(*b),
        _ => Err(format!("delimiter must be a single ASCII character, got {s:?}")),
    }
}

fn main() {
    let cli = Cli::parse();

    let config = DriverConfig {
        input: cli.input,
        capacity: cli.frames,
        out_dir: cli.out_dir,
        policies: if cli.policies.is_empty() {
            Policy::ALL.to_vec()
        } else {
            cli.policies
        },
        loader: TraceLoader::new().with_delimiter(cli.delimiter),
        write_reports: !cli.quiet,
    };

    match driver::run(&config) {
        Ok(output) => {
            if cli.verbose {
                print_trace(&output);
            }
            for line in output.stats_lines() {
                eprintln!("{line}");
            }
            for line in output.summary_lines() {
                println!("{line}");
            }
        }
        Err(e) => {
            eprintln!("Error: {e}");
            std::process::exit(1);
        }
    }
}

fn print_trace(output: &DriverOutput) {
    eprintln!(
        "Loaded {} accesses, {} frames",
        output.pages.len(),
        output.capacity
    );
    for run in &output.runs {
        eprintln!("{}:", run.policy);
        for (i, step) in run.result.steps().iter().enumerate() {
            eprintln!(
                "  step {:>4}: page {} -> {} {}",
                i + 1,
                step.page,
                step.outcome,
                step.snapshot
            );
        }
        if let Some(path) = &run.report {
            eprintln!("  report written to {}", path.display());
        }
    }
}
