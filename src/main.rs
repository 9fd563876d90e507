//! pagesim CLI: replay a page reference string under LRU and/or Optimal.

use std::path::PathBuf;

use clap::{ArgGroup, Parser, ValueEnum};
use log::debug;

use pagesim::{
    parse_references, read_references, run, PageId, PolicyKind, Result, SimulationResult,
    WorkloadProfile, DEFAULT_FRAME_COUNT, DEFAULT_REFERENCE_STRING,
};

#[derive(Parser)]
#[command(name = "pagesim")]
#[command(about = "Simulate page replacement with LRU and Optimal policies")]
#[command(version)]
#[command(group(ArgGroup::new("source").args(["sequence", "file", "generate"])))]
struct Cli {
    /// Number of physical frames
    #[arg(short, long, default_value_t = DEFAULT_FRAME_COUNT)]
    frames: usize,

    /// Replacement policy
    #[arg(short, long, value_enum, default_value = "lru")]
    policy: PolicyArg,

    /// Reference string, e.g. "1,2,3,4,1,2"
    #[arg(short, long)]
    sequence: Option<String>,

    /// Read the reference string from a file
    #[arg(long)]
    file: Option<PathBuf>,

    /// Generate a reference string for a process using this many MB
    #[arg(long, value_name = "MB", value_parser = parse_memory_mb)]
    generate: Option<f64>,

    /// Seed for --generate
    #[arg(long, default_value_t = 0)]
    seed: u64,

    /// Print every step
    #[arg(short, long)]
    trace: bool,
}

#[derive(Clone, Copy, ValueEnum)]
enum PolicyArg {
    Lru,
    Optimal,
    Both,
}

impl PolicyArg {
    fn kinds(self) -> &'static [PolicyKind] {
        match self {
            PolicyArg::Lru => &[PolicyKind::Lru],
            PolicyArg::Optimal => &[PolicyKind::Optimal],
            PolicyArg::Both => &PolicyKind::ALL,
        }
    }
}

fn main() {
    env_logger::init();
    let cli = Cli::parse();

    if let Err(e) = run_cli(&cli) {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}

fn run_cli(cli: &Cli) -> Result<()> {
    let references = load_references(cli)?;
    debug!("loaded {} references", references.len());

    println!("Page Sequence: {}", join(&references, " → "));
    println!("Total Frames: {}", cli.frames);

    for &kind in cli.policy.kinds() {
        let result = run(&references, cli.frames, kind)?;
        println!();
        print_result(&result, cli.trace);
    }
    Ok(())
}

fn load_references(cli: &Cli) -> Result<Vec<PageId>> {
    if let Some(path) = &cli.file {
        return read_references(path);
    }
    if let Some(mb) = cli.generate {
        return Ok(WorkloadProfile::from_memory_mb(mb).generate(cli.seed));
    }
    let text = cli.sequence.as_deref().unwrap_or(DEFAULT_REFERENCE_STRING);
    parse_references(text)
}

/// Accept only finite, non-negative sizes for `--generate`.
fn parse_memory_mb(s: &str) -> std::result::Result<f64, String> {
    let mb: f64 = s.parse().map_err(|_| format!("`{s}` is not a number"))?;
    if !mb.is_finite() || mb < 0.0 {
        return Err(format!("`{s}` must be a finite, non-negative size in MB"));
    }
    Ok(mb)
}

fn print_result(result: &SimulationResult, trace: bool) {
    println!("Algorithm: {}", result.policy);
    if trace {
        for step in &result.steps {
            println!("  {step}");
        }
    }
    println!("Page Faults: {}", result.faults());
    println!("Page Fault Rate: {:.2}%", result.fault_rate() * 100.0);

    let final_state: Vec<String> = result
        .final_frames()
        .iter()
        .map(|slot| slot.map_or_else(|| "-".to_string(), |p| p.0.to_string()))
        .collect();
    println!("Final Memory State: [{}]", final_state.join(", "));
}

fn join(pages: &[PageId], sep: &str) -> String {
    pages
        .iter()
        .map(|p| p.0.to_string())
        .collect::<Vec<_>>()
        .join(sep)
}
