//! MIPS pipeline simulator CLI.
//!
//! This binary runs a raw big-endian program image on the simulator. It performs:
//! 1. **Setup:** Reads an optional JSON configuration and loads the image at address 0.
//! 2. **Run:** Runs to halt, or for at most `--cycles` cycles.
//! 3. **Report:** Logs the final pipe state, statistics and registers; optionally
//!    prints statistics as JSON and dumps memory after the caches are drained.
//!
//! Log verbosity follows `RUST_LOG` (default `info`; `trace` shows every stage).

use std::io::{self, Write};
use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use tracing::{error, info, warn};
use tracing_subscriber::EnvFilter;

use mipsim_core::common::SimResult;
use mipsim_core::sim::loader;
use mipsim_core::{Config, MainMemory, Simulator};

#[derive(Parser, Debug)]
#[command(
    name = "mipsim",
    author,
    version,
    about = "Cycle-accurate five-stage MIPS pipeline simulator",
    long_about = "Run a raw big-endian MIPS image loaded at address 0 until it executes the halt word 0xfeedfeed.\n\nExamples:\n  mipsim prog.bin\n  mipsim prog.bin --config caches.json --cycles 10000 --stats-json"
)]
struct Cli {
    /// Program image to load at address 0.
    image: PathBuf,

    /// JSON configuration (general, icache, dcache sections).
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Stop after this many cycles even if the program has not halted.
    #[arg(long)]
    cycles: Option<u64>,

    /// Print final statistics as JSON on stdout.
    #[arg(long)]
    stats_json: bool,

    /// Print every non-zero memory word after the caches are drained.
    #[arg(long)]
    dump_memory: bool,
}

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(io::stderr)
        .init();

    let cli = Cli::parse();
    match run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            error!("{err}");
            ExitCode::FAILURE
        }
    }
}

fn run(cli: &Cli) -> SimResult<()> {
    let config = match &cli.config {
        Some(path) => Config::from_file(path)?,
        None => Config::default(),
    };

    let image = loader::load_file(&cli.image)?;
    let mut mem = MainMemory::new(config.general.memory_size);
    loader::load_image(&mut mem, &image)?;
    info!(image = %cli.image.display(), bytes = image.len(), "loaded");

    let mut sim = Simulator::new(&config, mem)?;
    let halted = match cli.cycles {
        Some(budget) => sim.run_cycles(budget)?,
        None => {
            sim.run_till_halt()?;
            true
        }
    };
    if !halted {
        warn!(cycles = sim.cpu.cycle, "cycle budget exhausted before halt");
    }

    let done = sim.finalize()?;

    let mut out = io::stdout().lock();
    if cli.stats_json {
        serde_json::to_writer_pretty(&mut out, &done.stats)?;
        writeln!(out)?;
    }
    if cli.dump_memory {
        done.memory.dump(&mut out)?;
    }
    Ok(())
}
