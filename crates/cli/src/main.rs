//! Five-stage in-order RV32I pipeline simulator CLI.
//!
//! Loads a raw firmware image into flash at address 0, applies a one-tick
//! reset pulse, runs the requested number of cycles, and prints every
//! nonzero register. Retirement trace lines go to stdout as the simulation
//! runs; `--trace` additionally echoes per-stage activity to stderr.

use clap::Parser;
use std::fs;
use std::path::PathBuf;
use std::process;

use inorder_core::common::constants::NUM_REGS;
use inorder_core::{Config, Simulator};

#[derive(Parser, Debug)]
#[command(
    name = "inorder",
    version,
    about = "Cycle-accurate five-stage in-order RV32I pipeline simulator",
    long_about = "Simulate a raw RV32I firmware image on a five-stage in-order pipeline.\n\n\
        The image is raw little-endian 32-bit words executed from address 0.\n\n\
        Examples:\n  inorder firmware.bin\n  inorder firmware.bin --cycles 64 --stats"
)]
struct Cli {
    /// Firmware image: raw little-endian RV32I words, loaded at address 0.
    firmware: PathBuf,

    /// Clock ticks to run after the reset pulse (default from configuration).
    #[arg(long)]
    cycles: Option<u64>,

    /// JSON configuration file overriding the built-in defaults.
    #[arg(long)]
    config: Option<PathBuf>,

    /// Echo per-stage activity to stderr.
    #[arg(long)]
    trace: bool,

    /// Print pipeline statistics after the run.
    #[arg(long)]
    stats: bool,
}

fn main() {
    let cli = Cli::parse();

    let mut config = match cli.config {
        Some(path) => load_config(&path),
        None => Config::default(),
    };
    if cli.trace {
        config.general.trace_stages = true;
    }

    let mut sim = Simulator::new(&config);
    if let Err(e) = sim.load_firmware(&cli.firmware) {
        eprintln!("[!] {e}");
        process::exit(1);
    }

    sim.reset_pulse();
    sim.run(cli.cycles.unwrap_or(config.general.run_cycles));

    for i in 0..NUM_REGS {
        let val = sim.reg(i);
        if val != 0 {
            println!("r[{i}] = 0x{val:08x}");
        }
    }

    if cli.stats {
        sim.stats().print();
    }
}

/// Reads and parses a JSON configuration file, exiting on failure.
fn load_config(path: &PathBuf) -> Config {
    let text = fs::read_to_string(path).unwrap_or_else(|e| {
        eprintln!("[!] failed to read config '{}': {e}", path.display());
        process::exit(1);
    });
    Config::from_json(&text).unwrap_or_else(|e| {
        eprintln!("[!] {e}");
        process::exit(1);
    })
}
