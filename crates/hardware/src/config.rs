//! Configuration system for the simulator.
//!
//! This module defines the configuration structures used to parameterize a
//! simulation. It provides:
//! 1. **Defaults:** Baseline constants (flash capacity, run length).
//! 2. **Structures:** Hierarchical config for general behavior and memory.
//! 3. **Parsing:** JSON deserialization for the CLI `--config` option.
//!
//! Every field and section defaults independently, so a config document may
//! override only what it cares about.

use serde::Deserialize;

use crate::common::error::SimError;

/// Default configuration constants.
mod defaults {
    /// Nominal flash capacity in bytes, matching the reference BIOS ROM.
    pub const FLASH_SIZE: usize = 1024;

    /// Ticks to run after the reset pulse when the CLI is not told otherwise.
    pub const RUN_CYCLES: u64 = 1000;
}

/// Root configuration for a simulation.
#[derive(Clone, Debug, Default, Deserialize)]
#[serde(default)]
pub struct Config {
    /// General simulation behavior.
    pub general: GeneralConfig,
    /// Memory subsystem parameters.
    pub memory: MemoryConfig,
}

/// General simulation behavior.
#[derive(Clone, Debug, Deserialize)]
#[serde(default)]
pub struct GeneralConfig {
    /// Echo per-stage activity (IF/ID/EX/WB lines) to stderr.
    pub trace_stages: bool,
    /// Ticks to run after the reset pulse.
    pub run_cycles: u64,
}

/// Memory subsystem parameters.
#[derive(Clone, Debug, Deserialize)]
#[serde(default)]
pub struct MemoryConfig {
    /// Nominal flash capacity in bytes (a reservation hint; images may be
    /// larger).
    pub flash_size: usize,
}

impl Default for GeneralConfig {
    fn default() -> Self {
        Self {
            trace_stages: false,
            run_cycles: defaults::RUN_CYCLES,
        }
    }
}

impl Default for MemoryConfig {
    fn default() -> Self {
        Self {
            flash_size: defaults::FLASH_SIZE,
        }
    }
}

impl Config {
    /// Parses a configuration from a JSON document.
    pub fn from_json(text: &str) -> Result<Self, SimError> {
        Ok(serde_json::from_str(text)?)
    }
}
