//! Simulator: owns the core and its flash backend.
//!
//! Implements the canonical drive sequence: construct the memory backend and
//! core, load the firmware image, assert reset for one tick, deassert, run N
//! ticks, inspect the register file.

use std::path::Path;

use crate::common::error::SimError;
use crate::config::Config;
use crate::core::Core;
use crate::mem::Flash;
use crate::stats::Stats;

/// Top-level driver: one core fetching from one flash image.
pub struct Simulator {
    /// The pipelined core and its bound flash backend.
    pub core: Core<Flash>,
}

impl Simulator {
    /// Creates a simulator with an empty flash sized per the configuration.
    pub fn new(config: &Config) -> Self {
        let flash = Flash::new(config.memory.flash_size);
        Self {
            core: Core::new(flash, config),
        }
    }

    /// Loads a raw firmware image into flash at address 0.
    pub fn load_firmware<P: AsRef<Path>>(&mut self, path: P) -> Result<(), SimError> {
        self.core.mem.load_image_from_file(path)
    }

    /// Applies a one-tick reset pulse: assert, tick, deassert.
    pub fn reset_pulse(&mut self) {
        self.core.set_reset(true);
        self.core.tick();
        self.core.set_reset(false);
    }

    /// Advances the simulation by `ticks` clock cycles.
    pub fn run(&mut self, ticks: u64) {
        for _ in 0..ticks {
            self.core.tick();
        }
    }

    /// Reads a general-purpose register from the committed state.
    pub fn reg(&self, idx: usize) -> u32 {
        self.core.regs.read(idx)
    }

    /// Statistics accumulated so far.
    pub fn stats(&self) -> &Stats {
        &self.core.stats
    }
}
