//! General-purpose register file.
//!
//! This module implements the 32-entry integer register file. It performs:
//! 1. **Storage:** 32 registers (`x0`-`x31`) of 32 bits each.
//! 2. **Invariant enforcement:** Register `x0` is hardwired to zero; writes
//!    to it are dropped and reads always return 0.
//! 3. **Debugging:** A dump utility for inspecting register state.

use crate::common::constants::NUM_REGS;

/// General-purpose register file.
///
/// Register `x0` is hardwired to zero and cannot be modified. The writeback
/// stage builds its post-writeback view by cloning this structure.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Gpr {
    regs: [u32; NUM_REGS],
}

impl Gpr {
    /// Creates a register file with all registers initialized to zero.
    pub fn new() -> Self {
        Self {
            regs: [0; NUM_REGS],
        }
    }

    /// Reads a register value. Register `x0` always returns 0.
    pub fn read(&self, idx: usize) -> u32 {
        if idx == 0 { 0 } else { self.regs[idx] }
    }

    /// Writes a value to a register. Writes to `x0` are ignored.
    pub fn write(&mut self, idx: usize, val: u32) {
        if idx != 0 {
            self.regs[idx] = val;
        }
    }

    /// Dumps the contents of all registers to stderr, two per line.
    pub fn dump(&self) {
        for i in (0..NUM_REGS).step_by(2) {
            eprintln!(
                "x{:<2}={:#010x} x{:<2}={:#010x}",
                i,
                self.regs[i],
                i + 1,
                self.regs[i + 1]
            );
        }
    }
}

impl Default for Gpr {
    fn default() -> Self {
        Self::new()
    }
}
