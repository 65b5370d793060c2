//! ALU arithmetic operations.
//!
//! Only addition exists in the implemented subset; both the immediate and
//! register forms wrap modulo 2^32.

use crate::core::pipeline::signals::Opcode;

/// Executes an arithmetic operation. Returns `0` for non-arithmetic tags.
pub fn execute(op: Opcode, a: u32, b: u32) -> u32 {
    match op {
        Opcode::Addi | Opcode::Add => a.wrapping_add(b),
        _ => 0,
    }
}
