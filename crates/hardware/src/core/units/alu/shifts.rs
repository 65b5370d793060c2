//! ALU shift operations.
//!
//! Implements shift-left logical (SLL), shift-right logical (SRL), and
//! shift-right arithmetic (SRA). The shift amount is the low five bits of
//! the second operand; SRA replicates the sign bit.

use crate::core::pipeline::signals::Opcode;
use crate::isa::instruction::SHAMT_MASK;

/// Executes a shift operation. Returns `0` for non-shift tags.
pub fn execute(op: Opcode, a: u32, b: u32) -> u32 {
    let sh = b & SHAMT_MASK;
    match op {
        Opcode::Slli | Opcode::Sll => a.wrapping_shl(sh),
        Opcode::Srli | Opcode::Srl => a.wrapping_shr(sh),
        Opcode::Srai | Opcode::Sra => ((a as i32) >> sh) as u32,
        _ => 0,
    }
}
