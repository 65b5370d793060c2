//! Major opcode groups (bits 6-0).
//!
//! Only the two integer computation groups are implemented; every other
//! encoding falls through Decode as an illegal placeholder.

/// Immediate arithmetic instructions (ADDI, ANDI, SLLI, ...).
pub const OP_IMM: u32 = 0b0010011;

/// Register-register arithmetic instructions (ADD, SLT, SLL, ...).
pub const OP_REG: u32 = 0b0110011;
