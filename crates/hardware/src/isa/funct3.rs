//! Integer function codes (funct3, bits 14-12).
//!
//! The `funct3` field distinguishes instructions sharing a major opcode
//! (e.g. ADDI vs SLTI, SRL vs SRA together with the alternate-encoding bit).

/// Add (immediate or register form).
pub const ADD_SUB: u32 = 0b000;
/// Shift Left Logical.
pub const SLL: u32 = 0b001;
/// Set Less Than (signed).
pub const SLT: u32 = 0b010;
/// Set Less Than Unsigned.
pub const SLTU: u32 = 0b011;
/// Bitwise XOR.
pub const XOR: u32 = 0b100;
/// Shift Right Logical / Arithmetic.
pub const SRL_SRA: u32 = 0b101;
/// Bitwise OR.
pub const OR: u32 = 0b110;
/// Bitwise AND.
pub const AND: u32 = 0b111;
