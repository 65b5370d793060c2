//! RV32I integer instruction set tables and field extraction.
//!
//! # Structure
//!
//! - `opcodes`: Major opcode groups (bits 6-0) recognized by Decode.
//! - `funct3`: Minor opcodes distinguishing instructions within a group.
//! - `instruction`: Field extraction trait over raw encodings and immediate
//!   sign extension.

/// Function code 3 definitions for the integer operations.
pub mod funct3;
/// Instruction field extraction and sign extension.
pub mod instruction;
/// Major opcode groups.
pub mod opcodes;
