//! Pipeline latch structures for inter-stage communication.
//!
//! This module defines the registers that connect the five stages of the
//! pipeline. Each latch is a small record with a `valid` flag (does this slot
//! carry a real instruction?) and, from Decode onward, an `illegal` flag for
//! instructions whose encoding was well-defined but unsupported. A latch with
//! `valid == false` is a bubble and contributes no work downstream.

use crate::core::pipeline::signals::Opcode;

/// IF/ID pipeline latch (Fetch to Decode).
///
/// Carries the raw instruction word fetched from memory together with the
/// address it was fetched from.
#[derive(Clone, Copy, Default, Debug)]
pub struct IfId {
    /// Whether this slot carries a fetched instruction.
    pub valid: bool,
    /// Program counter of the instruction.
    pub pc: u32,
    /// Raw 32-bit instruction encoding.
    pub inst: u32,
}

/// ID/EX pipeline latch (Decode to Execute).
///
/// Carries the decoded opcode tag plus fully-resolved operands; Execute never
/// re-examines the raw encoding.
#[derive(Clone, Copy, Default, Debug)]
pub struct IdEx {
    /// Whether this slot carries a decoded instruction.
    pub valid: bool,
    /// Whether the instruction's encoding was unsupported. Illegal
    /// instructions flow through the remaining stages unchanged.
    pub illegal: bool,
    /// Program counter of the instruction.
    pub pc: u32,
    /// Decoded operation.
    pub opcode: Opcode,
    /// Destination register index.
    pub rd: usize,
    /// First operand (rs1 value, after forwarding).
    pub v1: u32,
    /// Second operand (rs2 value after forwarding, or the immediate).
    pub v2: u32,
}

/// EX/MEM pipeline latch (Execute to Memory).
#[derive(Clone, Copy, Default, Debug)]
pub struct ExMem {
    /// Whether this slot carries an executed instruction.
    pub valid: bool,
    /// Whether the instruction was illegal at decode.
    pub illegal: bool,
    /// Program counter of the instruction.
    pub pc: u32,
    /// Decoded operation, carried through for retirement tracing.
    pub opcode: Opcode,
    /// Destination register index.
    pub rd: usize,
    /// ALU result.
    pub v: u32,
}

/// MEM/WB pipeline latch (Memory to Writeback).
#[derive(Clone, Copy, Default, Debug)]
pub struct MemWb {
    /// Whether this slot carries a retiring instruction.
    pub valid: bool,
    /// Whether the instruction was illegal at decode. Illegal retirements
    /// are traced but perform no register update.
    pub illegal: bool,
    /// Program counter of the instruction.
    pub pc: u32,
    /// Decoded operation, carried through for retirement tracing.
    pub opcode: Opcode,
    /// Destination register index.
    pub rd: usize,
    /// Value written to `rd` at retirement.
    pub v: u32,
}
