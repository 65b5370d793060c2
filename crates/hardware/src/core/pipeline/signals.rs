//! Decoded opcode taxonomy and forwarding packets.
//!
//! This module defines the signals Decode produces for the downstream stages:
//! 1. **Opcode taxonomy:** The closed set of implemented integer operations,
//!    as a tagged enumeration matched exhaustively at Execute and at trace
//!    emission.
//! 2. **Forwarding packets:** The per-cycle bypass records Execute and Memory
//!    publish for Decode's register read.

/// Decoded integer operation.
///
/// Immediate and register forms are distinct tags so retirement tracing can
/// print the exact mnemonic; their Execute semantics pair up (ADDI/ADD, ...).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum Opcode {
    /// Add immediate (default value for bubble latches).
    #[default]
    Addi,
    /// Set less than immediate (signed).
    Slti,
    /// Set less than immediate unsigned.
    Sltiu,
    /// XOR immediate.
    Xori,
    /// OR immediate.
    Ori,
    /// AND immediate.
    Andi,
    /// Shift left logical immediate.
    Slli,
    /// Shift right logical immediate.
    Srli,
    /// Shift right arithmetic immediate.
    Srai,
    /// Integer addition.
    Add,
    /// Set less than (signed).
    Slt,
    /// Set less than unsigned.
    Sltu,
    /// Bitwise XOR.
    Xor,
    /// Bitwise OR.
    Or,
    /// Bitwise AND.
    And,
    /// Shift left logical.
    Sll,
    /// Shift right logical.
    Srl,
    /// Shift right arithmetic.
    Sra,
}

impl Opcode {
    /// Returns the uppercase mnemonic used by retirement tracing.
    pub const fn mnemonic(self) -> &'static str {
        match self {
            Self::Addi => "ADDI",
            Self::Slti => "SLTI",
            Self::Sltiu => "SLTIU",
            Self::Xori => "XORI",
            Self::Ori => "ORI",
            Self::Andi => "ANDI",
            Self::Slli => "SLLI",
            Self::Srli => "SRLI",
            Self::Srai => "SRAI",
            Self::Add => "ADD",
            Self::Slt => "SLT",
            Self::Sltu => "SLTU",
            Self::Xor => "XOR",
            Self::Or => "OR",
            Self::And => "AND",
            Self::Sll => "SLL",
            Self::Srl => "SRL",
            Self::Sra => "SRA",
        }
    }
}

/// Bypass record published by Execute and Memory each cycle.
///
/// A packet with `valid == false` carries no producer this cycle; packets
/// never originate from bubble or illegal latches. `data_valid == false`
/// means the producer exists but cannot supply the value yet, forcing the
/// consumer in Decode to stall.
#[derive(Clone, Copy, Default, Debug)]
pub struct ForwardPacket {
    /// A forwarded destination exists this cycle.
    pub valid: bool,
    /// Target register index.
    pub rd: usize,
    /// Whether `data` holds the produced value this cycle.
    pub data_valid: bool,
    /// The value to forward when `data_valid` is set.
    pub data: u32,
}
