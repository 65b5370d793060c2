//! Retirement trace formatting.
//!
//! One line per retired instruction, emitted by `Core::tick` after commit.
//! Formatting is a pure function so the exact output can be asserted in
//! tests without capturing stdout.

use crate::core::pipeline::latches::MemWb;

/// Renders the retirement trace line for a valid MEM/WB occupant.
///
/// Legal retirement:
/// `[<sim_time>] [TRACE] [HART 0]: Retired <MNEMONIC> instruction @ PC <8-hex>`;
/// illegal retirement uses `[WARN]` and the fixed `ILLEGAL` mnemonic. The PC
/// is zero-padded lowercase hexadecimal.
pub fn retirement_line(sim_time: u64, mem_wb: &MemWb) -> String {
    if mem_wb.illegal {
        format!(
            "[{}] [WARN] [HART 0]: Retired ILLEGAL instruction @ PC {:08x}",
            sim_time, mem_wb.pc
        )
    } else {
        format!(
            "[{}] [TRACE] [HART 0]: Retired {} instruction @ PC {:08x}",
            sim_time,
            mem_wb.opcode.mnemonic(),
            mem_wb.pc
        )
    }
}
