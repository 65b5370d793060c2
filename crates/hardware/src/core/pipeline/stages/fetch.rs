//! Instruction Fetch (IF) stage.
//!
//! Issues a 4-byte little-endian read at the current program counter. On
//! success the instruction enters the IF/ID latch and the PC advances by one
//! word; on failure the stage emits a bubble and holds the PC (a fetch
//! stall). Fetch never raises illegal; malformed encodings are classified at
//! Decode.

use crate::common::constants::WORD_BYTES;
use crate::core::Core;
use crate::core::pipeline::latches::IfId;
use crate::mem::MemoryPort;

/// Executes the fetch stage.
///
/// Returns the candidate next PC and IF/ID latch. The read goes through the
/// core's memory port; a port that reports failure (out-of-range access)
/// stalls fetch at the current address.
pub fn fetch_stage<M: MemoryPort>(core: &Core<M>) -> (u32, IfId) {
    let mut next = IfId::default();

    let Some(inst) = core.mem.read32_le(core.pc) else {
        if core.trace {
            eprintln!("IF  pc={:#010x} # stall: read failed", core.pc);
        }
        return (core.pc, next);
    };

    if core.trace {
        eprintln!("IF  pc={:#010x} inst={:#010x}", core.pc, inst);
    }

    next.valid = true;
    next.pc = core.pc;
    next.inst = inst;

    (core.pc.wrapping_add(WORD_BYTES), next)
}
