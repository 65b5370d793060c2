//! Memory access (MEM) stage.
//!
//! The implemented subset has no loads or stores, so Memory is a
//! pass-through: it copies the EX/MEM latch into the MEM/WB candidate and
//! publishes the Memory forwarding packet for legal occupants.

use crate::core::Core;
use crate::core::pipeline::latches::MemWb;
use crate::core::pipeline::signals::ForwardPacket;

/// Executes the memory stage.
///
/// Returns the candidate next MEM/WB latch and this cycle's MEM forwarding
/// packet. Illegal occupants pass through without forwarding.
pub fn mem_stage<M>(core: &Core<M>) -> (MemWb, ForwardPacket) {
    let mut next = MemWb::default();
    let mut forward = ForwardPacket::default();

    if !core.ex_mem.valid {
        return (next, forward);
    }

    next.valid = true;
    next.illegal = core.ex_mem.illegal;
    next.pc = core.ex_mem.pc;
    next.opcode = core.ex_mem.opcode;
    next.rd = core.ex_mem.rd;
    next.v = core.ex_mem.v;

    if !core.ex_mem.illegal {
        forward = ForwardPacket {
            valid: true,
            rd: next.rd,
            data_valid: true,
            data: next.v,
        };
    }

    (next, forward)
}
