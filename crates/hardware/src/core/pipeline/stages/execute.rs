//! Execute (EX) stage.
//!
//! Runs the ALU over the operands resolved at Decode and publishes the
//! Execute forwarding packet. Bubbles pass through as bubbles; illegal
//! instructions pass through with a zero result and do not forward (a bad
//! decode leaves `rd` undefined, so forwarding it would poison dependents).

use crate::core::Core;
use crate::core::pipeline::latches::ExMem;
use crate::core::pipeline::signals::ForwardPacket;
use crate::core::units::Alu;

/// Executes the execute stage.
///
/// Returns the candidate next EX/MEM latch and this cycle's EX forwarding
/// packet. The packet is valid only for a legal occupant, and always carries
/// its data (`data_valid`): every implemented operation completes in one
/// cycle.
pub fn execute_stage<M>(core: &Core<M>) -> (ExMem, ForwardPacket) {
    let mut next = ExMem::default();
    let mut forward = ForwardPacket::default();

    if !core.id_ex.valid {
        return (next, forward);
    }

    next.valid = true;
    next.illegal = core.id_ex.illegal;
    next.pc = core.id_ex.pc;
    next.opcode = core.id_ex.opcode;
    next.rd = core.id_ex.rd;

    if core.id_ex.illegal {
        next.v = 0;
        return (next, forward);
    }

    next.v = Alu::execute(core.id_ex.opcode, core.id_ex.v1, core.id_ex.v2);

    if core.trace {
        eprintln!(
            "EX  pc={:#010x} {} -> {:#x}",
            next.pc,
            next.opcode.mnemonic(),
            next.v
        );
    }

    forward = ForwardPacket {
        valid: true,
        rd: next.rd,
        data_valid: true,
        data: next.v,
    };

    (next, forward)
}
