//! Data hazard resolution via operand forwarding.
//!
//! This module implements the register-read bypass used by Decode. It
//! resolves Read-After-Write hazards by preferring in-flight producers over
//! the register file, with strict precedence EX > MEM > post-writeback view:
//! when two producers target the same register, the younger one (closer to
//! Execute) wins, matching the program order of their effects.

use crate::core::arch::Gpr;
use crate::core::pipeline::signals::ForwardPacket;

/// Resolves one source-register read for the instruction in Decode.
///
/// Consults the Execute packet, then the Memory packet, then the
/// post-writeback register view. Returns `None` when the Execute producer
/// targets `rs` but cannot supply its value this cycle; the caller must turn
/// the instruction into a bubble and let it be reissued.
///
/// Register `x0` is never forwarded: the zero register has no producers, so
/// reads of it always come from the file.
pub fn forward_operand(
    rs: usize,
    ex_forward: &ForwardPacket,
    mem_forward: &ForwardPacket,
    wb_view: &Gpr,
) -> Option<u32> {
    if rs != 0 {
        if ex_forward.valid && ex_forward.rd == rs {
            if !ex_forward.data_valid {
                return None;
            }
            return Some(ex_forward.data);
        }

        if mem_forward.valid && mem_forward.rd == rs {
            if !mem_forward.data_valid {
                return None;
            }
            return Some(mem_forward.data);
        }
    }

    Some(wb_view.read(rs))
}
