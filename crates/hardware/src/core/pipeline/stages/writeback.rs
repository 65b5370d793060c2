//! Writeback (WB) stage.
//!
//! Produces the post-writeback register view: a copy of the committed
//! register file with the retiring instruction's result applied. Decode
//! reads this view so a consumer can observe the value a producer retires in
//! the very same cycle (WB→ID forwarding). Committing the view is what
//! actually updates the architectural register file.
//!
//! Illegal retirements perform no register update: `rd` from a bad decode is
//! undefined.

use crate::core::Core;
use crate::core::arch::Gpr;

/// Executes the writeback stage, returning the post-writeback register view.
pub fn wb_stage<M>(core: &Core<M>) -> Gpr {
    let mut view = core.regs.clone();

    if core.mem_wb.valid && !core.mem_wb.illegal {
        if core.trace {
            eprintln!(
                "WB  pc={:#010x} x{} <= {:#x}",
                core.mem_wb.pc, core.mem_wb.rd, core.mem_wb.v
            );
        }
        view.write(core.mem_wb.rd, core.mem_wb.v);
    }

    view
}
