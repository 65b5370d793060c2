//! The pipelined core state machine.
//!
//! This module owns the architectural and micro-architectural state of one
//! hart and implements the per-cycle `tick`. It performs:
//! 1. **Stage evaluation:** The five stage functions run in reverse pipeline
//!    order (WB, MEM, EX, ID, IF) over the *current* committed state, so
//!    no stage ever observes a partially-committed next state.
//! 2. **Atomic commit:** All candidate latch values, the PC, and the
//!    post-writeback register view commit in one step.
//! 3. **Reset:** A level-sensitive reset sampled at commit time replaces the
//!    commit with the zero state (PC 0, empty latches, cleared registers).
//! 4. **Retirement trace:** One line per tick whose MEM/WB latch committed a
//!    valid instruction.

use crate::common::constants::RESET_VECTOR;
use crate::config::Config;
use crate::core::arch::Gpr;
use crate::core::pipeline::latches::{ExMem, IdEx, IfId, MemWb};
use crate::core::pipeline::stages::{decode_stage, execute_stage, fetch_stage, mem_stage, wb_stage};
use crate::core::trace;
use crate::mem::MemoryPort;
use crate::stats::Stats;

/// One hart: a five-stage in-order pipeline over a memory port.
///
/// Generic over the memory backend it fetches from; the driver supplies a
/// flash image, tests supply mocks.
pub struct Core<M> {
    /// Program counter.
    pub pc: u32,
    /// Committed integer register file.
    pub regs: Gpr,
    /// Fetch → Decode latch.
    pub if_id: IfId,
    /// Decode → Execute latch.
    pub id_ex: IdEx,
    /// Execute → Memory latch.
    pub ex_mem: ExMem,
    /// Memory → Writeback latch.
    pub mem_wb: MemWb,
    /// Memory port fetch reads go through. Exclusively borrowed by the core
    /// for the duration of a tick.
    pub mem: M,
    /// Echo per-stage activity to stderr.
    pub trace: bool,
    /// Retirement and stall counters.
    pub stats: Stats,
    reset: bool,
    sim_time: u64,
}

impl<M: MemoryPort> Core<M> {
    /// Creates a core in the post-reset state, bound to the given memory port.
    pub fn new(mem: M, config: &Config) -> Self {
        Self {
            pc: RESET_VECTOR,
            regs: Gpr::new(),
            if_id: IfId::default(),
            id_ex: IdEx::default(),
            ex_mem: ExMem::default(),
            mem_wb: MemWb::default(),
            mem,
            trace: cfg!(feature = "always-trace") || config.general.trace_stages,
            stats: Stats::default(),
            reset: false,
            sim_time: 0,
        }
    }

    /// Drives the level-sensitive reset input. Sampled at commit time on the
    /// next `tick`.
    pub fn set_reset(&mut self, asserted: bool) {
        self.reset = asserted;
    }

    /// Current simulation time in ticks since construction. The clock keeps
    /// counting while reset is asserted.
    pub fn sim_time(&self) -> u64 {
        self.sim_time
    }

    /// Advances the pipeline by one clock cycle.
    ///
    /// Runs to completion and never fails: fetch faults stall, malformed
    /// encodings retire as illegal instructions.
    pub fn tick(&mut self) {
        self.sim_time += 1;
        self.stats.cycles += 1;

        // Candidate next state, evaluated over the current latches only.
        // Writeback runs first so Decode reads the post-writeback view;
        // Memory and Execute run next so Decode sees their packets.
        let wb_view = wb_stage(self);
        let (next_mem_wb, mem_forward) = mem_stage(self);
        let (next_ex_mem, ex_forward) = execute_stage(self);
        let next_id_ex = decode_stage(self, &wb_view, &ex_forward, &mem_forward);
        let (next_pc, next_if_id) = fetch_stage(self);

        if self.reset {
            self.pc = RESET_VECTOR;
            self.regs = Gpr::new();
            self.if_id = IfId::default();
            self.id_ex = IdEx::default();
            self.ex_mem = ExMem::default();
            self.mem_wb = MemWb::default();
            return;
        }

        if !next_if_id.valid {
            self.stats.fetch_stalls += 1;
        }
        if self.if_id.valid && !next_id_ex.valid {
            self.stats.decode_stalls += 1;
        }

        self.pc = next_pc;
        self.regs = wb_view;
        self.if_id = next_if_id;
        self.id_ex = next_id_ex;
        self.ex_mem = next_ex_mem;
        self.mem_wb = next_mem_wb;

        if self.mem_wb.valid {
            if self.mem_wb.illegal {
                self.stats.illegal_retired += 1;
            } else {
                self.stats.instructions_retired += 1;
            }
            println!("{}", trace::retirement_line(self.sim_time, &self.mem_wb));
        }
    }
}
