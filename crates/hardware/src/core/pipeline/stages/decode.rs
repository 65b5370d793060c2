//! Instruction Decode (ID) stage.
//!
//! This module implements the second stage of the pipeline. It performs:
//! 1. **Field parse:** Opcode group, rd, funct3, rs1/rs2, immediate fields.
//! 2. **Opcode mapping:** funct3 tables for the OP-IMM and OP groups; any
//!    other group becomes an illegal placeholder that still occupies the
//!    downstream stages for traceable retirement.
//! 3. **Register read with forwarding:** Source operands come from the
//!    Execute packet, the Memory packet, or the post-writeback register view,
//!    in that order of precedence.
//! 4. **Immediate derivation:** 12-bit sign extension for non-shift I-type,
//!    5-bit unsigned shamt for the shift-immediate encodings.

use crate::core::Core;
use crate::core::arch::Gpr;
use crate::core::pipeline::hazards::forward_operand;
use crate::core::pipeline::latches::IdEx;
use crate::core::pipeline::signals::{ForwardPacket, Opcode};
use crate::isa::instruction::{IMM_I_BITS, InstructionBits, SHAMT_MASK, sign_extend};
use crate::isa::{funct3, opcodes};

/// Bit of the raw I-type immediate selecting the arithmetic right shift
/// (SRAI vs SRLI).
const SHIFT_ARITH_IMM_BIT: u32 = 1 << 10;

/// funct7 bit selecting the alternate R-type encoding (instruction bit 30,
/// SRA vs SRL). The same bit in the ADD slot encodes SUB, which is not in
/// the implemented taxonomy and decodes as illegal.
const FUNCT7_ALT_BIT: u32 = 0x20;

/// Executes the decode stage.
///
/// `wb_view` is the post-writeback register view produced by the writeback
/// stage this same cycle, so a retiring producer is visible to its consumer
/// without a stall. `ex_forward` and `mem_forward` bypass the two in-flight
/// producers ahead of it.
///
/// Returns the candidate next ID/EX latch. A forwarding hit whose data is
/// not yet available turns the slot into a bubble.
pub fn decode_stage<M>(
    core: &Core<M>,
    wb_view: &Gpr,
    ex_forward: &ForwardPacket,
    mem_forward: &ForwardPacket,
) -> IdEx {
    let mut next = IdEx::default();

    if !core.if_id.valid {
        return next;
    }

    let inst = core.if_id.inst;

    next.valid = true;
    next.pc = core.if_id.pc;

    match inst.opcode() {
        opcodes::OP_IMM => {
            next.rd = inst.rd();

            let Some(v1) = forward_operand(inst.rs1(), ex_forward, mem_forward, wb_view) else {
                // Producer cannot supply rs1 this cycle: reissue as a bubble.
                next.valid = false;
                return next;
            };
            next.v1 = v1;

            let imm = inst.imm_i();

            match inst.funct3() {
                funct3::ADD_SUB => {
                    next.opcode = Opcode::Addi;
                    next.v2 = sign_extend(imm, IMM_I_BITS);
                }
                funct3::SLT => {
                    next.opcode = Opcode::Slti;
                    next.v2 = sign_extend(imm, IMM_I_BITS);
                }
                funct3::SLTU => {
                    next.opcode = Opcode::Sltiu;
                    next.v2 = sign_extend(imm, IMM_I_BITS);
                }
                funct3::XOR => {
                    next.opcode = Opcode::Xori;
                    next.v2 = sign_extend(imm, IMM_I_BITS);
                }
                funct3::OR => {
                    next.opcode = Opcode::Ori;
                    next.v2 = sign_extend(imm, IMM_I_BITS);
                }
                funct3::AND => {
                    next.opcode = Opcode::Andi;
                    next.v2 = sign_extend(imm, IMM_I_BITS);
                }
                funct3::SLL => {
                    next.opcode = Opcode::Slli;
                    next.v2 = imm & SHAMT_MASK;
                }
                funct3::SRL_SRA => {
                    next.opcode = if imm & SHIFT_ARITH_IMM_BIT != 0 {
                        Opcode::Srai
                    } else {
                        Opcode::Srli
                    };
                    next.v2 = imm & SHAMT_MASK;
                }
                _ => next.illegal = true,
            }
        }

        opcodes::OP_REG => {
            next.rd = inst.rd();

            let Some(v1) = forward_operand(inst.rs1(), ex_forward, mem_forward, wb_view) else {
                next.valid = false;
                return next;
            };
            next.v1 = v1;

            let Some(v2) = forward_operand(inst.rs2(), ex_forward, mem_forward, wb_view) else {
                next.valid = false;
                return next;
            };
            next.v2 = v2;

            let alt = inst.funct7() & FUNCT7_ALT_BIT != 0;

            match inst.funct3() {
                // The alternate bit in this slot is SUB, outside the
                // implemented taxonomy.
                funct3::ADD_SUB if !alt => next.opcode = Opcode::Add,
                funct3::SLT => next.opcode = Opcode::Slt,
                funct3::SLTU => next.opcode = Opcode::Sltu,
                funct3::XOR => next.opcode = Opcode::Xor,
                funct3::OR => next.opcode = Opcode::Or,
                funct3::AND => next.opcode = Opcode::And,
                funct3::SLL => next.opcode = Opcode::Sll,
                funct3::SRL_SRA => {
                    next.opcode = if alt { Opcode::Sra } else { Opcode::Srl };
                }
                _ => next.illegal = true,
            }
        }

        group => {
            // Unrecognized group: placeholder with undefined operand fields,
            // carried through the pipeline for traceable retirement.
            next.illegal = true;
            if core.trace {
                eprintln!(
                    "ID  pc={:#010x} # illegal opcode group {:#09b}",
                    core.if_id.pc, group
                );
            }
        }
    }

    if core.trace && next.valid && !next.illegal {
        eprintln!(
            "ID  pc={:#010x} {} rd=x{} v1={:#x} v2={:#x}",
            next.pc,
            next.opcode.mnemonic(),
            next.rd,
            next.v1,
            next.v2
        );
    }

    next
}
