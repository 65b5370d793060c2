//! Field extraction from raw encodings.

use inorder_core::isa::instruction::InstructionBits;
use inorder_core::isa::{funct3, opcodes};
use pretty_assertions::assert_eq;

/// `ADDI x1, x0, 5`
const ADDI_X1_X0_5: u32 = 0x00500093;
/// `ADD x3, x1, x2`
const ADD_X3_X1_X2: u32 = 0x002081B3;
/// `SRAI x2, x1, 1`
const SRAI_X2_X1_1: u32 = 0x4010D113;

#[test]
fn op_imm_fields() {
    assert_eq!(ADDI_X1_X0_5.opcode(), opcodes::OP_IMM);
    assert_eq!(ADDI_X1_X0_5.rd(), 1);
    assert_eq!(ADDI_X1_X0_5.rs1(), 0);
    assert_eq!(ADDI_X1_X0_5.funct3(), funct3::ADD_SUB);
    assert_eq!(ADDI_X1_X0_5.imm_i(), 5);
}

#[test]
fn op_reg_fields() {
    assert_eq!(ADD_X3_X1_X2.opcode(), opcodes::OP_REG);
    assert_eq!(ADD_X3_X1_X2.rd(), 3);
    assert_eq!(ADD_X3_X1_X2.rs1(), 1);
    assert_eq!(ADD_X3_X1_X2.rs2(), 2);
    assert_eq!(ADD_X3_X1_X2.funct3(), funct3::ADD_SUB);
    assert_eq!(ADD_X3_X1_X2.funct7(), 0);
}

#[test]
fn shift_immediate_fields() {
    assert_eq!(SRAI_X2_X1_1.opcode(), opcodes::OP_IMM);
    assert_eq!(SRAI_X2_X1_1.funct3(), funct3::SRL_SRA);
    assert_eq!(SRAI_X2_X1_1.shamt(), 1);
    // The arithmetic flag lives in bit 10 of the raw immediate field.
    assert_eq!(SRAI_X2_X1_1.imm_i() >> 10 & 1, 1);
}

#[test]
fn register_fields_saturate_at_five_bits() {
    // All-ones encoding: every register field reads as x31.
    let inst = u32::MAX;
    assert_eq!(inst.rd(), 31);
    assert_eq!(inst.rs1(), 31);
    assert_eq!(inst.rs2(), 31);
    assert_eq!(inst.funct3(), 0b111);
    assert_eq!(inst.funct7(), 0b111_1111);
    assert_eq!(inst.imm_i(), 0xFFF);
}
