//! ALU logical and comparison tests.

use inorder_core::core::pipeline::signals::Opcode;
use inorder_core::core::units::Alu;
use pretty_assertions::assert_eq;
use rstest::rstest;

#[rstest]
#[case::xor(Opcode::Xor, 0b1100, 0b1010, 0b0110)]
#[case::or(Opcode::Or, 0b1100, 0b1010, 0b1110)]
#[case::and(Opcode::And, 0b1100, 0b1010, 0b1000)]
fn bitwise_ops(#[case] op: Opcode, #[case] a: u32, #[case] b: u32, #[case] expected: u32) {
    assert_eq!(Alu::execute(op, a, b), expected);
}

#[rstest]
#[case::less(5, 10, 1)]
#[case::equal(10, 10, 0)]
#[case::greater(10, 5, 0)]
#[case::negative_is_less(0xFFFF_FFFF, 0, 1)] // -1 < 0 signed
#[case::min_is_less_than_max(0x8000_0000, 0x7FFF_FFFF, 1)]
fn slt_compares_signed(#[case] a: u32, #[case] b: u32, #[case] expected: u32) {
    assert_eq!(Alu::execute(Opcode::Slt, a, b), expected);
    assert_eq!(Alu::execute(Opcode::Slti, a, b), expected);
}

#[rstest]
#[case::less(5, 10, 1)]
#[case::equal(10, 10, 0)]
// A sign-extended negative immediate compares as a very large unsigned value.
#[case::all_ones_is_large(0, 0xFFFF_FFFF, 1)]
#[case::all_ones_not_less(0xFFFF_FFFF, 0, 0)]
fn sltu_compares_unsigned(#[case] a: u32, #[case] b: u32, #[case] expected: u32) {
    assert_eq!(Alu::execute(Opcode::Sltu, a, b), expected);
    assert_eq!(Alu::execute(Opcode::Sltiu, a, b), expected);
}
