//! General-purpose register file tests.

use inorder_core::core::arch::Gpr;
use pretty_assertions::assert_eq;

#[test]
fn starts_zeroed() {
    let regs = Gpr::new();
    for i in 0..32 {
        assert_eq!(regs.read(i), 0);
    }
}

#[test]
fn write_then_read() {
    let mut regs = Gpr::new();
    regs.write(5, 0xDEAD_BEEF);
    assert_eq!(regs.read(5), 0xDEAD_BEEF);
    assert_eq!(regs.read(6), 0);
}

#[test]
fn x0_is_hardwired_to_zero() {
    let mut regs = Gpr::new();
    regs.write(0, 0xFFFF_FFFF);
    assert_eq!(regs.read(0), 0);
}

#[test]
fn clone_is_independent() {
    let mut regs = Gpr::new();
    regs.write(1, 7);

    let mut view = regs.clone();
    view.write(1, 8);

    assert_eq!(regs.read(1), 7);
    assert_eq!(view.read(1), 8);
}
