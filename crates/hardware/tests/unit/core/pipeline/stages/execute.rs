//! Execute stage tests: ALU dispatch, forwarding publication, illegality.

use inorder_core::config::Config;
use inorder_core::core::Core;
use inorder_core::core::pipeline::latches::IdEx;
use inorder_core::core::pipeline::signals::Opcode;
use inorder_core::core::pipeline::stages::execute_stage;
use inorder_core::mem::Flash;
use pretty_assertions::assert_eq;

/// Core with a decoded instruction parked in the ID/EX latch.
fn core_with(id_ex: IdEx) -> Core<Flash> {
    let mut core = Core::new(Flash::default(), &Config::default());
    core.id_ex = id_ex;
    core
}

#[test]
fn bubble_in_bubble_out() {
    let core = core_with(IdEx::default());
    let (next, forward) = execute_stage(&core);
    assert!(!next.valid);
    assert!(!forward.valid);
}

#[test]
fn computes_and_publishes_forward_packet() {
    let core = core_with(IdEx {
        valid: true,
        illegal: false,
        pc: 0x10,
        opcode: Opcode::Addi,
        rd: 7,
        v1: 40,
        v2: 2,
    });

    let (next, forward) = execute_stage(&core);

    assert!(next.valid && !next.illegal);
    assert_eq!(next.pc, 0x10);
    assert_eq!(next.opcode, Opcode::Addi);
    assert_eq!(next.rd, 7);
    assert_eq!(next.v, 42);

    assert!(forward.valid);
    assert!(forward.data_valid);
    assert_eq!(forward.rd, 7);
    assert_eq!(forward.data, 42);
}

#[test]
fn illegal_passes_through_without_forwarding() {
    let core = core_with(IdEx {
        valid: true,
        illegal: true,
        pc: 0x20,
        opcode: Opcode::Addi,
        rd: 3,
        v1: 1,
        v2: 2,
    });

    let (next, forward) = execute_stage(&core);

    assert!(next.valid);
    assert!(next.illegal);
    assert_eq!(next.pc, 0x20);
    assert_eq!(next.v, 0);
    assert!(!forward.valid);
}
