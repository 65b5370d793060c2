//! Memory stage tests: pass-through and forwarding publication.

use inorder_core::config::Config;
use inorder_core::core::Core;
use inorder_core::core::pipeline::latches::ExMem;
use inorder_core::core::pipeline::signals::Opcode;
use inorder_core::core::pipeline::stages::mem_stage;
use inorder_core::mem::Flash;
use pretty_assertions::assert_eq;

/// Core with an executed instruction parked in the EX/MEM latch.
fn core_with(ex_mem: ExMem) -> Core<Flash> {
    let mut core = Core::new(Flash::default(), &Config::default());
    core.ex_mem = ex_mem;
    core
}

#[test]
fn bubble_in_bubble_out() {
    let core = core_with(ExMem::default());
    let (next, forward) = mem_stage(&core);
    assert!(!next.valid);
    assert!(!forward.valid);
}

#[test]
fn copies_fields_and_forwards() {
    let core = core_with(ExMem {
        valid: true,
        illegal: false,
        pc: 0x30,
        opcode: Opcode::Sll,
        rd: 9,
        v: 0x80,
    });

    let (next, forward) = mem_stage(&core);

    assert!(next.valid && !next.illegal);
    assert_eq!(next.pc, 0x30);
    assert_eq!(next.opcode, Opcode::Sll);
    assert_eq!(next.rd, 9);
    assert_eq!(next.v, 0x80);

    assert!(forward.valid);
    assert!(forward.data_valid);
    assert_eq!(forward.rd, 9);
    assert_eq!(forward.data, 0x80);
}

#[test]
fn illegal_passes_through_without_forwarding() {
    let core = core_with(ExMem {
        valid: true,
        illegal: true,
        pc: 0x44,
        opcode: Opcode::Addi,
        rd: 2,
        v: 0,
    });

    let (next, forward) = mem_stage(&core);

    assert!(next.valid);
    assert!(next.illegal);
    assert!(!forward.valid);
}
