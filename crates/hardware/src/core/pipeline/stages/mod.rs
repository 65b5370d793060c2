//! The five pipeline stage functions.
//!
//! Each stage is a pure function over the core's *current* committed state:
//! it computes a candidate next latch value (plus, for Execute and Memory, a
//! forwarding packet) and never mutates the core. `Core::tick` evaluates the
//! stages in reverse pipeline order and commits all candidates atomically.

/// Instruction decode stage.
pub mod decode;
/// Execute (ALU) stage.
pub mod execute;
/// Instruction fetch stage.
pub mod fetch;
/// Memory access stage (pass-through for the integer subset).
pub mod memory;
/// Writeback stage.
pub mod writeback;

pub use decode::decode_stage;
pub use execute::execute_stage;
pub use fetch::fetch_stage;
pub use memory::mem_stage;
pub use writeback::wb_stage;
