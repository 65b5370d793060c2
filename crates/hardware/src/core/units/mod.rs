//! Functional units used by the Execute stage.

/// Integer arithmetic logic unit.
pub mod alu;

pub use alu::Alu;
