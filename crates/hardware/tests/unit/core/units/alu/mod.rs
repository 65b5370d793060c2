//! ALU tests, by operation category.

/// Logical and comparison operations.
pub mod logic;
