//! denmat: dense rectangular matrices with value semantics
//!
//! This crate provides an owned, contiguous, row-major matrix type for real
//! element types, with elementwise and matrix arithmetic, transposition, and
//! the classical adjoint route to determinants and inverses.

pub mod error;
pub mod matrix;

// Re-exports for convenience
pub use error::*;
pub use matrix::*;
