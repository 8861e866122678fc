//! Matrix module: dense storage, arithmetic, and the classical adjoint path.

pub mod dense;
pub use dense::Matrix;

mod cofactor;
mod det;
mod ops;
