//! # Offset vectors and upper triangular matrices
//!
//! Two containers with value semantics: a `Vector` whose indices start at a configurable offset,
//! and an upper triangular `Matrix` whose rows are such vectors. Cloning always copies all values,
//! indexing is bounds checked and binary operations check that their operands have the same size.
#![warn(missing_docs)]

pub mod data;

pub use data::linear_algebra::{MAX_MATRIX_SIZE, MAX_VECTOR_SIZE};
pub use data::linear_algebra::error::{LinearAlgebraError, Result};
pub use data::linear_algebra::matrix::Matrix;
pub use data::linear_algebra::traits::Element;
pub use data::linear_algebra::vector::Vector;
