//! # Linear algebra primitives
//!
//! A vector whose indices start at a configurable offset, and an upper triangular matrix built
//! from such vectors.

pub mod error;
pub mod matrix;
pub mod traits;
pub mod vector;

/// Largest number of elements a `Vector` can hold.
pub const MAX_VECTOR_SIZE: usize = 100_000_000;
/// Largest dimension of a `Matrix`.
pub const MAX_MATRIX_SIZE: usize = 10_000;

/// Verify that a container of `size` elements may be created, before anything is allocated.
///
/// # Arguments
///
/// * `size`: Number of elements (or rows) requested.
/// * `maximum`: Largest size allowed for the kind of container being created.
pub(crate) fn check_size(size: usize, maximum: usize) -> error::Result<()> {
    if size == 0 || size > maximum {
        log::debug!("rejecting container of size {} (maximum is {})", size, maximum);
        Err(error::LinearAlgebraError::InvalidArgument { size, maximum })
    } else {
        Ok(())
    }
}
