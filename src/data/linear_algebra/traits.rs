//! # Traits for elements of vectors and matrices
//!
//! Arithmetic is only required by the operations that need it, so that containers of non-numeric
//! values (like the rows of a `Matrix`, which are vectors themselves) can still be created, copied
//! and compared.
use std::fmt::Debug;

/// Element of a `Vector` or `Matrix` type.
///
/// These are the traits needed to derive a few practical traits for the aforementioned types.
///
/// Automatically implemented for all types satisfying the trait's bounds.
pub trait Element: PartialEq + Clone + Debug {
}
impl<T: PartialEq + Clone + Debug> Element for T {
}
