//! # Storing of vectors and matrices in memory
//!
//! This module provides the data structures, which own their values and never share storage.

pub mod linear_algebra;
