//! # Vectors with an offset
//!
//! A `Vector` owns a contiguous block of values and is addressed through a start index: the
//! first value lives at index `start_index`, not at `0`. The offset only affects which indices
//! are valid. Binary operations align values by their position in storage, regardless of the
//! start indices of the operands.
use std::iter::Sum;
use std::ops::{Add, Index, IndexMut, Mul, Sub};
use std::slice::{Iter, IterMut};

use itertools::Itertools;
use num_traits::Zero;

use crate::data::linear_algebra::{check_size, MAX_VECTOR_SIZE};
use crate::data::linear_algebra::error::{LinearAlgebraError, Result};
use crate::data::linear_algebra::traits::Element;

/// Uses a `Vec` as underlying data structure. Length and start index are fixed at creation.
///
/// Cloning copies all values into new storage; `clone_from` serves as assignment and may change
/// both the length and the start index of the target.
#[derive(Debug, Eq, PartialEq)]
pub struct Vector<T> {
    start_index: usize,
    data: Vec<T>,
}

/// Largest length of a vector starting at `start_index`.
///
/// The last index has to be representable.
fn max_len(start_index: usize) -> usize {
    MAX_VECTOR_SIZE.min((usize::MAX - start_index).saturating_add(1))
}

impl<T: Element> Vector<T> {
    /// Create a vector of zeros, with indices starting at `0`.
    ///
    /// # Errors
    ///
    /// `InvalidArgument` if `len` is zero or larger than `MAX_VECTOR_SIZE`.
    pub fn new(len: usize) -> Result<Self>
    where
        T: Zero,
    {
        Self::with_start_index(len, 0)
    }

    /// Create a vector of zeros, with indices starting at `start_index`.
    ///
    /// # Arguments
    ///
    /// * `len`: Number of values.
    /// * `start_index`: Smallest valid index.
    ///
    /// # Errors
    ///
    /// `InvalidArgument` if `len` is zero or larger than `MAX_VECTOR_SIZE`.
    pub fn with_start_index(len: usize, start_index: usize) -> Result<Self>
    where
        T: Zero,
    {
        Self::constant(T::zero(), len, start_index)
    }

    /// Create a vector with all values being equal to a given value.
    ///
    /// # Arguments
    ///
    /// * `value`: The value which all elements of this vector are equal to.
    /// * `len`: Length of the vector, number of elements.
    /// * `start_index`: Smallest valid index.
    pub fn constant(value: T, len: usize, start_index: usize) -> Result<Self> {
        check_size(len, max_len(start_index))?;

        Ok(Self::from_data(vec![value; len], start_index))
    }

    /// Wrap existing values in a vector.
    ///
    /// # Arguments
    ///
    /// * `values`: Values in storage order; the first is found at `start_index`.
    /// * `start_index`: Smallest valid index.
    pub fn from_values(values: Vec<T>, start_index: usize) -> Result<Self> {
        check_size(values.len(), max_len(start_index))?;

        Ok(Self::from_data(values, start_index))
    }

    /// Create a vector by computing each value from its index.
    ///
    /// The size is validated before `f` is called for the first time.
    ///
    /// # Arguments
    ///
    /// * `len`: Number of values.
    /// * `start_index`: Smallest valid index.
    /// * `f`: Computes the value at an index, which runs from `start_index` up to and
    /// including `start_index + len - 1`. Its first error is returned.
    pub fn try_from_fn(
        len: usize,
        start_index: usize,
        f: impl FnMut(usize) -> Result<T>,
    ) -> Result<Self> {
        check_size(len, max_len(start_index))?;

        let data = (start_index..=start_index + (len - 1)).map(f).collect::<Result<Vec<_>>>()?;
        Ok(Self::from_data(data, start_index))
    }
}

impl<T> Vector<T> {
    /// Wrap data that is known to satisfy the size limits.
    pub(super) fn from_data(data: Vec<T>, start_index: usize) -> Self {
        debug_assert!(!data.is_empty());
        debug_assert!(data.len() <= max_len(start_index));

        Self { start_index, data }
    }

    /// Number of values in this vector.
    pub fn len(&self) -> usize {
        self.data.len()
    }

    /// Whether this vector is empty, which is never the case for a constructed vector.
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Smallest valid index.
    pub fn start_index(&self) -> usize {
        self.start_index
    }

    /// Largest valid index.
    pub fn end_index(&self) -> usize {
        self.start_index + (self.data.len() - 1)
    }

    /// Translate an index into a position in storage.
    fn slot(&self, index: usize) -> Result<usize> {
        index
            .checked_sub(self.start_index)
            .filter(|&slot| slot < self.data.len())
            .ok_or(LinearAlgebraError::OutOfRange {
                index,
                start_index: self.start_index,
                len: self.data.len(),
            })
    }

    /// Retrieve the value at an index.
    ///
    /// # Errors
    ///
    /// `OutOfRange` if `index` is smaller than the start index, or not smaller than the start
    /// index plus the length.
    pub fn get(&self, index: usize) -> Result<&T> {
        let slot = self.slot(index)?;
        Ok(&self.data[slot])
    }

    /// Retrieve a mutable reference to the value at an index.
    ///
    /// # Errors
    ///
    /// `OutOfRange`, see `get`.
    pub fn get_mut(&mut self, index: usize) -> Result<&mut T> {
        let slot = self.slot(index)?;
        Ok(&mut self.data[slot])
    }

    /// Set the value at an index.
    ///
    /// When this fails, the vector is not changed.
    pub fn set(&mut self, index: usize, value: T) -> Result<()> {
        *self.get_mut(index)? = value;
        Ok(())
    }

    /// Iterate over the values in storage order.
    pub fn iter(&self) -> Iter<'_, T> {
        self.data.iter()
    }

    /// Iterate mutably over the values in storage order.
    pub fn iter_mut(&mut self) -> IterMut<'_, T> {
        self.data.iter_mut()
    }

    /// Iterate over `(index, value)` pairs, where the index includes the offset.
    pub fn indexed_iter(&self) -> impl Iterator<Item = (usize, &T)> {
        (self.start_index..=self.end_index()).zip(self.data.iter())
    }

    /// The values in storage order.
    pub fn as_slice(&self) -> &[T] {
        &self.data
    }

    fn check_compatible<U>(&self, rhs: &Vector<U>) -> Result<()> {
        if self.len() == rhs.len() {
            Ok(())
        } else {
            Err(LinearAlgebraError::IncompatibleSize { left: self.len(), right: rhs.len() })
        }
    }

    /// Combine values at equal storage positions.
    ///
    /// The result has the start index of `self`.
    ///
    /// # Errors
    ///
    /// `IncompatibleSize` if the lengths differ, or the first error returned by `f`.
    pub(super) fn try_zip_with<U, R>(
        &self,
        rhs: &Vector<U>,
        mut f: impl FnMut(&T, &U) -> Result<R>,
    ) -> Result<Vector<R>> {
        self.check_compatible(rhs)?;

        let data = self
            .data
            .iter()
            .zip_eq(&rhs.data)
            .map(|(left, right)| f(left, right))
            .collect::<Result<Vec<_>>>()?;
        Ok(Vector::from_data(data, self.start_index))
    }

    fn map<R>(&self, f: impl FnMut(&T) -> R) -> Vector<R> {
        Vector::from_data(self.data.iter().map(f).collect(), self.start_index)
    }

    /// Add two vectors value by value.
    ///
    /// # Errors
    ///
    /// `IncompatibleSize` if the lengths differ.
    pub fn checked_add(&self, rhs: &Self) -> Result<Self>
    where
        for<'r> &'r T: Add<&'r T, Output = T>,
    {
        self.try_zip_with(rhs, |left, right| Ok(left + right))
    }

    /// Subtract `rhs` from this vector value by value.
    ///
    /// # Errors
    ///
    /// `IncompatibleSize` if the lengths differ.
    pub fn checked_sub(&self, rhs: &Self) -> Result<Self>
    where
        for<'r> &'r T: Sub<&'r T, Output = T>,
    {
        self.try_zip_with(rhs, |left, right| Ok(left - right))
    }

    /// Compute the inner product with another vector.
    ///
    /// # Errors
    ///
    /// `IncompatibleSize` if the lengths differ.
    pub fn inner_product(&self, rhs: &Self) -> Result<T>
    where
        T: Sum,
        for<'r> &'r T: Mul<&'r T, Output = T>,
    {
        self.check_compatible(rhs)?;

        Ok(self.data.iter().zip_eq(&rhs.data).map(|(left, right)| left * right).sum())
    }

    /// Add `value` to every element, leaving this vector as it is.
    pub fn add_scalar(&self, value: &T) -> Self
    where
        for<'r> &'r T: Add<&'r T, Output = T>,
    {
        self.map(|element| element + value)
    }

    /// Subtract `value` from every element, leaving this vector as it is.
    pub fn sub_scalar(&self, value: &T) -> Self
    where
        for<'r> &'r T: Sub<&'r T, Output = T>,
    {
        self.map(|element| element - value)
    }

    /// Multiply every element with `value`, leaving this vector as it is.
    pub fn mul_scalar(&self, value: &T) -> Self
    where
        for<'r> &'r T: Mul<&'r T, Output = T>,
    {
        self.map(|element| element * value)
    }
}

impl<T: Clone> Clone for Vector<T> {
    fn clone(&self) -> Self {
        Self { start_index: self.start_index, data: self.data.clone() }
    }

    fn clone_from(&mut self, source: &Self) {
        self.start_index = source.start_index;
        self.data.clone_from(&source.data);
    }
}

impl<T> Index<usize> for Vector<T> {
    type Output = T;

    fn index(&self, index: usize) -> &Self::Output {
        match self.get(index) {
            Ok(value) => value,
            Err(error) => panic!("{}", error),
        }
    }
}

impl<T> IndexMut<usize> for Vector<T> {
    fn index_mut(&mut self, index: usize) -> &mut Self::Output {
        match self.get_mut(index) {
            Ok(value) => value,
            Err(error) => panic!("{}", error),
        }
    }
}

impl<'a, T> IntoIterator for &'a Vector<T> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

macro_rules! impl_checked_op_for_vector {
    ($trait:ident, $trait_method:ident, $checked_method:ident) => {
        impl<T> $trait<&Vector<T>> for &Vector<T>
        where
            for<'r> &'r T: $trait<&'r T, Output = T>,
        {
            type Output = Result<Vector<T>>;

            fn $trait_method(self, rhs: &Vector<T>) -> Self::Output {
                self.$checked_method(rhs)
            }
        }
    }
}
impl_checked_op_for_vector!(Add, add, checked_add);
impl_checked_op_for_vector!(Sub, sub, checked_sub);

impl<T: Sum> Mul<&Vector<T>> for &Vector<T>
where
    for<'r> &'r T: Mul<&'r T, Output = T>,
{
    type Output = Result<T>;

    fn mul(self, rhs: &Vector<T>) -> Self::Output {
        self.inner_product(rhs)
    }
}

macro_rules! impl_scalar_op_for_vector {
    ($trait:ident, $trait_method:ident) => {
        impl<T> $trait<T> for Vector<T>
        where
            for<'r> &'r T: $trait<&'r T, Output = T>,
        {
            type Output = Self;

            fn $trait_method(mut self, rhs: T) -> Self::Output {
                for value in &mut self.data {
                    *value = $trait::$trait_method(&*value, &rhs);
                }
                self
            }
        }
    }
}
impl_scalar_op_for_vector!(Add, add);
impl_scalar_op_for_vector!(Sub, sub);
impl_scalar_op_for_vector!(Mul, mul);
