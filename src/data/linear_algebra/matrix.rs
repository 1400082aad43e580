//! # Upper triangular matrices
//!
//! A square matrix of dimension `n` that stores only the values on and above the diagonal. Row `i`
//! is a `Vector` of length `n - i` whose indices start at `i`, so the columns of a row are
//! addressed with their actual column index and the bounds of each row are checked by the row
//! itself. Values below the diagonal are not stored and can't be accessed.
use std::ops::{Add, Index, IndexMut, Sub};

use num_traits::{One, Zero};

use crate::data::linear_algebra::{check_size, MAX_MATRIX_SIZE};
use crate::data::linear_algebra::error::{LinearAlgebraError, Result};
use crate::data::linear_algebra::traits::Element;
use crate::data::linear_algebra::vector::Vector;

/// Uses a `Vector` of row `Vector`s as underlying data structure. Dimension is fixed at creation.
///
/// Rows can be read, but not replaced, such that each row keeps its triangular shape.
#[derive(Debug, Eq, PartialEq)]
pub struct Matrix<T> {
    rows: Vector<Vector<T>>,
}

impl<T: Element> Matrix<T> {
    /// Create a matrix with zeros on and above the diagonal.
    ///
    /// # Arguments
    ///
    /// * `len`: Dimension of the matrix, the number of rows as well as the number of columns.
    ///
    /// # Errors
    ///
    /// `InvalidArgument` if `len` is zero or larger than `MAX_MATRIX_SIZE`.
    pub fn new(len: usize) -> Result<Self>
    where
        T: Zero,
    {
        Self::from_fn(len, |_, _| T::zero())
    }

    /// Create an identity matrix of dimension `len`.
    pub fn identity(len: usize) -> Result<Self>
    where
        T: Zero + One,
    {
        Self::from_fn(len, |i, j| if i == j { T::one() } else { T::zero() })
    }

    /// Create a matrix from the values on and above the diagonal, row by row.
    ///
    /// # Arguments
    ///
    /// * `rows`: Row `i` contains the values of columns `i` up to the dimension, which is the
    /// number of rows.
    ///
    /// # Errors
    ///
    /// `InvalidArgument` if the number of rows is zero or too large, `InvalidShape` if a row has
    /// the wrong number of values.
    pub fn from_rows(rows: Vec<Vec<T>>) -> Result<Self> {
        let len = rows.len();
        check_size(len, MAX_MATRIX_SIZE)?;

        let mut rows = rows.into_iter();
        let rows = Vector::try_from_fn(len, 0, |i| {
            let values = rows.next().unwrap_or_default();
            if values.len() == len - i {
                Vector::from_values(values, i)
            } else {
                log::debug!("row {} has {} values instead of {}", i, values.len(), len - i);
                Err(LinearAlgebraError::InvalidShape { row: i, expected: len - i, found: values.len() })
            }
        })?;

        Ok(Self { rows })
    }

    /// Create a matrix by computing each stored value from its row and column.
    fn from_fn(len: usize, mut f: impl FnMut(usize, usize) -> T) -> Result<Self> {
        check_size(len, MAX_MATRIX_SIZE)?;
        log::trace!("allocating upper triangular matrix of dimension {}", len);

        let rows = Vector::try_from_fn(len, 0, |i| {
            Vector::try_from_fn(len - i, i, |j| Ok(f(i, j)))
        })?;

        Ok(Self { rows })
    }

    /// The values on the diagonal.
    pub fn diagonal(&self) -> Vector<T> {
        Vector::from_data(
            self.rows.indexed_iter().map(|(i, row)| row[i].clone()).collect(),
            0,
        )
    }
}

impl<T> Matrix<T> {
    /// Dimension of this matrix.
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    /// Whether this matrix has no rows, which is never the case for a constructed matrix.
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Get row `i`, with valid indices `i` up to the dimension of this matrix.
    ///
    /// # Errors
    ///
    /// `OutOfRange` if `i` is not smaller than the dimension.
    pub fn row(&self, i: usize) -> Result<&Vector<T>> {
        self.rows.get(i)
    }

    /// Iterate over the rows, starting with the longest.
    pub fn iter_rows(&self) -> impl Iterator<Item = &Vector<T>> {
        self.rows.iter()
    }

    /// Get the value at coordinate (`i`, `j`).
    ///
    /// # Errors
    ///
    /// `OutOfRange` if `i` is not a row, or if `j` is below the diagonal or not a column.
    pub fn get(&self, i: usize, j: usize) -> Result<&T> {
        self.rows.get(i)?.get(j)
    }

    /// Get a mutable reference to the value at coordinate (`i`, `j`).
    ///
    /// # Errors
    ///
    /// `OutOfRange`, see `get`.
    pub fn get_mut(&mut self, i: usize, j: usize) -> Result<&mut T> {
        self.rows.get_mut(i)?.get_mut(j)
    }

    /// Set the value at coordinate (`i`, `j`) to `value`.
    ///
    /// When this fails, the matrix is not changed.
    pub fn set(&mut self, i: usize, j: usize, value: T) -> Result<()> {
        *self.get_mut(i, j)? = value;
        Ok(())
    }

    /// Add two matrices value by value.
    ///
    /// # Errors
    ///
    /// `IncompatibleSize` if the dimensions differ.
    pub fn checked_add(&self, rhs: &Self) -> Result<Self>
    where
        for<'r> &'r T: Add<&'r T, Output = T>,
    {
        self.rows
            .try_zip_with(&rhs.rows, |left, right| left.checked_add(right))
            .map(|rows| Self { rows })
    }

    /// Subtract `rhs` from this matrix value by value.
    ///
    /// # Errors
    ///
    /// `IncompatibleSize` if the dimensions differ.
    pub fn checked_sub(&self, rhs: &Self) -> Result<Self>
    where
        for<'r> &'r T: Sub<&'r T, Output = T>,
    {
        self.rows
            .try_zip_with(&rhs.rows, |left, right| left.checked_sub(right))
            .map(|rows| Self { rows })
    }
}

impl<T: Clone> Clone for Matrix<T> {
    fn clone(&self) -> Self {
        Self { rows: self.rows.clone() }
    }

    fn clone_from(&mut self, source: &Self) {
        self.rows.clone_from(&source.rows);
    }
}

impl<T> Index<usize> for Matrix<T> {
    type Output = Vector<T>;

    fn index(&self, i: usize) -> &Self::Output {
        &self.rows[i]
    }
}

impl<T> Index<(usize, usize)> for Matrix<T> {
    type Output = T;

    fn index(&self, (i, j): (usize, usize)) -> &Self::Output {
        &self.rows[i][j]
    }
}

impl<T> IndexMut<(usize, usize)> for Matrix<T> {
    fn index_mut(&mut self, (i, j): (usize, usize)) -> &mut Self::Output {
        &mut self.rows[i][j]
    }
}

macro_rules! impl_checked_op_for_matrix {
    ($trait:ident, $trait_method:ident, $checked_method:ident) => {
        impl<T> $trait<&Matrix<T>> for &Matrix<T>
        where
            for<'r> &'r T: $trait<&'r T, Output = T>,
        {
            type Output = Result<Matrix<T>>;

            fn $trait_method(self, rhs: &Matrix<T>) -> Self::Output {
                self.$checked_method(rhs)
            }
        }
    }
}
impl_checked_op_for_matrix!(Add, add, checked_add);
impl_checked_op_for_matrix!(Sub, sub, checked_sub);
