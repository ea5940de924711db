//! Stateless factory functions: `zeros`, `ones`, and the matrix product
//! `dot`.
//!
//! The free functions keep the original numpy-style module surface: they
//! delegate to [`NdArray`] constructors, and [`dot`] maps any
//! precondition violation to the empty array. The checked equivalent is
//! [`NdArray::matmul`].
//!
//! # Examples
//!
//! ```
//! use numrs::{factory, NdArray};
//!
//! let a = NdArray::from_vec(vec![1.0, 2.0, 3.0, 4.0], &[2, 2]).unwrap();
//! let identity = NdArray::from_vec(vec![1.0, 0.0, 0.0, 1.0], &[2, 2]).unwrap();
//!
//! let product = factory::dot(&a, &identity);
//! assert_eq!(product, a);
//! ```

use crate::array::NdArray;
use crate::error::ShapeError;
use num_traits::Num;

/// Create an array of the given shape filled with the additive identity.
///
/// # Examples
///
/// ```
/// use numrs::factory;
///
/// let zeros = factory::zeros::<f64>(&[4, 5]);
/// assert_eq!(zeros.len(), 20);
/// assert!(zeros.iter().all(|&x| x == 0.0));
/// ```
pub fn zeros<T: Clone + Num>(shape: &[usize]) -> NdArray<T> {
    NdArray::zeros(shape)
}

/// Create an array of the given shape filled with the multiplicative
/// identity.
///
/// # Examples
///
/// ```
/// use numrs::factory;
///
/// let ones = factory::ones::<i64>(&[3, 3]);
/// assert!(ones.iter().all(|&x| x == 1));
/// ```
pub fn ones<T: Clone + Num>(shape: &[usize]) -> NdArray<T> {
    NdArray::ones(shape)
}

/// Sentinel-style matrix/vector product for rank-1/rank-2 operands.
///
/// Delegates to [`NdArray::matmul`] and maps any precondition violation
/// (rank outside 1..=2, inner-dimension mismatch, empty operand) to the
/// empty array.
///
/// # Examples
///
/// ```
/// use numrs::{factory, NdArray};
///
/// let a = NdArray::<f64>::ones(&[2, 3]);
/// let b = NdArray::<f64>::ones(&[2, 2]);
///
/// // Inner dimensions 3 vs 2 disagree.
/// assert!(factory::dot(&a, &b).is_empty());
/// ```
pub fn dot<T: Clone + Num>(a: &NdArray<T>, b: &NdArray<T>) -> NdArray<T> {
    a.matmul(b).unwrap_or_default()
}

impl<T> NdArray<T>
where
    T: Clone + Num,
{
    /// Checked matrix/vector product.
    ///
    /// Both operands must have rank 1 or 2. A rank-1 left operand is
    /// treated as a column matrix (inner dimension 1); a rank-1 right
    /// operand as a column matrix of its single axis. The right operand's
    /// leading extent must equal the left operand's inner dimension. The
    /// result is always rank 2 with shape `[a.shape[0], cols]`, computed
    /// by the standard row-major rule
    /// `out[i*cols + j] = sum_k a[i*inner + k] * b[k*cols + j]`, with
    /// accumulation in `T` starting from `T::zero()`.
    ///
    /// # Errors
    ///
    /// Returns [`ShapeError::DotRank`] for operands outside rank 1..=2
    /// (the empty array included) and [`ShapeError::DotInnerDim`] when the
    /// inner dimensions disagree.
    ///
    /// # Examples
    ///
    /// ```
    /// use numrs::NdArray;
    ///
    /// let a = NdArray::from_vec(vec![1, 2, 3, 4, 5, 6], &[2, 3]).unwrap();
    /// let b = NdArray::from_vec(vec![7, 8, 9, 10, 11, 12], &[3, 2]).unwrap();
    ///
    /// let product = a.matmul(&b).unwrap();
    /// assert_eq!(product.shape(), &[2, 2]);
    /// assert_eq!(product.as_slice(), &[58, 64, 139, 154]);
    /// ```
    pub fn matmul(&self, rhs: &Self) -> Result<Self, ShapeError> {
        if !(1..=2).contains(&self.rank()) || !(1..=2).contains(&rhs.rank()) {
            return Err(ShapeError::DotRank {
                left: self.rank(),
                right: rhs.rank(),
            });
        }
        let rows = self.shape()[0];
        let inner = if self.rank() == 1 { 1 } else { self.shape()[1] };
        let cols = if rhs.rank() == 1 { 1 } else { rhs.shape()[1] };
        if rhs.shape()[0] != inner {
            return Err(ShapeError::DotInnerDim {
                left: inner,
                right: rhs.shape()[0],
            });
        }
        let a = self.as_slice();
        let b = rhs.as_slice();
        let mut out = Vec::with_capacity(rows * cols);
        for i in 0..rows {
            for j in 0..cols {
                let mut acc = T::zero();
                for k in 0..inner {
                    acc = acc + a[i * inner + k].clone() * b[k * cols + j].clone();
                }
                out.push(acc);
            }
        }
        NdArray::from_vec(out, &[rows, cols])
    }
}

#[cfg(test)]
mod tests {
    use crate::{factory, NdArray, ShapeError};

    #[test]
    fn zeros_and_ones_fill_with_identities() {
        let zeros = factory::zeros::<i64>(&[4, 5]);
        assert_eq!(zeros.len(), 20);
        assert!(zeros.iter().all(|&x| x == 0));

        let ones = factory::ones::<f64>(&[2, 3]);
        assert_eq!(ones.len(), 6);
        assert!(ones.iter().all(|&x| x == 1.0));
    }

    #[test]
    fn matmul_identity_returns_operand_unchanged() {
        let a = NdArray::from_vec(vec![1.0, 2.0, 3.0, 4.0], &[2, 2]).unwrap();
        let identity = NdArray::from_vec(vec![1.0, 0.0, 0.0, 1.0], &[2, 2]).unwrap();
        assert_eq!(a.matmul(&identity).unwrap(), a);
        assert_eq!(factory::dot(&a, &identity), a);
    }

    #[test]
    fn matmul_rectangular_operands() {
        // [2,3] x [3,2] -> [2,2], standard row-major multiply.
        let a = NdArray::from_vec(vec![1, 2, 3, 4, 5, 6], &[2, 3]).unwrap();
        let b = NdArray::from_vec(vec![7, 8, 9, 10, 11, 12], &[3, 2]).unwrap();
        let product = a.matmul(&b).unwrap();
        assert_eq!(product.shape(), &[2, 2]);
        assert_eq!(product[&[0, 0]], 58);
        assert_eq!(product[&[0, 1]], 64);
        assert_eq!(product[&[1, 0]], 139);
        assert_eq!(product[&[1, 1]], 154);
    }

    #[test]
    fn matmul_inner_dimension_mismatch() {
        let a = NdArray::<f64>::ones(&[2, 3]);
        let b = NdArray::<f64>::ones(&[2, 2]);
        assert_eq!(
            a.matmul(&b).unwrap_err(),
            ShapeError::DotInnerDim { left: 3, right: 2 }
        );
        let sentinel = factory::dot(&a, &b);
        assert!(sentinel.is_empty());
        assert_eq!(sentinel.rank(), 0);
    }

    #[test]
    fn matmul_rejects_unsupported_ranks() {
        let cube = NdArray::<i32>::ones(&[2, 2, 2]);
        let matrix = NdArray::<i32>::ones(&[2, 2]);
        assert!(matches!(
            cube.matmul(&matrix),
            Err(ShapeError::DotRank { left: 3, right: 2 })
        ));

        let empty = NdArray::<i32>::empty();
        assert!(matches!(
            empty.matmul(&matrix),
            Err(ShapeError::DotRank { left: 0, right: 2 })
        ));
        assert!(matrix.matmul(&empty).is_err());
    }

    #[test]
    fn rank_one_left_operand_is_a_column() {
        // [3] x [1,2]: column vector times row, a 3x2 outer product.
        let a = NdArray::from_vec(vec![1, 2, 3], &[3]).unwrap();
        let b = NdArray::from_vec(vec![4, 5], &[1, 2]).unwrap();
        let product = a.matmul(&b).unwrap();
        assert_eq!(product.shape(), &[3, 2]);
        assert_eq!(product.as_slice(), &[4, 5, 8, 10, 12, 15]);

        // A rank-1 left operand requires the right's leading extent be 1.
        let c = NdArray::from_vec(vec![4, 5], &[2]).unwrap();
        assert!(a.matmul(&c).is_err());
    }

    #[test]
    fn rank_one_right_operand_yields_column_result() {
        // [2,2] x [2] -> [2,1].
        let a = NdArray::from_vec(vec![1, 2, 3, 4], &[2, 2]).unwrap();
        let v = NdArray::from_vec(vec![5, 6], &[2]).unwrap();
        let product = a.matmul(&v).unwrap();
        assert_eq!(product.shape(), &[2, 1]);
        assert_eq!(product.as_slice(), &[17, 39]);
    }

    #[test]
    fn zeros_with_zero_extent_is_the_empty_array() {
        let collapsed = factory::zeros::<f64>(&[3, 0]);
        assert!(collapsed.is_empty());
        assert_eq!(collapsed.rank(), 0);
    }
}
