//! Element-wise arithmetic on arrays.
//!
//! Array-with-array addition and multiplication require exactly matching
//! shapes; there is no broadcasting beyond the scalar forms. The checked
//! methods report a [`ShapeError`] on mismatch, while the operator impls
//! on references preserve the original sentinel contract and yield the
//! empty array instead.

use crate::array::NdArray;
use crate::error::ShapeError;
use num_traits::Num;

impl<T> NdArray<T>
where
    T: Clone + Num,
{
    /// Check that `rhs` has identical rank, size, and shape, in that
    /// order, short-circuiting on the first disagreement.
    fn ensure_same_shape(&self, rhs: &Self) -> Result<(), ShapeError> {
        if self.rank() == rhs.rank() && self.len() == rhs.len() && self.shape() == rhs.shape() {
            Ok(())
        } else {
            Err(ShapeError::Mismatch {
                left: self.shape_vec(),
                right: rhs.shape_vec(),
            })
        }
    }

    /// Element-wise sum of two arrays of identical shape.
    ///
    /// # Errors
    ///
    /// Returns [`ShapeError::Mismatch`] when rank, size, or any axis
    /// extent differs. Neither operand is mutated.
    ///
    /// # Examples
    ///
    /// ```
    /// use numrs::NdArray;
    ///
    /// let a = NdArray::from_vec(vec![1, 2, 3, 4], &[2, 2]).unwrap();
    /// let b = NdArray::from_vec(vec![10, 20, 30, 40], &[2, 2]).unwrap();
    ///
    /// let sum = a.checked_add(&b).unwrap();
    /// assert_eq!(sum.as_slice(), &[11, 22, 33, 44]);
    ///
    /// let mismatched = NdArray::<i32>::zeros(&[4]);
    /// assert!(a.checked_add(&mismatched).is_err());
    /// ```
    pub fn checked_add(&self, rhs: &Self) -> Result<Self, ShapeError> {
        self.ensure_same_shape(rhs)?;
        let data = self
            .iter()
            .cloned()
            .zip(rhs.iter().cloned())
            .map(|(a, b)| a + b)
            .collect();
        Ok(Self {
            shape: self.shape.clone(),
            data,
        })
    }

    /// Element-wise product of two arrays of identical shape.
    ///
    /// # Errors
    ///
    /// Returns [`ShapeError::Mismatch`] when rank, size, or any axis
    /// extent differs. Neither operand is mutated.
    ///
    /// # Examples
    ///
    /// ```
    /// use numrs::NdArray;
    ///
    /// let a = NdArray::from_vec(vec![1, 2, 3, 4], &[2, 2]).unwrap();
    /// let b = NdArray::from_vec(vec![5, 6, 7, 8], &[2, 2]).unwrap();
    ///
    /// let product = a.checked_mul(&b).unwrap();
    /// assert_eq!(product.as_slice(), &[5, 12, 21, 32]);
    /// ```
    pub fn checked_mul(&self, rhs: &Self) -> Result<Self, ShapeError> {
        self.ensure_same_shape(rhs)?;
        let data = self
            .iter()
            .cloned()
            .zip(rhs.iter().cloned())
            .map(|(a, b)| a * b)
            .collect();
        Ok(Self {
            shape: self.shape.clone(),
            data,
        })
    }

    /// Add a scalar to every element. Always succeeds; the result has the
    /// same shape as the input.
    ///
    /// # Examples
    ///
    /// ```
    /// use numrs::NdArray;
    ///
    /// let a = NdArray::from_vec(vec![1, 2, 3], &[3]).unwrap();
    /// assert_eq!(a.add_scalar(10).as_slice(), &[11, 12, 13]);
    /// ```
    pub fn add_scalar(&self, scalar: T) -> Self {
        let data = self.iter().cloned().map(|x| x + scalar.clone()).collect();
        Self {
            shape: self.shape.clone(),
            data,
        }
    }

    /// Multiply every element by a scalar. Always succeeds; the result has
    /// the same shape as the input.
    ///
    /// # Examples
    ///
    /// ```
    /// use numrs::NdArray;
    ///
    /// let a = NdArray::from_vec(vec![1.5, 2.5], &[2]).unwrap();
    /// assert_eq!(a.mul_scalar(2.0).as_slice(), &[3.0, 5.0]);
    /// ```
    pub fn mul_scalar(&self, scalar: T) -> Self {
        let data = self.iter().cloned().map(|x| x * scalar.clone()).collect();
        Self {
            shape: self.shape.clone(),
            data,
        }
    }
}

/// Sentinel-style element-wise sum: on shape mismatch the result is the
/// empty array rather than a panic or an error.
///
/// # Examples
///
/// ```
/// use numrs::NdArray;
///
/// let a = NdArray::from_vec(vec![1, 2], &[2]).unwrap();
/// let b = NdArray::from_vec(vec![3, 4], &[2]).unwrap();
/// assert_eq!((&a + &b).as_slice(), &[4, 6]);
///
/// let mismatched = NdArray::<i32>::zeros(&[3]);
/// assert!((&a + &mismatched).is_empty());
/// ```
impl<'b, T> std::ops::Add<&'b NdArray<T>> for &NdArray<T>
where
    T: Clone + Num,
{
    type Output = NdArray<T>;

    fn add(self, rhs: &'b NdArray<T>) -> Self::Output {
        self.checked_add(rhs).unwrap_or_default()
    }
}

/// Sentinel-style element-wise product: on shape mismatch the result is
/// the empty array rather than a panic or an error.
///
/// # Examples
///
/// ```
/// use numrs::NdArray;
///
/// let a = NdArray::from_vec(vec![2, 3], &[2]).unwrap();
/// let b = NdArray::from_vec(vec![4, 5], &[2]).unwrap();
/// assert_eq!((&a * &b).as_slice(), &[8, 15]);
/// ```
impl<'b, T> std::ops::Mul<&'b NdArray<T>> for &NdArray<T>
where
    T: Clone + Num,
{
    type Output = NdArray<T>;

    fn mul(self, rhs: &'b NdArray<T>) -> Self::Output {
        self.checked_mul(rhs).unwrap_or_default()
    }
}

#[cfg(test)]
mod tests {
    use crate::{NdArray, ShapeError};

    #[test]
    fn checked_add_sums_every_linear_index() {
        let a = NdArray::from_vec((0..6).collect(), &[2, 3]).unwrap();
        let b = NdArray::from_vec((10..16).collect(), &[2, 3]).unwrap();
        let sum = a.checked_add(&b).unwrap();
        assert_eq!(sum.shape(), &[2, 3]);
        for i in 0..6 {
            assert_eq!(sum.as_slice()[i], a.as_slice()[i] + b.as_slice()[i]);
        }
    }

    #[test]
    fn checked_mul_multiplies_every_linear_index() {
        let a = NdArray::from_vec(vec![1, 2, 3, 4], &[2, 2]).unwrap();
        let b = NdArray::from_vec(vec![5, 6, 7, 8], &[2, 2]).unwrap();
        let product = a.checked_mul(&b).unwrap();
        assert_eq!(product.as_slice(), &[5, 12, 21, 32]);
    }

    #[test]
    fn same_size_different_shape_is_a_mismatch() {
        let a = NdArray::from_vec(vec![1, 2, 3, 4], &[2, 2]).unwrap();
        let b = NdArray::from_vec(vec![1, 2, 3, 4], &[4]).unwrap();
        assert!(matches!(
            a.checked_add(&b),
            Err(ShapeError::Mismatch { .. })
        ));
        assert!(matches!(
            a.checked_mul(&b),
            Err(ShapeError::Mismatch { .. })
        ));
    }

    #[test]
    fn operator_mismatch_yields_empty_sentinel() {
        let a = NdArray::<i64>::ones(&[2, 3]);
        let b = NdArray::<i64>::ones(&[3, 2]);
        let sum = &a + &b;
        assert!(sum.is_empty());
        assert_eq!(sum.rank(), 0);
        let product = &a * &b;
        assert!(product.is_empty());
        assert_eq!(product.rank(), 0);
    }

    #[test]
    fn operands_are_not_mutated_on_failure() {
        let a = NdArray::from_vec(vec![1, 2], &[2]).unwrap();
        let b = NdArray::from_vec(vec![1, 2, 3], &[3]).unwrap();
        let before = a.clone();
        let _ = a.checked_add(&b);
        let _ = &a * &b;
        assert_eq!(a, before);
    }

    #[test]
    fn scalar_forms_preserve_shape() {
        let a = NdArray::from_vec(vec![1, 2, 3, 4, 5, 6], &[2, 3]).unwrap();
        let shifted = a.add_scalar(1);
        assert_eq!(shifted.shape(), &[2, 3]);
        assert_eq!(shifted.as_slice(), &[2, 3, 4, 5, 6, 7]);

        let scaled = a.mul_scalar(3);
        assert_eq!(scaled.shape(), &[2, 3]);
        assert_eq!(scaled.as_slice(), &[3, 6, 9, 12, 15, 18]);
    }

    #[test]
    fn empty_plus_empty_is_empty_success() {
        let a = NdArray::<i32>::empty();
        let b = NdArray::<i32>::empty();
        let sum = a.checked_add(&b).unwrap();
        assert!(sum.is_empty());
    }
}
