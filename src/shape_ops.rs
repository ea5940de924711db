//! Shape manipulation operations on arrays.
//!
//! Reshape is a metadata-only operation: the row-major buffer and element
//! order are never touched, only the shape descriptor is replaced. The
//! new shape must account for exactly the same number of elements.

use crate::array::NdArray;
use crate::error::ShapeError;
use crate::types::Shape;
use num_traits::Num;

impl<T> NdArray<T>
where
    T: Clone + Num,
{
    /// Reshape the array, returning a copy with the new shape.
    ///
    /// The buffer keeps its row-major element order; the new shape is a
    /// reinterpretation of the same flat data.
    ///
    /// # Errors
    ///
    /// Returns [`ShapeError::IncompatibleReshape`] when the product of
    /// `new_shape` differs from the current size.
    ///
    /// # Examples
    ///
    /// ```
    /// use numrs::NdArray;
    ///
    /// let array = NdArray::<f64>::zeros(&[4, 5]);
    /// let reshaped = array.reshape(&[2, 10]).unwrap();
    /// assert_eq!(reshaped.shape(), &[2, 10]);
    ///
    /// assert!(array.reshape(&[3, 3]).is_err());
    /// ```
    pub fn reshape(&self, new_shape: &[usize]) -> Result<Self, ShapeError> {
        let mut reshaped = self.clone();
        reshaped.reshape_in_place(new_shape)?;
        Ok(reshaped)
    }

    /// Replace the shape in place, keeping the buffer untouched.
    ///
    /// On error the array is left completely unchanged: shape, rank, and
    /// buffer all keep their pre-call state.
    ///
    /// # Errors
    ///
    /// Returns [`ShapeError::IncompatibleReshape`] when the product of
    /// `new_shape` differs from the current size.
    ///
    /// # Examples
    ///
    /// ```
    /// use numrs::NdArray;
    ///
    /// let mut array = NdArray::from_vec(vec![1, 2, 3, 4, 5, 6], &[2, 3]).unwrap();
    /// array.reshape_in_place(&[3, 2]).unwrap();
    /// assert_eq!(array.shape(), &[3, 2]);
    /// // Row-major reinterpretation: the buffer order is unchanged.
    /// assert_eq!(array[&[2, 1]], 6);
    ///
    /// assert!(array.reshape_in_place(&[4]).is_err());
    /// assert_eq!(array.shape(), &[3, 2]);
    /// ```
    pub fn reshape_in_place(&mut self, new_shape: &[usize]) -> Result<(), ShapeError> {
        let new_size = if new_shape.is_empty() {
            0
        } else {
            new_shape.iter().product()
        };
        if new_size != self.len() {
            return Err(ShapeError::IncompatibleReshape {
                size: self.len(),
                new_shape: new_shape.to_vec(),
                new_size,
            });
        }
        // A zero-element target only ever matches the empty array, which
        // stays in its canonical rank-0 form.
        self.shape = if new_size == 0 {
            Shape::new()
        } else {
            Shape::from_slice(new_shape)
        };
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use crate::{NdArray, ShapeError};

    #[test]
    fn reshape_roundtrip_restores_equality() {
        let original = NdArray::from_vec((0..12).collect(), &[3, 4]).unwrap();
        let roundtripped = original.reshape(&[2, 6]).unwrap().reshape(&[3, 4]).unwrap();
        assert_eq!(roundtripped, original);
    }

    #[test]
    fn reshape_keeps_buffer_order() {
        let array = NdArray::from_vec((0..6).collect(), &[2, 3]).unwrap();
        let reshaped = array.reshape(&[3, 2]).unwrap();
        assert_eq!(reshaped.as_slice(), array.as_slice());
        assert_eq!(reshaped[&[0, 1]], 1);
        assert_eq!(reshaped[&[1, 0]], 2);
    }

    #[test]
    fn non_conforming_reshape_leaves_array_unchanged() {
        let mut array = NdArray::from_vec((0..20).collect(), &[4, 5]).unwrap();
        let before = array.clone();
        let err = array.reshape_in_place(&[3, 3]).unwrap_err();
        assert_eq!(
            err,
            ShapeError::IncompatibleReshape {
                size: 20,
                new_shape: vec![3, 3],
                new_size: 9,
            }
        );
        assert_eq!(array, before);
    }

    #[test]
    fn zeros_reshape_scenario() {
        // [4,5] zeros -> [2,10] -> [5,4]; [3,3] refused, stays [5,4].
        let mut array = NdArray::<f64>::zeros(&[4, 5]);
        assert_eq!(array.len(), 20);
        assert!(array.iter().all(|&x| x == 0.0));

        array.reshape_in_place(&[2, 10]).unwrap();
        assert_eq!(array.shape(), &[2, 10]);

        array.reshape_in_place(&[5, 4]).unwrap();
        assert_eq!(array.shape(), &[5, 4]);

        assert!(array.reshape_in_place(&[3, 3]).is_err());
        assert_eq!(array.shape(), &[5, 4]);
        assert_eq!(array.len(), 20);
    }

    #[test]
    fn rank_changes_with_reshape() {
        let array = NdArray::<i32>::ones(&[2, 3, 4]);
        let flat = array.reshape(&[24]).unwrap();
        assert_eq!(flat.rank(), 1);
        let back = flat.reshape(&[2, 3, 4]).unwrap();
        assert_eq!(back.rank(), 3);
        assert_eq!(back, array);
    }
}
