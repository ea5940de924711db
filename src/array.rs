//! Dense N-dimensional array with owned contiguous storage.
//!
//! This module provides the core [`NdArray<T>`] type: a flat row-major
//! element buffer plus an explicit shape descriptor. Shape and buffer are
//! explicit-length owned containers, so no length is ever inferred from
//! raw storage.

use crate::error::ShapeError;
use crate::types::{Rank, Shape};
use num_traits::Num;
use std::fmt;

/// Dense N-dimensional array backed by an owned row-major buffer.
///
/// # Type Parameters
///
/// * `T` - The element type (any numeric type implementing `num_traits::Num`)
///
/// # Memory Layout
///
/// Elements are stored contiguously in row-major order: the last axis
/// varies fastest in the flat buffer. The buffer length always equals the
/// product of the shape extents.
///
/// # The Empty Array
///
/// The rank-0, size-0 array is the canonical "empty" value, returned by
/// [`NdArray::empty`] and [`Default::default`]. The sentinel-style
/// operators (`&a + &b`, `&a * &b`, [`crate::factory::dot`]) produce it
/// on shape mismatch instead of panicking; the checked methods report a
/// [`ShapeError`] instead.
///
/// # Examples
///
/// ```
/// use numrs::NdArray;
///
/// let array = NdArray::<f64>::zeros(&[2, 3, 4]);
/// assert_eq!(array.shape(), &[2, 3, 4]);
/// assert_eq!(array.rank(), 3);
/// assert_eq!(array.len(), 24);
/// ```
#[derive(Clone, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct NdArray<T> {
    /// Per-axis extents, outer-to-inner
    pub(crate) shape: Shape,
    /// Row-major element buffer; length equals the product of `shape`
    pub(crate) data: Vec<T>,
}

impl<T> NdArray<T> {
    /// Create the empty array: rank 0, size 0, no storage.
    ///
    /// This is the canonical sentinel returned by failed sentinel-style
    /// operations, and the [`Default`] value.
    ///
    /// # Examples
    ///
    /// ```
    /// use numrs::NdArray;
    ///
    /// let empty = NdArray::<f64>::empty();
    /// assert_eq!(empty.rank(), 0);
    /// assert_eq!(empty.len(), 0);
    /// assert!(empty.is_empty());
    /// ```
    pub fn empty() -> Self {
        Self {
            shape: Shape::new(),
            data: Vec::new(),
        }
    }

    /// Get the rank (number of axes) of this array.
    ///
    /// # Examples
    ///
    /// ```
    /// use numrs::NdArray;
    ///
    /// let array = NdArray::<f32>::zeros(&[2, 3, 4]);
    /// assert_eq!(array.rank(), 3);
    /// ```
    pub fn rank(&self) -> Rank {
        self.shape.len()
    }

    /// Get the shape of this array as a slice of per-axis extents.
    ///
    /// # Examples
    ///
    /// ```
    /// use numrs::NdArray;
    ///
    /// let array = NdArray::<f32>::zeros(&[2, 3, 4]);
    /// assert_eq!(array.shape(), &[2, 3, 4]);
    /// ```
    pub fn shape(&self) -> &[usize] {
        &self.shape
    }

    /// Get an owned copy of the shape.
    pub fn shape_vec(&self) -> Vec<usize> {
        self.shape.to_vec()
    }

    /// Get the total number of elements (the product of the shape).
    ///
    /// # Examples
    ///
    /// ```
    /// use numrs::NdArray;
    ///
    /// let array = NdArray::<f32>::zeros(&[4, 5]);
    /// assert_eq!(array.len(), 20);
    /// ```
    pub fn len(&self) -> usize {
        self.data.len()
    }

    /// Check whether this is the empty (rank-0, size-0) array.
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Compute the row-major strides of this array, in elements.
    ///
    /// The innermost axis always has stride 1; each outer axis strides by
    /// the product of the extents inside it.
    ///
    /// # Examples
    ///
    /// ```
    /// use numrs::NdArray;
    ///
    /// let array = NdArray::<f64>::zeros(&[2, 3, 4]);
    /// assert_eq!(&array.strides()[..], &[12, 4, 1]);
    /// ```
    pub fn strides(&self) -> Shape {
        let rank = self.shape.len();
        let mut strides = Shape::from_elem(1, rank);
        for axis in (0..rank.saturating_sub(1)).rev() {
            strides[axis] = strides[axis + 1] * self.shape[axis + 1];
        }
        strides
    }

    /// View the flat row-major buffer.
    pub fn as_slice(&self) -> &[T] {
        &self.data
    }

    /// Mutably view the flat row-major buffer.
    ///
    /// The shape is not exposed mutably, so the buffer length invariant
    /// cannot be broken through this view.
    pub fn as_mut_slice(&mut self) -> &mut [T] {
        &mut self.data
    }

    /// Iterate over the elements in row-major order.
    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.data.iter()
    }

    /// Look up an element by multi-index, returning `None` when the index
    /// rank or any axis index is out of bounds.
    ///
    /// # Examples
    ///
    /// ```
    /// use numrs::NdArray;
    ///
    /// let array = NdArray::from_vec(vec![1, 2, 3, 4, 5, 6], &[2, 3]).unwrap();
    /// assert_eq!(array.get(&[1, 2]), Some(&6));
    /// assert_eq!(array.get(&[2, 0]), None);
    /// assert_eq!(array.get(&[0]), None);
    /// ```
    pub fn get(&self, index: &[usize]) -> Option<&T> {
        if index.len() != self.shape.len() {
            return None;
        }
        let mut offset = 0;
        for (&i, &extent) in index.iter().zip(self.shape.iter()) {
            if i >= extent {
                return None;
            }
            offset = offset * extent + i;
        }
        self.data.get(offset)
    }

    /// Move the contents out of this array, leaving the empty array behind.
    ///
    /// This mirrors move construction in the original value model: the
    /// source is reset to rank 0, size 0 rather than left in an
    /// unspecified state.
    ///
    /// # Examples
    ///
    /// ```
    /// use numrs::NdArray;
    ///
    /// let mut source = NdArray::<f64>::ones(&[2, 2]);
    /// let moved = source.take();
    /// assert_eq!(moved.shape(), &[2, 2]);
    /// assert!(source.is_empty());
    /// assert_eq!(source.rank(), 0);
    /// ```
    pub fn take(&mut self) -> Self {
        std::mem::take(self)
    }

    /// Row-major offset of a multi-index. Panics on rank or bounds
    /// violation; this backs the `Index` impls.
    fn offset(&self, index: &[usize]) -> usize {
        assert_eq!(
            index.len(),
            self.shape.len(),
            "index rank {} does not match array rank {}",
            index.len(),
            self.shape.len()
        );
        let mut offset = 0;
        for (axis, (&i, &extent)) in index.iter().zip(self.shape.iter()).enumerate() {
            assert!(
                i < extent,
                "index {} out of bounds for axis {} with extent {}",
                i,
                axis,
                extent
            );
            offset = offset * extent + i;
        }
        offset
    }
}

impl<T> NdArray<T>
where
    T: Clone + Num,
{
    /// Create an array of the given shape with every element set to `value`.
    ///
    /// Any zero extent (or an empty shape) collapses the result to the
    /// empty array: there is no rank-0 scalar in this model.
    ///
    /// # Examples
    ///
    /// ```
    /// use numrs::NdArray;
    ///
    /// let fives = NdArray::from_elem(&[2, 3], 5.0);
    /// assert_eq!(fives[&[0, 0]], 5.0);
    /// assert_eq!(fives[&[1, 2]], 5.0);
    ///
    /// let collapsed = NdArray::from_elem(&[2, 0, 3], 5.0);
    /// assert!(collapsed.is_empty());
    /// ```
    pub fn from_elem(shape: &[usize], value: T) -> Self {
        if shape.is_empty() || shape.contains(&0) {
            return Self::empty();
        }
        let size = shape.iter().product();
        Self {
            shape: Shape::from_slice(shape),
            data: vec![value; size],
        }
    }

    /// Create an array of zeros (the additive identity of `T`).
    ///
    /// # Examples
    ///
    /// ```
    /// use numrs::NdArray;
    ///
    /// let array = NdArray::<f64>::zeros(&[2, 3, 4]);
    /// assert_eq!(array[&[0, 0, 0]], 0.0);
    /// assert_eq!(array.len(), 24);
    /// ```
    pub fn zeros(shape: &[usize]) -> Self {
        Self::from_elem(shape, T::zero())
    }

    /// Create an array of ones (the multiplicative identity of `T`).
    ///
    /// # Examples
    ///
    /// ```
    /// use numrs::NdArray;
    ///
    /// let array = NdArray::<f64>::ones(&[2, 3]);
    /// assert_eq!(array[&[1, 2]], 1.0);
    /// ```
    pub fn ones(shape: &[usize]) -> Self {
        Self::from_elem(shape, T::one())
    }

    /// Create an array from a flat row-major buffer and a shape.
    ///
    /// # Errors
    ///
    /// Returns [`ShapeError::SizeMismatch`] when the buffer length does
    /// not equal the product of the shape. A shape with a zero extent and
    /// an empty buffer collapses to the empty array.
    ///
    /// # Examples
    ///
    /// ```
    /// use numrs::NdArray;
    ///
    /// let data = vec![1.0, 2.0, 3.0, 4.0, 5.0, 6.0];
    /// let array = NdArray::from_vec(data, &[2, 3]).unwrap();
    /// assert_eq!(array.shape(), &[2, 3]);
    /// assert_eq!(array[&[1, 0]], 4.0);
    ///
    /// assert!(NdArray::from_vec(vec![1.0, 2.0], &[3]).is_err());
    /// ```
    pub fn from_vec(data: Vec<T>, shape: &[usize]) -> Result<Self, ShapeError> {
        let expected = if shape.is_empty() {
            0
        } else {
            shape.iter().product()
        };
        if data.len() != expected {
            return Err(ShapeError::SizeMismatch {
                shape: shape.to_vec(),
                expected,
                actual: data.len(),
            });
        }
        if expected == 0 {
            return Ok(Self::empty());
        }
        Ok(Self {
            shape: Shape::from_slice(shape),
            data,
        })
    }

    /// Create an array from explicitly supplied parts: declared rank,
    /// declared size, shape buffer, and flat data buffer.
    ///
    /// Unlike a trusting constructor, every declared quantity is validated
    /// against the buffers: the rank must match the shape length, the size
    /// must equal both the shape product and the data length. Both buffers
    /// are copied.
    ///
    /// # Errors
    ///
    /// Returns [`ShapeError::RankMismatch`] or [`ShapeError::SizeMismatch`]
    /// when the declared parts are inconsistent.
    ///
    /// # Examples
    ///
    /// ```
    /// use numrs::NdArray;
    ///
    /// let array = NdArray::from_parts(2, 4, &[2, 2], &[1, 2, 3, 4]).unwrap();
    /// assert_eq!(array.shape(), &[2, 2]);
    ///
    /// // Declared size disagrees with the shape product.
    /// assert!(NdArray::from_parts(2, 5, &[2, 2], &[1, 2, 3, 4]).is_err());
    /// ```
    pub fn from_parts(
        rank: Rank,
        size: usize,
        shape: &[usize],
        data: &[T],
    ) -> Result<Self, ShapeError> {
        if shape.len() != rank {
            return Err(ShapeError::RankMismatch {
                rank,
                axes: shape.len(),
            });
        }
        let product = if shape.is_empty() {
            0
        } else {
            shape.iter().product()
        };
        if product != size {
            return Err(ShapeError::SizeMismatch {
                shape: shape.to_vec(),
                expected: product,
                actual: size,
            });
        }
        if data.len() != size {
            return Err(ShapeError::SizeMismatch {
                shape: shape.to_vec(),
                expected: size,
                actual: data.len(),
            });
        }
        if size == 0 {
            return Ok(Self::empty());
        }
        Ok(Self {
            shape: Shape::from_slice(shape),
            data: data.to_vec(),
        })
    }
}

impl<T> Default for NdArray<T> {
    fn default() -> Self {
        Self::empty()
    }
}

/// Structural equality: rank, then size, then shape axis-by-axis, then
/// buffer contents, short-circuiting in that order.
impl<T: PartialEq> PartialEq for NdArray<T> {
    fn eq(&self, other: &Self) -> bool {
        if self.shape.len() != other.shape.len() {
            return false;
        }
        if self.data.len() != other.data.len() {
            return false;
        }
        if self.shape.iter().zip(other.shape.iter()).any(|(a, b)| a != b) {
            return false;
        }
        self.data == other.data
    }
}

impl<T: Eq> Eq for NdArray<T> {}

impl<T> std::ops::Index<&[usize]> for NdArray<T> {
    type Output = T;

    fn index(&self, index: &[usize]) -> &Self::Output {
        let offset = self.offset(index);
        &self.data[offset]
    }
}

impl<T> std::ops::IndexMut<&[usize]> for NdArray<T> {
    fn index_mut(&mut self, index: &[usize]) -> &mut Self::Output {
        let offset = self.offset(index);
        &mut self.data[offset]
    }
}

/// Nested-bracket rendering.
///
/// An opening bracket is emitted for every axis whose cumulative inner
/// size divides the running linear index, elements are separated by single
/// spaces, closing brackets are emitted symmetrically at axis boundaries,
/// and top-level (axis-0) blocks are separated by a newline. The empty
/// array renders as `[]`.
///
/// # Examples
///
/// ```
/// use numrs::NdArray;
///
/// let vector = NdArray::from_vec(vec![1, 2, 3], &[3]).unwrap();
/// assert_eq!(vector.to_string(), "[1 2 3]");
///
/// let matrix = NdArray::from_vec(vec![1, 2, 3, 4], &[2, 2]).unwrap();
/// assert_eq!(matrix.to_string(), "[[1 2]\n[3 4]]");
/// ```
impl<T: fmt::Display> fmt::Display for NdArray<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.data.is_empty() {
            return f.write_str("[]");
        }
        let rank = self.shape.len();
        // blocks[axis] = elements spanned by one step of that axis;
        // blocks[0] is the whole buffer, blocks[rank] a single element.
        let mut blocks = vec![1usize; rank + 1];
        for axis in (0..rank).rev() {
            blocks[axis] = blocks[axis + 1] * self.shape[axis];
        }
        for (i, value) in self.data.iter().enumerate() {
            for axis in 0..rank {
                if i % blocks[axis] == 0 {
                    f.write_str("[")?;
                }
            }
            write!(f, "{value}")?;
            for axis in (0..rank).rev() {
                if (i + 1) % blocks[axis] == 0 {
                    f.write_str("]")?;
                }
            }
            if i + 1 < self.data.len() {
                if rank > 1 && (i + 1) % blocks[1] == 0 {
                    f.write_str("\n")?;
                } else {
                    f.write_str(" ")?;
                }
            }
        }
        Ok(())
    }
}
