//! Core type definitions for numrs arrays.
//!
//! This module defines the fundamental aliases used throughout the crate:
//!
//! - Type aliases for array dimensions ([`Axis`], [`Rank`], [`Shape`])
//!
//! # Examples
//!
//! ```
//! use numrs::{NdArray, Rank, Shape};
//!
//! let array = NdArray::<f64>::zeros(&[2, 3]);
//! let rank: Rank = array.rank();
//! assert_eq!(rank, 2);
//!
//! let strides: Shape = array.strides();
//! assert_eq!(&strides[..], &[3, 1]);
//! ```

use smallvec::SmallVec;

/// Type alias for an array axis index.
///
/// Zero-indexed (0 is the outermost, slowest-varying axis).
///
/// # Examples
///
/// ```
/// use numrs::{Axis, NdArray};
///
/// let array = NdArray::<f64>::zeros(&[2, 3, 4]);
/// let axis: Axis = 1; // second axis (extent 3)
/// assert_eq!(array.shape()[axis], 3);
/// ```
pub type Axis = usize;

/// Type alias for array rank (number of axes).
///
/// # Examples
///
/// ```
/// use numrs::{NdArray, Rank};
///
/// let matrix = NdArray::<f64>::zeros(&[2, 3]);
/// let rank: Rank = matrix.rank();
/// assert_eq!(rank, 2);
/// ```
pub type Rank = usize;

/// Shape type using SmallVec to avoid heap allocation for common cases.
///
/// Optimized for arrays with up to 6 axes (covers most use cases).
/// Automatically falls back to heap allocation for higher-rank arrays.
///
/// Extents are stored outer-to-inner: axis 0 is the slowest-varying axis
/// of the row-major buffer.
///
/// # Examples
///
/// ```
/// use numrs::{NdArray, Shape};
///
/// let array = NdArray::<f64>::zeros(&[2, 3, 4]);
/// let strides: Shape = array.strides();
/// assert_eq!(&strides[..], &[12, 4, 1]);
/// ```
pub type Shape = SmallVec<[usize; 6]>;
