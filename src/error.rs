//! Unified error type for array operations.
//!
//! Every checked operation in the crate reports failure through
//! [`ShapeError`]. The variants cover the two failure families the array
//! model admits: shape disagreement between operands and shape/buffer
//! disagreement at construction. No operation leaves an array partially
//! mutated after returning an error.
//!
//! # Examples
//!
//! ```
//! use numrs::{NdArray, ShapeError};
//!
//! let a = NdArray::<i64>::zeros(&[2, 3]);
//! let b = NdArray::<i64>::zeros(&[3, 2]);
//!
//! match a.checked_add(&b) {
//!     Err(ShapeError::Mismatch { left, right }) => {
//!         assert_eq!(left, vec![2, 3]);
//!         assert_eq!(right, vec![3, 2]);
//!     }
//!     _ => unreachable!(),
//! }
//! ```

use thiserror::Error;

/// Error type for all shape-checked array operations.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ShapeError {
    /// Element-wise binary operation on arrays with incompatible shapes
    #[error("shape mismatch: left operand {left:?}, right operand {right:?}")]
    Mismatch {
        /// Shape of the left operand
        left: Vec<usize>,
        /// Shape of the right operand
        right: Vec<usize>,
    },

    /// Constructor given a rank that disagrees with the shape buffer length
    #[error("declared rank {rank} does not match shape of {axes} axes")]
    RankMismatch {
        /// The declared rank
        rank: usize,
        /// Number of axes actually supplied
        axes: usize,
    },

    /// Constructor given a buffer whose length disagrees with the shape
    #[error("shape {shape:?} requires {expected} elements, but buffer holds {actual}")]
    SizeMismatch {
        /// The requested shape
        shape: Vec<usize>,
        /// Element count the shape implies
        expected: usize,
        /// Element count actually supplied
        actual: usize,
    },

    /// Reshape target whose element count differs from the array's size
    #[error("cannot reshape array of size {size} into shape {new_shape:?} (size {new_size})")]
    IncompatibleReshape {
        /// Current element count
        size: usize,
        /// The requested shape
        new_shape: Vec<usize>,
        /// Element count the requested shape implies
        new_size: usize,
    },

    /// Dot product operand outside the supported rank-1/rank-2 range
    #[error("dot requires rank-1 or rank-2 operands, got ranks {left} and {right}")]
    DotRank {
        /// Rank of the left operand
        left: usize,
        /// Rank of the right operand
        right: usize,
    },

    /// Dot product operands whose inner dimensions disagree
    #[error("dot inner dimension mismatch: left has {left} columns, right has {right} rows")]
    DotInnerDim {
        /// Inner dimension of the left operand
        left: usize,
        /// Leading extent of the right operand
        right: usize,
    },
}
