//! # numrs
//!
//! A minimal N-dimensional array library with shape-checked arithmetic.
//!
//! This crate provides a single dense array type plus a small factory
//! module:
//!
//! - **Dense array representation** ([`NdArray`]) with an owned row-major
//!   buffer and explicit shape bookkeeping
//! - **Element-wise arithmetic** (add/multiply, array-with-array and
//!   array-with-scalar) under exact-shape matching
//! - **Reshape** as a metadata-only row-major reinterpretation
//! - **Matrix product** (`dot`/[`NdArray::matmul`]) for 1-D/2-D operands
//! - **Factory functions** ([`factory::zeros`], [`factory::ones`],
//!   [`factory::dot`])
//!
//! ## Core Principles
//!
//! ### Memory Layout
//!
//! Arrays are C-contiguous (row-major): the last axis varies fastest in
//! the flat buffer. The buffer length always equals the product of the
//! shape, and both are explicit-length owned containers.
//!
//! ### Error Handling
//!
//! Checked operations return `Result<_, ShapeError>` and never leave an
//! array partially mutated. The original value model's silent-failure
//! surface survives as a compatibility layer: the `+`/`*` operators on
//! references and [`factory::dot`] map failure to the canonical empty
//! (rank-0, size-0) array instead of panicking.
//!
//! ### Safety
//!
//! All indexing is bounds-checked. No unsafe code.
//!
//! ## Quick Start
//!
//! ```
//! use numrs::{factory, NdArray};
//!
//! // Create a 2D array of zeros.
//! let zeros = NdArray::<f64>::zeros(&[4, 5]);
//! assert_eq!(zeros.shape(), &[4, 5]);
//! assert_eq!(zeros.len(), 20);
//!
//! // Element-wise arithmetic under exact-shape matching.
//! let a = NdArray::from_vec(vec![1.0, 2.0, 3.0, 4.0], &[2, 2]).unwrap();
//! let b = NdArray::<f64>::ones(&[2, 2]);
//! let sum = a.checked_add(&b).unwrap();
//! assert_eq!(sum.as_slice(), &[2.0, 3.0, 4.0, 5.0]);
//!
//! // Reshape is a row-major reinterpretation.
//! let reshaped = sum.reshape(&[4]).unwrap();
//! assert_eq!(reshaped.shape(), &[4]);
//!
//! // Matrix product.
//! let identity = NdArray::from_vec(vec![1.0, 0.0, 0.0, 1.0], &[2, 2]).unwrap();
//! assert_eq!(factory::dot(&a, &identity), a);
//! ```
//!
//! ## Rendering
//!
//! Arrays display in nested bracket notation derived from the shape:
//!
//! ```
//! use numrs::NdArray;
//!
//! let matrix = NdArray::from_vec(vec![1, 2, 3, 4], &[2, 2]).unwrap();
//! assert_eq!(matrix.to_string(), "[[1 2]\n[3 4]]");
//! ```
//!
//! ## Features
//!
//! - `serde`: enable serialization/deserialization support

#![deny(warnings)]

pub mod array;
pub mod elementwise;
pub mod error;
pub mod factory;
pub mod shape_ops;
pub mod types;


pub use array::NdArray;
pub use error::ShapeError;
pub use types::{Axis, Rank, Shape};
