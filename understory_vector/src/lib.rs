// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=understory_vector --heading-base-level=0

//! Understory Vector: fixed-arity vectors with broadcast arithmetic.
//!
//! [`Vector<N>`] is a small numeric tuple used wherever a scene needs to do
//! position, size, pivot or color math. It is deliberately mutable and
//! chainable: every arithmetic operation updates the vector in place and
//! returns `&mut Self`, so a computation reads left to right.
//!
//! The right-hand side of every operation is an [`Operand`], which can be
//! built from another vector, a raw array, or a scalar that is broadcast to
//! every component.
//!
//! ```rust
//! use understory_vector::Vector;
//!
//! let mut v = Vector::new([1.0, 1.0]);
//! // Division by a zero component leaves that component unchanged.
//! v.div([0.0, 2.0]);
//! assert_eq!(v.to_array(), [1.0, 0.5]);
//!
//! let mut p = Vector::new([0.0, 10.0]);
//! p.lerp([10.0, 20.0], 0.5);
//! assert_eq!(p.to_array(), [5.0, 15.0]);
//! ```
//!
//! ## 2D helpers
//!
//! Two-component vectors additionally expose an [`angle`](Vector::angle) in
//! degrees and can be mapped through a Kurbo [`Affine`](kurbo::Affine) in both
//! directions. The inverse direction is fallible: a singular transform yields
//! [`SingularTransform`] instead of a vector full of infinities.
//!
//! ```rust
//! use kurbo::Affine;
//! use understory_vector::Vector;
//!
//! let xf = Affine::translate((10.0, 0.0)) * Affine::scale(2.0);
//! let mut v = Vector::new([1.0, 1.0]);
//! v.apply_affine(xf);
//! assert_eq!(v.to_array(), [12.0, 2.0]);
//! v.apply_affine_inverse(xf).unwrap();
//! assert_eq!(v.to_array(), [1.0, 1.0]);
//! ```
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

mod affine;
mod easing;
mod vector;

pub use affine::{SingularTransform, determinant, invert};
pub use easing::smoothstep;
pub use vector::{Operand, Vector};

/// A two-component vector.
pub type Vector2 = Vector<2>;
/// A three-component vector.
pub type Vector3 = Vector<3>;
/// A four-component vector, also used for per-corner and RGBA values.
pub type Vector4 = Vector<4>;
