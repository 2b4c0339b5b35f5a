// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The [`Vector`] type and its broadcast operands.

use core::ops::{Index, IndexMut};

#[cfg(not(feature = "std"))]
use kurbo::common::FloatFuncs as _;

/// Right-hand side of a vector operation.
///
/// A scalar is broadcast to every component; an array or vector is applied
/// component-wise.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Operand<const N: usize> {
    /// The same value for every component.
    Scalar(f64),
    /// One value per component.
    Components([f64; N]),
}

impl<const N: usize> Operand<N> {
    /// Returns the value that applies to component `i`.
    #[must_use]
    pub fn component(&self, i: usize) -> f64 {
        match self {
            Self::Scalar(s) => *s,
            Self::Components(c) => c[i],
        }
    }
}

impl<const N: usize> From<f64> for Operand<N> {
    fn from(value: f64) -> Self {
        Self::Scalar(value)
    }
}

impl<const N: usize> From<[f64; N]> for Operand<N> {
    fn from(value: [f64; N]) -> Self {
        Self::Components(value)
    }
}

impl<const N: usize> From<Vector<N>> for Operand<N> {
    fn from(value: Vector<N>) -> Self {
        Self::Components(value.0)
    }
}

impl<const N: usize> From<&Vector<N>> for Operand<N> {
    fn from(value: &Vector<N>) -> Self {
        Self::Components(value.0)
    }
}

/// A fixed-length numeric tuple.
///
/// The length is part of the type, so it can never change after
/// construction. Arithmetic is element-wise and in place:
///
/// - [`add`](Self::add), [`sub`](Self::sub) and [`mul`](Self::mul) combine
///   each component with the matching operand component.
/// - [`div`](Self::div) skips components whose divisor is zero, leaving them
///   unchanged rather than producing an infinity.
///
/// Component aliases `x/y/z/w` and `r/g/b/a` name the same storage and
/// return `None` when the vector is too short to have that component.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Vector<const N: usize>(pub [f64; N]);

impl<const N: usize> Default for Vector<N> {
    fn default() -> Self {
        Self([0.0; N])
    }
}

impl<const N: usize> Vector<N> {
    /// Creates a vector from its components.
    #[must_use]
    pub const fn new(components: [f64; N]) -> Self {
        Self(components)
    }

    /// Creates a vector with every component set to `value`.
    #[must_use]
    pub const fn splat(value: f64) -> Self {
        Self([value; N])
    }

    /// Number of components.
    #[must_use]
    pub const fn len(&self) -> usize {
        N
    }

    /// Returns true if the vector has no components.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        N == 0
    }

    /// Borrows the components.
    #[must_use]
    pub const fn as_array(&self) -> &[f64; N] {
        &self.0
    }

    /// Returns a copy of the components.
    #[must_use]
    pub const fn to_array(&self) -> [f64; N] {
        self.0
    }

    /// Returns component `i`, if present.
    #[must_use]
    pub fn get(&self, i: usize) -> Option<f64> {
        self.0.get(i).copied()
    }

    /// Sets component `i`. Out-of-range indices are ignored.
    pub fn set(&mut self, i: usize, value: f64) -> &mut Self {
        if let Some(c) = self.0.get_mut(i) {
            *c = value;
        }
        self
    }

    fn zip_with(&mut self, rhs: Operand<N>, mut f: impl FnMut(&mut f64, f64)) -> &mut Self {
        for (i, c) in self.0.iter_mut().enumerate() {
            f(c, rhs.component(i));
        }
        self
    }

    /// Adds `rhs` component-wise.
    pub fn add(&mut self, rhs: impl Into<Operand<N>>) -> &mut Self {
        self.zip_with(rhs.into(), |c, r| *c += r)
    }

    /// Subtracts `rhs` component-wise.
    pub fn sub(&mut self, rhs: impl Into<Operand<N>>) -> &mut Self {
        self.zip_with(rhs.into(), |c, r| *c -= r)
    }

    /// Multiplies by `rhs` component-wise.
    pub fn mul(&mut self, rhs: impl Into<Operand<N>>) -> &mut Self {
        self.zip_with(rhs.into(), |c, r| *c *= r)
    }

    /// Divides by `rhs` component-wise, skipping zero divisors.
    pub fn div(&mut self, rhs: impl Into<Operand<N>>) -> &mut Self {
        self.zip_with(rhs.into(), |c, r| {
            if r != 0.0 {
                *c /= r;
            }
        })
    }

    /// Moves this vector a fraction `t` of the way towards `dest`.
    ///
    /// Computes `A + (B - A) * t` out of [`sub`](Self::sub),
    /// [`mul`](Self::mul) and [`add`](Self::add), so a scalar `dest` is
    /// broadcast the same way it is for those operations.
    pub fn lerp(&mut self, dest: impl Into<Operand<N>>, t: f64) -> &mut Self {
        let start = self.0;
        self.sub(dest).mul(-t).add(start)
    }

    /// Magnitude, defined as `(Σ cᵢ²)^(1/N)`.
    ///
    /// For two components this is the Euclidean length. Longer vectors use the
    /// arity as the root, which keeps the value in the same units as the
    /// components for uniform vectors.
    #[must_use]
    pub fn mag(&self) -> f64 {
        if N == 0 {
            return 0.0;
        }
        let sum: f64 = self.0.iter().map(|c| c * c).sum();
        sum.powf(1.0 / N as f64)
    }

    /// First component.
    #[must_use]
    pub fn x(&self) -> Option<f64> {
        self.get(0)
    }

    /// Second component.
    #[must_use]
    pub fn y(&self) -> Option<f64> {
        self.get(1)
    }

    /// Third component.
    #[must_use]
    pub fn z(&self) -> Option<f64> {
        self.get(2)
    }

    /// Fourth component.
    #[must_use]
    pub fn w(&self) -> Option<f64> {
        self.get(3)
    }

    /// First component, read as a red channel.
    #[must_use]
    pub fn r(&self) -> Option<f64> {
        self.get(0)
    }

    /// Second component, read as a green channel.
    #[must_use]
    pub fn g(&self) -> Option<f64> {
        self.get(1)
    }

    /// Third component, read as a blue channel.
    #[must_use]
    pub fn b(&self) -> Option<f64> {
        self.get(2)
    }

    /// Fourth component, read as an alpha channel.
    #[must_use]
    pub fn a(&self) -> Option<f64> {
        self.get(3)
    }

    /// Sets the first component if present.
    pub fn set_x(&mut self, value: f64) -> &mut Self {
        self.set(0, value)
    }

    /// Sets the second component if present.
    pub fn set_y(&mut self, value: f64) -> &mut Self {
        self.set(1, value)
    }

    /// Sets the third component if present.
    pub fn set_z(&mut self, value: f64) -> &mut Self {
        self.set(2, value)
    }

    /// Sets the fourth component if present.
    pub fn set_w(&mut self, value: f64) -> &mut Self {
        self.set(3, value)
    }

    /// Alias of [`set_x`](Self::set_x).
    pub fn set_r(&mut self, value: f64) -> &mut Self {
        self.set(0, value)
    }

    /// Alias of [`set_y`](Self::set_y).
    pub fn set_g(&mut self, value: f64) -> &mut Self {
        self.set(1, value)
    }

    /// Alias of [`set_z`](Self::set_z).
    pub fn set_b(&mut self, value: f64) -> &mut Self {
        self.set(2, value)
    }

    /// Alias of [`set_w`](Self::set_w).
    pub fn set_a(&mut self, value: f64) -> &mut Self {
        self.set(3, value)
    }
}

impl<const N: usize> From<[f64; N]> for Vector<N> {
    fn from(value: [f64; N]) -> Self {
        Self(value)
    }
}

impl<const N: usize> From<Vector<N>> for [f64; N] {
    fn from(value: Vector<N>) -> Self {
        value.0
    }
}

impl<const N: usize> Index<usize> for Vector<N> {
    type Output = f64;

    fn index(&self, index: usize) -> &f64 {
        &self.0[index]
    }
}

impl<const N: usize> IndexMut<usize> for Vector<N> {
    fn index_mut(&mut self, index: usize) -> &mut f64 {
        &mut self.0[index]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn scalar_broadcasts_to_every_component() {
        let mut v = Vector::new([1.0, 2.0, 3.0]);
        v.add(1.0).mul(2.0);
        assert_eq!(v.to_array(), [4.0, 6.0, 8.0]);
    }

    #[test]
    fn div_skips_zero_divisors() {
        let mut v = Vector::new([1.0, 1.0]);
        v.div([0.0, 2.0]);
        assert_eq!(v.to_array(), [1.0, 0.5]);

        let mut w = Vector::new([3.0, -4.0]);
        w.div(0.0);
        assert_eq!(w.to_array(), [3.0, -4.0]);
    }

    #[test]
    fn mag_uses_arity_root() {
        let v = Vector::new([3.0, 4.0]);
        assert!((v.mag() - 5.0).abs() < 1e-12, "3-4-5 triangle");

        let u = Vector::new([2.0, 2.0, 2.0, 2.0]);
        let expected = 16.0_f64.powf(0.25);
        assert!((u.mag() - expected).abs() < 1e-12, "fourth root of 16");
    }

    #[test]
    fn lerp_endpoints_and_midpoint() {
        let mut a = Vector::new([2.0, -2.0]);
        a.lerp([4.0, 2.0], 0.0);
        assert_eq!(a.to_array(), [2.0, -2.0]);
        a.lerp([4.0, 2.0], 1.0);
        assert_eq!(a.to_array(), [4.0, 2.0]);

        let mut b = Vector::new([0.0, 0.0]);
        b.lerp(10.0, 0.25);
        assert_eq!(b.to_array(), [2.5, 2.5]);
    }

    #[test]
    fn aliases_are_bounded_by_arity() {
        let mut v = Vector::new([1.0, 2.0]);
        assert_eq!(v.x(), Some(1.0));
        assert_eq!(v.g(), Some(2.0));
        assert_eq!(v.z(), None);
        assert_eq!(v.a(), None);

        v.set_w(9.0).set_y(7.0);
        assert_eq!(v.to_array(), [1.0, 7.0]);
    }

    #[test]
    fn arithmetic_mutates_in_place_with_operator_traits_in_scope() {
        #[allow(unused_imports, reason = "method resolution must still pick the in-place methods")]
        use core::ops::{Add, Div, Mul, Sub};

        let mut v = Vector::new([1.0, 1.0]);
        v.div([0.0, 2.0]);
        assert_eq!(v.to_array(), [1.0, 0.5]);

        let mut w = Vector::new([6.0, 8.0]);
        w.sub(2.0).mul([0.5, 0.25]).add(1.0);
        assert_eq!(w.to_array(), [3.0, 2.5]);
    }
}
