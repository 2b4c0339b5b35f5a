// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Two-component helpers: angles, Kurbo conversions, and affine mapping.

use core::fmt;

#[cfg(not(feature = "std"))]
use kurbo::common::FloatFuncs as _;
use kurbo::{Affine, Point, Vec2};

use crate::Vector;

/// Error returned when an affine transform has no inverse.
///
/// This happens when a scale component collapses to zero, or when the
/// coefficients are not finite.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SingularTransform {
    /// The determinant that made the inversion impossible.
    pub determinant: f64,
}

impl fmt::Display for SingularTransform {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "affine transform is not invertible (determinant {})", self.determinant)
    }
}

impl core::error::Error for SingularTransform {}

/// Determinant of the linear part of `xf`.
#[must_use]
pub fn determinant(xf: Affine) -> f64 {
    let [a, b, c, d, _, _] = xf.as_coeffs();
    a * d - b * c
}

/// Inverts `xf`, or reports why it cannot be inverted.
///
/// Unlike [`Affine::inverse`], this never returns a transform containing
/// infinities or NaNs.
pub fn invert(xf: Affine) -> Result<Affine, SingularTransform> {
    let det = determinant(xf);
    if det == 0.0 || !det.is_finite() {
        return Err(SingularTransform { determinant: det });
    }
    let inv = xf.inverse();
    if inv.is_finite() {
        Ok(inv)
    } else {
        Err(SingularTransform { determinant: det })
    }
}

impl Vector<2> {
    /// Angle from the positive x axis, in degrees.
    ///
    /// Computed as `atan(y / x)`, so the result lies in `[-90, 90]`. When `x`
    /// is zero the result is `90` times the sign of `y` (and `0` for the zero
    /// vector).
    #[must_use]
    pub fn angle(&self) -> f64 {
        let [x, y] = self.0;
        if x == 0.0 {
            return if y > 0.0 {
                90.0
            } else if y < 0.0 {
                -90.0
            } else {
                0.0
            };
        }
        (y / x).atan().to_degrees()
    }

    /// Rotates the vector to point at `degrees`, keeping its magnitude.
    pub fn set_angle(&mut self, degrees: f64) -> &mut Self {
        let mag = self.mag();
        let (sin, cos) = degrees.to_radians().sin_cos();
        self.0 = [mag * cos, mag * sin];
        self
    }

    /// Maps the vector through `xf` as a point.
    pub fn apply_affine(&mut self, xf: Affine) -> &mut Self {
        let [a, b, c, d, e, f] = xf.as_coeffs();
        let [x, y] = self.0;
        self.0 = [a * x + c * y + e, b * x + d * y + f];
        self
    }

    /// Maps the vector from the space `xf` maps into back into the space it
    /// maps from.
    ///
    /// On failure the vector is left unchanged.
    pub fn apply_affine_inverse(&mut self, xf: Affine) -> Result<&mut Self, SingularTransform> {
        let inv = invert(xf)?;
        Ok(self.apply_affine(inv))
    }

    /// The vector as a Kurbo point.
    #[must_use]
    pub const fn to_point(&self) -> Point {
        Point::new(self.0[0], self.0[1])
    }

    /// The vector as a Kurbo displacement.
    #[must_use]
    pub const fn to_vec2(&self) -> Vec2 {
        Vec2::new(self.0[0], self.0[1])
    }
}

impl From<Point> for Vector<2> {
    fn from(p: Point) -> Self {
        Self([p.x, p.y])
    }
}

impl From<Vec2> for Vector<2> {
    fn from(v: Vec2) -> Self {
        Self([v.x, v.y])
    }
}

impl From<Vector<2>> for Point {
    fn from(v: Vector<2>) -> Self {
        v.to_point()
    }
}

impl From<Vector<2>> for Vec2 {
    fn from(v: Vector<2>) -> Self {
        v.to_vec2()
    }
}
