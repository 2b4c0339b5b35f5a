// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use kurbo::{Affine, Point, Vec2};
use understory_style::Scale;
use understory_vector::invert;

/// Root view transform applied before any element transform.
///
/// The authoritative state is a position, a rotation and a per-axis scale.
/// The composed transform `translate(position) · rotate(rotation) ·
/// scale(scale)` and its inverse are rebuilt from those fields after every
/// change, never updated incrementally.
///
/// Rotation is stored in radians; the public API speaks degrees.
#[derive(Clone, Debug)]
pub struct Camera {
    position: Vec2,
    rotation: f64,
    scale: Vec2,
    transform: Affine,
    inverse: Option<Affine>,
}

impl Default for Camera {
    fn default() -> Self {
        Self::new()
    }
}

impl Camera {
    /// Identity camera.
    #[must_use]
    pub fn new() -> Self {
        Self {
            position: Vec2::ZERO,
            rotation: 0.0,
            scale: Vec2::new(1.0, 1.0),
            transform: Affine::IDENTITY,
            inverse: Some(Affine::IDENTITY),
        }
    }

    /// Camera translation in device pixels.
    #[must_use]
    pub fn position(&self) -> Vec2 {
        self.position
    }

    /// Camera rotation in degrees.
    #[must_use]
    pub fn rotation(&self) -> f64 {
        self.rotation.to_degrees()
    }

    /// Camera scale per axis.
    #[must_use]
    pub fn magnification(&self) -> Vec2 {
        self.scale
    }

    /// The composed root transform.
    #[must_use]
    pub fn transform(&self) -> Affine {
        self.transform
    }

    /// Inverse of [`transform`](Self::transform), or `None` when a scale
    /// component is zero.
    #[must_use]
    pub fn inverse(&self) -> Option<Affine> {
        self.inverse
    }

    /// Maps a canvas point into root space.
    #[must_use]
    pub fn canvas_to_root(&self, pt: Point) -> Option<Point> {
        self.inverse.map(|inv| inv * pt)
    }

    /// Replaces the translation.
    pub fn set_translation(&mut self, position: impl Into<Vec2>) {
        self.position = position.into();
        self.rebuild();
    }

    /// Replaces the rotation, in degrees.
    pub fn set_rotation(&mut self, degrees: f64) {
        self.rotation = degrees.to_radians();
        self.rebuild();
    }

    /// Replaces the scale with a uniform or per-axis factor.
    pub fn set_magnification(&mut self, scale: impl Into<Scale>) {
        let s = scale.into();
        self.scale = Vec2::new(s.x, s.y);
        self.rebuild();
    }

    /// Adds to the translation.
    pub fn translate(&mut self, dx: f64, dy: f64) {
        self.position += Vec2::new(dx, dy);
        self.rebuild();
    }

    /// Adds to the rotation, in degrees.
    pub fn rotate(&mut self, degrees: f64) {
        self.rotation += degrees.to_radians();
        self.rebuild();
    }

    /// Multiplies the scale. `sy` defaults to `sx`.
    pub fn scale(&mut self, sx: f64, sy: Option<f64>) {
        self.scale = Vec2::new(self.scale.x * sx, self.scale.y * sy.unwrap_or(sx));
        self.rebuild();
    }

    fn rebuild(&mut self) {
        self.transform = Affine::translate(self.position)
            * Affine::rotate(self.rotation)
            * Affine::scale_non_uniform(self.scale.x, self.scale.y);
        self.inverse = invert(self.transform).ok();
    }
}
