// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use kurbo::{Affine, Point, Size, Vec2};
use understory_style::ElementStyle;
use understory_vector::Vector;

/// Pixel geometry of an element, derived from its style each time it is
/// needed.
///
/// `position` and `dimensions` are percentages of the canvas, and
/// `dimensions` is further scaled by `base`: the product of the
/// `width`/`height` fractions of every ancestor reached through a chain of
/// inherit-oriented links. `base` is `[1, 1]` for absolute elements.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Geometry {
    /// Top-left offset in the parent space, in pixels.
    pub position: Vec2,
    /// Box size in pixels, including `scale`.
    pub dimensions: Size,
    /// Center of the box in the parent space.
    pub center: Point,
    /// Rotation origin relative to the center.
    pub pivot: Vec2,
    /// Rotation in degrees.
    pub rotation: f64,
}

impl Geometry {
    /// Resolves `style` against a canvas of `canvas` pixels.
    #[must_use]
    pub fn resolve(style: &ElementStyle, canvas: Size, base: Vector<2>) -> Self {
        let canvas = [canvas.width, canvas.height];

        let mut position = Vector::new([style.left, style.top]);
        position.div(100.0).mul(canvas);

        let mut dimensions = Vector::new([style.width, style.height]);
        dimensions
            .div(100.0)
            .mul(canvas)
            .mul(style.scale.to_vector())
            .mul(base);

        let mut half = dimensions;
        half.div(2.0);
        let mut center = position;
        center.add(half);
        let mut pivot = style.pivot;
        pivot.mul(half);

        Self {
            position: position.to_vec2(),
            dimensions: Size::new(dimensions[0], dimensions[1]),
            center: center.to_point(),
            pivot: pivot.to_vec2(),
            rotation: style.rotation,
        }
    }

    /// Maps the element's box space, `(0, 0)..dimensions`, into its parent
    /// space.
    ///
    /// Composed as `translate(center) · translate(pivot) · rotate(rotation) ·
    /// translate(-pivot) · translate(-dimensions / 2)`. Drawing and hit
    /// testing both go through this one function.
    #[must_use]
    pub fn local_transform(&self) -> Affine {
        Affine::translate(self.center.to_vec2())
            * Affine::translate(self.pivot)
            * Affine::rotate(self.rotation.to_radians())
            * Affine::translate(-self.pivot)
            * Affine::translate(-self.dimensions.to_vec2() / 2.0)
    }

    /// The box in local space.
    #[must_use]
    pub fn local_bounds(&self) -> kurbo::Rect {
        self.dimensions.to_rect()
    }
}

/// Returns true if `pt` lies inside the box `(0, 0)..size`, edges included.
pub(crate) fn contains(size: Size, pt: Point) -> bool {
    let (x0, x1) = (size.width.min(0.0), size.width.max(0.0));
    let (y0, y1) = (size.height.min(0.0), size.height.max(0.0));
    pt.x >= x0 && pt.x <= x1 && pt.y >= y0 && pt.y <= y1
}

#[cfg(test)]
mod tests {
    use super::*;

    const CANVAS: Size = Size::new(800.0, 600.0);

    #[test]
    fn percentages_resolve_against_the_canvas() {
        let style = ElementStyle::builder()
            .left(10.0)
            .top(50.0)
            .width(25.0)
            .height(10.0)
            .scale([2.0, 1.0])
            .build();
        let g = Geometry::resolve(&style, CANVAS, Vector::splat(1.0));
        assert_eq!(g.position, Vec2::new(80.0, 300.0));
        assert_eq!(g.dimensions, Size::new(400.0, 60.0));
        assert_eq!(g.center, Point::new(280.0, 330.0));
        assert_eq!(g.pivot, Vec2::ZERO);
    }

    #[test]
    fn base_shrinks_dimensions_only() {
        let style = ElementStyle::builder().left(10.0).width(50.0).height(50.0).build();
        let g = Geometry::resolve(&style, CANVAS, Vector::new([0.5, 0.25]));
        assert_eq!(g.position, Vec2::new(80.0, 0.0));
        assert_eq!(g.dimensions, Size::new(200.0, 75.0));
    }

    #[test]
    fn unrotated_transform_is_a_translation_to_the_top_left() {
        let style = ElementStyle::builder().left(10.0).top(10.0).width(10.0).height(10.0).build();
        let g = Geometry::resolve(&style, CANVAS, Vector::splat(1.0));
        let origin = g.local_transform() * Point::ORIGIN;
        assert!((origin - Point::new(80.0, 60.0)).hypot() < 1e-9, "top-left");
    }

    #[test]
    fn pivot_is_a_fixed_point_of_rotation() {
        let style = ElementStyle::builder()
            .width(20.0)
            .height(20.0)
            .pivot([-1.0, -1.0])
            .rotation(77.0)
            .build();
        let g = Geometry::resolve(&style, CANVAS, Vector::splat(1.0));
        // Pivot (-1, -1) is the top-left corner, which must not move.
        let corner = g.local_transform() * Point::ORIGIN;
        assert!((corner - Point::ORIGIN).hypot() < 1e-9, "corner stays put");
    }

    #[test]
    fn containment_is_inclusive() {
        let size = Size::new(10.0, 5.0);
        assert!(contains(size, Point::new(0.0, 0.0)), "origin");
        assert!(contains(size, Point::new(10.0, 5.0)), "far corner");
        assert!(!contains(size, Point::new(10.1, 2.0)), "right of box");
        assert!(!contains(size, Point::new(5.0, -0.1)), "above box");
    }
}
