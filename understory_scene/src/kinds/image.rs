// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use alloc::string::String;
use alloc::vec::Vec;

use kurbo::{BezPath, Cap, Point, Size, Stroke};
use peniko::Color;
use understory_style::PseudoState;
use understory_vector::{Operand, Vector, Vector4};

use crate::{DrawCx, Drawable, Updatable};

/// Outline dash style of an [`Image`].
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum BorderType {
    /// Solid line.
    #[default]
    Line,
    /// Dashes three widths long with two-width gaps.
    Dashed,
    /// Round dots one width apart.
    Dotted,
}

/// Corner rounding and outline of an [`Image`].
#[derive(Clone, Copy, Debug)]
pub struct Border {
    /// Outline dash style.
    pub border_type: BorderType,
    /// Corner radii as percentages of the box width, clockwise from the
    /// top-left corner.
    pub radius: Option<Vector4>,
    /// Outline width in pixels. Zero disables the outline.
    pub width: f64,
    /// Outline color.
    pub color: Color,
}

impl Default for Border {
    fn default() -> Self {
        Self {
            border_type: BorderType::Line,
            radius: None,
            width: 0.0,
            color: Color::TRANSPARENT,
        }
    }
}

impl Border {
    /// Corner radii in pixels for a box of `size`.
    #[must_use]
    pub fn corner_radii(&self, size: Size) -> Option<Vector4> {
        let mut radii = self.radius?;
        radii.mul(size.width / 100.0);
        Some(radii)
    }

    /// Rounded clip outline for a box of `size`, using quadratic corners.
    #[must_use]
    pub fn clip_path(&self, size: Size) -> Option<BezPath> {
        let [tl, tr, br, bl] = self.corner_radii(size)?.to_array();
        let Size { width: w, height: h } = size;
        let mut path = BezPath::new();
        path.move_to((tl, 0.0));
        path.line_to((w - tr, 0.0));
        path.quad_to((w, 0.0), (w, tr));
        path.line_to((w, h - br));
        path.quad_to((w, h), (w - br, h));
        path.line_to((bl, h));
        path.quad_to((0.0, h), (0.0, h - bl));
        path.line_to((0.0, tl));
        path.quad_to(Point::ORIGIN, Point::new(tl, 0.0));
        path.close_path();
        Some(path)
    }

    /// Outline stroke, or `None` when the width is zero.
    #[must_use]
    pub fn stroke(&self) -> Option<Stroke> {
        let w = self.width;
        if w <= 0.0 {
            return None;
        }
        let stroke = Stroke::new(w);
        Some(match self.border_type {
            BorderType::Line => stroke,
            BorderType::Dashed => stroke.with_dashes(0.0, [3.0 * w, 2.0 * w]),
            BorderType::Dotted => stroke.with_dashes(0.0, [w, w]).with_caps(Cap::Round),
        })
    }
}

/// Partial [`Border`] laid over the resting one while an [`Image`] is
/// hovered or pressed.
#[derive(Clone, Copy, Debug, Default)]
pub struct BorderPatch {
    /// Overrides [`Border::border_type`].
    pub border_type: Option<BorderType>,
    /// Overrides [`Border::radius`].
    pub radius: Option<Vector4>,
    /// Overrides [`Border::width`].
    pub width: Option<f64>,
    /// Overrides [`Border::color`].
    pub color: Option<Color>,
}

impl BorderPatch {
    /// An empty patch.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Overrides the dash style.
    #[must_use]
    pub fn border_type(mut self, border_type: BorderType) -> Self {
        self.border_type = Some(border_type);
        self
    }

    /// Overrides the corner radii.
    #[must_use]
    pub fn radius(mut self, radius: impl Into<Operand<4>>) -> Self {
        self.radius = Some(radii(radius));
        self
    }

    /// Overrides the outline width.
    #[must_use]
    pub fn width(mut self, width: f64) -> Self {
        self.width = Some(width);
        self
    }

    /// Overrides the outline color.
    #[must_use]
    pub fn color(mut self, color: Color) -> Self {
        self.color = Some(color);
        self
    }

    fn apply_to(&self, border: &mut Border) {
        if let Some(t) = self.border_type {
            border.border_type = t;
        }
        if self.radius.is_some() {
            border.radius = self.radius;
        }
        if let Some(w) = self.width {
            border.width = w;
        }
        if let Some(c) = self.color {
            border.color = c;
        }
    }
}

fn radii(radius: impl Into<Operand<4>>) -> Vector4 {
    let mut r = Vector::splat(0.0);
    r.add(radius);
    r
}

/// A bitmap drawn from a URL-keyed source, with optional rounded corners and
/// outline.
///
/// The bitmap is looked up in the scene's
/// [`ImageCache`](crate::ImageCache) every frame. The first lookup of a URL
/// queues a load; until it completes nothing is drawn, and a failed load
/// keeps drawing nothing.
///
/// The border reacts to interaction like the element style does: the
/// `hover` patch applies while hovered and the `active` patch on top of it
/// while pressed.
#[derive(Clone, Debug)]
pub struct Image {
    src: String,
    preload: Vec<String>,
    /// Resting border.
    pub border: Border,
    /// Border overrides while hovered.
    pub hover: Option<BorderPatch>,
    /// Border overrides while pressed.
    pub active: Option<BorderPatch>,
}

impl Image {
    /// An image showing `src`.
    #[must_use]
    pub fn new(src: impl Into<String>) -> Self {
        Self {
            src: src.into(),
            preload: Vec::new(),
            border: Border::default(),
            hover: None,
            active: None,
        }
    }

    /// Current source URL.
    #[must_use]
    pub fn src(&self) -> &str {
        &self.src
    }

    /// Switches to another source. A preloaded source shows immediately.
    pub fn set_src(&mut self, src: impl Into<String>) {
        self.src = src.into();
    }

    /// Requests `urls` on the next draw so later [`set_src`](Self::set_src)
    /// calls can switch without waiting.
    #[must_use]
    pub fn preload<I, S>(mut self, urls: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.preload.extend(urls.into_iter().map(Into::into));
        self
    }

    /// Rounds the corners by a percentage of the width, either one value for
    /// all four or one per corner.
    #[must_use]
    pub fn with_border_radius(mut self, radius: impl Into<Operand<4>>) -> Self {
        self.border.radius = Some(radii(radius));
        self
    }

    /// Adds an outline.
    #[must_use]
    pub fn with_border(mut self, width: f64, color: Color, border_type: BorderType) -> Self {
        self.border.width = width;
        self.border.color = color;
        self.border.border_type = border_type;
        self
    }

    /// Sets the border overrides used while hovered.
    #[must_use]
    pub fn with_hover_border(mut self, patch: BorderPatch) -> Self {
        self.hover = Some(patch);
        self
    }

    /// Sets the border overrides used while pressed.
    #[must_use]
    pub fn with_active_border(mut self, patch: BorderPatch) -> Self {
        self.active = Some(patch);
        self
    }

    /// Border in effect for `states`.
    #[must_use]
    pub fn border_for(&self, states: PseudoState) -> Border {
        let mut border = self.border;
        if states.contains(PseudoState::HOVER) {
            if let Some(hover) = &self.hover {
                hover.apply_to(&mut border);
            }
        }
        if states.contains(PseudoState::ACTIVE) {
            if let Some(active) = &self.active {
                active.apply_to(&mut border);
            }
        }
        border
    }
}

impl Drawable for Image {
    fn draw(&mut self, cx: &mut DrawCx<'_>) {
        for url in self.preload.drain(..) {
            cx.images.request(&url);
        }
        let border = self.border_for(cx.states);
        let bounds = cx.size.to_rect();
        if let Some(path) = border.clip_path(cx.size) {
            cx.surface.clip(&path);
        }
        if let Some(bitmap) = cx.images.request(&self.src).bitmap().cloned() {
            cx.surface.draw_image(&bitmap, bounds);
        }
        if let Some(stroke) = border.stroke() {
            cx.surface.stroke_rect(bounds, border.color, &stroke);
        }
    }
}

impl Updatable for Image {
    fn update(&mut self, _dt: f64) {}
}
