// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The style record, partial overlays, and the builder that fills defaults.

use alloc::string::String;

use peniko::BlendMode;
use understory_vector::Vector;

/// How a child element relates to its parent's coordinate space.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Orientation {
    /// Draw inside the parent's transformed space and size relative to the
    /// parent's box.
    #[default]
    Inherit,
    /// Draw in root (camera) space and size relative to the canvas.
    Absolute,
}

/// Per-axis scale factor.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Scale {
    /// Horizontal factor.
    pub x: f64,
    /// Vertical factor.
    pub y: f64,
}

impl Scale {
    /// No scaling.
    pub const IDENTITY: Self = Self { x: 1.0, y: 1.0 };

    /// Same factor on both axes.
    #[must_use]
    pub const fn uniform(s: f64) -> Self {
        Self { x: s, y: s }
    }

    /// Factors as a two-component vector.
    #[must_use]
    pub const fn to_vector(self) -> Vector<2> {
        Vector::new([self.x, self.y])
    }
}

impl Default for Scale {
    fn default() -> Self {
        Self::IDENTITY
    }
}

impl From<f64> for Scale {
    fn from(s: f64) -> Self {
        Self::uniform(s)
    }
}

impl From<[f64; 2]> for Scale {
    fn from([x, y]: [f64; 2]) -> Self {
        Self { x, y }
    }
}

/// A fully populated element style.
///
/// Positions and sizes are percentages of the percentage base (the canvas,
/// or the parent's box for [`Orientation::Inherit`] sizes). Rotation is in
/// degrees. `pivot` is normalized to `-1..=1` per axis with `0` at the
/// center.
///
/// `hover` and `active` hold partial overlays that a
/// [`StyleCascade`](crate::StyleCascade) applies while the element is in
/// that state. They are never applied to the stored record itself.
#[derive(Clone, Debug, PartialEq)]
pub struct ElementStyle {
    /// Distance from the top, in percent.
    pub top: f64,
    /// Distance from the left, in percent.
    pub left: f64,
    /// Rotation in degrees.
    pub rotation: f64,
    /// Scale applied to the resolved dimensions.
    pub scale: Scale,
    /// Width in percent.
    pub width: f64,
    /// Height in percent.
    pub height: f64,
    /// Opacity in `0..=1`.
    pub opacity: f64,
    /// Rotation pivot, normalized per axis.
    pub pivot: Vector<2>,
    /// Transition duration in milliseconds. Stored, not interpreted.
    pub transition: Option<f64>,
    /// Composite mode used while drawing this element and its inherit children.
    pub blend: Option<BlendMode>,
    /// Coordinate space relationship with the parent.
    pub orientation: Orientation,
    /// Cursor requested while the element is hovered.
    pub cursor: Option<String>,
    /// Overlay applied while hovered.
    pub hover: Option<StylePatch>,
    /// Overlay applied while active.
    pub active: Option<StylePatch>,
}

impl Default for ElementStyle {
    fn default() -> Self {
        Self {
            top: 0.0,
            left: 0.0,
            rotation: 0.0,
            scale: Scale::IDENTITY,
            width: 0.0,
            height: 0.0,
            opacity: 1.0,
            pivot: Vector::new([0.0, 0.0]),
            transition: None,
            blend: None,
            orientation: Orientation::Inherit,
            cursor: None,
            hover: None,
            active: None,
        }
    }
}

impl ElementStyle {
    /// Starts a builder over the default style.
    #[must_use]
    pub fn builder() -> StyleBuilder {
        StyleBuilder::new()
    }

    /// Returns a copy with `patch` laid over it.
    #[must_use]
    pub fn overlaid(&self, patch: &StylePatch) -> Self {
        let mut out = self.clone();
        patch.apply_to(&mut out);
        out
    }
}

/// A partial style. Set fields replace the matching [`ElementStyle`] field;
/// unset fields leave it alone.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct StylePatch {
    /// See [`ElementStyle::top`].
    pub top: Option<f64>,
    /// See [`ElementStyle::left`].
    pub left: Option<f64>,
    /// See [`ElementStyle::rotation`].
    pub rotation: Option<f64>,
    /// See [`ElementStyle::scale`].
    pub scale: Option<Scale>,
    /// See [`ElementStyle::width`].
    pub width: Option<f64>,
    /// See [`ElementStyle::height`].
    pub height: Option<f64>,
    /// See [`ElementStyle::opacity`].
    pub opacity: Option<f64>,
    /// See [`ElementStyle::pivot`].
    pub pivot: Option<Vector<2>>,
    /// See [`ElementStyle::transition`].
    pub transition: Option<f64>,
    /// See [`ElementStyle::blend`].
    pub blend: Option<BlendMode>,
    /// See [`ElementStyle::orientation`].
    pub orientation: Option<Orientation>,
    /// See [`ElementStyle::cursor`].
    pub cursor: Option<String>,
}

macro_rules! patch_setters {
    ($($(#[$doc:meta])* $name:ident: $ty:ty),* $(,)?) => {
        $(
            $(#[$doc])*
            #[must_use]
            pub fn $name(mut self, value: impl Into<$ty>) -> Self {
                self.$name = Some(value.into());
                self
            }
        )*
    };
}

impl StylePatch {
    /// An empty patch.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    patch_setters! {
        /// Overrides `top`.
        top: f64,
        /// Overrides `left`.
        left: f64,
        /// Overrides `rotation`.
        rotation: f64,
        /// Overrides `scale`.
        scale: Scale,
        /// Overrides `width`.
        width: f64,
        /// Overrides `height`.
        height: f64,
        /// Overrides `opacity`.
        opacity: f64,
        /// Overrides `pivot`.
        pivot: Vector<2>,
        /// Overrides `transition`.
        transition: f64,
        /// Overrides `blend`.
        blend: BlendMode,
        /// Overrides `orientation`.
        orientation: Orientation,
        /// Overrides `cursor`.
        cursor: String,
    }

    /// Returns true if no field is set.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }

    /// Lays this patch over `style` as a shallow overlay.
    pub fn apply_to(&self, style: &mut ElementStyle) {
        fn put<T: Clone>(dst: &mut T, src: &Option<T>) {
            if let Some(v) = src {
                dst.clone_from(v);
            }
        }
        fn put_opt<T: Clone>(dst: &mut Option<T>, src: &Option<T>) {
            if src.is_some() {
                dst.clone_from(src);
            }
        }
        put(&mut style.top, &self.top);
        put(&mut style.left, &self.left);
        put(&mut style.rotation, &self.rotation);
        put(&mut style.scale, &self.scale);
        put(&mut style.width, &self.width);
        put(&mut style.height, &self.height);
        put(&mut style.opacity, &self.opacity);
        put(&mut style.pivot, &self.pivot);
        put_opt(&mut style.transition, &self.transition);
        put_opt(&mut style.blend, &self.blend);
        put(&mut style.orientation, &self.orientation);
        put_opt(&mut style.cursor, &self.cursor);
    }
}

/// Builds an [`ElementStyle`], filling every unset field with its default.
///
/// `right` and `bottom` are shorthands: when set they replace `left` with
/// `100 - right` and `top` with `100 - bottom`.
///
/// ```rust
/// use understory_style::{ElementStyle, Orientation, StylePatch};
///
/// let style = ElementStyle::builder()
///     .right(25.0)
///     .width(50.0)
///     .height(10.0)
///     .hover(StylePatch::new().opacity(0.5).cursor("pointer"))
///     .build();
///
/// assert_eq!(style.left, 75.0);
/// assert_eq!(style.top, 0.0);
/// assert_eq!(style.orientation, Orientation::Inherit);
/// assert_eq!(style.hover.unwrap().opacity, Some(0.5));
/// ```
#[derive(Clone, Debug, Default)]
pub struct StyleBuilder {
    patch: StylePatch,
    right: Option<f64>,
    bottom: Option<f64>,
    hover: Option<StylePatch>,
    active: Option<StylePatch>,
}

impl StyleBuilder {
    /// A builder with nothing set.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets `top`.
    #[must_use]
    pub fn top(mut self, v: f64) -> Self {
        self.patch.top = Some(v);
        self
    }

    /// Sets `left`.
    #[must_use]
    pub fn left(mut self, v: f64) -> Self {
        self.patch.left = Some(v);
        self
    }

    /// Sets `left` to `100 - v`.
    #[must_use]
    pub fn right(mut self, v: f64) -> Self {
        self.right = Some(v);
        self
    }

    /// Sets `top` to `100 - v`.
    #[must_use]
    pub fn bottom(mut self, v: f64) -> Self {
        self.bottom = Some(v);
        self
    }

    /// Sets `rotation` in degrees.
    #[must_use]
    pub fn rotation(mut self, degrees: f64) -> Self {
        self.patch.rotation = Some(degrees);
        self
    }

    /// Sets `scale`, uniform or per-axis.
    #[must_use]
    pub fn scale(mut self, scale: impl Into<Scale>) -> Self {
        self.patch.scale = Some(scale.into());
        self
    }

    /// Sets `width`.
    #[must_use]
    pub fn width(mut self, v: f64) -> Self {
        self.patch.width = Some(v);
        self
    }

    /// Sets `height`.
    #[must_use]
    pub fn height(mut self, v: f64) -> Self {
        self.patch.height = Some(v);
        self
    }

    /// Sets `opacity`.
    #[must_use]
    pub fn opacity(mut self, v: f64) -> Self {
        self.patch.opacity = Some(v);
        self
    }

    /// Sets the normalized rotation pivot.
    #[must_use]
    pub fn pivot(mut self, pivot: impl Into<Vector<2>>) -> Self {
        self.patch.pivot = Some(pivot.into());
        self
    }

    /// Sets the transition duration.
    #[must_use]
    pub fn transition(mut self, ms: f64) -> Self {
        self.patch.transition = Some(ms);
        self
    }

    /// Sets the composite mode.
    #[must_use]
    pub fn blend(mut self, blend: impl Into<BlendMode>) -> Self {
        self.patch.blend = Some(blend.into());
        self
    }

    /// Sets the orientation.
    #[must_use]
    pub fn orientation(mut self, orientation: Orientation) -> Self {
        self.patch.orientation = Some(orientation);
        self
    }

    /// Sets the hover cursor.
    #[must_use]
    pub fn cursor(mut self, cursor: impl Into<String>) -> Self {
        self.patch.cursor = Some(cursor.into());
        self
    }

    /// Sets the hover overlay.
    #[must_use]
    pub fn hover(mut self, patch: StylePatch) -> Self {
        self.hover = Some(patch);
        self
    }

    /// Sets the active overlay.
    #[must_use]
    pub fn active(mut self, patch: StylePatch) -> Self {
        self.active = Some(patch);
        self
    }

    /// Merges everything set so far against the defaults.
    #[must_use]
    pub fn build(self) -> ElementStyle {
        let mut style = ElementStyle::default();
        self.patch.apply_to(&mut style);
        if let Some(right) = self.right {
            style.left = 100.0 - right;
        }
        if let Some(bottom) = self.bottom {
            style.top = 100.0 - bottom;
        }
        style.hover = self.hover;
        style.active = self.active;
        style
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_fully_populated() {
        let s = ElementStyle::default();
        assert_eq!(s.scale, Scale::IDENTITY);
        assert_eq!(s.opacity, 1.0);
        assert_eq!(s.pivot.to_array(), [0.0, 0.0]);
        assert_eq!(s.orientation, Orientation::Inherit);
        assert!(s.hover.is_none() && s.active.is_none(), "no overlays by default");
    }

    #[test]
    fn shorthand_wins_over_explicit_edges() {
        let s = StyleBuilder::new().left(10.0).right(30.0).top(5.0).bottom(0.0).build();
        assert_eq!(s.left, 70.0);
        assert_eq!(s.top, 100.0);
    }

    #[test]
    fn overlay_is_shallow() {
        let base = StyleBuilder::new().width(40.0).opacity(0.9).cursor("move").build();
        let patch = StylePatch::new().opacity(0.2).scale([2.0, 3.0]);
        let out = base.overlaid(&patch);
        assert_eq!(out.opacity, 0.2);
        assert_eq!(out.scale, Scale { x: 2.0, y: 3.0 });
        assert_eq!(out.width, 40.0);
        assert_eq!(out.cursor.as_deref(), Some("move"));
        assert!(StylePatch::new().is_empty(), "fresh patch");
        assert!(!patch.is_empty(), "patch with fields");
    }
}
