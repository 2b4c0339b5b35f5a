// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The immediate-mode drawing boundary and a recording implementation.

use alloc::sync::Arc;
use alloc::vec::Vec;

use kurbo::{Affine, BezPath, Rect, Stroke, Vec2};
use peniko::{BlendMode, Color};

use crate::Bitmap;

/// A canvas-like 2D drawing surface.
///
/// The surface keeps a current transform, alpha and composite mode, and a
/// stack that [`save`](Self::save) and [`restore`](Self::restore) push and
/// pop. Clips are part of the saved state. All geometry passed to the draw
/// methods is in the current transform's local space.
///
/// Only the state accessors and draw methods are required; the incremental
/// transform helpers compose through [`transform`](Self::transform) and
/// [`set_transform`](Self::set_transform).
pub trait Surface {
    /// Pushes the current state.
    fn save(&mut self);
    /// Pops to the most recently saved state. Unbalanced restores are ignored.
    fn restore(&mut self);

    /// Current transform.
    fn transform(&self) -> Affine;
    /// Replaces the current transform.
    fn set_transform(&mut self, transform: Affine);

    /// Resets the current transform to identity.
    fn reset_transform(&mut self) {
        self.set_transform(Affine::IDENTITY);
    }
    /// Post-multiplies the current transform by `transform`.
    fn concat(&mut self, transform: Affine) {
        let t = self.transform() * transform;
        self.set_transform(t);
    }
    /// Translates the current transform.
    fn translate(&mut self, offset: Vec2) {
        self.concat(Affine::translate(offset));
    }
    /// Rotates the current transform by `radians`.
    fn rotate(&mut self, radians: f64) {
        self.concat(Affine::rotate(radians));
    }
    /// Scales the current transform.
    fn scale(&mut self, sx: f64, sy: f64) {
        self.concat(Affine::scale_non_uniform(sx, sy));
    }

    /// Sets the global alpha applied to subsequent draws.
    fn set_alpha(&mut self, alpha: f64);
    /// Sets the composite mode applied to subsequent draws.
    fn set_blend(&mut self, blend: BlendMode);
    /// Intersects the clip with `path`.
    fn clip(&mut self, path: &BezPath);

    /// Fills `rect`.
    fn fill_rect(&mut self, rect: Rect, color: Color);
    /// Strokes the outline of `rect`.
    fn stroke_rect(&mut self, rect: Rect, color: Color, stroke: &Stroke);
    /// Fills `path`.
    fn fill_path(&mut self, path: &BezPath, color: Color);
    /// Strokes `path`.
    fn stroke_path(&mut self, path: &BezPath, color: Color, stroke: &Stroke);
    /// Draws `image` scaled into `dst`.
    fn draw_image(&mut self, image: &Arc<Bitmap>, dst: Rect);
}

/// Snapshot of the drawing state at the time of an operation.
#[derive(Clone, Debug, PartialEq)]
pub struct SurfaceState {
    /// Current transform.
    pub transform: Affine,
    /// Global alpha.
    pub alpha: f64,
    /// Composite mode.
    pub blend: BlendMode,
    /// Number of clips in effect.
    pub clip_depth: u32,
}

impl Default for SurfaceState {
    fn default() -> Self {
        Self {
            transform: Affine::IDENTITY,
            alpha: 1.0,
            blend: BlendMode::default(),
            clip_depth: 0,
        }
    }
}

/// Draw operation recorded by [`RecordingSurface`].
#[derive(Clone, Debug)]
pub enum SurfaceOp {
    /// Clip intersection.
    Clip(BezPath),
    /// Rectangle fill.
    FillRect(Rect, Color),
    /// Rectangle outline.
    StrokeRect(Rect, Color, Stroke),
    /// Path fill.
    FillPath(BezPath, Color),
    /// Path outline.
    StrokePath(BezPath, Color, Stroke),
    /// Image blit.
    DrawImage(Arc<Bitmap>, Rect),
}

/// An operation and the state it was applied with.
#[derive(Clone, Debug)]
pub struct Recorded {
    /// The operation.
    pub op: SurfaceOp,
    /// State when the operation was applied.
    pub state: SurfaceState,
}

/// A [`Surface`] that rasterizes nothing and records every operation.
///
/// It tracks save/restore, transform, alpha, composite and clip state exactly
/// as a canvas would, so tests can assert on what was drawn and where.
#[derive(Debug, Default)]
pub struct RecordingSurface {
    state: SurfaceState,
    stack: Vec<SurfaceState>,
    log: Vec<Recorded>,
}

impl RecordingSurface {
    /// An empty surface with identity state.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Recorded operations in the order they were applied.
    #[must_use]
    pub fn ops(&self) -> &[Recorded] {
        &self.log
    }

    /// Current state.
    #[must_use]
    pub fn state(&self) -> &SurfaceState {
        &self.state
    }

    /// Depth of the save stack.
    #[must_use]
    pub fn save_depth(&self) -> usize {
        self.stack.len()
    }

    /// Clears the log, keeping the current state.
    pub fn clear(&mut self) {
        self.log.clear();
    }

    /// Recorded rectangle fills as `(rect, transform)` pairs.
    pub fn filled_rects(&self) -> impl Iterator<Item = (Rect, Affine)> + '_ {
        self.log.iter().filter_map(|r| match &r.op {
            SurfaceOp::FillRect(rect, _) => Some((*rect, r.state.transform)),
            _ => None,
        })
    }

    fn record(&mut self, op: SurfaceOp) {
        self.log.push(Recorded {
            op,
            state: self.state.clone(),
        });
    }
}

impl Surface for RecordingSurface {
    fn save(&mut self) {
        self.stack.push(self.state.clone());
    }

    fn restore(&mut self) {
        if let Some(prev) = self.stack.pop() {
            self.state = prev;
        }
    }

    fn transform(&self) -> Affine {
        self.state.transform
    }

    fn set_transform(&mut self, transform: Affine) {
        self.state.transform = transform;
    }

    fn set_alpha(&mut self, alpha: f64) {
        self.state.alpha = alpha;
    }

    fn set_blend(&mut self, blend: BlendMode) {
        self.state.blend = blend;
    }

    fn clip(&mut self, path: &BezPath) {
        self.record(SurfaceOp::Clip(path.clone()));
        self.state.clip_depth += 1;
    }

    fn fill_rect(&mut self, rect: Rect, color: Color) {
        self.record(SurfaceOp::FillRect(rect, color));
    }

    fn stroke_rect(&mut self, rect: Rect, color: Color, stroke: &Stroke) {
        self.record(SurfaceOp::StrokeRect(rect, color, stroke.clone()));
    }

    fn fill_path(&mut self, path: &BezPath, color: Color) {
        self.record(SurfaceOp::FillPath(path.clone(), color));
    }

    fn stroke_path(&mut self, path: &BezPath, color: Color, stroke: &Stroke) {
        self.record(SurfaceOp::StrokePath(path.clone(), color, stroke.clone()));
    }

    fn draw_image(&mut self, image: &Arc<Bitmap>, dst: Rect) {
        self.record(SurfaceOp::DrawImage(Arc::clone(image), dst));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn restore_pops_transform_and_alpha() {
        let mut s = RecordingSurface::new();
        s.save();
        s.translate(Vec2::new(10.0, 0.0));
        s.set_alpha(0.5);
        s.fill_rect(Rect::new(0.0, 0.0, 1.0, 1.0), Color::WHITE);
        s.restore();
        s.fill_rect(Rect::new(0.0, 0.0, 1.0, 1.0), Color::BLACK);

        let ops = s.ops();
        assert_eq!(ops[0].state.transform, Affine::translate((10.0, 0.0)));
        assert_eq!(ops[0].state.alpha, 0.5);
        assert_eq!(ops[1].state, SurfaceState::default());
    }

    #[test]
    fn unbalanced_restore_is_ignored() {
        let mut s = RecordingSurface::new();
        s.rotate(1.0);
        s.restore();
        assert_eq!(s.transform(), Affine::rotate(1.0));
        assert_eq!(s.save_depth(), 0);
    }
}
