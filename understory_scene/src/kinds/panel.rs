// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use kurbo::Stroke;
use peniko::Color;

use crate::{DrawCx, Drawable, Updatable};

/// A filled rectangle with an optional outline.
#[derive(Clone, Copy, Debug)]
pub struct Panel {
    /// Fill color.
    pub background: Color,
    /// Outline width and color.
    pub border: Option<(f64, Color)>,
}

impl Default for Panel {
    fn default() -> Self {
        Self::new()
    }
}

impl Panel {
    /// Default fill color.
    pub const BACKGROUND: Color = Color::from_rgba8(0x07, 0xAA, 0xB9, 0xFF);

    /// A panel with the default fill and no outline.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            background: Self::BACKGROUND,
            border: None,
        }
    }

    /// Replaces the fill color.
    #[must_use]
    pub const fn with_background(mut self, color: Color) -> Self {
        self.background = color;
        self
    }

    /// Adds an outline.
    #[must_use]
    pub const fn with_border(mut self, width: f64, color: Color) -> Self {
        self.border = Some((width, color));
        self
    }
}

impl Drawable for Panel {
    fn draw(&mut self, cx: &mut DrawCx<'_>) {
        let rect = cx.size.to_rect();
        cx.surface.fill_rect(rect, self.background);
        if let Some((width, color)) = self.border {
            if width > 0.0 {
                cx.surface.stroke_rect(rect, color, &Stroke::new(width));
            }
        }
    }
}

impl Updatable for Panel {
    fn update(&mut self, _dt: f64) {}
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{ImageCache, RecordingSurface, SurfaceOp};
    use kurbo::{Rect, Size};
    use understory_style::{ElementStyle, PseudoState};

    #[test]
    fn fills_its_box_then_outlines_it() {
        let mut surface = RecordingSurface::new();
        let mut images = ImageCache::new();
        let style = ElementStyle::default();
        let mut panel = Panel::new().with_border(2.0, Color::BLACK);
        panel.draw(&mut DrawCx {
            surface: &mut surface,
            size: Size::new(40.0, 20.0),
            style: &style,
            states: PseudoState::empty(),
            images: &mut images,
        });
        let ops = surface.ops();
        assert_eq!(ops.len(), 2);
        assert!(
            matches!(ops[0].op, SurfaceOp::FillRect(rect, _) if rect == Rect::new(0.0, 0.0, 40.0, 20.0)),
            "fill first"
        );
        assert!(
            matches!(&ops[1].op, SurfaceOp::StrokeRect(_, _, stroke) if stroke.width == 2.0),
            "outline last"
        );
    }
}
