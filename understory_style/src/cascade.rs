// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Per-frame resolution of hover and active overlays.

use alloc::string::String;

use crate::ElementStyle;

bitflags::bitflags! {
    /// Interaction states that select style overlays.
    #[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
    pub struct PseudoState: u8 {
        /// Pointer is over the element.
        const HOVER  = 0b0000_0001;
        /// Element is pressed.
        const ACTIVE = 0b0000_0010;
    }
}

/// Resting style plus an optional resolved override.
///
/// The resting style is only changed through [`base_mut`](Self::base_mut).
/// [`begin`](Self::begin) computes the override fresh from the resting style
/// every time, so overlays can never accumulate, and [`end`](Self::end)
/// drops it again.
///
/// ```rust
/// use understory_style::{ElementStyle, PseudoState, StyleCascade, StylePatch};
///
/// let base = ElementStyle::builder()
///     .opacity(1.0)
///     .hover(StylePatch::new().opacity(0.5))
///     .active(StylePatch::new().opacity(0.25).cursor("grabbing"))
///     .build();
/// let mut cascade = StyleCascade::new(base.clone());
///
/// cascade.begin(PseudoState::HOVER | PseudoState::ACTIVE);
/// assert_eq!(cascade.style().opacity, 0.25);
/// assert_eq!(cascade.cursor(), Some("grabbing"));
///
/// cascade.end();
/// assert_eq!(cascade.style(), &base);
/// ```
#[derive(Clone, Debug, Default)]
pub struct StyleCascade {
    base: ElementStyle,
    resolved: Option<ElementStyle>,
    cursor: Option<String>,
}

impl StyleCascade {
    /// Wraps a resting style.
    #[must_use]
    pub fn new(base: ElementStyle) -> Self {
        Self {
            base,
            resolved: None,
            cursor: None,
        }
    }

    /// The resting style.
    #[must_use]
    pub fn base(&self) -> &ElementStyle {
        &self.base
    }

    /// Mutable access to the resting style.
    ///
    /// Changes show up in [`style`](Self::style) once the current cascade
    /// ends or the next one begins.
    pub fn base_mut(&mut self) -> &mut ElementStyle {
        &mut self.base
    }

    /// Replaces the resting style and drops any override.
    pub fn set_base(&mut self, base: ElementStyle) {
        self.base = base;
        self.end();
    }

    /// The style readers should use: the override while a cascade is
    /// running, otherwise the resting style.
    #[must_use]
    pub fn style(&self) -> &ElementStyle {
        self.resolved.as_ref().unwrap_or(&self.base)
    }

    /// Returns true between [`begin`](Self::begin) and [`end`](Self::end).
    #[must_use]
    pub fn is_resolving(&self) -> bool {
        self.resolved.is_some()
    }

    /// Cursor requested by the current cascade, if any.
    #[must_use]
    pub fn cursor(&self) -> Option<&str> {
        self.cursor.as_deref()
    }

    /// Resolves the override for `states`.
    ///
    /// Precedence is active over hover over the resting style. The cursor
    /// request follows the same order: the resting `cursor` and then
    /// `hover.cursor` apply while hovered, and `active.cursor` wins while
    /// active. Returns the cursor request.
    pub fn begin(&mut self, states: PseudoState) -> Option<&str> {
        let mut cursor = None;
        let mut resolved = self.base.clone();

        if states.contains(PseudoState::HOVER) {
            cursor.clone_from(&self.base.cursor);
            if let Some(hover) = &self.base.hover {
                if hover.cursor.is_some() {
                    cursor.clone_from(&hover.cursor);
                }
                hover.apply_to(&mut resolved);
            }
        }

        if states.contains(PseudoState::ACTIVE) {
            if let Some(active) = &self.base.active {
                if active.cursor.is_some() {
                    cursor.clone_from(&active.cursor);
                }
                active.apply_to(&mut resolved);
            }
        }

        self.resolved = Some(resolved);
        self.cursor = cursor;
        self.cursor.as_deref()
    }

    /// Drops the override, restoring the resting style for readers.
    pub fn end(&mut self) {
        self.resolved = None;
        self.cursor = None;
    }

    /// Unwraps the resting style, discarding any override.
    #[must_use]
    pub fn into_base(self) -> ElementStyle {
        self.base
    }
}

impl From<ElementStyle> for StyleCascade {
    fn from(base: ElementStyle) -> Self {
        Self::new(base)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{StyleBuilder, StylePatch};

    fn styled() -> ElementStyle {
        StyleBuilder::new()
            .width(30.0)
            .height(20.0)
            .rotation(10.0)
            .cursor("pointer")
            .hover(StylePatch::new().width(35.0).rotation(15.0))
            .active(StylePatch::new().rotation(45.0).opacity(0.5))
            .build()
    }

    #[test]
    fn precedence_is_active_over_hover() {
        let mut c = StyleCascade::new(styled());
        c.begin(PseudoState::HOVER | PseudoState::ACTIVE);
        let s = c.style();
        assert_eq!(s.width, 35.0);
        assert_eq!(s.rotation, 45.0);
        assert_eq!(s.opacity, 0.5);
        c.end();
    }

    #[test]
    fn repeated_cycles_restore_exact_base() {
        let base = styled();
        let mut c = StyleCascade::new(base.clone());
        let sequence = [
            PseudoState::HOVER,
            PseudoState::HOVER | PseudoState::ACTIVE,
            PseudoState::ACTIVE,
            PseudoState::empty(),
            PseudoState::HOVER,
        ];
        for states in sequence {
            c.begin(states);
            assert!(c.is_resolving(), "cascade running");
            c.end();
            assert_eq!(c.style(), &base);
        }
        assert_eq!(c.base(), &base);
    }

    #[test]
    fn cursor_requests_follow_state() {
        let mut c = StyleCascade::new(styled());
        assert_eq!(c.begin(PseudoState::empty()), None);
        assert_eq!(c.begin(PseudoState::HOVER), Some("pointer"));

        c.base_mut().hover = Some(StylePatch::new().cursor("crosshair"));
        assert_eq!(c.begin(PseudoState::HOVER), Some("crosshair"));

        c.base_mut().active = Some(StylePatch::new().cursor("grabbing"));
        assert_eq!(c.begin(PseudoState::ACTIVE), Some("grabbing"));
        // A plain base cursor does not apply without hover.
        c.base_mut().active = None;
        assert_eq!(c.begin(PseudoState::ACTIVE), None);
        c.end();
        assert_eq!(c.cursor(), None);
    }

    #[test]
    fn base_edits_apply_on_next_begin() {
        let mut c = StyleCascade::new(styled());
        c.begin(PseudoState::empty());
        c.base_mut().left = 12.0;
        assert_eq!(c.style().left, 0.0);
        c.begin(PseudoState::empty());
        assert_eq!(c.style().left, 12.0);
    }
}
