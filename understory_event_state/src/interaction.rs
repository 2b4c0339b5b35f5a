// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Hover, press and click tracking for a single element.
//!
//! ## Usage
//!
//! 1) Hit test the pointer against the element yourself.
//! 2) Feed the result into [`InteractionState::on_move`],
//!    [`InteractionState::on_down`] or [`InteractionState::on_up`].
//! 3) Dispatch the returned [`InteractionEvent`]s in order.
//!
//! ## Transitions
//!
//! | Input | Condition | Events |
//! |---|---|---|
//! | move | inside, not hovered | `Enter`, `Move` |
//! | move | inside, hovered | `Move` |
//! | move | outside, hovered | `Exit` |
//! | down | inside | `ActiveStart` (if not active), `Down`; arms the click |
//! | down | outside | nothing; the click stays unarmed |
//! | up | was active | `ActiveEnd`, wherever the pointer is |
//! | up | inside | `Up`, then `Click` if the click was armed |
//!
//! Every up disarms the click, so pressing inside, dragging out and
//! releasing outside resets the element without clicking it.
//!
//! ## Minimal example
//!
//! ```
//! use understory_event_state::interaction::{InteractionEvent, InteractionState, Phase};
//!
//! let mut state = InteractionState::new();
//!
//! assert_eq!(state.on_move(true).as_slice(), &[InteractionEvent::Enter, InteractionEvent::Move]);
//! assert_eq!(
//!     state.on_down(true).as_slice(),
//!     &[InteractionEvent::ActiveStart, InteractionEvent::Down]
//! );
//! assert_eq!(state.phase(), Phase::Active);
//! assert_eq!(
//!     state.on_up(true).as_slice(),
//!     &[InteractionEvent::ActiveEnd, InteractionEvent::Up, InteractionEvent::Click]
//! );
//! assert_eq!(state.phase(), Phase::Hovered);
//! ```

use smallvec::SmallVec;

/// Edge-triggered interaction events, in the order they should be dispatched.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum InteractionEvent {
    /// Pointer moved onto the element.
    Enter,
    /// Pointer moved off the element.
    Exit,
    /// Pointer moved while over the element.
    Move,
    /// Element became pressed.
    ActiveStart,
    /// Button pressed over the element.
    Down,
    /// Element stopped being pressed.
    ActiveEnd,
    /// Button released over the element.
    Up,
    /// A press and release both landed on the element.
    Click,
}

/// Events produced by a single input, inline for the common case.
pub type InteractionEvents = SmallVec<[InteractionEvent; 3]>;

/// Coarse interaction phase, for styling.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Phase {
    /// Neither hovered nor pressed.
    #[default]
    Idle,
    /// Hovered and not pressed.
    Hovered,
    /// Pressed. May or may not be hovered.
    Active,
}

/// Per-element interaction state.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct InteractionState {
    hovered: bool,
    active: bool,
    click_armed: bool,
}

impl InteractionState {
    /// Idle state.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            hovered: false,
            active: false,
            click_armed: false,
        }
    }

    /// Returns true while the pointer is over the element.
    #[must_use]
    pub const fn is_hovered(&self) -> bool {
        self.hovered
    }

    /// Returns true while the element is pressed.
    #[must_use]
    pub const fn is_active(&self) -> bool {
        self.active
    }

    /// Returns true if a release over the element would click it.
    #[must_use]
    pub const fn is_click_armed(&self) -> bool {
        self.click_armed
    }

    /// Coarse phase derived from the flags.
    #[must_use]
    pub const fn phase(&self) -> Phase {
        if self.active {
            Phase::Active
        } else if self.hovered {
            Phase::Hovered
        } else {
            Phase::Idle
        }
    }

    /// Pointer moved; `inside` is the hit test result.
    pub fn on_move(&mut self, inside: bool) -> InteractionEvents {
        let mut out = InteractionEvents::new();
        if inside {
            if !self.hovered {
                self.hovered = true;
                out.push(InteractionEvent::Enter);
            }
            out.push(InteractionEvent::Move);
        } else if self.hovered {
            self.hovered = false;
            out.push(InteractionEvent::Exit);
        }
        out
    }

    /// Button pressed; `inside` is the hit test result.
    pub fn on_down(&mut self, inside: bool) -> InteractionEvents {
        let mut out = InteractionEvents::new();
        if !inside {
            return out;
        }
        if !self.active {
            self.active = true;
            out.push(InteractionEvent::ActiveStart);
        }
        out.push(InteractionEvent::Down);
        self.click_armed = true;
        out
    }

    /// Button released; `inside` is the hit test result.
    pub fn on_up(&mut self, inside: bool) -> InteractionEvents {
        let mut out = InteractionEvents::new();
        let armed = core::mem::take(&mut self.click_armed);
        if core::mem::take(&mut self.active) {
            out.push(InteractionEvent::ActiveEnd);
        }
        if inside {
            out.push(InteractionEvent::Up);
            if armed {
                out.push(InteractionEvent::Click);
            }
        }
        out
    }

    /// Forget everything, for example when the element is detached.
    pub fn reset(&mut self) {
        *self = Self::new();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use InteractionEvent::*;

    #[test]
    fn hover_is_edge_triggered() {
        let mut s = InteractionState::new();
        assert!(s.on_move(false).is_empty(), "no hover to leave");
        assert_eq!(s.on_move(true).as_slice(), &[Enter, Move]);
        assert_eq!(s.on_move(true).as_slice(), &[Move]);
        assert_eq!(s.on_move(false).as_slice(), &[Exit]);
        assert!(s.on_move(false).is_empty(), "no hover to leave");
        assert_eq!(s.on_move(true).as_slice(), &[Enter, Move]);
    }

    #[test]
    fn click_requires_down_and_up_inside() {
        let mut s = InteractionState::new();
        s.on_down(true);
        let up = s.on_up(true);
        assert_eq!(up.iter().filter(|e| **e == Click).count(), 1);

        // Nothing left armed for a second release.
        assert_eq!(s.on_up(true).as_slice(), &[Up]);
    }

    #[test]
    fn release_outside_resets_without_click() {
        let mut s = InteractionState::new();
        s.on_down(true);
        assert!(s.is_click_armed(), "armed by inside press");
        assert_eq!(s.on_up(false).as_slice(), &[ActiveEnd]);
        assert_eq!(s.phase(), Phase::Idle);
        assert!(!s.is_click_armed(), "disarmed by any release");
    }

    #[test]
    fn press_outside_never_arms() {
        let mut s = InteractionState::new();
        assert!(s.on_down(false).is_empty(), "outside press is ignored");
        assert!(!s.is_active(), "outside press");
        assert_eq!(s.on_up(true).as_slice(), &[Up]);
    }

    #[test]
    fn second_press_does_not_restart_active() {
        let mut s = InteractionState::new();
        assert_eq!(s.on_down(true).as_slice(), &[ActiveStart, Down]);
        assert_eq!(s.on_down(true).as_slice(), &[Down]);
        s.reset();
        assert_eq!(s, InteractionState::new());
    }
}
