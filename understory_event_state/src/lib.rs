// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=understory_event_state --heading-base-level=0

//! Understory Event State: Common event state managers for UI interactions.
//!
//! This crate provides small, focused state machines for interaction patterns
//! that need state carried across multiple events:
//!
//! - [`interaction`]: Per-element hover, press and click tracking
//! - [`hotkey`]: The ordered set of keys currently held down
//!
//! ## Design Philosophy
//!
//! Each state manager is designed to be:
//!
//! - **Minimal and focused**: Each handles one specific interaction pattern
//! - **Stateful but simple**: Track just enough state to compute transitions
//! - **Integration-friendly**: Work with any hit testing or event source
//!
//! The crate does not assume any particular scene graph. The managers accept
//! pre-computed information (like whether the pointer is inside an element)
//! and produce transition events that applications dispatch to callbacks.
//!
//! ## Usage Patterns
//!
//! ### Interaction Tracking
//!
//! Use [`interaction::InteractionState`] to turn hit test results into
//! edge-triggered events:
//!
//! ```rust
//! use understory_event_state::interaction::{InteractionEvent, InteractionState};
//!
//! let mut button = InteractionState::new();
//!
//! // Press inside, drag out, release outside: the press ends, no click.
//! button.on_down(true);
//! let events = button.on_up(false);
//! assert_eq!(events.as_slice(), &[InteractionEvent::ActiveEnd]);
//! ```
//!
//! ### Held Keys
//!
//! Use [`hotkey::HotkeyStack`] to track which keys are down, for chords such
//! as `control` + `s`:
//!
//! ```rust
//! use understory_event_state::hotkey::HotkeyStack;
//!
//! let mut keys = HotkeyStack::new();
//! keys.press("Control");
//! keys.press("s");
//! assert_eq!(keys.keys(), ["control", "s"]);
//! ```
//!
//! This crate is `no_std` compatible (with `alloc`) for all modules.

#![no_std]

extern crate alloc;

pub mod hotkey;
pub mod interaction;
