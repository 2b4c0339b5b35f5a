// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=understory_style --heading-base-level=0

//! Understory Style: element style records and hover/active cascades.
//!
//! ## Core Concepts
//!
//! ### Element styles
//!
//! [`ElementStyle`] is a fully populated record of an element's placement,
//! size, rotation, opacity, pivot, orientation, composite mode and cursor.
//! Build one with [`StyleBuilder`]; every field you leave unset takes its
//! default, so readers never deal with missing fields.
//!
//! ### Overlays
//!
//! [`StylePatch`] is a partial style. A style can carry a `hover` patch and
//! an `active` patch that apply while the element is in that state.
//!
//! ### Cascades
//!
//! [`StyleCascade`] owns an element's resting style and, for the duration of
//! a frame, a resolved override. The override is recomputed from the resting
//! style on every [`StyleCascade::begin`], with precedence
//!
//! **active → hover → resting**
//!
//! and dropped on [`StyleCascade::end`]. The resting style is never written
//! by the cascade, so any sequence of hover and active frames ends with the
//! exact style it started with.
//!
//! ```rust
//! use understory_style::{ElementStyle, PseudoState, StyleCascade, StylePatch};
//!
//! let style = ElementStyle::builder()
//!     .width(50.0)
//!     .hover(StylePatch::new().width(60.0))
//!     .build();
//! let mut cascade = StyleCascade::new(style);
//!
//! cascade.begin(PseudoState::HOVER);
//! assert_eq!(cascade.style().width, 60.0);
//! cascade.end();
//! assert_eq!(cascade.style().width, 50.0);
//! ```
//!
//! ### Parsing
//!
//! [`parse_color`] and [`parse_blend`] turn CSS-like strings into
//! [`peniko::Color`] and [`peniko::BlendMode`] values, returning
//! [`ParseError`] for malformed input.
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

mod cascade;
mod parse;
mod style;

pub use cascade::{PseudoState, StyleCascade};
pub use parse::{ParseError, parse_blend, parse_color};
pub use style::{ElementStyle, Orientation, Scale, StyleBuilder, StylePatch};
