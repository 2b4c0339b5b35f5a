// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=understory_scene --heading-base-level=0

//! Understory Scene: a retained element tree drawn onto an immediate-mode surface.
//!
//! Build a tree of styled, rectangular elements, attach callbacks, and call
//! [`Scene::cycle`] once per frame. The scene redraws every element onto a
//! [`Surface`], composing nested transforms (translation, rotation, scale and
//! pivot) under a movable [`Camera`], and hit tests pointer input against
//! exactly the transforms it drew with.
//!
//! ## Core Concepts
//!
//! ### Elements
//!
//! An [`Element`] is built detached: a kind (anything implementing
//! [`Drawable`] and [`Updatable`], such as [`Panel`] or [`Image`]), an
//! [`ElementStyle`](understory_style::ElementStyle), optional children and
//! callbacks. [`Scene::append_child`] moves it into the scene's arena and
//! returns an [`ElementId`]. [`Scene::remove`] hands it back.
//!
//! ### Geometry
//!
//! Placement and size are percentages of the canvas. Children with
//! [`Orientation::Inherit`](understory_style::Orientation::Inherit) draw in
//! their parent's space and are sized relative to it, compounding through
//! every inheriting ancestor. Children with
//! [`Orientation::Absolute`](understory_style::Orientation::Absolute) draw in
//! camera space after their parent. Each element's box maps to its parent
//! through
//!
//! `translate(center) · translate(pivot) · rotate(rotation) · translate(-pivot) · translate(-size / 2)`
//!
//! See [`Geometry`].
//!
//! ### Interaction
//!
//! Pointer input in client coordinates is normalized to canvas pixels and
//! dropped when it falls outside the canvas. Every element then runs its
//! [`InteractionState`](understory_event_state::interaction::InteractionState)
//! against the hit test and its callbacks fire for each edge. While an
//! element is hovered or pressed its `hover` and `active` style patches apply
//! for the frame, and their cursor requests settle into one cursor change per
//! frame ([`Scene::take_cursor_change`]).
//!
//! ### Host boundaries
//!
//! - [`Surface`]: the drawing target. [`RecordingSurface`] records operations
//!   for tests and headless runs.
//! - [`InputBus`]: a host input source the scene registers on with
//!   [`Scene::hook_listeners`] and drains with [`Scene::pump`].
//! - [`BitmapLoader`]: starts image loads; results come back through
//!   [`Scene::complete_image`] and live in a URL-keyed [`ImageCache`].
//! - [`FrameLimiter`]: an optional frame-rate ceiling for the host loop.
//!
//! ```rust
//! use kurbo::Point;
//! use understory_event_state::interaction::InteractionEvent;
//! use understory_scene::{Element, Panel, RecordingSurface, Scene};
//! use understory_style::{ElementStyle, StylePatch};
//!
//! let mut scene = Scene::new(); // 800×600 canvas
//! let button = scene.append_child(Element::new(
//!     Panel::new(),
//!     ElementStyle::builder()
//!         .left(40.0)
//!         .top(40.0)
//!         .width(20.0)
//!         .height(20.0)
//!         .cursor("pointer")
//!         .hover(StylePatch::new().opacity(0.8))
//!         .build(),
//! ));
//!
//! let mut surface = RecordingSurface::new();
//! scene.cycle(&mut surface, 16.0);
//!
//! scene.pointer_move(Point::new(400.0, 300.0));
//! scene.pointer_down(Point::new(400.0, 300.0));
//! let events = scene.pointer_up(Point::new(400.0, 300.0));
//! assert!(events.iter().any(|d| d.target == button && d.event == InteractionEvent::Click));
//!
//! scene.cycle(&mut surface, 16.0);
//! assert_eq!(scene.take_cursor_change().as_deref(), Some("pointer"));
//! ```
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

mod bitmap;
mod camera;
mod config;
mod element;
mod error;
mod frame;
mod geometry;
mod hooks;
mod id;
mod input;
mod kinds;
mod scene;
mod surface;

pub use bitmap::{Bitmap, BitmapLoader, ImageCache, ImageLoadError, ImageState};
pub use camera::Camera;
pub use config::SceneConfig;
pub use element::{
    DrawCx, Drawable, Element, ElementKind, KeyEvent, KeyHandler, PointerEvent, PointerHandler,
    Updatable,
};
pub use error::SceneError;
pub use frame::FrameLimiter;
pub use geometry::Geometry;
pub use hooks::{HookCx, HookId, HookRegistry, UpdateHook};
pub use id::ElementId;
pub use input::{InputBus, ListenerHandle, RawInput};
pub use kinds::{Border, BorderPatch, BorderType, Image, Panel};
pub use scene::{Dispatched, ElementRef, Scene};
pub use surface::{Recorded, RecordingSurface, Surface, SurfaceOp, SurfaceState};
