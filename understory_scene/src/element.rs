// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Element kinds, detached elements, and their callbacks.

use alloc::boxed::Box;
use alloc::string::String;
use alloc::vec::Vec;
use core::any::Any;
use core::fmt;

use kurbo::{Point, Size};
use understory_event_state::interaction::InteractionEvent;
use understory_style::{ElementStyle, PseudoState};

use crate::hooks::{HookCx, HookId, HookRegistry};
use crate::{ImageCache, Surface};

/// Everything an element kind needs to draw itself.
///
/// The surface transform is already the element's local space: the box spans
/// `(0, 0)` to `size`.
pub struct DrawCx<'a> {
    /// Target surface.
    pub surface: &'a mut dyn Surface,
    /// Resolved element size in local units.
    pub size: Size,
    /// Resolved style for this frame.
    pub style: &'a ElementStyle,
    /// Interaction states the style was resolved for.
    pub states: PseudoState,
    /// Shared image sources.
    pub images: &'a mut ImageCache,
}

impl fmt::Debug for DrawCx<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DrawCx")
            .field("size", &self.size)
            .field("style", &self.style)
            .field("states", &self.states)
            .finish_non_exhaustive()
    }
}

/// Draws an element's content.
pub trait Drawable {
    /// Draws into `cx.surface` within the box `(0, 0)..cx.size`.
    fn draw(&mut self, cx: &mut DrawCx<'_>);
}

/// Advances an element's own state once per frame.
pub trait Updatable {
    /// Called before drawing with the milliseconds since the previous frame.
    fn update(&mut self, dt: f64);
}

/// A concrete element type: anything that can both draw and update.
///
/// Implemented automatically; downcast through
/// [`Element::kind`] or [`Scene::kind`](crate::Scene::kind).
pub trait ElementKind: Drawable + Updatable + Any {}

impl<T: Drawable + Updatable + Any> ElementKind for T {}

/// A pointer event as seen by one element.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PointerEvent {
    /// What happened.
    pub kind: InteractionEvent,
    /// Pointer position in canvas pixels.
    pub position: Point,
    /// Pointer position in the element's local box space, if the element
    /// has been drawn with an invertible transform.
    pub local: Option<Point>,
}

/// A keyboard event.
#[derive(Clone, Copy, Debug)]
pub struct KeyEvent<'a> {
    /// Key identifier as reported by the host.
    pub key: &'a str,
    /// Keys held after this event, lowercased, oldest first.
    pub held: &'a [String],
}

/// Boxed pointer callback.
pub type PointerHandler = Box<dyn FnMut(&PointerEvent)>;
/// Boxed keyboard callback.
pub type KeyHandler = Box<dyn FnMut(&KeyEvent<'_>)>;

#[derive(Default)]
pub(crate) struct Handlers {
    pointer: Vec<(InteractionEvent, PointerHandler)>,
    key_down: Vec<KeyHandler>,
    key_up: Vec<KeyHandler>,
}

impl fmt::Debug for Handlers {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Handlers")
            .field(
                "pointer",
                &self.pointer.iter().map(|(k, _)| k).collect::<Vec<_>>(),
            )
            .field("key_down", &self.key_down.len())
            .field("key_up", &self.key_up.len())
            .finish()
    }
}

impl Handlers {
    pub(crate) fn on(&mut self, kind: InteractionEvent, handler: PointerHandler) {
        self.pointer.push((kind, handler));
    }

    pub(crate) fn on_key_down(&mut self, handler: KeyHandler) {
        self.key_down.push(handler);
    }

    pub(crate) fn on_key_up(&mut self, handler: KeyHandler) {
        self.key_up.push(handler);
    }

    pub(crate) fn pointer(&mut self, event: &PointerEvent) {
        for (kind, handler) in &mut self.pointer {
            if *kind == event.kind {
                handler(event);
            }
        }
    }

    pub(crate) fn key(&mut self, down: bool, event: &KeyEvent<'_>) {
        let list = if down {
            &mut self.key_down
        } else {
            &mut self.key_up
        };
        for handler in list {
            handler(event);
        }
    }
}

/// An element that is not attached to a scene.
///
/// A detached element owns its kind, its resting style, its callbacks and
/// its detached children. Attaching it with
/// [`Scene::append_child`](crate::Scene::append_child) or
/// [`Scene::append_child_to`](crate::Scene::append_child_to) moves the whole
/// subtree into the scene and gives every node a fresh [`ElementId`](crate::ElementId);
/// [`Scene::remove`](crate::Scene::remove) hands it back.
///
/// ```rust
/// use understory_scene::{Element, Panel};
/// use understory_style::ElementStyle;
///
/// let card = Element::new(Panel::new(), ElementStyle::builder().width(50.0).height(50.0).build())
///     .with_child(Element::new(Panel::new(), ElementStyle::builder().width(50.0).height(20.0).build()));
/// assert_eq!(card.children().len(), 1);
/// assert!(card.kind::<Panel>().is_some());
/// ```
pub struct Element {
    pub(crate) kind: Box<dyn ElementKind>,
    pub(crate) style: ElementStyle,
    pub(crate) children: Vec<Self>,
    pub(crate) handlers: Handlers,
    pub(crate) hooks: HookRegistry,
}

impl fmt::Debug for Element {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Element")
            .field("style", &self.style)
            .field("children", &self.children)
            .field("handlers", &self.handlers)
            .field("hooks", &self.hooks)
            .finish_non_exhaustive()
    }
}

impl Element {
    /// A detached element of the given kind and resting style.
    pub fn new(kind: impl ElementKind, style: ElementStyle) -> Self {
        Self {
            kind: Box::new(kind),
            style,
            children: Vec::new(),
            handlers: Handlers::default(),
            hooks: HookRegistry::new(),
        }
    }

    /// Appends a detached child, builder style.
    #[must_use]
    pub fn with_child(mut self, child: Self) -> Self {
        self.children.push(child);
        self
    }

    /// Appends a detached child.
    pub fn append_child(&mut self, child: Self) {
        self.children.push(child);
    }

    /// Detached children in order.
    #[must_use]
    pub fn children(&self) -> &[Self] {
        &self.children
    }

    /// Resting style.
    #[must_use]
    pub fn style(&self) -> &ElementStyle {
        &self.style
    }

    /// Mutable resting style.
    pub fn style_mut(&mut self) -> &mut ElementStyle {
        &mut self.style
    }

    /// The element kind, if it is a `T`.
    #[must_use]
    pub fn kind<T: ElementKind>(&self) -> Option<&T> {
        let any: &dyn Any = &*self.kind;
        any.downcast_ref()
    }

    /// The element kind mutably, if it is a `T`.
    pub fn kind_mut<T: ElementKind>(&mut self) -> Option<&mut T> {
        let any: &mut dyn Any = &mut *self.kind;
        any.downcast_mut()
    }

    /// Registers a pointer callback, builder style.
    #[must_use]
    pub fn on(mut self, kind: InteractionEvent, handler: impl FnMut(&PointerEvent) + 'static) -> Self {
        self.handlers.on(kind, Box::new(handler));
        self
    }

    /// Registers a key-down callback, builder style.
    #[must_use]
    pub fn on_key_down(mut self, handler: impl FnMut(&KeyEvent<'_>) + 'static) -> Self {
        self.handlers.on_key_down(Box::new(handler));
        self
    }

    /// Registers a key-up callback, builder style.
    #[must_use]
    pub fn on_key_up(mut self, handler: impl FnMut(&KeyEvent<'_>) + 'static) -> Self {
        self.handlers.on_key_up(Box::new(handler));
        self
    }

    /// Registers an update hook that runs every frame after the kind's own
    /// update.
    pub fn hook_update(&mut self, hook: impl FnMut(&mut HookCx<'_>) + 'static) -> HookId {
        self.hooks.insert(Box::new(hook))
    }

    /// Unregisters an update hook. Returns false if the handle is stale.
    pub fn unhook_update(&mut self, id: HookId) -> bool {
        self.hooks.remove(id)
    }
}
