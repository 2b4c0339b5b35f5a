// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The scene root: element arena, frame cycle and input dispatch.

use alloc::boxed::Box;
use alloc::string::String;
use alloc::vec::Vec;
use core::any::Any;
use core::fmt;

use kurbo::{Affine, Point, Size, Vec2};
use tracing::{debug, trace};
use understory_event_state::hotkey::HotkeyStack;
use understory_event_state::interaction::{InteractionEvent, InteractionEvents, InteractionState};
use understory_style::{ElementStyle, Orientation, PseudoState, StyleCascade};
use understory_vector::Vector;

use crate::element::{Handlers, KeyEvent, PointerEvent};
use crate::geometry::{Geometry, contains};
use crate::hooks::{HookCx, HookId, HookRegistry};
use crate::{
    BitmapLoader, Bitmap, Camera, DrawCx, Element, ElementId, ElementKind, ImageCache,
    ImageLoadError, InputBus, ListenerHandle, RawInput, SceneConfig, SceneError, Surface,
};

/// Last geometry an element was drawn with.
#[derive(Clone, Copy, Debug)]
struct Drawn {
    /// Box space to canvas pixels, camera included.
    transform: Affine,
    size: Size,
}

struct Node {
    kind: Box<dyn ElementKind>,
    cascade: StyleCascade,
    interaction: InteractionState,
    handlers: Handlers,
    hooks: HookRegistry,
    parent: Option<ElementId>,
    children: Vec<ElementId>,
    drawn: Option<Drawn>,
}

/// One interaction event delivered to one element.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Dispatched {
    /// Receiving element.
    pub target: ElementId,
    /// What it received.
    pub event: InteractionEvent,
}

/// Retained element tree plus the per-frame state that drives it.
///
/// The scene owns every attached element in an arena indexed by
/// [`ElementId`]. Parent and child links are ids, so a removed element can
/// never be reached through a stale reference.
///
/// Each call to [`cycle`](Self::cycle) redraws the whole tree onto a
/// [`Surface`] and records the transform every element was drawn with.
/// Pointer input is hit tested against exactly those transforms, so what is
/// hit is always what was last drawn.
///
/// ```rust
/// use kurbo::Point;
/// use understory_event_state::interaction::InteractionEvent;
/// use understory_scene::{Element, Panel, RecordingSurface, Scene, SceneConfig};
/// use understory_style::ElementStyle;
///
/// let mut scene = Scene::with_config(SceneConfig::with_canvas_size((800.0, 600.0)));
/// let id = scene.append_child(Element::new(
///     Panel::new(),
///     ElementStyle::builder().left(25.0).top(25.0).width(50.0).height(50.0).build(),
/// ));
///
/// let mut surface = RecordingSurface::new();
/// scene.cycle(&mut surface, 16.0);
///
/// let events = scene.pointer_move(Point::new(400.0, 300.0));
/// assert_eq!(events[0].target, id);
/// assert_eq!(events[0].event, InteractionEvent::Enter);
/// assert!(scene.is_pointer_inside(id));
/// ```
pub struct Scene {
    nodes: Vec<Option<Node>>,
    generations: Vec<u32>,
    free_list: Vec<usize>,
    roots: Vec<ElementId>,
    config: SceneConfig,
    camera: Camera,
    hotkeys: HotkeyStack,
    pointer: Option<Point>,
    cursor: String,
    cursor_change: Option<String>,
    frame_cursor: Option<String>,
    images: ImageCache,
    loader: Option<Box<dyn BitmapLoader>>,
    listener: Option<ListenerHandle>,
}

impl fmt::Debug for Scene {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Scene")
            .field("roots", &self.roots)
            .field("config", &self.config)
            .field("camera", &self.camera)
            .field("hotkeys", &self.hotkeys)
            .field("pointer", &self.pointer)
            .field("cursor", &self.cursor)
            .field("images", &self.images)
            .field("listener", &self.listener)
            .finish_non_exhaustive()
    }
}

impl Default for Scene {
    fn default() -> Self {
        Self::new()
    }
}

impl Scene {
    /// An empty scene with the default configuration.
    #[must_use]
    pub fn new() -> Self {
        Self::with_config(SceneConfig::default())
    }

    /// An empty scene.
    #[must_use]
    pub fn with_config(config: SceneConfig) -> Self {
        Self {
            nodes: Vec::new(),
            generations: Vec::new(),
            free_list: Vec::new(),
            roots: Vec::new(),
            cursor: config.standby_cursor.clone(),
            config,
            camera: Camera::new(),
            hotkeys: HotkeyStack::new(),
            pointer: None,
            cursor_change: None,
            frame_cursor: None,
            images: ImageCache::new(),
            loader: None,
            listener: None,
        }
    }

    /// Current configuration.
    #[must_use]
    pub fn config(&self) -> &SceneConfig {
        &self.config
    }

    /// Updates the canvas metrics after the host resized or moved it.
    pub fn set_canvas_metrics(&mut self, size: impl Into<Size>, origin: Point, device_pixel_ratio: f64) {
        self.config.canvas_size = size.into();
        self.config.canvas_origin = origin;
        self.config.device_pixel_ratio = device_pixel_ratio;
        debug!(size = ?self.config.canvas_size, ?origin, device_pixel_ratio, "canvas metrics changed");
    }

    /// Splits a length into per-axis percentages that look equal on a
    /// non-square canvas: `(v / aspect, v * aspect)`.
    #[must_use]
    pub fn aspect_correct(&self, v: f64) -> Vec2 {
        let Size { width, height } = self.config.canvas_size;
        let aspect = width / height;
        Vec2::new(v / aspect, v * aspect)
    }

    // --- tree ---

    /// Attaches `element` and its subtree as a top-level element.
    ///
    /// Top-level elements are always absolute-oriented.
    pub fn append_child(&mut self, mut element: Element) -> ElementId {
        element.style.orientation = Orientation::Absolute;
        let id = self.attach(element, None);
        self.roots.push(id);
        debug!(%id, "attached top-level element");
        id
    }

    /// Attaches `element` and its subtree as the last child of `parent`.
    pub fn append_child_to(&mut self, parent: ElementId, element: Element) -> Result<ElementId, SceneError> {
        if !self.is_alive(parent) {
            return Err(SceneError::StaleElement(parent));
        }
        let id = self.attach(element, Some(parent));
        if let Some(p) = self.node_mut(parent) {
            p.children.push(id);
        }
        debug!(%id, %parent, "attached element");
        Ok(id)
    }

    fn attach(&mut self, element: Element, parent: Option<ElementId>) -> ElementId {
        let Element {
            kind,
            style,
            children,
            handlers,
            hooks,
        } = element;
        let id = self.alloc(Node {
            kind,
            cascade: StyleCascade::new(style),
            interaction: InteractionState::new(),
            handlers,
            hooks,
            parent,
            children: Vec::with_capacity(children.len()),
            drawn: None,
        });
        for child in children {
            let child = self.attach(child, Some(id));
            if let Some(node) = self.node_mut(id) {
                node.children.push(child);
            }
        }
        id
    }

    fn alloc(&mut self, node: Node) -> ElementId {
        let idx = if let Some(idx) = self.free_list.pop() {
            self.nodes[idx] = Some(node);
            idx
        } else {
            self.nodes.push(Some(node));
            self.generations.push(1);
            self.nodes.len() - 1
        };
        #[allow(
            clippy::cast_possible_truncation,
            reason = "element counts never approach u32::MAX"
        )]
        let slot = idx as u32;
        ElementId::new(slot, self.generations[idx])
    }

    /// Detaches `id` and its subtree, handing it back as a detached
    /// [`Element`].
    ///
    /// Every id in the subtree becomes stale. Returns `None` if `id` is
    /// already stale.
    pub fn remove(&mut self, id: ElementId) -> Option<Element> {
        let parent = self.node(id)?.parent;
        match parent {
            Some(p) => {
                if let Some(p) = self.node_mut(p) {
                    p.children.retain(|c| *c != id);
                }
            }
            None => self.roots.retain(|r| *r != id),
        }
        debug!(%id, "removing element");
        self.detach(id)
    }

    fn detach(&mut self, id: ElementId) -> Option<Element> {
        if !self.is_alive(id) {
            return None;
        }
        let node = self.nodes[id.idx()].take()?;
        self.generations[id.idx()] = self.generations[id.idx()].wrapping_add(1);
        self.free_list.push(id.idx());
        let children = node
            .children
            .into_iter()
            .filter_map(|c| self.detach(c))
            .collect();
        Some(Element {
            kind: node.kind,
            style: node.cascade.into_base(),
            children,
            handlers: node.handlers,
            hooks: node.hooks,
        })
    }

    /// Returns true if `id` refers to an attached element.
    #[must_use]
    pub fn is_alive(&self, id: ElementId) -> bool {
        self.node(id).is_some()
    }

    fn node(&self, id: ElementId) -> Option<&Node> {
        if self.generations.get(id.idx()) != Some(&id.generation()) {
            return None;
        }
        self.nodes.get(id.idx())?.as_ref()
    }

    fn node_mut(&mut self, id: ElementId) -> Option<&mut Node> {
        if self.generations.get(id.idx()) != Some(&id.generation()) {
            return None;
        }
        self.nodes.get_mut(id.idx())?.as_mut()
    }

    /// Looks up an attached element.
    #[must_use]
    pub fn get_element_by_id(&self, id: ElementId) -> Option<ElementRef<'_>> {
        self.node(id).map(|node| ElementRef { id, node })
    }

    /// Top-level elements in draw order.
    #[must_use]
    pub fn roots(&self) -> &[ElementId] {
        &self.roots
    }

    /// Parent of `id`, or `None` for top-level and stale elements.
    #[must_use]
    pub fn parent(&self, id: ElementId) -> Option<ElementId> {
        self.node(id)?.parent
    }

    /// Children of `id` in draw order. Empty for stale ids.
    #[must_use]
    pub fn children(&self, id: ElementId) -> &[ElementId] {
        self.node(id).map_or(&[], |n| n.children.as_slice())
    }

    /// Position of `id` among its parent's children.
    ///
    /// `None` for top-level and stale elements.
    #[must_use]
    pub fn sibling_index(&self, id: ElementId) -> Option<usize> {
        let parent = self.parent(id)?;
        self.children(parent).iter().position(|c| *c == id)
    }

    /// Parent, grandparent and so on, nearest first. Excludes `id`.
    pub fn ancestors(&self, id: ElementId) -> impl Iterator<Item = ElementId> + '_ {
        core::iter::successors(self.parent(id), move |p| self.parent(*p))
    }

    /// Every attached element, depth first, parents before children.
    #[must_use]
    pub fn descendants(&self) -> Vec<ElementId> {
        let mut out = Vec::new();
        let mut stack: Vec<ElementId> = self.roots.iter().rev().copied().collect();
        while let Some(id) = stack.pop() {
            out.push(id);
            stack.extend(self.children(id).iter().rev().copied());
        }
        out
    }

    // --- per element ---

    /// Style readers should use: the resolved overlay during
    /// [`cycle`](Self::cycle), the resting style otherwise.
    #[must_use]
    pub fn style(&self, id: ElementId) -> Option<&ElementStyle> {
        self.node(id).map(|n| n.cascade.style())
    }

    /// Mutable resting style.
    pub fn style_mut(&mut self, id: ElementId) -> Option<&mut ElementStyle> {
        self.node_mut(id).map(|n| n.cascade.base_mut())
    }

    /// The element kind, if it is a `T`.
    #[must_use]
    pub fn kind<T: ElementKind>(&self, id: ElementId) -> Option<&T> {
        let any: &dyn Any = &*self.node(id)?.kind;
        any.downcast_ref()
    }

    /// The element kind mutably, if it is a `T`.
    pub fn kind_mut<T: ElementKind>(&mut self, id: ElementId) -> Option<&mut T> {
        let any: &mut dyn Any = &mut *self.node_mut(id)?.kind;
        any.downcast_mut()
    }

    /// Interaction state of `id`.
    #[must_use]
    pub fn interaction(&self, id: ElementId) -> Option<InteractionState> {
        self.node(id).map(|n| n.interaction)
    }

    /// Registers a pointer callback on an attached element.
    pub fn on(
        &mut self,
        id: ElementId,
        kind: InteractionEvent,
        handler: impl FnMut(&PointerEvent) + 'static,
    ) -> Result<(), SceneError> {
        let node = self.node_mut(id).ok_or(SceneError::StaleElement(id))?;
        node.handlers.on(kind, Box::new(handler));
        Ok(())
    }

    /// Registers a key-down callback on an attached element.
    pub fn on_key_down(
        &mut self,
        id: ElementId,
        handler: impl FnMut(&KeyEvent<'_>) + 'static,
    ) -> Result<(), SceneError> {
        let node = self.node_mut(id).ok_or(SceneError::StaleElement(id))?;
        node.handlers.on_key_down(Box::new(handler));
        Ok(())
    }

    /// Registers a key-up callback on an attached element.
    pub fn on_key_up(
        &mut self,
        id: ElementId,
        handler: impl FnMut(&KeyEvent<'_>) + 'static,
    ) -> Result<(), SceneError> {
        let node = self.node_mut(id).ok_or(SceneError::StaleElement(id))?;
        node.handlers.on_key_up(Box::new(handler));
        Ok(())
    }

    /// Registers an update hook on an attached element.
    pub fn hook_update(
        &mut self,
        id: ElementId,
        hook: impl FnMut(&mut HookCx<'_>) + 'static,
    ) -> Result<HookId, SceneError> {
        let node = self.node_mut(id).ok_or(SceneError::StaleElement(id))?;
        Ok(node.hooks.insert(Box::new(hook)))
    }

    /// Unregisters an update hook. Returns false if either handle is stale.
    pub fn unhook_update(&mut self, id: ElementId, hook: HookId) -> bool {
        self.node_mut(id).is_some_and(|n| n.hooks.remove(hook))
    }

    // --- geometry ---

    /// Geometry of `id` from its current style.
    #[must_use]
    pub fn geometry(&self, id: ElementId) -> Option<Geometry> {
        let style = self.style(id)?;
        Some(Geometry::resolve(style, self.config.canvas_size, self.percentage_base(id)))
    }

    /// Product of the ancestors' `width`/`height` fractions along the chain
    /// of inherit-oriented links above `id`.
    fn percentage_base(&self, id: ElementId) -> Vector<2> {
        let mut base = Vector::splat(1.0);
        let mut cur = id;
        while let Some(node) = self.node(cur) {
            if node.cascade.style().orientation != Orientation::Inherit {
                break;
            }
            let Some(parent) = node.parent else {
                break;
            };
            let Some(ps) = self.style(parent) else {
                break;
            };
            base.mul([ps.width / 100.0, ps.height / 100.0]);
            cur = parent;
        }
        base
    }

    /// Top-left offset of `id` in its parent space, in pixels.
    #[must_use]
    pub fn position(&self, id: ElementId) -> Option<Vec2> {
        self.geometry(id).map(|g| g.position)
    }

    /// Box size of `id` in pixels.
    #[must_use]
    pub fn dimensions(&self, id: ElementId) -> Option<Size> {
        self.geometry(id).map(|g| g.dimensions)
    }

    /// Center of `id` in its parent space.
    #[must_use]
    pub fn center(&self, id: ElementId) -> Option<Point> {
        self.geometry(id).map(|g| g.center)
    }

    /// Rotation origin of `id` relative to its center.
    #[must_use]
    pub fn pivot(&self, id: ElementId) -> Option<Vec2> {
        self.geometry(id).map(|g| g.pivot)
    }

    /// Box space to parent space transform of `id`.
    #[must_use]
    pub fn local_transform(&self, id: ElementId) -> Option<Affine> {
        self.geometry(id).map(|g| g.local_transform())
    }

    /// Box space to canvas transform `id` was last drawn with.
    #[must_use]
    pub fn world_transform(&self, id: ElementId) -> Option<Affine> {
        self.node(id)?.drawn.map(|d| d.transform)
    }

    /// Returns true if the last valid pointer sample hits `id`.
    #[must_use]
    pub fn is_pointer_inside(&self, id: ElementId) -> bool {
        match (self.pointer, self.node(id)) {
            (Some(pt), Some(node)) => hit(node, pt),
            _ => false,
        }
    }

    // --- frame ---

    /// The camera.
    #[must_use]
    pub fn camera(&self) -> &Camera {
        &self.camera
    }

    /// Mutable camera. Changes apply from the next [`cycle`](Self::cycle).
    pub fn camera_mut(&mut self) -> &mut Camera {
        &mut self.camera
    }

    /// Cursor currently applied.
    #[must_use]
    pub fn cursor(&self) -> &str {
        &self.cursor
    }

    /// Takes the cursor the host should apply, if it changed since the last
    /// call.
    pub fn take_cursor_change(&mut self) -> Option<String> {
        self.cursor_change.take()
    }

    /// Last valid pointer sample in canvas pixels.
    #[must_use]
    pub fn pointer(&self) -> Option<Point> {
        self.pointer
    }

    /// Keys currently held.
    #[must_use]
    pub fn hotkeys(&self) -> &HotkeyStack {
        &self.hotkeys
    }

    /// Shared image sources.
    #[must_use]
    pub fn images(&self) -> &ImageCache {
        &self.images
    }

    /// Mutable shared image sources.
    pub fn images_mut(&mut self) -> &mut ImageCache {
        &mut self.images
    }

    /// Installs the collaborator that starts image loads.
    pub fn set_loader(&mut self, loader: impl BitmapLoader + 'static) {
        self.loader = Some(Box::new(loader));
    }

    /// Records the outcome of an image load started by the loader.
    ///
    /// Results are keyed by URL, so completing a load for an element that
    /// has since been removed is harmless.
    pub fn complete_image(&mut self, url: &str, result: Result<Bitmap, ImageLoadError>) {
        self.images.complete(url, result);
    }

    /// Runs one frame: updates and draws every element onto `surface`, then
    /// settles the cursor and starts any image loads requested while
    /// drawing.
    ///
    /// `dt` is the number of milliseconds since the previous frame.
    pub fn cycle(&mut self, surface: &mut dyn Surface, dt: f64) {
        self.frame_cursor = None;
        let camera = self.camera.transform();
        for id in self.roots.clone() {
            surface.set_transform(camera);
            self.cycle_node(id, surface, dt);
        }

        let wanted = self
            .frame_cursor
            .take()
            .unwrap_or_else(|| self.config.standby_cursor.clone());
        if wanted != self.cursor {
            debug!(from = %self.cursor, to = %wanted, "cursor changed");
            self.cursor.clone_from(&wanted);
            self.cursor_change = Some(wanted);
        }

        if let Some(loader) = self.loader.as_mut() {
            for url in self.images.take_requests() {
                loader.load(&url);
            }
        }
    }

    fn cycle_node(&mut self, id: ElementId, surface: &mut dyn Surface, dt: f64) {
        let Some(node) = self.node_mut(id) else {
            return;
        };
        let mut states = PseudoState::empty();
        states.set(PseudoState::HOVER, node.interaction.is_hovered());
        states.set(PseudoState::ACTIVE, node.interaction.is_active());
        if let Some(cursor) = node.cascade.begin(states) {
            self.frame_cursor = Some(String::from(cursor));
        }

        let Some(geometry) = self.geometry(id) else {
            return;
        };
        let canvas = self.config.canvas_size;
        let camera = self.camera.transform();
        let Self { nodes, images, .. } = self;
        let Some(Node {
            kind,
            cascade,
            hooks,
            drawn,
            children,
            ..
        }) = nodes[id.idx()].as_mut()
        else {
            return;
        };

        let style = cascade.style();
        surface.save();
        surface.set_alpha(style.opacity);
        if let Some(blend) = style.blend {
            surface.set_blend(blend);
        }
        surface.concat(geometry.local_transform());
        *drawn = Some(Drawn {
            transform: surface.transform(),
            size: geometry.dimensions,
        });

        kind.update(dt);
        hooks.run(&mut HookCx {
            dt,
            style: cascade.base_mut(),
        });
        kind.draw(&mut DrawCx {
            surface: &mut *surface,
            size: geometry.dimensions,
            style: cascade.style(),
            states,
            images,
        });
        let children = children.clone();
        trace!(%id, ?canvas, size = ?geometry.dimensions, "drew element");

        let mut absolute = Vec::new();
        for child in children {
            let inherit = self
                .node(child)
                .is_some_and(|c| c.cascade.style().orientation == Orientation::Inherit);
            if inherit {
                self.cycle_node(child, surface, dt);
            } else {
                absolute.push(child);
            }
        }
        surface.restore();

        for child in absolute {
            surface.save();
            surface.set_transform(camera);
            self.cycle_node(child, surface, dt);
            surface.restore();
        }

        if let Some(node) = self.node_mut(id) {
            node.cascade.end();
        }
    }

    // --- input ---

    /// Maps a client-space point into canvas pixels, or `None` if it falls
    /// outside the canvas.
    fn normalize(&self, client: Point) -> Option<Point> {
        let SceneConfig {
            canvas_size,
            canvas_origin,
            device_pixel_ratio,
            ..
        } = &self.config;
        let pt = ((client - *canvas_origin) * *device_pixel_ratio).to_point();
        contains(*canvas_size, pt).then_some(pt)
    }

    /// Dispatches a pointer move in client coordinates.
    pub fn pointer_move(&mut self, client: Point) -> Vec<Dispatched> {
        self.dispatch_pointer(client, InteractionState::on_move)
    }

    /// Dispatches a button press in client coordinates.
    pub fn pointer_down(&mut self, client: Point) -> Vec<Dispatched> {
        self.dispatch_pointer(client, InteractionState::on_down)
    }

    /// Dispatches a button release in client coordinates.
    pub fn pointer_up(&mut self, client: Point) -> Vec<Dispatched> {
        self.dispatch_pointer(client, InteractionState::on_up)
    }

    fn dispatch_pointer(
        &mut self,
        client: Point,
        step: fn(&mut InteractionState, bool) -> InteractionEvents,
    ) -> Vec<Dispatched> {
        let Some(pt) = self.normalize(client) else {
            trace!(?client, "dropping pointer sample outside the canvas");
            return Vec::new();
        };
        self.pointer = Some(pt);

        let mut out = Vec::new();
        for id in self.descendants() {
            let Some(node) = self.node_mut(id) else {
                continue;
            };
            let inside = hit(node, pt);
            let events = step(&mut node.interaction, inside);
            if events.is_empty() {
                continue;
            }
            let local = node.drawn.and_then(|d| {
                let mut v = Vector::from(pt);
                v.apply_affine_inverse(d.transform).ok().map(|v| v.to_point())
            });
            for event in events {
                node.handlers.pointer(&PointerEvent {
                    kind: event,
                    position: pt,
                    local,
                });
                out.push(Dispatched { target: id, event });
            }
        }
        out
    }

    /// Dispatches a key press to every element.
    pub fn key_down(&mut self, key: &str) {
        self.hotkeys.press(key);
        self.dispatch_key(true, key);
    }

    /// Dispatches a key release to every element. Releasing a key that is
    /// not held is not an error.
    pub fn key_up(&mut self, key: &str) {
        self.hotkeys.release(key);
        self.dispatch_key(false, key);
    }

    fn dispatch_key(&mut self, down: bool, key: &str) {
        let order = self.descendants();
        let Self { nodes, hotkeys, .. } = self;
        let event = KeyEvent {
            key,
            held: hotkeys.keys(),
        };
        for id in order {
            if let Some(node) = nodes[id.idx()].as_mut() {
                node.handlers.key(down, &event);
            }
        }
    }

    /// Dispatches one raw input.
    pub fn handle_input(&mut self, input: RawInput) -> Vec<Dispatched> {
        match input {
            RawInput::PointerMove(pt) => self.pointer_move(pt),
            RawInput::PointerDown(pt) => self.pointer_down(pt),
            RawInput::PointerUp(pt) => self.pointer_up(pt),
            RawInput::KeyDown(key) => {
                self.key_down(&key);
                Vec::new()
            }
            RawInput::KeyUp(key) => {
                self.key_up(&key);
                Vec::new()
            }
        }
    }

    /// Registers this scene as a listener on `bus`.
    ///
    /// Calling it again while registered returns the existing handle.
    pub fn hook_listeners(&mut self, bus: &mut InputBus) -> ListenerHandle {
        match self.listener {
            Some(handle) if bus.is_registered(handle) => handle,
            _ => {
                let handle = bus.register();
                self.listener = Some(handle);
                handle
            }
        }
    }

    /// Unregisters this scene from `bus`. Input queued but not yet pumped is
    /// discarded. Returns false if the scene was not registered.
    pub fn unhook_listeners(&mut self, bus: &mut InputBus) -> bool {
        self.listener.take().is_some_and(|h| bus.unregister(h))
    }

    /// Dispatches everything `bus` queued for this scene. Returns the number
    /// of inputs handled.
    pub fn pump(&mut self, bus: &mut InputBus) -> usize {
        let Some(handle) = self.listener else {
            return 0;
        };
        let inputs = bus.drain(handle);
        let n = inputs.len();
        for input in inputs {
            self.handle_input(input);
        }
        n
    }
}

/// Hit tests `pt`, in canvas pixels, against the last drawn box of `node`.
fn hit(node: &Node, pt: Point) -> bool {
    let Some(drawn) = node.drawn else {
        return false;
    };
    let mut local = Vector::from(pt);
    if let Err(err) = local.apply_affine_inverse(drawn.transform) {
        trace!(%err, "skipping hit test against a singular transform");
        return false;
    }
    contains(drawn.size, local.to_point())
}

/// Read-only view of an attached element.
#[derive(Clone, Copy)]
pub struct ElementRef<'a> {
    id: ElementId,
    node: &'a Node,
}

impl fmt::Debug for ElementRef<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ElementRef")
            .field("id", &self.id)
            .field("style", self.node.cascade.style())
            .field("parent", &self.node.parent)
            .field("children", &self.node.children)
            .finish_non_exhaustive()
    }
}

impl<'a> ElementRef<'a> {
    /// The element's id.
    #[must_use]
    pub fn id(&self) -> ElementId {
        self.id
    }

    /// The element's current style.
    #[must_use]
    pub fn style(&self) -> &'a ElementStyle {
        self.node.cascade.style()
    }

    /// Parent element, if any.
    #[must_use]
    pub fn parent(&self) -> Option<ElementId> {
        self.node.parent
    }

    /// Children in draw order.
    #[must_use]
    pub fn children(&self) -> &'a [ElementId] {
        &self.node.children
    }

    /// Interaction state.
    #[must_use]
    pub fn interaction(&self) -> InteractionState {
        self.node.interaction
    }

    /// The element kind, if it is a `T`.
    #[must_use]
    pub fn kind<T: ElementKind>(&self) -> Option<&'a T> {
        let any: &dyn Any = &*self.node.kind;
        any.downcast_ref()
    }
}
