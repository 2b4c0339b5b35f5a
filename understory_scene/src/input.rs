// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Host input source with explicit listener registration.

use alloc::collections::VecDeque;
use alloc::string::String;
use alloc::vec::Vec;

use kurbo::Point;
use tracing::debug;

/// Raw input as delivered by the host, in client coordinates.
#[derive(Clone, Debug, PartialEq)]
pub enum RawInput {
    /// Pointer moved.
    PointerMove(Point),
    /// Pointer button pressed.
    PointerDown(Point),
    /// Pointer button released.
    PointerUp(Point),
    /// Key pressed. The identifier is as reported by the host, e.g. `"Shift"`.
    KeyDown(String),
    /// Key released.
    KeyUp(String),
}

/// Registration handle returned by [`InputBus::register`].
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub struct ListenerHandle(u32, u32);

#[derive(Debug)]
struct Listener {
    generation: u32,
    queue: Option<VecDeque<RawInput>>,
}

/// A host-owned input source.
///
/// The host [`emit`](Self::emit)s raw input; every registered listener gets
/// its own queue and drains it when it is ready. Input emitted while nobody
/// is registered is dropped.
///
/// ```rust
/// use kurbo::Point;
/// use understory_scene::{InputBus, RawInput};
///
/// let mut bus = InputBus::new();
/// bus.emit(RawInput::PointerMove(Point::new(1.0, 1.0))); // nobody listening
///
/// let handle = bus.register();
/// bus.emit(RawInput::KeyDown("a".into()));
/// assert_eq!(bus.drain(handle), [RawInput::KeyDown("a".into())]);
///
/// assert!(bus.unregister(handle));
/// assert!(!bus.is_registered(handle));
/// ```
#[derive(Debug, Default)]
pub struct InputBus {
    listeners: Vec<Listener>,
    free_list: Vec<u32>,
}

impl InputBus {
    /// A bus with no listeners.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers a new listener.
    pub fn register(&mut self) -> ListenerHandle {
        let handle = if let Some(idx) = self.free_list.pop() {
            let l = &mut self.listeners[idx as usize];
            l.queue = Some(VecDeque::new());
            ListenerHandle(idx, l.generation)
        } else {
            #[allow(
                clippy::cast_possible_truncation,
                reason = "listener counts never approach u32::MAX"
            )]
            let idx = self.listeners.len() as u32;
            self.listeners.push(Listener {
                generation: 1,
                queue: Some(VecDeque::new()),
            });
            ListenerHandle(idx, 1)
        };
        debug!(?handle, "input listener registered");
        handle
    }

    /// Unregisters a listener, discarding its queue. Returns false if the
    /// handle is stale.
    pub fn unregister(&mut self, handle: ListenerHandle) -> bool {
        let Some(l) = self.live_mut(handle) else {
            return false;
        };
        l.queue = None;
        l.generation = l.generation.wrapping_add(1);
        self.free_list.push(handle.0);
        debug!(?handle, "input listener unregistered");
        true
    }

    /// Returns true if `handle` is registered.
    #[must_use]
    pub fn is_registered(&self, handle: ListenerHandle) -> bool {
        self.listeners
            .get(handle.0 as usize)
            .is_some_and(|l| l.generation == handle.1 && l.queue.is_some())
    }

    /// Number of registered listeners.
    #[must_use]
    pub fn listener_count(&self) -> usize {
        self.listeners.iter().filter(|l| l.queue.is_some()).count()
    }

    /// Delivers `input` to every registered listener.
    pub fn emit(&mut self, input: RawInput) {
        for queue in self.listeners.iter_mut().filter_map(|l| l.queue.as_mut()) {
            queue.push_back(input.clone());
        }
    }

    /// Takes everything queued for `handle`. Stale handles get nothing.
    pub fn drain(&mut self, handle: ListenerHandle) -> Vec<RawInput> {
        self.live_mut(handle)
            .and_then(|l| l.queue.as_mut())
            .map(|q| q.drain(..).collect())
            .unwrap_or_default()
    }

    fn live_mut(&mut self, handle: ListenerHandle) -> Option<&mut Listener> {
        self.listeners
            .get_mut(handle.0 as usize)
            .filter(|l| l.generation == handle.1 && l.queue.is_some())
    }
}
