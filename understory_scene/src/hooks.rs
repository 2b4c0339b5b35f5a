// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Per-element update hooks with stable removal handles.

use alloc::boxed::Box;
use alloc::vec::Vec;
use core::fmt;

use understory_style::ElementStyle;

/// Context passed to update hooks.
#[derive(Debug)]
pub struct HookCx<'a> {
    /// Milliseconds since the previous frame.
    pub dt: f64,
    /// The element's resting style. Edits take effect from the next frame.
    pub style: &'a mut ElementStyle,
}

/// Boxed update hook.
pub type UpdateHook = Box<dyn FnMut(&mut HookCx<'_>)>;

/// Handle returned by [`HookRegistry::insert`].
///
/// Like [`ElementId`](crate::ElementId), it carries a generation so a handle
/// to a removed hook never removes a later hook that reused the slot.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub struct HookId(u32, u32);

struct Slot {
    generation: u32,
    hook: Option<UpdateHook>,
}

/// Slot map of update hooks, run in registration order.
///
/// Insertion and removal are O(1). Removal leaves a stale entry in the
/// run order that is skipped and compacted away once stale entries
/// outnumber live ones.
#[derive(Default)]
pub struct HookRegistry {
    slots: Vec<Slot>,
    free_list: Vec<u32>,
    order: Vec<HookId>,
    live: usize,
}

impl fmt::Debug for HookRegistry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("HookRegistry")
            .field("live", &self.live)
            .field("order", &self.order)
            .finish_non_exhaustive()
    }
}

impl HookRegistry {
    /// An empty registry.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers `hook` to run after every hook registered before it.
    pub fn insert(&mut self, hook: UpdateHook) -> HookId {
        let id = if let Some(idx) = self.free_list.pop() {
            let slot = &mut self.slots[idx as usize];
            slot.hook = Some(hook);
            HookId(idx, slot.generation)
        } else {
            #[allow(
                clippy::cast_possible_truncation,
                reason = "hook counts never approach u32::MAX"
            )]
            let idx = self.slots.len() as u32;
            self.slots.push(Slot {
                generation: 1,
                hook: Some(hook),
            });
            HookId(idx, 1)
        };
        self.order.push(id);
        self.live += 1;
        id
    }

    /// Unregisters a hook. Returns false if the handle is stale.
    pub fn remove(&mut self, id: HookId) -> bool {
        let Some(slot) = self.slots.get_mut(id.0 as usize) else {
            return false;
        };
        if slot.generation != id.1 || slot.hook.is_none() {
            return false;
        }
        slot.hook = None;
        slot.generation = slot.generation.wrapping_add(1);
        self.free_list.push(id.0);
        self.live -= 1;
        true
    }

    /// Returns true if `id` refers to a registered hook.
    #[must_use]
    pub fn contains(&self, id: HookId) -> bool {
        self.slots
            .get(id.0 as usize)
            .is_some_and(|s| s.generation == id.1 && s.hook.is_some())
    }

    /// Number of registered hooks.
    #[must_use]
    pub fn len(&self) -> usize {
        self.live
    }

    /// Returns true if no hook is registered.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.live == 0
    }

    /// Runs every registered hook in registration order.
    pub fn run(&mut self, cx: &mut HookCx<'_>) {
        if self.order.len() > 2 * self.live + 8 {
            let slots = &self.slots;
            self.order.retain(|id| {
                let slot = &slots[id.0 as usize];
                slot.generation == id.1 && slot.hook.is_some()
            });
        }
        for id in &self.order {
            let slot = &mut self.slots[id.0 as usize];
            if slot.generation != id.1 {
                continue;
            }
            if let Some(hook) = slot.hook.as_mut() {
                hook(&mut *cx);
            }
        }
    }
}
