// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

/// Identifier for an element attached to a [`Scene`](crate::Scene).
///
/// This is a small, copyable handle consisting of a slot index and a
/// generation counter.
///
/// ## Semantics
///
/// - Attaching an element (directly or as part of a subtree) allocates a slot
///   and yields a fresh `ElementId`; a freed slot is reused with its
///   generation incremented.
/// - Removing an element frees its slot; any existing `ElementId` that pointed
///   to that slot is now stale.
/// - Re-attaching a removed element produces a new, distinct `ElementId`.
///
/// ### Liveness
///
/// Use [`Scene::is_alive`](crate::Scene::is_alive) to check whether an
/// `ElementId` still refers to an attached element. Stale ids never alias a
/// different element because the generation must match.
///
/// ### Notes
///
/// - `u32` is ample for practical lifetimes; behavior on generation overflow
///   is unspecified.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash, PartialOrd, Ord)]
pub struct ElementId(pub(crate) u32, pub(crate) u32);

impl ElementId {
    pub(crate) const fn new(idx: u32, generation: u32) -> Self {
        Self(idx, generation)
    }

    pub(crate) const fn idx(self) -> usize {
        self.0 as usize
    }

    /// The generation counter of this handle.
    #[must_use]
    pub const fn generation(self) -> u32 {
        self.1
    }
}

impl core::fmt::Display for ElementId {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "{}v{}", self.0, self.1)
    }
}
