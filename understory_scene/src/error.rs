// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use core::fmt;

use crate::ElementId;

/// Error returned by scene operations that name an element.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SceneError {
    /// The element was removed, or never belonged to this scene.
    StaleElement(ElementId),
}

impl fmt::Display for SceneError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::StaleElement(id) => write!(f, "element {id} is not attached to this scene"),
        }
    }
}

impl core::error::Error for SceneError {}
