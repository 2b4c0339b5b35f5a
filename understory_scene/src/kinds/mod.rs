// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Built-in element kinds.

mod image;
mod panel;

pub use image::{Border, BorderPatch, BorderType, Image};
pub use panel::Panel;
