// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use alloc::string::String;

use kurbo::{Point, Size};

/// Host-supplied canvas metrics and scene defaults.
#[derive(Clone, Debug, PartialEq)]
pub struct SceneConfig {
    /// Canvas size in device pixels. This is the percentage base for root
    /// placement and sizing.
    pub canvas_size: Size,
    /// Client-space position of the canvas' top-left corner.
    pub canvas_origin: Point,
    /// Device pixels per client unit.
    pub device_pixel_ratio: f64,
    /// Cursor shown when no element requests one.
    pub standby_cursor: String,
    /// Frame rate ceiling used by [`FrameLimiter::from_config`](crate::FrameLimiter::from_config).
    pub max_frame_rate: f64,
}

impl Default for SceneConfig {
    fn default() -> Self {
        Self {
            canvas_size: Size::new(800.0, 600.0),
            canvas_origin: Point::ORIGIN,
            device_pixel_ratio: 1.0,
            standby_cursor: String::from("auto"),
            max_frame_rate: 120.0,
        }
    }
}

impl SceneConfig {
    /// Default configuration for a canvas of `size` device pixels.
    #[must_use]
    pub fn with_canvas_size(size: impl Into<Size>) -> Self {
        Self {
            canvas_size: size.into(),
            ..Self::default()
        }
    }
}
