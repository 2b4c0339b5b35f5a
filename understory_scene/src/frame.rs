// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use crate::SceneConfig;

/// Frame-rate ceiling for a host loop.
///
/// Call [`tick`](Self::tick) from every animation callback with a
/// monotonically increasing timestamp in milliseconds. It returns the delta
/// to pass to [`Scene::cycle`](crate::Scene::cycle), or `None` when less than
/// one frame interval has passed and the frame should be skipped. The first
/// tick only starts the clock.
///
/// ```rust
/// use understory_scene::FrameLimiter;
///
/// let mut limiter = FrameLimiter::new(100.0);
/// assert_eq!(limiter.tick(0.0), None);
/// assert_eq!(limiter.tick(4.0), None);
/// assert_eq!(limiter.tick(12.0), Some(12.0));
/// assert_eq!(limiter.tick(20.0), None);
/// ```
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct FrameLimiter {
    min_interval: f64,
    last: Option<f64>,
}

impl FrameLimiter {
    /// Limits to `max_fps` frames per second. Non-positive rates disable the
    /// limit.
    #[must_use]
    pub fn new(max_fps: f64) -> Self {
        let min_interval = if max_fps > 0.0 { 1000.0 / max_fps } else { 0.0 };
        Self {
            min_interval,
            last: None,
        }
    }

    /// Uses [`SceneConfig::max_frame_rate`].
    #[must_use]
    pub fn from_config(config: &SceneConfig) -> Self {
        Self::new(config.max_frame_rate)
    }

    /// Minimum milliseconds between frames.
    #[must_use]
    pub fn min_interval(&self) -> f64 {
        self.min_interval
    }

    /// Returns the elapsed milliseconds if a frame should run at `now`.
    pub fn tick(&mut self, now: f64) -> Option<f64> {
        let Some(last) = self.last else {
            self.last = Some(now);
            return None;
        };
        let dt = now - last;
        if dt < self.min_interval {
            return None;
        }
        self.last = Some(now);
        Some(dt)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_caps_at_120() {
        let mut l = FrameLimiter::from_config(&SceneConfig::default());
        assert!((l.min_interval() - 1000.0 / 120.0).abs() < 1e-12, "interval");
        l.tick(0.0);
        assert_eq!(l.tick(8.0), None);
        assert_eq!(l.tick(9.0), Some(9.0));
    }

    #[test]
    fn zero_rate_never_skips() {
        let mut l = FrameLimiter::new(0.0);
        l.tick(1.0);
        assert_eq!(l.tick(1.0), Some(0.0));
    }
}
