// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Asynchronous bitmap resources keyed by URL.
//!
//! Elements never own loads. They ask the [`ImageCache`] for a URL; the first
//! request queues the URL for the host's [`BitmapLoader`] and reports
//! [`ImageState::Pending`]. The host later calls
//! [`ImageCache::complete`] (usually through
//! [`Scene::complete_image`](crate::Scene::complete_image)) with the decoded
//! bitmap or an error. Because completion is keyed by URL, a load that
//! finishes after its element was removed simply populates the cache.

use alloc::string::String;
use alloc::sync::Arc;
use alloc::vec::Vec;
use core::fmt;

use hashbrown::HashMap;
use tracing::{debug, warn};

/// Decoded RGBA8 pixels of known size.
#[derive(Clone, PartialEq, Eq)]
pub struct Bitmap {
    width: u32,
    height: u32,
    pixels: Vec<u8>,
}

impl Bitmap {
    /// Wraps premultiplied or straight RGBA8 pixels, row-major.
    ///
    /// Returns `None` if `pixels` is not `width * height * 4` bytes long.
    #[must_use]
    pub fn new(width: u32, height: u32, pixels: Vec<u8>) -> Option<Self> {
        let expected = (width as usize)
            .checked_mul(height as usize)?
            .checked_mul(4)?;
        (pixels.len() == expected).then_some(Self {
            width,
            height,
            pixels,
        })
    }

    /// Width in pixels.
    #[must_use]
    pub fn width(&self) -> u32 {
        self.width
    }

    /// Height in pixels.
    #[must_use]
    pub fn height(&self) -> u32 {
        self.height
    }

    /// Pixel data.
    #[must_use]
    pub fn pixels(&self) -> &[u8] {
        &self.pixels
    }
}

impl fmt::Debug for Bitmap {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Bitmap")
            .field("width", &self.width)
            .field("height", &self.height)
            .finish_non_exhaustive()
    }
}

/// Reason a bitmap could not be produced.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ImageLoadError {
    /// Source that failed.
    pub url: String,
    /// Host-provided description.
    pub reason: String,
}

impl fmt::Display for ImageLoadError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "failed to load image `{}`: {}", self.url, self.reason)
    }
}

impl core::error::Error for ImageLoadError {}

/// State of a cached image source.
#[derive(Clone, Debug)]
pub enum ImageState {
    /// Requested; no result yet.
    Pending,
    /// Decoded and drawable.
    Ready(Arc<Bitmap>),
    /// The loader reported a failure.
    Failed(ImageLoadError),
}

impl ImageState {
    /// The bitmap, if ready.
    #[must_use]
    pub fn bitmap(&self) -> Option<&Arc<Bitmap>> {
        match self {
            Self::Ready(b) => Some(b),
            _ => None,
        }
    }
}

/// Host collaborator that starts asynchronous loads.
///
/// Implementations must not block. They report results later through
/// [`Scene::complete_image`](crate::Scene::complete_image).
pub trait BitmapLoader {
    /// Begins loading `url`.
    fn load(&mut self, url: &str);
}

/// URL-keyed cache of image states plus the queue of URLs awaiting a load.
#[derive(Debug, Default)]
pub struct ImageCache {
    entries: HashMap<String, ImageState>,
    requests: Vec<String>,
}

impl ImageCache {
    /// An empty cache.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the state of `url`, queueing a load the first time it is seen.
    pub fn request(&mut self, url: &str) -> &ImageState {
        if !self.entries.contains_key(url) {
            debug!(url, "queueing image load");
            self.requests.push(String::from(url));
        }
        self.entries
            .entry_ref(url)
            .or_insert(ImageState::Pending)
    }

    /// Returns the state of `url` without requesting it.
    #[must_use]
    pub fn get(&self, url: &str) -> Option<&ImageState> {
        self.entries.get(url)
    }

    /// Records the outcome of a load.
    pub fn complete(&mut self, url: &str, result: Result<Bitmap, ImageLoadError>) {
        let state = match result {
            Ok(bitmap) => {
                debug!(url, width = bitmap.width, height = bitmap.height, "image ready");
                ImageState::Ready(Arc::new(bitmap))
            }
            Err(err) => {
                warn!(url, reason = %err.reason, "image load failed");
                ImageState::Failed(err)
            }
        };
        self.entries.insert(String::from(url), state);
    }

    /// Puts a failed source back into the pending state and queues it again.
    ///
    /// Returns false if `url` was not in the failed state.
    pub fn retry(&mut self, url: &str) -> bool {
        match self.entries.get_mut(url) {
            Some(state @ ImageState::Failed(_)) => {
                *state = ImageState::Pending;
                self.requests.push(String::from(url));
                true
            }
            _ => false,
        }
    }

    /// Takes the URLs queued since the last call.
    pub fn take_requests(&mut self) -> Vec<String> {
        core::mem::take(&mut self.requests)
    }

    /// Number of known sources.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns true if no source has been requested.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pixel() -> Bitmap {
        Bitmap::new(1, 1, alloc::vec![255, 0, 0, 255]).unwrap()
    }

    #[test]
    fn first_request_queues_once() {
        let mut cache = ImageCache::new();
        assert!(matches!(cache.request("a.png"), ImageState::Pending));
        assert!(matches!(cache.request("a.png"), ImageState::Pending));
        assert_eq!(cache.take_requests(), ["a.png"]);
        assert!(cache.take_requests().is_empty(), "drained");
    }

    #[test]
    fn completion_is_keyed_by_url() {
        let mut cache = ImageCache::new();
        // Completion for a source nobody asked for is accepted.
        cache.complete("late.png", Ok(pixel()));
        assert!(cache.get("late.png").and_then(ImageState::bitmap).is_some(), "ready");
        assert!(cache.take_requests().is_empty(), "nothing requested");
    }

    #[test]
    fn failure_then_retry() {
        let mut cache = ImageCache::new();
        cache.request("x.png");
        cache.take_requests();
        let err = ImageLoadError {
            url: "x.png".into(),
            reason: "404".into(),
        };
        cache.complete("x.png", Err(err));
        assert!(matches!(cache.get("x.png"), Some(ImageState::Failed(_))));
        assert!(cache.retry("x.png"), "failed sources can retry");
        assert!(!cache.retry("x.png"), "pending sources cannot");
        assert_eq!(cache.take_requests(), ["x.png"]);
    }

    #[test]
    fn bitmap_checks_length() {
        assert!(Bitmap::new(2, 2, alloc::vec![0; 15]).is_none());
        assert_eq!(Bitmap::new(2, 2, alloc::vec![0; 16]).unwrap().width(), 2);
    }
}
