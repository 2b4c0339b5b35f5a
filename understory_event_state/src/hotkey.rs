// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Ordered set of currently held keys.
//!
//! Keys are stored lowercased, at most once each, oldest first. Pressing a
//! key that is already held moves it to the end; releasing a key that is not
//! held is ignored, which covers key-ups delivered after focus loss.
//!
//! ```
//! use understory_event_state::hotkey::HotkeyStack;
//!
//! let mut keys = HotkeyStack::new();
//! keys.press("Control");
//! keys.press("a");
//! keys.press("CONTROL");
//! assert_eq!(keys.keys(), ["a", "control"]);
//!
//! keys.release("b");
//! keys.release("A");
//! assert_eq!(keys.keys(), ["control"]);
//! ```

use alloc::string::String;
use alloc::vec::Vec;

/// Currently held keys, most recently pressed last.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct HotkeyStack {
    keys: Vec<String>,
}

impl HotkeyStack {
    /// No keys held.
    #[must_use]
    pub const fn new() -> Self {
        Self { keys: Vec::new() }
    }

    /// Records a key press and returns the normalized key.
    pub fn press(&mut self, key: &str) -> &str {
        let key = key.to_lowercase();
        self.keys.retain(|k| *k != key);
        self.keys.push(key);
        self.keys.last().map_or("", String::as_str)
    }

    /// Records a key release. Returns true if the key was held.
    pub fn release(&mut self, key: &str) -> bool {
        let key = key.to_lowercase();
        let before = self.keys.len();
        self.keys.retain(|k| *k != key);
        self.keys.len() != before
    }

    /// Held keys, oldest first.
    #[must_use]
    pub fn keys(&self) -> &[String] {
        &self.keys
    }

    /// Returns true if `key` is held, ignoring case.
    #[must_use]
    pub fn contains(&self, key: &str) -> bool {
        let key = key.to_lowercase();
        self.keys.iter().any(|k| *k == key)
    }

    /// The most recently pressed key still held.
    #[must_use]
    pub fn last(&self) -> Option<&str> {
        self.keys.last().map(String::as_str)
    }

    /// Number of held keys.
    #[must_use]
    pub fn len(&self) -> usize {
        self.keys.len()
    }

    /// Returns true if no key is held.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.keys.is_empty()
    }

    /// Releases every key.
    pub fn clear(&mut self) {
        self.keys.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn repeated_press_is_unique_and_last() {
        let mut s = HotkeyStack::new();
        s.press("a");
        s.press("b");
        s.press("a");
        assert_eq!(s.keys(), ["b", "a"]);
        assert_eq!(s.last(), Some("a"));
    }

    #[test]
    fn release_then_repress_moves_to_end() {
        let mut s = HotkeyStack::new();
        s.press("a");
        s.press("shift");
        assert!(s.release("a"), "a was held");
        assert!(!s.release("a"), "a already released");
        s.press("A");
        assert_eq!(s.keys(), ["shift", "a"]);
        assert!(s.contains("SHIFT"), "case-insensitive lookup");
    }

    #[test]
    fn clear_empties() {
        let mut s = HotkeyStack::new();
        assert_eq!(s.press("Enter"), "enter");
        s.clear();
        assert!(s.is_empty(), "cleared");
        assert_eq!(s.len(), 0);
    }
}
