// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

/// Hermite smoothstep of `value` between `from` and `to`.
///
/// Returns `0` at or before `from`, `1` at or after `to`, and eases in
/// between with `x² (3 - 2x)`. Equal edges make a hard step at `from`.
#[must_use]
pub fn smoothstep(from: f64, to: f64, value: f64) -> f64 {
    if to == from {
        return if value < from { 0.0 } else { 1.0 };
    }
    let x = ((value - from) / (to - from)).clamp(0.0, 1.0);
    x * x * (3.0 - 2.0 * x)
}
