// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Container width measurement.
//!
//! Widths that are negative, NaN, or infinite are treated as "not measured" (`0.0`).
//! Observing the same width twice is a no-op.

/// Tracks the last measured container width.
#[derive(Copy, Clone, Debug, Default, PartialEq)]
pub struct ResizeAdapter {
    width: f64,
}

impl ResizeAdapter {
    /// Create an adapter with no measurement.
    pub const fn new() -> Self {
        Self { width: 0.0 }
    }

    /// Last measured width, `0.0` until measured.
    pub const fn width(&self) -> f64 {
        self.width
    }

    /// True once a positive width has been observed.
    pub fn is_measured(&self) -> bool {
        self.width > 0.0
    }

    /// Record a measurement. Returns the new width if it changed.
    pub fn observe(&mut self, measured: f64) -> Option<f64> {
        let width = if measured.is_finite() && measured > 0.0 {
            measured
        } else {
            0.0
        };
        if width == self.width {
            return None;
        }
        self.width = width;
        Some(width)
    }
}
