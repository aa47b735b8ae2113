// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! Geometric utility functions.
//!
//! This module provides utilities for drag geometry: building an
//! axis-aligned rectangle from two corner points and applying the
//! minimum-size policy for persisted boxes.

use crate::models::annotation::{Point, Rect};

/// Minimum width and height (in surface pixels) a drag must exceed for
/// its rectangle to become a persisted box.
pub const MIN_BOX_EXTENT: f64 = 5.0;

/// The axis-aligned bounding rectangle of two points.
pub fn rect_from_corners(a: Point, b: Point) -> Rect {
    Rect {
        x: a.x.min(b.x),
        y: a.y.min(b.y),
        width: (a.x - b.x).abs(),
        height: (a.y - b.y).abs(),
    }
}

/// Whether a candidate rectangle is large enough to persist.
pub fn qualifies(rect: &Rect) -> bool {
    rect.width > MIN_BOX_EXTENT && rect.height > MIN_BOX_EXTENT
}
