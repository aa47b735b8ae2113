// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! Annotation data structures.
//!
//! This module defines the core data structures for representing
//! bounding boxes and the transient geometry used while drawing them.

use serde::{Deserialize, Serialize};

/// A 2D point in image-surface pixel coordinates.
///
/// Used only for in-progress drag geometry; points are never persisted.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// An axis-aligned rectangle in image-surface pixel coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Rect {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

/// A labeled bounding box over one image.
///
/// Coordinates are offsets from the top-left corner of the image display
/// surface. Persisted boxes always have width and height above the
/// minimum-size threshold; smaller drags are discarded before a box exists.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BoundingBox {
    pub id: String,
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
    pub label: String,
}

impl BoundingBox {
    /// Create a new bounding box from a rectangle, id and label.
    pub fn new(id: String, rect: Rect, label: String) -> Self {
        Self {
            id,
            x: rect.x,
            y: rect.y,
            width: rect.width,
            height: rect.height,
            label,
        }
    }

    /// The box extent as a rectangle.
    pub fn rect(&self) -> Rect {
        Rect {
            x: self.x,
            y: self.y,
            width: self.width,
            height: self.height,
        }
    }
}
