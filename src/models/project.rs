// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! Project state management.
//!
//! This module manages the project data model: the ordered image dataset
//! and the bounding boxes recorded for each image.

use super::annotation::BoundingBox;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::path::PathBuf;

/// One image in the dataset and its annotations.
///
/// Records are owned exclusively by their [`Project`]; the `id` is stable
/// for the lifetime of the session and the vector order is display order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ImageRecord {
    pub id: String,
    pub name: String,
    pub path: PathBuf,
    pub boxes: Vec<BoundingBox>,
}

impl ImageRecord {
    /// Create a new record with no annotations.
    pub fn new(id: String, name: String, path: PathBuf) -> Self {
        Self {
            id,
            name,
            path,
            boxes: Vec::new(),
        }
    }
}

/// Complete project data for one labeling session.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Project {
    pub name: String,
    pub images: Vec<ImageRecord>,
}

impl Project {
    /// Create a new project with the given name and images.
    pub fn new(name: String, images: Vec<ImageRecord>) -> Self {
        Self { name, images }
    }

    pub fn image_count(&self) -> usize {
        self.images.len()
    }

    /// Number of images with at least one annotation.
    pub fn labeled_image_count(&self) -> usize {
        self.images.iter().filter(|img| !img.boxes.is_empty()).count()
    }

    /// Total number of annotations across all images.
    pub fn box_count(&self) -> usize {
        self.images.iter().map(|img| img.boxes.len()).sum()
    }

    /// Number of distinct label strings across all annotations.
    pub fn unique_label_count(&self) -> usize {
        self.images
            .iter()
            .flat_map(|img| img.boxes.iter().map(|b| b.label.as_str()))
            .collect::<HashSet<_>>()
            .len()
    }
}
