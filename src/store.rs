// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! Owned project store.
//!
//! The store is the single source of truth for project data. Writers
//! replace the whole project in one commit; readers (overview statistics,
//! thumbnail strip, annotation panel) only ever see committed snapshots.

use crate::models::project::{ImageRecord, Project};

/// Holds the project for the current session.
pub struct ProjectStore {
    project: Project,
}

impl ProjectStore {
    pub fn new(project: Project) -> Self {
        Self { project }
    }

    /// The committed project snapshot.
    pub fn project(&self) -> &Project {
        &self.project
    }

    pub fn image_count(&self) -> usize {
        self.project.images.len()
    }

    pub fn image(&self, index: usize) -> Option<&ImageRecord> {
        self.project.images.get(index)
    }

    /// Replace the whole project. Called once per completed edit.
    pub fn commit(&mut self, project: Project) {
        self.project = project;
    }

    /// Remove a box by id from one image, as a whole-list replacement.
    ///
    /// Unknown indices and ids are no-ops.
    pub fn remove_box(&mut self, image_index: usize, box_id: &str) {
        let Some(record) = self.project.images.get(image_index) else {
            return;
        };
        let boxes: Vec<_> = record
            .boxes
            .iter()
            .filter(|b| b.id != box_id)
            .cloned()
            .collect();
        if boxes.len() == record.boxes.len() {
            return;
        }

        let mut updated = self.project.clone();
        updated.images[image_index].boxes = boxes;
        log::info!(
            "Removed box {} from image {}, remaining: {}",
            box_id,
            image_index,
            updated.images[image_index].boxes.len()
        );
        self.commit(updated);
    }
}
