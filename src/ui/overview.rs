// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! Project overview page.
//!
//! This module renders dataset statistics and a preview grid, computed
//! only from the committed project snapshot.

use crate::store::ProjectStore;
use std::collections::HashMap;

/// Maximum number of thumbnails in the preview grid.
const PREVIEW_LIMIT: usize = 20;

/// Display the overview page for the project.
pub fn show(
    ui: &mut egui::Ui,
    store: &ProjectStore,
    textures: &HashMap<String, egui::TextureHandle>,
) {
    let project = store.project();

    ui.heading("Project Overview");
    ui.add_space(10.0);

    ui.horizontal(|ui| {
        stat_card(ui, "Total Images", &project.image_count().to_string());
        stat_card(
            ui,
            "Labeled Images",
            &format!("{} / {}", project.labeled_image_count(), project.image_count()),
        );
        stat_card(ui, "Total Annotations", &project.box_count().to_string());
        stat_card(ui, "Unique Classes", &project.unique_label_count().to_string());
    });

    ui.add_space(20.0);
    ui.heading("Dataset Preview");
    ui.add_space(10.0);

    if project.images.is_empty() {
        ui.label(egui::RichText::new("No images in this project yet.").weak());
        return;
    }

    egui::ScrollArea::vertical().show(ui, |ui| {
        ui.horizontal_wrapped(|ui| {
            for record in project.images.iter().take(PREVIEW_LIMIT) {
                if let Some(texture) = textures.get(&record.id) {
                    ui.add(
                        egui::Image::new(texture)
                            .fit_to_exact_size(egui::vec2(96.0, 96.0)),
                    )
                    .on_hover_text(&record.name);
                } else {
                    ui.label(&record.name);
                }
            }
        });
    });
}

fn stat_card(ui: &mut egui::Ui, title: &str, value: &str) {
    egui::Frame::group(ui.style())
        .inner_margin(egui::Margin::same(12.0))
        .show(ui, |ui| {
            ui.vertical(|ui| {
                ui.label(egui::RichText::new(title).weak().small());
                ui.label(egui::RichText::new(value).size(24.0).strong());
            });
        });
}
