// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! Thumbnail strip for direct image selection.

use crate::store::ProjectStore;
use std::collections::HashMap;

/// Display the vertical thumbnail strip. Returns the index of a clicked
/// image, if any.
pub fn show(
    ui: &mut egui::Ui,
    store: &ProjectStore,
    current_index: usize,
    textures: &HashMap<String, egui::TextureHandle>,
) -> Option<usize> {
    let mut selected = None;

    egui::ScrollArea::vertical().show(ui, |ui| {
        for (index, record) in store.project().images.iter().enumerate() {
            let is_current = index == current_index;

            if let Some(texture) = textures.get(&record.id) {
                let size = texture.size_vec2();
                let width = ui.available_width().max(1.0);
                let thumb = egui::vec2(width, width * size.y / size.x.max(1.0));
                let response = ui
                    .add(
                        egui::Image::new(texture)
                            .fit_to_exact_size(thumb)
                            .sense(egui::Sense::click()),
                    )
                    .on_hover_text(&record.name);

                if is_current {
                    ui.painter().rect_stroke(
                        response.rect,
                        2.0,
                        egui::Stroke::new(2.0, egui::Color32::from_rgb(59, 130, 246)),
                    );
                }
                if response.clicked() {
                    selected = Some(index);
                }
            } else if ui.selectable_label(is_current, &record.name).clicked() {
                selected = Some(index);
            }

            ui.add_space(4.0);
        }
    });

    selected
}
