// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! Annotation list panel.
//!
//! This module provides the side panel listing the current image's
//! annotations, with per-box removal.

use crate::models::project::ImageRecord;

/// Result of annotation panel interaction.
pub enum PanelAction {
    None,
    RemoveBox(String),
}

/// Display the annotation list for the current image.
pub fn show(ui: &mut egui::Ui, image: Option<&ImageRecord>) -> PanelAction {
    let mut action = PanelAction::None;

    ui.heading("Annotations");
    ui.separator();

    let Some(record) = image else {
        ui.label(egui::RichText::new("No image selected.").weak());
        return action;
    };

    if record.boxes.is_empty() {
        ui.label(egui::RichText::new("No annotations for this image.").weak());
        return action;
    }

    egui::ScrollArea::vertical().show(ui, |ui| {
        for bbox in &record.boxes {
            ui.horizontal(|ui| {
                ui.label(&bbox.label);
                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    if ui.small_button("✕").clicked() {
                        action = PanelAction::RemoveBox(bbox.id.clone());
                    }
                    ui.label(
                        egui::RichText::new(format!(
                            "{:.0}×{:.0}",
                            bbox.width, bbox.height
                        ))
                        .weak()
                        .small(),
                    );
                });
            });
        }
    });

    action
}
