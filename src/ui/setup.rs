// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! Project setup screen.
//!
//! This module renders the initial screen where the user names a new
//! project and picks the image files that make up its dataset.

use std::path::PathBuf;

/// Result of setup screen interaction.
pub enum SetupAction {
    None,
    PickImages,
    Create,
}

/// Display the project setup form.
pub fn show(
    ui: &mut egui::Ui,
    project_name: &mut String,
    picked_files: &[PathBuf],
    error: Option<&str>,
    is_loading: bool,
) -> SetupAction {
    let mut action = SetupAction::None;

    ui.vertical_centered(|ui| {
        ui.add_space(60.0);
        ui.heading(egui::RichText::new("Create New Detection Project").size(28.0));
        ui.label(
            egui::RichText::new(
                "Start by giving your project a name and selecting your image dataset.",
            )
            .weak(),
        );
        ui.add_space(30.0);

        ui.set_max_width(480.0);

        ui.with_layout(egui::Layout::top_down(egui::Align::LEFT), |ui| {
            ui.label("Project Name");
            ui.add(
                egui::TextEdit::singleline(project_name)
                    .hint_text("e.g., Road Sign Detection")
                    .desired_width(f32::INFINITY),
            );
            ui.add_space(15.0);

            ui.label("Image Dataset");
            if ui
                .add_enabled(!is_loading, egui::Button::new("Select Images..."))
                .clicked()
            {
                action = SetupAction::PickImages;
            }
            if !picked_files.is_empty() {
                let plural = if picked_files.len() > 1 { "s" } else { "" };
                ui.label(
                    egui::RichText::new(format!(
                        "{} file{} selected.",
                        picked_files.len(),
                        plural
                    ))
                    .weak(),
                );
            }
            ui.add_space(15.0);

            if let Some(message) = error {
                ui.colored_label(egui::Color32::from_rgb(239, 68, 68), message);
                ui.add_space(10.0);
            }

            if is_loading {
                ui.horizontal(|ui| {
                    ui.spinner();
                    ui.label("Loading images...");
                });
            } else if ui
                .add_sized([ui.available_width(), 36.0], egui::Button::new("Create Project"))
                .clicked()
            {
                action = SetupAction::Create;
            }
        });
    });

    action
}
