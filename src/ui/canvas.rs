// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! Drawing canvas for image display and box annotation.
//!
//! This module provides the labeling canvas where users view the current
//! image and drag out bounding boxes. Pointer gestures are reported back
//! as actions in surface-local coordinates; the app routes them into the
//! editor state machine.

use crate::editor::AnnotationEditor;
use crate::models::annotation::Point;
use crate::store::ProjectStore;

/// Result of canvas interaction, in image-surface coordinates.
pub enum CanvasAction {
    None,
    PointerDown(Point),
    PointerMove(Point),
    PointerUp,
}

/// Display the canvas area and collect pointer gestures.
pub fn show(
    ui: &mut egui::Ui,
    store: &ProjectStore,
    editor: &AnnotationEditor,
    image_texture: Option<&egui::TextureHandle>,
) -> CanvasAction {
    let mut action = CanvasAction::None;
    ui.style_mut().visuals.extreme_bg_color = egui::Color32::from_gray(40);

    let available_size = ui.available_size();

    egui::Frame::canvas(ui.style()).show(ui, |ui| {
        ui.set_min_size(available_size);

        let Some(texture) = image_texture else {
            show_empty_state(ui, store);
            return;
        };

        // Fit the image into the available space, preserving aspect ratio
        let available = ui.available_size();
        let texture_size = texture.size_vec2();
        let img_aspect = texture_size.x / texture_size.y;
        let available_aspect = available.x / available.y;

        let (display_width, display_height) = if img_aspect > available_aspect {
            (available.x, available.x / img_aspect)
        } else {
            (available.y * img_aspect, available.y)
        };

        let x_offset = (available.x - display_width) / 2.0;
        let y_offset = (available.y - display_height) / 2.0;

        let image_rect = egui::Rect::from_min_size(
            ui.min_rect().min + egui::vec2(x_offset, y_offset),
            egui::vec2(display_width, display_height),
        );

        ui.painter().image(
            texture.id(),
            image_rect,
            egui::Rect::from_min_max(egui::pos2(0.0, 0.0), egui::pos2(1.0, 1.0)),
            egui::Color32::WHITE,
        );

        // Pointer gestures over the image surface. A pointer that leaves
        // the surface mid-drag is reported as a release so the drag can
        // never stick. The label modal suppresses interaction while open.
        if !editor.awaiting_label() {
            let response = ui.allocate_rect(image_rect, egui::Sense::click_and_drag());

            if let Some(pos) = response.interact_pointer_pos() {
                let local = Point::new(
                    (pos.x - image_rect.min.x) as f64,
                    (pos.y - image_rect.min.y) as f64,
                );
                if response.drag_started() && image_rect.contains(pos) {
                    action = CanvasAction::PointerDown(local);
                } else if response.dragged() {
                    if image_rect.contains(pos) {
                        action = CanvasAction::PointerMove(local);
                    } else {
                        action = CanvasAction::PointerUp;
                    }
                }
            }
            if response.drag_stopped() {
                action = CanvasAction::PointerUp;
            }
        }

        // Committed boxes in blue, the live candidate in green
        let painter = ui.painter();
        for draw_box in editor.boxes_to_draw(store) {
            let rect = egui::Rect::from_min_size(
                image_rect.min
                    + egui::vec2(draw_box.rect.x as f32, draw_box.rect.y as f32),
                egui::vec2(draw_box.rect.width as f32, draw_box.rect.height as f32),
            );
            let (fill, stroke) = if draw_box.label.is_some() {
                (
                    egui::Color32::from_rgba_unmultiplied(59, 130, 246, 50),
                    egui::Color32::from_rgb(96, 165, 250),
                )
            } else {
                (
                    egui::Color32::from_rgba_unmultiplied(34, 197, 94, 75),
                    egui::Color32::from_rgb(74, 222, 128),
                )
            };
            painter.rect_filled(rect, 0.0, fill);
            painter.rect_stroke(rect, 0.0, egui::Stroke::new(2.0, stroke));

            if let Some(label) = &draw_box.label {
                painter.text(
                    rect.min + egui::vec2(2.0, -2.0),
                    egui::Align2::LEFT_BOTTOM,
                    label,
                    egui::FontId::proportional(12.0),
                    stroke,
                );
            }
        }
    });

    ui.separator();
    ui.horizontal(|ui| {
        if store.image_count() > 0 {
            ui.label(format!(
                "Image {} / {}",
                editor.current_index() + 1,
                store.image_count()
            ));
            ui.separator();
            ui.label("Drag to draw a box");
        } else {
            ui.label("No images in project");
        }
    });

    action
}

fn show_empty_state(ui: &mut egui::Ui, store: &ProjectStore) {
    ui.centered_and_justified(|ui| {
        let message = if store.image_count() == 0 {
            "No images in this project"
        } else {
            "Loading image..."
        };
        ui.label(egui::RichText::new(message).color(egui::Color32::from_gray(180)));
    });
}
