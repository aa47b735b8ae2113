// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! Main application state and egui App implementation.
//!
//! This module contains the main application structure that implements
//! the egui::App trait, coordinating the project setup screen, the
//! workspace views, and the annotation editor.

use crate::editor::AnnotationEditor;
use crate::io::media;
use crate::models::project::{ImageRecord, Project};
use crate::store::ProjectStore;
use crate::ui::{canvas, overview, panel, setup, thumbnails};
use std::collections::HashMap;
use std::path::PathBuf;
use std::sync::mpsc::{channel, Receiver};

/// Workspace view selection.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum View {
    Overview,
    Labeling,
}

/// One image decoded by the background loader.
struct DecodedImage {
    name: String,
    path: PathBuf,
    width: u32,
    height: u32,
    pixels: Vec<u8>,
}

/// Main application state.
pub struct TrainerApp {
    /// Project setup form state
    project_name: String,
    picked_files: Vec<PathBuf>,
    setup_error: Option<String>,

    /// Receiver for background dataset decoding
    dataset_loader: Option<Receiver<Result<Vec<DecodedImage>, String>>>,

    /// Committed project data, present once a project is created
    store: Option<ProjectStore>,

    /// Annotation editor state machine
    editor: AnnotationEditor,

    /// Active workspace view
    active_view: View,

    /// Display textures keyed by image id
    textures: HashMap<String, egui::TextureHandle>,

    /// Text buffer for the label prompt
    label_input: String,
}

impl Default for TrainerApp {
    fn default() -> Self {
        Self::new()
    }
}

impl TrainerApp {
    /// Create a new Onsite Trainer application instance.
    pub fn new() -> Self {
        Self {
            project_name: "My Detection Project".to_string(),
            picked_files: Vec::new(),
            setup_error: None,
            dataset_loader: None,
            store: None,
            editor: AnnotationEditor::new(),
            active_view: View::Overview,
            textures: HashMap::new(),
            label_input: String::new(),
        }
    }

    /// Open the native file picker for dataset images.
    fn pick_images(&mut self) {
        if let Some(paths) = rfd::FileDialog::new()
            .add_filter("Images", media::IMAGE_EXTENSIONS)
            .pick_files()
        {
            log::info!("Selected {} dataset files", paths.len());
            self.picked_files = paths;
        }
    }

    /// Validate the setup form and start decoding the dataset.
    fn create_project(&mut self) {
        if self.project_name.trim().is_empty() {
            self.setup_error = Some("Project name is required.".to_string());
            return;
        }
        if self.picked_files.is_empty() {
            self.setup_error = Some("Please select at least one image.".to_string());
            return;
        }
        self.setup_error = None;

        let paths = self.picked_files.clone();
        let (sender, receiver) = channel();
        self.dataset_loader = Some(receiver);

        // Decode on a background thread; failed files are skipped
        std::thread::spawn(move || {
            let mut decoded = Vec::new();
            for path in paths {
                match media::load_image(&path) {
                    Ok(img) => {
                        let name = path
                            .file_name()
                            .map(|n| n.to_string_lossy().to_string())
                            .unwrap_or_else(|| path.display().to_string());
                        decoded.push(DecodedImage {
                            name,
                            path,
                            width: img.width,
                            height: img.height,
                            pixels: img.pixels,
                        });
                    }
                    Err(e) => log::error!("Skipping image: {:#}", e),
                }
            }

            let result = if decoded.is_empty() {
                Err("None of the selected files could be loaded as images.".to_string())
            } else {
                Ok(decoded)
            };
            let _ = sender.send(result);
        });
    }

    /// Build the project and its display textures from decoded images.
    fn finish_project_creation(&mut self, ctx: &egui::Context, decoded: Vec<DecodedImage>) {
        let mut images = Vec::with_capacity(decoded.len());
        self.textures.clear();

        for (index, img) in decoded.into_iter().enumerate() {
            let id = format!("img_{}", index);

            let size = [img.width as usize, img.height as usize];
            let color_image = egui::ColorImage::from_rgba_unmultiplied(size, &img.pixels);
            let texture = ctx.load_texture(&id, color_image, egui::TextureOptions::LINEAR);
            self.textures.insert(id.clone(), texture);

            images.push(ImageRecord::new(id, img.name, img.path));
        }

        let project = Project::new(self.project_name.trim().to_string(), images);
        log::info!(
            "Created project '{}' with {} images",
            project.name,
            project.image_count()
        );

        self.store = Some(ProjectStore::new(project));
        self.editor = AnnotationEditor::new();
        self.active_view = View::Overview;
    }

    /// Poll the background loader once per frame.
    fn poll_dataset_loader(&mut self, ctx: &egui::Context) {
        let Some(receiver) = &self.dataset_loader else {
            return;
        };
        if let Ok(result) = receiver.try_recv() {
            self.dataset_loader = None;
            match result {
                Ok(decoded) => self.finish_project_creation(ctx, decoded),
                Err(e) => {
                    log::error!("Failed to create project: {}", e);
                    self.setup_error = Some(e);
                }
            }
        } else {
            ctx.request_repaint();
        }
    }

    fn show_setup_screen(&mut self, ctx: &egui::Context) {
        let is_loading = self.dataset_loader.is_some();
        let action = egui::CentralPanel::default()
            .show(ctx, |ui| {
                setup::show(
                    ui,
                    &mut self.project_name,
                    &self.picked_files,
                    self.setup_error.as_deref(),
                    is_loading,
                )
            })
            .inner;

        match action {
            setup::SetupAction::PickImages => self.pick_images(),
            setup::SetupAction::Create => self.create_project(),
            setup::SetupAction::None => {}
        }
    }

    fn show_workspace(&mut self, ctx: &egui::Context) {
        // Taken for the frame so panel closures can borrow it alongside
        // the other fields; put back below.
        let Some(mut store) = self.store.take() else {
            return;
        };

        // Navigation sidebar
        egui::SidePanel::left("nav")
            .resizable(false)
            .default_width(180.0)
            .show(ctx, |ui| {
                ui.add_space(8.0);
                ui.heading(&store.project().name);
                ui.separator();

                if ui
                    .selectable_label(self.active_view == View::Overview, "Overview")
                    .clicked()
                {
                    self.active_view = View::Overview;
                }
                if ui
                    .selectable_label(self.active_view == View::Labeling, "Labeling")
                    .clicked()
                {
                    self.active_view = View::Labeling;
                }

                ui.with_layout(egui::Layout::bottom_up(egui::Align::Center), |ui| {
                    ui.add_space(8.0);
                    ui.label(egui::RichText::new("Onsite Trainer v1.0").weak().small());
                });
            });

        match self.active_view {
            View::Overview => {
                egui::CentralPanel::default().show(ctx, |ui| {
                    overview::show(ui, &store, &self.textures);
                });
            }
            View::Labeling => {
                Self::show_labeling_view(
                    ctx,
                    &mut store,
                    &mut self.editor,
                    &self.textures,
                    &mut self.label_input,
                );
            }
        }

        self.store = Some(store);
    }

    fn show_labeling_view(
        ctx: &egui::Context,
        store: &mut ProjectStore,
        editor: &mut AnnotationEditor,
        textures: &HashMap<String, egui::TextureHandle>,
        label_input: &mut String,
    ) {
        // Thumbnail strip
        let selected = egui::SidePanel::left("thumbnails")
            .resizable(false)
            .default_width(140.0)
            .show(ctx, |ui| thumbnails::show(ui, store, editor.current_index(), textures))
            .inner;
        if let Some(index) = selected {
            editor.select_image(store, index);
            log::info!("Selected image {}", index);
        }

        // Annotation list
        let panel_action = egui::SidePanel::right("annotations")
            .default_width(220.0)
            .show(ctx, |ui| {
                panel::show(ui, store.image(editor.current_index()))
            })
            .inner;
        if let panel::PanelAction::RemoveBox(box_id) = panel_action {
            store.remove_box(editor.current_index(), &box_id);
        }

        // Previous / next navigation
        egui::TopBottomPanel::bottom("image_nav").show(ctx, |ui| {
            ui.horizontal(|ui| {
                ui.with_layout(
                    egui::Layout::centered_and_justified(egui::Direction::LeftToRight),
                    |ui| {
                        ui.horizontal(|ui| {
                            if ui.button("◀ Previous").clicked() {
                                editor.prev_image(store);
                            }
                            ui.label(format!(
                                "{} / {}",
                                editor.current_index() + 1,
                                store.image_count().max(1)
                            ));
                            if ui.button("Next ▶").clicked() {
                                editor.next_image(store);
                            }
                        });
                    },
                );
            });
        });

        // Arrow keys navigate too, unless the label prompt is up
        if !editor.awaiting_label() && !ctx.wants_keyboard_input() {
            if ctx.input(|i| i.key_pressed(egui::Key::ArrowLeft)) {
                editor.prev_image(store);
            }
            if ctx.input(|i| i.key_pressed(egui::Key::ArrowRight)) {
                editor.next_image(store);
            }
        }

        // Canvas
        let current_texture = store
            .image(editor.current_index())
            .and_then(|record| textures.get(&record.id));
        let canvas_action = egui::CentralPanel::default()
            .show(ctx, |ui| canvas::show(ui, store, editor, current_texture))
            .inner;

        match canvas_action {
            canvas::CanvasAction::PointerDown(point) => editor.pointer_down(store, point),
            canvas::CanvasAction::PointerMove(point) => editor.pointer_move(point),
            canvas::CanvasAction::PointerUp => editor.pointer_up(),
            canvas::CanvasAction::None => {}
        }

        // Label prompt for a finished drag. Cancelling still commits the
        // box, with the default label.
        if editor.awaiting_label() {
            let mut submit = None;
            egui::Window::new("Label")
                .collapsible(false)
                .resizable(false)
                .anchor(egui::Align2::CENTER_CENTER, egui::vec2(0.0, 0.0))
                .show(ctx, |ui| {
                    ui.label("Enter label for this box:");
                    let response = ui.text_edit_singleline(label_input);
                    response.request_focus();
                    if ui.input(|i| i.key_pressed(egui::Key::Enter)) {
                        submit = Some(Some(label_input.clone()));
                    }
                    ui.horizontal(|ui| {
                        if ui.button("Add").clicked() {
                            submit = Some(Some(label_input.clone()));
                        }
                        if ui.button("Cancel").clicked() {
                            submit = Some(None);
                        }
                    });
                });

            if let Some(label) = submit {
                editor.resolve_label(store, label);
                label_input.clear();
            }
        }
    }
}

impl eframe::App for TrainerApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.poll_dataset_loader(ctx);

        if self.store.is_some() {
            self.show_workspace(ctx);
        } else {
            self.show_setup_screen(ctx);
        }
    }
}
