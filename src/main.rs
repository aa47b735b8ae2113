// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! Onsite Trainer
//!
//! A cross-platform desktop application for building bounding-box image
//! datasets: create a project from local images, then draw labeled boxes
//! over each image.

mod app;
mod editor;
mod io;
mod models;
mod store;
mod ui;
mod util;

use anyhow::Result;
use app::TrainerApp;

fn main() -> Result<()> {
    // Initialize logging
    env_logger::init();

    // Configure egui options
    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([1280.0, 720.0])
            .with_min_inner_size([800.0, 600.0])
            .with_title("Onsite Trainer"),
        ..Default::default()
    };

    // Run the application
    eframe::run_native(
        "Onsite Trainer",
        options,
        Box::new(|_cc| Ok(Box::new(TrainerApp::new()))),
    )
    .map_err(|e| anyhow::anyhow!("Application error: {}", e))?;

    Ok(())
}
