// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! UI components for the Onsite Trainer application.

pub mod canvas;
pub mod overview;
pub mod panel;
pub mod setup;
pub mod thumbnails;
