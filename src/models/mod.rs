// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! Data model for projects and annotations.

pub mod annotation;
pub mod project;
