// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! Headless state of the progress bar: geometry, drag, markers, commits.

pub mod commit;
pub mod config;
pub mod drag;
pub mod duration;
pub mod marker;
pub mod progress_bar;
pub mod timeline;
