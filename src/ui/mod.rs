// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! UI components for the Seekbar application.

pub mod bar;
pub mod duration;
pub mod timer;
