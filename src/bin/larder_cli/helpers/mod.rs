// ABOUTME: Re-exports helper modules for the larder CLI
// ABOUTME: Provides recipe-file loading and terminal display utilities
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

pub mod display;
pub mod recipes_file;
