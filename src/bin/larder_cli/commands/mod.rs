// ABOUTME: Re-exports command modules for the larder CLI
// ABOUTME: Provides the shopping-list, scale, and classify commands
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

pub mod classify;
pub mod scale;
pub mod shopping_list;
