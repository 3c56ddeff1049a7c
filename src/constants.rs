// ABOUTME: Re-exports the shared constants from recipe-core
// ABOUTME: Routes, limits, messages and environment variable names
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

pub use recipe_core::constants::*;
