// ABOUTME: Re-exports the domain models from recipe-core
// ABOUTME: Chef and recipe records plus the duration codec
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

pub use recipe_core::models::*;
