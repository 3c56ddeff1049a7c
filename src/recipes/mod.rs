// ABOUTME: Recipe write-path and query logic
// ABOUTME: Field validation, owner resolution, list filters and the recipe service
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Recipes
//!
//! Writes flow through three steps: field validation, owner resolution and
//! persistence. For updates the recipe must exist before any field is
//! checked; for every write the actor must be authenticated before anything
//! else.

/// List filters
pub mod filter;
/// Owner resolution
pub mod ownership;
/// Recipe service
pub mod service;
/// Field validation rules
pub mod validation;

pub use filter::{fold_case, RecipeFilter, RecipeListQuery};
pub use ownership::{OwnerPolicy, OwnerResolution, OwnerSource, WriteKind};
pub use service::RecipeService;
