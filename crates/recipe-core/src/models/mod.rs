// ABOUTME: Core data models shared by the record store, services and HTTP layer
// ABOUTME: Chef identities, recipe records and the duration wire codec
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

/// Chef identity model
pub mod chef;
/// Duration parsing and rendering
pub mod duration;
/// Recipe record model
pub mod recipe;

pub use chef::{Chef, ChefRef};
pub use recipe::{NewRecipe, Recipe, RecipeFields};
