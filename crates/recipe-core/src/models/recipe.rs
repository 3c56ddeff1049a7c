// ABOUTME: Recipe record model and the validated field set used for writes
// ABOUTME: Durations are chrono TimeDelta values; the owner is always present
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use super::chef::ChefRef;
use chrono::{DateTime, TimeDelta, Utc};
use std::fmt;

/// A stored recipe
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Recipe {
    /// Generated identifier, immutable
    pub id: i64,
    /// Display name
    pub name: String,
    /// Optional free-form description
    pub description: Option<String>,
    /// Ingredient list
    pub ingredients: String,
    /// Preparation steps
    pub instructions: String,
    /// Preparation time, at least one minute
    pub prep_time: TimeDelta,
    /// Cooking time, never negative
    pub cook_time: TimeDelta,
    /// Number of servings, at least one
    pub servings: i32,
    /// Owning chef
    pub chef: ChefRef,
    /// Creation timestamp
    pub created_at: DateTime<Utc>,
    /// Last update timestamp
    pub updated_at: DateTime<Utc>,
}

impl fmt::Display for Recipe {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.name)
    }
}

/// Field values that passed every validation rule
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecipeFields {
    /// Display name
    pub name: String,
    /// Optional description
    pub description: Option<String>,
    /// Ingredient list
    pub ingredients: String,
    /// Preparation steps
    pub instructions: String,
    /// Preparation time
    pub prep_time: TimeDelta,
    /// Cooking time
    pub cook_time: TimeDelta,
    /// Number of servings
    pub servings: i32,
}

/// A validated write with its resolved owner, ready for the record store
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewRecipe {
    /// Validated fields
    pub fields: RecipeFields,
    /// Resolved owner id
    pub chef_id: i64,
}
