// ABOUTME: Record store abstraction used by the recipe and credential services
// ABOUTME: Keyed CRUD plus filtered scan over chefs, tokens and recipes
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use crate::errors::AppResult;
use crate::models::{Chef, NewRecipe, Recipe};
use crate::recipes::RecipeFilter;
use async_trait::async_trait;

/// `SQLite` implementation
pub mod sqlite;

/// Core record store trait
///
/// Services are generic over this trait so the storage engine stays behind a
/// seam.
#[async_trait]
pub trait DatabaseProvider: Send + Sync + Clone + 'static {
    /// Run database migrations to set up schema
    async fn migrate(&self) -> AppResult<()>;

    /// Check that the store answers queries
    async fn ping(&self) -> AppResult<()>;

    // ================================
    // Chefs
    // ================================

    /// Create a chef with an issued token hash; `None` if the username is taken
    async fn create_chef(
        &self,
        username: &str,
        password_hash: &str,
        token_hash: &str,
    ) -> AppResult<Option<Chef>>;

    /// Get chef by id
    async fn get_chef(&self, chef_id: i64) -> AppResult<Option<Chef>>;

    /// Get chef by username (case-insensitive)
    async fn get_chef_by_username(&self, username: &str) -> AppResult<Option<Chef>>;

    /// Get the chef owning a token hash
    async fn get_chef_by_token_hash(&self, token_hash: &str) -> AppResult<Option<Chef>>;

    // ================================
    // Recipes
    // ================================

    /// Persist a validated recipe
    async fn create_recipe(&self, recipe: &NewRecipe) -> AppResult<Recipe>;

    /// Get recipe by id
    async fn get_recipe(&self, recipe_id: i64) -> AppResult<Option<Recipe>>;

    /// List recipes matching the filter, newest first
    async fn list_recipes(&self, filter: &RecipeFilter) -> AppResult<Vec<Recipe>>;

    /// Replace a recipe; `None` if it does not exist
    async fn update_recipe(&self, recipe_id: i64, recipe: &NewRecipe)
        -> AppResult<Option<Recipe>>;

    /// Delete a recipe; `false` if it does not exist
    async fn delete_recipe(&self, recipe_id: i64) -> AppResult<bool>;
}
