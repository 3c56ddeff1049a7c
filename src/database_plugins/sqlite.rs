// ABOUTME: SQLite implementation of the record store trait
// ABOUTME: Delegates to the inherent Database operations
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use super::DatabaseProvider;
use crate::database::Database;
use crate::errors::AppResult;
use crate::models::{Chef, NewRecipe, Recipe};
use crate::recipes::RecipeFilter;
use async_trait::async_trait;

#[async_trait]
impl DatabaseProvider for Database {
    async fn migrate(&self) -> AppResult<()> {
        Self::migrate(self).await
    }

    async fn ping(&self) -> AppResult<()> {
        Self::ping(self).await
    }

    async fn create_chef(
        &self,
        username: &str,
        password_hash: &str,
        token_hash: &str,
    ) -> AppResult<Option<Chef>> {
        Self::create_chef(self, username, password_hash, token_hash).await
    }

    async fn get_chef(&self, chef_id: i64) -> AppResult<Option<Chef>> {
        Self::get_chef(self, chef_id).await
    }

    async fn get_chef_by_username(&self, username: &str) -> AppResult<Option<Chef>> {
        Self::get_chef_by_username(self, username).await
    }

    async fn get_chef_by_token_hash(&self, token_hash: &str) -> AppResult<Option<Chef>> {
        Self::get_chef_by_token_hash(self, token_hash).await
    }

    async fn create_recipe(&self, recipe: &NewRecipe) -> AppResult<Recipe> {
        Self::create_recipe(self, recipe).await
    }

    async fn get_recipe(&self, recipe_id: i64) -> AppResult<Option<Recipe>> {
        Self::get_recipe(self, recipe_id).await
    }

    async fn list_recipes(&self, filter: &RecipeFilter) -> AppResult<Vec<Recipe>> {
        Self::list_recipes(self, filter).await
    }

    async fn update_recipe(
        &self,
        recipe_id: i64,
        recipe: &NewRecipe,
    ) -> AppResult<Option<Recipe>> {
        Self::update_recipe(self, recipe_id, recipe).await
    }

    async fn delete_recipe(&self, recipe_id: i64) -> AppResult<bool> {
        Self::delete_recipe(self, recipe_id).await
    }
}
