// ABOUTME: Recipe database operations
// ABOUTME: Create, fetch, filtered listing, full replacement and deletion of recipe rows
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use super::{format_timestamp, parse_timestamp, Database};
use crate::errors::{AppError, AppResult};
use crate::models::duration::to_micros;
use crate::models::{ChefRef, NewRecipe, Recipe};
use crate::recipes::{fold_case, RecipeFilter};
use chrono::{TimeDelta, Utc};
use sqlx::sqlite::SqliteRow;
use sqlx::Row;

const SELECT_RECIPE: &str = r"
    SELECT r.id, r.name, r.description, r.ingredients, r.instructions,
           r.prep_time_us, r.cook_time_us, r.servings,
           r.chef_id, c.username AS chef_username,
           r.created_at, r.updated_at
    FROM recipes r
    JOIN chefs c ON c.id = r.chef_id
";

impl Database {
    /// Create recipes table and indexes
    pub(super) async fn migrate_recipes(&self) -> AppResult<()> {
        sqlx::query(
            r"
            CREATE TABLE IF NOT EXISTS recipes (
                id INTEGER PRIMARY KEY AUTOINCREMENT,
                name TEXT NOT NULL CHECK (length(name) <= 255),
                name_folded TEXT NOT NULL,
                description TEXT,
                ingredients TEXT NOT NULL,
                instructions TEXT NOT NULL,
                prep_time_us INTEGER NOT NULL CHECK (prep_time_us >= 60000000),
                cook_time_us INTEGER NOT NULL CHECK (cook_time_us >= 0),
                servings INTEGER NOT NULL DEFAULT 1 CHECK (servings >= 1),
                chef_id INTEGER NOT NULL REFERENCES chefs(id),
                created_at TEXT NOT NULL,
                updated_at TEXT NOT NULL
            )
            ",
        )
        .execute(&self.pool)
        .await
        .map_err(|e| AppError::database(format!("Failed to create recipes table: {e}")))?;

        sqlx::query("CREATE INDEX IF NOT EXISTS idx_recipes_chef_id ON recipes(chef_id)")
            .execute(&self.pool)
            .await
            .map_err(|e| AppError::database(format!("Failed to create recipe index: {e}")))?;

        sqlx::query(
            "CREATE INDEX IF NOT EXISTS idx_recipes_recency ON recipes(created_at DESC, updated_at DESC)",
        )
        .execute(&self.pool)
        .await
        .map_err(|e| AppError::database(format!("Failed to create recipe index: {e}")))?;

        Ok(())
    }

    /// Insert a validated recipe with server timestamps
    ///
    /// # Errors
    ///
    /// Returns an error if the database operation fails
    pub async fn create_recipe(&self, recipe: &NewRecipe) -> AppResult<Recipe> {
        let now = format_timestamp(Utc::now());
        let fields = &recipe.fields;

        let result = sqlx::query(
            r"
            INSERT INTO recipes (
                name, name_folded, description, ingredients, instructions,
                prep_time_us, cook_time_us, servings, chef_id,
                created_at, updated_at
            ) VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11)
            ",
        )
        .bind(&fields.name)
        .bind(fold_case(&fields.name))
        .bind(&fields.description)
        .bind(&fields.ingredients)
        .bind(&fields.instructions)
        .bind(to_micros(fields.prep_time))
        .bind(to_micros(fields.cook_time))
        .bind(fields.servings)
        .bind(recipe.chef_id)
        .bind(&now)
        .bind(&now)
        .execute(&self.pool)
        .await
        .map_err(|e| AppError::database(format!("Failed to create recipe: {e}")))?;

        let id = result.last_insert_rowid();
        self.get_recipe(id)
            .await?
            .ok_or_else(|| AppError::internal(format!("Recipe {id} vanished after insert")))
    }

    /// Get a recipe by id
    ///
    /// # Errors
    ///
    /// Returns an error if the database operation fails
    pub async fn get_recipe(&self, recipe_id: i64) -> AppResult<Option<Recipe>> {
        let row = sqlx::query(&format!("{SELECT_RECIPE} WHERE r.id = $1"))
            .bind(recipe_id)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| AppError::database(format!("Failed to get recipe: {e}")))?;

        row.as_ref().map(row_to_recipe).transpose()
    }

    /// List recipes matching a filter, newest first
    ///
    /// Both predicates compare against columns folded with [`fold_case`] at
    /// write time, so matching ignores case beyond ASCII.
    ///
    /// # Errors
    ///
    /// Returns an error if the database operation fails
    pub async fn list_recipes(&self, filter: &RecipeFilter) -> AppResult<Vec<Recipe>> {
        let rows = sqlx::query(&format!(
            r"{SELECT_RECIPE}
            WHERE ($1 IS NULL OR r.name_folded LIKE $1 ESCAPE '\')
              AND ($2 IS NULL OR c.username_folded = $2)
            ORDER BY r.created_at DESC, r.updated_at DESC, r.id DESC
            "
        ))
        .bind(filter.like_pattern())
        .bind(filter.folded_chef_username())
        .fetch_all(&self.pool)
        .await
        .map_err(|e| AppError::database(format!("Failed to list recipes: {e}")))?;

        rows.iter().map(row_to_recipe).collect()
    }

    /// Replace every mutable field of a recipe and refresh `updated_at`
    ///
    /// Returns `None` when no recipe has the id.
    ///
    /// # Errors
    ///
    /// Returns an error if the database operation fails
    pub async fn update_recipe(
        &self,
        recipe_id: i64,
        recipe: &NewRecipe,
    ) -> AppResult<Option<Recipe>> {
        let fields = &recipe.fields;

        let result = sqlx::query(
            r"
            UPDATE recipes SET
                name = $2,
                name_folded = $3,
                description = $4,
                ingredients = $5,
                instructions = $6,
                prep_time_us = $7,
                cook_time_us = $8,
                servings = $9,
                chef_id = $10,
                updated_at = $11
            WHERE id = $1
            ",
        )
        .bind(recipe_id)
        .bind(&fields.name)
        .bind(fold_case(&fields.name))
        .bind(&fields.description)
        .bind(&fields.ingredients)
        .bind(&fields.instructions)
        .bind(to_micros(fields.prep_time))
        .bind(to_micros(fields.cook_time))
        .bind(fields.servings)
        .bind(recipe.chef_id)
        .bind(format_timestamp(Utc::now()))
        .execute(&self.pool)
        .await
        .map_err(|e| AppError::database(format!("Failed to update recipe: {e}")))?;

        if result.rows_affected() == 0 {
            return Ok(None);
        }
        self.get_recipe(recipe_id).await
    }

    /// Delete a recipe, returning whether a row was removed
    ///
    /// # Errors
    ///
    /// Returns an error if the database operation fails
    pub async fn delete_recipe(&self, recipe_id: i64) -> AppResult<bool> {
        let result = sqlx::query("DELETE FROM recipes WHERE id = $1")
            .bind(recipe_id)
            .execute(&self.pool)
            .await
            .map_err(|e| AppError::database(format!("Failed to delete recipe: {e}")))?;

        Ok(result.rows_affected() > 0)
    }
}

fn row_to_recipe(row: &SqliteRow) -> AppResult<Recipe> {
    let servings: i64 = row.get("servings");
    let created_at: String = row.get("created_at");
    let updated_at: String = row.get("updated_at");

    Ok(Recipe {
        id: row.get("id"),
        name: row.get("name"),
        description: row.get("description"),
        ingredients: row.get("ingredients"),
        instructions: row.get("instructions"),
        prep_time: TimeDelta::microseconds(row.get("prep_time_us")),
        cook_time: TimeDelta::microseconds(row.get("cook_time_us")),
        servings: i32::try_from(servings)
            .map_err(|e| AppError::internal(format!("Invalid stored servings: {e}")))?,
        chef: ChefRef {
            id: row.get("chef_id"),
            username: row.get("chef_username"),
        },
        created_at: parse_timestamp(&created_at)?,
        updated_at: parse_timestamp(&updated_at)?,
    })
}
