// ABOUTME: Recipe service orchestrating validation, owner resolution and persistence
// ABOUTME: Every operation takes the acting chef as an explicit argument
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use super::filter::RecipeFilter;
use super::ownership::{resolve_owner, OwnerPolicy, OwnerSource, WriteKind};
use super::validation::{fields, validate_chef_reference, validate_fields};
use crate::database_plugins::DatabaseProvider;
use crate::errors::{AppError, AppResult, ValidationErrors, Violation};
use crate::logging::AppLogger;
use crate::models::{Chef, NewRecipe, Recipe};
use serde_json::{Map, Value};
use std::sync::Arc;
use tracing::debug;

/// Recipe operations over a record store
pub struct RecipeService<D: DatabaseProvider> {
    database: Arc<D>,
    owner_policy: OwnerPolicy,
}

impl<D: DatabaseProvider> Clone for RecipeService<D> {
    fn clone(&self) -> Self {
        Self {
            database: Arc::clone(&self.database),
            owner_policy: self.owner_policy,
        }
    }
}

impl<D: DatabaseProvider> RecipeService<D> {
    /// Create a service over `database`
    #[must_use]
    pub const fn new(database: Arc<D>, owner_policy: OwnerPolicy) -> Self {
        Self {
            database,
            owner_policy,
        }
    }

    /// Owner policy applied to updates
    #[must_use]
    pub const fn owner_policy(&self) -> OwnerPolicy {
        self.owner_policy
    }

    /// Validate and persist a new recipe
    ///
    /// # Errors
    ///
    /// Unauthorized without an actor, `ValidationFailed` with every field
    /// violation, or a database error
    #[tracing::instrument(skip(self, payload, actor), fields(chef = actor.map(|c| c.username.as_str())))]
    pub async fn create(
        &self,
        payload: &Map<String, Value>,
        actor: Option<&Chef>,
    ) -> AppResult<Recipe> {
        if actor.is_none() {
            return Err(AppError::missing_owner());
        }

        let new_recipe = self.prepare_write(payload, actor, WriteKind::Create).await?;
        let recipe = self.database.create_recipe(&new_recipe).await?;

        AppLogger::log_recipe_write("create", recipe.id, &recipe.chef.username);
        Ok(recipe)
    }

    /// Fetch one recipe; no authentication required
    ///
    /// # Errors
    ///
    /// `ResourceNotFound` for an unknown id, or a database error
    pub async fn retrieve(&self, recipe_id: i64) -> AppResult<Recipe> {
        self.database
            .get_recipe(recipe_id)
            .await?
            .ok_or_else(|| not_found(recipe_id))
    }

    /// List recipes matching `filter`, newest first; no authentication required
    ///
    /// # Errors
    ///
    /// Returns a database error if the scan fails
    #[tracing::instrument(skip(self))]
    pub async fn list(&self, filter: &RecipeFilter) -> AppResult<Vec<Recipe>> {
        let recipes = self.database.list_recipes(filter).await?;
        debug!(count = recipes.len(), "Listed recipes");
        Ok(recipes)
    }

    /// Replace every mutable field of an existing recipe
    ///
    /// # Errors
    ///
    /// Unauthorized without an actor, `ResourceNotFound` for an unknown id,
    /// `ValidationFailed` with every field violation, or a database error
    #[tracing::instrument(skip(self, payload, actor), fields(chef = actor.map(|c| c.username.as_str())))]
    pub async fn update(
        &self,
        recipe_id: i64,
        payload: &Map<String, Value>,
        actor: Option<&Chef>,
    ) -> AppResult<Recipe> {
        if actor.is_none() {
            return Err(AppError::missing_owner());
        }

        let current = self.retrieve(recipe_id).await?;
        let new_recipe = self
            .prepare_write(
                payload,
                actor,
                WriteKind::Update {
                    current_owner: &current.chef,
                },
            )
            .await?;

        let recipe = self
            .database
            .update_recipe(recipe_id, &new_recipe)
            .await?
            .ok_or_else(|| not_found(recipe_id))?;

        AppLogger::log_recipe_write("update", recipe.id, &recipe.chef.username);
        Ok(recipe)
    }

    /// Delete a recipe; any authenticated chef may delete
    ///
    /// # Errors
    ///
    /// Unauthorized without an actor, `ResourceNotFound` for an unknown id,
    /// or a database error
    #[tracing::instrument(skip(self, actor), fields(chef = actor.map(|c| c.username.as_str())))]
    pub async fn delete(&self, recipe_id: i64, actor: Option<&Chef>) -> AppResult<()> {
        let Some(actor) = actor else {
            return Err(AppError::auth_required());
        };

        if !self.database.delete_recipe(recipe_id).await? {
            return Err(not_found(recipe_id));
        }

        AppLogger::log_recipe_write("delete", recipe_id, &actor.username);
        Ok(())
    }

    /// Validate the payload and resolve its owner
    async fn prepare_write(
        &self,
        payload: &Map<String, Value>,
        actor: Option<&Chef>,
        write: WriteKind<'_>,
    ) -> AppResult<NewRecipe> {
        let mut errors = ValidationErrors::new();
        let fields = validate_fields(payload, &mut errors);
        let explicit = errors
            .check(
                fields::CHEF,
                validate_chef_reference(payload.get(fields::CHEF)),
            )
            .flatten();

        let owner = match resolve_owner(explicit, actor, write, self.owner_policy) {
            Ok(owner) => owner,
            Err(Violation::MissingOwner) => return Err(AppError::missing_owner()),
            Err(violation) => {
                errors.add(fields::CHEF, violation);
                return Err(errors.into());
            }
        };

        if owner.source == OwnerSource::Explicit {
            self.ensure_chef_exists(owner.chef_id, &mut errors).await?;
        }

        match (fields, errors.into_result()) {
            (Some(fields), Ok(())) => {
                debug!(chef_id = owner.chef_id, source = ?owner.source, "Resolved recipe owner");
                Ok(NewRecipe {
                    fields,
                    chef_id: owner.chef_id,
                })
            }
            (_, Err(errors)) => Err(errors.into()),
            (None, Ok(())) => Err(AppError::internal(
                "Validation produced no fields and no violations",
            )),
        }
    }

    async fn ensure_chef_exists(
        &self,
        chef_id: i64,
        errors: &mut ValidationErrors,
    ) -> AppResult<()> {
        if self.database.get_chef(chef_id).await?.is_none() {
            errors.add(fields::CHEF, Violation::UnknownReference(chef_id.to_string()));
        }
        Ok(())
    }
}

fn not_found(recipe_id: i64) -> AppError {
    AppError::not_found(format!("Recipe {recipe_id}"))
}
