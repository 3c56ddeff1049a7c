// ABOUTME: Route handlers for the recipes REST API
// ABOUTME: Create, list, retrieve, replace and delete recipes with token authentication
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Recipe routes
//!
//! Reads are public. Writes need an authenticated chef; the actor is resolved
//! on every request so that a bad token is rejected even on reads.

use super::{json_object, require_chef, resolve_actor};
use crate::constants::routes;
use crate::errors::AppError;
use crate::models::duration::format_duration;
use crate::models::Recipe;
use crate::recipes::{RecipeFilter, RecipeListQuery};
use crate::resources::ServerResources;
use axum::{
    extract::{
        rejection::{JsonRejection, QueryRejection},
        Path, Query, State,
    },
    http::{HeaderMap, StatusCode},
    response::{IntoResponse, Response},
    routing::get,
    Json, Router,
};
use chrono::SecondsFormat;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::sync::Arc;

/// Wire form of a recipe
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RecipeResponse {
    /// Recipe id
    pub id: i64,
    /// Owner username
    pub chef: String,
    /// Display name
    pub name: String,
    /// Optional description
    pub description: Option<String>,
    /// Ingredient list
    pub ingredients: String,
    /// Preparation steps
    pub instructions: String,
    /// Preparation time as `[D ]HH:MM:SS[.ffffff]`
    pub prep_time: String,
    /// Cooking time as `[D ]HH:MM:SS[.ffffff]`
    pub cook_time: String,
    /// Number of servings
    pub servings: i32,
    /// Creation timestamp (RFC 3339)
    pub created_at: String,
    /// Last update timestamp (RFC 3339)
    pub updated_at: String,
}

impl From<Recipe> for RecipeResponse {
    fn from(recipe: Recipe) -> Self {
        Self {
            id: recipe.id,
            chef: recipe.chef.username,
            name: recipe.name,
            description: recipe.description,
            ingredients: recipe.ingredients,
            instructions: recipe.instructions,
            prep_time: format_duration(recipe.prep_time),
            cook_time: format_duration(recipe.cook_time),
            servings: recipe.servings,
            created_at: recipe
                .created_at
                .to_rfc3339_opts(SecondsFormat::Micros, true),
            updated_at: recipe
                .updated_at
                .to_rfc3339_opts(SecondsFormat::Micros, true),
        }
    }
}

/// Recipe routes implementation
pub struct RecipeRoutes;

impl RecipeRoutes {
    /// Create all recipe routes
    pub fn routes(resources: Arc<ServerResources>) -> Router {
        Router::new()
            .route(
                routes::RECIPES,
                get(Self::handle_list).post(Self::handle_create),
            )
            .route(
                routes::RECIPE,
                get(Self::handle_get)
                    .put(Self::handle_update)
                    .delete(Self::handle_delete),
            )
            .with_state(resources)
    }

    /// Ids that are not integers cannot name a recipe
    fn parse_id(raw: &str) -> Result<i64, AppError> {
        raw.parse::<i64>()
            .map_err(|_| AppError::not_found(format!("Recipe {raw}")))
    }

    /// Handle GET /recipes/
    async fn handle_list(
        State(resources): State<Arc<ServerResources>>,
        headers: HeaderMap,
        query: Result<Query<RecipeListQuery>, QueryRejection>,
    ) -> Result<Response, AppError> {
        resolve_actor(&headers, &resources).await?;
        let Query(query) = query.map_err(|e| AppError::invalid_input(e.body_text()))?;

        let filter = RecipeFilter::from_query(&query);
        let recipes = resources.recipes.list(&filter).await?;

        let response: Vec<RecipeResponse> = recipes.into_iter().map(Into::into).collect();
        Ok((StatusCode::OK, Json(response)).into_response())
    }

    /// Handle POST /recipes/
    async fn handle_create(
        State(resources): State<Arc<ServerResources>>,
        headers: HeaderMap,
        body: Result<Json<Value>, JsonRejection>,
    ) -> Result<Response, AppError> {
        let actor = resolve_actor(&headers, &resources).await?;
        let chef = require_chef(actor.as_ref())?;
        let payload = json_object(body)?;

        let recipe = resources.recipes.create(&payload, Some(chef)).await?;

        let response: RecipeResponse = recipe.into();
        Ok((StatusCode::CREATED, Json(response)).into_response())
    }

    /// Handle GET /recipes/:id/
    async fn handle_get(
        State(resources): State<Arc<ServerResources>>,
        headers: HeaderMap,
        Path(id): Path<String>,
    ) -> Result<Response, AppError> {
        resolve_actor(&headers, &resources).await?;

        let recipe = resources.recipes.retrieve(Self::parse_id(&id)?).await?;

        let response: RecipeResponse = recipe.into();
        Ok((StatusCode::OK, Json(response)).into_response())
    }

    /// Handle PUT /recipes/:id/
    async fn handle_update(
        State(resources): State<Arc<ServerResources>>,
        headers: HeaderMap,
        Path(id): Path<String>,
        body: Result<Json<Value>, JsonRejection>,
    ) -> Result<Response, AppError> {
        let actor = resolve_actor(&headers, &resources).await?;
        let chef = require_chef(actor.as_ref())?;
        let recipe_id = Self::parse_id(&id)?;
        let payload = match json_object(body) {
            Ok(payload) => payload,
            Err(e) => {
                // An unknown id outranks a bad body
                resources.recipes.retrieve(recipe_id).await?;
                return Err(e);
            }
        };

        let recipe = resources
            .recipes
            .update(recipe_id, &payload, Some(chef))
            .await?;

        let response: RecipeResponse = recipe.into();
        Ok((StatusCode::OK, Json(response)).into_response())
    }

    /// Handle DELETE /recipes/:id/
    async fn handle_delete(
        State(resources): State<Arc<ServerResources>>,
        headers: HeaderMap,
        Path(id): Path<String>,
    ) -> Result<Response, AppError> {
        let actor = resolve_actor(&headers, &resources).await?;
        let chef = require_chef(actor.as_ref())?;

        resources
            .recipes
            .delete(Self::parse_id(&id)?, Some(chef))
            .await?;

        Ok(StatusCode::NO_CONTENT.into_response())
    }
}
