// ABOUTME: HTTP route modules and helpers shared by handlers
// ABOUTME: Actor resolution from the Authorization header and JSON body extraction
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Routes
//!
//! Every route module exposes a `*Routes` struct whose `routes` function
//! builds an axum [`Router`](axum::Router) over the shared resources.

/// Chef registration
pub mod chefs;
/// Liveness and readiness probes
pub mod health;
/// Recipe CRUD
pub mod recipes;

pub use chefs::ChefRoutes;
pub use health::HealthRoutes;
pub use recipes::RecipeRoutes;

use crate::auth::AuthManager;
use crate::constants::auth_messages;
use crate::errors::{AppError, AppResult};
use crate::models::Chef;
use crate::resources::ServerResources;
use axum::extract::rejection::JsonRejection;
use axum::http::{header, HeaderMap};
use axum::Json;
use serde_json::{Map, Value};

/// Resolve the acting chef; `None` for anonymous requests
///
/// # Errors
///
/// `AuthInvalid` when a `Token` header is malformed or unknown
pub(crate) async fn resolve_actor(
    headers: &HeaderMap,
    resources: &ServerResources,
) -> AppResult<Option<Chef>> {
    let header = match headers.get(header::AUTHORIZATION) {
        None => None,
        Some(value) => Some(
            value
                .to_str()
                .map_err(|_| AppError::auth_invalid(auth_messages::TOKEN_INVALID_CHARACTERS))?,
        ),
    };
    AuthManager::authenticate(resources.database.as_ref(), header).await
}

/// Require an authenticated chef, as a permission check ahead of any work
///
/// # Errors
///
/// `AuthRequired` for anonymous requests
pub(crate) fn require_chef(actor: Option<&Chef>) -> AppResult<&Chef> {
    actor.ok_or_else(AppError::auth_required)
}

/// Unwrap a JSON body that must be an object
///
/// # Errors
///
/// `InvalidInput` when the body is missing, malformed or not an object
pub(crate) fn json_object(body: Result<Json<Value>, JsonRejection>) -> AppResult<Map<String, Value>> {
    match body {
        Ok(Json(Value::Object(map))) => Ok(map),
        Ok(Json(_)) => Err(AppError::invalid_input(
            "Invalid data. Expected a dictionary.",
        )),
        Err(rejection) => Err(AppError::invalid_input(rejection.body_text())),
    }
}
