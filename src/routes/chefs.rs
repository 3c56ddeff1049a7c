// ABOUTME: Route handler for chef registration
// ABOUTME: Creates a chef account and returns its one-time token
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use super::json_object;
use crate::constants::routes;
use crate::errors::AppError;
use crate::resources::ServerResources;
use axum::{
    extract::{rejection::JsonRejection, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::post,
    Json, Router,
};
use serde_json::Value;
use std::sync::Arc;

/// Chef routes implementation
pub struct ChefRoutes;

impl ChefRoutes {
    /// Create chef routes
    pub fn routes(resources: Arc<ServerResources>) -> Router {
        Router::new()
            .route(routes::CHEF_CREATE, post(Self::handle_create))
            .with_state(resources)
    }

    /// Handle POST /chefs/create/
    async fn handle_create(
        State(resources): State<Arc<ServerResources>>,
        body: Result<Json<Value>, JsonRejection>,
    ) -> Result<Response, AppError> {
        let payload = json_object(body)?;
        let registered = resources
            .auth_manager
            .register_chef(resources.database.as_ref(), &payload)
            .await?;

        Ok((StatusCode::CREATED, Json(registered)).into_response())
    }
}
