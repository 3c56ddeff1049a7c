// ABOUTME: Shared test utilities and setup functions for integration tests
// ABOUTME: Provides in-memory resources, chef registration and sample payloads
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence
#![allow(
    dead_code,
    clippy::missing_errors_doc,
    clippy::missing_panics_doc,
    clippy::must_use_candidate
)]
//! Shared test utilities for `recipe_api_server`

use anyhow::{anyhow, Result};
use recipe_api_server::{
    config::{AuthConfig, DatabaseConfig, DatabaseUrl, Environment, RecipeConfig, ServerConfig},
    database::Database,
    models::Chef,
    recipes::OwnerPolicy,
    resources::ServerResources,
};
use serde_json::{json, Map, Value};
use std::sync::{Arc, Once};

static INIT_LOGGER: Once = Once::new();

/// Initialize quiet logging for tests (call once per test process)
pub fn init_test_logging() {
    INIT_LOGGER.call_once(|| {
        let log_level = match std::env::var("TEST_LOG").as_deref() {
            Ok("TRACE") => tracing::Level::TRACE,
            Ok("DEBUG") => tracing::Level::DEBUG,
            Ok("INFO") => tracing::Level::INFO,
            _ => tracing::Level::WARN,
        };

        let _ = tracing_subscriber::fmt()
            .with_max_level(log_level)
            .with_test_writer()
            .try_init();
    });
}

/// Configuration for tests: in-memory database and the cheapest bcrypt cost
pub fn test_config(owner_policy: OwnerPolicy) -> ServerConfig {
    ServerConfig {
        environment: Environment::Testing,
        database: DatabaseConfig {
            url: DatabaseUrl::Memory,
        },
        auth: AuthConfig { bcrypt_cost: 4 },
        recipes: RecipeConfig { owner_policy },
        ..ServerConfig::default()
    }
}

/// Standard test database setup
pub async fn create_test_database() -> Result<Database> {
    init_test_logging();
    Ok(Database::new(&DatabaseUrl::Memory).await?)
}

/// Resources over a fresh in-memory database with the default owner policy
pub async fn create_test_resources() -> Result<Arc<ServerResources>> {
    create_test_resources_with_policy(OwnerPolicy::default()).await
}

/// Resources over a fresh in-memory database
pub async fn create_test_resources_with_policy(
    owner_policy: OwnerPolicy,
) -> Result<Arc<ServerResources>> {
    let database = create_test_database().await?;
    Ok(Arc::new(ServerResources::new(
        database,
        Arc::new(test_config(owner_policy)),
    )))
}

/// Register a chef, returning it with its plain token
pub async fn create_test_chef(resources: &ServerResources, username: &str) -> Result<(Chef, String)> {
    let payload = json!({"username": username, "password": "s3cret-pass"});
    let registered = resources
        .auth_manager
        .register_chef(resources.database.as_ref(), &as_object(&payload))
        .await?;
    let chef = resources
        .database
        .get_chef(registered.id)
        .await?
        .ok_or_else(|| anyhow!("chef {username} missing after registration"))?;
    Ok((chef, registered.token))
}

/// Borrow a JSON value as an object map, cloning it
pub fn as_object(value: &Value) -> Map<String, Value> {
    value.as_object().cloned().unwrap_or_default()
}

/// The classic cod fritter
pub fn bolinho_payload() -> Value {
    json!({
        "name": "Bolinho de bacalhau",
        "description": "Salgado tradicional",
        "ingredients": "bacalhau, batata, ovo, salsa",
        "instructions": "Misture tudo, modele e frite.",
        "prep_time": "00:45:00",
        "cook_time": "00:00:00",
        "servings": 20
    })
}

/// A second valid recipe
pub fn feijoada_payload() -> Value {
    json!({
        "name": "Feijoada",
        "ingredients": "feijao preto, carnes",
        "instructions": "Cozinhe lentamente.",
        "prep_time": "00:30:00",
        "cook_time": "03:00:00",
        "servings": 8
    })
}
