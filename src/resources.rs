// ABOUTME: Shared server state handed to every route handler
// ABOUTME: Bundles the record store, credential service, recipe service and config
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use crate::auth::AuthManager;
use crate::config::ServerConfig;
use crate::database::Database;
use crate::recipes::RecipeService;
use std::sync::Arc;

/// Resources shared across handlers
#[derive(Clone)]
pub struct ServerResources {
    /// Record store
    pub database: Arc<Database>,
    /// Credential service
    pub auth_manager: Arc<AuthManager>,
    /// Recipe operations
    pub recipes: RecipeService<Database>,
    /// Loaded configuration
    pub config: Arc<ServerConfig>,
}

impl ServerResources {
    /// Wire services over an opened database
    #[must_use]
    pub fn new(database: Database, config: Arc<ServerConfig>) -> Self {
        let database = Arc::new(database);
        Self {
            auth_manager: Arc::new(AuthManager::new(config.auth.bcrypt_cost)),
            recipes: RecipeService::new(Arc::clone(&database), config.recipes.owner_policy),
            database,
            config,
        }
    }
}
