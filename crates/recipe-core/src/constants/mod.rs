// ABOUTME: Constants module with domain-separated organization
// ABOUTME: Field limits, wire messages, environment variable names and defaults
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Constants module
//!
//! Constants are grouped into logical domains rather than being in a single
//! flat namespace.

/// Client-facing error and violation messages
pub mod messages;

pub use messages::*;

/// API endpoints
pub mod routes {
    /// Recipe collection route
    pub const RECIPES: &str = "/recipes/";
    /// Single recipe route
    pub const RECIPE: &str = "/recipes/:id/";
    /// Chef registration route
    pub const CHEF_CREATE: &str = "/chefs/create/";
    /// Liveness route
    pub const HEALTH: &str = "/health";
    /// Readiness route
    pub const READY: &str = "/ready";
}

/// Network ports
pub mod ports {
    /// Default HTTP port
    pub const DEFAULT_HTTP_PORT: u16 = 8081;
}

/// Recipe and chef field limits
pub mod limits {
    /// Maximum recipe name length in characters
    pub const RECIPE_NAME_MAX_CHARS: usize = 255;
    /// Minimum preparation time in minutes
    pub const MIN_PREP_TIME_MINUTES: i64 = 1;
    /// Minimum cooking time in minutes
    pub const MIN_COOK_TIME_MINUTES: i64 = 0;
    /// Minimum number of servings
    pub const MIN_SERVINGS: i64 = 1;
    /// Servings used when a write omits the field
    pub const DEFAULT_SERVINGS: i32 = 1;
    /// Maximum chef username length in characters
    pub const USERNAME_MAX_CHARS: usize = 150;
    /// Random bytes in an issued auth token (hex encoded to 40 characters)
    pub const AUTH_TOKEN_BYTES: usize = 20;
    /// Lowest bcrypt cost accepted by the hasher
    pub const MIN_BCRYPT_COST: u32 = 4;
    /// Highest bcrypt cost accepted by the hasher
    pub const MAX_BCRYPT_COST: u32 = 31;
}

/// Authentication scheme constants
pub mod auth {
    /// Authorization header scheme keyword
    pub const TOKEN_SCHEME: &str = "Token";
    /// Value of the `WWW-Authenticate` challenge on 401 responses
    pub const WWW_AUTHENTICATE: &str = "Token";
}

/// Environment variable names
pub mod env_config {
    /// HTTP listener port
    pub const HTTP_PORT: &str = "HTTP_PORT";
    /// HTTP bind host
    pub const HOST: &str = "HOST";
    /// Database connection URL
    pub const DATABASE_URL: &str = "DATABASE_URL";
    /// Comma-separated CORS origins
    pub const CORS_ALLOWED_ORIGINS: &str = "CORS_ALLOWED_ORIGINS";
    /// Deployment environment
    pub const ENVIRONMENT: &str = "ENVIRONMENT";
    /// Password hashing cost
    pub const BCRYPT_COST: &str = "BCRYPT_COST";
    /// Update-path owner policy (`reassign` or `preserve`)
    pub const RECIPE_OWNER_POLICY: &str = "RECIPE_OWNER_POLICY";
}

/// Configuration defaults
pub mod defaults {
    /// Default bind host
    pub const HOST: &str = "0.0.0.0";
    /// Default database location
    pub const DATABASE_URL: &str = "sqlite:./data/recipes.db";
    /// Default CORS origins
    pub const CORS_ALLOWED_ORIGINS: &str = "*";
}

/// Service identifiers for structured logging
pub mod service_names {
    /// Server service name
    pub const RECIPE_API_SERVER: &str = "recipe-api-server";
}
