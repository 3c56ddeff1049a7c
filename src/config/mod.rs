// ABOUTME: Configuration management module for server settings
// ABOUTME: Environment-driven configuration for network, storage, auth and recipe policy
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Configuration module for the recipe API server
//!
//! - **Environment**: server configuration loaded from environment variables

/// Environment and server configuration
pub mod environment;

pub use environment::{
    AuthConfig, CorsConfig, DatabaseConfig, DatabaseUrl, Environment, RecipeConfig, ServerConfig,
};
