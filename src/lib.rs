// ABOUTME: Main library entry point for the recipe API server
// ABOUTME: Chef-owned recipe records served over a token-authenticated REST API
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![recursion_limit = "256"]
#![deny(unsafe_code)]

//! # Recipe API Server
//!
//! A CRUD service for recipe records owned by authenticated chefs.
//!
//! ## Architecture
//!
//! - **Record store**: `SQLite` tables for chefs, tokens and recipes behind the
//!   [`database_plugins::DatabaseProvider`] trait
//! - **Recipes**: field validation, owner resolution, list filters and the
//!   [`recipes::RecipeService`] that orchestrates them
//! - **Auth**: chef registration and `Token <key>` authentication
//! - **Routes**: axum handlers per operation plus health probes
//!
//! ## Example Usage
//!
//! ```rust,no_run
//! use recipe_api_server::config::environment::ServerConfig;
//!
//! fn main() -> anyhow::Result<()> {
//!     let config = ServerConfig::from_env()?;
//!     println!("Recipe API configured with port: HTTP={}", config.http_port);
//!     Ok(())
//! }
//! ```

/// Chef registration and token authentication
pub mod auth;

/// Configuration management
pub mod config;

/// Application constants
pub mod constants;

/// `SQLite` record store
pub mod database;

/// Record store abstraction
pub mod database_plugins;

/// Unified error handling
pub mod errors;

/// Structured logging setup
pub mod logging;

/// HTTP middleware (CORS, request ids)
pub mod middleware;

/// Domain models
pub mod models;

/// Recipe write-path and query logic
pub mod recipes;

/// Shared server state
pub mod resources;

/// HTTP route handlers
pub mod routes;

/// Router assembly and server lifecycle
pub mod server;
