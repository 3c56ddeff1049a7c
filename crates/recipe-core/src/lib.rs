// ABOUTME: Core types and constants for the recipe API server
// ABOUTME: Foundation crate with error handling, field violations, domain models and constants
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![deny(unsafe_code)]

//! # Recipe Core
//!
//! Foundation crate providing shared types and constants for the recipe API
//! server. It changes infrequently and carries no storage or HTTP routing code.
//!
//! ## Modules
//!
//! - **errors**: Unified error handling with `AppError`, `ErrorCode` and field-level violations
//! - **constants**: Field limits, error messages and environment variable names
//! - **models**: Chef and recipe records plus the duration wire codec

/// Unified error handling system with standard error codes and HTTP responses
pub mod errors;

/// Application constants organized by domain
pub mod constants;

/// Core data models (Chef, Recipe, durations)
pub mod models;
