// ABOUTME: Chef identity model for users that own recipes
// ABOUTME: Chefs are created by the credential service and only referenced by recipes
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// An authenticated user identity that owns recipes
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Chef {
    /// Generated identifier
    pub id: i64,
    /// Unique username
    pub username: String,
    /// Registration timestamp
    pub created_at: DateTime<Utc>,
}

impl Chef {
    /// Lightweight reference used as a recipe's owner
    #[must_use]
    pub fn to_ref(&self) -> ChefRef {
        ChefRef {
            id: self.id,
            username: self.username.clone(),
        }
    }
}

/// Owner reference stored alongside a recipe
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChefRef {
    /// Chef identifier
    pub id: i64,
    /// Chef username at read time
    pub username: String,
}
