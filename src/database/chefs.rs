// ABOUTME: Chef and auth token database operations
// ABOUTME: Registration with token issuance in one transaction, lookups by id, name and token
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use super::{format_timestamp, parse_timestamp, Database};
use crate::errors::{AppError, AppResult};
use crate::models::Chef;
use crate::recipes::fold_case;
use chrono::Utc;
use sqlx::sqlite::SqliteRow;
use sqlx::Row;

impl Database {
    /// Create chefs and `auth_tokens` tables
    pub(super) async fn migrate_chefs(&self) -> AppResult<()> {
        sqlx::query(
            r"
            CREATE TABLE IF NOT EXISTS chefs (
                id INTEGER PRIMARY KEY AUTOINCREMENT,
                username TEXT NOT NULL,
                username_folded TEXT NOT NULL UNIQUE,
                password_hash TEXT NOT NULL,
                created_at TEXT NOT NULL
            )
            ",
        )
        .execute(&self.pool)
        .await
        .map_err(|e| AppError::database(format!("Failed to create chefs table: {e}")))?;

        sqlx::query(
            r"
            CREATE TABLE IF NOT EXISTS auth_tokens (
                key_hash TEXT PRIMARY KEY,
                chef_id INTEGER NOT NULL UNIQUE REFERENCES chefs(id) ON DELETE CASCADE,
                created_at TEXT NOT NULL
            )
            ",
        )
        .execute(&self.pool)
        .await
        .map_err(|e| AppError::database(format!("Failed to create auth_tokens table: {e}")))?;

        Ok(())
    }

    /// Insert a chef and their token hash atomically
    ///
    /// Returns `None` when the username is already taken in any letter case.
    ///
    /// # Errors
    ///
    /// Returns an error if the database operation fails
    pub async fn create_chef(
        &self,
        username: &str,
        password_hash: &str,
        token_hash: &str,
    ) -> AppResult<Option<Chef>> {
        let now = Utc::now();
        let created_at = format_timestamp(now);

        let mut tx = self
            .pool
            .begin()
            .await
            .map_err(|e| AppError::database(format!("Failed to begin transaction: {e}")))?;

        let inserted = sqlx::query(
            r"
            INSERT INTO chefs (username, username_folded, password_hash, created_at)
            VALUES ($1, $2, $3, $4)
            ",
        )
        .bind(username)
        .bind(fold_case(username))
        .bind(password_hash)
        .bind(&created_at)
        .execute(&mut *tx)
        .await;

        let chef_id = match inserted {
            Ok(result) => result.last_insert_rowid(),
            Err(sqlx::Error::Database(db_err)) if db_err.is_unique_violation() => {
                return Ok(None);
            }
            Err(e) => return Err(AppError::database(format!("Failed to create chef: {e}"))),
        };

        sqlx::query(
            r"
            INSERT INTO auth_tokens (key_hash, chef_id, created_at)
            VALUES ($1, $2, $3)
            ",
        )
        .bind(token_hash)
        .bind(chef_id)
        .bind(&created_at)
        .execute(&mut *tx)
        .await
        .map_err(|e| AppError::database(format!("Failed to store auth token: {e}")))?;

        tx.commit()
            .await
            .map_err(|e| AppError::database(format!("Failed to commit chef: {e}")))?;

        Ok(Some(Chef {
            id: chef_id,
            username: username.to_owned(),
            created_at: parse_timestamp(&created_at)?,
        }))
    }

    /// Get a chef by id
    ///
    /// # Errors
    ///
    /// Returns an error if the database operation fails
    pub async fn get_chef(&self, chef_id: i64) -> AppResult<Option<Chef>> {
        let row = sqlx::query("SELECT id, username, created_at FROM chefs WHERE id = $1")
            .bind(chef_id)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| AppError::database(format!("Failed to get chef: {e}")))?;

        row.as_ref().map(row_to_chef).transpose()
    }

    /// Get a chef by username, ignoring case
    ///
    /// # Errors
    ///
    /// Returns an error if the database operation fails
    pub async fn get_chef_by_username(&self, username: &str) -> AppResult<Option<Chef>> {
        let row = sqlx::query(
            "SELECT id, username, created_at FROM chefs WHERE username_folded = $1",
        )
        .bind(fold_case(username))
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| AppError::database(format!("Failed to get chef by username: {e}")))?;

        row.as_ref().map(row_to_chef).transpose()
    }

    /// Resolve the chef owning a token hash
    ///
    /// # Errors
    ///
    /// Returns an error if the database operation fails
    pub async fn get_chef_by_token_hash(&self, token_hash: &str) -> AppResult<Option<Chef>> {
        let row = sqlx::query(
            r"
            SELECT c.id, c.username, c.created_at
            FROM auth_tokens t
            JOIN chefs c ON c.id = t.chef_id
            WHERE t.key_hash = $1
            ",
        )
        .bind(token_hash)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| AppError::database(format!("Failed to resolve auth token: {e}")))?;

        row.as_ref().map(row_to_chef).transpose()
    }
}

fn row_to_chef(row: &SqliteRow) -> AppResult<Chef> {
    let created_at: String = row.get("created_at");
    Ok(Chef {
        id: row.get("id"),
        username: row.get("username"),
        created_at: parse_timestamp(&created_at)?,
    })
}
