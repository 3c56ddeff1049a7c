// ABOUTME: Credential service for chef registration and token authentication
// ABOUTME: Issues opaque tokens, stores their SHA-256 hashes and resolves Token headers
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Authentication
//!
//! Requests authenticate with `Authorization: Token <key>`. A missing header,
//! or a header using another scheme, leaves the request anonymous. A `Token`
//! header that is malformed or names an unknown key is rejected outright.
//!
//! Keys are 20 random bytes rendered as 40 hex characters; only their SHA-256
//! hash is stored.

use crate::constants::{auth, auth_messages, chef_messages, limits, type_hints};
use crate::database_plugins::DatabaseProvider;
use crate::errors::{AppError, AppResult, ValidationErrors, Violation};
use crate::logging::AppLogger;
use crate::models::Chef;
use rand::{thread_rng, RngCore};
use regex::Regex;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use sha2::{Digest, Sha256};
use std::sync::OnceLock;
use tracing::debug;

const USERNAME_TAKEN: Violation = Violation::Conflict {
    message: chef_messages::USERNAME_TAKEN,
};

static USERNAME_PATTERN: OnceLock<Option<Regex>> = OnceLock::new();

fn username_pattern() -> Option<&'static Regex> {
    USERNAME_PATTERN
        .get_or_init(|| Regex::new(r"^[\w.@+-]+$").ok())
        .as_ref()
}

/// Response body for a newly registered chef
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RegisteredChef {
    /// Chef id
    pub id: i64,
    /// Chef username
    pub username: String,
    /// Plain token; shown once, never stored
    pub token: String,
}

/// Issues and checks chef credentials
#[derive(Debug, Clone)]
pub struct AuthManager {
    bcrypt_cost: u32,
}

impl AuthManager {
    /// Create a manager hashing passwords at `bcrypt_cost`, clamped to bcrypt's range
    #[must_use]
    pub fn new(bcrypt_cost: u32) -> Self {
        Self {
            bcrypt_cost: bcrypt_cost.clamp(limits::MIN_BCRYPT_COST, limits::MAX_BCRYPT_COST),
        }
    }

    /// Generate a new random token key
    #[must_use]
    pub fn generate_token() -> String {
        let mut bytes = [0_u8; limits::AUTH_TOKEN_BYTES];
        thread_rng().fill_bytes(&mut bytes);
        hex::encode(bytes)
    }

    /// Hash a token key for storage and lookup
    #[must_use]
    pub fn hash_token(token: &str) -> String {
        let mut hasher = Sha256::new();
        hasher.update(token.as_bytes());
        format!("{:x}", hasher.finalize())
    }

    /// Extract the key from an `Authorization` header value
    ///
    /// Returns `Ok(None)` when there is no header or it uses another scheme.
    ///
    /// # Errors
    ///
    /// `AuthInvalid` when the `Token` header has no key or more than one part
    pub fn parse_authorization(header: Option<&str>) -> AppResult<Option<&str>> {
        let Some(header) = header else {
            return Ok(None);
        };

        let mut parts = header.split_whitespace();
        match parts.next() {
            Some(scheme) if scheme.eq_ignore_ascii_case(auth::TOKEN_SCHEME) => {}
            _ => return Ok(None),
        }

        match (parts.next(), parts.next()) {
            (None, _) => Err(AppError::auth_invalid(auth_messages::NO_CREDENTIALS)),
            (Some(_), Some(_)) => Err(AppError::auth_invalid(auth_messages::TOKEN_HAS_SPACES)),
            (Some(key), None) => Ok(Some(key)),
        }
    }

    /// Resolve the acting chef for a request
    ///
    /// # Errors
    ///
    /// `AuthInvalid` for malformed headers and unknown keys, or a database error
    pub async fn authenticate<D: DatabaseProvider>(
        database: &D,
        header: Option<&str>,
    ) -> AppResult<Option<Chef>> {
        let Some(key) = Self::parse_authorization(header)? else {
            return Ok(None);
        };

        match database.get_chef_by_token_hash(&Self::hash_token(key)).await? {
            Some(chef) => {
                debug!(chef = %chef.username, "Authenticated request");
                Ok(Some(chef))
            }
            None => {
                AppLogger::log_security_event("invalid_token", "Unknown token presented", None);
                Err(AppError::auth_invalid(auth_messages::INVALID_TOKEN))
            }
        }
    }

    /// Register a chef and issue their token
    ///
    /// # Errors
    ///
    /// `ValidationFailed` for an invalid or taken username or a blank
    /// password, or an internal/database error
    pub async fn register_chef<D: DatabaseProvider>(
        &self,
        database: &D,
        payload: &Map<String, Value>,
    ) -> AppResult<RegisteredChef> {
        let mut errors = ValidationErrors::new();
        let username = errors.check("username", validate_username(payload.get("username")));
        if let Some(username) = &username {
            if database.get_chef_by_username(username).await?.is_some() {
                errors.add("username", USERNAME_TAKEN);
            }
        }
        let password = errors.check("password", validate_password(payload.get("password")));
        let (Some(username), Some(password)) = (username, password) else {
            return Err(errors.into());
        };
        errors.into_result()?;

        let cost = self.bcrypt_cost;
        let password_hash = tokio::task::spawn_blocking(move || bcrypt::hash(password, cost))
            .await
            .map_err(|e| AppError::internal(format!("Password hashing task failed: {e}")))?
            .map_err(|e| AppError::internal(format!("Password hashing error: {e}")))?;

        let token = Self::generate_token();
        let Some(chef) = database
            .create_chef(&username, &password_hash, &Self::hash_token(&token))
            .await?
        else {
            // Lost a registration race for the same folded username
            let mut errors = ValidationErrors::new();
            errors.add("username", USERNAME_TAKEN);
            return Err(errors.into());
        };

        AppLogger::log_auth_event(&chef.username, "register", true, None);
        Ok(RegisteredChef {
            id: chef.id,
            username: chef.username,
            token,
        })
    }
}

fn validate_username(value: Option<&Value>) -> Result<String, Violation> {
    let username = match value {
        None | Some(Value::Null) => return Err(Violation::Required),
        Some(Value::String(s)) => s.trim().to_owned(),
        Some(_) => {
            return Err(Violation::TypeMismatch {
                hint: type_hints::STRING,
            })
        }
    };
    if username.is_empty() {
        return Err(Violation::EmptyField);
    }
    if username.chars().count() > limits::USERNAME_MAX_CHARS {
        return Err(Violation::LengthExceeded {
            max: limits::USERNAME_MAX_CHARS,
        });
    }
    if !username_pattern().is_some_and(|re| re.is_match(&username)) {
        return Err(Violation::TypeMismatch {
            hint: type_hints::USERNAME,
        });
    }
    Ok(username)
}

fn validate_password(value: Option<&Value>) -> Result<String, Violation> {
    match value {
        None | Some(Value::Null) => Err(Violation::Required),
        Some(Value::String(s)) if s.trim().is_empty() => Err(Violation::EmptyField),
        Some(Value::String(s)) => Ok(s.clone()),
        Some(_) => Err(Violation::TypeMismatch {
            hint: type_hints::STRING,
        }),
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_generated_tokens_are_hex_and_unique() {
        let first = AuthManager::generate_token();
        let second = AuthManager::generate_token();
        assert_eq!(first.len(), 40);
        assert!(first.chars().all(|c| c.is_ascii_hexdigit()));
        assert_ne!(first, second);
    }

    #[test]
    fn test_bcrypt_cost_is_clamped() {
        assert_eq!(AuthManager::new(2).bcrypt_cost, 4);
        assert_eq!(AuthManager::new(40).bcrypt_cost, 31);
        assert_eq!(AuthManager::new(10).bcrypt_cost, 10);
    }

    #[test]
    fn test_hash_token_is_stable_sha256() {
        let hash = AuthManager::hash_token("abc");
        assert_eq!(
            hash,
            "ba7816bf8f01cfea414140de5dae2223b00361a396177a9cb410ff61f20015ad"
        );
    }

    #[test]
    fn test_parse_authorization_variants() {
        assert!(matches!(AuthManager::parse_authorization(None), Ok(None)));
        assert!(matches!(
            AuthManager::parse_authorization(Some("Bearer abc")),
            Ok(None)
        ));
        assert!(matches!(
            AuthManager::parse_authorization(Some("token abc")),
            Ok(Some("abc"))
        ));

        let missing = AuthManager::parse_authorization(Some("Token")).unwrap_err();
        assert_eq!(missing.message, auth_messages::NO_CREDENTIALS);
        let spaced = AuthManager::parse_authorization(Some("Token a b")).unwrap_err();
        assert_eq!(spaced.message, auth_messages::TOKEN_HAS_SPACES);
    }

    #[test]
    fn test_username_rules() {
        assert_eq!(validate_username(Some(&json!("ana.maria+1@x"))), Ok("ana.maria+1@x".to_owned()));
        assert_eq!(validate_username(None), Err(Violation::Required));
        assert!(validate_username(Some(&json!("ana maria"))).is_err());
        assert!(validate_username(Some(&json!("a".repeat(151)))).is_err());
        assert_eq!(validate_password(Some(&json!("  "))), Err(Violation::EmptyField));
    }
}
