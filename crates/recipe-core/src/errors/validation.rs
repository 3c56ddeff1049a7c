// ABOUTME: Field-level validation violations collected across a whole write payload
// ABOUTME: Violations aggregate per field and convert into a single 400 AppError
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Field violations
//!
//! Validation never short-circuits: every rule runs, each failure is recorded
//! under its field name, and the whole set is returned to the client at once.

use serde_json::{Map, Value};
use std::collections::BTreeMap;
use thiserror::Error;

/// A single rule failure for one field
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Violation {
    /// Mandatory field absent or null
    #[error("This field is required.")]
    Required,
    /// Text field blank after trimming
    #[error("This field may not be blank.")]
    EmptyField,
    /// Text longer than the allowed number of characters
    #[error("Ensure this field has no more than {max} characters.")]
    LengthExceeded {
        /// Maximum number of characters
        max: usize,
    },
    /// Value under the field's lower bound
    #[error("{label} must be equal to or greater than {minimum}.")]
    BelowMinimum {
        /// Human label of the field
        label: &'static str,
        /// Rendered lower bound
        minimum: &'static str,
    },
    /// Value of the wrong shape for the field
    #[error("{hint}")]
    TypeMismatch {
        /// Client-facing description of the expected shape
        hint: &'static str,
    },
    /// Value collides with an existing record
    #[error("{message}")]
    Conflict {
        /// Client-facing description of the collision
        message: &'static str,
    },
    /// No chef could be attached to the write
    #[error("Only chefs can register recipes")]
    MissingOwner,
    /// Explicit chef id that does not exist
    #[error("Invalid pk \"{0}\" - object does not exist.")]
    UnknownReference(String),
}

/// All violations found in one payload, keyed by field name
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ValidationErrors {
    fields: BTreeMap<String, Vec<Violation>>,
}

impl ValidationErrors {
    /// Create an empty collection
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a violation for `field`
    pub fn add(&mut self, field: &str, violation: Violation) {
        self.fields
            .entry(field.to_owned())
            .or_default()
            .push(violation);
    }

    /// Record the outcome of a field check, returning the value when it passed
    pub fn check<T>(&mut self, field: &str, outcome: Result<T, Violation>) -> Option<T> {
        match outcome {
            Ok(value) => Some(value),
            Err(violation) => {
                self.add(field, violation);
                None
            }
        }
    }

    /// Whether no violation was recorded
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    /// Violations recorded for one field
    #[must_use]
    pub fn field(&self, field: &str) -> &[Violation] {
        self.fields.get(field).map_or(&[], Vec::as_slice)
    }

    /// Names of all fields with at least one violation
    pub fn field_names(&self) -> impl Iterator<Item = &str> {
        self.fields.keys().map(String::as_str)
    }

    /// Whether any violation for `field` satisfies `predicate`
    pub fn has(&self, field: &str, predicate: impl Fn(&Violation) -> bool) -> bool {
        self.field(field).iter().any(predicate)
    }

    /// Render as `{field: [message, ...]}`
    #[must_use]
    pub fn to_details(&self) -> Value {
        let map: Map<String, Value> = self
            .fields
            .iter()
            .map(|(field, violations)| {
                let messages = violations
                    .iter()
                    .map(|v| Value::String(v.to_string()))
                    .collect();
                (field.clone(), Value::Array(messages))
            })
            .collect();
        Value::Object(map)
    }

    /// `Ok(())` when empty, otherwise `Err(self)`
    ///
    /// # Errors
    ///
    /// Returns the collection itself when at least one violation was recorded
    pub fn into_result(self) -> Result<(), Self> {
        if self.is_empty() {
            Ok(())
        } else {
            Err(self)
        }
    }
}

impl std::fmt::Display for ValidationErrors {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut first = true;
        for (field, violations) in &self.fields {
            for violation in violations {
                if !first {
                    write!(f, "; ")?;
                }
                write!(f, "{field}: {violation}")?;
                first = false;
            }
        }
        Ok(())
    }
}
