// ABOUTME: Client-facing message constants for errors and field violations
// ABOUTME: Keeps wire text in one place so handlers and tests agree on it
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

/// Authentication failure messages
pub mod auth_messages {
    /// A write arrived without credentials
    pub const NOT_PROVIDED: &str = "Authentication credentials were not provided.";
    /// The token is not known
    pub const INVALID_TOKEN: &str = "Invalid token.";
    /// `Token` keyword present but no key
    pub const NO_CREDENTIALS: &str = "Invalid token header. No credentials provided.";
    /// Key contains spaces
    pub const TOKEN_HAS_SPACES: &str = "Invalid token header. Token string should not contain spaces.";
    /// Header bytes are not valid text
    pub const TOKEN_INVALID_CHARACTERS: &str =
        "Invalid token header. Token string should not contain invalid characters.";
    /// The resolver found neither an explicit chef nor an actor
    pub const MISSING_OWNER: &str = "Only chefs can register recipes";
}

/// Validation hints for values of the wrong shape
pub mod type_hints {
    /// Non-string value for a text field
    pub const STRING: &str = "Not a valid string.";
    /// Value not convertible to an integer
    pub const INTEGER: &str = "A valid integer is required.";
    /// Unparsable duration
    pub const DURATION: &str =
        "Duration has wrong format. Use one of these formats instead: [DD] [HH:[MM:]]ss[.uuuuuu].";
    /// Chef reference that is not a primary key
    pub const CHEF_ID: &str = "Incorrect type. Expected pk value.";
    /// Username with characters outside the allowed set
    pub const USERNAME: &str = "Enter a valid username. This value may contain only letters, numbers, and @/./+/-/_ characters.";
}

/// Field labels used in minimum-value messages
pub mod field_labels {
    /// `prep_time`
    pub const PREP_TIME: &str = "Preparation time";
    /// `cook_time`
    pub const COOK_TIME: &str = "Cooking time";
    /// `servings`
    pub const SERVINGS: &str = "Servings";
}

/// Chef registration messages
pub mod chef_messages {
    /// Username already taken (case-insensitive)
    pub const USERNAME_TAKEN: &str = "A user with that username already exists.";
}
