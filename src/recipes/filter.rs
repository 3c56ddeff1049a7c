// ABOUTME: Query-parameter filters for recipe listing
// ABOUTME: Name substring and owner username predicates, both case-insensitive
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use crate::models::Recipe;
use serde::Deserialize;

/// Raw list query parameters
#[derive(Debug, Clone, Default, Deserialize)]
pub struct RecipeListQuery {
    /// Substring of the recipe name
    pub name: Option<String>,
    /// Owner username (short alias)
    pub chef: Option<String>,
    /// Owner username
    pub chef_username: Option<String>,
}

/// Store-level predicates; absent fields impose no constraint
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RecipeFilter {
    /// Case-insensitive substring of the name
    pub name_contains: Option<String>,
    /// Case-insensitive exact owner username
    pub chef_username: Option<String>,
}

/// Unicode case folding shared by the stored `*_folded` columns and the filters
#[must_use]
pub fn fold_case(value: &str) -> String {
    value.to_lowercase()
}

fn non_empty(value: Option<&String>) -> Option<String> {
    value.filter(|v| !v.is_empty()).cloned()
}

impl RecipeFilter {
    /// Build from query parameters, ignoring empty values
    ///
    /// `chef_username` takes precedence over its `chef` alias.
    #[must_use]
    pub fn from_query(query: &RecipeListQuery) -> Self {
        Self {
            name_contains: non_empty(query.name.as_ref()),
            chef_username: non_empty(query.chef_username.as_ref())
                .or_else(|| non_empty(query.chef.as_ref())),
        }
    }

    /// `LIKE` pattern over the folded name, with wildcards in the input escaped by `\`
    #[must_use]
    pub fn like_pattern(&self) -> Option<String> {
        self.name_contains.as_ref().map(|needle| {
            let needle = fold_case(needle);
            let mut pattern = String::with_capacity(needle.len() + 2);
            pattern.push('%');
            for c in needle.chars() {
                if matches!(c, '%' | '_' | '\\') {
                    pattern.push('\\');
                }
                pattern.push(c);
            }
            pattern.push('%');
            pattern
        })
    }

    /// Folded owner username for the exact-match predicate
    #[must_use]
    pub fn folded_chef_username(&self) -> Option<String> {
        self.chef_username.as_deref().map(fold_case)
    }

    /// In-memory evaluation, folding case like the store does
    #[must_use]
    pub fn matches(&self, recipe: &Recipe) -> bool {
        let name_ok = self
            .name_contains
            .as_ref()
            .is_none_or(|needle| fold_case(&recipe.name).contains(&fold_case(needle)));
        let chef_ok = self
            .chef_username
            .as_ref()
            .is_none_or(|username| fold_case(&recipe.chef.username) == fold_case(username));
        name_ok && chef_ok
    }
}
