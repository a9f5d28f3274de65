// ABOUTME: Category model distinguishing spirit categories from thematic collections
// ABOUTME: Spirit categories drive the single-choice facet, themes the any-match facet
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Barkeep Contributors

use serde::{Deserialize, Serialize};
use std::fmt;

/// Kind of category record
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CategoryKind {
    /// Base spirit (rum, gin, ...); a recipe has exactly one
    Spirit,
    /// Thematic collection (tiki, classics, ...); a recipe has any number
    Theme,
}

impl fmt::Display for CategoryKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Spirit => f.write_str("spirit"),
            Self::Theme => f.write_str("theme"),
        }
    }
}

/// Category record as served by the catalog
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Category {
    /// Identifier referenced by recipes
    pub id: String,
    /// Localized display name
    pub name: String,
    /// Spirit or theme
    #[serde(rename = "type", alias = "kind")]
    pub kind: CategoryKind,
}

impl Category {
    /// Create a spirit category
    pub fn spirit(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            kind: CategoryKind::Spirit,
        }
    }

    /// Create a thematic category
    pub fn theme(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            kind: CategoryKind::Theme,
        }
    }
}
