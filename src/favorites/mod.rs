// ABOUTME: Durable, de-duplicated set of favorite recipe ids
// ABOUTME: Persists a JSON array under a fixed key in a pluggable key/value storage
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Barkeep Contributors

//! # Favorites
//!
//! The set is loaded once and written back after every change that actually
//! alters it. Adding an existing id or removing an absent one touches nothing.

/// Storage backends
pub mod storage;

pub use storage::{FileStorage, KeyValueStorage, MemoryStorage};

use crate::constants::storage::FAVORITES_KEY;
use crate::errors::{AppError, AppResult};
use std::collections::BTreeSet;
use tracing::{debug, warn};

/// Favorite recipe ids bound to their storage
#[derive(Debug)]
pub struct Favorites<S: KeyValueStorage> {
    storage: S,
    ids: BTreeSet<String>,
}

impl<S: KeyValueStorage> Favorites<S> {
    /// Load favorites from storage
    ///
    /// Stored data that is not a JSON array of strings loads as an empty set.
    ///
    /// # Errors
    ///
    /// Returns a storage error when the backend cannot be read
    pub fn load(storage: S) -> AppResult<Self> {
        let ids = match storage.read(FAVORITES_KEY)? {
            None => BTreeSet::new(),
            Some(raw) => match serde_json::from_str::<Vec<String>>(&raw) {
                Ok(ids) => ids.into_iter().filter(|id| !id.trim().is_empty()).collect(),
                Err(e) => {
                    warn!(key = FAVORITES_KEY, error = %e, "Stored favorites are corrupt, starting empty");
                    BTreeSet::new()
                }
            },
        };
        debug!(count = ids.len(), "Loaded favorites");
        Ok(Self { storage, ids })
    }

    /// Mark a recipe as favorite; returns false when it already was
    ///
    /// # Errors
    ///
    /// Returns an error for a blank id or when persisting fails
    pub fn add(&mut self, recipe_id: &str) -> AppResult<bool> {
        let recipe_id = validated(recipe_id)?;
        if self.ids.contains(recipe_id) {
            return Ok(false);
        }
        self.ids.insert(recipe_id.to_owned());
        self.persist()?;
        Ok(true)
    }

    /// Unmark a recipe; returns false when it was not a favorite
    ///
    /// # Errors
    ///
    /// Returns an error when persisting fails
    pub fn remove(&mut self, recipe_id: &str) -> AppResult<bool> {
        if !self.ids.remove(recipe_id.trim()) {
            return Ok(false);
        }
        self.persist()?;
        Ok(true)
    }

    /// Flip a recipe's favorite status; returns the new status
    ///
    /// # Errors
    ///
    /// Returns an error for a blank id or when persisting fails
    pub fn toggle(&mut self, recipe_id: &str) -> AppResult<bool> {
        if self.contains(recipe_id) {
            self.remove(recipe_id)?;
            Ok(false)
        } else {
            self.add(recipe_id)?;
            Ok(true)
        }
    }

    /// Whether a recipe is a favorite
    #[must_use]
    pub fn contains(&self, recipe_id: &str) -> bool {
        self.ids.contains(recipe_id.trim())
    }

    /// Favorite ids in sorted order
    pub fn ids(&self) -> impl Iterator<Item = &str> {
        self.ids.iter().map(String::as_str)
    }

    /// Number of favorites
    #[must_use]
    pub fn len(&self) -> usize {
        self.ids.len()
    }

    /// Whether there are no favorites
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }

    /// Drop every favorite and the stored key
    ///
    /// # Errors
    ///
    /// Returns an error when the storage key cannot be removed
    pub fn clear(&mut self) -> AppResult<()> {
        self.storage.remove(FAVORITES_KEY)?;
        self.ids.clear();
        Ok(())
    }

    fn persist(&self) -> AppResult<()> {
        let ids: Vec<&str> = self.ids().collect();
        let encoded = serde_json::to_string(&ids)?;
        self.storage.write(FAVORITES_KEY, &encoded)
    }
}

fn validated(recipe_id: &str) -> AppResult<&str> {
    let trimmed = recipe_id.trim();
    if trimmed.is_empty() {
        return Err(AppError::invalid_input("Recipe id must not be blank"));
    }
    Ok(trimmed)
}
