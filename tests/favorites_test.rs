// ABOUTME: Integration tests for durable favorites over file and memory storage
// ABOUTME: Covers no-op semantics, persistence across instances, corrupt data and clearing
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Barkeep Contributors

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

mod common;

use anyhow::Result;
use barkeep::constants::storage::FAVORITES_KEY;
use barkeep::errors::{AppResult, ErrorCode};
use barkeep::favorites::{Favorites, FileStorage, KeyValueStorage, MemoryStorage};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use tempfile::TempDir;

/// Memory storage that counts writes
#[derive(Clone, Default)]
struct CountingStorage {
    inner: MemoryStorage,
    writes: Arc<AtomicUsize>,
}

impl CountingStorage {
    fn writes(&self) -> usize {
        self.writes.load(Ordering::SeqCst)
    }
}

impl KeyValueStorage for CountingStorage {
    fn read(&self, key: &str) -> AppResult<Option<String>> {
        self.inner.read(key)
    }

    fn write(&self, key: &str, value: &str) -> AppResult<()> {
        self.writes.fetch_add(1, Ordering::SeqCst);
        self.inner.write(key, value)
    }

    fn remove(&self, key: &str) -> AppResult<()> {
        self.inner.remove(key)
    }
}

#[test]
fn test_duplicate_add_and_absent_remove_do_not_write() -> Result<()> {
    common::init_test_logging();
    let storage = CountingStorage::default();
    let mut favorites = Favorites::load(storage.clone())?;

    assert!(favorites.add("mojito")?);
    assert!(!favorites.add("mojito")?);
    assert!(!favorites.add("  mojito ")?);
    assert_eq!(storage.writes(), 1);

    assert!(!favorites.remove("negroni")?);
    assert_eq!(storage.writes(), 1);

    assert!(favorites.remove("mojito")?);
    assert_eq!(storage.writes(), 2);
    assert!(favorites.is_empty());
    Ok(())
}

#[test]
fn test_toggle_flips_membership() -> Result<()> {
    let mut favorites = Favorites::load(MemoryStorage::new())?;
    assert!(favorites.toggle("daiquiri")?);
    assert!(favorites.contains("daiquiri"));
    assert!(!favorites.toggle("daiquiri")?);
    assert!(!favorites.contains("daiquiri"));
    Ok(())
}

#[test]
fn test_blank_id_is_rejected() -> Result<()> {
    let mut favorites = Favorites::load(MemoryStorage::new())?;
    let err = favorites.add("   ").unwrap_err();
    assert_eq!(err.code, ErrorCode::InvalidInput);
    assert!(favorites.is_empty());
    Ok(())
}

#[test]
fn test_favorites_persist_across_instances_on_disk() -> Result<()> {
    let dir = TempDir::new()?;

    {
        let mut favorites = Favorites::load(FileStorage::new(dir.path()))?;
        favorites.add("negroni")?;
        favorites.add("mojito")?;
    }

    let stored = std::fs::read_to_string(dir.path().join(format!("{FAVORITES_KEY}.json")))?;
    let ids: Vec<String> = serde_json::from_str(&stored)?;
    assert_eq!(ids, vec!["mojito".to_owned(), "negroni".to_owned()]);

    let reloaded = Favorites::load(FileStorage::new(dir.path()))?;
    assert_eq!(reloaded.len(), 2);
    assert!(reloaded.contains("negroni"));
    assert_eq!(reloaded.ids().collect::<Vec<_>>(), vec!["mojito", "negroni"]);
    Ok(())
}

#[test]
fn test_missing_state_directory_loads_empty_and_is_created_on_write() -> Result<()> {
    let dir = TempDir::new()?;
    let nested = dir.path().join("state").join("barkeep");

    let mut favorites = Favorites::load(FileStorage::new(&nested))?;
    assert!(favorites.is_empty());

    favorites.add("zombie")?;
    assert!(nested.join(format!("{FAVORITES_KEY}.json")).exists());
    Ok(())
}

#[test]
fn test_corrupt_data_loads_as_empty() -> Result<()> {
    let storage = MemoryStorage::new();
    storage.write(FAVORITES_KEY, "{not json")?;

    let mut favorites = Favorites::load(storage.clone())?;
    assert!(favorites.is_empty());

    // next change overwrites the corrupt value
    favorites.add("mojito")?;
    assert_eq!(storage.read(FAVORITES_KEY)?.as_deref(), Some(r#"["mojito"]"#));
    Ok(())
}

#[test]
fn test_stored_duplicates_collapse() -> Result<()> {
    let storage = MemoryStorage::new();
    storage.write(FAVORITES_KEY, r#"["mojito", "mojito", "", "daiquiri"]"#)?;

    let favorites = Favorites::load(storage)?;
    assert_eq!(favorites.len(), 2);
    Ok(())
}

#[test]
fn test_clear_removes_stored_key() -> Result<()> {
    let storage = MemoryStorage::new();
    let mut favorites = Favorites::load(storage.clone())?;
    favorites.add("mojito")?;

    favorites.clear()?;
    assert!(favorites.is_empty());
    assert_eq!(storage.read(FAVORITES_KEY)?, None);
    Ok(())
}
