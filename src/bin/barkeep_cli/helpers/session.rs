// ABOUTME: Per-invocation session for barkeep-cli
// ABOUTME: Loads one catalog snapshot and the favorites file for the configured directories
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Barkeep Contributors

use barkeep::cache::factory::Cache;
use barkeep::catalog::{CatalogService, CatalogSnapshot, JsonCatalogSource};
use barkeep::config::environment::ServerConfig;
use barkeep::errors::AppResult;
use barkeep::favorites::{Favorites, FileStorage};
use tracing::info;

use super::display::print_diagnostics;

/// Snapshot and favorites shared by every command
pub struct Session {
    pub snapshot: CatalogSnapshot,
    pub favorites: Favorites<FileStorage>,
}

impl Session {
    /// Load the catalog and favorites described by `config`
    pub async fn open(config: &ServerConfig) -> AppResult<Self> {
        info!(data_dir = %config.data_dir.display(), locale = %config.locale, "Loading catalog");

        let cache = Cache::new(config.cache.clone()).await?;
        let service = CatalogService::new(
            JsonCatalogSource::new(&config.data_dir),
            cache,
            config.cache.ttl.clone(),
        );
        let snapshot = service.snapshot(&config.locale).await;
        print_diagnostics(snapshot.diagnostics());

        let favorites = Favorites::load(FileStorage::new(&config.state_dir))?;

        Ok(Self {
            snapshot,
            favorites,
        })
    }
}
