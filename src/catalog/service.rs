// ABOUTME: Cached catalog loading that assembles snapshots from a catalog source
// ABOUTME: Runs the four collection loads concurrently and degrades failures to diagnostics
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Barkeep Contributors

use super::snapshot::{CatalogSnapshot, LoadDiagnostic};
use super::source::CatalogSource;
use crate::cache::factory::Cache;
use crate::cache::{CacheKey, CacheLookup, CacheResource, CacheTtlConfig};
use crate::errors::AppResult;
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::future::Future;
use tracing::{debug, info, warn};

/// Loads catalog snapshots through the cache
pub struct CatalogService<S: CatalogSource> {
    source: S,
    cache: Cache,
    ttl: CacheTtlConfig,
}

impl<S: CatalogSource> CatalogService<S> {
    /// Service reading from `source` and caching with the given TTLs
    pub const fn new(source: S, cache: Cache, ttl: CacheTtlConfig) -> Self {
        Self { source, cache, ttl }
    }

    /// Underlying source
    pub const fn source(&self) -> &S {
        &self.source
    }

    /// Cache shared by every load
    pub const fn cache(&self) -> &Cache {
        &self.cache
    }

    /// Load every collection for `locale` and assemble a snapshot
    ///
    /// Never fails: a collection that cannot be loaded is empty in the
    /// snapshot and reported through [`CatalogSnapshot::diagnostics`].
    pub async fn snapshot(&self, locale: &str) -> CatalogSnapshot {
        let (recipes, categories, availability, curated) = tokio::join!(
            self.load(locale, CacheResource::Recipes, || self.source.load_recipes(locale)),
            self.load(locale, CacheResource::Categories, || {
                self.source.load_categories(locale)
            }),
            self.load(locale, CacheResource::Availability, || {
                self.source.load_availability()
            }),
            self.load(locale, CacheResource::Curated, || self.source.load_curated()),
        );

        let mut diagnostics = Vec::new();
        let recipes = collect(recipes, &mut diagnostics);
        let categories = collect(categories, &mut diagnostics);
        let availability = collect(availability, &mut diagnostics);
        let curated = collect(curated, &mut diagnostics);

        info!(
            %locale,
            recipes = recipes.len(),
            categories = categories.len(),
            availability_rows = availability.len(),
            curated_lists = curated.len(),
            failed_loads = diagnostics.len(),
            "Catalog snapshot assembled"
        );

        CatalogSnapshot::new(locale, recipes, categories, &availability, curated)
            .with_diagnostics(diagnostics)
    }

    /// Drop cached collections so the next snapshot reloads them
    ///
    /// # Errors
    ///
    /// Returns an error if the cache rejects the invalidation pattern
    pub async fn refresh(&self, locale: &str) -> AppResult<u64> {
        let localized = self
            .cache
            .invalidate_pattern(&CacheKey::locale_pattern(locale))
            .await?;
        let shared = self
            .cache
            .invalidate_pattern(&CacheKey::shared_pattern())
            .await?;
        info!(%locale, removed = localized + shared, "Catalog cache refreshed");
        Ok(localized + shared)
    }

    async fn load<T, F, Fut>(
        &self,
        locale: &str,
        resource: CacheResource,
        fetch: F,
    ) -> Result<Vec<T>, LoadDiagnostic>
    where
        T: Serialize + DeserializeOwned + Send + Sync,
        F: FnOnce() -> Fut + Send,
        Fut: Future<Output = AppResult<Vec<T>>> + Send,
    {
        let key = CacheKey::for_resource(locale, resource);

        match self.cache.lookup::<Vec<T>>(&key).await {
            Ok(CacheLookup::Hit(items)) => {
                debug!(%key, "Catalog cache hit");
                return Ok(items);
            }
            Ok(CacheLookup::Expired) => debug!(%key, "Catalog cache entry expired"),
            Ok(CacheLookup::Miss) => debug!(%key, "Catalog cache miss"),
            Err(e) => warn!(%key, error = %e, "Catalog cache read failed, loading from source"),
        }

        match fetch().await {
            Ok(items) => {
                let ttl = self.ttl.ttl_for_resource(resource);
                if let Err(e) = self.cache.set(&key, &items, ttl).await {
                    warn!(%key, error = %e, "Failed to cache catalog collection");
                }
                Ok(items)
            }
            Err(e) => {
                warn!(%key, code = ?e.code, error = %e, "Catalog load failed");
                Err(LoadDiagnostic {
                    resource,
                    code: e.code,
                    message: e.message,
                })
            }
        }
    }
}

fn collect<T>(result: Result<Vec<T>, LoadDiagnostic>, diagnostics: &mut Vec<LoadDiagnostic>) -> Vec<T> {
    result.unwrap_or_else(|diagnostic| {
        diagnostics.push(diagnostic);
        Vec::new()
    })
}
