// ABOUTME: Cache factory for configuration-based backend selection
// ABOUTME: Wraps the in-memory backend behind a single concrete Cache type
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Barkeep Contributors

use super::{memory::InMemoryCache, CacheConfig, CacheKey, CacheLookup, CacheProvider};
use crate::config::environment::ServerConfig;
use crate::errors::AppResult;
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Unified cache interface
///
/// Only the in-memory backend exists; the wrapper keeps call sites
/// independent of the backend choice.
#[derive(Clone)]
pub struct Cache {
    inner: InMemoryCache,
}

impl Cache {
    /// Create new cache instance based on configuration
    ///
    /// # Errors
    ///
    /// Returns an error if cache initialization fails
    pub async fn new(config: CacheConfig) -> AppResult<Self> {
        tracing::info!(
            max_entries = config.max_entries,
            background_cleanup = config.enable_background_cleanup,
            "Initializing in-memory catalog cache"
        );
        let inner = InMemoryCache::new(config).await?;
        Ok(Self { inner })
    }

    /// Create cache from environment variables
    ///
    /// # Errors
    ///
    /// Returns an error if cache initialization fails
    pub async fn from_env() -> AppResult<Self> {
        Self::new(ServerConfig::from_env().cache).await
    }

    /// Store value in cache with TTL
    ///
    /// # Errors
    ///
    /// Returns an error if serialization or storage fails
    pub async fn set<T: Serialize + Send + Sync>(
        &self,
        key: &CacheKey,
        value: &T,
        ttl: Duration,
    ) -> AppResult<()> {
        self.inner.set(key, value, ttl).await
    }

    /// Retrieve value from cache
    ///
    /// # Errors
    ///
    /// Returns an error if deserialization fails
    pub async fn get<T: for<'de> Deserialize<'de>>(&self, key: &CacheKey) -> AppResult<Option<T>> {
        self.inner.get(key).await
    }

    /// Retrieve value and report expiry separately from absence
    ///
    /// # Errors
    ///
    /// Returns an error if deserialization fails
    pub async fn lookup<T: for<'de> Deserialize<'de>>(
        &self,
        key: &CacheKey,
    ) -> AppResult<CacheLookup<T>> {
        self.inner.lookup(key).await
    }

    /// Remove single cache entry
    ///
    /// # Errors
    ///
    /// Returns an error if invalidation fails
    pub async fn invalidate(&self, key: &CacheKey) -> AppResult<()> {
        self.inner.invalidate(key).await
    }

    /// Remove all cache entries matching pattern
    ///
    /// # Errors
    ///
    /// Returns an error if pattern invalidation fails
    pub async fn invalidate_pattern(&self, pattern: &str) -> AppResult<u64> {
        self.inner.invalidate_pattern(pattern).await
    }

    /// Check if key exists in cache
    ///
    /// # Errors
    ///
    /// Returns an error if existence check fails
    pub async fn exists(&self, key: &CacheKey) -> AppResult<bool> {
        self.inner.exists(key).await
    }

    /// Get remaining TTL for key
    ///
    /// # Errors
    ///
    /// Returns an error if TTL check fails
    pub async fn ttl(&self, key: &CacheKey) -> AppResult<Option<Duration>> {
        self.inner.ttl(key).await
    }

    /// Verify cache backend is healthy
    ///
    /// # Errors
    ///
    /// Returns an error if health check fails
    pub async fn health_check(&self) -> AppResult<()> {
        self.inner.health_check().await
    }

    /// Clear all cache entries
    ///
    /// # Errors
    ///
    /// Returns an error if clear operation fails
    pub async fn clear_all(&self) -> AppResult<()> {
        self.inner.clear_all().await
    }
}
