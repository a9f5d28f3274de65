// ABOUTME: Cache abstraction for catalog loads with time-boxed expiry
// ABOUTME: Pluggable backend trait keyed by locale and catalog resource
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Barkeep Contributors

/// Cache factory for creating cache providers
pub mod factory;
/// In-memory cache implementation
pub mod memory;

use crate::constants::cache::{
    CACHE_KEY_PREFIX, DEFAULT_CACHE_MAX_ENTRIES, DEFAULT_CLEANUP_INTERVAL_SECS,
    TTL_AVAILABILITY_SECS, TTL_CATEGORIES_SECS, TTL_CURATED_SECS, TTL_RECIPES_SECS,
};
use crate::errors::AppResult;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::time::Duration;

/// Outcome of a cache lookup that distinguishes expiry from absence
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CacheLookup<T> {
    /// Fresh value
    Hit(T),
    /// An entry existed but is past its TTL; it has been evicted
    Expired,
    /// No entry under this key
    Miss,
}

impl<T> CacheLookup<T> {
    /// Fresh value, if any
    pub fn into_option(self) -> Option<T> {
        match self {
            Self::Hit(value) => Some(value),
            Self::Expired | Self::Miss => None,
        }
    }

    /// Whether the lookup produced a fresh value
    pub const fn is_hit(&self) -> bool {
        matches!(self, Self::Hit(_))
    }
}

/// Cache provider trait for pluggable backend implementations
///
/// # Examples
///
/// ```rust,no_run
/// use barkeep::cache::{CacheConfig, CacheKey, CacheProvider, CacheResource};
/// use barkeep::cache::memory::InMemoryCache;
/// use std::time::Duration;
/// # async fn example() -> Result<(), barkeep::errors::AppError> {
///
/// let config = CacheConfig {
///     enable_background_cleanup: false,
///     ..Default::default()
/// };
/// let cache = InMemoryCache::new(config).await?;
///
/// let key = CacheKey::localized("en", CacheResource::Categories);
/// cache.set(&key, &vec!["rum", "gin"], Duration::from_secs(60)).await?;
///
/// let cached: Option<Vec<String>> = cache.get(&key).await?;
/// assert!(cached.is_some());
/// # Ok(())
/// # }
/// ```
#[async_trait::async_trait]
pub trait CacheProvider: Send + Sync + Clone {
    /// Create new cache instance with configuration
    ///
    /// # Errors
    ///
    /// Returns an error if cache initialization fails
    async fn new(config: CacheConfig) -> AppResult<Self>
    where
        Self: Sized;

    /// Store value in cache with TTL
    ///
    /// # Errors
    ///
    /// Returns an error if serialization or storage fails
    async fn set<T: Serialize + Send + Sync>(
        &self,
        key: &CacheKey,
        value: &T,
        ttl: Duration,
    ) -> AppResult<()>;

    /// Retrieve value, reporting whether a missing value expired or never existed
    ///
    /// # Errors
    ///
    /// Returns an error if deserialization fails
    async fn lookup<T: for<'de> Deserialize<'de>>(&self, key: &CacheKey)
        -> AppResult<CacheLookup<T>>;

    /// Retrieve value from cache (`None` if missing or expired)
    ///
    /// # Errors
    ///
    /// Returns an error if deserialization fails
    async fn get<T: for<'de> Deserialize<'de>>(&self, key: &CacheKey) -> AppResult<Option<T>> {
        Ok(self.lookup(key).await?.into_option())
    }

    /// Remove single cache entry
    ///
    /// # Errors
    ///
    /// Returns an error if invalidation fails
    async fn invalidate(&self, key: &CacheKey) -> AppResult<()>;

    /// Remove all cache entries matching a glob pattern (e.g. `catalog:en:*`)
    ///
    /// # Errors
    ///
    /// Returns an error if the pattern is invalid
    async fn invalidate_pattern(&self, pattern: &str) -> AppResult<u64>;

    /// Check if key exists in cache
    ///
    /// # Errors
    ///
    /// Returns an error if existence check fails
    async fn exists(&self, key: &CacheKey) -> AppResult<bool>;

    /// Get remaining TTL for key
    ///
    /// # Errors
    ///
    /// Returns an error if TTL check fails
    async fn ttl(&self, key: &CacheKey) -> AppResult<Option<Duration>>;

    /// Verify cache backend is healthy
    ///
    /// # Errors
    ///
    /// Returns an error if health check fails
    async fn health_check(&self) -> AppResult<()>;

    /// Clear all cache entries
    ///
    /// # Errors
    ///
    /// Returns an error if clear operation fails
    async fn clear_all(&self) -> AppResult<()>;
}

/// Cache configuration
#[derive(Debug, Clone)]
pub struct CacheConfig {
    /// Maximum number of entries
    pub max_entries: usize,
    /// Cleanup interval for expired entries
    pub cleanup_interval: Duration,
    /// Enable background cleanup task (should be false in tests to avoid runtime conflicts)
    pub enable_background_cleanup: bool,
    /// Cache TTL configuration
    pub ttl: CacheTtlConfig,
}

impl Default for CacheConfig {
    fn default() -> Self {
        Self {
            max_entries: DEFAULT_CACHE_MAX_ENTRIES,
            cleanup_interval: Duration::from_secs(DEFAULT_CLEANUP_INTERVAL_SECS),
            enable_background_cleanup: true,
            ttl: CacheTtlConfig::default(),
        }
    }
}

/// Cache TTL configuration for different catalog resources
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CacheTtlConfig {
    /// Recipe list TTL in seconds (default: 10 minutes)
    pub recipes_secs: u64,
    /// Category list TTL in seconds (default: 1 hour)
    pub categories_secs: u64,
    /// Availability rows TTL in seconds (default: 2 minutes)
    pub availability_secs: u64,
    /// Curated lists TTL in seconds (default: 30 minutes)
    pub curated_secs: u64,
}

impl Default for CacheTtlConfig {
    fn default() -> Self {
        Self {
            recipes_secs: TTL_RECIPES_SECS,
            categories_secs: TTL_CATEGORIES_SECS,
            availability_secs: TTL_AVAILABILITY_SECS,
            curated_secs: TTL_CURATED_SECS,
        }
    }
}

impl CacheTtlConfig {
    /// Get TTL duration for a specific cache resource type
    #[must_use]
    pub const fn ttl_for_resource(&self, resource: CacheResource) -> Duration {
        match resource {
            CacheResource::Recipes => Duration::from_secs(self.recipes_secs),
            CacheResource::Categories => Duration::from_secs(self.categories_secs),
            CacheResource::Availability => Duration::from_secs(self.availability_secs),
            CacheResource::Curated => Duration::from_secs(self.curated_secs),
        }
    }
}

/// Catalog resources that are loaded and cached as a whole
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CacheResource {
    /// Recipe list (localized)
    Recipes,
    /// Category list (localized)
    Categories,
    /// Ingredient availability rows (shared across locales)
    Availability,
    /// Venue curated lists (shared across locales)
    Curated,
}

impl CacheResource {
    /// Whether the resource varies by locale
    #[must_use]
    pub const fn is_localized(self) -> bool {
        matches!(self, Self::Recipes | Self::Categories)
    }
}

impl fmt::Display for CacheResource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Recipes => f.write_str("recipes"),
            Self::Categories => f.write_str("categories"),
            Self::Availability => f.write_str("availability"),
            Self::Curated => f.write_str("curated"),
        }
    }
}

/// Segment used in place of a locale for shared resources
const SHARED_SCOPE: &str = "shared";

/// Structured cache key
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct CacheKey {
    /// Locale for localized resources, `None` for shared ones
    pub locale: Option<String>,
    /// Resource being cached
    pub resource: CacheResource,
}

impl CacheKey {
    /// Key for a localized resource
    pub fn localized(locale: impl Into<String>, resource: CacheResource) -> Self {
        Self {
            locale: Some(locale.into()),
            resource,
        }
    }

    /// Key for a resource shared across locales
    #[must_use]
    pub const fn shared(resource: CacheResource) -> Self {
        Self {
            locale: None,
            resource,
        }
    }

    /// Key for `resource`, localized only when the resource varies by locale
    #[must_use]
    pub fn for_resource(locale: &str, resource: CacheResource) -> Self {
        if resource.is_localized() {
            Self::localized(locale, resource)
        } else {
            Self::shared(resource)
        }
    }

    /// Pattern matching every entry of one locale
    #[must_use]
    pub fn locale_pattern(locale: &str) -> String {
        format!("{CACHE_KEY_PREFIX}:{locale}:*")
    }

    /// Pattern matching every shared entry
    #[must_use]
    pub fn shared_pattern() -> String {
        format!("{CACHE_KEY_PREFIX}:{SHARED_SCOPE}:*")
    }
}

impl fmt::Display for CacheKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{CACHE_KEY_PREFIX}:{}:{}",
            self.locale.as_deref().unwrap_or(SHARED_SCOPE),
            self.resource
        )
    }
}
