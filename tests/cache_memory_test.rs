// ABOUTME: Unit tests for the in-memory catalog cache
// ABOUTME: Tests TTL expiration, expiry reporting, capacity limits, and locale invalidation
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Barkeep Contributors

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

mod common;

use anyhow::Result;
use barkeep::cache::memory::InMemoryCache;
use barkeep::cache::{CacheConfig, CacheKey, CacheLookup, CacheProvider, CacheResource};
use barkeep::models::Recipe;
use common::{daiquiri, mojito, test_cache};
use std::time::Duration;

#[tokio::test]
async fn test_cache_set_and_get() -> Result<()> {
    let cache = test_cache(16).await?;
    let key = CacheKey::localized("en", CacheResource::Recipes);
    let recipes = vec![mojito(), daiquiri()];

    cache.set(&key, &recipes, Duration::from_secs(10)).await?;

    let cached: Option<Vec<Recipe>> = cache.get(&key).await?;
    assert_eq!(cached, Some(recipes));
    Ok(())
}

#[tokio::test]
async fn test_cache_expiration_reports_expired_then_miss() -> Result<()> {
    let cache = test_cache(16).await?;
    let key = CacheKey::shared(CacheResource::Availability);

    cache.set(&key, &vec!["rum"], Duration::from_millis(50)).await?;
    assert!(cache.exists(&key).await?);

    tokio::time::sleep(Duration::from_millis(120)).await;

    let first: CacheLookup<Vec<String>> = cache.lookup(&key).await?;
    assert_eq!(first, CacheLookup::Expired);

    // expired entries are evicted on lookup
    let second: CacheLookup<Vec<String>> = cache.lookup(&key).await?;
    assert_eq!(second, CacheLookup::Miss);
    Ok(())
}

#[tokio::test]
async fn test_cache_ttl_counts_down() -> Result<()> {
    let cache = test_cache(16).await?;
    let key = CacheKey::localized("en", CacheResource::Categories);

    cache.set(&key, &"value", Duration::from_secs(60)).await?;
    let remaining = cache.ttl(&key).await?.unwrap();
    assert!(remaining <= Duration::from_secs(60));
    assert!(remaining > Duration::from_secs(50));

    let missing = CacheKey::localized("fr", CacheResource::Categories);
    assert_eq!(cache.ttl(&missing).await?, None);
    Ok(())
}

#[tokio::test]
async fn test_cache_invalidate_pattern_by_locale() -> Result<()> {
    let cache = test_cache(16).await?;
    let ttl = Duration::from_secs(60);

    cache.set(&CacheKey::localized("en", CacheResource::Recipes), &1, ttl).await?;
    cache.set(&CacheKey::localized("en", CacheResource::Categories), &2, ttl).await?;
    cache.set(&CacheKey::localized("de", CacheResource::Recipes), &3, ttl).await?;
    cache.set(&CacheKey::shared(CacheResource::Curated), &4, ttl).await?;

    let removed = cache.invalidate_pattern(&CacheKey::locale_pattern("en")).await?;
    assert_eq!(removed, 2);

    assert!(!cache.exists(&CacheKey::localized("en", CacheResource::Recipes)).await?);
    assert!(cache.exists(&CacheKey::localized("de", CacheResource::Recipes)).await?);
    assert!(cache.exists(&CacheKey::shared(CacheResource::Curated)).await?);

    assert_eq!(cache.invalidate_pattern(&CacheKey::shared_pattern()).await?, 1);
    Ok(())
}

#[tokio::test]
async fn test_cache_rejects_invalid_pattern() -> Result<()> {
    let cache = test_cache(16).await?;
    assert!(cache.invalidate_pattern("catalog:[").await.is_err());
    Ok(())
}

#[tokio::test]
async fn test_cache_capacity_eviction() -> Result<()> {
    let cache = InMemoryCache::new(CacheConfig {
        max_entries: 2,
        enable_background_cleanup: false,
        ..Default::default()
    })
    .await?;
    let ttl = Duration::from_secs(60);

    let first = CacheKey::localized("en", CacheResource::Recipes);
    let second = CacheKey::localized("de", CacheResource::Recipes);
    let third = CacheKey::localized("fr", CacheResource::Recipes);

    cache.set(&first, &1, ttl).await?;
    cache.set(&second, &2, ttl).await?;
    cache.set(&third, &3, ttl).await?;

    assert_eq!(cache.len().await, 2);
    assert!(!cache.exists(&first).await?);
    assert!(cache.exists(&third).await?);
    Ok(())
}

#[tokio::test]
async fn test_background_cleanup_removes_expired_entries() -> Result<()> {
    let cache = InMemoryCache::new(CacheConfig {
        max_entries: 16,
        cleanup_interval: Duration::from_millis(50),
        enable_background_cleanup: true,
        ..Default::default()
    })
    .await?;

    cache
        .set(&CacheKey::shared(CacheResource::Availability), &"rows", Duration::from_millis(20))
        .await?;
    assert_eq!(cache.len().await, 1);

    tokio::time::sleep(Duration::from_millis(200)).await;
    assert!(cache.is_empty().await);
    Ok(())
}

#[tokio::test]
async fn test_cache_clear_all_and_health_check() -> Result<()> {
    let cache = test_cache(16).await?;
    let key = CacheKey::shared(CacheResource::Curated);
    cache.set(&key, &"lists", Duration::from_secs(60)).await?;

    cache.health_check().await?;
    cache.clear_all().await?;
    assert!(!cache.exists(&key).await?);
    Ok(())
}

#[test]
fn test_cache_key_display() {
    assert_eq!(
        CacheKey::localized("en", CacheResource::Recipes).to_string(),
        "catalog:en:recipes"
    );
    assert_eq!(
        CacheKey::for_resource("en", CacheResource::Availability).to_string(),
        "catalog:shared:availability"
    );
}
