// ABOUTME: Cache-related constants for TTL, capacity, and cleanup intervals
// ABOUTME: Defaults for the in-memory catalog cache keyed by locale and resource
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Barkeep Contributors

/// Default maximum cache entries for in-memory cache
pub const DEFAULT_CACHE_MAX_ENTRIES: usize = 256;

/// Default cleanup interval in seconds for expired entries
pub const DEFAULT_CLEANUP_INTERVAL_SECS: u64 = 300; // 5 minutes

/// Recipe list cache TTL (10 minutes) - recipes are edited from the admin side
pub const TTL_RECIPES_SECS: u64 = 600;

/// Category list cache TTL (1 hour) - categories rarely change
pub const TTL_CATEGORIES_SECS: u64 = 3_600;

/// Ingredient availability cache TTL (2 minutes) - bar stock changes during service
pub const TTL_AVAILABILITY_SECS: u64 = 120;

/// Curated list cache TTL (30 minutes)
pub const TTL_CURATED_SECS: u64 = 1_800;

/// Cache key prefix for namespacing
pub const CACHE_KEY_PREFIX: &str = "catalog";
