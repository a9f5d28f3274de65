// ABOUTME: Constants module with domain-separated organization
// ABOUTME: Pure data constants for cache, storage keys, data files, and environment names
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Barkeep Contributors

//! Constants module
//!
//! Constants are grouped by domain rather than kept in a single flat list.

/// Cache-related constants (TTL, sizes, etc.)
pub mod cache;

/// Service identity used in structured logs
pub mod service_names {
    /// Library and CLI service name
    pub const BARKEEP: &str = "barkeep";
    /// Command-line binary name
    pub const BARKEEP_CLI: &str = "barkeep-cli";
}

/// Durable client storage keys
pub mod storage {
    /// Fixed key under which favorite recipe ids are persisted
    pub const FAVORITES_KEY: &str = "barkeep.favorites";
    /// Extension appended to storage keys by the file backend
    pub const FILE_EXTENSION: &str = "json";
}

/// File names inside a catalog data directory
pub mod data_files {
    /// Recipe list (locale variants use `recipes.<locale>.json`)
    pub const RECIPES: &str = "recipes";
    /// Category list (locale variants use `categories.<locale>.json`)
    pub const CATEGORIES: &str = "categories";
    /// Ingredient availability rows
    pub const AVAILABILITY: &str = "availability";
    /// Venue curated lists
    pub const CURATED: &str = "curated";
    /// Extension of every data file
    pub const EXTENSION: &str = "json";
}

/// Default values applied when the environment does not override them
pub mod defaults {
    /// Default locale for catalog loads
    pub const LOCALE: &str = "en";
    /// Default catalog data directory
    pub const DATA_DIR: &str = "./data";
    /// Fallback state directory when no platform data dir exists
    pub const STATE_DIR_FALLBACK: &str = "./.barkeep";
    /// Application directory name under the platform data dir
    pub const APP_DIR_NAME: &str = "barkeep";
}

/// Environment variable names
pub mod env_config {
    /// Catalog data directory
    pub const DATA_DIR: &str = "BARKEEP_DATA_DIR";
    /// Favorites and other durable client state
    pub const STATE_DIR: &str = "BARKEEP_STATE_DIR";
    /// Catalog locale
    pub const LOCALE: &str = "BARKEEP_LOCALE";
    /// Default venue selection
    pub const VENUE: &str = "BARKEEP_VENUE";
    /// Deployment environment
    pub const ENVIRONMENT: &str = "ENVIRONMENT";
    /// Cache capacity
    pub const CACHE_MAX_ENTRIES: &str = "CACHE_MAX_ENTRIES";
    /// Cache cleanup interval
    pub const CACHE_CLEANUP_INTERVAL_SECS: &str = "CACHE_CLEANUP_INTERVAL_SECS";
    /// Recipe list TTL
    pub const CACHE_TTL_RECIPES_SECS: &str = "CACHE_TTL_RECIPES_SECS";
    /// Category list TTL
    pub const CACHE_TTL_CATEGORIES_SECS: &str = "CACHE_TTL_CATEGORIES_SECS";
    /// Availability TTL
    pub const CACHE_TTL_AVAILABILITY_SECS: &str = "CACHE_TTL_AVAILABILITY_SECS";
    /// Curated list TTL
    pub const CACHE_TTL_CURATED_SECS: &str = "CACHE_TTL_CURATED_SECS";
}
