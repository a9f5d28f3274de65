// ABOUTME: Main library entry point for the Barkeep cocktail catalog
// ABOUTME: Wires catalog loading, caching, favorites, venue context and views around the engine
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Barkeep Contributors

// - deny(unsafe_code): no unsafe anywhere in the workspace
#![deny(unsafe_code)]

//! # Barkeep
//!
//! A browsing engine for cocktail recipes: multi-facet filtering, favorites,
//! and per-venue stock availability.
//!
//! ## Architecture
//!
//! - **Engine** (`barkeep-engine`): stock index, availability predicate and
//!   filter pipeline, all pure and synchronous
//! - **Catalog**: async sources, cached loads, assembled snapshots
//! - **Favorites**: durable de-duplicated recipe ids over a key/value store
//! - **Venue**: explicit venue selection and browse scope
//! - **Views**: list cards and detail pages with availability badges
//!
//! ## Example Usage
//!
//! ```rust,no_run
//! use barkeep::catalog::{CatalogService, JsonCatalogSource};
//! use barkeep::cache::factory::Cache;
//! use barkeep::config::environment::ServerConfig;
//! use barkeep::engine::FilterState;
//! use barkeep::errors::AppResult;
//! use barkeep::favorites::{Favorites, MemoryStorage};
//! use barkeep::venue::{BrowseScope, VenueContext};
//! use barkeep::views;
//!
//! #[tokio::main]
//! async fn main() -> AppResult<()> {
//!     let config = ServerConfig::from_env();
//!     let cache = Cache::new(config.cache.clone()).await?;
//!     let service = CatalogService::new(
//!         JsonCatalogSource::new(&config.data_dir),
//!         cache,
//!         config.cache.ttl.clone(),
//!     );
//!
//!     let snapshot = service.snapshot(&config.locale).await;
//!     let context = VenueContext::all(snapshot.stock());
//!     let favorites = Favorites::load(MemoryStorage::new())?;
//!     let state = FilterState::new().with_search("rum");
//!
//!     for card in views::browse(&snapshot, &state, &context, &BrowseScope::Catalog, &favorites) {
//!         println!("{} [{}]", card.name, card.availability.badge());
//!     }
//!     Ok(())
//! }
//! ```

/// Cache abstraction and in-memory backend
pub mod cache;

/// Catalog sources, cached loading and snapshots
pub mod catalog;

/// Environment-driven configuration
pub mod config;

/// Unified error handling
pub mod errors;

/// Durable favorite recipe ids
pub mod favorites;

/// Structured logging setup
pub mod logging;

/// Venue selection and browse scope
pub mod venue;

/// List and detail view models
pub mod views;

/// Shared constants
pub use barkeep_core::constants;

/// Catalog data models
pub use barkeep_core::models;

/// Pure filtering and availability engine
pub use barkeep_engine as engine;
