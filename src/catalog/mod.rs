// ABOUTME: Catalog loading: sources, cached service, and immutable snapshots
// ABOUTME: Everything downstream of loading works on a CatalogSnapshot
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Barkeep Contributors

//! # Catalog
//!
//! A [`CatalogSource`] produces whole collections. [`CatalogService`] puts
//! the cache in front of it and assembles a [`CatalogSnapshot`]; loads that
//! fail leave an empty collection and a [`LoadDiagnostic`] instead of an error.

/// Cached snapshot assembly
pub mod service;
/// Immutable snapshot and diagnostics
pub mod snapshot;
/// Source trait and implementations
pub mod source;

pub use service::CatalogService;
pub use snapshot::{CatalogSnapshot, LoadDiagnostic};
pub use source::{CatalogSource, JsonCatalogSource, StaticCatalogSource};
