// ABOUTME: Stock indexing, availability, and multi-facet filtering for the cocktail catalog
// ABOUTME: Pure synchronous computations over an in-memory catalog snapshot
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Barkeep Contributors

#![deny(unsafe_code)]

//! # Barkeep Engine
//!
//! Everything here is a pure function of its inputs: no I/O, no shared
//! mutable state, no error path. Callers recompute from the latest snapshot
//! whenever filter state or data changes.
//!
//! - [`stock::StockIndex`] turns availability rows into per-venue stock sets
//! - [`availability`] answers "can this recipe be made here" as a tri-state
//! - [`filter::FilterEngine`] narrows a recipe list facet by facet

/// Tri-state availability predicate
pub mod availability;
/// Filter state and pipeline
pub mod filter;
/// Per-venue stock sets
pub mod stock;

pub use availability::{availability, is_makeable, missing_essentials, Availability};
pub use filter::{FilterEngine, FilterStage, FilterState};
pub use stock::{StockIndex, VenueStockSet};
