// ABOUTME: Core types and constants for the Barkeep cocktail catalog
// ABOUTME: Foundation crate with error handling, catalog models, and constants
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Barkeep Contributors

#![deny(unsafe_code)]

//! # Barkeep Core
//!
//! Shared types for the Barkeep workspace. This crate is designed to change
//! infrequently, so the engine and application crates recompile less.
//!
//! ## Modules
//!
//! - **errors**: Unified error handling with `AppError` and `ErrorCode`
//! - **constants**: Application-wide constants organized by domain
//! - **models**: Recipes, categories, availability rows and curated lists

/// Unified error handling system with standard error codes
pub mod errors;

/// Application constants organized by domain
pub mod constants;

/// Catalog data models
pub mod models;
