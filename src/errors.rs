// ABOUTME: Unified error handling for the catalog application crate
// ABOUTME: Re-exports the shared error taxonomy from barkeep-core
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Barkeep Contributors

//! Error types shared across the workspace
//!
//! The definitions live in `barkeep-core` so the engine crate and the
//! application crate agree on codes and exit statuses.

pub use barkeep_core::errors::{AppError, AppResult, ErrorCode, ErrorContext};
