// ABOUTME: Configuration management module for runtime settings
// ABOUTME: Exposes environment-driven configuration for directories, locale, venue and cache
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Barkeep Contributors

//! Configuration module
//!
//! - **Environment**: catalog settings resolved from environment variables

/// Environment and runtime configuration
pub mod environment;

pub use environment::{Environment, ServerConfig};
