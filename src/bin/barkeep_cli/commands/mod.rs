// ABOUTME: Re-exports command modules for barkeep-cli
// ABOUTME: Provides browsing, favorites, and catalog listing commands
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Barkeep Contributors

pub mod browse;
pub mod catalog;
pub mod favorite;
