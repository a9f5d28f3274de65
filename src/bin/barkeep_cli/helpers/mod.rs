// ABOUTME: Re-exports helper modules for barkeep-cli
// ABOUTME: Provides session setup and display formatting utilities
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Barkeep Contributors

pub mod display;
pub mod session;
