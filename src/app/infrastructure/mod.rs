//! Infrastructure layer - external integrations and utilities.
//!
//! This module contains code that interfaces with external systems:
//! - Platform color-scheme detection
//! - Preference persistence
//! - Observer lists and provider scopes
//! - Error types

pub mod error;
pub mod listeners;
pub mod platform;
pub mod provider;
pub mod storage;
