//! Controllers layer - orchestration and coordination.
//!
//! This module contains controllers that coordinate between
//! domain models, infrastructure and the UI:
//! - Section/route synchronization
//! - Application store
//! - Theme resolution

pub mod navigation;
pub mod store;
pub mod theme;
