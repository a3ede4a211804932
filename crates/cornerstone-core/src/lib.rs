//! Core types and traits for the cornerstone SEO toolkit.
//!
//! This crate provides the shared data model (keyword clusters, search
//! intent, entity mentions), error handling, configuration loading, and the
//! trait seams the provider crates plug into.

/// Configuration types and TOML loading.
pub mod config;
/// Error types and result definitions.
pub mod error;
/// Trait definitions for chat models and entity taggers.
pub mod traits;
/// Core data types for clusters, intent, and entities.
pub mod types;

pub use config::{ApiKeys, Config};
pub use error::{Error, Result};
pub use traits::{ChatModel, EntityTagger};
pub use types::{EntityLabel, GscPerformance, Intent, KeywordCluster, TaggedEntity};
