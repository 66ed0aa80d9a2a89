//! core
//!
//! Core domain types and pure algorithms.
//!
//! # Modules
//!
//! - [`types`] - Resource kinds and catalog resources
//! - [`naming`] - Identifier sanitizing and validation
//! - [`namespace`] - Catalog folder hierarchy and merging
//! - [`grouping`] - First-wins deduplication by identifier
//! - [`config`] - Configuration schema and loading
//!
//! # Design Principles
//!
//! - Nothing here depends on the declaration tree
//! - Operations never mutate their inputs
//! - All ordering is deterministic

pub mod config;
pub mod grouping;
pub mod namespace;
pub mod naming;
pub mod types;
