//! # permalink-std
//!
//! Standard implementations for route-bound SEO permalinks.
//!
//! This crate provides:
//! - **Dispatch**: [`PermalinkManager`](manager::PermalinkManager)
//! - **Builder lookup**: [`BuilderRegistry`](registry::BuilderRegistry),
//!   [`BuilderProvider`](registry::BuilderProvider)
//! - **Static routes**: [`StaticPermalinks`](table::StaticPermalinks),
//!   [`PermalinkConfig`](config::PermalinkConfig)
//! - **Storage**: [`PermalinkStore`](store::PermalinkStore)
//! - **Standard builders**: [`SeoDocument`](document::SeoDocument) and the
//!   builders in [`builders`]
//! - **Testing**: recording and failing builders

#![deny(clippy::wildcard_imports)]
#![warn(missing_docs)]

// Re-export core traits
pub use permalink_core;

// Modules
pub mod builders;
pub mod config;
pub mod document;
pub mod manager;
pub mod registry;
pub mod route;
pub mod store;
pub mod table;
pub mod testing;
