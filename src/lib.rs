//! Profile Search Service Library
//!
//! This library crate defines the modules behind the profile-search HTTP API.
//! It serves as the foundation for the binary executable (`main.rs`).
//!
//! ## Architecture Modules
//! The service is a thin request/response pipeline with two subsystems:
//!
//! - **`search`**: The request-handling core. Validates raw query parameters
//!   into a typed `SearchFilter`, translates the filter into a BSON predicate
//!   with pagination, and exposes the HTTP endpoints via Axum.
//! - **`store`**: The data-access layer. Defines the `ProfileStore` trait and
//!   its MongoDB-backed implementation against the `aggregation.profiles`
//!   collection, plus the environment-driven connection configuration.
//!
//! Errors shared across both subsystems live in `error`.

pub mod error;
pub mod search;
pub mod store;
