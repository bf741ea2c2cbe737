//! Search Service Module
//!
//! The core component responsible for turning inbound HTTP requests into
//! database queries against the profile collection.
//!
//! ## Overview
//! This module implements the request/response pipeline of the service.
//! It bridges the HTTP API layer with the underlying document store:
//! raw query parameters are validated into a `SearchFilter`, the filter is
//! translated into a BSON predicate, and the predicate is handed to the
//! store for execution.
//!
//! ## Responsibilities
//! - **Validation**: Parsing raw query-string values into typed, range-checked
//!   filter values, rejecting invalid input before any database access.
//! - **Translation**: Building the predicate and pagination directive from a
//!   validated filter.
//! - **API**: Exposing the search capability via RESTful HTTP endpoints.
//!
//! ## Submodules
//! - **`params`**: The parameter validator (raw strings -> `SearchFilter`).
//! - **`query`**: The query translator (`SearchFilter` -> `ProfileQuery`).
//! - **`handlers`**: HTTP request handlers and router for the Axum web server.
//! - **`types`**: Data Transfer Objects (DTOs) for API communication.

pub mod handlers;
pub mod params;
pub mod query;
pub mod types;
