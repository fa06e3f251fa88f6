//! Client for the hosted data store.
//!
//! The store is a PostgREST-style HTTP data API: tables are addressed as
//! `/rest/v1/{table}` and predicates travel in the query string. This
//! module owns the single long-lived HTTP client and the query builders
//! the handlers use; nothing here retries, caches, or pools beyond what
//! `reqwest` does internally.

pub mod client;
pub mod query;

pub use client::StoreClient;
pub use query::{CountQuery, DeleteQuery, Direction, SelectQuery, UpdateQuery};
