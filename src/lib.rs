/// Warkop KM9 café API
///
/// A thin REST façade over the hosted data store: each route parses its
/// parameters, runs one or two queries through the store client, and
/// wraps the result in the `{success, data, count, error, message}`
/// envelope. All persistence concerns (ids, timestamps, constraints)
/// belong to the store.
///
/// # Modules
///
/// - `handlers`: HTTP request handlers, one module per resource
/// - `models`: row and payload types
/// - `store`: query-building HTTP client for the data store
/// - `response`: success envelope helpers
/// - `error`: error types mapped to HTTP statuses
/// - `config`: environment configuration
pub mod config;
pub mod error;
pub mod handlers;
pub mod models;
pub mod response;
pub mod store;

pub use config::Config;
pub use error::{AppError, Result};
