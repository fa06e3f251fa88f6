//! Query builders for the store's filter grammar.
//!
//! Predicates are encoded PostgREST-style: `column=eq.value`,
//! `column=gte.value`, `order=column.asc`, and
//! `or=(a.ilike.*needle*,b.ilike.*needle*)` for case-insensitive
//! substring search across several text columns.

use reqwest::Method;
use serde::de::DeserializeOwned;
use serde::Serialize;
use tracing::error;

use crate::error::{AppError, Result};
use crate::store::client::TableRef;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Asc,
    Desc,
}

impl Direction {
    fn as_str(self) -> &'static str {
        match self {
            Direction::Asc => "asc",
            Direction::Desc => "desc",
        }
    }
}

fn eq_param(column: &str, value: &str) -> (String, String) {
    (column.to_string(), format!("eq.{}", value))
}

fn gte_param(column: &str, value: &str) -> (String, String) {
    (column.to_string(), format!("gte.{}", value))
}

/// Build the `or=(...)` disjunction of ilike patterns. The needle goes
/// in verbatim; the HTTP client percent-encodes the whole value exactly
/// once, which is what the store expects.
fn or_ilike_param(columns: &[&str], needle: &str) -> (String, String) {
    let terms: Vec<String> = columns
        .iter()
        .map(|col| format!("{}.ilike.*{}*", col, needle))
        .collect();
    ("or".to_string(), format!("({})", terms.join(",")))
}

/// Row-returning read query.
pub struct SelectQuery {
    table: TableRef,
    params: Vec<(String, String)>,
}

impl SelectQuery {
    pub(crate) fn new(table: TableRef) -> Self {
        Self {
            table,
            params: vec![("select".to_string(), "*".to_string())],
        }
    }

    /// Replace the default `*` projection with an explicit column list.
    pub fn columns(mut self, columns: &str) -> Self {
        self.params[0].1 = columns.to_string();
        self
    }

    pub fn eq(mut self, column: &str, value: &str) -> Self {
        self.params.push(eq_param(column, value));
        self
    }

    pub fn gte(mut self, column: &str, value: &str) -> Self {
        self.params.push(gte_param(column, value));
        self
    }

    pub fn or_ilike(mut self, columns: &[&str], needle: &str) -> Self {
        self.params.push(or_ilike_param(columns, needle));
        self
    }

    pub fn order(mut self, column: &str, direction: Direction) -> Self {
        self.params.push((
            "order".to_string(),
            format!("{}.{}", column, direction.as_str()),
        ));
        self
    }

    pub fn limit(mut self, n: usize) -> Self {
        self.params.push(("limit".to_string(), n.to_string()));
        self
    }

    pub async fn fetch<T: DeserializeOwned>(self) -> Result<Vec<T>> {
        let client = self.table.client.clone();
        let request = client
            .request(Method::GET, &self.table.table)
            .query(&self.params);
        client.send_rows(&self.table.table, request).await
    }

    /// Fetch at most one row. Zero rows is not an error here; the call
    /// site decides whether that is a 404.
    pub async fn fetch_optional<T: DeserializeOwned>(self) -> Result<Option<T>> {
        let rows: Vec<T> = self.limit(1).fetch().await?;
        Ok(rows.into_iter().next())
    }
}

/// Exact-count query. Asks the store for the total via the
/// `content-range` response header instead of transferring rows.
pub struct CountQuery {
    table: TableRef,
    params: Vec<(String, String)>,
}

impl CountQuery {
    pub(crate) fn new(table: TableRef) -> Self {
        Self {
            table,
            params: vec![("select".to_string(), "id".to_string())],
        }
    }

    pub fn gte(mut self, column: &str, value: &str) -> Self {
        self.params.push(gte_param(column, value));
        self
    }

    pub async fn exec(self) -> Result<u64> {
        let client = self.table.client.clone();
        let response = client
            .request(Method::GET, &self.table.table)
            .query(&self.params)
            .header("Prefer", "count=exact")
            .header("Range-Unit", "items")
            .header("Range", "0-0")
            .send()
            .await
            .map_err(|e| {
                error!(table = %self.table.table, "store count failed: {}", e);
                AppError::Store(e.to_string())
            })?;

        let status = response.status();
        if !status.is_success() {
            let body = response
                .text()
                .await
                .unwrap_or_else(|_| status.to_string());
            error!(table = %self.table.table, %status, "store error: {}", body);
            return Err(AppError::Store(body));
        }

        let range = response
            .headers()
            .get("content-range")
            .and_then(|v| v.to_str().ok())
            .ok_or_else(|| AppError::Store("missing content-range header".to_string()))?;

        parse_content_range_total(range)
            .ok_or_else(|| AppError::Store(format!("unparseable content-range: {}", range)))
    }
}

/// Total after the slash in a `content-range` value, e.g. `0-0/42` or `*/0`.
fn parse_content_range_total(value: &str) -> Option<u64> {
    value.rsplit('/').next()?.trim().parse().ok()
}

/// Partial update of every row matching the filters.
pub struct UpdateQuery {
    table: TableRef,
    params: Vec<(String, String)>,
}

impl UpdateQuery {
    pub(crate) fn new(table: TableRef) -> Self {
        Self {
            table,
            params: Vec::new(),
        }
    }

    pub fn eq(mut self, column: &str, value: &str) -> Self {
        self.params.push(eq_param(column, value));
        self
    }

    /// Send the patch and return the updated rows; empty means no row
    /// matched the filters.
    pub async fn send<P: Serialize, T: DeserializeOwned>(self, payload: &P) -> Result<Vec<T>> {
        let client = self.table.client.clone();
        let request = client
            .request(Method::PATCH, &self.table.table)
            .query(&self.params)
            .header("Prefer", "return=representation")
            .json(payload);
        client.send_rows(&self.table.table, request).await
    }
}

/// Delete every row matching the filters, reporting how many went away.
pub struct DeleteQuery {
    table: TableRef,
    params: Vec<(String, String)>,
}

impl DeleteQuery {
    pub(crate) fn new(table: TableRef) -> Self {
        Self {
            table,
            params: Vec::new(),
        }
    }

    pub fn eq(mut self, column: &str, value: &str) -> Self {
        self.params.push(eq_param(column, value));
        self
    }

    pub async fn exec(self) -> Result<usize> {
        let client = self.table.client.clone();
        let request = client
            .request(Method::DELETE, &self.table.table)
            .query(&self.params)
            .header("Prefer", "return=representation");
        let rows: Vec<serde_json::Value> = client.send_rows(&self.table.table, request).await?;
        Ok(rows.len())
    }
}
