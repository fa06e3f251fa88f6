//! HTTP plumbing shared by every store request.

use reqwest::{Client, Method, RequestBuilder};
use serde::de::DeserializeOwned;
use serde::Serialize;
use tracing::error;

use crate::error::{AppError, Result};
use crate::store::query::{CountQuery, DeleteQuery, SelectQuery, UpdateQuery};

/// Handle to the remote data store. Constructed once at startup and
/// cloned into each worker; `reqwest::Client` is internally reference
/// counted so clones share one connection pool.
#[derive(Clone)]
pub struct StoreClient {
    http: Client,
    base_url: String,
    key: String,
}

impl StoreClient {
    pub fn new(base_url: &str, key: &str) -> Self {
        Self {
            http: Client::new(),
            base_url: base_url.trim_end_matches('/').to_string(),
            key: key.to_string(),
        }
    }

    /// Begin a query against one table.
    pub fn table(&self, name: &str) -> TableRef {
        TableRef {
            client: self.clone(),
            table: name.to_string(),
        }
    }

    pub(crate) fn request(&self, method: Method, table: &str) -> RequestBuilder {
        let url = format!("{}/rest/v1/{}", self.base_url, table);
        self.http
            .request(method, url)
            .header("apikey", &self.key)
            .bearer_auth(&self.key)
    }

    /// Send a request expecting a JSON row-set back. Non-2xx responses
    /// surface the store's body verbatim as `AppError::Store`.
    pub(crate) async fn send_rows<T: DeserializeOwned>(
        &self,
        table: &str,
        request: RequestBuilder,
    ) -> Result<Vec<T>> {
        let response = request.send().await.map_err(|e| {
            error!(table, "store request failed: {}", e);
            AppError::Store(e.to_string())
        })?;

        let status = response.status();
        if !status.is_success() {
            let body = response
                .text()
                .await
                .unwrap_or_else(|_| status.to_string());
            error!(table, %status, "store error: {}", body);
            return Err(AppError::Store(body));
        }

        response.json::<Vec<T>>().await.map_err(|e| {
            error!(table, "store response decode failed: {}", e);
            AppError::Store(e.to_string())
        })
    }
}

/// One table of the store, ready to build a query against.
pub struct TableRef {
    pub(crate) client: StoreClient,
    pub(crate) table: String,
}

impl TableRef {
    pub fn select(self) -> SelectQuery {
        SelectQuery::new(self)
    }

    pub fn count(self) -> CountQuery {
        CountQuery::new(self)
    }

    pub fn update(self) -> UpdateQuery {
        UpdateQuery::new(self)
    }

    pub fn delete(self) -> DeleteQuery {
        DeleteQuery::new(self)
    }

    /// Insert one row and return it with server-assigned fields.
    pub async fn insert<P: Serialize, T: DeserializeOwned>(self, payload: &P) -> Result<T> {
        let request = self
            .client
            .request(Method::POST, &self.table)
            .header("Prefer", "return=representation")
            .json(payload);

        let rows: Vec<T> = self.client.send_rows(&self.table, request).await?;
        rows.into_iter()
            .next()
            .ok_or_else(|| AppError::Store("insert returned no row".to_string()))
    }
}
