use reqwest::{Client, Method};
use serde::de::DeserializeOwned;
use std::time::Duration;
use tracing::debug;

use catalog_core::{Post, User};

use crate::error::{CatalogClientError, CatalogClientResult};

#[derive(Debug, Clone)]
/// HTTP-клиент для REST-источника каталога.
pub(crate) struct HttpClient {
    base_url: String,
    client: Client,
}

impl HttpClient {
    pub(crate) fn new(
        base_url: impl Into<String>,
        connect_timeout: Duration,
        request_timeout: Duration,
    ) -> CatalogClientResult<Self> {
        let client = Client::builder()
            .connect_timeout(connect_timeout)
            .timeout(request_timeout)
            .build()?;

        Ok(Self {
            base_url: base_url.into(),
            client,
        })
    }

    pub(crate) fn base_url(&self) -> &str {
        &self.base_url
    }

    fn endpoint(&self, path: &str) -> String {
        endpoint(&self.base_url, path)
    }

    /// универсальный helper для GET-запросов с json-ответом
    async fn get_json<TRes>(&self, path: &str, limit: Option<u32>) -> CatalogClientResult<TRes>
    where
        TRes: DeserializeOwned,
    {
        let url = self.endpoint(path);
        debug!(%url, ?limit, "fetching records");

        let mut request = self.client.request(Method::GET, &url);
        if let Some(limit) = limit {
            request = request.query(&[("_limit", limit)]);
        }

        let response = request.send().await?;
        let status = response.status();
        if !status.is_success() {
            return Err(CatalogClientError::from_status(status, &url));
        }

        let body = response.text().await?;
        debug!(%url, %status, bytes = body.len(), "records received");
        decode(&body)
    }

    pub(crate) async fn list_users(&self, limit: Option<u32>) -> CatalogClientResult<Vec<User>> {
        self.get_json("/users", limit).await
    }

    pub(crate) async fn list_posts(&self, limit: Option<u32>) -> CatalogClientResult<Vec<Post>> {
        self.get_json("/posts", limit).await
    }
}

fn endpoint(base_url: &str, path: &str) -> String {
    format!(
        "{}/{}",
        base_url.trim_end_matches('/'),
        path.trim_start_matches('/')
    )
}

fn decode<T: DeserializeOwned>(body: &str) -> CatalogClientResult<T> {
    serde_json::from_str(body).map_err(CatalogClientError::from)
}
