//! Клиентская библиотека для загрузки каталога из REST-источника.
//!
//! Источник отдаёт два списка: `GET /users` и `GET /posts`
//! (по умолчанию `https://jsonplaceholder.typicode.com`). Записи
//! декодируются в модели `catalog-core`.
#![warn(missing_docs)]

mod error;
mod http_client;

pub use catalog_core::{Post, User};
pub use error::{CatalogClientError, CatalogClientResult};

use std::time::Duration;

use http_client::HttpClient;

/// Адрес источника по умолчанию.
pub const DEFAULT_API_URL: &str = "https://jsonplaceholder.typicode.com";

#[derive(Debug, Clone)]
/// Параметры клиента.
pub struct ClientConfig {
    /// Базовый URL источника.
    pub base_url: String,
    /// Таймаут установки соединения.
    pub connect_timeout: Duration,
    /// Таймаут всего запроса.
    pub request_timeout: Duration,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_API_URL.to_string(),
            connect_timeout: Duration::from_secs(5),
            request_timeout: Duration::from_secs(15),
        }
    }
}

#[derive(Debug, Clone)]
/// Клиент каталога.
pub struct CatalogClient {
    http_client: HttpClient,
}

impl CatalogClient {
    /// Создаёт клиент с указанными параметрами.
    pub fn new(config: ClientConfig) -> CatalogClientResult<Self> {
        let base_url = config.base_url.trim().to_string();
        if !base_url.starts_with("http://") && !base_url.starts_with("https://") {
            return Err(CatalogClientError::InvalidConfig(format!(
                "base url must start with http:// or https://, got '{base_url}'"
            )));
        }

        let http_client =
            HttpClient::new(base_url, config.connect_timeout, config.request_timeout)?;
        Ok(Self { http_client })
    }

    /// Базовый URL источника.
    pub fn base_url(&self) -> &str {
        self.http_client.base_url()
    }

    /// Загружает пользователей; `limit` ограничивает размер ответа.
    pub async fn list_users(&self, limit: Option<u32>) -> CatalogClientResult<Vec<User>> {
        self.http_client.list_users(limit).await
    }

    /// Загружает посты; `limit` ограничивает размер ответа.
    pub async fn list_posts(&self, limit: Option<u32>) -> CatalogClientResult<Vec<Post>> {
        self.http_client.list_posts(limit).await
    }
}
