use thiserror::Error;

#[derive(Debug, Error)]
/// Ошибки клиентской библиотеки `catalog-client`.
pub enum CatalogClientError {
    /// Ошибка HTTP-транспорта (`reqwest`).
    #[error("http error: {0}")]
    Http(#[from] reqwest::Error),

    /// Источник ответил статусом, отличным от 2xx.
    #[error("unexpected status {status} from {url}")]
    Status {
        /// Код ответа.
        status: u16,
        /// Запрошенный адрес.
        url: String,
    },

    /// Тело ответа не соответствует форме записей.
    #[error("decode error: {0}")]
    Decode(#[from] serde_json::Error),

    /// Некорректные параметры клиента.
    #[error("invalid config: {0}")]
    InvalidConfig(String),
}

/// Результат операций `catalog-client`.
pub type CatalogClientResult<T> = Result<T, CatalogClientError>;

impl CatalogClientError {
    pub(crate) fn from_status(status: reqwest::StatusCode, url: &str) -> Self {
        Self::Status {
            status: status.as_u16(),
            url: url.to_string(),
        }
    }
}
