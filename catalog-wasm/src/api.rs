use catalog_core::{Post, User};
use gloo_net::http::Request;
use serde::de::DeserializeOwned;

const API_BASE_URL: &str = match option_env!("CATALOG_API_BASE_URL") {
    Some(value) => value,
    None => "https://jsonplaceholder.typicode.com",
};

#[derive(Debug, Clone)]
pub(crate) enum ApiError {
    Network(String),
    Http { status: u16, url: String },
    Decode(String),
}

impl core::fmt::Display for ApiError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Self::Network(msg) => write!(f, "network error: {msg}"),
            Self::Http { status, url } => write!(f, "http error {status} from {url}"),
            Self::Decode(msg) => write!(f, "decode error: {msg}"),
        }
    }
}

fn endpoint(path: &str) -> String {
    format!(
        "{}/{}",
        API_BASE_URL.trim_end_matches('/'),
        path.trim_start_matches('/')
    )
}

async fn fetch_json<T: DeserializeOwned>(path: &str) -> Result<T, ApiError> {
    let url = endpoint(path);

    let response = Request::get(&url)
        .send()
        .await
        .map_err(|err| ApiError::Network(err.to_string()))?;

    if !response.ok() {
        return Err(ApiError::Http {
            status: response.status(),
            url,
        });
    }

    let body = response
        .text()
        .await
        .map_err(|err| ApiError::Network(err.to_string()))?;
    serde_json::from_str(&body).map_err(|err| ApiError::Decode(err.to_string()))
}

pub(crate) async fn list_users() -> Result<Vec<User>, ApiError> {
    fetch_json("/users").await
}

pub(crate) async fn list_posts() -> Result<Vec<Post>, ApiError> {
    fetch_json("/posts").await
}
