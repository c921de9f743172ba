//! JSON helpers over `gloo-net` shared by every component.
//!
//! A failed request is never folded into an empty result: the caller gets a
//! [`FetchError`] and renders it as its own state.

use common::requests::ApiErrorBody;
use gloo_net::http::{Request, Response};
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::fmt;

#[derive(Debug, Clone, PartialEq)]
pub enum FetchError {
    /// The request never got an answer.
    Network(String),
    /// The backend answered with a non-2xx status.
    Status {
        status: u16,
        body: Option<ApiErrorBody>,
    },
    /// The answer could not be decoded, or the request body encoded.
    Decode(String),
}

impl FetchError {
    /// The `code` of the backend's error body, if any.
    pub fn code(&self) -> Option<&str> {
        match self {
            FetchError::Status { body: Some(body), .. } => Some(body.code.as_str()),
            _ => None,
        }
    }
}

impl fmt::Display for FetchError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FetchError::Network(msg) => write!(f, "Network error: {}", msg),
            FetchError::Status { body: Some(body), .. } => f.write_str(&body.message),
            FetchError::Status { status, body: None } => write!(f, "Server answered {}", status),
            FetchError::Decode(msg) => write!(f, "Unexpected response: {}", msg),
        }
    }
}

impl From<gloo_net::Error> for FetchError {
    fn from(err: gloo_net::Error) -> Self {
        match err {
            gloo_net::Error::SerdeError(e) => FetchError::Decode(e.to_string()),
            other => FetchError::Network(other.to_string()),
        }
    }
}

pub async fn get_json<T: DeserializeOwned>(url: &str) -> Result<T, FetchError> {
    let response = Request::get(url).send().await?;
    read_json(response).await
}

pub async fn post_json<B, T>(url: &str, body: &B) -> Result<T, FetchError>
where
    B: Serialize,
    T: DeserializeOwned,
{
    let response = Request::post(url).json(body)?.send().await?;
    read_json(response).await
}

async fn read_json<T: DeserializeOwned>(response: Response) -> Result<T, FetchError> {
    if !response.ok() {
        let status = response.status();
        let body = response.json::<ApiErrorBody>().await.ok();
        gloo_console::warn!(format!("{} answered {}", response.url(), status));
        return Err(FetchError::Status { status, body });
    }
    Ok(response.json::<T>().await?)
}

/// A value fetched from the backend.
#[derive(Debug, Clone, PartialEq)]
pub enum Remote<T> {
    Loading,
    Loaded(T),
    Failed(FetchError),
}

impl<T> Remote<T> {
    pub fn loaded(&self) -> Option<&T> {
        match self {
            Remote::Loaded(value) => Some(value),
            _ => None,
        }
    }
}

impl<T> From<Result<T, FetchError>> for Remote<T> {
    fn from(result: Result<T, FetchError>) -> Self {
        match result {
            Ok(value) => Remote::Loaded(value),
            Err(err) => Remote::Failed(err),
        }
    }
}
