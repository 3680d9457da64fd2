//! Request helper: one JSON POST per call, failures returned as a tagged outcome.
//!
//! The helper never chooses a fallback value. Callers (the data-center client)
//! decide what an empty answer looks like for their endpoint.

#[cfg(target_arch = "wasm32")]
mod fetch;
#[cfg(not(target_arch = "wasm32"))]
mod http;

#[cfg(target_arch = "wasm32")]
pub use fetch::FetchTransport;
#[cfg(not(target_arch = "wasm32"))]
pub use http::HttpTransport;

use crate::error::TransportError;
use serde::Serialize;
use serde::de::DeserializeOwned;
use std::future::Future;

/// Header value sent with every request.
pub const CONTENT_TYPE_JSON: &str = "application/json";

/// Network step of a request: POST `body` to `path` and hand back the raw
/// response text.
///
/// Implementations set `Content-Type: application/json`, make exactly one
/// attempt, and do not look at the HTTP status.
pub trait Transport {
    fn post(&self, path: &str, body: String) -> impl Future<Output = Result<String, TransportError>>;
}

impl<T: Transport + ?Sized> Transport for &T {
    fn post(&self, path: &str, body: String) -> impl Future<Output = Result<String, TransportError>> {
        (**self).post(path, body)
    }
}

/// How the response body should be interpreted.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ResponseFormat {
    #[default]
    Json,
    Text,
}

/// A successfully read response body.
#[derive(Debug, Clone, PartialEq)]
pub enum Response {
    Json(serde_json::Value),
    Text(String),
}

/// POST `body` as JSON to `path` and interpret the reply according to `format`.
pub async fn request<T, B>(
    transport: &T,
    path: &str,
    body: &B,
    format: ResponseFormat,
) -> Result<Response, TransportError>
where
    T: Transport + ?Sized,
    B: Serialize + ?Sized,
{
    let text = send(transport, path, body).await?;
    match format {
        ResponseFormat::Text => Ok(Response::Text(text)),
        ResponseFormat::Json => decode(path, &text).map(Response::Json),
    }
}

/// POST `body` as JSON to `path` and decode the reply into `R`.
pub async fn request_json<T, B, R>(transport: &T, path: &str, body: &B) -> Result<R, TransportError>
where
    T: Transport + ?Sized,
    B: Serialize + ?Sized,
    R: DeserializeOwned,
{
    let text = send(transport, path, body).await?;
    decode(path, &text)
}

async fn send<T, B>(transport: &T, path: &str, body: &B) -> Result<String, TransportError>
where
    T: Transport + ?Sized,
    B: Serialize + ?Sized,
{
    let body = serde_json::to_string(body).map_err(TransportError::Encode)?;
    tracing::trace!(path, %body, "sending request");
    transport.post(path, body).await
}

fn decode<R: DeserializeOwned>(path: &str, text: &str) -> Result<R, TransportError> {
    serde_json::from_str(text).map_err(|source| TransportError::Decode {
        path: path.to_string(),
        source,
    })
}
