use super::{CONTENT_TYPE_JSON, Transport};
use crate::error::TransportError;
use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_futures::JsFuture;
use web_sys::{Headers, Request, RequestInit, Response};

/// Browser transport: `window.fetch` with paths relative to the page origin.
#[derive(Debug, Clone, Copy, Default)]
pub struct FetchTransport;

impl FetchTransport {
    pub const fn new() -> Self {
        Self
    }
}

fn describe(value: &JsValue) -> String {
    value.as_string().unwrap_or_else(|| format!("{:?}", value))
}

fn network(path: &str, value: &JsValue) -> TransportError {
    TransportError::Network {
        path: path.to_string(),
        message: describe(value),
    }
}

fn read(path: &str, value: &JsValue) -> TransportError {
    TransportError::Read {
        path: path.to_string(),
        message: describe(value),
    }
}

impl Transport for FetchTransport {
    async fn post(&self, path: &str, body: String) -> Result<String, TransportError> {
        let window = web_sys::window().ok_or_else(|| TransportError::Network {
            path: path.to_string(),
            message: "no window object".to_string(),
        })?;

        let headers = Headers::new().map_err(|e| network(path, &e))?;
        headers
            .set("Content-Type", CONTENT_TYPE_JSON)
            .map_err(|e| network(path, &e))?;

        let init = RequestInit::new();
        init.set_method("POST");
        init.set_headers(&headers);
        init.set_body(&JsValue::from_str(&body));

        let request = Request::new_with_str_and_init(path, &init).map_err(|e| network(path, &e))?;
        let response = JsFuture::from(window.fetch_with_request(&request))
            .await
            .map_err(|e| network(path, &e))?;
        let response: Response = response.dyn_into().map_err(|e| network(path, &e))?;

        let text = response.text().map_err(|e| read(path, &e))?;
        let text = JsFuture::from(text).await.map_err(|e| read(path, &e))?;
        text.as_string().ok_or_else(|| read(path, &text))
    }
}
