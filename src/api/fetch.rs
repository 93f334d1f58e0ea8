//! Browser `fetch` transport.

use async_trait::async_trait;
use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_futures::JsFuture;
use web_sys::{Request, RequestInit, RequestMode, Response};

use super::{ApiError, ApiRequest, ApiResponse, Transport};

/// Issues requests through `window.fetch` against a fixed origin
pub struct FetchTransport {
    base_url: String,
}

impl FetchTransport {
    pub fn new(base_url: &str) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }
}

fn js_error(context: &str, err: JsValue) -> ApiError {
    ApiError::Network(format!("{}: {:?}", context, err))
}

#[async_trait(?Send)]
impl Transport for FetchTransport {
    async fn send(&self, request: ApiRequest) -> Result<ApiResponse, ApiError> {
        let url = request.url(&self.base_url);

        let opts = RequestInit::new();
        opts.set_method(request.method.as_str());
        opts.set_mode(RequestMode::Cors);
        if let Some(body) = &request.body {
            opts.set_body(&JsValue::from_str(body));
        }

        let web_request = Request::new_with_str_and_init(&url, &opts)
            .map_err(|e| js_error("Failed to create request", e))?;

        if request.body.is_some() {
            web_request
                .headers()
                .set("Content-Type", "application/json")
                .map_err(|e| js_error("Failed to set header", e))?;
        }

        let window = web_sys::window().ok_or_else(|| ApiError::Network("No window".to_string()))?;
        let resp_value = JsFuture::from(window.fetch_with_request(&web_request))
            .await
            .map_err(|e| js_error("Fetch failed", e))?;

        let resp: Response = resp_value
            .dyn_into()
            .map_err(|_| ApiError::Network("Response is not a Response object".to_string()))?;

        let text = JsFuture::from(resp.text().map_err(|e| js_error("Failed to get text", e))?)
            .await
            .map_err(|e| js_error("Failed to read body", e))?;

        Ok(ApiResponse {
            status: resp.status(),
            body: text.as_string().unwrap_or_default(),
        })
    }
}
