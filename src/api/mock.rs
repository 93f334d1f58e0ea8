//! Recording transport for tests.

use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use async_trait::async_trait;

use super::{ApiClient, ApiError, ApiRequest, ApiResponse, Method, Transport};

type SendHook = Box<dyn Fn(&ApiRequest) + Send + Sync>;

/// Replays canned responses keyed by method and path, and records every request.
/// Unregistered routes answer `404`.
#[derive(Default)]
pub struct MockTransport {
    routes: Mutex<HashMap<(Method, String), Result<ApiResponse, String>>>,
    requests: Mutex<Vec<ApiRequest>>,
    on_send: Mutex<Option<SendHook>>,
}

impl MockTransport {
    pub fn new() -> Arc<Self> {
        Arc::new(Self::default())
    }

    pub fn client(self: &Arc<Self>) -> ApiClient {
        ApiClient::new(self.clone())
    }

    pub fn respond(&self, method: Method, path: &str, status: u16, body: impl Into<String>) {
        let response = ApiResponse { status, body: body.into() };
        self.routes.lock().unwrap().insert((method, path.to_string()), Ok(response));
    }

    pub fn respond_json(&self, method: Method, path: &str, value: serde_json::Value) {
        self.respond(method, path, 200, value.to_string());
    }

    pub fn fail(&self, method: Method, path: &str, message: &str) {
        self.routes.lock().unwrap().insert((method, path.to_string()), Err(message.to_string()));
    }

    /// Run `hook` while a request is in flight, before its response is returned
    pub fn on_send(&self, hook: impl Fn(&ApiRequest) + Send + Sync + 'static) {
        *self.on_send.lock().unwrap() = Some(Box::new(hook));
    }

    pub fn requests(&self) -> Vec<ApiRequest> {
        self.requests.lock().unwrap().clone()
    }

    pub fn last_request(&self) -> Option<ApiRequest> {
        self.requests.lock().unwrap().last().cloned()
    }

    pub fn count(&self, method: Method, path: &str) -> usize {
        self.requests
            .lock()
            .unwrap()
            .iter()
            .filter(|request| request.method == method && request.path == path)
            .count()
    }
}

#[async_trait(?Send)]
impl Transport for MockTransport {
    async fn send(&self, request: ApiRequest) -> Result<ApiResponse, ApiError> {
        let key = (request.method, request.path.clone());
        if let Some(hook) = self.on_send.lock().unwrap().as_ref() {
            hook(&request);
        }
        self.requests.lock().unwrap().push(request);

        match self.routes.lock().unwrap().get(&key) {
            Some(Ok(response)) => Ok(response.clone()),
            Some(Err(message)) => Err(ApiError::Network(message.clone())),
            None => Ok(ApiResponse { status: 404, body: "Not Found".to_string() }),
        }
    }
}
