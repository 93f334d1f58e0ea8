//! Application Context
//!
//! Shared state provided via Leptos Context API.

use leptos::prelude::*;

use crate::api::ApiClient;
use crate::store::CatalogStore;

/// App-wide handles provided via context
#[derive(Clone, Copy)]
pub struct AppContext {
    /// Catalog lists, edit buffers and form drafts
    pub store: CatalogStore,
    /// Backend client
    client: StoredValue<ApiClient>,
}

impl AppContext {
    pub fn new(store: CatalogStore, client: ApiClient) -> Self {
        Self {
            store,
            client: StoredValue::new(client),
        }
    }

    /// Clone of the backend client, for moving into a spawned task
    pub fn client(&self) -> ApiClient {
        self.client.get_value()
    }
}

/// Get the app context; panics if `App` did not provide it
pub fn use_app_context() -> AppContext {
    expect_context::<AppContext>()
}
