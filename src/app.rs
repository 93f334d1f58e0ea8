//! Catalog App
//!
//! Root component: categories on top, products below.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::actions;
use crate::api::ApiClient;
use crate::components::{CategoryPanel, ProductPanel};
use crate::config::AppConfig;
use crate::context::AppContext;
use crate::store::{CatalogState, CatalogStore};

#[component]
pub fn App(config: AppConfig) -> impl IntoView {
    let store = CatalogStore::new(CatalogState::default());
    let ctx = AppContext::new(store, ApiClient::from_config(&config));
    provide_context(ctx);

    let title = config.title;

    // Initial load
    Effect::new(move |_| {
        let client = ctx.client();
        spawn_local(async move {
            actions::load_categories(&client, store).await;
            actions::load_products(&client, store).await;
        });
    });

    view! {
        <main class="catalog-layout">
            <h1>{title}</h1>
            <CategoryPanel />
            <ProductPanel />
        </main>
    }
}
