//! Product Actions

use leptos::prelude::*;

use crate::api::{self, ApiClient};
use crate::models::{parse_category_id, parse_price, Product, ProductDraft};
use crate::store::{store_remove_product, CatalogStore, CatalogStateStoreFields};

/// Replace the product list with the backend's current list
pub async fn load_products(client: &ApiClient, store: CatalogStore) {
    match api::list_products(client).await {
        Ok(products) => {
            log::info!("Loaded {} products", products.len());
            store.products().set(products);
        }
        Err(e) => log::error!("Failed to load products: {}", e),
    }
}

/// Submit the "new product" form, then re-fetch the list.
///
/// Returns whether the backend accepted the new product; the draft is only
/// reset in that case.
pub async fn create_product(client: &ApiClient, store: CatalogStore) -> bool {
    let draft = store.new_product().get_untracked();

    match api::create_product(client, &draft.to_request()).await {
        Ok(_) => {
            store.new_product().set(ProductDraft::default());
            load_products(client, store).await;
            true
        }
        Err(e) => {
            log::error!("Failed to create product: {}", e);
            false
        }
    }
}

pub fn set_new_product_name(store: CatalogStore, name: String) {
    store.new_product().update(|draft| draft.name = name);
}

/// Non-numeric input stores 0
pub fn set_new_product_price(store: CatalogStore, input: &str) {
    let price = parse_price(input);
    store.new_product().update(|draft| draft.unit_price = price);
}

pub fn set_new_product_category(store: CatalogStore, input: &str) {
    let category_id = parse_category_id(input);
    store.new_product().update(|draft| draft.category_id = category_id);
}

/// Copy a row into the edit buffer; the list itself stays untouched
pub fn begin_product_edit(store: CatalogStore, product: &Product) {
    store.editing_product().set(Some(product.clone()));
}

pub fn set_editing_product_name(store: CatalogStore, name: String) {
    store.editing_product().update(|editing| {
        if let Some(product) = editing {
            product.product_name = name;
        }
    });
}

/// Non-numeric input stores 0
pub fn set_editing_product_price(store: CatalogStore, input: &str) {
    let price = parse_price(input);
    store.editing_product().update(|editing| {
        if let Some(product) = editing {
            product.unit_price = price;
        }
    });
}

pub fn set_editing_product_category(store: CatalogStore, input: &str) {
    let category_id = parse_category_id(input);
    store.editing_product().update(|editing| {
        if let Some(product) = editing {
            product.category_id = category_id;
        }
    });
}

/// Discard the edit buffer without contacting the backend
pub fn cancel_product_edit(store: CatalogStore) {
    store.editing_product().set(None);
}

/// Send the edit buffer to the backend; on success clear it and re-fetch
pub async fn save_product_edit(client: &ApiClient, store: CatalogStore) {
    let Some(edited) = store.editing_product().get_untracked() else {
        return;
    };

    match api::update_product(client, &edited).await {
        Ok(_) => {
            // Another row may have entered edit mode while the request was in flight
            if store.editing_product().with_untracked(|editing| editing.as_ref().map(|p| p.id)) == Some(edited.id) {
                store.editing_product().set(None);
            }
            load_products(client, store).await;
        }
        Err(e) => log::error!("Failed to update product {}: {}", edited.id, e),
    }
}

/// Delete on the backend, then drop the row locally (no re-fetch)
pub async fn delete_product(client: &ApiClient, store: CatalogStore, id: u32) {
    match api::delete_product(client, id).await {
        Ok(_) => {
            store_remove_product(&store, id);
            if store.editing_product().with_untracked(|editing| editing.as_ref().map(|p| p.id)) == Some(id) {
                store.editing_product().set(None);
            }
        }
        Err(e) => log::error!("Failed to delete product {}: {}", id, e),
    }
}
