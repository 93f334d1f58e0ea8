//! Category Actions

use leptos::prelude::*;

use crate::api::{self, ApiClient};
use crate::models::{Category, CategoryDraft};
use crate::store::{store_remove_category, CatalogStore, CatalogStateStoreFields};

/// Replace the category list with the backend's current list
pub async fn load_categories(client: &ApiClient, store: CatalogStore) {
    match api::list_categories(client).await {
        Ok(categories) => {
            log::info!("Loaded {} categories", categories.len());
            store.categories().set(categories);
        }
        Err(e) => log::error!("Failed to load categories: {}", e),
    }
}

/// Submit the "new category" form, then re-fetch the list.
///
/// Returns whether the backend accepted the new category; the draft is only
/// reset in that case.
pub async fn create_category(client: &ApiClient, store: CatalogStore) -> bool {
    let draft = store.new_category().get_untracked();

    match api::create_category(client, &draft.to_request()).await {
        Ok(_) => {
            store.new_category().set(CategoryDraft::default());
            load_categories(client, store).await;
            true
        }
        Err(e) => {
            log::error!("Failed to create category: {}", e);
            false
        }
    }
}

pub fn set_new_category_name(store: CatalogStore, name: String) {
    store.new_category().update(|draft| draft.name = name);
}

pub fn set_new_category_description(store: CatalogStore, description: String) {
    store.new_category().update(|draft| draft.description = description);
}

/// Copy a row into the edit buffer; the list itself stays untouched
pub fn begin_category_edit(store: CatalogStore, category: &Category) {
    store.editing_category().set(Some(category.clone()));
}

pub fn set_editing_category_name(store: CatalogStore, name: String) {
    store.editing_category().update(|editing| {
        if let Some(category) = editing {
            category.category_name = name;
        }
    });
}

pub fn set_editing_category_description(store: CatalogStore, description: String) {
    store.editing_category().update(|editing| {
        if let Some(category) = editing {
            category.description = description;
        }
    });
}

/// Discard the edit buffer without contacting the backend
pub fn cancel_category_edit(store: CatalogStore) {
    store.editing_category().set(None);
}

/// Send the edit buffer to the backend; on success clear it and re-fetch
pub async fn save_category_edit(client: &ApiClient, store: CatalogStore) {
    let Some(edited) = store.editing_category().get_untracked() else {
        return;
    };

    match api::update_category(client, &edited).await {
        Ok(_) => {
            // Another row may have entered edit mode while the request was in flight
            if store.editing_category().with_untracked(|editing| editing.as_ref().map(|c| c.id)) == Some(edited.id) {
                store.editing_category().set(None);
            }
            load_categories(client, store).await;
        }
        Err(e) => log::error!("Failed to update category {}: {}", edited.id, e),
    }
}

/// Delete on the backend, then drop the row locally (no re-fetch)
pub async fn delete_category(client: &ApiClient, store: CatalogStore, id: u32) {
    match api::delete_category(client, id).await {
        Ok(_) => {
            store_remove_category(&store, id);
            if store.editing_category().with_untracked(|editing| editing.as_ref().map(|c| c.id)) == Some(id) {
                store.editing_category().set(None);
            }
        }
        Err(e) => log::error!("Failed to delete category {}: {}", id, e),
    }
}
