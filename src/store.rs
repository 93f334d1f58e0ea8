//! Catalog State Store
//!
//! Uses Leptos reactive_stores for fine-grained reactivity: each list, edit
//! buffer and draft is its own tracked field.

use leptos::prelude::*;
use reactive_stores::Store;

use crate::models::{Category, CategoryDraft, Product, ProductDraft};

/// Client-side catalog state with field-level reactivity
#[derive(Clone, Debug, Default, Store)]
pub struct CatalogState {
    /// Categories as last fetched from the backend
    pub categories: Vec<Category>,
    /// Detached copy of the category being edited
    pub editing_category: Option<Category>,
    /// "New category" form fields
    pub new_category: CategoryDraft,
    /// Products as last fetched from the backend
    pub products: Vec<Product>,
    /// Detached copy of the product being edited
    pub editing_product: Option<Product>,
    /// "New product" form fields
    pub new_product: ProductDraft,
}

/// Type alias for the store
pub type CatalogStore = Store<CatalogState>;

// ========================
// Store Helper Functions
// ========================

/// Remove a category from the store by ID
pub fn store_remove_category(store: &CatalogStore, category_id: u32) {
    store.categories().write().retain(|category| category.id != category_id);
}

/// Remove a product from the store by ID
pub fn store_remove_product(store: &CatalogStore, product_id: u32) {
    store.products().write().retain(|product| product.id != product_id);
}

/// Whether the given category is currently in the edit buffer
pub fn is_editing_category(store: &CatalogStore, category_id: u32) -> bool {
    store
        .editing_category()
        .with(|editing| editing.as_ref().map(|c| c.id) == Some(category_id))
}

/// Whether the given product is currently in the edit buffer
pub fn is_editing_product(store: &CatalogStore, product_id: u32) -> bool {
    store
        .editing_product()
        .with(|editing| editing.as_ref().map(|p| p.id) == Some(product_id))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn category(id: u32, name: &str) -> Category {
        Category { id, category_name: name.to_string(), description: String::new() }
    }

    #[test]
    fn test_remove_category_keeps_others() {
        let owner = Owner::new();
        owner.set();

        let store = CatalogStore::new(CatalogState {
            categories: vec![category(1, "Beverages"), category(2, "Condiments")],
            ..Default::default()
        });

        store_remove_category(&store, 1);
        assert_eq!(store.categories().get_untracked(), vec![category(2, "Condiments")]);

        // Unknown ids are a no-op
        store_remove_category(&store, 99);
        assert_eq!(store.categories().get_untracked().len(), 1);
    }

    #[test]
    fn test_is_editing_category() {
        let owner = Owner::new();
        owner.set();

        let store = CatalogStore::new(CatalogState::default());
        assert!(!is_editing_category(&store, 1));

        store.editing_category().set(Some(category(1, "Beverages")));
        assert!(is_editing_category(&store, 1));
        assert!(!is_editing_category(&store, 2));
    }
}
