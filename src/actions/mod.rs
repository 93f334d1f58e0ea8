//! Catalog Actions
//!
//! Each action reads form state from the store, performs one backend call
//! and updates the store from the result. Failures are logged and leave the
//! store untouched.
//!
//! Create and update re-fetch the whole list afterwards; delete drops the
//! row locally without a re-fetch.

mod category;
mod product;

pub use category::*;
pub use product::*;

#[cfg(test)]
pub(crate) mod fixtures {
    use leptos::prelude::*;
    use serde_json::{json, Value};

    use crate::models::{Category, Product};
    use crate::store::{CatalogState, CatalogStore};

    pub fn store_with(state: CatalogState) -> (Owner, CatalogStore) {
        let owner = Owner::new();
        owner.set();
        let store = CatalogStore::new(state);
        (owner, store)
    }

    pub fn category(id: u32, name: &str) -> Category {
        Category { id, category_name: name.to_string(), description: String::new() }
    }

    pub fn product(id: u32, name: &str, unit_price: f64, category_id: Option<u32>) -> Product {
        Product { id, product_name: name.to_string(), unit_price, category_id }
    }

    pub fn categories_json() -> Value {
        json!([
            { "id": 1, "categoryName": "Beverages", "description": "Soft drinks, coffees, teas" },
            { "id": 2, "categoryName": "Condiments", "description": "Sweet and savory sauces" }
        ])
    }

    pub fn products_json() -> Value {
        json!([
            { "id": 1, "productName": "Chai", "unitPrice": 18.0, "categoryId": 1 },
            { "id": 2, "productName": "Aniseed Syrup", "unitPrice": 10.0, "categoryId": 2 }
        ])
    }
}
