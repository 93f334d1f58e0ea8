//! Frontend Models
//!
//! Data structures matching backend entities and request bodies.

use serde::{Deserialize, Deserializer, Serialize};

/// Category data structure (matches backend)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Category {
    pub id: u32,
    pub category_name: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub description: String,
}

/// Product data structure (matches backend)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    pub id: u32,
    pub product_name: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub unit_price: f64,
    #[serde(default)]
    pub category_id: Option<u32>,
}

/// Body for `POST /api/Category`
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NewCategory {
    pub category_name: String,
    pub description: String,
}

/// Body for `POST /api/Product`
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NewProduct {
    pub product_name: String,
    pub unit_price: f64,
    pub category_id: Option<u32>,
}

/// Body for requests that only carry an identifier
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct IdBody {
    pub id: u32,
}

/// Scratch fields of the "new category" form
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CategoryDraft {
    pub name: String,
    pub description: String,
}

impl CategoryDraft {
    pub fn to_request(&self) -> NewCategory {
        NewCategory {
            category_name: self.name.clone(),
            description: self.description.clone(),
        }
    }
}

/// Scratch fields of the "new product" form
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ProductDraft {
    pub name: String,
    pub unit_price: f64,
    pub category_id: Option<u32>,
}

impl ProductDraft {
    pub fn to_request(&self) -> NewProduct {
        NewProduct {
            product_name: self.name.clone(),
            unit_price: self.unit_price,
            category_id: self.category_id,
        }
    }
}

/// Parse a price input; anything that is not a finite number becomes 0
pub fn parse_price(input: &str) -> f64 {
    match input.trim().parse::<f64>() {
        Ok(value) if value.is_finite() => value,
        _ => 0.0,
    }
}

/// Parse a category selector value; empty or non-numeric means no category
pub fn parse_category_id(input: &str) -> Option<u32> {
    input.trim().parse().ok()
}

/// Resolve a category id to its display name
pub fn category_name(categories: &[Category], id: Option<u32>) -> Option<String> {
    let id = id?;
    categories
        .iter()
        .find(|category| category.id == id)
        .map(|category| category.category_name.clone())
}

fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}
