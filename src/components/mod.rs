//! UI Components
//!
//! Reusable Leptos components.

mod category_form;
mod category_select;
mod category_table;
mod delete_confirm_button;
mod product_form;
mod product_table;

pub use category_form::CategoryForm;
pub use category_select::CategorySelect;
pub use category_table::CategoryPanel;
pub use delete_confirm_button::DeleteConfirmButton;
pub use product_form::ProductForm;
pub use product_table::ProductPanel;
