//! Product Table Component
//!
//! Lists products with their category name; one row at a time can switch
//! into edit mode.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::actions;
use crate::components::{CategorySelect, DeleteConfirmButton, ProductForm};
use crate::context::use_app_context;
use crate::models::{category_name, Product};
use crate::store::{is_editing_product, CatalogStateStoreFields};

/// Product section: create form plus table
#[component]
pub fn ProductPanel() -> impl IntoView {
    view! {
        <section class="catalog-panel products">
            <h2>"Products"</h2>
            <ProductForm />
            <ProductTable />
        </section>
    }
}

#[component]
fn ProductTable() -> impl IntoView {
    let store = use_app_context().store;

    view! {
        <table class="catalog-table">
            <thead>
                <tr>
                    <th>"ID"</th>
                    <th>"Name"</th>
                    <th>"Unit price"</th>
                    <th>"Category"</th>
                    <th></th>
                </tr>
            </thead>
            <tbody>
                {move || store.products().get().into_iter().map(|product| {
                    view! { <ProductRow product=product /> }
                }).collect_view()}
            </tbody>
        </table>
    }
}

#[component]
fn ProductRow(product: Product) -> impl IntoView {
    let ctx = use_app_context();
    let store = ctx.store;
    let id = product.id;

    let editing = Memo::new(move |_| is_editing_product(&store, id));

    let on_save = move |_| {
        let client = ctx.client();
        spawn_local(async move {
            actions::save_product_edit(&client, store).await;
        });
    };

    let on_delete = move |_: ()| {
        let client = ctx.client();
        spawn_local(async move {
            actions::delete_product(&client, store, id).await;
        });
    };

    move || {
        if editing.get() {
            let initial_price = store
                .editing_product()
                .with_untracked(|editing| editing.as_ref().map(|p| p.unit_price.to_string()))
                .unwrap_or_default();
            let (price_text, set_price_text) = signal(initial_price);
            let selected_category = Signal::derive(move || store.editing_product().get().and_then(|p| p.category_id));

            view! {
                <tr class="catalog-row editing">
                    <td>{id}</td>
                    <td>
                        <input
                            type="text"
                            prop:value=move || store.editing_product().get().map(|p| p.product_name).unwrap_or_default()
                            on:input=move |ev| actions::set_editing_product_name(store, event_target_value(&ev))
                        />
                    </td>
                    <td>
                        <input
                            type="number"
                            step="0.01"
                            prop:value=move || price_text.get()
                            on:input=move |ev| {
                                let value = event_target_value(&ev);
                                actions::set_editing_product_price(store, &value);
                                set_price_text.set(value);
                            }
                        />
                    </td>
                    <td>
                        <CategorySelect
                            selected=selected_category
                            on_change=move |value: String| actions::set_editing_product_category(store, &value)
                        />
                    </td>
                    <td class="row-actions">
                        <button type="button" class="save-btn" on:click=on_save>"Save"</button>
                        <button type="button" class="cancel-btn" on:click=move |_| actions::cancel_product_edit(store)>"Cancel"</button>
                    </td>
                </tr>
            }.into_any()
        } else {
            let product = product.clone();
            let name = product.product_name.clone();
            let price = format!("{:.2}", product.unit_price);
            let category_id = product.category_id;
            view! {
                <tr class="catalog-row">
                    <td>{id}</td>
                    <td>{name}</td>
                    <td class="numeric">{price}</td>
                    <td>
                        {move || category_name(&store.categories().get(), category_id).unwrap_or_else(|| "—".to_string())}
                    </td>
                    <td class="row-actions">
                        <button type="button" class="edit-btn" on:click=move |_| actions::begin_product_edit(store, &product)>"Edit"</button>
                        <DeleteConfirmButton button_class="delete-btn" on_confirm=on_delete />
                    </td>
                </tr>
            }.into_any()
        }
    }
}
