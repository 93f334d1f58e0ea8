//! New Product Form Component

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::actions;
use crate::components::CategorySelect;
use crate::context::use_app_context;
use crate::store::CatalogStateStoreFields;

/// Form for creating a product
#[component]
pub fn ProductForm() -> impl IntoView {
    let ctx = use_app_context();
    let store = ctx.store;

    // Raw price text; the draft only keeps the parsed number
    let (price_text, set_price_text) = signal(String::new());

    let on_submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        let client = ctx.client();
        spawn_local(async move {
            if actions::create_product(&client, store).await {
                set_price_text.set(String::new());
            }
        });
    };

    let selected_category = Signal::derive(move || store.new_product().get().category_id);

    view! {
        <form class="new-product-form" on:submit=on_submit>
            <input
                type="text"
                placeholder="Product name"
                prop:value=move || store.new_product().get().name
                on:input=move |ev| actions::set_new_product_name(store, event_target_value(&ev))
            />
            <input
                type="number"
                step="0.01"
                placeholder="Unit price"
                prop:value=move || price_text.get()
                on:input=move |ev| {
                    let value = event_target_value(&ev);
                    actions::set_new_product_price(store, &value);
                    set_price_text.set(value);
                }
            />
            <CategorySelect
                selected=selected_category
                on_change=move |value: String| actions::set_new_product_category(store, &value)
            />
            <button type="submit">"Add"</button>
        </form>
    }
}
