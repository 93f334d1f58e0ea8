//! New Category Form Component

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::actions;
use crate::context::use_app_context;
use crate::store::CatalogStateStoreFields;

/// Form for creating a category
#[component]
pub fn CategoryForm() -> impl IntoView {
    let ctx = use_app_context();
    let store = ctx.store;

    let on_submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        let client = ctx.client();
        spawn_local(async move {
            actions::create_category(&client, store).await;
        });
    };

    view! {
        <form class="new-category-form" on:submit=on_submit>
            <input
                type="text"
                placeholder="Category name"
                prop:value=move || store.new_category().get().name
                on:input=move |ev| actions::set_new_category_name(store, event_target_value(&ev))
            />
            <input
                type="text"
                placeholder="Description"
                prop:value=move || store.new_category().get().description
                on:input=move |ev| actions::set_new_category_description(store, event_target_value(&ev))
            />
            <button type="submit">"Add"</button>
        </form>
    }
}
