//! Category Select Component
//!
//! `<select>` over the loaded categories, used by the product forms.

use leptos::prelude::*;

use crate::context::use_app_context;
use crate::store::CatalogStateStoreFields;

/// Category dropdown; the empty option means "no category"
#[component]
pub fn CategorySelect(
    selected: Signal<Option<u32>>,
    #[prop(into)] on_change: Callback<String>,
) -> impl IntoView {
    let store = use_app_context().store;

    view! {
        <select
            class="category-select"
            on:change=move |ev| on_change.run(event_target_value(&ev))
        >
            <option value="" prop:selected=move || selected.get().is_none()>"(no category)"</option>
            {move || store.categories().get().into_iter().map(|category| {
                let id = category.id;
                view! {
                    <option value=id.to_string() prop:selected=move || selected.get() == Some(id)>
                        {category.category_name}
                    </option>
                }
            }).collect_view()}
        </select>
    }
}
