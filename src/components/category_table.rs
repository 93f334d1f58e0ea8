//! Category Table Component
//!
//! Lists categories; one row at a time can switch into edit mode.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::actions;
use crate::components::{CategoryForm, DeleteConfirmButton};
use crate::context::use_app_context;
use crate::models::Category;
use crate::store::{is_editing_category, CatalogStateStoreFields};

/// Category section: create form plus table
#[component]
pub fn CategoryPanel() -> impl IntoView {
    view! {
        <section class="catalog-panel categories">
            <h2>"Categories"</h2>
            <CategoryForm />
            <CategoryTable />
        </section>
    }
}

#[component]
fn CategoryTable() -> impl IntoView {
    let store = use_app_context().store;

    view! {
        <table class="catalog-table">
            <thead>
                <tr>
                    <th>"ID"</th>
                    <th>"Name"</th>
                    <th>"Description"</th>
                    <th></th>
                </tr>
            </thead>
            <tbody>
                {move || store.categories().get().into_iter().map(|category| {
                    view! { <CategoryRow category=category /> }
                }).collect_view()}
            </tbody>
        </table>
    }
}

#[component]
fn CategoryRow(category: Category) -> impl IntoView {
    let ctx = use_app_context();
    let store = ctx.store;
    let id = category.id;

    // Only flips when this row enters or leaves edit mode, not on every keystroke
    let editing = Memo::new(move |_| is_editing_category(&store, id));

    let on_save = move |_| {
        let client = ctx.client();
        spawn_local(async move {
            actions::save_category_edit(&client, store).await;
        });
    };

    let on_delete = move |_: ()| {
        let client = ctx.client();
        spawn_local(async move {
            actions::delete_category(&client, store, id).await;
        });
    };

    move || {
        if editing.get() {
            view! {
                <tr class="catalog-row editing">
                    <td>{id}</td>
                    <td>
                        <input
                            type="text"
                            prop:value=move || store.editing_category().get().map(|c| c.category_name).unwrap_or_default()
                            on:input=move |ev| actions::set_editing_category_name(store, event_target_value(&ev))
                        />
                    </td>
                    <td>
                        <input
                            type="text"
                            prop:value=move || store.editing_category().get().map(|c| c.description).unwrap_or_default()
                            on:input=move |ev| actions::set_editing_category_description(store, event_target_value(&ev))
                        />
                    </td>
                    <td class="row-actions">
                        <button type="button" class="save-btn" on:click=on_save>"Save"</button>
                        <button type="button" class="cancel-btn" on:click=move |_| actions::cancel_category_edit(store)>"Cancel"</button>
                    </td>
                </tr>
            }.into_any()
        } else {
            let category = category.clone();
            let name = category.category_name.clone();
            let description = category.description.clone();
            view! {
                <tr class="catalog-row">
                    <td>{id}</td>
                    <td>{name}</td>
                    <td>{description}</td>
                    <td class="row-actions">
                        <button type="button" class="edit-btn" on:click=move |_| actions::begin_category_edit(store, &category)>"Edit"</button>
                        <DeleteConfirmButton button_class="delete-btn" on_confirm=on_delete />
                    </td>
                </tr>
            }.into_any()
        }
    }
}
