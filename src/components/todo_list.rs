//! To-Do List Component
//!
//! Renders the displayed item sequence as checkbox rows. Checking a row
//! is the removal affordance: the controller removes and persists right
//! away, and the row disappears with the deferred redraw.

use leptos::prelude::*;

use crate::context::use_app_context;
use crate::store::{use_app_store, AppStateStoreFields};

/// The rendered list of removable item rows
#[component]
pub fn TodoListView() -> impl IntoView {
    let ctx = StoredValue::new_local(use_app_context());
    let store = use_app_store();

    view! {
        <div id="listItems" class="list-items">
            <For
                each=move || store.items().get()
                key=|item| item.id()
                children=move |item| {
                    let ctx = ctx.get_value();
                    let id = item.id();
                    let checkbox_id = format!("item-{id}");

                    view! {
                        <div class="item">
                            <input
                                type="checkbox"
                                id=checkbox_id.clone()
                                tabindex="0"
                                on:click=move |_| ctx.remove_item(id)
                            />
                            <label for=checkbox_id>{item.text().to_string()}</label>
                        </div>
                    }
                }
            />
        </div>
    }
}
