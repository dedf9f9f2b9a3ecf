//! Entry Form Component
//!
//! Single-field form for adding a new item. The draft text lives in the
//! global store so the controller can reset it after each redraw.

use leptos::prelude::*;

use crate::context::use_app_context;
use crate::store::{use_app_store, AppStateStoreFields};
use crate::view::ENTRY_FIELD_ID;

/// Form for adding a new to-do entry
#[component]
pub fn EntryForm() -> impl IntoView {
    let ctx = use_app_context();
    let store = use_app_store();

    let submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        // Trimming and the empty-entry no-op happen in the controller.
        let raw = store.entry_draft().get_untracked();
        ctx.submit_entry(&raw);
    };

    view! {
        <form id="itemEntryForm" class="item-entry-form" on:submit=submit>
            <input
                id=ENTRY_FIELD_ID
                type="text"
                placeholder="Add a to-do..."
                autocomplete="off"
                prop:value=move || store.entry_draft().get()
                on:input=move |ev| store.entry_draft().set(event_target_value(&ev))
            />
            <button type="submit">"Add"</button>
        </form>
    }
}
