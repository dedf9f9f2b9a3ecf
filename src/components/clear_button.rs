//! Clear List Button Component

use leptos::prelude::*;

use crate::context::use_app_context;

/// Button that clears the whole list after a confirm prompt
#[component]
pub fn ClearListButton() -> impl IntoView {
    let ctx = use_app_context();

    view! {
        <button
            id="clearItems"
            type="button"
            class="clear-items"
            on:click=move |_| ctx.clear_list()
        >
            "Clear List"
        </button>
    }
}
