//! To-Do List App
//!
//! Main application component: wires up the store and controller
//! context, loads the persisted list on mount, and lays out the page.

use leptos::prelude::*;
use reactive_stores::Store;

use crate::components::{ClearListButton, EntryForm, TodoListView};
use crate::context::AppContext;
use crate::store::{AppState, AppStateStoreFields};

#[component]
pub fn App() -> impl IntoView {
    let store = Store::new(AppState::default());
    provide_context(store);

    let ctx = AppContext::new(store);
    provide_context(StoredValue::new_local(ctx.clone()));

    // Load persisted items once on mount, then draw
    Effect::new(move |_| {
        ctx.init();
    });

    view! {
        <main class="app-layout">
            <h1>"My To-Do List"</h1>

            <EntryForm />
            <ClearListButton />
            <TodoListView />

            <p id="confirmation" class="confirmation">
                {move || store.confirmation().get()}
            </p>
        </main>
    }
}
