//! Pagination Bar Component
//!
//! Previous/next buttons and the page indicator.

use leptos::prelude::*;

use crate::context::use_board;
use crate::store::BoardStateStoreFields;

#[component]
pub fn PaginationBar() -> impl IntoView {
    let board = use_board();
    let state = board.state;

    let indicator = move || {
        format!(
            "Page {} / {}",
            state.current_page().get(),
            state.page_count().get().max(1)
        )
    };

    view! {
        <div class="pagination">
            <button
                id="prev-page"
                disabled=move || !state.prev_enabled().get()
                on:click=move |_| board.prev_page()
            >
                "Previous"
            </button>
            <span class="page-indicator">{indicator}</span>
            <button
                id="next-page"
                disabled=move || !state.next_enabled().get()
                on:click=move |_| board.next_page()
            >
                "Next"
            </button>
        </div>
    }
}
