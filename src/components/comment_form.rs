//! Comment Form Component
//!
//! Name and comment inputs with a submit button the pager disables while
//! a submit is in flight.

use leptos::prelude::*;

use crate::context::use_board;
use crate::store::BoardStateStoreFields;

/// Form for adding a comment
#[component]
pub fn CommentForm() -> impl IntoView {
    let board = use_board();
    let state = board.state;

    let on_submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        board.submit();
    };

    view! {
        <form class="comment-form" on:submit=on_submit>
            <input
                type="text"
                class="name-input"
                placeholder="Your name"
                prop:value=move || state.draft_author().get()
                on:input=move |ev| state.draft_author().set(event_target_value(&ev))
            />
            <textarea
                class="content-input"
                placeholder="Write a comment..."
                prop:value=move || state.draft_body().get()
                on:input=move |ev| state.draft_body().set(event_target_value(&ev))
            ></textarea>
            <button
                type="submit"
                class="submit-button"
                disabled=move || !state.submit_enabled().get()
            >
                "Submit"
            </button>
        </form>
    }
}
