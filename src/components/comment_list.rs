//! Comment List Component
//!
//! Current page of comments, or an empty-state row.

use leptos::prelude::*;

use super::CommentItem;
use crate::context::use_board;
use crate::store::BoardStateStoreFields;

#[component]
pub fn CommentList() -> impl IntoView {
    let state = use_board().state;
    let is_empty = move || state.comments().with(|comments| comments.is_empty());

    view! {
        <ul class="comment-list">
            <Show
                when=move || !is_empty()
                fallback=|| view! { <li class="no-comment">"No comments yet"</li> }
            >
                <For
                    each=move || state.comments().get()
                    key=|comment| comment.id
                    children=move |comment| view! { <CommentItem comment=comment /> }
                />
            </Show>
        </ul>
    }
}
