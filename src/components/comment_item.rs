//! Comment Item Component

use comment_pager::Comment;
use leptos::prelude::*;

use crate::context::use_board;

/// One comment row with its delete button
#[component]
pub fn CommentItem(comment: Comment) -> impl IntoView {
    let board = use_board();
    let id = comment.id;

    view! {
        <li class="comment-item" data-id=id.to_string()>
            <div class="comment-content">
                <span class="user-name">{comment.author}</span>
                <p>{comment.body}</p>
            </div>
            <button class="delete-button" on:click=move |_| board.remove(id)>
                "Delete"
            </button>
        </li>
    }
}
