//! Comment Board App
//!
//! Wires config, backend, pager and view state together and lays out the board.

use comment_pager::CommentPager;
use leptos::prelude::*;
use log::info;
use reactive_stores::Store;

use crate::backend::Backend;
use crate::components::{CommentForm, CommentList, PaginationBar};
use crate::config::AppConfig;
use crate::context::BoardContext;
use crate::prompt::BrowserPrompt;
use crate::store::{BoardState, BoardStateStoreFields, StoreRenderer};

#[component]
pub fn App(config: AppConfig) -> impl IntoView {
    let backend = Backend::from_config(&config);
    info!("Loading comments from {}", backend.describe());

    let state = Store::new(BoardState {
        source: backend.describe(),
        ..BoardState::default()
    });
    let pager = CommentPager::new(backend, StoreRenderer::new(state), BrowserPrompt, config.page_size);

    // Provide context to all children
    let board = BoardContext::new(state, pager);
    provide_context(board);

    // Initial load, then periodic refresh
    let interval_ms = config.refresh_interval_ms;
    Effect::new(move |_| {
        board.start_auto_refresh(interval_ms);
    });

    view! {
        <div class="comment-board">
            <h1>"Comments"</h1>

            <CommentForm />

            <CommentList />

            <PaginationBar />

            <p class="comment-source">{move || format!("Source: {}", state.source().get())}</p>
        </div>
    }
}
