//! UI Components
//!
//! Leptos components for the comment board.

mod comment_form;
mod comment_item;
mod comment_list;
mod pagination_bar;

pub use comment_form::CommentForm;
pub use comment_item::CommentItem;
pub use comment_list::CommentList;
pub use pagination_bar::PaginationBar;
