//! Page routes - the session's current page and navigation commands
//!
//! Navigation that points outside the collection is ignored and answered
//! with the unchanged page.

pub mod api;

pub use api::{
    api_go_to_item,
    api_go_to_page,
    api_next_page,
    api_page,
    api_previous_page,
    api_set_direction,
    api_set_page_size,
};
