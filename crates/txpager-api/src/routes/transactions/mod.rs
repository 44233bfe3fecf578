//! Transaction routes - record list, detail and creation
//!
//! Structure:
//! - api.rs: JSON API endpoints

pub mod api;

pub use api::{api_create_transaction, api_transaction_detail, api_transactions};
