//! Route modules for the API server
//!
//! - transactions: record listing, lookup and creation
//! - pages: navigation of the current session's page
//! - view: JSON shapes shared by both

pub mod pages;
pub mod transactions;
pub mod view;
