//! Page-level views mounted by the routes

pub mod posts;
pub mod wizard;
