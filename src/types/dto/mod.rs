// Wire types - request and response bodies
pub mod common;
pub mod items;
