//! linksnip — builds link and folder-of-links snippets from form input.
//!
//! The library holds the whole core: the folder item store, the snippet
//! serializer, the preview projection, and the session's generator settings.
//! The `linksnip` and `linksnip-rpc` binaries are thin front ends over
//! [`app::App`].

pub mod app;
pub mod managers;
pub mod rpc_handler;
pub mod services;
pub mod types;
