//! HTTP surface of the gazette: routing, handlers, identity cookie,
//! method override, and embedded templates.

pub mod app;
pub mod config;
pub mod error;
pub mod handlers;
pub mod identity;
pub mod method_override;
pub mod templates;
