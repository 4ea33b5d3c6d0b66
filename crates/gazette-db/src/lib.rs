//! Persistence for the gazette blog: a thin CRUD store over sea-orm plus the
//! migration runner that brings a database up to the current schema.
//!
//! Every operation builds one sea-query statement and hands it to the
//! connection; no transactions, batching, or retries are layered on top of
//! what the engine provides.

pub mod error;
pub mod migrator;
pub mod store;

pub use error::StoreError;
pub use store::ArticleStore;
