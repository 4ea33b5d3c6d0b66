//! Schema definitions for the gazette blog.
//!
//! Two tables (`articles`, `comments`) and the foreign key between them are
//! declared as data; [`sql`] converts migration actions into backend-specific
//! SQL through sea-query. Nothing in this crate talks to a database.

pub mod action;
pub mod column;
pub mod constraint;
pub mod error;
pub mod migrations;
pub mod sql;

pub use action::{Migration, MigrationAction};
pub use column::{ColumnDef, ColumnType};
pub use constraint::{ReferenceAction, TableConstraint};
pub use error::SchemaError;
pub use sql::{
    BuiltQuery, DatabaseBackend, Direction, build_action_queries, build_migration_queries,
};
