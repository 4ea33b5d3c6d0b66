pub mod create_table;
pub mod drop_table;
pub mod helpers;
pub mod types;

pub use types::{BuiltQuery, DatabaseBackend};

use crate::action::{Migration, MigrationAction};
use crate::error::SchemaError;

/// Convert one migration action into the queries that realize it.
pub fn build_action_queries(action: &MigrationAction) -> Result<Vec<BuiltQuery>, SchemaError> {
    match action {
        MigrationAction::CreateTable {
            table,
            columns,
            constraints,
        } => Ok(vec![create_table::build_create_table(table, columns, constraints)?]),
        MigrationAction::DropTable { table } => Ok(vec![drop_table::build_drop_table(table)]),
    }
}

/// Convert a whole migration's `up` or `down` side into queries, in order.
pub fn build_migration_queries(
    migration: &Migration,
    direction: Direction,
) -> Result<Vec<BuiltQuery>, SchemaError> {
    let actions = match direction {
        Direction::Up => &migration.up,
        Direction::Down => &migration.down,
    };
    let mut queries = Vec::new();
    for action in actions {
        queries.extend(build_action_queries(action)?);
    }
    Ok(queries)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Up,
    Down,
}
