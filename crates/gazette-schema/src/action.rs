use serde::{Deserialize, Serialize};

use crate::column::ColumnDef;
use crate::constraint::TableConstraint;

/// A named, reversible schema revision.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Migration {
    pub name: String,
    pub up: Vec<MigrationAction>,
    pub down: Vec<MigrationAction>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum MigrationAction {
    #[serde(rename_all = "camelCase")]
    CreateTable {
        table: String,
        columns: Vec<ColumnDef>,
        constraints: Vec<TableConstraint>,
    },
    #[serde(rename_all = "camelCase")]
    DropTable { table: String },
}
