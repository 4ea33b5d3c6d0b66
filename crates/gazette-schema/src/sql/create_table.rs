use sea_query::{Alias, ForeignKey, Table, TableCreateStatement};

use crate::column::ColumnDef;
use crate::constraint::TableConstraint;
use crate::error::SchemaError;

use super::helpers::{build_sea_column_def, to_sea_fk_action};
use super::types::BuiltQuery;

pub fn build_create_table(
    table: &str,
    columns: &[ColumnDef],
    constraints: &[TableConstraint],
) -> Result<BuiltQuery, SchemaError> {
    let mut stmt: TableCreateStatement = Table::create().table(Alias::new(table)).to_owned();

    for column in columns {
        let mut col = build_sea_column_def(table, column)?;
        stmt = stmt.col(&mut col).to_owned();
    }

    for constraint in constraints {
        match constraint {
            TableConstraint::ForeignKey {
                name,
                columns: fk_cols,
                ref_table,
                ref_columns,
                on_delete,
                on_update,
            } => {
                let mut fk = ForeignKey::create();
                if let Some(n) = name {
                    fk = fk.name(n).to_owned();
                }
                fk = fk.from_tbl(Alias::new(table)).to_owned();
                for col in fk_cols {
                    fk = fk.from_col(Alias::new(col)).to_owned();
                }
                fk = fk.to_tbl(Alias::new(ref_table)).to_owned();
                for col in ref_columns {
                    fk = fk.to_col(Alias::new(col)).to_owned();
                }
                if let Some(action) = on_delete {
                    fk = fk.on_delete(to_sea_fk_action(action)).to_owned();
                }
                if let Some(action) = on_update {
                    fk = fk.on_update(to_sea_fk_action(action)).to_owned();
                }
                stmt = stmt.foreign_key(&mut fk).to_owned();
            }
        }
    }

    Ok(BuiltQuery::CreateTable(Box::new(stmt)))
}
