use sea_query::{
    Alias, ColumnDef as SeaColumnDef, ForeignKeyAction, MysqlQueryBuilder, PostgresQueryBuilder,
    SchemaStatementBuilder, SimpleExpr, SqliteQueryBuilder,
};

use crate::column::{ColumnDef, ColumnType};
use crate::constraint::ReferenceAction;
use crate::error::SchemaError;

use super::types::DatabaseBackend;

/// Render a schema statement for a specific backend.
pub fn build_schema_statement<T: SchemaStatementBuilder>(
    stmt: &T,
    backend: DatabaseBackend,
) -> String {
    match backend {
        DatabaseBackend::Postgres => stmt.to_string(PostgresQueryBuilder),
        DatabaseBackend::MySql => stmt.to_string(MysqlQueryBuilder),
        DatabaseBackend::Sqlite => stmt.to_string(SqliteQueryBuilder),
    }
}

/// Apply a schema ColumnType to a sea_query ColumnDef.
pub fn apply_column_type(col: &mut SeaColumnDef, ty: &ColumnType) {
    match ty {
        ColumnType::BigInt => {
            col.big_integer();
        }
        ColumnType::Integer => {
            col.integer();
        }
        ColumnType::Text => {
            col.text();
        }
        ColumnType::Timestamp => {
            col.timestamp();
        }
        ColumnType::Varchar { length } => {
            col.string_len(*length);
        }
    }
}

/// Convert a schema ReferenceAction to the sea_query ForeignKeyAction.
pub fn to_sea_fk_action(action: &ReferenceAction) -> ForeignKeyAction {
    match action {
        ReferenceAction::Cascade => ForeignKeyAction::Cascade,
        ReferenceAction::Restrict => ForeignKeyAction::Restrict,
        ReferenceAction::SetNull => ForeignKeyAction::SetNull,
        ReferenceAction::SetDefault => ForeignKeyAction::SetDefault,
        ReferenceAction::NoAction => ForeignKeyAction::NoAction,
    }
}

/// Build a sea_query ColumnDef from a schema ColumnDef.
///
/// Primary key and auto-increment are emitted inline on the column so the
/// SQLite builder produces `INTEGER PRIMARY KEY AUTOINCREMENT`.
pub fn build_sea_column_def(table: &str, column: &ColumnDef) -> Result<SeaColumnDef, SchemaError> {
    if column.auto_increment && !column.r#type.supports_auto_increment() {
        return Err(SchemaError::AutoIncrementUnsupported {
            table: table.to_string(),
            column: column.name.clone(),
        });
    }

    let mut col = SeaColumnDef::new(Alias::new(&column.name));
    apply_column_type(&mut col, &column.r#type);

    if !column.nullable {
        col.not_null();
    }
    if column.primary_key {
        col.primary_key();
    }
    if column.auto_increment {
        col.auto_increment();
    }
    if let Some(default) = &column.default {
        col.default(Into::<SimpleExpr>::into(sea_query::Expr::cust(
            default.clone(),
        )));
    }

    Ok(col)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(ColumnType::BigInt)]
    #[case(ColumnType::Integer)]
    #[case(ColumnType::Text)]
    #[case(ColumnType::Timestamp)]
    #[case(ColumnType::Varchar { length: 255 })]
    fn column_type_conversion_covers_all_branches(#[case] ty: ColumnType) {
        let mut col = SeaColumnDef::new(Alias::new("t"));
        apply_column_type(&mut col, &ty);
    }

    #[rstest]
    #[case(ReferenceAction::Cascade, ForeignKeyAction::Cascade)]
    #[case(ReferenceAction::Restrict, ForeignKeyAction::Restrict)]
    #[case(ReferenceAction::SetNull, ForeignKeyAction::SetNull)]
    #[case(ReferenceAction::SetDefault, ForeignKeyAction::SetDefault)]
    #[case(ReferenceAction::NoAction, ForeignKeyAction::NoAction)]
    fn reference_action_conversion(
        #[case] action: ReferenceAction,
        #[case] expected: ForeignKeyAction,
    ) {
        assert_eq!(to_sea_fk_action(&action), expected);
    }

    #[test]
    fn auto_increment_on_text_column_is_rejected() {
        let column = ColumnDef {
            name: "title".to_string(),
            r#type: ColumnType::Text,
            nullable: true,
            default: None,
            primary_key: false,
            auto_increment: true,
        };
        let err = build_sea_column_def("articles", &column).unwrap_err();
        assert!(matches!(
            err,
            SchemaError::AutoIncrementUnsupported { .. }
        ));
    }
}
