use sea_query::{Alias, Table};

use super::types::BuiltQuery;

pub fn build_drop_table(table: &str) -> BuiltQuery {
    let stmt = Table::drop().table(Alias::new(table)).to_owned();
    BuiltQuery::DropTable(Box::new(stmt))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sql::types::DatabaseBackend;
    use rstest::rstest;

    #[rstest]
    #[case::postgres(DatabaseBackend::Postgres, "DROP TABLE \"comments\"")]
    #[case::mysql(DatabaseBackend::MySql, "DROP TABLE `comments`")]
    #[case::sqlite(DatabaseBackend::Sqlite, "DROP TABLE \"comments\"")]
    fn drop_table_renders_per_backend(#[case] backend: DatabaseBackend, #[case] expected: &str) {
        let sql = build_drop_table("comments").build(backend);
        assert!(
            sql.contains(expected),
            "Expected SQL to contain '{}', got: {}",
            expected,
            sql
        );
    }
}
