/// Database backend for SQL generation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DatabaseBackend {
    Postgres,
    MySql,
    Sqlite,
}

/// A built schema statement that can be rendered for any backend.
#[derive(Debug, Clone)]
pub enum BuiltQuery {
    CreateTable(Box<sea_query::TableCreateStatement>),
    DropTable(Box<sea_query::TableDropStatement>),
}

impl BuiltQuery {
    /// Render the SQL string for the given backend.
    pub fn build(&self, backend: DatabaseBackend) -> String {
        match self {
            BuiltQuery::CreateTable(stmt) => {
                crate::sql::helpers::build_schema_statement(stmt.as_ref(), backend)
            }
            BuiltQuery::DropTable(stmt) => {
                crate::sql::helpers::build_schema_statement(stmt.as_ref(), backend)
            }
        }
    }
}
